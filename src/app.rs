use dioxus::prelude::*;

use crate::context::{build_page, build_theme, PageClock};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Reports the system color scheme now and on every change.
const COLOR_SCHEME_WATCH: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
dioxus.send(query.matches);
query.addEventListener('change', (e) => dioxus.send(e.matches));
"#;

/// Application routes.
///
/// - `/` - The single portfolio page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, page and theme context, the scheduler tick
/// loop, and routing.
#[component]
pub fn App() -> Element {
    let config = crate::get_config();
    let tick_interval = config.tick_interval();

    let clock = use_hook(PageClock::start);
    let mut page = use_signal(|| build_page(&config));
    let mut theme = use_signal(|| build_theme(&config, false));

    use_context_provider(|| clock);
    use_context_provider(|| page);
    use_context_provider(|| theme);

    // Single driver for every deferred page action
    use_future(move || async move {
        let mut interval = tokio::time::interval(tick_interval);
        loop {
            interval.tick().await;
            let now = clock.now_ms();
            // Skip the write unless something is due
            if !page.peek().next_deadline().is_some_and(|at| at <= now) {
                continue;
            }
            let ran = page.write().tick(now);
            if ran > 0 {
                tracing::trace!(ran, "Scheduler tick");
            }
        }
    });

    use_future(move || async move {
        let mut watch = document::eval(COLOR_SCHEME_WATCH);
        loop {
            match watch.recv::<bool>().await {
                Ok(prefers_dark) => {
                    if theme.write().system_changed(prefers_dark) {
                        tracing::debug!(prefers_dark, "Following system theme");
                    }
                }
                Err(e) => {
                    tracing::debug!("Color scheme watch ended: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
