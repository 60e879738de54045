//! Page context for the portfolio.
//!
//! The app builds one [`PageController`] and one [`ThemeStore`] at startup
//! and provides them to all components via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut page = use_page();
//! page.write().open_project("beat-by-beat");
//! ```

use std::sync::Arc;
use std::time::Instant;

use dioxus::prelude::*;
use portfolio_core::{
    Catalog, MemoryStore, PageController, PortfolioConfig, PreferenceStore, Storage, ThemeStore,
};

/// Milliseconds since the page started; the logical clock handed to the
/// page scheduler.
#[derive(Clone, Copy, Debug)]
pub struct PageClock {
    started: Instant,
}

impl PageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// Build the page controller, falling back to the built-in catalog when
/// the configured one cannot be read.
pub fn build_page(config: &PortfolioConfig) -> PageController {
    let catalog = match Catalog::load_or_builtin(config.catalog_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog, using built-in: {}", e);
            Catalog::builtin().unwrap_or_else(|e| {
                tracing::error!("Built-in catalog is invalid: {}", e);
                Catalog::default()
            })
        }
    };
    tracing::info!(projects = catalog.len(), "Catalog loaded");
    PageController::new(catalog, config)
}

/// Open the preferences database, or keep preferences in memory for this
/// session when it cannot be opened.
pub fn build_theme(config: &PortfolioConfig, prefers_dark: bool) -> ThemeStore {
    let store: Arc<dyn PreferenceStore> = match Storage::new(config.preferences_path()) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!("Preferences unavailable, theme will not persist: {}", e);
            Arc::new(MemoryStore::new())
        }
    };
    ThemeStore::load(store, prefers_dark)
}

/// Hook to access the page controller.
pub fn use_page() -> Signal<PageController> {
    use_context::<Signal<PageController>>()
}

pub fn use_theme() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}

pub fn use_clock() -> PageClock {
    use_context::<PageClock>()
}
