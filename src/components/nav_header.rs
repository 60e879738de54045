//! Navigation Header Component
//!
//! Brand, section links, the theme toggle and, on narrow windows, the
//! menu toggle that slides the links in.

use dioxus::prelude::*;
use portfolio_core::Section;
use portfolio_ui::IconButton;

use crate::context::{use_page, use_theme};

/// Scroll a section into view by element id.
pub fn scroll_to(section: Section) {
    let _ = document::eval(&format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        section.id()
    ));
}

/// Navigation Header component
///
/// - Left: name in the brand font
/// - Center: one link per page section, current one highlighted
/// - Right: theme toggle, then the menu toggle (narrow windows only)
#[component]
pub fn NavHeader() -> Element {
    let mut page = use_page();
    let mut theme = use_theme();

    let current = page.read().section();
    let menu_open = page.read().menu_open();
    let theme_icon = theme.read().current().toggle_icon();

    let on_theme = move |_| {
        if let Err(e) = theme.write().toggle() {
            tracing::error!("Failed to save theme preference: {}", e);
        }
    };

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                a {
                    class: "nav-brand",
                    onclick: move |_| {
                        page.write().navigate(Section::Home);
                        scroll_to(Section::Home);
                    },
                    "✨ Portfolio"
                }

                ul { class: if menu_open { "nav-menu active" } else { "nav-menu" },
                    for section in Section::all().iter().copied() {
                        li { key: "{section.id()}",
                            a {
                                class: if section == current { "nav-link active" } else { "nav-link" },
                                onclick: move |_| {
                                    page.write().navigate(section);
                                    scroll_to(section);
                                },
                                "{section.label()}"
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    IconButton {
                        onclick: on_theme,
                        aria_label: "Toggle theme".to_string(),
                        class: "theme-toggle".to_string(),
                        span { class: "theme-icon", "{theme_icon}" }
                    }
                    IconButton {
                        onclick: move |_| {
                            page.write().toggle_menu();
                        },
                        aria_label: "Toggle menu".to_string(),
                        class: if menu_open { "mobile-toggle active".to_string() } else { "mobile-toggle".to_string() },
                        span { class: "bar" }
                        span { class: "bar" }
                        span { class: "bar" }
                    }
                }
            }
        }
    }
}
