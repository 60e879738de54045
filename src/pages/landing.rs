//! Landing page - the whole portfolio on one scrolling page.

use dioxus::prelude::*;
use portfolio_core::Section;

use crate::components::{
    ContactSection, InterestsSection, NavHeader, ProjectGrid, ProjectModal,
};
use crate::components::nav_header::scroll_to;
use crate::context::{use_page, use_theme};

/// (year, title, text)
const JOURNEY: &[(&str, &str, &str)] = &[
    ("2021", "First lines of code", "A school club, a borrowed laptop and a very broken calculator app."),
    ("2022", "First website", "A page about my favourite bands, rebuilt three times that summer."),
    ("2023", "Shipping things", "Beat by Beat went live and real people started using something I made."),
    ("2024", "Growing up the stack", "Databases, servers and the joy of fixing my own bugs in production."),
];

#[component]
pub fn Landing() -> Element {
    let mut page = use_page();
    let theme = use_theme();

    // Lock the document scroller itself so the offset is kept
    use_effect(move || {
        let overflow = page.read().document_overflow();
        let _ = document::eval(&format!(
            "document.documentElement.style.overflow = '{0}'; document.body.style.overflow = '{0}';",
            overflow
        ));
    });

    let mut class = String::from("app");
    let dark = theme.read().current().body_class();
    if !dark.is_empty() {
        class.push(' ');
        class.push_str(dark);
    }

    rsx! {
        div {
            class: "{class}",
            onkeydown: move |e: KeyboardEvent| {
                page.write().handle_key(&e.key().to_string());
            },

            NavHeader {}

            main {
                section { id: "home", class: "section hero",
                    div { class: "hero-content",
                        h1 { class: "hero-title",
                            "Hi, I'm a "
                            span { class: "gradient-text", "creative developer" }
                        }
                        p { class: "hero-subtitle",
                            "I build playful things for the web and learn something new with every project."
                        }
                        div { class: "hero-buttons",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    page.write().navigate(Section::Projects);
                                    scroll_to(Section::Projects);
                                },
                                "See my work"
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| {
                                    page.write().navigate(Section::Contact);
                                    scroll_to(Section::Contact);
                                },
                                "Say hello"
                            }
                        }
                    }
                }

                section { id: "about", class: "section",
                    h2 { class: "section-title", "About Me" }
                    div { class: "about-grid",
                        div { class: "about-card",
                            h3 { "🚀 Builder" }
                            p { "Most of what I know I learned by making something and breaking it." }
                        }
                        div { class: "about-card",
                            h3 { "🎨 Designer" }
                            p { "I care about how things feel as much as how they work." }
                        }
                        div { class: "about-card",
                            h3 { "📚 Learner" }
                            p { "Every project starts with a question I can't answer yet." }
                        }
                    }
                }

                section { id: "projects", class: "section",
                    h2 { class: "section-title", "Projects" }
                    ProjectGrid {}
                }

                section { id: "interests", class: "section",
                    h2 { class: "section-title", "Interests" }
                    InterestsSection {}
                }

                section { id: "journey", class: "section",
                    h2 { class: "section-title", "My Journey" }
                    div { class: "timeline",
                        for (year, title, text) in JOURNEY.iter().copied() {
                            div { key: "{year}", class: "timeline-item",
                                span { class: "timeline-year", "{year}" }
                                div { class: "timeline-body",
                                    h3 { "{title}" }
                                    p { "{text}" }
                                }
                            }
                        }
                    }
                }

                section { id: "contact", class: "section",
                    h2 { class: "section-title", "Get In Touch" }
                    ContactSection {}
                }
            }

            ProjectModal {}
        }
    }
}
