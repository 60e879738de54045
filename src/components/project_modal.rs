//! Project Modal Component
//!
//! Detail overlay for the open project. Closes from the close button, a
//! click on the backdrop, or Escape.

use dioxus::prelude::*;
use portfolio_core::{FocusTarget, ModalSection, SectionLayout};
use portfolio_ui::CloseButton;

use crate::context::use_page;

#[component]
pub fn ProjectModal() -> Element {
    let mut page = use_page();
    let Some(template) = page.read().modal_template() else {
        return rsx! {};
    };
    let focus_close = page.read().modal().focus_target() == Some(FocusTarget::CloseButton);

    rsx! {
        div {
            id: "projectModal",
            class: "modal active",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modalTitle",
            onclick: move |_| {
                page.write().backdrop_click(false);
            },
            onkeydown: move |e: KeyboardEvent| {
                if page.write().handle_key(&e.key().to_string()) {
                    e.stop_propagation();
                }
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    focus: focus_close,
                    onclick: move |_| {
                        page.write().close_project();
                    },
                }

                div { class: "modal-body",
                    div { class: "modal-header",
                        div { class: "modal-icon", "{template.icon}" }
                        div { class: "modal-title-section",
                            h2 { id: "modalTitle", class: "modal-title", "{template.title}" }
                            p { class: "modal-subtitle", "{template.subtitle}" }
                            div { class: "modal-meta",
                                span { class: "modal-status", "{template.status}" }
                                span { class: "modal-date", "{template.started}" }
                            }
                        }
                    }

                    div { class: "modal-description",
                        p { "{template.description}" }
                    }

                    div { class: "modal-sections",
                        for section in template.sections.iter() {
                            ModalSectionBlock { key: "{section.heading}", section: section.clone() }
                        }
                    }

                    div { class: "modal-footer",
                        p { class: "modal-note",
                            strong { "{template.footer_label}" }
                            " {template.footer}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ModalSectionBlock(section: ModalSection) -> Element {
    rsx! {
        div { class: "modal-section",
            h3 { "{section.heading}" }
            {match section.layout {
                SectionLayout::List => rsx! {
                    ul { class: "{section.class}",
                        for item in section.items.iter() {
                            li { "{item}" }
                        }
                    }
                },
                SectionLayout::Tags => rsx! {
                    div { class: "{section.class}",
                        for item in section.items.iter() {
                            span { class: "tech-tag", "{item}" }
                        }
                    }
                },
            }}
        }
    }
}
