//! Form Progress Component
//!
//! Proportional fill, the encouragement line under it, and the
//! "ready to send" block that appears once every field is valid.

use dioxus::prelude::*;
use portfolio_core::ProgressView;

#[component]
pub fn FormProgressBar(view: ProgressView) -> Element {
    rsx! {
        div { class: "form-progress",
            div {
                class: "progress-bar",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{view.percent}",
                div {
                    id: "formProgress",
                    class: "progress-fill",
                    style: "width: {view.percent}%;",
                }
            }
            p { id: "progressText", class: "progress-text", "{view.text}" }
        }
    }
}

#[component]
pub fn Encouragement(view: ProgressView) -> Element {
    rsx! {
        div {
            id: "formEncouragement",
            class: if view.encouragement_visible { "form-encouragement show" } else { "form-encouragement" },
            div { class: "encouragement-message",
                span { class: "encouragement-icon", "{view.encouragement_icon}" }
                span { class: "encouragement-text", "{view.encouragement_text}" }
            }
        }
    }
}
