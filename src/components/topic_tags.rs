//! Topic tags with a reply for the chosen one.

use dioxus::prelude::*;
use portfolio_core::topics::TOPICS;
use portfolio_ui::{Button, ButtonVariant};

use crate::context::use_page;

#[component]
pub fn TopicTags() -> Element {
    let mut page = use_page();
    let topics = page.read().topics().clone();
    let response = topics.response();

    rsx! {
        div { class: "topic-tags",
            for (id, label, _) in TOPICS.iter().copied() {
                Button {
                    key: "{id}",
                    variant: ButtonVariant::Pill,
                    class: "clickable-tag".to_string(),
                    active: topics.is_active(id),
                    onclick: move |_| page.write().select_topic(id),
                    "{label}"
                }
            }
        }
        div {
            id: "topicResponse",
            class: if response.is_some() { "topic-response show" } else { "topic-response" },
            if let Some(response) = response {
                div { class: "response-content",
                    span { class: "response-icon", "{response.icon}" }
                    p { class: "response-text", "{response.text}" }
                }
            }
        }
    }
}
