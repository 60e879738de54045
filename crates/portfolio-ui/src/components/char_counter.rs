//! Character counter under the message field.

use dioxus::prelude::*;
use portfolio_core::CharacterCounter;

#[component]
pub fn CharCounter(counter: CharacterCounter) -> Element {
    let color = counter.level().color();

    rsx! {
        div {
            id: "charCounter",
            class: "char-counter",
            style: "color: {color};",
            "{counter.text()}"
        }
    }
}
