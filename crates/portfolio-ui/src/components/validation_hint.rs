//! Validation hint under a form field.

use dioxus::prelude::*;
use portfolio_core::FieldState;

/// Shows the field's message with its validity class. Hidden when the
/// field is empty.
#[component]
pub fn ValidationHint(state: FieldState) -> Element {
    rsx! {
        div {
            class: "{state.hint_class()}",
            role: "status",
            "aria-live": "polite",
            "{state.message}"
        }
    }
}
