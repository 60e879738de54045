//! Input Field Components
//!
//! Text inputs, the subject dropdown and the message textarea of the
//! contact form. Each reports the raw value on every input or change so
//! the caller can re-validate, and renders its own validation hint.

use dioxus::prelude::*;
use portfolio_core::FieldState;

use crate::components::ValidationHint;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form control name, also used as the element id
    pub name: String,
    pub label: String,
    /// Emoji shown beside the label; bounces on focus
    #[props(default)]
    pub icon: Option<String>,
    pub state: FieldState,
    /// Called with the raw value on every input
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
}

/// Text input with label and validation hint
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         label: "Your Email".to_string(),
///         input_type: "email".to_string(),
///         state: form.field(FormField::Email).clone(),
///         onchange: move |v| page.write().update_field(FormField::Email, &v),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let mut bouncing = use_signal(|| false);
    let onchange = props.onchange;

    rsx! {
        div { class: "form-group animated-input",
            FieldLabel {
                name: props.name.clone(),
                label: props.label.clone(),
                icon: props.icon.clone(),
                bouncing: bouncing(),
            }
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: "form-input",
                r#type: "{props.input_type}",
                value: "{props.state.raw_value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                onfocus: move |_| bouncing.set(true),
                oninput: move |e| onchange.call(e.value()),
                onblur: move |_| bouncing.set(false),
            }
            ValidationHint { state: props.state.clone() }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub name: String,
    pub label: String,
    #[props(default)]
    pub icon: Option<String>,
    pub state: FieldState,
    pub onchange: EventHandler<String>,
    /// (value, label) pairs, shown after the empty placeholder option
    pub options: Vec<(String, String)>,
    #[props(default = "Choose a topic...".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let mut bouncing = use_signal(|| false);
    let onchange = props.onchange;
    let current = props.state.raw_value.clone();

    rsx! {
        div { class: "form-group animated-input",
            FieldLabel {
                name: props.name.clone(),
                label: props.label.clone(),
                icon: props.icon.clone(),
                bouncing: bouncing(),
            }
            select {
                id: "{props.name}",
                name: "{props.name}",
                class: "form-input form-select",
                required: props.required,
                value: "{current}",
                onfocus: move |_| bouncing.set(true),
                onblur: move |_| bouncing.set(false),
                onchange: move |e| onchange.call(e.value()),
                option { value: "", selected: current.is_empty(), "{props.placeholder}" }
                for (value, label) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == current,
                        "{label}"
                    }
                }
            }
            ValidationHint { state: props.state.clone() }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub name: String,
    pub label: String,
    #[props(default)]
    pub icon: Option<String>,
    pub state: FieldState,
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    /// Rendered between the textarea and the hint (character counter)
    #[props(default)]
    pub footer: Option<Element>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let mut bouncing = use_signal(|| false);
    let onchange = props.onchange;

    rsx! {
        div { class: "form-group animated-input",
            FieldLabel {
                name: props.name.clone(),
                label: props.label.clone(),
                icon: props.icon.clone(),
                bouncing: bouncing(),
            }
            textarea {
                id: "{props.name}",
                name: "{props.name}",
                class: "form-input form-textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                value: "{props.state.raw_value}",
                onfocus: move |_| bouncing.set(true),
                onblur: move |_| bouncing.set(false),
                oninput: move |e| onchange.call(e.value()),
            }
            if let Some(footer) = props.footer.clone() {
                {footer}
            }
            ValidationHint { state: props.state.clone() }
        }
    }
}

#[component]
fn FieldLabel(name: String, label: String, icon: Option<String>, bouncing: bool) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{name}",
            if let Some(icon) = icon {
                span {
                    class: if bouncing { "bounce-icon bouncing" } else { "bounce-icon" },
                    "{icon}"
                }
            }
            " {label}"
        }
    }
}
