//! Button Components
//!
//! - Primary: main call to action
//! - Secondary: outlined alternative
//! - Pill: filter buttons and topic tags
//! - Ghost: icon-only controls in the navbar

use dioxus::prelude::*;
use portfolio_core::SubmitPhase;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Pill,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Pill => "btn-pill",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Renders the `active` modifier (selected filter, chosen tag)
    #[props(default = false)]
    pub active: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Pill,
///         active: filter() == InterestFilter::All,
///         onclick: move |_| filter.set(InterestFilter::All),
///         "All"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut class = props.variant.class().to_string();
    if props.active {
        class.push_str(" active");
    }
    if let Some(extra) = props.class.as_deref().filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Submit button of the contact form. Label and state follow the
/// submission phase; clicks submit the enclosing form.
#[component]
pub fn SubmitButton(phase: SubmitPhase) -> Element {
    let class = format!("btn btn-primary btn-submit {}", phase.class());

    rsx! {
        button {
            class: "{class}",
            r#type: "submit",
            disabled: phase.disabled(),
            {match phase {
                SubmitPhase::Idle => rsx! {
                    span { class: "btn-text", "{phase.label()}" }
                    span { class: "btn-arrow", "→" }
                },
                SubmitPhase::Sending => rsx! {
                    div { class: "btn-loading",
                        div { class: "loading-dots",
                            span {}
                            span {}
                            span {}
                        }
                    }
                },
                SubmitPhase::Sent => rsx! {
                    span { "{phase.label()}" }
                },
            }}
        }
    }
}

/// Icon button for compact actions (theme toggle, menu toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
    /// Moves keyboard focus here when mounted
    #[props(default = false)]
    pub focus_on_mount: bool,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    };
    let focus_on_mount = props.focus_on_mount;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onmounted: move |evt| async move {
                if focus_on_mount {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!("Could not focus control: {:?}", e);
                    }
                }
            },
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon.
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    /// Take keyboard focus when it appears
    #[props(default = false)]
    focus: bool,
) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "modal-close".to_string(),
            focus_on_mount: focus,
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Pill.class(), "btn-pill");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
