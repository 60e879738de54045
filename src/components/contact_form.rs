//! Contact Section Component
//!
//! Validated contact form with live progress, the simulated send, and the
//! celebration burst that follows it. The cards beside the form hold the
//! topic tags and the fun fact.

use dioxus::prelude::*;
use portfolio_core::validation::SUBJECT_OPTIONS;
use portfolio_core::FormField;
use portfolio_ui::{CharCounter, Encouragement, FormProgressBar, Input, Select, SubmitButton, TextArea};

use crate::components::{FunFactCard, ParticleBurst, TopicTags};
use crate::context::{use_clock, use_page};

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        div { class: "contact-content",
            div { class: "contact-info",
                div { class: "contact-card hover-lift",
                    h3 { "💬 Let's talk about" }
                    TopicTags {}
                }
                FunFactCard {}
            }
            ContactForm {}
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let mut page = use_page();
    let clock = use_clock();

    let (name, email, subject, message, counter, phase, view) = {
        let page = page.read();
        let form = page.form();
        (
            form.field(FormField::Name).clone(),
            form.field(FormField::Email).clone(),
            form.field(FormField::Subject).clone(),
            form.field(FormField::Message).clone(),
            form.counter(),
            form.phase(),
            form.progress_view(),
        )
    };
    let celebration = page.read().celebration().cloned();

    let subject_options: Vec<(String, String)> = SUBJECT_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if page.write().submit(clock.now_ms()).is_none() {
            tracing::debug!("Submit ignored while a message is in flight");
        }
    };

    rsx! {
        form {
            id: "contactForm",
            class: "contact-form",
            onsubmit: on_submit,

            FormProgressBar { view: view.clone() }

            div { class: "form-row",
                Input {
                    name: "name".to_string(),
                    label: "Your Name".to_string(),
                    icon: "👋".to_string(),
                    placeholder: "What should I call you?".to_string(),
                    required: true,
                    state: name,
                    onchange: move |v: String| {
                        page.write().update_field(FormField::Name, &v);
                    },
                }
                Input {
                    name: "email".to_string(),
                    label: "Your Email".to_string(),
                    icon: "📧".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "your.email@example.com".to_string(),
                    required: true,
                    state: email,
                    onchange: move |v: String| {
                        page.write().update_field(FormField::Email, &v);
                    },
                }
            }

            Select {
                name: "subject".to_string(),
                label: "What's this about?".to_string(),
                icon: "💭".to_string(),
                required: true,
                options: subject_options,
                state: subject,
                onchange: move |v: String| {
                    page.write().update_field(FormField::Subject, &v);
                },
            }

            TextArea {
                name: "message".to_string(),
                label: "Your Message".to_string(),
                icon: "✍️".to_string(),
                placeholder: "Tell me what's on your mind...".to_string(),
                required: true,
                state: message,
                onchange: move |v: String| {
                    page.write().update_field(FormField::Message, &v);
                },
                footer: rsx! { CharCounter { counter } },
            }

            SubmitButton { phase }

            Encouragement { view }

            if let Some(celebration) = celebration {
                ParticleBurst {
                    key: "{celebration.burst}",
                    particles: celebration.particles,
                    class: "celebration".to_string(),
                }
            }
        }
    }
}
