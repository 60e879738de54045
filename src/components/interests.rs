//! Interests Section Component
//!
//! Filter buttons over the interest categories. Each item can be expanded
//! to show more, by click or by Enter/Space when focused.

use dioxus::prelude::*;
use portfolio_core::{InterestFilter, InterestKind};
use portfolio_ui::{Button, ButtonVariant};

use crate::context::use_page;

/// (id, icon, title, details)
type InterestItem = (&'static str, &'static str, &'static str, &'static str);

fn items(kind: InterestKind) -> &'static [InterestItem] {
    match kind {
        InterestKind::CreativeArts => &[
            ("painting", "🎨", "Digital Painting", "Late-night sketches that sometimes turn into project icons."),
            ("music", "🎵", "Making Music", "Short loops and beats, mostly made with headphones on."),
        ],
        InterestKind::Technology => &[
            ("webdev", "💻", "Web Development", "Small tools and sites, built to learn one new thing each time."),
            ("gamedev", "🎮", "Game Design", "Tiny prototypes where the rules matter more than the graphics."),
        ],
        InterestKind::Academic => &[
            ("maths", "📐", "Mathematics", "Puzzles, patterns, and the odd proof that finally clicks."),
            ("languages", "🗣️", "Languages", "Learning a few phrases in every language I come across."),
        ],
        InterestKind::Lifestyle => &[
            ("hiking", "🥾", "Hiking", "Weekend trails with a notebook for ideas along the way."),
            ("cooking", "🍳", "Cooking", "Recipes treated like experiments, with mixed results."),
        ],
    }
}

#[component]
pub fn InterestsSection() -> Element {
    let mut page = use_page();
    let filter = page.read().interest_filter();

    let visible: Vec<InterestKind> = InterestKind::all()
        .iter()
        .copied()
        .filter(|kind| filter.shows(*kind))
        .collect();

    rsx! {
        div { class: "interest-filters",
            Button {
                variant: ButtonVariant::Pill,
                class: "filter-btn".to_string(),
                active: filter == InterestFilter::All,
                onclick: move |_| page.write().set_interest_filter(InterestFilter::All),
                "All"
            }
            for kind in InterestKind::all().iter().copied() {
                Button {
                    key: "{kind.class()}",
                    variant: ButtonVariant::Pill,
                    class: "filter-btn".to_string(),
                    active: filter == InterestFilter::Only(kind),
                    onclick: move |_| page.write().set_interest_filter(InterestFilter::Only(kind)),
                    "{kind.label()}"
                }
            }
        }

        div { class: "interests-grid",
            for (index, kind) in visible.into_iter().enumerate() {
                div {
                    // Keyed by filter so the reveal animation replays
                    key: "{filter.value()}-{kind.class()}",
                    class: "interest-category {kind.class()} reveal",
                    style: "animation-delay: {InterestFilter::reveal_delay(index).as_millis()}ms;",
                    h3 { "{kind.label()}" }
                    for (id, icon, title, details) in items(kind).iter().copied() {
                        InterestEntry { key: "{id}", id, icon, title, details }
                    }
                }
            }
        }
    }
}

#[component]
fn InterestEntry(
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    details: &'static str,
) -> Element {
    let mut page = use_page();
    let expanded = page.read().expanded().is_expanded(id);
    let (aria_expanded, aria_hidden) = page.read().expanded().aria(id);

    rsx! {
        div {
            class: if expanded { "interest-item expandable expanded" } else { "interest-item expandable" },
            role: "button",
            tabindex: "0",
            "aria-expanded": aria_expanded,
            onclick: move |_| {
                page.write().toggle_interest(id);
            },
            onkeydown: move |e: KeyboardEvent| {
                if page.write().interest_key(id, &e.key().to_string()).is_some() {
                    e.prevent_default();
                }
            },
            div { class: "interest-summary",
                span { class: "interest-icon", "{icon}" }
                span { class: "interest-title", "{title}" }
            }
            div { class: "expandable-content", "aria-hidden": aria_hidden,
                p { "{details}" }
            }
        }
    }
}
