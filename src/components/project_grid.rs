//! Project cards.

use dioxus::prelude::*;
use portfolio_core::ProjectRecord;

use crate::context::use_page;

/// Grid of every catalog project.
#[component]
pub fn ProjectGrid() -> Element {
    let page = use_page();
    let records = page.read().catalog().records().to_vec();

    rsx! {
        div { class: "projects-grid",
            for record in records {
                ProjectCard { key: "{record.id}", record }
            }
        }
    }
}

/// One project card. Clicking opens the detail modal unless the project
/// is marked coming-soon.
#[component]
pub fn ProjectCard(record: ProjectRecord) -> Element {
    let mut page = use_page();
    let id = record.id.clone();
    let coming_soon = record.coming_soon;

    let open = move |_| {
        if coming_soon {
            return;
        }
        if !page.write().open_project(&id) {
            tracing::debug!("No project named {}", id);
        }
    };

    rsx! {
        article {
            class: if coming_soon { "project-card coming-soon" } else { "project-card" },
            "data-project": "{record.id}",
            onclick: open,
            div { class: "project-image",
                span { class: "project-icon", "{record.image}" }
            }
            div { class: "project-content",
                h3 { class: "project-title", "{record.title}" }
                p { class: "project-subtitle", "{record.subtitle}" }
                div { class: "project-tags",
                    for tech in record.technologies.iter().take(3) {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
                if coming_soon {
                    span { class: "project-status soon", "Coming Soon" }
                } else {
                    span { class: "project-status", "{record.status}" }
                }
            }
        }
    }
}
