//! Project detail modal.
//!
//! `ModalState` tracks whether the overlay is showing and which project it
//! shows. `ModalTemplate` is the fixed layout a record renders into.

use crate::catalog::{Catalog, ProjectRecord};

/// Bold lead-in of the footer.
pub const MODAL_FOOTER_LABEL: &str = "What I learned:";

/// Footer text shown under every project.
pub const MODAL_FOOTER: &str = "Every project teaches me something new about coding, design, and \
problem-solving. This project pushed me to explore new technologies and think creatively about \
user experience.";

/// Element that receives keyboard focus while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    CloseButton,
}

/// Visibility of the project modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { project_id: String },
}

impl ModalState {
    /// Open the modal on `id`.
    ///
    /// Unknown ids and coming-soon projects leave the state untouched.
    /// Returns whether the modal is now showing `id`.
    pub fn open(&mut self, catalog: &Catalog, id: &str) -> bool {
        match catalog.lookup(id) {
            Some(record) if !record.coming_soon => {
                tracing::debug!(project = id, "Opening project modal");
                *self = ModalState::Open {
                    project_id: record.id.clone(),
                };
                true
            }
            Some(_) => {
                tracing::debug!(project = id, "Ignoring coming-soon project");
                false
            }
            None => false,
        }
    }

    /// Close the modal. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = ModalState::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn project_id(&self) -> Option<&str> {
        match self {
            ModalState::Open { project_id } => Some(project_id),
            ModalState::Closed => None,
        }
    }

    /// The record currently shown, resolved against `catalog`.
    pub fn project<'a>(&self, catalog: &'a Catalog) -> Option<&'a ProjectRecord> {
        self.project_id().and_then(|id| catalog.lookup(id))
    }

    /// Background scrolling is suspended while the modal shows.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.is_open().then_some(FocusTarget::CloseButton)
    }

    /// Handle a key press by its DOM key name. Escape closes an open modal.
    ///
    /// Returns whether the modal closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close()
        } else {
            false
        }
    }

    /// Handle a click on the overlay. Only clicks on the backdrop itself
    /// (outside the content panel) close the modal.
    pub fn backdrop_click(&mut self, inside_content: bool) -> bool {
        if inside_content {
            false
        } else {
            self.close()
        }
    }
}

/// How a section renders its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    /// Bulleted list
    List,
    /// Inline tag pills
    Tags,
}

/// One labeled block in the modal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSection {
    pub heading: &'static str,
    pub layout: SectionLayout,
    /// CSS class of the list or tag container
    pub class: &'static str,
    pub items: Vec<String>,
}

/// A record laid out into the fixed modal template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalTemplate {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub status: String,
    /// "Started {start_date}"
    pub started: String,
    pub description: String,
    pub sections: Vec<ModalSection>,
    pub footer_label: &'static str,
    pub footer: &'static str,
}

impl ModalTemplate {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            icon: record.image.clone(),
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            status: record.status.clone(),
            started: format!("Started {}", record.start_date),
            description: record.description.clone(),
            sections: vec![
                ModalSection {
                    heading: "✨ Key Features",
                    layout: SectionLayout::List,
                    class: "feature-list",
                    items: record.features.clone(),
                },
                ModalSection {
                    heading: "🛠️ Technologies Used",
                    layout: SectionLayout::Tags,
                    class: "tech-tags",
                    items: record.technologies.clone(),
                },
                ModalSection {
                    heading: "🚀 Challenges & Learning",
                    layout: SectionLayout::List,
                    class: "challenge-list",
                    items: record.challenges.clone(),
                },
                ModalSection {
                    heading: "🎯 Outcomes & Growth",
                    layout: SectionLayout::List,
                    class: "outcome-list",
                    items: record.outcomes.clone(),
                },
            ],
            footer_label: MODAL_FOOTER_LABEL,
            footer: MODAL_FOOTER,
        }
    }
}
