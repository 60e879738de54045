//! Page components for the portfolio.

mod contact_form;
mod fun_fact;
mod interests;
pub mod nav_header;
mod particle_burst;
mod project_grid;
mod project_modal;
mod topic_tags;

pub use contact_form::ContactSection;
pub use fun_fact::FunFactCard;
pub use interests::InterestsSection;
pub use nav_header::NavHeader;
pub use particle_burst::ParticleBurst;
pub use project_grid::{ProjectCard, ProjectGrid};
pub use project_modal::ProjectModal;
pub use topic_tags::TopicTags;
