//! Portfolio Core Library
//!
//! Page logic for a single-page personal portfolio, kept free of any UI
//! framework so it can be tested directly.
//!
//! ## Overview
//!
//! - **Catalog**: project records loaded from JSON, looked up by id
//! - **Modal**: which project the detail overlay shows, and its layout
//! - **Form**: field validators, completion progress, simulated submission
//! - **Page**: one controller owning all page state and a single scheduler
//!   for deferred actions
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Catalog, FormField, PageController, PortfolioConfig};
//!
//! let config = PortfolioConfig::default();
//! let mut page = PageController::new(Catalog::builtin()?, &config);
//!
//! page.open_project("beat-by-beat");
//! page.update_field(FormField::Name, "Grace Hopper");
//! page.submit(0);
//! page.tick(3_000); // form is clear again
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod interests;
pub mod logging;
pub mod modal;
pub mod page;
pub mod particles;
pub mod progress;
pub mod scheduler;
pub mod storage;
pub mod submission;
pub mod theme;
pub mod topics;
pub mod validation;

// Re-exports
pub use catalog::{Catalog, ProjectRecord};
pub use config::PortfolioConfig;
pub use error::{PortfolioError, PortfolioResult};
pub use form::{ContactForm, ProgressView};
pub use interests::{ExpandedItems, InterestFilter, InterestKind};
pub use modal::{FocusTarget, ModalSection, ModalState, ModalTemplate, SectionLayout};
pub use page::{Celebration, PageAction, PageController, Section};
pub use particles::{BurstSpec, Particle};
pub use progress::FormProgress;
pub use scheduler::{Millis, Scheduler};
pub use storage::{MemoryStore, PreferenceStore, Storage};
pub use submission::{ContactValues, SubmitPhase, Submission};
pub use theme::{Theme, ThemeStore};
pub use topics::{TopicResponse, TopicSelection};
pub use validation::{CharacterCounter, CounterLevel, FieldState, FormField, Validity};
