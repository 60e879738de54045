//! Portfolio UI Components
//!
//! Dioxus components shared by the portfolio pages. They render state
//! computed in `portfolio-core` and report user input back through event
//! handlers; none of them own page state.
//!
//! ## Palette
//!
//! Class names here are styled by the app's global stylesheet:
//!
//! - **Indigo (#6366f1)**: links, focus rings, tags
//! - **Pink (#ec4899)**: second stop of the button and progress gradient
//! - **Slate (#0f172a)**: dark-mode background

pub mod components;

pub use components::*;
