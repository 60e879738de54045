//! Reusable UI components.

mod button;
mod char_counter;
mod input;
mod progress_bar;
mod validation_hint;

pub use button::*;
pub use char_counter::*;
pub use input::*;
pub use progress_bar::*;
pub use validation_hint::*;
