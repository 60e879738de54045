//! Global styles.

mod styles;

pub use styles::GLOBAL_STYLES;
