//! Page components for the portfolio.

mod landing;

pub use landing::Landing;
