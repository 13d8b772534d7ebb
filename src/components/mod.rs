//! UI components for the SentraIntel desktop app.

pub mod icons;
pub mod products;
pub mod sections;

mod footer;
mod nav_header;

pub use footer::Footer;
pub use nav_header::{NavHeader, NavLocation};
