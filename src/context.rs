//! Catalog context for the SentraIntel desktop app.
//!
//! Provides the shared product catalog to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! for category in catalog.categories() { /* ... */ }
//! ```

use dioxus::prelude::*;
use sentra_catalog::Catalog;

/// Hook to access the shared catalog from context.
///
/// The catalog is immutable and lives for the whole program, so the hook
/// hands out a plain static reference rather than a signal.
pub fn use_catalog() -> &'static Catalog {
    use_context::<&'static Catalog>()
}
