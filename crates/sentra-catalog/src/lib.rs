//! SentraIntel Catalog Library
//!
//! Product catalog data model and page state for the SentraIntel desktop
//! site. The catalog is a hardcoded constant; this crate owns the data,
//! the search/facet filter, the products-page view state machine, and the
//! contact-form state machine. No I/O and no async - the UI and CLI layers
//! sit on top.
//!
//! ## Quick Start
//!
//! ```
//! use sentra_catalog::{Catalog, ProductFilter};
//!
//! let catalog = Catalog::get();
//! let shield = catalog.require_category("sentra-shield")?;
//!
//! let filter = ProductFilter {
//!     query: "perimeter".to_string(),
//!     ..Default::default()
//! };
//! for index in filter.apply(&shield.products) {
//!     println!("{}", shield.products[index].name);
//! }
//! # Ok::<(), sentra_catalog::CatalogError>(())
//! ```

pub mod contact;
pub mod data;
pub mod error;
pub mod filter;
pub mod types;
pub mod view;

// Re-exports
pub use contact::{ContactForm, FormStatus, DEFAULT_INTEREST, INTEREST_OPTIONS};
pub use data::{Catalog, DEFAULT_PRODUCT_IMAGE};
pub use error::{CatalogError, CatalogResult};
pub use filter::{badge_values, compatibility_values, ProductFilter};
pub use types::{Badge, CategoryIcon, Product, ProductCategory, ProductDetails};
pub use view::{ProductsView, ViewMode};
