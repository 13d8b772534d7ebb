//! Error types for catalog lookups

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Category slug did not match any category
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Product slug did not match any product in any category
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::CategoryNotFound("sentra-route".to_string());
        assert_eq!(format!("{}", err), "Category not found: sentra-route");

        let err = CatalogError::ProductNotFound("sentra-geolock".to_string());
        assert_eq!(format!("{}", err), "Product not found: sentra-geolock");
    }
}
