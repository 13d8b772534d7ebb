//! Product Catalog Types
//!
//! Core data model for the SentraIntel product catalog: categories, products,
//! badges, and detail blocks. The catalog is a hand-maintained constant
//! (see [`crate::data`]); these types carry no runtime mutation API.

use serde::{Deserialize, Serialize};

/// A product line category (e.g. "Sentra Route")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Display name shown on tabs and cards
    pub name: String,
    /// Icon drawn next to the category name
    pub icon: CategoryIcon,
    /// Short positioning line ("Advanced Tactical Solutions")
    pub description: String,
    /// Gradient color token used by the theme
    pub color: String,
    /// URL-safe identifier; falls back to the name when absent
    pub slug: Option<String>,
    /// Category hero image path
    pub image: Option<String>,
    /// Marketing tagline shown under the category header
    pub tagline: Option<String>,
    /// Products in display order
    pub products: Vec<Product>,
}

/// A single product within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,
    /// One-paragraph summary shown on cards and list rows
    pub description: String,
    /// Headline capabilities, in display order
    pub features: Vec<String>,
    /// URL-safe identifier; falls back to the name when absent
    pub slug: Option<String>,
    /// Product image path; missing or empty falls back to the default asset
    pub image: Option<String>,
    /// Extended detail block for the product modal
    pub details: Option<ProductDetails>,
    /// Corner badge shown on cards
    pub badge: Option<Badge>,
}

/// Extended product information rendered in the detail modal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Long-form overview paragraph
    pub overview: Option<String>,
    /// Ordered label/value specification rows
    pub specifications: Vec<(String, String)>,
    /// Deployment scenarios
    pub use_cases: Vec<String>,
    /// Outcome statements
    pub benefits: Vec<String>,
    /// Names of systems this product integrates with
    pub compatible_with: Vec<String>,
}

/// Card badge: short label plus a color token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge label ("Flagship", "Covert", ...)
    pub text: String,
    /// Background color token used by the theme
    pub color: String,
}

/// Icon identifier for a category.
///
/// Unknown identifiers fall back to [`CategoryIcon::Radio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Radio,
    Shield,
    Cpu,
}

impl CategoryIcon {
    /// Parse an icon identifier, falling back to Radio for unknown names
    pub fn parse(name: &str) -> Self {
        match name {
            "shield" => CategoryIcon::Shield,
            "cpu" => CategoryIcon::Cpu,
            _ => CategoryIcon::Radio,
        }
    }

    /// Identifier string for this icon
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryIcon::Radio => "radio",
            CategoryIcon::Shield => "shield",
            CategoryIcon::Cpu => "cpu",
        }
    }
}

/// Lowercase the name and join whitespace runs with hyphens
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

impl ProductCategory {
    /// URL-safe identifier: explicit slug, or the hyphenated lowercase name
    pub fn slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }
}

impl Product {
    /// URL-safe identifier: explicit slug, or the hyphenated lowercase name
    pub fn slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }

    /// Names of systems this product integrates with (empty when no details)
    pub fn compatible_with(&self) -> &[String] {
        self.details
            .as_ref()
            .map(|d| d.compatible_with.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            description: String::new(),
            features: vec![],
            slug: None,
            image: None,
            details: None,
            badge: None,
        }
    }

    #[test]
    fn test_slug_fallback_hyphenates_name() {
        let product = bare_product("Sentra Track & Trace");
        assert_eq!(product.slug(), "sentra-track-&-trace");
    }

    #[test]
    fn test_explicit_slug_wins() {
        let mut product = bare_product("Sentra Track & Trace");
        product.slug = Some("sentra-track-trace".to_string());
        assert_eq!(product.slug(), "sentra-track-trace");
    }

    #[test]
    fn test_slug_collapses_whitespace_runs() {
        let product = bare_product("Sentra  Route\tX1");
        assert_eq!(product.slug(), "sentra-route-x1");
    }

    #[test]
    fn test_icon_parse_falls_back_to_radio() {
        assert_eq!(CategoryIcon::parse("shield"), CategoryIcon::Shield);
        assert_eq!(CategoryIcon::parse("cpu"), CategoryIcon::Cpu);
        assert_eq!(CategoryIcon::parse("radio"), CategoryIcon::Radio);
        assert_eq!(CategoryIcon::parse("satellite"), CategoryIcon::Radio);
    }

    #[test]
    fn test_compatible_with_empty_without_details() {
        let product = bare_product("Sentra Route X1");
        assert!(product.compatible_with().is_empty());
    }
}
