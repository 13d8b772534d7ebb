//! Product filtering.
//!
//! A filter combines a free-text query with two facet sets (badge type and
//! compatibility). All three clauses AND together; an empty clause imposes
//! nothing. Matching is synchronous and order-preserving - results come back
//! as indices into the input slice, in input order, with no ranking.

use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductCategory};

/// Free-text plus faceted product filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring query over name, description, and features
    pub query: String,
    /// Selected badge texts; a product must carry one of them
    pub types: Vec<String>,
    /// Selected compatibility entries; a product must list one of them
    pub compatibility: Vec<String>,
}

impl ProductFilter {
    /// True when no clause is active
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.types.is_empty() && self.compatibility.is_empty()
    }

    /// Test one product against all active clauses
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product) && self.matches_types(product) && self.matches_compat(product)
    }

    /// Indices of matching products, in input order
    pub fn apply(&self, products: &[Product]) -> Vec<usize> {
        products
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches(p))
            .map(|(i, _)| i)
            .collect()
    }

    fn matches_query(&self, product: &Product) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
            || product
                .features
                .iter()
                .any(|f| f.to_lowercase().contains(&query))
    }

    fn matches_types(&self, product: &Product) -> bool {
        if self.types.is_empty() {
            return true;
        }
        // A badge-less product never matches an active type facet
        product
            .badge
            .as_ref()
            .is_some_and(|b| self.types.iter().any(|t| t == &b.text))
    }

    fn matches_compat(&self, product: &Product) -> bool {
        if self.compatibility.is_empty() {
            return true;
        }
        product
            .compatible_with()
            .iter()
            .any(|c| self.compatibility.contains(c))
    }

    /// Add the value if absent, remove it if present
    pub fn toggle_type(&mut self, value: &str) {
        toggle(&mut self.types, value);
    }

    /// Add the value if absent, remove it if present
    pub fn toggle_compatibility(&mut self, value: &str) {
        toggle(&mut self.compatibility, value);
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

/// Distinct badge texts of a category, in first-seen order
pub fn badge_values(category: &ProductCategory) -> Vec<String> {
    let mut values = Vec::new();
    for product in &category.products {
        if let Some(badge) = &product.badge {
            if !values.contains(&badge.text) {
                values.push(badge.text.clone());
            }
        }
    }
    values
}

/// Distinct compatibility entries of a category, in first-seen order
pub fn compatibility_values(category: &ProductCategory) -> Vec<String> {
    let mut values = Vec::new();
    for product in &category.products {
        for entry in product.compatible_with() {
            if !values.contains(entry) {
                values.push(entry.clone());
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use crate::types::Badge;

    fn product(name: &str, description: &str, features: &[&str]) -> Product {
        Product {
            name: name.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            slug: None,
            image: None,
            details: None,
            badge: None,
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let products = vec![
            product("Alpha", "first", &[]),
            product("Beta", "second", &[]),
            product("Gamma", "third", &[]),
        ];
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&products), vec![0, 1, 2]);
    }

    #[test]
    fn test_query_matches_name_description_and_features() {
        let products = vec![
            product("Radar One", "long range sensor", &[]),
            product("Unit Two", "radar imaging suite", &[]),
            product("Unit Three", "optical sensor", &["Ground radar uplink"]),
            product("Unit Four", "optical sensor", &[]),
        ];
        let filter = ProductFilter {
            query: "RADAR".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&products), vec![0, 1, 2]);
    }

    #[test]
    fn test_query_ignores_surrounding_whitespace() {
        let products = vec![product("Radar One", "", &[])];
        let filter = ProductFilter {
            query: "  radar  ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&products), vec![0]);
    }

    #[test]
    fn test_type_facet_requires_matching_badge() {
        let mut tagged = product("Tagged", "", &[]);
        tagged.badge = Some(Badge {
            text: "Flagship".to_string(),
            color: "bg-blue-600".to_string(),
        });
        let untagged = product("Untagged", "", &[]);

        let filter = ProductFilter {
            types: vec!["Flagship".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&tagged));
        // No badge means no match once the facet is active
        assert!(!filter.matches(&untagged));

        let no_facet = ProductFilter::default();
        assert!(no_facet.matches(&untagged));
    }

    #[test]
    fn test_compatibility_facet_intersects() {
        let catalog = Catalog::get();
        let route = catalog.category(0).unwrap();
        let filter = ProductFilter {
            compatibility: vec!["Sentra GeoLock".to_string()],
            ..Default::default()
        };
        // Only Route Tactical lists GeoLock as an integration
        let names: Vec<&str> = filter
            .apply(&route.products)
            .into_iter()
            .map(|i| route.products[i].name.as_str())
            .collect();
        assert_eq!(names, vec!["Sentra Route Tactical"]);
    }

    #[test]
    fn test_clauses_combine_with_and() {
        let catalog = Catalog::get();
        let route = catalog.category(0).unwrap();
        let filter = ProductFilter {
            query: "deployment".to_string(),
            types: vec!["Covert".to_string()],
            ..Default::default()
        };
        // "deployment" matches Route Tactical, but it wears Field-Ready, not Covert
        assert!(filter.apply(&route.products).is_empty());
    }

    #[test]
    fn test_shield_perimeter_query_returns_geolock_only() {
        let catalog = Catalog::get();
        let shield = catalog.require_category("sentra-shield").unwrap();
        let filter = ProductFilter {
            query: "perimeter".to_string(),
            ..Default::default()
        };
        let names: Vec<&str> = filter
            .apply(&shield.products)
            .into_iter()
            .map(|i| shield.products[i].name.as_str())
            .collect();
        assert_eq!(names, vec!["Sentra GeoLock"]);
    }

    #[test]
    fn test_toggle_facet_roundtrip() {
        let mut filter = ProductFilter::default();
        filter.toggle_type("Flagship");
        filter.toggle_type("Covert");
        assert_eq!(filter.types, vec!["Flagship", "Covert"]);
        filter.toggle_type("Flagship");
        assert_eq!(filter.types, vec!["Covert"]);
    }

    #[test]
    fn test_badge_values_first_seen_order() {
        let catalog = Catalog::get();
        let shield = catalog.category(1).unwrap();
        assert_eq!(
            badge_values(shield),
            vec!["Secure Zone", "Integrated", "Perimeter"]
        );
    }

    #[test]
    fn test_compatibility_values_deduplicate() {
        let catalog = Catalog::get();
        let insight = catalog.category(2).unwrap();
        let values = compatibility_values(insight);
        let mut deduped = values.clone();
        deduped.dedup();
        assert_eq!(values, deduped);
        assert!(values.contains(&"Standard intelligence platforms".to_string()));
    }
}
