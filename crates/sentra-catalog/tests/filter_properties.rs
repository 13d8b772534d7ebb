//! Property-based tests for the product filter and page state
//!
//! Uses proptest to verify invariants of ProductFilter and ProductsView.

use proptest::prelude::*;
use sentra_catalog::{Badge, Catalog, Product, ProductFilter, ProductsView, ViewMode};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate short readable words for names, queries, and features
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9 ]{0,30}").expect("valid regex")
}

/// Generate a product with optional badge and compatibility entries
fn product_strategy() -> impl Strategy<Value = Product> {
    (
        word_strategy(),
        word_strategy(),
        prop::collection::vec(word_strategy(), 0..5),
        prop::option::of(word_strategy()),
        prop::collection::vec(word_strategy(), 0..4),
    )
        .prop_map(|(name, description, features, badge_text, compatible_with)| {
            let details = if compatible_with.is_empty() {
                None
            } else {
                Some(sentra_catalog::ProductDetails {
                    compatible_with,
                    ..Default::default()
                })
            };
            Product {
                name,
                description,
                features,
                slug: None,
                image: None,
                details,
                badge: badge_text.map(|text| Badge {
                    text,
                    color: "bg-blue-600".to_string(),
                }),
            }
        })
}

fn products_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..12)
}

fn filter_strategy() -> impl Strategy<Value = ProductFilter> {
    (
        word_strategy(),
        prop::collection::vec(word_strategy(), 0..3),
        prop::collection::vec(word_strategy(), 0..3),
    )
        .prop_map(|(query, types, compatibility)| ProductFilter {
            query,
            types,
            compatibility,
        })
}

/// Operations a user can perform on the products page
#[derive(Debug, Clone)]
enum ViewOp {
    SelectCategory(usize),
    SetQuery(String),
    ToggleType(String),
    SelectProduct(String),
    SetViewMode(bool),
    TogglePanel,
}

fn view_ops_strategy() -> impl Strategy<Value = Vec<ViewOp>> {
    prop::collection::vec(
        prop_oneof![
            (0..3usize).prop_map(ViewOp::SelectCategory),
            word_strategy().prop_map(ViewOp::SetQuery),
            word_strategy().prop_map(ViewOp::ToggleType),
            word_strategy().prop_map(ViewOp::SelectProduct),
            any::<bool>().prop_map(ViewOp::SetViewMode),
            Just(ViewOp::TogglePanel),
        ],
        0..20,
    )
}

fn apply_op(view: &mut ProductsView, op: &ViewOp) {
    match op {
        ViewOp::SelectCategory(i) => view.select_category(*i),
        ViewOp::SetQuery(q) => view.set_query(q.clone()),
        ViewOp::ToggleType(t) => view.toggle_type(t),
        ViewOp::SelectProduct(s) => view.select_product(s.clone()),
        ViewOp::SetViewMode(grid) => {
            view.set_view_mode(if *grid { ViewMode::Grid } else { ViewMode::List })
        }
        ViewOp::TogglePanel => view.toggle_filter_panel(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Filter results are always a strictly increasing subsequence of valid indices
    #[test]
    fn apply_returns_ordered_subsequence(
        products in products_strategy(),
        filter in filter_strategy(),
    ) {
        let result = filter.apply(&products);
        for window in result.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for index in &result {
            prop_assert!(*index < products.len());
        }
    }

    /// The empty filter is the identity over any product list
    #[test]
    fn empty_filter_is_identity(products in products_strategy()) {
        let filter = ProductFilter::default();
        let all: Vec<usize> = (0..products.len()).collect();
        prop_assert_eq!(filter.apply(&products), all);
    }

    /// Membership agrees with per-product matching, both ways
    #[test]
    fn apply_agrees_with_matches(
        products in products_strategy(),
        filter in filter_strategy(),
    ) {
        let result = filter.apply(&products);
        for (index, product) in products.iter().enumerate() {
            prop_assert_eq!(result.contains(&index), filter.matches(product));
        }
    }

    /// Every query-only match carries the query as a case-insensitive substring
    #[test]
    fn query_matches_contain_query(
        products in products_strategy(),
        query in word_strategy(),
    ) {
        let filter = ProductFilter { query: query.clone(), ..Default::default() };
        let needle = query.trim().to_lowercase();
        for index in filter.apply(&products) {
            let product = &products[index];
            let hit = product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
                || product.features.iter().any(|f| f.to_lowercase().contains(&needle));
            prop_assert!(hit, "product {} does not contain {:?}", product.name, needle);
        }
    }

    /// An active type facet only ever returns badged products
    #[test]
    fn type_facet_excludes_badgeless(
        products in products_strategy(),
        types in prop::collection::vec(word_strategy(), 1..3),
    ) {
        let filter = ProductFilter { types, ..Default::default() };
        for index in filter.apply(&products) {
            prop_assert!(products[index].badge.is_some());
        }
    }

    /// Switching to a different category always lands in a clean state
    #[test]
    fn category_switch_resets_state(ops in view_ops_strategy(), target in 0..3usize) {
        let mut view = ProductsView::default();
        for op in &ops {
            apply_op(&mut view, op);
        }

        let mode_before = view.view_mode;
        let came_from = view.active_category;
        view.select_category(target);

        if came_from != target {
            prop_assert!(view.selected_product.is_none());
            prop_assert!(view.filter.is_empty());
            prop_assert!(!view.filter_panel_open);
        }
        // Layout choice survives navigation either way
        prop_assert_eq!(view.view_mode, mode_before);
        prop_assert_eq!(view.active_category, target);
    }

    /// Toggling the view mode never changes membership or selection
    #[test]
    fn view_mode_is_membership_neutral(ops in view_ops_strategy()) {
        let catalog = Catalog::get();
        let mut view = ProductsView::default();
        for op in &ops {
            apply_op(&mut view, op);
        }

        let selection = view.selected_product.clone();
        let visible = view.visible_products(catalog);

        view.set_view_mode(ViewMode::List);
        prop_assert_eq!(&view.selected_product, &selection);
        prop_assert_eq!(view.visible_products(catalog), visible.clone());

        view.set_view_mode(ViewMode::Grid);
        prop_assert_eq!(&view.selected_product, &selection);
        prop_assert_eq!(view.visible_products(catalog), visible);
    }
}
