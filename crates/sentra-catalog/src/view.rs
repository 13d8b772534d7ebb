//! Products page view state.
//!
//! The page keeps one [`ProductsView`] value in a signal and renders from it;
//! every control (tabs, toggle, filter panel, cards, modal) feeds back into it
//! through the transition methods here. Switching category resets the
//! selection and the filter so the new category always opens clean.

use serde::{Deserialize, Serialize};

use crate::data::Catalog;
use crate::filter::ProductFilter;

/// Product listing layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// State of the products page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsView {
    /// Index of the category whose products are listed
    pub active_category: usize,
    /// Grid or list layout; never affects membership or selection
    pub view_mode: ViewMode,
    /// Slug of the product open in the detail modal, if any
    pub selected_product: Option<String>,
    /// Active search query and facets
    pub filter: ProductFilter,
    /// Whether the filter panel is expanded
    pub filter_panel_open: bool,
}

impl ProductsView {
    /// Switch to another category.
    ///
    /// Clears the selected product, the query, both facet sets, and closes
    /// the filter panel. Re-selecting the current category is a no-op.
    pub fn select_category(&mut self, index: usize) {
        if index == self.active_category {
            return;
        }
        self.active_category = index;
        self.selected_product = None;
        self.filter = ProductFilter::default();
        self.filter_panel_open = false;
    }

    /// Switch between grid and list layout
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Open the detail modal for a product
    pub fn select_product(&mut self, slug: impl Into<String>) {
        self.selected_product = Some(slug.into());
    }

    /// Close the detail modal
    pub fn clear_selection(&mut self) {
        self.selected_product = None;
    }

    /// Expand or collapse the filter panel
    pub fn toggle_filter_panel(&mut self) {
        self.filter_panel_open = !self.filter_panel_open;
    }

    /// Replace the free-text query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Toggle one badge-type facet value
    pub fn toggle_type(&mut self, value: &str) {
        self.filter.toggle_type(value);
    }

    /// Toggle one compatibility facet value
    pub fn toggle_compatibility(&mut self, value: &str) {
        self.filter.toggle_compatibility(value);
    }

    /// Indices of the active category's products that pass the filter
    pub fn visible_products(&self, catalog: &Catalog) -> Vec<usize> {
        catalog
            .category(self.active_category)
            .map(|c| self.filter.apply(&c.products))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = ProductsView::default();
        assert_eq!(view.active_category, 0);
        assert_eq!(view.view_mode, ViewMode::Grid);
        assert!(view.selected_product.is_none());
        assert!(view.filter.is_empty());
        assert!(!view.filter_panel_open);
    }

    #[test]
    fn test_select_category_resets_selection_and_filter() {
        let mut view = ProductsView::default();
        view.select_product("sentra-route-x1");
        view.set_query("radar");
        view.toggle_type("Flagship");
        view.toggle_filter_panel();

        view.select_category(1);

        assert_eq!(view.active_category, 1);
        assert!(view.selected_product.is_none());
        assert!(view.filter.is_empty());
        assert!(!view.filter_panel_open);
    }

    #[test]
    fn test_reselecting_current_category_keeps_state() {
        let mut view = ProductsView::default();
        view.select_product("sentra-route-x1");
        view.set_query("radar");

        view.select_category(0);

        assert_eq!(view.selected_product.as_deref(), Some("sentra-route-x1"));
        assert_eq!(view.filter.query, "radar");
    }

    #[test]
    fn test_view_mode_never_touches_selection_or_membership() {
        let catalog = Catalog::get();
        let mut view = ProductsView::default();
        view.select_product("sentra-route-x1");
        view.set_query("tactical");
        let before = view.visible_products(catalog);

        view.set_view_mode(ViewMode::List);
        assert_eq!(view.selected_product.as_deref(), Some("sentra-route-x1"));
        assert_eq!(view.visible_products(catalog), before);

        view.set_view_mode(ViewMode::Grid);
        assert_eq!(view.visible_products(catalog), before);
    }

    #[test]
    fn test_visible_products_follow_filter() {
        let catalog = Catalog::get();
        let mut view = ProductsView::default();
        view.select_category(1);
        view.set_query("perimeter");

        let visible = view.visible_products(catalog);
        let shield = catalog.category(1).unwrap();
        let names: Vec<&str> = visible
            .into_iter()
            .map(|i| shield.products[i].name.as_str())
            .collect();
        assert_eq!(names, vec!["Sentra GeoLock"]);
    }

    #[test]
    fn test_visible_products_out_of_range_category() {
        let catalog = Catalog::get();
        let view = ProductsView {
            active_category: 99,
            ..Default::default()
        };
        assert!(view.visible_products(catalog).is_empty());
    }

    #[test]
    fn test_clear_selection() {
        let mut view = ProductsView::default();
        view.select_product("sentra-geolock");
        view.clear_selection();
        assert!(view.selected_product.is_none());
    }
}
