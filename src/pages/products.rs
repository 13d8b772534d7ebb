//! Products page: category tabs, filterable grid/list, and the detail modal.
//!
//! All page state lives in one [`ProductsView`] signal; the components below
//! only render from it and feed events back into its transition methods.

use dioxus::prelude::*;
use sentra_catalog::{badge_values, compatibility_values, ProductsView, ViewMode};

use crate::components::products::{
    CategoryTabs, FilterPanel, ProductCard, ProductDetailModal, ProductListItem, ViewToggle,
};
use crate::components::sections::CtaSection;
use crate::components::{icons, Footer, NavHeader, NavLocation};
use crate::context::use_catalog;

#[component]
pub fn Products() -> Element {
    let catalog = use_catalog();
    let mut view = use_signal(ProductsView::default);

    let v = view.read().clone();
    let Some(category) = catalog.category(v.active_category) else {
        tracing::warn!(index = v.active_category, "active category out of range");
        return rsx! {};
    };
    let visible = v.visible_products(catalog);
    let type_options = badge_values(category);
    let compat_options = compatibility_values(category);

    // Modal product resolved against the active category only; a stale slug
    // from a previous category renders nothing.
    let selected = v
        .selected_product
        .as_ref()
        .and_then(|slug| catalog.find_product(v.active_category, slug));
    if v.selected_product.is_some() && selected.is_none() {
        tracing::debug!(slug = ?v.selected_product, "selected product not in active category");
    }

    let filter_btn_class = if v.filter_panel_open || !v.filter.is_empty() {
        "filter-toggle-btn active"
    } else {
        "filter-toggle-btn"
    };

    rsx! {
        div {
            class: "page-shell",
            NavHeader { current: NavLocation::Products }
            main {
                class: "page-main",
                section {
                    class: "section",
                    div {
                        class: "container",
                        div {
                            class: "section-header",
                            span { class: "page-eyebrow", "Product Catalog" }
                            h1 { class: "section-title", "Our Products" }
                            div { class: "section-rule" }
                            p {
                                class: "section-lead",
                                "Explore our complete range of security and intelligence \
                                 products, from tactical field units to nationwide \
                                 analytical platforms."
                            }
                        }

                        CategoryTabs {
                            active: v.active_category,
                            on_select: move |index| view.write().select_category(index),
                        }

                        div {
                            class: "products-toolbar",
                            h2 { class: "category-heading", "{category.name} Solutions" }
                            div {
                                class: "toolbar-actions",
                                button {
                                    class: "{filter_btn_class}",
                                    onclick: move |_| view.write().toggle_filter_panel(),
                                    {icons::filter_icon(14)}
                                    "Filter"
                                }
                                ViewToggle {
                                    mode: v.view_mode,
                                    on_change: move |mode| view.write().set_view_mode(mode),
                                }
                            }
                        }

                        if v.filter_panel_open {
                            FilterPanel {
                                filter: v.filter.clone(),
                                type_options: type_options.clone(),
                                compat_options: compat_options.clone(),
                                on_query: move |query: String| view.write().set_query(query),
                                on_toggle_type: move |value: String| view.write().toggle_type(&value),
                                on_toggle_compat: move |value: String| {
                                    view.write().toggle_compatibility(&value)
                                },
                            }
                        }

                        if visible.is_empty() {
                            div {
                                class: "no-products",
                                "No products match the current filters."
                            }
                        } else if v.view_mode == ViewMode::Grid {
                            div {
                                class: "product-grid",
                                for index in visible.iter().copied() {
                                    ProductCard {
                                        product: category.products[index].clone(),
                                        category_name: category.name.clone(),
                                        category_color: category.color.clone(),
                                        category_icon: category.icon,
                                        on_select: move |slug: String| view.write().select_product(slug),
                                    }
                                }
                            }
                        } else {
                            div {
                                class: "product-list",
                                for index in visible.iter().copied() {
                                    ProductListItem {
                                        product: category.products[index].clone(),
                                        category_name: category.name.clone(),
                                        category_color: category.color.clone(),
                                        category_icon: category.icon,
                                        on_select: move |slug: String| view.write().select_product(slug),
                                    }
                                }
                            }
                        }
                    }
                }
                CtaSection {}
            }
            Footer {}

            if let Some(product) = selected {
                ProductDetailModal {
                    product: product.clone(),
                    category_name: category.name.clone(),
                    category_color: category.color.clone(),
                    category_icon: category.icon,
                    on_close: move |_| view.write().clear_selection(),
                }
            }
        }
    }
}
