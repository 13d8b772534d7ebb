//! Home-page product overview: category tabs over the shared catalog with a
//! card per product, all linking into the full products page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::icons;
use crate::components::products::{CategoryTabs, ProductImage};
use crate::context::use_catalog;
use crate::theme::colors;

#[component]
pub fn ProductsOverviewSection() -> Element {
    let catalog = use_catalog();
    let mut active = use_signal(|| 0usize);

    let index = *active.read();
    let Some(category) = catalog.category(index) else {
        tracing::warn!(index, "active category out of range");
        return rsx! {};
    };

    rsx! {
        section {
            class: "section section-alt",
            div {
                class: "container",
                div {
                    class: "section-header",
                    h2 { class: "section-title", "Our Solutions Portfolio" }
                    div { class: "section-rule" }
                    p {
                        class: "section-lead",
                        "Three integrated product families covering intelligence \
                         collection, communications protection, and data analysis."
                    }
                }

                CategoryTabs {
                    active: index,
                    on_select: move |i| active.set(i),
                }

                div {
                    class: "featured-grid",
                    for product in category.products.iter() {
                        div {
                            class: "featured-card",
                            div {
                                class: "featured-media",
                                div {
                                    class: "featured-top-bar",
                                    style: "background: {colors::category_gradient(&category.color)};",
                                }
                                ProductImage {
                                    image: product.image.clone(),
                                    alt: product.name.clone(),
                                    icon: category.icon,
                                }
                                div {
                                    class: "featured-footer",
                                    span { class: "featured-name", "{product.name}" }
                                    if let Some(badge) = &product.badge {
                                        span { class: "featured-tag", "{badge.text}" }
                                    }
                                }
                            }
                            div {
                                class: "featured-body",
                                p { class: "card-text", "{product.description}" }
                                Link {
                                    class: "featured-link",
                                    to: Route::Products {},
                                    "View Details"
                                    {icons::arrow_right_icon(14)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
