//! Featured products strip: the lead product of each category.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::icons;
use crate::components::products::ProductImage;
use crate::context::use_catalog;
use crate::theme::colors;

#[component]
pub fn FeaturedProducts() -> Element {
    let catalog = use_catalog();

    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                div {
                    class: "section-header",
                    h2 { class: "section-title", "Featured Products" }
                    div { class: "section-rule" }
                }
                div {
                    class: "featured-grid",
                    for (category, product) in catalog.featured() {
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
                                    span { class: "featured-tag", "{category.name}" }
                                }
                            }
                            div {
                                class: "featured-body",
                                p { class: "card-text", "{product.description}" }
                                Link {
                                    class: "featured-link",
                                    to: Route::Products {},
                                    "Explore"
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
