//! List-view product row.

use dioxus::prelude::*;
use sentra_catalog::{CategoryIcon, Product};

use crate::components::icons;
use crate::components::products::ProductImage;
use crate::theme::colors;

#[component]
pub fn ProductListItem(
    product: Product,
    category_name: String,
    category_color: String,
    category_icon: CategoryIcon,
    on_select: EventHandler<String>,
) -> Element {
    let slug = product.slug();
    let gradient = colors::category_gradient(&category_color);
    let extra_features = product.features.len().saturating_sub(4);

    rsx! {
        div {
            class: "list-item",
            div {
                class: "list-item-media",
                div { class: "list-accent", style: "background: {gradient};" }
                ProductImage {
                    image: product.image.clone(),
                    alt: product.name.clone(),
                    icon: category_icon,
                }
            }
            div {
                class: "list-body",
                div {
                    class: "list-header",
                    div {
                        h3 { class: "card-heading", "{product.name}" }
                        span { class: "card-category", "{category_name}" }
                    }
                    if let Some(badge) = &product.badge {
                        span {
                            class: "badge",
                            style: "position: static; background: {colors::badge_background(&badge.color)};",
                            "{badge.text}"
                        }
                    }
                }
                p { class: "card-desc", "{product.description}" }
                div {
                    class: "list-feature-grid",
                    for feature in product.features.iter().take(4) {
                        div {
                            class: "feature-row",
                            span { class: "check-icon", {icons::check_icon(14)} }
                            span { "{feature}" }
                        }
                    }
                }
                if extra_features > 0 {
                    div { class: "more-features", "+{extra_features} more" }
                }
                div {
                    class: "list-actions",
                    button {
                        class: "details-btn",
                        onclick: move |_| on_select.call(slug.clone()),
                        "View Details"
                        {icons::arrow_right_icon(14)}
                    }
                }
            }
        }
    }
}
