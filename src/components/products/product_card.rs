//! Grid-view product card.

use dioxus::prelude::*;
use sentra_catalog::{CategoryIcon, Product};

use crate::components::icons;
use crate::components::products::ProductImage;
use crate::theme::colors;

#[component]
pub fn ProductCard(
    product: Product,
    category_name: String,
    category_color: String,
    category_icon: CategoryIcon,
    on_select: EventHandler<String>,
) -> Element {
    let slug = product.slug();
    let gradient = colors::category_gradient(&category_color);
    let first_spec = product
        .details
        .as_ref()
        .and_then(|d| d.specifications.first())
        .cloned();
    let extra_features = product.features.len().saturating_sub(3);

    rsx! {
        div {
            class: "product-card",
            div { class: "card-accent", style: "background: {gradient};" }
            div {
                class: "product-image-wrap",
                ProductImage {
                    image: product.image.clone(),
                    alt: product.name.clone(),
                    icon: category_icon,
                }
                if let Some(badge) = &product.badge {
                    span {
                        class: "badge",
                        style: "background: {colors::badge_background(&badge.color)};",
                        "{badge.text}"
                    }
                }
                div { class: "image-title", "{product.name}" }
            }
            div {
                class: "card-body",
                p { class: "card-desc", "{product.description}" }
                div {
                    class: "feature-box",
                    div { class: "feature-box-title", "Key Features" }
                    for feature in product.features.iter().take(3) {
                        div {
                            class: "feature-row",
                            span { class: "check-icon", {icons::check_icon(14)} }
                            span { "{feature}" }
                        }
                    }
                    if extra_features > 0 {
                        div { class: "more-features", "+{extra_features} more features" }
                    }
                    if let Some((label, value)) = &first_spec {
                        div {
                            class: "feature-row",
                            style: "margin-top: 8px; border-top: 1px solid var(--border-soft); padding-top: 8px;",
                            span { style: "color: var(--text-muted);", "{label}:" }
                            span { "{value}" }
                        }
                    }
                }
                div {
                    class: "card-footer",
                    button {
                        class: "details-btn",
                        onclick: move |_| on_select.call(slug.clone()),
                        "View Details"
                        {icons::arrow_right_icon(14)}
                    }
                    span { class: "card-category", "{category_name}" }
                }
            }
        }
    }
}
