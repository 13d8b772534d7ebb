//! Product image with graceful fallback.

use dioxus::prelude::*;
use sentra_catalog::{CategoryIcon, DEFAULT_PRODUCT_IMAGE};

use crate::components::icons;

/// Renders a product image, falling back to a category-icon placeholder when
/// no image is configured or the configured one fails to load.
#[component]
pub fn ProductImage(
    /// Configured image path, if the product has one
    #[props(default = None)]
    image: Option<String>,
    alt: String,
    icon: CategoryIcon,
) -> Element {
    let mut failed = use_signal(|| false);

    let src = image
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_PRODUCT_IMAGE)
        .to_string();
    let logged_src = src.clone();

    rsx! {
        if *failed.read() {
            div {
                class: "image-fallback",
                div { class: "fallback-icon-orb", {icons::category_icon(icon, 28)} }
            }
        } else {
            img {
                class: "product-image",
                src: "{src}",
                alt: "{alt}",
                onerror: move |_| {
                    tracing::debug!(src = %logged_src, "product image failed to load");
                    failed.set(true);
                },
            }
        }
    }
}
