//! Product detail modal.
//!
//! Full-screen overlay with tabbed content. Closes on overlay click, the
//! corner button, or Escape; clicks inside the dialog stay inside.

use dioxus::prelude::*;
use sentra_catalog::{CategoryIcon, Product, ProductDetails};

use crate::app::Route;
use crate::components::icons;
use crate::components::products::ProductImage;
use crate::theme::colors;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Specifications,
    UseCases,
}

#[component]
pub fn ProductDetailModal(
    product: Product,
    category_name: String,
    category_color: String,
    category_icon: CategoryIcon,
    on_close: EventHandler<()>,
) -> Element {
    let mut tab = use_signal(|| DetailTab::Overview);
    let active = *tab.read();

    let slug = product.slug();
    let gradient = colors::category_gradient(&category_color);
    let details = product.details.clone().unwrap_or_else(ProductDetails::default);
    let overview = details
        .overview
        .clone()
        .unwrap_or_else(|| product.description.clone());

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "product-modal",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "modal-hero",
                    ProductImage {
                        image: product.image.clone(),
                        alt: product.name.clone(),
                        icon: category_icon,
                    }
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| on_close.call(()),
                        {icons::close_icon(18)}
                    }
                    div {
                        class: "modal-hero-footer",
                        div { class: "modal-accent-bar", style: "background: {gradient};" }
                        h2 { class: "modal-title", "{product.name}" }
                        if let Some(badge) = &product.badge {
                            span {
                                class: "badge",
                                style: "position: static; background: {colors::badge_background(&badge.color)};",
                                "{badge.text}"
                            }
                        }
                    }
                }

                div {
                    class: "modal-tabs",
                    button {
                        class: if active == DetailTab::Overview { "modal-tab active" } else { "modal-tab" },
                        onclick: move |_| tab.set(DetailTab::Overview),
                        {icons::info_icon(16)}
                        "Overview"
                    }
                    button {
                        class: if active == DetailTab::Specifications { "modal-tab active" } else { "modal-tab" },
                        onclick: move |_| tab.set(DetailTab::Specifications),
                        {icons::cpu_icon(16)}
                        "Specifications"
                    }
                    button {
                        class: if active == DetailTab::UseCases { "modal-tab active" } else { "modal-tab" },
                        onclick: move |_| tab.set(DetailTab::UseCases),
                        {icons::target_icon(16)}
                        "Use Cases"
                    }
                }

                div {
                    class: "modal-body",
                    div {
                        {match active {
                            DetailTab::Overview => rsx! {
                                p { class: "prose", "{overview}" }
                                h3 { class: "modal-section-title", "Key Features" }
                                div {
                                    class: "modal-feature-grid",
                                    for feature in product.features.iter() {
                                        div {
                                            class: "feature-row",
                                            span { class: "check-icon", {icons::check_icon(14)} }
                                            span { "{feature}" }
                                        }
                                    }
                                }
                                if !details.benefits.is_empty() {
                                    h3 {
                                        class: "modal-section-title",
                                        style: "margin-top: 24px;",
                                        "Benefits"
                                    }
                                    for benefit in details.benefits.iter() {
                                        div {
                                            class: "feature-row",
                                            span { class: "check-icon", {icons::zap_icon(14)} }
                                            span { "{benefit}" }
                                        }
                                    }
                                }
                            },
                            DetailTab::Specifications => rsx! {
                                h3 { class: "modal-section-title", "Technical Specifications" }
                                if details.specifications.is_empty() {
                                    p { class: "card-text", "Detailed specifications available on request." }
                                } else {
                                    table {
                                        class: "spec-table",
                                        tbody {
                                            for (label, value) in details.specifications.iter() {
                                                tr {
                                                    td { class: "spec-label", "{label}" }
                                                    td { class: "spec-value", "{value}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            DetailTab::UseCases => rsx! {
                                h3 { class: "modal-section-title", "Operational Use Cases" }
                                if details.use_cases.is_empty() {
                                    p { class: "card-text", "Use case briefings available on request." }
                                } else {
                                    div {
                                        class: "use-case-grid",
                                        for use_case in details.use_cases.iter() {
                                            div {
                                                class: "use-case-card",
                                                span { class: "check-icon", {icons::target_icon(16)} }
                                                span { "{use_case}" }
                                            }
                                        }
                                    }
                                }
                            },
                        }}
                    }

                    div {
                        div {
                            class: "side-card",
                            h3 { class: "modal-section-title", "Product Details" }
                            div { class: "side-label", "Category" }
                            div { class: "side-value", "{category_name}" }
                            div { class: "side-label", "Product Name" }
                            div { class: "side-value", "{product.name}" }
                            div { class: "side-label", "Product ID" }
                            div { class: "side-value", "{slug}" }
                            if !details.compatible_with.is_empty() {
                                div { class: "side-divider" }
                                div { class: "side-label", "Compatible With" }
                                for name in details.compatible_with.iter() {
                                    div { class: "side-value", "{name}" }
                                }
                            }
                        }
                        div {
                            class: "side-card",
                            h3 { class: "modal-section-title", "Contact Us" }
                            p {
                                class: "card-text",
                                style: "margin-bottom: 16px;",
                                "Speak with a specialist about deployment options and \
                                 tailored configurations."
                            }
                            Link {
                                class: "request-btn",
                                to: Route::Contact {},
                                "Request Information"
                            }
                        }
                    }
                }
            }
        }
    }
}
