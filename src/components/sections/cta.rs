//! Closing call-to-action banner with trust indicators.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::icons;

struct TrustItem {
    title: &'static str,
    text: &'static str,
    icon: fn(u32) -> Element,
}

static TRUST_ITEMS: [TrustItem; 3] = [
    TrustItem {
        title: "Trusted Security",
        text: "Proven with agencies worldwide",
        icon: icons::shield_icon,
    },
    TrustItem {
        title: "Rapid Deployment",
        text: "Operational in days, not months",
        icon: icons::zap_icon,
    },
    TrustItem {
        title: "Confidential Support",
        text: "Discreet expert assistance 24/7",
        icon: icons::lock_icon,
    },
];

#[component]
pub fn CtaSection() -> Element {
    rsx! {
        section {
            class: "cta",
            div {
                class: "container",
                h2 {
                    class: "cta-title",
                    "Discover How Our Advanced Solutions"
                    br {}
                    "Can Strengthen Your Operations"
                }
                div {
                    class: "cta-actions",
                    Link {
                        class: "btn-primary",
                        to: Route::Contact {},
                        "Schedule a Consultation"
                    }
                    Link {
                        class: "btn-secondary",
                        to: Route::Solutions {},
                        "Explore Solutions"
                    }
                }
                div {
                    class: "trust-row",
                    for item in TRUST_ITEMS.iter() {
                        div {
                            class: "trust-item",
                            div { class: "trust-icon", {(item.icon)(20)} }
                            div {
                                div { style: "font-weight: 600; color: #fff;", "{item.title}" }
                                div { style: "font-size: 0.85rem; color: var(--text-muted);", "{item.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
