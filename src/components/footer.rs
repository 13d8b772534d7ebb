//! Site footer: brand blurb, quick links, and direct contact details.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::icons;
use crate::components::nav_header::NavLocation;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "container",
                div {
                    class: "footer-grid",
                    div {
                        div { class: "footer-brand", "SentraIntel" }
                        p {
                            class: "footer-blurb",
                            "Advanced security and intelligence solutions for governments, \
                             defense forces, and critical infrastructure worldwide."
                        }
                    }
                    div {
                        h3 { class: "footer-heading", "Quick Links" }
                        ul {
                            class: "footer-links",
                            for location in NavLocation::ALL {
                                li {
                                    Link {
                                        class: "footer-link",
                                        to: location.route(),
                                        "{location.display_name()}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        h3 { class: "footer-heading", "Contact" }
                        div {
                            class: "footer-contact-row",
                            span { class: "contact-icon", {icons::mail_icon(16)} }
                            span { "contact@sentraintel.com" }
                        }
                        div {
                            class: "footer-contact-row",
                            span { class: "contact-icon", {icons::phone_icon(16)} }
                            span { "+1 (646) 329 4054" }
                        }
                        div {
                            class: "footer-contact-row",
                            span { class: "contact-icon", {icons::map_pin_icon(16)} }
                            span { "358 8th Street Apt 301, Manhattan, NY" }
                        }
                        div {
                            class: "footer-contact-row",
                            span { class: "contact-icon", {icons::globe_icon(16)} }
                            span { "United States" }
                        }
                    }
                }
                div {
                    class: "footer-bottom",
                    span { "\u{a9}{year} SentraIntel. All rights reserved." }
                    div {
                        span { class: "footer-link", "Privacy Policy" }
                        span { "  \u{b7}  " }
                        span { class: "footer-link", "Terms of Service" }
                    }
                }
            }
        }
    }
}
