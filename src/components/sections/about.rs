//! "Who We Are" section: company background, vision, and team capabilities.

use dioxus::prelude::*;

use crate::components::icons;

struct Capability {
    title: &'static str,
    text: &'static str,
    icon: fn(u32) -> Element,
}

static CAPABILITIES: [Capability; 4] = [
    Capability {
        title: "Strategic Security",
        text: "Comprehensive security strategies tailored to the specific threat \
               landscape of each client.",
        icon: icons::shield_icon,
    },
    Capability {
        title: "Secure Communications",
        text: "Protected channels and infrastructure for mission-critical \
               communications.",
        icon: icons::lock_icon,
    },
    Capability {
        title: "Global Intelligence",
        text: "Worldwide intelligence capabilities supporting operations across \
               borders and jurisdictions.",
        icon: icons::globe_icon,
    },
    Capability {
        title: "Advanced Technology",
        text: "Proprietary systems built on the latest advances in signal \
               processing and machine intelligence.",
        icon: icons::cpu_icon,
    },
];

const TEAM_POINTS: [&str; 3] = [
    "Veterans of elite intelligence and security agencies",
    "Engineers specialized in RF systems and signal intelligence",
    "Data scientists advancing applied machine learning for security",
];

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section {
            class: "section section-alt",
            div {
                class: "container",
                div {
                    class: "section-header",
                    h2 { class: "section-title", "Who We Are" }
                    div { class: "section-rule" }
                    p {
                        class: "section-lead",
                        "SentraIntel is a leading provider of advanced security and \
                         intelligence solutions, serving government agencies, defense \
                         forces, and organizations with critical security needs around \
                         the globe."
                    }
                }

                div {
                    class: "about-grid",
                    div {
                        h3 { class: "prose-heading", "Our Multidisciplinary Team" }
                        p {
                            class: "prose",
                            "Our strength comes from the people behind the technology. \
                             SentraIntel brings together specialists from intelligence, \
                             engineering, and data science, united by a single mission: \
                             keeping our clients ahead of the threat."
                        }
                        ul {
                            class: "check-list",
                            for point in TEAM_POINTS {
                                li {
                                    class: "check-item",
                                    span { class: "check-dot", {icons::check_icon(12)} }
                                    span { "{point}" }
                                }
                            }
                        }
                    }
                    blockquote {
                        class: "vision-quote",
                        "\u{201c}In a world where threats evolve faster than ever, true \
                         security comes from intelligence that anticipates rather than \
                         reacts. We build the systems that see around corners.\u{201d}"
                        div { class: "vision-attribution", "\u{2014} SentraIntel Vision" }
                    }
                }

                div {
                    class: "feature-grid",
                    for cap in CAPABILITIES.iter() {
                        div {
                            class: "feature-card",
                            div { class: "feature-icon", {(cap.icon)(24)} }
                            h3 { class: "card-heading", "{cap.title}" }
                            p { class: "card-text", "{cap.text}" }
                        }
                    }
                }
            }
        }
    }
}
