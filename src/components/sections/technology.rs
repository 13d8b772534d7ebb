//! "Our Technology" section: capability cards plus the innovation panel.

use dioxus::prelude::*;

use crate::components::icons;

struct TechCard {
    title: &'static str,
    text: &'static str,
    icon: fn(u32) -> Element,
}

static TECH_CARDS: [TechCard; 6] = [
    TechCard {
        title: "Multi-band Solutions",
        text: "Coverage across 2G, 3G, 4G, and 5G networks with simultaneous \
               multi-band operation.",
        icon: icons::radio_icon,
    },
    TechCard {
        title: "Advanced Algorithms",
        text: "Proprietary signal processing and classification algorithms tuned \
               for dense RF environments.",
        icon: icons::cpu_icon,
    },
    TechCard {
        title: "Modular Software",
        text: "Composable software stacks that adapt to each mission profile \
               without custom engineering.",
        icon: icons::layers_icon,
    },
    TechCard {
        title: "Real-time Monitoring",
        text: "Continuous situational awareness with alerting measured in \
               milliseconds, not minutes.",
        icon: icons::activity_icon,
    },
    TechCard {
        title: "Scalable Infrastructure",
        text: "From single tactical units to nationwide deployments on the same \
               architecture.",
        icon: icons::server_icon,
    },
    TechCard {
        title: "Secure Architecture",
        text: "Defense-grade encryption and zero-trust design throughout every \
               layer of the platform.",
        icon: icons::lock_icon,
    },
];

const INNOVATION_CARDS: [(&str, &str); 4] = [
    (
        "Advanced Signal Processing",
        "Next-generation DSP pipelines that extract actionable intelligence from \
         the noisiest environments.",
    ),
    (
        "Predictive AI Systems",
        "Machine learning models that anticipate threat patterns before they \
         fully materialize.",
    ),
    (
        "Quantum-Resistant Encryption",
        "Cryptographic schemes designed to withstand the computing power of \
         tomorrow.",
    ),
    (
        "Adaptive Security Architecture",
        "Systems that reconfigure their own defenses in response to the evolving \
         threat surface.",
    ),
];

#[component]
pub fn TechnologySection() -> Element {
    rsx! {
        section {
            class: "section section-alt",
            div {
                class: "container",
                div {
                    class: "section-header",
                    h2 { class: "section-title", "Our Technology" }
                    div { class: "section-rule" }
                    p {
                        class: "section-lead",
                        "Every SentraIntel product is built on a common technology \
                         foundation engineered for performance, resilience, and \
                         security."
                    }
                }

                div {
                    class: "tech-grid",
                    for card in TECH_CARDS.iter() {
                        div {
                            class: "tech-card",
                            div { class: "tech-icon", {(card.icon)(24)} }
                            h3 { class: "card-heading", "{card.title}" }
                            p { class: "card-text", "{card.text}" }
                        }
                    }
                }

                div {
                    class: "innovation-panel",
                    h3 { class: "prose-heading", "Technology Innovation at Our Core" }
                    p {
                        class: "prose",
                        "Our research teams push beyond today's requirements, \
                         investing in the capabilities our clients will depend on \
                         next."
                    }
                    div {
                        class: "innovation-grid",
                        for (title, text) in INNOVATION_CARDS {
                            div {
                                class: "innovation-card",
                                h4 { class: "card-heading", "{title}" }
                                p { class: "card-text", "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
