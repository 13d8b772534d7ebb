//! "What We Do" section: three solution areas with a tabbed detail panel.

use dioxus::prelude::*;

use crate::components::icons;

struct Solution {
    title: &'static str,
    summary: &'static str,
    detail: &'static str,
    icon: fn(u32) -> Element,
}

static SOLUTIONS: [Solution; 3] = [
    Solution {
        title: "Advanced Operational Intelligence",
        summary: "Real-time situational awareness for complex operations.",
        detail: "Our operational intelligence platforms fuse signals, sensors, \
                 and analytics into a single operating picture, giving commanders \
                 and analysts the clarity to act decisively under pressure.",
        icon: icons::target_icon,
    },
    Solution {
        title: "Secure Communications",
        summary: "Protected channels for mission-critical information.",
        detail: "From encrypted tactical radios to hardened network \
                 infrastructure, we keep sensitive communications confidential \
                 and available when and where they matter most.",
        icon: icons::lock_icon,
    },
    Solution {
        title: "Comprehensive Risk Management",
        summary: "End-to-end protection for people, assets, and operations.",
        detail: "We assess, monitor, and mitigate risk across the full threat \
                 surface, combining perimeter protection, counter-surveillance, \
                 and continuous analysis into one coherent program.",
        icon: icons::shield_icon,
    },
];

const IMPLEMENTATION_POINTS: [&str; 3] = [
    "Strategic Implementation",
    "Seamless Integration",
    "Ongoing Support",
];

#[component]
pub fn SolutionsSection() -> Element {
    let mut active_tab = use_signal(|| 0usize);
    let active = *active_tab.read();
    let solution = &SOLUTIONS[active];

    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                div {
                    class: "section-header",
                    h2 { class: "section-title", "What We Do" }
                    div { class: "section-rule" }
                    p {
                        class: "section-lead",
                        "SentraIntel provides integrated security solutions across \
                         three core disciplines, each backed by field-proven \
                         technology and decades of operational experience."
                    }
                }

                div {
                    class: "solution-tabs",
                    for (index, item) in SOLUTIONS.iter().enumerate() {
                        button {
                            class: if index == active { "solution-tab active" } else { "solution-tab" },
                            onclick: move |_| active_tab.set(index),
                            div { class: "solution-tab-icon", {(item.icon)(20)} }
                            div {
                                div { class: "card-heading", "{item.title}" }
                                div { class: "card-text", "{item.summary}" }
                            }
                        }
                    }
                }

                div {
                    class: "solution-detail",
                    div {
                        h3 { class: "prose-heading", "{solution.title}" }
                        p { class: "prose", "{solution.detail}" }
                        div {
                            class: "solution-points",
                            for point in IMPLEMENTATION_POINTS {
                                div {
                                    class: "solution-point",
                                    span { class: "point-dot" }
                                    span { "{point}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "solution-visual",
                        div { class: "solution-visual-orb", {(solution.icon)(28)} }
                    }
                }
            }
        }
    }
}
