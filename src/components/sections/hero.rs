//! Landing hero: headline, pitch, and primary calls to action.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::icons;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "container",
                div {
                    class: "hero-grid",
                    div {
                        h1 {
                            class: "hero-title",
                            "Advanced Intelligence"
                            br {}
                            span { class: "hero-title-gradient", "for Tomorrow's Security" }
                        }
                        p {
                            class: "hero-copy",
                            "SentraIntel delivers cutting-edge security and intelligence \
                             solutions that empower governments and organizations to stay \
                             ahead of evolving threats in an increasingly complex world."
                        }
                        div {
                            class: "hero-actions",
                            Link {
                                class: "btn-primary",
                                to: Route::Solutions {},
                                "Discover Our Solutions"
                                {icons::arrow_right_icon(16)}
                            }
                            Link {
                                class: "btn-secondary",
                                to: Route::Contact {},
                                "Contact Us"
                            }
                        }
                    }
                    div {
                        class: "hero-panel",
                        div { class: "hero-orb orb-a" }
                        div { class: "hero-orb orb-b" }
                        div { class: "hero-orb orb-c" }
                        span { class: "hero-panel-label", "SentraIntel Technology" }
                    }
                }
                div {
                    style: "text-align: center; margin-top: 48px; color: var(--text-muted); font-size: 0.85rem;",
                    "Scroll to explore"
                    div {
                        style: "display: flex; justify-content: center; margin-top: 6px;",
                        {icons::chevron_down_icon(18)}
                    }
                }
            }
        }
    }
}
