use dioxus::prelude::*;

use crate::components::sections::{AboutSection, CtaSection};
use crate::components::{Footer, NavHeader, NavLocation};

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "page-shell",
            NavHeader { current: NavLocation::About }
            main {
                class: "page-main",
                AboutSection {}
                CtaSection {}
            }
            Footer {}
        }
    }
}
