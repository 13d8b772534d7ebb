use dioxus::prelude::*;

use crate::components::sections::{CtaSection, TechnologySection};
use crate::components::{Footer, NavHeader, NavLocation};

#[component]
pub fn Technology() -> Element {
    rsx! {
        div {
            class: "page-shell",
            NavHeader { current: NavLocation::Technology }
            main {
                class: "page-main",
                TechnologySection {}
                CtaSection {}
            }
            Footer {}
        }
    }
}
