use dioxus::prelude::*;

use crate::components::sections::{CtaSection, SolutionsSection};
use crate::components::{Footer, NavHeader, NavLocation};

#[component]
pub fn Solutions() -> Element {
    rsx! {
        div {
            class: "page-shell",
            NavHeader { current: NavLocation::Solutions }
            main {
                class: "page-main",
                SolutionsSection {}
                CtaSection {}
            }
            Footer {}
        }
    }
}
