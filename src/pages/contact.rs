use dioxus::prelude::*;

use crate::components::sections::ContactSection;
use crate::components::{Footer, NavHeader, NavLocation};

#[component]
pub fn Contact() -> Element {
    rsx! {
        div {
            class: "page-shell",
            NavHeader { current: NavLocation::Contact }
            main {
                class: "page-main",
                ContactSection {}
            }
            Footer {}
        }
    }
}
