use dioxus::prelude::*;

use crate::components::products::FeaturedProducts;
use crate::components::sections::{
    CtaSection, HeroSection, ProductsOverviewSection, SolutionsSection,
};
use crate::components::{Footer, NavHeader, NavLocation};

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page-shell",
            NavHeader { current: NavLocation::Home }
            main {
                class: "page-main",
                HeroSection {}
                SolutionsSection {}
                ProductsOverviewSection {}
                FeaturedProducts {}
                CtaSection {}
            }
            Footer {}
        }
    }
}
