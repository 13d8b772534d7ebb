//! Category selector tabs.

use dioxus::prelude::*;

use crate::components::icons;
use crate::context::use_catalog;
use crate::theme::colors;

#[component]
pub fn CategoryTabs(active: usize, on_select: EventHandler<usize>) -> Element {
    let catalog = use_catalog();

    rsx! {
        div {
            class: "category-tabs",
            for (index, category) in catalog.categories().iter().enumerate() {
                button {
                    class: if index == active { "category-tab active" } else { "category-tab" },
                    style: if index == active {
                        format!("background: {};", colors::category_gradient(&category.color))
                    } else {
                        String::new()
                    },
                    onclick: move |_| on_select.call(index),
                    div { class: "category-tab-icon", {icons::category_icon(category.icon, 24)} }
                    div {
                        div { class: "category-tab-name", "{category.name}" }
                        div { class: "category-tab-desc", "{category.description}" }
                        if index == active {
                            div { class: "tab-indicator" }
                        }
                    }
                }
            }
        }
    }
}
