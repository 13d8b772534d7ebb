//! Filter panel: free-text search plus badge and compatibility facets.

use dioxus::prelude::*;
use sentra_catalog::ProductFilter;

#[component]
pub fn FilterPanel(
    filter: ProductFilter,
    type_options: Vec<String>,
    compat_options: Vec<String>,
    on_query: EventHandler<String>,
    on_toggle_type: EventHandler<String>,
    on_toggle_compat: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "filter-panel",
            input {
                class: "filter-search",
                r#type: "text",
                placeholder: "Search products by name, description, or feature...",
                value: "{filter.query}",
                oninput: move |evt| on_query.call(evt.value()),
            }
            div {
                class: "facet-groups",
                if !type_options.is_empty() {
                    div {
                        div { class: "facet-title", "Product Type" }
                        for option in type_options.iter() {
                            label {
                                class: "facet-option",
                                input {
                                    r#type: "checkbox",
                                    checked: filter.types.contains(option),
                                    onchange: {
                                        let value = option.clone();
                                        move |_| on_toggle_type.call(value.clone())
                                    },
                                }
                                span { "{option}" }
                            }
                        }
                    }
                }
                if !compat_options.is_empty() {
                    div {
                        div { class: "facet-title", "Compatible With" }
                        for option in compat_options.iter() {
                            label {
                                class: "facet-option",
                                input {
                                    r#type: "checkbox",
                                    checked: filter.compatibility.contains(option),
                                    onchange: {
                                        let value = option.clone();
                                        move |_| on_toggle_compat.call(value.clone())
                                    },
                                }
                                span { "{option}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
