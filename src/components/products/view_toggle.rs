//! Grid/list view switch.

use dioxus::prelude::*;
use sentra_catalog::ViewMode;

use crate::components::icons;

#[component]
pub fn ViewToggle(mode: ViewMode, on_change: EventHandler<ViewMode>) -> Element {
    rsx! {
        div {
            class: "view-toggle",
            button {
                class: if mode == ViewMode::Grid { "view-toggle-btn active" } else { "view-toggle-btn" },
                title: "Grid view",
                onclick: move |_| on_change.call(ViewMode::Grid),
                {icons::grid_icon(16)}
            }
            button {
                class: if mode == ViewMode::List { "view-toggle-btn active" } else { "view-toggle-btn" },
                title: "List view",
                onclick: move |_| on_change.call(ViewMode::List),
                {icons::list_icon(16)}
            }
        }
    }
}
