//! Top navigation header.
//!
//! Sticky header with brand mark, one link per page, a consultation CTA, and
//! a collapsible menu for narrow windows.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::icons;

/// Which page the header is rendered on. Drives the active-link styling.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NavLocation {
    Home,
    About,
    Solutions,
    Products,
    Technology,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 6] = [
        NavLocation::Home,
        NavLocation::About,
        NavLocation::Solutions,
        NavLocation::Products,
        NavLocation::Technology,
        NavLocation::Contact,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::About => "About Us",
            NavLocation::Solutions => "Solutions",
            NavLocation::Products => "Products",
            NavLocation::Technology => "Technology",
            NavLocation::Contact => "Contact",
        }
    }

    pub fn route(self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::About => Route::About {},
            NavLocation::Solutions => Route::Solutions {},
            NavLocation::Products => Route::Products {},
            NavLocation::Technology => Route::Technology {},
            NavLocation::Contact => Route::Contact {},
        }
    }
}

#[component]
pub fn NavHeader(current: NavLocation) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "nav-header",
            div {
                class: "nav-inner",
                Link {
                    class: "nav-brand",
                    to: Route::Home {},
                    div {
                        class: "brand-mark",
                        {icons::shield_icon(22)}
                    }
                    div {
                        span { class: "brand-name", "SentraIntel" }
                        span { class: "brand-sub", "ADVANCED SECURITY" }
                    }
                }

                nav {
                    class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            class: if location == current { "nav-link active" } else { "nav-link" },
                            to: location.route(),
                            "{location.display_name()}"
                        }
                    }
                    Link {
                        class: "nav-cta",
                        to: Route::Contact {},
                        {icons::shield_icon(16)}
                        "Secure Consultation"
                    }
                    button {
                        class: "menu-toggle-btn",
                        onclick: move |_| {
                            let open = *menu_open.read();
                            menu_open.set(!open);
                        },
                        if *menu_open.read() {
                            {icons::close_icon(20)}
                        } else {
                            {icons::menu_icon(20)}
                        }
                    }
                }
            }

            if *menu_open.read() {
                div {
                    class: "compact-menu",
                    for location in NavLocation::ALL {
                        Link {
                            class: if location == current { "compact-menu-link active" } else { "compact-menu-link" },
                            to: location.route(),
                            onclick: move |_| menu_open.set(false),
                            "{location.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
