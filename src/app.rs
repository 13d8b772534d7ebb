use dioxus::prelude::*;
use sentra_catalog::Catalog;

use crate::pages::{About, Contact, Home, Products, Solutions, Technology};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// One route per page of the site: home, about, solutions, products,
/// technology, and contact.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/solutions")]
    Solutions {},
    #[route("/products")]
    Products {},
    #[route("/technology")]
    Technology {},
    #[route("/contact")]
    Contact {},
}

/// Root application component.
///
/// Provides global styles, the shared catalog, and routing.
#[component]
pub fn App() -> Element {
    // The catalog is a static constant; every page reads the same instance
    use_context_provider(|| Catalog::get());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
