//! Page sections: hero, about, solutions, technology, contact, and calls to
//! action. Pages compose these between the nav header and footer.

mod about;
mod contact;
mod cta;
mod hero;
mod products_overview;
mod solutions;
mod technology;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use cta::CtaSection;
pub use hero::HeroSection;
pub use products_overview::ProductsOverviewSection;
pub use solutions::SolutionsSection;
pub use technology::TechnologySection;
