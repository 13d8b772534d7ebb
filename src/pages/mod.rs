//! Pages of the SentraIntel desktop app. Each page wraps its content with the
//! shared navigation header and footer.

mod about;
mod contact;
mod home;
mod products;
mod solutions;
mod technology;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use products::Products;
pub use solutions::Solutions;
pub use technology::Technology;
