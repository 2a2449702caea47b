//! Full-page templates, one module per route.

mod about;
mod attractions;
mod contact;
mod home;

pub use about::render_about_page;
pub use attractions::render_attractions_page;
pub use contact::render_contact_page;
pub use home::{render_home_page, HomePageParams};
