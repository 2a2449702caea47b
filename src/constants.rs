//! Shared constants used across the application.

/// User agent sent with upstream feed requests.
pub const USER_AGENT: &str = concat!("srilankan-vacations/", env!("CARGO_PKG_VERSION"));

/// Name shown in page titles and the header.
pub const SITE_NAME: &str = "Srilankan.vacations";

/// Publisher credited in the footer and the home page intro.
pub const PUBLISHER_NAME: &str = "Lankan.org";

/// Publisher home page.
pub const PUBLISHER_URL: &str = "https://www.lankan.org";
