//! Reusable maud building blocks for the site's pages.
//!
//! Everything here implements [`maud::Render`] (or renders through a
//! builder) and only emits markup; the client scripts under `static/js`
//! attach behavior through `data-*` attributes.
//!
//! - `layout`, `metadata`: page shell, navigation and social previews
//! - `card`, `hero`, `carousel`: story cards and the two slider variants
//! - `pagination`: Newer/Older navigation through the story feed
//! - `button`, `form`: calls to action and the contact form controls

pub mod button;
pub mod card;
pub mod carousel;
pub mod form;
pub mod hero;
pub mod layout;
pub mod metadata;
pub mod pagination;

pub use button::{Button, ButtonVariant};
pub use card::{EmptyState, PostCard, PostGrid};
pub use carousel::{Carousel, CarouselImage};
pub use form::{Control, Form, FormGroup, Input, InputKind, TextArea};
pub use hero::HeroSlider;
pub use layout::BaseLayout;
pub use metadata::OpenGraphMetadata;
pub use pagination::Pagination;
