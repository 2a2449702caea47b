//! Social preview metadata (Open Graph and Twitter Card tags).

use maud::{html, Markup, Render};

use crate::constants::SITE_NAME;

const DEFAULT_TITLE: &str = "Lankan.org Travel Highlights";
const DEFAULT_DESCRIPTION: &str =
    "Fresh travel stories from Lankan.org, curated for wanderers planning their next Sri Lankan journey.";

/// Preview metadata for one page.
///
/// The Twitter card grows to `summary_large_image` when an image is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenGraphMetadata<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Site-relative path of the page
    pub path: &'a str,
    pub image: Option<&'a str>,
}

impl Default for OpenGraphMetadata<'_> {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE,
            description: DEFAULT_DESCRIPTION,
            path: "/",
            image: None,
        }
    }
}

impl<'a> OpenGraphMetadata<'a> {
    #[must_use]
    pub fn new(title: &'a str, description: &'a str, path: &'a str) -> Self {
        Self {
            title,
            description,
            path,
            image: None,
        }
    }

    /// Use `image` as the preview image, if there is one.
    #[must_use]
    pub fn with_image(mut self, image: Option<&'a str>) -> Self {
        self.image = image.filter(|url| !url.is_empty());
        self
    }

    #[must_use]
    pub fn twitter_card(&self) -> &'static str {
        if self.image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        }
    }
}

impl Render for OpenGraphMetadata<'_> {
    fn render(&self) -> Markup {
        html! {
            meta name="description" content=(self.description);

            meta property="og:title" content=(self.title);
            meta property="og:description" content=(self.description);
            meta property="og:url" content=(self.path);
            meta property="og:type" content="website";
            meta property="og:site_name" content=(SITE_NAME);
            @if let Some(image) = self.image {
                meta property="og:image" content=(image);
                meta property="og:image:alt" content=(self.title);
            }

            meta name="twitter:card" content=(self.twitter_card());
            meta name="twitter:title" content=(self.title);
            meta name="twitter:description" content=(self.description);
            @if let Some(image) = self.image {
                meta name="twitter:image" content=(image);
            }
        }
    }
}
