//! Carousel component for image galleries.
//!
//! Provides an accessible cross-fading carousel with prev/next controls and
//! dot navigation. It shares the `data-slider` contract with the hero slider,
//! so `static/js/slider.js` drives both.

use maud::{html, Markup, Render};

/// Images shown when a carousel is built without any.
pub const FALLBACK_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=1400&q=80",
    "https://images.unsplash.com/photo-1528214096798-37891f23454c?auto=format&fit=crop&w=1400&q=80",
];

const DEFAULT_INTERVAL_MS: u32 = 6500;

/// A single image in a carousel.
#[derive(Debug, Clone)]
pub struct CarouselImage<'a> {
    pub src: &'a str,
    /// Alt text for accessibility
    pub alt: &'a str,
}

impl<'a> CarouselImage<'a> {
    /// Create a new carousel image.
    #[must_use]
    pub fn new(src: &'a str, alt: &'a str) -> Self {
        Self { src, alt }
    }
}

/// Carousel component for browsing image galleries.
///
/// # Example
///
/// ```ignore
/// use crate::components::Carousel;
///
/// let carousel = Carousel::new("about")
///     .add_image("https://images.unsplash.com/photo-1.jpg", "Tea country")
///     .add_image("https://images.unsplash.com/photo-2.jpg", "Galle Fort")
///     .interval(6000);
///
/// html! {
///     (carousel)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    /// Unique ID for this carousel instance
    pub id: &'a str,
    /// Images to display in the carousel
    pub images: Vec<CarouselImage<'a>>,
    /// Autoplay interval in milliseconds
    pub interval_ms: u32,
    /// Alt text used for fallback images
    pub fallback_alt: &'a str,
}

impl<'a> Carousel<'a> {
    /// Create a new carousel with the given ID.
    #[must_use]
    pub fn new(id: &'a str) -> Self {
        Self {
            id,
            images: Vec::new(),
            interval_ms: DEFAULT_INTERVAL_MS,
            fallback_alt: "Sri Lanka travel",
        }
    }

    /// Add an image to the carousel.
    #[must_use]
    pub fn add_image(mut self, src: &'a str, alt: &'a str) -> Self {
        self.images.push(CarouselImage::new(src, alt));
        self
    }

    /// Set all images at once.
    #[must_use]
    pub fn with_images(mut self, images: Vec<CarouselImage<'a>>) -> Self {
        self.images = images;
        self
    }

    /// Set the autoplay interval.
    #[must_use]
    pub fn interval(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Set the alt text used when falling back to the default images.
    #[must_use]
    pub fn fallback_alt(mut self, alt: &'a str) -> Self {
        self.fallback_alt = alt;
        self
    }

    /// Images to render, substituting the fallbacks for an empty gallery.
    fn slides(&self) -> Vec<CarouselImage<'a>> {
        if self.images.is_empty() {
            FALLBACK_IMAGES
                .iter()
                .map(|src| CarouselImage::new(src, self.fallback_alt))
                .collect()
        } else {
            self.images.clone()
        }
    }
}

impl Render for Carousel<'_> {
    fn render(&self) -> Markup {
        let slides = self.slides();
        let multiple = slides.len() > 1;

        html! {
            div class="carousel"
                id=(format!("carousel-{}", self.id))
                data-slider
                data-interval=[multiple.then_some(self.interval_ms)] {
                div class="carousel-track" role="region" aria-label="Image gallery" {
                    @for (index, image) in slides.iter().enumerate() {
                        @let active = index == 0;
                        div class=(if active { "carousel-item is-active" } else { "carousel-item" })
                            data-slide=(index)
                            aria-hidden=(if active { "false" } else { "true" }) {
                            img src=(image.src)
                                alt=(image.alt)
                                loading=(if active { "eager" } else { "lazy" });
                        }
                    }
                }

                @if multiple {
                    div class="slider-controls" {
                        div class="slider-dots" {
                            @for index in 0..slides.len() {
                                button type="button"
                                    class=(if index == 0 { "slider-dot is-active" } else { "slider-dot" })
                                    data-slide-to=(index)
                                    aria-label=(format!("Go to slide {}", index + 1)) {}
                            }
                        }
                        div class="slider-buttons" {
                            button type="button" class="slider-btn" data-slider-prev aria-label="Previous slide" { "\u{2190}" }
                            button type="button" class="slider-btn slider-btn-next" data-slider-next aria-label="Next slide" { "\u{2192}" }
                        }
                    }
                }
            }
        }
    }
}
