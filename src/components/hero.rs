//! Hero slider for the latest stories on the home page.
//!
//! The server renders every slide with the first one active. Rotation,
//! pausing and dot navigation are driven by `static/js/slider.js`, which
//! reads the `data-slider*` attributes emitted here.

use maud::{html, Markup, Render};

use super::button::Button;
use crate::feed::DisplayPost;

/// Maximum number of slides rendered.
pub const MAX_SLIDES: usize = 5;

/// Autoplay interval handed to the client script.
pub const SLIDE_INTERVAL_MS: u32 = 6500;

/// Hero slider component.
#[derive(Debug, Clone)]
pub struct HeroSlider<'a> {
    slides: &'a [DisplayPost],
}

impl<'a> HeroSlider<'a> {
    /// Create a slider over at most [`MAX_SLIDES`] of `posts`.
    #[must_use]
    pub fn new(posts: &'a [DisplayPost]) -> Self {
        Self {
            slides: &posts[..posts.len().min(MAX_SLIDES)],
        }
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn render_empty() -> Markup {
        html! {
            div class="hero-slider hero-empty" {
                p class="empty-title" { "Travel inspiration is on the way" }
                p { "We'll showcase the freshest stories here as soon as they load." }
            }
        }
    }

    fn render_slide(post: &DisplayPost, index: usize) -> Markup {
        let active = index == 0;
        html! {
            article class=(if active { "hero-slide is-active" } else { "hero-slide" })
                data-slide=(index)
                aria-hidden=(if active { "false" } else { "true" }) {
                div class="hero-slide-text" {
                    div class="hero-kicker" {
                        "Latest stories"
                        @if !post.date_label.is_empty() {
                            span class="hero-kicker-dot" aria-hidden="true" {}
                            span class="hero-kicker-date" { (post.date_label) }
                        }
                    }
                    a href=(post.link) target="_blank" rel="noopener noreferrer" {
                        h2 class="hero-title" { (post.title) }
                    }
                    p class="hero-summary" { (post.summary) }
                    div class="hero-actions" {
                        (Button::primary("Read more").href(&post.link).arrow())
                    }
                }
                div class="hero-slide-media" {
                    @if let Some(image_url) = &post.image_url {
                        img src=(image_url)
                            alt=(post.image_alt)
                            loading=(if active { "eager" } else { "lazy" });
                    } @else {
                        div class="hero-placeholder" aria-hidden="true" { "Travel" }
                    }
                }
            }
        }
    }

    fn render_controls(&self) -> Markup {
        html! {
            div class="slider-controls" {
                div class="slider-dots" {
                    @for index in 0..self.slides.len() {
                        button type="button"
                            class=(if index == 0 { "slider-dot is-active" } else { "slider-dot" })
                            data-slide-to=(index)
                            aria-label=(format!("Go to slide {}", index + 1)) {}
                    }
                }
                div class="slider-buttons" {
                    button type="button" class="slider-btn" data-slider-toggle aria-pressed="false" aria-label="Pause slides" {
                        "\u{275a}\u{275a}"
                    }
                    button type="button" class="slider-btn" data-slider-prev aria-label="Previous slide" { "\u{2190}" }
                    button type="button" class="slider-btn slider-btn-next" data-slider-next aria-label="Next slide" { "\u{2192}" }
                }
            }
        }
    }
}

impl Render for HeroSlider<'_> {
    fn render(&self) -> Markup {
        if self.slides.is_empty() {
            return Self::render_empty();
        }

        // Single slides stay static; the script ignores sliders without controls.
        let multiple = self.slides.len() > 1;

        html! {
            div class="hero-slider"
                data-slider
                data-interval=[multiple.then_some(SLIDE_INTERVAL_MS)] {
                div class="hero-slides" {
                    @for (index, post) in self.slides.iter().enumerate() {
                        (Self::render_slide(post, index))
                    }
                }
                @if multiple {
                    (self.render_controls())
                }
            }
        }
    }
}
