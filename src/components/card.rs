//! Card components for displaying travel stories.
//!
//! This module provides maud components for rendering post cards and grids.

use maud::{html, Markup, Render};

use super::button::Button;
use crate::feed::DisplayPost;

/// A story card linking out to the full post.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let card = PostCard::new(&post);
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a DisplayPost,
    /// Eager-load the image; set for cards above the fold.
    pub eager: bool,
}

impl<'a> PostCard<'a> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(post: &'a DisplayPost) -> Self {
        Self { post, eager: false }
    }

    /// Load the image eagerly.
    #[must_use]
    pub const fn eager(mut self) -> Self {
        self.eager = true;
        self
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let loading = if self.eager { "eager" } else { "lazy" };

        html! {
            article class="post-card" data-post-id=(post.id) {
                div class="post-card-media" {
                    @if let Some(image_url) = &post.image_url {
                        img src=(image_url) alt=(post.image_alt) loading=(loading);
                    } @else {
                        div class="post-card-placeholder" aria-hidden="true" { "Travel" }
                    }
                    @if !post.date_label.is_empty() {
                        span class="post-card-date" { (post.date_label) }
                    }
                }
                div class="post-card-body" {
                    h3 class="post-card-title" {
                        a href=(post.link) target="_blank" rel="noopener noreferrer" { (post.title) }
                    }
                    @if !post.summary.is_empty() {
                        p class="post-card-summary" { (post.summary) }
                    }
                    (Button::link("Read more").href(&post.link).arrow())
                }
            }
        }
    }
}

/// A grid container for displaying multiple post cards.
#[derive(Debug, Clone)]
pub struct PostGrid<'a> {
    pub posts: &'a [DisplayPost],
}

impl<'a> PostGrid<'a> {
    /// Cards in the first row load their images eagerly.
    const EAGER_CARDS: usize = 3;

    /// Create a new post grid.
    #[must_use]
    pub const fn new(posts: &'a [DisplayPost]) -> Self {
        Self { posts }
    }
}

impl Render for PostGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="post-grid" {
                @for (index, post) in self.posts.iter().enumerate() {
                    @if index < Self::EAGER_CARDS {
                        (PostCard::new(post).eager())
                    } @else {
                        (PostCard::new(post))
                    }
                }
            }
        }
    }
}

/// An empty state component shown in place of missing content.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }

    /// Placeholder for the story grid when the feed returned nothing.
    #[must_use]
    pub const fn stories_loading() -> Self {
        Self {
            title: "Travel stories are loading",
            message: "We couldn't reach lankan.org right now. Please refresh in a moment.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="empty-state" {
                p class="empty-title" { (self.title) }
                p { (self.message) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> DisplayPost {
        DisplayPost {
            id: 7,
            title: "Ella & the Nine Arches".to_string(),
            link: "https://lankan.org/ella".to_string(),
            summary: "Misty hills and tea.".to_string(),
            date_label: "Jan 5, 2024".to_string(),
            image_url: Some("https://lankan.org/ella-768.jpg".to_string()),
            image_alt: "Train on the bridge".to_string(),
        }
    }

    #[test]
    fn test_post_card_basic() {
        let post = sample_post();
        let html = PostCard::new(&post).render().into_string();

        assert!(html.contains(r#"data-post-id="7""#));
        assert!(html.contains("Ella &amp; the Nine Arches"));
        assert!(html.contains(r#"src="https://lankan.org/ella-768.jpg""#));
        assert!(html.contains(r#"alt="Train on the bridge""#));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains("Jan 5, 2024"));
        assert!(html.contains("Misty hills and tea."));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_post_card_without_image_or_date() {
        let post = DisplayPost {
            image_url: None,
            date_label: String::new(),
            ..sample_post()
        };
        let html = PostCard::new(&post).render().into_string();

        assert!(html.contains("post-card-placeholder"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("post-card-date"));
    }

    #[test]
    fn test_post_grid_eager_first_row() {
        let posts: Vec<DisplayPost> = (1..=4)
            .map(|id| DisplayPost { id, ..sample_post() })
            .collect();
        let html = PostGrid::new(&posts).render().into_string();

        assert_eq!(html.matches("post-card\"").count(), 4);
        assert_eq!(html.matches(r#"loading="eager""#).count(), 3);
        assert_eq!(html.matches(r#"loading="lazy""#).count(), 1);
    }

    #[test]
    fn test_post_grid_empty() {
        let html = PostGrid::new(&[]).render().into_string();
        assert_eq!(html, r#"<div class="post-grid"></div>"#);
    }

    #[test]
    fn test_empty_state() {
        let html = EmptyState::stories_loading().render().into_string();
        assert!(html.contains("Travel stories are loading"));
    }
}
