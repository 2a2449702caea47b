//! Home page rendering using maud templates.
//!
//! The first page opens with an intro banner and the hero slider; every page
//! shows a grid of stories followed by pagination.

use maud::{html, Markup, Render};

use crate::components::{
    BaseLayout, Button, EmptyState, HeroSlider, OpenGraphMetadata, Pagination, PostGrid,
};
use crate::constants::{PUBLISHER_NAME, PUBLISHER_URL};
use crate::feed::{DisplayPost, FeedResult};

const INTRO_IMAGE: &str =
    "https://images.unsplash.com/photo-1528214096798-37891f23454c?auto=format&fit=crop&w=1400&q=80";

/// Parameters for rendering the home page.
#[derive(Debug, Clone)]
pub struct HomePageParams<'a> {
    /// Stories for the main grid
    pub posts: &'a [DisplayPost],
    /// Stories for the hero slider; `None` hides the slider
    pub hero_posts: Option<&'a [DisplayPost]>,
    /// Page being shown (1-indexed, already clamped)
    pub active_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Total number of stories in the feed
    pub total_posts: u64,
}

impl<'a> HomePageParams<'a> {
    /// Build parameters from the main feed result and optional hero feed.
    ///
    /// The active page is the page the loader actually served, clamped into
    /// `1..=max(total_pages, 1)`.
    #[must_use]
    pub fn from_feed(main: &'a FeedResult, hero: Option<&'a FeedResult>) -> Self {
        Self {
            posts: &main.posts,
            hero_posts: hero.map(|feed| feed.posts.as_slice()),
            active_page: main.page_used.clamp(1, main.total_pages.max(1)),
            total_pages: main.total_pages,
            total_posts: main.total_posts,
        }
    }
}

/// Label for the story counter in the intro banner.
#[must_use]
pub fn stories_label(total_posts: u64) -> String {
    if total_posts > 0 {
        format!("{total_posts} stories available")
    } else {
        "Travel feed".to_string()
    }
}

fn render_intro(total_posts: u64) -> Markup {
    html! {
        section class="intro" {
            div class="container intro-grid" {
                div class="intro-text" {
                    span class="intro-badge" {
                        "Srilankan.vacations by "
                        a href=(PUBLISHER_URL) { (PUBLISHER_NAME) }
                    }
                    h1 { "Travel Sri Lanka: Places to Visit, Experiences, and Travel Ideas" }
                    p class="intro-lead" {
                        "Explore destinations, activities, and travel experiences across Sri Lanka - "
                        "from hill country escapes and cultural landmarks to beaches, wildlife, and scenic journeys."
                    }
                    div class="intro-meta" {
                        span class="intro-count" { (stories_label(total_posts)) }
                        (Button::ghost("Explore the map").href("/attractions"))
                    }
                }
                div class="intro-media" {
                    img src=(INTRO_IMAGE) alt="Sri Lankan coastline" loading="eager";
                }
            }
        }
    }
}

/// Render the home page.
#[must_use]
pub fn render_home_page(params: &HomePageParams) -> Markup {
    let pagination = Pagination::new(params.active_page, params.total_pages, "/");

    let content = html! {
        @if params.active_page == 1 {
            (render_intro(params.total_posts))
        }

        @if let Some(hero_posts) = params.hero_posts {
            section class="hero" {
                div class="container" {
                    (HeroSlider::new(hero_posts))
                }
            }
        }

        main class="container stories" id="stories" {
            @if params.posts.is_empty() {
                (EmptyState::stories_loading())
            } @else {
                (PostGrid::new(params.posts))

                @if pagination.should_display() {
                    (pagination.render())
                }
            }
        }
    };

    let og = OpenGraphMetadata::default()
        .with_image(params.posts.iter().find_map(|post| post.image_url.as_deref()));

    BaseLayout::new("Travel Highlights", "/")
        .with_og_metadata(og)
        .with_script("/static/js/slider.js")
        .render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> DisplayPost {
        DisplayPost {
            id,
            title: format!("Story {id}"),
            link: format!("https://lankan.org/story-{id}"),
            summary: "Summary".to_string(),
            date_label: String::new(),
            image_url: None,
            image_alt: format!("Story {id}"),
        }
    }

    fn feed(posts: Vec<DisplayPost>, total_pages: u32, page_used: u32, total_posts: u64) -> FeedResult {
        FeedResult {
            posts,
            total_pages,
            page_used,
            total_posts,
        }
    }

    #[test]
    fn test_stories_label() {
        assert_eq!(stories_label(0), "Travel feed");
        assert_eq!(stories_label(42), "42 stories available");
    }

    #[test]
    fn test_active_page_clamped() {
        let main = feed(vec![post(1)], 4, 9, 70);
        assert_eq!(HomePageParams::from_feed(&main, None).active_page, 4);

        let empty = FeedResult::unavailable();
        assert_eq!(HomePageParams::from_feed(&empty, None).active_page, 1);

        let zero_pages = feed(vec![], 0, 3, 0);
        assert_eq!(HomePageParams::from_feed(&zero_pages, None).active_page, 1);
    }

    #[test]
    fn test_first_page_has_intro_and_hero() {
        let main = feed(vec![post(1), post(2)], 3, 1, 40);
        let hero = feed(vec![post(10)], 14, 1, 40);
        let html = render_home_page(&HomePageParams::from_feed(&main, Some(&hero))).into_string();

        assert!(html.contains("40 stories available"));
        assert!(html.contains("Story 10"));
        assert!(html.contains(r#"class="hero-slider""#));
        assert!(html.contains("Page 1 of 3"));
    }

    #[test]
    fn test_later_page_has_no_intro() {
        let main = feed(vec![post(1)], 3, 2, 40);
        let html = render_home_page(&HomePageParams::from_feed(&main, None)).into_string();

        assert!(!html.contains("stories available"));
        assert!(!html.contains("hero-slider"));
        assert!(html.contains("Page 2 of 3"));
    }

    #[test]
    fn test_empty_feed_placeholder() {
        let main = FeedResult::unavailable();
        let hero = FeedResult::unavailable();
        let html = render_home_page(&HomePageParams::from_feed(&main, Some(&hero))).into_string();

        assert!(html.contains("Travel feed"));
        assert!(html.contains("Travel stories are loading"));
        assert!(html.contains("Travel inspiration is on the way"));
        assert!(!html.contains(r#"class="pagination""#));
    }
}
