//! Travel feed loading.
//!
//! Posts come from a WordPress REST endpoint filtered to a single category.
//! This module fetches a page of them, corrects out-of-range page requests,
//! and normalizes each raw record into a [`DisplayPost`] that templates can
//! render without touching HTML-laden upstream fields.

mod loader;
mod normalize;
pub mod text;
mod types;

pub use loader::{build_feed_url, FeedError, FeedLoader, MAX_FEED_REQUESTS};
pub use normalize::{normalize_post, normalize_posts, SUMMARY_WORD_LIMIT, UNTITLED_POST};
pub use types::{
    DisplayPost, Embedded, FeaturedMedia, FeedResult, MediaDetails, MediaSize, RawPost, Rendered,
};
