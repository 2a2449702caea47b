use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A `{ "rendered": "..." }` wrapper as used by the WordPress REST API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: Option<String>,
}

/// A post record as returned by `/wp-json/wp/v2/posts?_embed=1`.
///
/// Every field is optional here; validation happens during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Option<Rendered>,
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    #[serde(default)]
    pub content: Option<Rendered>,
    #[serde(default, rename = "_embedded", deserialize_with = "lenient")]
    pub embedded: Option<Embedded>,
}

impl RawPost {
    /// The first embedded featured media entry, if any.
    #[must_use]
    pub fn featured_media(&self) -> Option<&FeaturedMedia> {
        self.embedded
            .as_ref()
            .and_then(|e| e.featured_media.as_ref())
            .and_then(|media| media.first())
    }
}

/// The `_embedded` block of a post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Option<Vec<FeaturedMedia>>,
}

/// An embedded attachment. WordPress returns an error object in place of the
/// attachment when it is not publicly readable, which parses as all-`None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub media_details: Option<MediaDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaDetails {
    #[serde(default)]
    pub sizes: Option<HashMap<String, MediaSize>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaSize {
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Media blocks are decorative, so a shape we don't recognize there (plugins
/// return `[]` for empty `media_details`) becomes `None` instead of failing
/// the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A post ready for display: plain text only, image already chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPost {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub summary: String,
    /// "Jan 5, 2024", or empty when the publish date could not be parsed.
    pub date_label: String,
    pub image_url: Option<String>,
    pub image_alt: String,
}

/// One page of the feed as served to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResult {
    pub posts: Vec<DisplayPost>,
    pub total_pages: u32,
    /// The page actually served, which may differ from the one requested.
    pub page_used: u32,
    pub total_posts: u64,
}

impl FeedResult {
    /// The degraded result used whenever the upstream cannot be read.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            posts: Vec::new(),
            total_pages: 1,
            page_used: 1,
            total_posts: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_post_parses_wordpress_shape() {
        let json = r#"{
            "id": 42,
            "date": "2024-03-09T08:15:00",
            "link": "https://lankan.org/ella/",
            "title": {"rendered": "Ella &amp; the hills"},
            "excerpt": {"rendered": "<p>Tea country</p>", "protected": false},
            "_embedded": {
                "wp:featuredmedia": [{
                    "source_url": "https://lankan.org/full.jpg",
                    "alt_text": "Nine Arch Bridge",
                    "media_details": {"sizes": {"medium": {"source_url": "https://lankan.org/m.jpg", "width": 300}}}
                }]
            }
        }"#;

        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, Some(42));
        assert_eq!(post.link.as_deref(), Some("https://lankan.org/ella/"));
        assert!(post.content.is_none());

        let media = post.featured_media().unwrap();
        assert_eq!(media.alt_text.as_deref(), Some("Nine Arch Bridge"));
        let sizes = media.media_details.as_ref().unwrap().sizes.as_ref().unwrap();
        assert_eq!(
            sizes["medium"].source_url.as_deref(),
            Some("https://lankan.org/m.jpg")
        );
    }

    #[test]
    fn test_raw_post_tolerates_media_error_object() {
        let json = r#"{
            "id": 7,
            "link": "https://lankan.org/x/",
            "_embedded": {"wp:featuredmedia": [{"code": "rest_forbidden", "message": "Sorry"}]}
        }"#;

        let post: RawPost = serde_json::from_str(json).unwrap();
        let media = post.featured_media().unwrap();
        assert!(media.source_url.is_none());
        assert!(media.media_details.is_none());
    }

    #[test]
    fn test_raw_post_tolerates_empty_media_details_array() {
        let json = r#"{
            "id": 8,
            "link": "https://lankan.org/y/",
            "_embedded": {"wp:featuredmedia": [{"source_url": "https://lankan.org/y.jpg", "media_details": []}]}
        }"#;

        let post: RawPost = serde_json::from_str(json).unwrap();
        let media = post.featured_media().unwrap();
        assert_eq!(media.source_url.as_deref(), Some("https://lankan.org/y.jpg"));
        assert!(media.media_details.is_none());
    }

    #[test]
    fn test_raw_post_rejects_non_numeric_id() {
        let json = r#"{"id": "abc", "link": "https://lankan.org/z/"}"#;
        assert!(serde_json::from_str::<RawPost>(json).is_err());
    }

    #[test]
    fn test_feed_result_unavailable() {
        let result = FeedResult::unavailable();
        assert!(result.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page_used, 1);
        assert_eq!(result.total_posts, 0);
    }
}
