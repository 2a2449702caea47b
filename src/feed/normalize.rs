use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use super::text::{format_date_label, to_plain_text, truncate_words};
use super::types::{DisplayPost, FeaturedMedia, RawPost};

/// Title used when a post's title is empty after cleaning.
pub const UNTITLED_POST: &str = "Untitled post";

/// Maximum number of words kept in a post summary.
pub const SUMMARY_WORD_LIMIT: usize = 46;

/// Size variants tried in order before falling back to the original upload.
const PREFERRED_IMAGE_SIZES: &[&str] = &["medium_large", "large", "medium"];

/// Normalize a raw post into a [`DisplayPost`].
///
/// Returns `None` for posts without an id or link.
#[must_use]
pub fn normalize_post(post: &RawPost) -> Option<DisplayPost> {
    let id = post.id.filter(|&id| id != 0)?;
    let link = post.link.as_deref().filter(|l| !l.is_empty())?;

    let title = rendered_text(post.title.as_ref().and_then(|t| t.rendered.as_deref()));
    let title = if title.is_empty() {
        UNTITLED_POST.to_string()
    } else {
        title
    };

    let summary_html = post
        .excerpt
        .as_ref()
        .and_then(|e| e.rendered.as_deref())
        .filter(|e| !e.is_empty())
        .or_else(|| post.content.as_ref().and_then(|c| c.rendered.as_deref()));
    let summary = truncate_words(&rendered_text(summary_html), SUMMARY_WORD_LIMIT);

    let media = post.featured_media();
    let image_url = media.and_then(select_image_url);
    let image_alt = media
        .and_then(|m| m.alt_text.as_deref())
        .filter(|alt| !alt.is_empty())
        .map_or_else(|| title.clone(), ToString::to_string);

    Some(DisplayPost {
        id,
        title,
        link: link.to_string(),
        summary,
        date_label: post.date.as_deref().map(format_date_label).unwrap_or_default(),
        image_url,
        image_alt,
    })
}

/// Normalize a page of upstream records.
///
/// Each element is deserialized on its own, so one malformed record never
/// fails the batch. Records that don't parse, lack an id or link, or repeat an
/// id already seen are dropped.
#[must_use]
pub fn normalize_posts(records: Vec<Value>) -> Vec<DisplayPost> {
    let mut seen = HashSet::new();
    let mut posts = Vec::with_capacity(records.len());

    for record in records {
        let raw: RawPost = match serde_json::from_value(record) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "Skipping malformed post record");
                continue;
            }
        };

        let Some(post) = normalize_post(&raw) else {
            debug!(id = ?raw.id, "Skipping post without id or link");
            continue;
        };

        if !seen.insert(post.id) {
            debug!(id = post.id, "Skipping duplicate post id");
            continue;
        }

        posts.push(post);
    }

    posts
}

fn rendered_text(html: Option<&str>) -> String {
    html.map(to_plain_text).unwrap_or_default()
}

/// Pick the display image for a media entry.
fn select_image_url(media: &FeaturedMedia) -> Option<String> {
    let sized = media
        .media_details
        .as_ref()
        .and_then(|d| d.sizes.as_ref())
        .and_then(|sizes| {
            PREFERRED_IMAGE_SIZES.iter().find_map(|name| {
                sizes
                    .get(*name)
                    .and_then(|s| s.source_url.as_deref())
                    .filter(|url| !url.is_empty())
            })
        });

    sized
        .or_else(|| media.source_url.as_deref().filter(|url| !url.is_empty()))
        .map(ToString::to_string)
}
