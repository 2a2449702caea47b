//! Plain-text helpers for WordPress-rendered fields.
//!
//! Upstream titles and excerpts are small HTML fragments. A fixed-table
//! transform is enough here: tags are dropped, a handful of entities decoded
//! and whitespace collapsed. Nothing in this module parses markup structure.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)&(nbsp|amp|quot|apos|lt|gt);|&#(\d+);").unwrap());

static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Date formats WordPress is known to emit, tried after RFC 3339.
const LOCAL_DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Convert an HTML fragment to a single line of plain text.
///
/// Tags become spaces, entities are decoded, runs of whitespace collapse to a
/// single space and the result is trimmed.
#[must_use]
pub fn to_plain_text(html: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(html, " ");
    let decoded = decode_entities(&without_tags);
    WHITESPACE_PATTERN
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// Decode `&nbsp; &amp; &quot; &apos; &lt; &gt;` (any case) and decimal
/// numeric entities in a single pass.
///
/// Unknown entities and numeric references that are not valid scalar values
/// are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        if let Some(name) = caps.get(1) {
            let decoded = match name.as_str().to_ascii_lowercase().as_str() {
                "nbsp" => " ",
                "amp" => "&",
                "quot" => "\"",
                "apos" => "'",
                "lt" => "<",
                "gt" => ">",
                _ => return caps[0].to_string(),
            };
            return decoded.to_string();
        }

        caps.get(2)
            .and_then(|code| code.as_str().parse::<u32>().ok())
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), |c| c.to_string())
    })
}

/// Keep the first `word_limit` whitespace-separated words.
///
/// Text within the limit is returned unchanged. Longer text is re-joined with
/// single spaces and suffixed with [`ELLIPSIS`].
#[must_use]
pub fn truncate_words(text: &str, word_limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= word_limit {
        return text.to_string();
    }
    format!("{}{ELLIPSIS}", words[..word_limit].join(" "))
}

/// Count whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Parse the leading run of ASCII digits after trimming whitespace, so
/// `"12"`, `" 12 "` and `"12 pages"` all give 12. Signs are not accepted.
#[must_use]
pub fn parse_leading_digits(value: &str) -> Option<u64> {
    let value = value.trim();
    let digits = value
        .find(|c: char| !c.is_ascii_digit())
        .map_or(value, |end| &value[..end]);
    digits.parse().ok()
}

/// Format a publish date as "Jan 5, 2024".
///
/// Returns an empty string when the date cannot be parsed.
#[must_use]
pub fn format_date_label(date: &str) -> String {
    parse_publish_date(date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Parse the calendar date of a post.
///
/// Offsets are honored as written; WordPress's `date` field carries no offset
/// and is already in the site's local time.
fn parse_publish_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.date_naive());
    }

    for fmt in LOCAL_DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(date, fmt) {
            return Some(parsed.date());
        }
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
