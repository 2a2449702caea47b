use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::normalize::normalize_posts;
use super::text::parse_leading_digits;
use super::types::FeedResult;
use crate::config::Config;
use crate::constants::USER_AGENT;

/// Upper bound on upstream requests made by a single [`FeedLoader::load`]:
/// the initial request plus two page corrections.
pub const MAX_FEED_REQUESTS: usize = 3;

const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";
const TOTAL_POSTS_HEADER: &str = "x-wp-total";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid feed endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("feed endpoint returned {0}")]
    Status(StatusCode),
    #[error("failed to decode feed body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Loads pages of travel posts from the upstream WordPress API.
///
/// Holds no feed state; cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FeedLoader {
    client: Client,
    endpoint: Url,
    category_id: u32,
}

impl FeedLoader {
    /// Create a loader from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(config.feed_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_client(client, &config.feed_endpoint, config.feed_category_id)
    }

    /// Create a loader around an existing HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn with_client(client: Client, endpoint: &str, category_id: u32) -> Result<Self, FeedError> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            category_id,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Load one page of the feed.
    ///
    /// Never fails: transport errors, unexpected statuses and undecodable
    /// bodies are logged and degrade to [`FeedResult::unavailable`]. A page
    /// past the end is corrected to the last page (or to page 1 when the
    /// upstream rejects it outright), within [`MAX_FEED_REQUESTS`] requests.
    pub async fn load(&self, page: u32, page_size: u32) -> FeedResult {
        match self.try_load(page, page_size).await {
            Ok(result) => result,
            Err(e) => {
                warn!(page, page_size, error = %e, "Unable to load travel posts");
                FeedResult::unavailable()
            }
        }
    }

    async fn try_load(&self, page: u32, page_size: u32) -> Result<FeedResult, FeedError> {
        let page_size = page_size.max(1);
        let mut page = page.max(1);
        let mut requests = 0;

        loop {
            requests += 1;
            let final_request = requests >= MAX_FEED_REQUESTS;

            let url = build_feed_url(&self.endpoint, self.category_id, page, page_size);
            debug!(url = %url, request = requests, "Fetching travel posts");

            let response = self.client.get(url).send().await?;
            let status = response.status();

            if !status.is_success() {
                if status == StatusCode::BAD_REQUEST && page > 1 && !final_request {
                    info!(page, "Page rejected by feed endpoint, falling back to page 1");
                    page = 1;
                    continue;
                }
                return Err(FeedError::Status(status));
            }

            let (total_pages, total_posts) = read_totals(response.headers());
            let bounded = page.min(total_pages);

            if bounded != page {
                if !final_request {
                    info!(page, total_pages, "Page past the end of the feed, loading last page");
                    page = bounded;
                    continue;
                }
                warn!(
                    page,
                    total_pages, "Feed page count kept shrinking, serving last response"
                );
            }

            let body = response.bytes().await?;
            let records: Vec<Value> = serde_json::from_slice(&body)?;
            let posts = normalize_posts(records);

            debug!(
                page = bounded,
                posts = posts.len(),
                total_pages,
                total_posts,
                "Loaded travel posts"
            );

            return Ok(FeedResult {
                posts,
                total_pages,
                page_used: bounded,
                total_posts,
            });
        }
    }
}

/// Build the upstream URL for one page of the category feed.
#[must_use]
pub fn build_feed_url(endpoint: &Url, category_id: u32, page: u32, page_size: u32) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("categories", &category_id.to_string())
        .append_pair("per_page", &page_size.to_string())
        .append_pair("_embed", "1")
        .append_pair("page", &page.to_string());
    url
}

/// Read `(total_pages, total_posts)` from WordPress pagination headers.
///
/// Missing, unparsable or zero page counts default to 1; missing or
/// unparsable post counts default to 0.
fn read_totals(headers: &HeaderMap) -> (u32, u64) {
    let count = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_leading_digits)
    };

    let total_pages = count(TOTAL_PAGES_HEADER)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .unwrap_or(1);
    let total_posts = count(TOTAL_POSTS_HEADER).unwrap_or(0);

    (total_pages, total_posts)
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://lankan.org/wp-json/wp/v2/posts").unwrap()
    }

    #[test]
    fn test_build_feed_url() {
        let url = build_feed_url(&endpoint(), 67, 3, 18);
        insta::assert_snapshot!(
            url,
            @"https://lankan.org/wp-json/wp/v2/posts?categories=67&per_page=18&_embed=1&page=3"
        );
    }

    #[test]
    fn test_build_feed_url_keeps_existing_query() {
        let endpoint = Url::parse("https://example.com/posts?lang=en").unwrap();
        let url = build_feed_url(&endpoint, 5, 1, 3);
        assert_eq!(
            url.as_str(),
            "https://example.com/posts?lang=en&categories=5&per_page=3&_embed=1&page=1"
        );
    }

    #[test]
    fn test_read_totals_defaults() {
        let headers = HeaderMap::new();
        assert_eq!(read_totals(&headers), (1, 0));
    }

    #[test]
    fn test_read_totals_zero_pages_defaults_to_one() {
        let mut headers = HeaderMap::new();
        headers.insert("X-WP-TotalPages", HeaderValue::from_static("0"));
        headers.insert("X-WP-Total", HeaderValue::from_static("0"));
        assert_eq!(read_totals(&headers), (1, 0));
    }

    #[test]
    fn test_read_totals_present() {
        let mut headers = HeaderMap::new();
        headers.insert("X-WP-TotalPages", HeaderValue::from_static("9"));
        headers.insert("X-WP-Total", HeaderValue::from_static("157"));
        assert_eq!(read_totals(&headers), (9, 157));
    }

    #[test]
    fn test_read_totals_page_count_overflow_defaults() {
        let mut headers = HeaderMap::new();
        headers.insert("X-WP-TotalPages", HeaderValue::from_static("99999999999"));
        assert_eq!(read_totals(&headers).0, 1);
    }

    #[test]
    fn test_with_client_rejects_bad_endpoint() {
        let result = FeedLoader::with_client(Client::new(), "not a url", 67);
        assert!(matches!(result, Err(FeedError::InvalidEndpoint(_))));
    }
}
