use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::{debug, warn};

use super::pages;
use super::AppState;
use crate::attractions::locations_json;
use crate::feed::text::parse_leading_digits;
use crate::feed::FeedResult;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/attractions", get(attractions))
        .route("/healthz", get(health))
        .route("/favicon.ico", get(favicon))
}

// ========== HTML Routes ==========

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    /// Kept as a string so a malformed value falls back to page 1 instead
    /// of rejecting the request.
    page: Option<String>,
}

/// Parse the `page` query value using its leading digits, so `"3"` and
/// `"3abc"` both mean page 3. Anything without a positive leading number
/// means page 1.
#[must_use]
pub fn parse_page_param(value: Option<&str>) -> u32 {
    value
        .and_then(parse_leading_digits)
        .and_then(|page| u32::try_from(page).ok())
        .filter(|&page| page > 0)
        .unwrap_or(1)
}

async fn home(State(state): State<AppState>, Query(params): Query<HomeParams>) -> Response {
    let requested = parse_page_param(params.page.as_deref());
    let page_size = state.config.posts_per_page;

    let (hero, main): (Option<FeedResult>, FeedResult) = if requested == 1 {
        let (hero, main) = tokio::join!(
            state.feed.load(1, state.config.hero_posts),
            state.feed.load(requested, page_size),
        );
        (Some(hero), main)
    } else {
        (None, state.feed.load(requested, page_size).await)
    };

    debug!(
        requested,
        page_used = main.page_used,
        total_pages = main.total_pages,
        posts = main.posts.len(),
        "Rendering home page"
    );

    let params = pages::HomePageParams::from_feed(&main, hero.as_ref());
    Html(pages::render_home_page(&params).into_string()).into_response()
}

async fn about() -> Response {
    Html(pages::render_about_page().into_string()).into_response()
}

async fn contact(State(state): State<AppState>) -> Response {
    Html(pages::render_contact_page(&state.config.contact_form_action).into_string())
        .into_response()
}

async fn attractions() -> Response {
    let json = locations_json().unwrap_or_else(|e| {
        warn!("Failed to serialize locations: {e}");
        "[]".to_string()
    });
    Html(pages::render_attractions_page(&json).into_string()).into_response()
}

// ========== Utility Routes ==========

async fn health() -> &'static str {
    "OK"
}

/// The layout carries an inline SVG icon, so browsers probing the
/// conventional path get an empty response.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_param() {
        assert_eq!(parse_page_param(None), 1);
        assert_eq!(parse_page_param(Some("")), 1);
        assert_eq!(parse_page_param(Some("3")), 3);
        assert_eq!(parse_page_param(Some(" 7 ")), 7);
        assert_eq!(parse_page_param(Some("0")), 1);
        assert_eq!(parse_page_param(Some("-2")), 1);
        assert_eq!(parse_page_param(Some("abc")), 1);
        assert_eq!(parse_page_param(Some("2.5")), 2);
        assert_eq!(parse_page_param(Some("4abc")), 4);
        assert_eq!(parse_page_param(Some("99999999999")), 1);
    }
}
