//! Integration tests for web routes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use srilankan_vacations::config::Config;
use srilankan_vacations::feed::FeedLoader;
use srilankan_vacations::web::{create_app, AppState};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";

/// Create a test app whose feed points at the given upstream base URL.
fn create_test_app(upstream: &str) -> Router {
    let config = Config {
        feed_endpoint: format!("{upstream}{POSTS_PATH}"),
        contact_form_action: "https://forms.example.com/f/abc123".to_string(),
        ..Config::for_testing()
    };
    let feed = FeedLoader::new(&config).expect("Failed to create feed loader");

    create_app(AppState {
        config: Arc::new(config),
        feed,
    })
}

fn story(id: u64) -> Value {
    json!({
        "id": id,
        "date": "2024-06-01T10:00:00",
        "link": format!("https://lankan.org/story-{id}/"),
        "title": { "rendered": format!("Story {id}") },
        "excerpt": { "rendered": format!("<p>Summary of story {id}</p>") },
        "_embedded": {
            "wp:featuredmedia": [{ "source_url": format!("https://lankan.org/img/{id}.jpg") }]
        }
    })
}

fn stories(ids: std::ops::RangeInclusive<u64>) -> Value {
    Value::Array(ids.map(story).collect())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

/// Mount a feed with `total_pages` pages; the hero request is told apart by
/// its smaller page size.
async fn mount_feed(server: &MockServer, total_pages: u32) {
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("per_page", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-TotalPages", "20")
                .insert_header("X-WP-Total", "60")
                .set_body_json(stories(101..=103)),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("per_page", "18"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-TotalPages", total_pages.to_string().as_str())
                .insert_header("X-WP-Total", "60")
                .set_body_json(stories(1..=18)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_home_first_page() {
    let server = MockServer::start().await;
    mount_feed(&server, 4).await;

    let (status, html) = get(create_test_app(&server.uri()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Travel Highlights | Srilankan.vacations"));

    // Intro and hero only on the first page
    assert!(html.contains("Srilankan.vacations by"));
    assert!(html.contains("60 stories available"));
    assert!(html.contains("hero-slider"));
    assert!(html.contains("Story 101"));

    // Story grid
    assert!(html.contains("post-grid"));
    assert!(html.contains("Story 1<"));
    assert!(html.contains("Story 18<"));
    assert!(html.contains("https://lankan.org/story-7/"));

    // Pagination
    assert!(html.contains("Page 1 of 4"));
    assert!(html.contains(r#"href="/?page=2""#));
}

#[tokio::test]
async fn test_home_later_page_skips_hero_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "18"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-TotalPages", "4")
                .insert_header("X-WP-Total", "60")
                .set_body_json(stories(37..=54)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, html) = get(create_test_app(&server.uri()), "/?page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("hero-slider"));
    assert!(!html.contains("Srilankan.vacations by"));
    assert!(html.contains("Story 37<"));
    assert!(html.contains("Page 3 of 4"));
    assert!(html.contains(r#"href="/?page=2""#));
    assert!(html.contains(r#"href="/?page=4""#));
}

#[tokio::test]
async fn test_home_page_past_end_shows_last_page() {
    let server = MockServer::start().await;
    mount_feed(&server, 2).await;

    let (status, html) = get(create_test_app(&server.uri()), "/?page=9").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Page 2 of 2"));
    assert!(!html.contains(r#"href="/?page=3""#));
}

#[tokio::test]
async fn test_home_malformed_page_param() {
    let server = MockServer::start().await;
    mount_feed(&server, 4).await;

    let (status, html) = get(create_test_app(&server.uri()), "/?page=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Page 1 of 4"));
    assert!(html.contains("hero-slider"));
}

#[tokio::test]
async fn test_home_upstream_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, html) = get(create_test_app(&server.uri()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Travel stories are loading"));
    assert!(html.contains("Travel inspiration is on the way"));
    assert!(html.contains("Travel feed"));
    assert!(!html.contains(r#"class="pagination""#));
}

#[tokio::test]
async fn test_about_page() {
    let (status, html) = get(create_test_app("http://127.0.0.1:9"), "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("About | Srilankan.vacations"));
    assert!(html.contains(r#"id="carousel-about""#));
    assert!(html.contains("/static/js/slider.js"));
    assert!(html.contains(r#"aria-current="page""#));
}

#[tokio::test]
async fn test_contact_page_uses_configured_action() {
    let (status, html) = get(create_test_app("http://127.0.0.1:9"), "/contact").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Contact Us | Srilankan.vacations"));
    assert!(html.contains(r#"action="https://forms.example.com/f/abc123""#));
    assert!(html.contains(r#"method="post""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="message""#));
}

#[tokio::test]
async fn test_attractions_page() {
    let (status, html) = get(create_test_app("http://127.0.0.1:9"), "/attractions").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"id="attractions-map""#));
    assert!(html.contains("data-locations="));
    assert!(html.contains("leaflet"));
    assert!(html.contains("/static/js/map.js"));
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(create_test_app("http://127.0.0.1:9"), "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_favicon_is_empty() {
    let (status, body) = get(create_test_app("http://127.0.0.1:9"), "/favicon.ico").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_static_assets_served() {
    let app = create_test_app("http://127.0.0.1:9");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/css/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get(create_test_app("http://127.0.0.1:9"), "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
