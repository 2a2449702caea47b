//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use chrono::Datelike;
use maud::{html, Markup, DOCTYPE};

use super::metadata::OpenGraphMetadata;
use crate::constants::{PUBLISHER_NAME, SITE_NAME};

/// Top-level navigation entries as `(href, label)`.
const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/attractions", "Attractions"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

/// Palm tree favicon, inline so no asset request is needed.
const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🌴</text></svg>";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("About", "/about")
///     .with_script("/static/js/slider.js")
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    current_path: &'a str,
    og_metadata: OpenGraphMetadata<'a>,
    stylesheets: Vec<&'a str>,
    scripts: Vec<&'a str>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout for the page at `current_path`.
    ///
    /// The path decides which navigation entry is highlighted.
    #[must_use]
    pub fn new(title: &'a str, current_path: &'a str) -> Self {
        Self {
            title,
            current_path,
            og_metadata: OpenGraphMetadata::default(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Set the Open Graph metadata for social media previews.
    #[must_use]
    pub fn with_og_metadata(mut self, metadata: OpenGraphMetadata<'a>) -> Self {
        self.og_metadata = metadata;
        self
    }

    /// Add a page-specific stylesheet after the site stylesheet.
    #[must_use]
    pub fn with_stylesheet(mut self, href: &'a str) -> Self {
        self.stylesheets.push(href);
        self
    }

    /// Add a page-specific script after the site script.
    #[must_use]
    pub fn with_script(mut self, src: &'a str) -> Self {
        self.scripts.push(src);
        self
    }

    /// Render the complete HTML page with the given content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " | " (SITE_NAME) }
                    (self.og_metadata)
                    link rel="icon" href=(FAVICON);
                    link rel="stylesheet" href="/static/css/style.css";
                    @for href in &self.stylesheets {
                        link rel="stylesheet" href=(href);
                    }
                }
                body {
                    (self.render_header())
                    (content)
                    (Self::render_footer())
                    button type="button" id="back-to-top" class="back-to-top" aria-label="Back to top" hidden {
                        "\u{2191}"
                    }
                    script src="/static/js/site.js" {}
                    @for src in &self.scripts {
                        script src=(src) {}
                    }
                }
            }
        }
    }

    /// Whether a navigation entry points at the current page.
    fn is_active(&self, href: &str) -> bool {
        self.current_path == href || self.current_path.starts_with(&format!("{href}/"))
    }

    /// Render the sticky header with logo, navigation, and mobile menu.
    fn render_header(&self) -> Markup {
        html! {
            header class="site-header" {
                div class="container header-inner" {
                    a href="/" class="site-logo" {
                        span class="logo-mark" aria-hidden="true" { "\u{1F334}" }
                        span { (SITE_NAME) }
                    }
                    nav class="site-nav" aria-label="Main" {
                        @for (href, label) in NAV_LINKS {
                            @let class = if self.is_active(href) { "nav-link active" } else { "nav-link" };
                            a href=(href) class=(class) aria-current=[self.is_active(href).then_some("page")] { (label) }
                        }
                    }
                    button type="button"
                        id="menu-toggle"
                        class="menu-toggle"
                        aria-expanded="false"
                        aria-controls="mobile-menu"
                        aria-label="Toggle navigation menu" {
                        span class="menu-bar" {}
                        span class="menu-bar" {}
                        span class="menu-bar" {}
                    }
                    div id="mobile-menu" class="mobile-menu" hidden {
                        @for (href, label) in NAV_LINKS {
                            @let class = if self.is_active(href) { "nav-link active" } else { "nav-link" };
                            a href=(href) class=(class) { (label) }
                        }
                    }
                }
            }
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        let year = chrono::Utc::now().year();
        html! {
            footer class="site-footer" {
                div class="container" {
                    small { "\u{a9} " (year) " " (PUBLISHER_NAME) " \u{2014} All rights reserved." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_basic_structure() {
        let content = html! { h1 { "Test Content" } };
        let html = BaseLayout::new("Test Page", "/").render(content).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>Test Page | Srilankan.vacations</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/css/style.css">"#));
        assert!(html.contains("<h1>Test Content</h1>"));
        assert!(html.contains(r#"<script src="/static/js/site.js"></script>"#));
    }

    #[test]
    fn test_base_layout_navigation() {
        let html = BaseLayout::new("Nav", "/")
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"href="/attractions""#));
        assert!(html.contains(r#"href="/about""#));
        assert!(html.contains(r#"href="/contact""#));
        assert!(html.contains(r#"<a href="/" class="nav-link active" aria-current="page">Home</a>"#));
    }

    #[test]
    fn test_is_active() {
        let layout = BaseLayout::new("x", "/attractions");
        assert!(layout.is_active("/attractions"));
        assert!(!layout.is_active("/"));
        assert!(!layout.is_active("/about"));

        let nested = BaseLayout::new("x", "/about/team");
        assert!(nested.is_active("/about"));

        let prefix = BaseLayout::new("x", "/aboutness");
        assert!(!prefix.is_active("/about"));
    }

    #[test]
    fn test_extra_assets() {
        let html = BaseLayout::new("Map", "/attractions")
            .with_stylesheet("https://unpkg.com/leaflet@1.9.4/dist/leaflet.css")
            .with_script("/static/js/map.js")
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css""#));
        assert!(html.contains(r#"<script src="/static/js/map.js"></script>"#));
    }

    #[test]
    fn test_footer_credits_publisher() {
        let html = BaseLayout::new("x", "/").render(html! {}).into_string();
        let year = chrono::Utc::now().year().to_string();
        assert!(html.contains(&year));
        assert!(html.contains("Lankan.org \u{2014} All rights reserved."));
    }

    #[test]
    fn test_default_og_metadata_rendered() {
        let html = BaseLayout::new("x", "/").render(html! {}).into_string();
        assert!(html.contains(r#"property="og:site_name" content="Srilankan.vacations""#));
    }
}
