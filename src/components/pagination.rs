//! Pagination component for navigating through the story feed.
//!
//! Renders Newer/Older controls around a compact list of page numbers:
//! the first and last pages plus a window of two pages either side of the
//! current one, with gaps marked by an ellipsis.

use std::collections::BTreeSet;

use maud::{html, Markup, Render};

/// Pages shown on each side of the current page.
const WINDOW: u32 = 2;

/// Pagination component.
///
/// Pages are 1-indexed. Automatically hides if there's only 1 page.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub current_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Base URL for page links (`?page=N` is appended for pages after the first)
    pub base_url: String,
}

impl Pagination {
    /// Create a new pagination component.
    ///
    /// `current_page` is clamped into `1..=total_pages`.
    #[must_use]
    pub fn new(current_page: u32, total_pages: u32, base_url: &str) -> Self {
        Self {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
            base_url: base_url.to_string(),
        }
    }

    /// Build URL for a specific page number. Page 1 carries no query.
    fn build_url(&self, page_num: u32) -> String {
        if page_num <= 1 {
            self.base_url.clone()
        } else {
            format!("{}?page={page_num}", self.base_url)
        }
    }

    /// Page numbers to render, ascending.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        let current = self.current_page;
        let total = self.total_pages;

        let mut pages = BTreeSet::from([1, total]);
        let start = current.saturating_sub(WINDOW).max(1);
        let end = current.saturating_add(WINDOW).min(total);
        pages.extend(start..=end);
        pages.into_iter().collect()
    }

    /// Check if pagination should be displayed.
    #[must_use]
    pub fn should_display(&self) -> bool {
        self.total_pages > 1
    }
}

impl Render for Pagination {
    fn render(&self) -> Markup {
        // Don't render anything if only one page
        if !self.should_display() {
            return html! {};
        }

        let current = self.current_page;
        let total = self.total_pages;
        let pages = self.page_numbers();

        html! {
            nav class="pagination" aria-label="Story pages" {
                div class="pagination-links" {
                    @if current > 1 {
                        a class="page-btn" rel="prev" href=(self.build_url(current - 1)) { "\u{2190} Newer" }
                    } @else {
                        span class="page-btn disabled" aria-disabled="true" { "\u{2190} Newer" }
                    }

                    @for (i, page_num) in pages.iter().copied().enumerate() {
                        @if i > 0 && page_num > pages[i - 1] + 1 {
                            span class="page-gap" { "..." }
                        }
                        @if page_num == current {
                            span class="page-btn active" aria-current="page" { (page_num) }
                        } @else {
                            a class="page-btn" href=(self.build_url(page_num)) { (page_num) }
                        }
                    }

                    @if current < total {
                        a class="page-btn" rel="next" href=(self.build_url(current + 1)) { "Older \u{2192}" }
                    } @else {
                        span class="page-btn disabled" aria-disabled="true" { "Older \u{2192}" }
                    }
                }
                p class="pagination-caption" { "Page " (current) " of " (total) }
            }
        }
    }
}
