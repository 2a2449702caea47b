//! About page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, Carousel, OpenGraphMetadata};
use crate::constants::{PUBLISHER_NAME, SITE_NAME};

/// Bulleted sections of the about copy as `(heading, intro, items)`.
const LIST_SECTIONS: &[(&str, &str, &[&str])] = &[
    (
        "Who This Site Is For",
        "Srilankan.vacations is built for:",
        &[
            "First-time visitors planning their Sri Lanka itinerary",
            "Returning travelers looking for new places and experiences",
            "Independent travelers seeking inspiration and clarity",
            "Anyone researching Sri Lanka as a travel destination",
        ],
    ),
    (
        "Our Approach to Travel Content",
        "We prioritize:",
        &[
            "Clear destination context",
            "Practical travel inspiration",
            "Visually driven exploration",
            "Easy navigation across regions and experiences",
        ],
    ),
    (
        "Our Editorial Values",
        "We are guided by a commitment to:",
        &[
            "Accuracy and relevance",
            "Respect for local culture and landscapes",
            "Honest representation of travel experiences",
            "Content that supports real-world travel decisions",
        ],
    ),
];

/// Render the about page.
#[must_use]
pub fn render_about_page() -> Markup {
    let content = html! {
        main class="container narrow page" {
            header class="page-header" {
                span class="eyebrow" { "About" }
                h1 { "About " (SITE_NAME) }
                p class="lead" { "A Travel Discovery Platform for Exploring Sri Lanka" }
            }

            (Carousel::new("about").fallback_alt("About slider"))

            div class="panel prose" {
                p {
                    (SITE_NAME) " is a destination discovery and travel inspiration platform for people "
                    "planning a visit to Sri Lanka. It helps travelers understand what to expect, where to go, "
                    "and which experiences define the island before they arrive."
                }
                p {
                    "From misty hill country and scenic train journeys to coastal towns, cultural landmarks, "
                    "and wildlife encounters, the site offers an accessible starting point for discovering "
                    "Sri Lanka."
                }

                h2 { "What We Do" }
                p {
                    "We showcase destinations, activities, and travel experiences in a clear, visual, "
                    "easy-to-explore format. Concise destination overviews and experience highlights take "
                    "the place of long-form narratives, so planning stays quick."
                }

                @for (heading, intro, items) in LIST_SECTIONS {
                    h2 { (heading) }
                    p { (intro) }
                    ul {
                        @for item in *items {
                            li { (item) }
                        }
                    }
                }

                p {
                    (SITE_NAME) " is developed as part of the broader " (PUBLISHER_NAME) " ecosystem. "
                    "Where " (PUBLISHER_NAME) " publishes in-depth articles across many topics, this site "
                    "presents Sri Lanka through the lens of travel discovery."
                }

                h2 { "Our Purpose" }
                p {
                    "We want planning a trip to Sri Lanka to feel clearer and more inspiring, helping "
                    "travelers move from curiosity to confident planning."
                }

                div class="panel-actions" {
                    (Button::primary("Read the latest stories").href("/"))
                    (Button::outline("Get in touch").href("/contact"))
                }
            }
        }
    };

    let og_title = format!("About {SITE_NAME}");
    BaseLayout::new("About", "/about")
        .with_og_metadata(OpenGraphMetadata::new(
            &og_title,
            "A travel discovery platform for exploring Sri Lanka.",
            "/about",
        ))
        .with_script("/static/js/slider.js")
        .render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page() {
        let html = render_about_page().into_string();

        assert!(html.contains("<title>About | Srilankan.vacations</title>"));
        assert!(html.contains("A Travel Discovery Platform for Exploring Sri Lanka"));
        assert!(html.contains("Our Editorial Values"));
        assert!(html.contains("Respect for local culture and landscapes"));
        assert!(html.contains(r#"id="carousel-about""#));
        assert!(html.contains(r#"<a href="/about" class="nav-link active" aria-current="page">About</a>"#));
    }
}
