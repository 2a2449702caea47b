//! Attractions page: an interactive Leaflet map over the location catalogue.
//!
//! The map itself is drawn client-side by `static/js/map.js` from the
//! `data-*` attributes on `#attractions-map`. A plain list of the same
//! locations is rendered underneath so the page is useful without scripts.

use maud::{html, Markup};

use crate::attractions::{
    locations_of, LocationKind, MAP_ATTRIBUTION, MAP_CENTER, MAP_TILE_URL, MAP_ZOOM,
};
use crate::components::{BaseLayout, Button, OpenGraphMetadata};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

fn render_legend() -> Markup {
    html! {
        ul class="map-legend" aria-label="Map legend" {
            @for kind in LocationKind::ALL {
                li class="legend-item" {
                    span class="legend-swatch"
                        style=[kind.pin_color().map(|color| format!("background:{color}"))] {}
                    (kind.label())
                }
            }
        }
    }
}

fn render_location_list() -> Markup {
    html! {
        section class="location-list" aria-label="All locations" {
            @for kind in LocationKind::ALL {
                div class="location-group" {
                    h3 { (kind.label()) }
                    ul {
                        @for location in locations_of(kind) {
                            li data-location-id=(location.id) {
                                strong { (location.name) }
                                " "
                                span class="muted" { (location.description) }
                                " "
                                a href=(location.directions_url()) target="_blank" rel="noopener noreferrer" {
                                    "Directions from Colombo Airport"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Render the attractions page. `locations_json` is the pin array for the
/// map script.
#[must_use]
pub fn render_attractions_page(locations_json: &str) -> Markup {
    let (center_lat, center_lng) = MAP_CENTER;

    let content = html! {
        main class="container page" {
            header class="page-header centered" {
                span class="eyebrow" { "Attractions" }
                h1 { "Sri Lanka on an interactive map" }
                p class="lead" {
                    "Pinpoint the cultural icons, beach towns, and wildlife parks that make Sri Lanka special. "
                    "Use the map to plan routes and jump into guides for each highlight."
                }
            }

            (render_legend())

            div class="map-tips" {
                div class="map-tip" {
                    span class="tip-badge" { "Go" }
                    p {
                        "Tap any pin then choose \u{201c}Directions from Colombo Airport\u{201d} to open Google Maps "
                        "with the route prefilled from Bandaranaike International (CMB) to that spot."
                    }
                }
                div class="map-tip" {
                    span class="tip-badge" { "Zoom" }
                    p {
                        "Use the + / \u{2212} controls to zoom into neighborhoods or out for a full-island "
                        "overview; drag to pan to nearby highlights."
                    }
                }
            }

            div class="panel map-panel" {
                div class="panel-header split" {
                    div {
                        span class="eyebrow" { "Interactive Map" }
                        p class="muted" { "Click pins to open quick descriptions and directions." }
                    }
                    (Button::primary("Back to stories").href("/").arrow())
                }
                div id="attractions-map"
                    class="map"
                    role="region"
                    aria-label="Map of Sri Lanka attractions"
                    data-locations=(locations_json)
                    data-center-lat=(center_lat)
                    data-center-lng=(center_lng)
                    data-zoom=(MAP_ZOOM)
                    data-tiles=(MAP_TILE_URL)
                    data-attribution=(MAP_ATTRIBUTION) {}
            }

            (render_location_list())
        }
    };

    BaseLayout::new("Sri Lanka Attractions Map", "/attractions")
        .with_og_metadata(OpenGraphMetadata::new(
            "Sri Lanka Attractions Map",
            "Explore Sri Lanka's top beaches, cultural sites, and wildlife parks on an interactive map.",
            "/attractions",
        ))
        .with_stylesheet(LEAFLET_CSS)
        .with_script(LEAFLET_JS)
        .with_script("/static/js/map.js")
        .render(content)
}
