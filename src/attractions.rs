//! Static catalogue of attractions shown on the map page.

use serde::Serialize;

/// Bandaranaike International Airport, the origin for directions links.
pub const AIRPORT_ORIGIN: (f64, f64) = (7.1808, 79.8848);

/// Initial map center (the middle of the island).
pub const MAP_CENTER: (f64, f64) = (7.8731, 80.7718);

pub const MAP_ZOOM: u8 = 8;

pub const MAP_TILE_URL: &str =
    "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png";

pub const MAP_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Beach,
    Culture,
    Wildlife,
    Nature,
    Transport,
}

impl LocationKind {
    /// Kinds in the order the legend lists them.
    pub const ALL: [Self; 5] = [
        Self::Beach,
        Self::Culture,
        Self::Wildlife,
        Self::Nature,
        Self::Transport,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beach => "Beaches",
            Self::Culture => "Culture",
            Self::Wildlife => "Wildlife & parks",
            Self::Nature => "Nature & hills",
            Self::Transport => "Getting here",
        }
    }

    /// Pin fill color. Nature has no dedicated pin and uses the map default.
    #[must_use]
    pub fn pin_color(self) -> Option<&'static str> {
        match self {
            Self::Beach => Some("#0EA5E9"),
            Self::Culture => Some("#F97316"),
            Self::Wildlife => Some("#10B981"),
            Self::Transport => Some("#0F172A"),
            Self::Nature => None,
        }
    }

    /// Letter drawn inside the pin; transport draws a plane instead.
    #[must_use]
    pub fn pin_glyph(self) -> Option<char> {
        match self {
            Self::Beach => Some('B'),
            Self::Culture => Some('C'),
            Self::Wildlife => Some('W'),
            Self::Nature | Self::Transport => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub id: u32,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub kind: LocationKind,
    pub description: &'static str,
}

impl Location {
    /// Google Maps directions from the airport to this location.
    #[must_use]
    pub fn directions_url(&self) -> String {
        let (origin_lat, origin_lng) = AIRPORT_ORIGIN;
        format!(
            "https://www.google.com/maps/dir/?api=1&origin={origin_lat},{origin_lng}&destination={},{}",
            self.lat, self.lng
        )
    }
}

/// Map pin as consumed by `static/js/map.js`.
#[derive(Debug, Serialize)]
struct MapPin<'a> {
    #[serde(flatten)]
    location: &'a Location,
    color: Option<&'static str>,
    glyph: Option<char>,
    directions: String,
}

const fn loc(
    id: u32,
    name: &'static str,
    lat: f64,
    lng: f64,
    kind: LocationKind,
    description: &'static str,
) -> Location {
    Location {
        id,
        name,
        lat,
        lng,
        kind,
        description,
    }
}

pub const LOCATIONS: &[Location] = &[
    loc(1, "Sigiriya Lion Rock", 7.9570, 80.7603, LocationKind::Culture, "Ancient palace on a rock."),
    loc(2, "Arugam Bay", 6.8404, 81.8368, LocationKind::Beach, "Surfer's paradise."),
    loc(3, "Galle Fort", 6.0305, 80.2150, LocationKind::Culture, "Historic Dutch fort."),
    loc(4, "Yala National Park", 6.3653, 81.5168, LocationKind::Wildlife, "Leopards and elephants."),
    loc(
        5,
        "Dambulla Cave Temple",
        7.8565,
        80.6489,
        LocationKind::Culture,
        "The largest and best-preserved cave temple complex in Sri Lanka.",
    ),
    loc(
        6,
        "Polonnaruwa Ancient City",
        7.9403,
        81.0188,
        LocationKind::Culture,
        "Explore the ruins of the 12th-century Garden City of kings.",
    ),
    loc(
        7,
        "Temple of the Sacred Tooth",
        7.2936,
        80.6413,
        LocationKind::Culture,
        "Kandy's holiest shrine housing the relic of the Buddha.",
    ),
    loc(
        8,
        "Nine Arch Bridge",
        6.8768,
        81.0608,
        LocationKind::Nature,
        "The iconic colonial railway bridge in the misty hills of Ella.",
    ),
    loc(
        9,
        "Nuwara Eliya (Little England)",
        6.9497,
        80.7891,
        LocationKind::Nature,
        "Colonial bungalows, tea plantations, and cool mountain air.",
    ),
    loc(
        10,
        "Horton Plains (World's End)",
        6.8028,
        80.8091,
        LocationKind::Nature,
        "A sheer cliff drop of 870m offering stunning panoramic views.",
    ),
    loc(
        11,
        "Mirissa Beach",
        5.9482,
        80.4551,
        LocationKind::Beach,
        "Golden sands, whale watching, and Coconut Tree Hill.",
    ),
    loc(
        12,
        "Unawatuna",
        6.0116,
        80.2483,
        LocationKind::Beach,
        "A popular banana-shaped bay perfect for swimming and dining.",
    ),
    loc(
        13,
        "Trincomalee (Nilaveli)",
        8.6757,
        81.1968,
        LocationKind::Beach,
        "White sands and crystal clear waters on the East Coast.",
    ),
    loc(
        14,
        "Udawalawe National Park",
        6.4740,
        80.8778,
        LocationKind::Wildlife,
        "Guaranteed wild elephant sightings in open plains.",
    ),
    loc(
        15,
        "Minneriya National Park",
        8.0315,
        80.8365,
        LocationKind::Wildlife,
        "Famous for 'The Gathering' - the largest meeting of Asian elephants.",
    ),
    loc(
        16,
        "Bandaranaike Int. Airport",
        7.1808,
        79.8841,
        LocationKind::Transport,
        "The main international gateway to Sri Lanka.",
    ),
    loc(17, "Adam's Peak (Sri Pada)", 6.8096, 80.4994, LocationKind::Nature, "Sacred pilgrimage mountain peak."),
    loc(18, "Anuradhapura", 8.3114, 80.4037, LocationKind::Culture, "First ancient capital of Sri Lanka."),
    loc(19, "Bentota Beach", 6.4251, 79.9952, LocationKind::Beach, "Luxury resorts and water sports."),
    loc(20, "Royal Botanical Gardens", 7.2682, 80.5966, LocationKind::Nature, "Famous royal gardens in Peradeniya."),
    loc(
        21,
        "Nallur Kandaswamy Kovil",
        9.6749,
        80.0292,
        LocationKind::Culture,
        "Iconic Hindu temple in Jaffna (North).",
    ),
];

/// Locations of one kind, in catalogue order.
pub fn locations_of(kind: LocationKind) -> impl Iterator<Item = &'static Location> {
    LOCATIONS.iter().filter(move |l| l.kind == kind)
}

/// The catalogue as JSON pins for the client map script.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn locations_json() -> serde_json::Result<String> {
    let pins: Vec<MapPin<'_>> = LOCATIONS
        .iter()
        .map(|location| MapPin {
            location,
            color: location.kind.pin_color(),
            glyph: location.kind.pin_glyph(),
            directions: location.directions_url(),
        })
        .collect();
    serde_json::to_string(&pins)
}
