use crate::error::{EngineError, Result};
use crate::western::signs::{degree_in_sign, normalize_degrees, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

// (id, display name, glyph)
const PLANET_DATA: [(&str, &str, &str); 10] = [
    ("sun", "Sun", "☉"),
    ("moon", "Moon", "☽"),
    ("mercury", "Mercury", "☿"),
    ("venus", "Venus", "♀"),
    ("mars", "Mars", "♂"),
    ("jupiter", "Jupiter", "♃"),
    ("saturn", "Saturn", "♄"),
    ("uranus", "Uranus", "♅"),
    ("neptune", "Neptune", "♆"),
    ("pluto", "Pluto", "♇"),
];

impl Planet {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        PLANET_DATA[self.index()].0
    }

    pub fn display_name(self) -> &'static str {
        PLANET_DATA[self.index()].1
    }

    pub fn glyph(self) -> &'static str {
        PLANET_DATA[self.index()].2
    }

    pub fn from_id(id: &str) -> Result<Self> {
        let lower = id.to_lowercase();
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.id() == lower)
            .ok_or_else(|| EngineError::UnknownSymbol {
                kind: "planet",
                value: id.to_string(),
            })
    }
}

/// Geographic location coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, carried through for display only.
    pub timezone: String,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64, timezone: impl Into<String>) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(EngineError::InvalidCoordinate {
                name: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(EngineError::InvalidCoordinate {
                name: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
            timezone: timezone.into(),
        })
    }
}

/// Position of one body on the ecliptic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: Planet,
    pub zodiac_sign: ZodiacSign,
    /// Degree within the sign, [0, 30)
    pub degree: f64,
    /// Ecliptic longitude, [0, 360)
    pub absolute_degree: f64,
    pub retrograde: bool,
    /// House number 1-12, set only on natal charts
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub house: Option<u8>,
}

impl PlanetPosition {
    pub fn at_longitude(planet: Planet, longitude: f64, retrograde: bool) -> Self {
        let absolute_degree = normalize_degrees(longitude);
        Self {
            planet,
            zodiac_sign: ZodiacSign::from_longitude(absolute_degree),
            degree: degree_in_sign(absolute_degree),
            absolute_degree,
            retrograde,
            house: None,
        }
    }
}
