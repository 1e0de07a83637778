use crate::ephemeris::types::Planet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
}

/// Aspect definitions in matching order: (type, exact angle, orb, glyph)
pub const ASPECT_DEFINITIONS: [(AspectType, f64, f64, &str); 6] = [
    (AspectType::Conjunction, 0.0, 10.0, "☌"),
    (AspectType::Opposition, 180.0, 10.0, "☍"),
    (AspectType::Trine, 120.0, 8.0, "△"),
    (AspectType::Square, 90.0, 8.0, "□"),
    (AspectType::Sextile, 60.0, 6.0, "⚹"),
    (AspectType::Quincunx, 150.0, 3.0, "⚻"),
];

impl AspectType {
    fn definition(self) -> &'static (AspectType, f64, f64, &'static str) {
        &ASPECT_DEFINITIONS[self as usize]
    }

    /// Exact angle for this aspect
    pub fn angle(self) -> f64 {
        self.definition().1
    }

    /// Natal tolerance in degrees
    pub fn orb(self) -> f64 {
        self.definition().2
    }

    pub fn glyph(self) -> &'static str {
        self.definition().3
    }
}

/// A detected angular relationship between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub planet1: Planet,
    pub planet2: Planet,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    /// Deviation from the exact angle
    pub orb: f64,
    pub is_exact: bool,
    /// 1.0 at the exact angle, falling to 0.0 at the edge of the orb
    pub strength: f64,
}
