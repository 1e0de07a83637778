//! Birth chart assembly.
//!
//! Angles use a clock-hour sidereal approximation and the houses are equal
//! houses of 30 degrees from the ascendant.

use crate::aspects::{Aspect, AspectCalculator};
use crate::ephemeris::positions::calculate_planet_positions;
use crate::ephemeris::types::{GeoLocation, Planet, PlanetPosition};
use crate::error::Result;
use crate::settings::AstrologySettings;
use crate::western::signs::{normalize_degrees, ZodiacSign};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub const HOUSE_COUNT: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub planets: Vec<PlanetPosition>,
    pub aspects: Vec<Aspect>,
    pub ascendant: ZodiacSign,
    pub midheaven: ZodiacSign,
    pub ascendant_degree: f64,
    pub midheaven_degree: f64,
    /// Cusp longitudes of houses 1-12
    pub houses: Vec<f64>,
    pub chart_date: NaiveDateTime,
    pub location: GeoLocation,
}

impl BirthChart {
    pub fn position(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet == planet)
    }
}

/// Approximate ascendant longitude from the clock hour and the longitude.
pub fn ascendant_degree(hour: u32, longitude: f64) -> f64 {
    let local_sidereal_hours = (f64::from(hour) + longitude / 15.0).rem_euclid(24.0);
    normalize_degrees(local_sidereal_hours * 15.0)
}

/// Equal-house cusps starting at the ascendant.
pub fn equal_house_cusps(ascendant: f64) -> Vec<f64> {
    (0..HOUSE_COUNT)
        .map(|i| normalize_degrees(ascendant + i as f64 * 30.0))
        .collect()
}

/// House number (1-12) containing a longitude for a given ascendant.
pub fn house_for(longitude: f64, ascendant: f64) -> u8 {
    let offset = normalize_degrees(longitude - ascendant);
    (offset / 30.0).floor() as u8 % HOUSE_COUNT as u8 + 1
}

pub fn generate_birth_chart(
    birth: NaiveDateTime,
    location: GeoLocation,
    settings: &AstrologySettings,
) -> Result<BirthChart> {
    let location = GeoLocation::new(location.latitude, location.longitude, location.timezone)?;

    let ascendant_degree = ascendant_degree(birth.hour(), location.longitude);
    let midheaven_degree = normalize_degrees(ascendant_degree + 90.0);
    let houses = equal_house_cusps(ascendant_degree);

    let mut planets = calculate_planet_positions(birth, settings);
    for position in &mut planets {
        position.house = Some(house_for(position.absolute_degree, ascendant_degree));
    }
    let aspects = AspectCalculator::with_settings(settings).calculate_aspects(&planets);

    log::debug!(
        "birth chart {} at ({:.2}, {:.2}): asc {:.2} {:?}, {} aspects",
        birth,
        location.latitude,
        location.longitude,
        ascendant_degree,
        ZodiacSign::from_longitude(ascendant_degree),
        aspects.len()
    );

    Ok(BirthChart {
        planets,
        aspects,
        ascendant: ZodiacSign::from_longitude(ascendant_degree),
        midheaven: ZodiacSign::from_longitude(midheaven_degree),
        ascendant_degree,
        midheaven_degree,
        houses,
        chart_date: birth,
        location,
    })
}
