//! Symbolic calendar and astrology calculations.
//!
//! Two independent paths share this crate: the Four Pillars (BaZi) path
//! (`bazi`, built on `calendar`) and the western path (`ephemeris`,
//! `aspects`, `chart`, `western`). Everything is synchronous and pure; the
//! only state lives in caller-supplied stores (`store`).

pub mod aspects;
pub mod bazi;
pub mod calendar;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod settings;
pub mod store;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectType};
pub use bazi::{BaziCalculator, BaziChart, Pillar, Reading};
pub use calendar::{Branch, Element, Polarity, Stem};
pub use chart::{AstrologyEngine, BirthChart, DailyTransit, MoonPhase};
pub use ephemeris::{GeoLocation, Planet, PlanetPosition};
pub use error::{EngineError, Result};
pub use settings::EngineSettings;
pub use western::{
    calculate_compatibility, sun_sign_for, CompatibilityResult, CompatibilityTier, ZodiacSign,
};

use chrono::{NaiveDate, NaiveDateTime};

/// Validated civil date.
pub fn birth_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::InvalidDate { year, month, day })
}

/// Validated civil date and clock time (seconds zero).
pub fn birth_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    birth_date(year, month, day)?
        .and_hms_opt(hour, minute, 0)
        .ok_or(EngineError::InvalidTime { hour, minute })
}

pub fn calculate_bazi_chart(birth_date: NaiveDate, birth_hour: u32) -> Result<BaziChart> {
    BaziCalculator::new().calculate_chart(birth_date, birth_hour)
}

pub fn generate_bazi_reading(chart: &BaziChart) -> Reading {
    BaziCalculator::new().generate_reading(chart)
}

pub fn generate_birth_chart(
    birth: NaiveDateTime,
    latitude: f64,
    longitude: f64,
    timezone: &str,
) -> Result<BirthChart> {
    let location = GeoLocation::new(latitude, longitude, timezone)?;
    AstrologyEngine::new().generate_birth_chart(birth, location)
}

pub fn calculate_daily_transit(chart: &BirthChart, target: NaiveDateTime) -> DailyTransit {
    AstrologyEngine::new().calculate_daily_transit(chart, target)
}

pub fn calculate_planet_positions(datetime: NaiveDateTime) -> Vec<PlanetPosition> {
    AstrologyEngine::new().calculate_planet_positions(datetime)
}

/// Pairwise aspects, strongest first.
pub fn calculate_aspects(positions: &[PlanetPosition]) -> Vec<Aspect> {
    AspectCalculator::new().calculate_aspects(positions)
}
