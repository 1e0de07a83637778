pub mod natal;
pub mod transit;

pub use natal::{generate_birth_chart, BirthChart};
pub use transit::{calculate_daily_transit, DailyTransit, MoonPhase};

use crate::aspects::{Aspect, AspectCalculator};
use crate::ephemeris::positions;
use crate::ephemeris::types::{GeoLocation, PlanetPosition};
use crate::error::Result;
use crate::settings::AstrologySettings;
use chrono::NaiveDateTime;

/// Astrology calculator bound to one set of tuning values
#[derive(Debug, Clone, Default)]
pub struct AstrologyEngine {
    settings: AstrologySettings,
}

impl AstrologyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AstrologySettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AstrologySettings {
        &self.settings
    }

    pub fn calculate_planet_positions(&self, datetime: NaiveDateTime) -> Vec<PlanetPosition> {
        positions::calculate_planet_positions(datetime, &self.settings)
    }

    pub fn calculate_aspects(&self, positions: &[PlanetPosition]) -> Vec<Aspect> {
        AspectCalculator::with_settings(&self.settings).calculate_aspects(positions)
    }

    pub fn generate_birth_chart(
        &self,
        birth: NaiveDateTime,
        location: GeoLocation,
    ) -> Result<BirthChart> {
        natal::generate_birth_chart(birth, location, &self.settings)
    }

    pub fn calculate_daily_transit(&self, chart: &BirthChart, target: NaiveDateTime) -> DailyTransit {
        transit::calculate_daily_transit(chart, target, &self.settings)
    }
}
