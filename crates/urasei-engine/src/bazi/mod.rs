pub mod analysis;
pub mod pillars;
pub mod reading;
pub mod types;

pub use analysis::{analyze_elements, analyze_strength, determine_useful_god, UsefulGod};
pub use pillars::{day_pillar, four_pillars, hour_pillar, month_pillar, year_pillar};
pub use reading::generate_reading;
pub use types::{BaziChart, ElementWeights, Pillar, Reading, Strength};

use crate::error::Result;
use crate::settings::BaziSettings;
use chrono::NaiveDate;

/// Four Pillars calculator
#[derive(Debug, Clone, Default)]
pub struct BaziCalculator {
    settings: BaziSettings,
}

impl BaziCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: BaziSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BaziSettings {
        &self.settings
    }

    /// Compute the full chart for a birth date and clock hour (0..=23).
    pub fn calculate_chart(&self, birth_date: NaiveDate, birth_hour: u32) -> Result<BaziChart> {
        let pillars = four_pillars(birth_date, birth_hour)?;
        let [year, month, day, hour] = pillars;

        let day_master = day.stem;
        let day_element = day_master.element();
        let elements = analyze_elements(&pillars, &self.settings);
        let strength = analyze_strength(day_master, &elements, &self.settings);
        let god = determine_useful_god(&strength, day_element, &self.settings);

        log::debug!(
            "bazi {} {:02}h -> {} {} {} {} (useful {:?}, avoid {:?})",
            birth_date,
            birth_hour,
            year.glyphs(),
            month.glyphs(),
            day.glyphs(),
            hour.glyphs(),
            god.useful,
            god.avoid
        );

        Ok(BaziChart {
            year,
            month,
            day,
            hour,
            day_master,
            day_master_element: day_element,
            day_master_polarity: day_master.polarity(),
            elements,
            strength,
            useful_god: god.useful,
            avoid_god: god.avoid,
            lucky_elements: analysis::lucky_elements(god.useful),
            unlucky_elements: analysis::unlucky_elements(god.avoid),
        })
    }

    pub fn generate_reading(&self, chart: &BaziChart) -> Reading {
        reading::generate_reading(chart, &self.settings)
    }
}
