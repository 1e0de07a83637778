use crate::aspects::{sort_by_strength, Aspect, AspectCalculator, AspectType};
use crate::chart::natal::BirthChart;
use crate::ephemeris::positions::calculate_planet_positions;
use crate::ephemeris::types::{Planet, PlanetPosition};
use crate::settings::AstrologySettings;
use crate::western::signs::normalize_degrees;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MIN_ENERGY: u8 = 1;
pub const MAX_ENERGY: u8 = 10;
/// Energy of a day with no significant aspects.
pub const BASE_ENERGY: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

const MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Phase for a Moon-minus-Sun elongation, in 45 degree slices from New.
    pub fn from_elongation(angle: f64) -> Self {
        let angle = normalize_degrees(angle);
        MOON_PHASES[((angle / 45.0).floor() as usize).min(MOON_PHASES.len() - 1)]
    }

    pub fn advice(self) -> &'static str {
        match self {
            MoonPhase::New => "A perfect time to begin something new.",
            MoonPhase::WaxingCrescent => "A time of steady progress toward your goals.",
            MoonPhase::FirstQuarter => "Your strength to overcome obstacles is rising.",
            MoonPhase::WaxingGibbous => "Your efforts are ready to bear fruit.",
            MoonPhase::Full => "Emotions run high and intuition is sharp.",
            MoonPhase::WaningGibbous => "A time to cherish a sense of gratitude.",
            MoonPhase::LastQuarter => "A time to discern what to let go of.",
            MoonPhase::WaningCrescent => "A time to turn inward and rest.",
        }
    }
}

/// Advice keyed by the transiting body and aspect type. Bodies other than
/// the luminaries have no entries.
const ASPECT_ADVICE: &[(Planet, AspectType, &str)] = &[
    (Planet::Sun, AspectType::Conjunction, "Your power of self-expression is rising"),
    (Planet::Sun, AspectType::Trine, "A day full of creativity and confidence"),
    (Planet::Sun, AspectType::Square, "A time of challenge that makes you stronger"),
    (Planet::Sun, AspectType::Opposition, "A time to review your relationships with others"),
    (Planet::Sun, AspectType::Sextile, "Cooperation and harmony are the key"),
    (Planet::Sun, AspectType::Quincunx, "Adjust with flexibility"),
    (Planet::Moon, AspectType::Conjunction, "Your emotions and intuition are sharp"),
    (Planet::Moon, AspectType::Trine, "A time of inner peace and healing"),
    (Planet::Moon, AspectType::Square, "Watch out for emotional ups and downs"),
    (Planet::Moon, AspectType::Opposition, "Keep your emotions in balance"),
    (Planet::Moon, AspectType::Sextile, "Cherish your connections with people"),
    (Planet::Moon, AspectType::Quincunx, "Take time to sort out your feelings"),
];

pub fn aspect_advice(aspect: &Aspect) -> Option<&'static str> {
    ASPECT_ADVICE
        .iter()
        .find(|(planet, kind, _)| *planet == aspect.planet1 && *kind == aspect.aspect_type)
        .map(|(_, _, text)| *text)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTransit {
    pub date: NaiveDateTime,
    pub transiting_planets: Vec<PlanetPosition>,
    /// Transit-to-natal aspects, strongest first
    pub significant_aspects: Vec<Aspect>,
    pub moon_phase: MoonPhase,
    /// 1..=10
    pub overall_energy: u8,
    pub recommendations: Vec<String>,
}

/// Moon-minus-Sun elongation of a set of positions, if both are present.
pub fn elongation(positions: &[PlanetPosition]) -> Option<f64> {
    let find = |planet| positions.iter().find(|p| p.planet == planet);
    let moon = find(Planet::Moon)?;
    let sun = find(Planet::Sun)?;
    Some(normalize_degrees(moon.absolute_degree - sun.absolute_degree))
}

/// Overall energy from every significant aspect, clamped to 1..=10.
pub fn overall_energy(aspects: &[Aspect]) -> u8 {
    let sum: f64 = aspects.iter().map(|a| a.strength).sum();
    let raw = (sum * 2.0 + BASE_ENERGY).round();
    raw.clamp(f64::from(MIN_ENERGY), f64::from(MAX_ENERGY)) as u8
}

/// Moon-phase line followed by advice for the first `limit` aspects. Aspects
/// without an advice entry are skipped, not replaced.
pub fn recommendations(aspects: &[Aspect], phase: MoonPhase, limit: usize) -> Vec<String> {
    std::iter::once(phase.advice())
        .chain(aspects.iter().take(limit).filter_map(aspect_advice))
        .map(str::to_string)
        .collect()
}

pub fn calculate_daily_transit(
    chart: &BirthChart,
    target: NaiveDateTime,
    settings: &AstrologySettings,
) -> DailyTransit {
    let transiting_planets = calculate_planet_positions(target, settings);
    let mut significant_aspects =
        AspectCalculator::with_settings(settings).detect_transit_aspects(&transiting_planets, &chart.planets);

    let moon_phase = match elongation(&transiting_planets) {
        Some(angle) => MoonPhase::from_elongation(angle),
        None => {
            log::warn!("transit for {} has no sun/moon position; assuming new moon", target);
            MoonPhase::New
        }
    };
    let overall_energy = overall_energy(&significant_aspects);
    // Advice reads the first aspects in detection order, so the luminaries lead.
    let recommendations =
        recommendations(&significant_aspects, moon_phase, settings.max_aspect_recommendations);
    sort_by_strength(&mut significant_aspects);

    log::debug!(
        "transit {} vs natal {}: {} aspects, {:?}, energy {}",
        target,
        chart.chart_date,
        significant_aspects.len(),
        moon_phase,
        overall_energy
    );

    DailyTransit {
        date: target,
        transiting_planets,
        significant_aspects,
        moon_phase,
        overall_energy,
        recommendations,
    }
}
