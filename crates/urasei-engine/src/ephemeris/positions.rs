//! Stylized planetary longitudes.
//!
//! These are mean-motion approximations keyed off the Julian day, not an
//! ephemeris. Output is stable for a given instant and that is all it promises.

use crate::ephemeris::julian::{datetime_to_julian_day, days_since_j2000};
use crate::ephemeris::types::{Planet, PlanetPosition};
use crate::settings::AstrologySettings;
use crate::western::signs::normalize_degrees;
use chrono::NaiveDateTime;

/// Mean longitude of the Sun at J2000.0, degrees.
const SUN_MEAN_LONGITUDE_J2000: f64 = 280.466_46;
/// Mean daily motion of the Sun, degrees.
const SUN_DAILY_MOTION: f64 = 0.985_647_4;

const MOON_DAILY_MOTION: f64 = 13.2;
const MOON_CYCLE_DAYS: f64 = 27.3;

/// Length of the cycle the planet drift is folded over, days.
const DRIFT_CYCLE_DAYS: f64 = 365.0;

/// (planet, offset from the Sun in degrees, daily speed, retrograde cycle in days)
const BODY_MOTIONS: &[(Planet, f64, f64, f64)] = &[
    (Planet::Mercury, -5.0, 1.6, 116.0),
    (Planet::Venus, 15.0, 1.2, 584.0),
    (Planet::Mars, 45.0, 0.5, 780.0),
    (Planet::Jupiter, 120.0, 0.08, 399.0),
    (Planet::Saturn, 240.0, 0.03, 378.0),
    (Planet::Uranus, 300.0, 0.01, 370.0),
    (Planet::Neptune, 330.0, 0.006, 367.0),
    (Planet::Pluto, 350.0, 0.004, 366.0),
];

/// Mean ecliptic longitude of the Sun for a Julian day, in [0, 360).
pub fn sun_longitude(jd: f64) -> f64 {
    normalize_degrees(SUN_MEAN_LONGITUDE_J2000 + SUN_DAILY_MOTION * days_since_j2000(jd))
}

pub fn moon_longitude(jd: f64, sun: f64) -> f64 {
    normalize_degrees(sun + MOON_DAILY_MOTION * jd.rem_euclid(MOON_CYCLE_DAYS))
}

/// Longitude and retrograde flag of one of the eight non-luminary bodies.
///
/// Returns `None` for the Sun and Moon, which have their own formulas.
pub fn planet_longitude(
    planet: Planet,
    jd: f64,
    sun: f64,
    settings: &AstrologySettings,
) -> Option<(f64, bool)> {
    let &(_, offset, speed, cycle) = BODY_MOTIONS.iter().find(|(p, ..)| *p == planet)?;

    let progress = jd.rem_euclid(cycle) / cycle;
    let retrograde = settings.retrograde_window.contains(progress);
    let apparent_speed = if retrograde {
        -speed * settings.retrograde_speed_factor
    } else {
        speed
    };

    let longitude = sun + offset + apparent_speed * jd.rem_euclid(DRIFT_CYCLE_DAYS);
    Some((normalize_degrees(longitude), retrograde))
}

/// Positions of all ten bodies at an instant, Sun and Moon first.
pub fn calculate_planet_positions(
    datetime: NaiveDateTime,
    settings: &AstrologySettings,
) -> Vec<PlanetPosition> {
    let jd = datetime_to_julian_day(datetime);
    positions_for_julian_day(jd, settings)
}

pub fn positions_for_julian_day(jd: f64, settings: &AstrologySettings) -> Vec<PlanetPosition> {
    let sun = sun_longitude(jd);
    let mut positions = Vec::with_capacity(BODY_MOTIONS.len() + 2);

    positions.push(PlanetPosition::at_longitude(Planet::Sun, sun, false));
    positions.push(PlanetPosition::at_longitude(
        Planet::Moon,
        moon_longitude(jd, sun),
        false,
    ));

    for &(planet, ..) in BODY_MOTIONS {
        if let Some((longitude, retrograde)) = planet_longitude(planet, jd, sun, settings) {
            positions.push(PlanetPosition::at_longitude(planet, longitude, retrograde));
        }
    }

    positions
}
