use crate::aspects::types::{Aspect, AspectType, ASPECT_DEFINITIONS};
use crate::ephemeris::types::PlanetPosition;
use crate::settings::AstrologySettings;
use std::cmp::Ordering;

/// Aspect calculator
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    exact_orb: f64,
    transit_orb_scale: f64,
}

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &AstrologySettings) -> Self {
        Self {
            exact_orb: settings.exact_orb,
            transit_orb_scale: settings.transit_orb_scale,
        }
    }

    /// Angular separation reflected onto [0, 180].
    pub fn separation(lon1: f64, lon2: f64) -> f64 {
        let diff = (lon1 - lon2).abs();
        if diff > 180.0 {
            360.0 - diff
        } else {
            diff
        }
    }

    /// Every aspect type whose scaled orb admits the separation of two
    /// longitudes, as (type, orb, strength).
    pub fn match_aspects(&self, lon1: f64, lon2: f64, orb_scale: f64) -> Vec<(AspectType, f64, f64)> {
        let separation = Self::separation(lon1, lon2);
        ASPECT_DEFINITIONS
            .iter()
            .filter_map(|&(aspect_type, angle, orb, _)| {
                let tolerance = orb * orb_scale;
                let deviation = (separation - angle).abs();
                (deviation <= tolerance).then(|| (aspect_type, deviation, 1.0 - deviation / tolerance))
            })
            .collect()
    }

    fn build(&self, p1: &PlanetPosition, p2: &PlanetPosition, orb_scale: f64, out: &mut Vec<Aspect>) {
        for (aspect_type, orb, strength) in
            self.match_aspects(p1.absolute_degree, p2.absolute_degree, orb_scale)
        {
            out.push(Aspect {
                planet1: p1.planet,
                planet2: p2.planet,
                aspect_type,
                orb,
                is_exact: orb <= self.exact_orb,
                strength,
            });
        }
    }

    /// Aspects between every unordered pair of positions, strongest first.
    pub fn calculate_aspects(&self, positions: &[PlanetPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                self.build(&positions[i], &positions[j], 1.0, &mut aspects);
            }
        }
        sort_by_strength(&mut aspects);
        aspects
    }

    /// Aspects from each transiting body to each natal body, including a body
    /// to its own natal place, with the tighter transit orbs. Detection order:
    /// transiting body outer, natal body inner.
    pub fn detect_transit_aspects(
        &self,
        transiting: &[PlanetPosition],
        natal: &[PlanetPosition],
    ) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for transit in transiting {
            for radix in natal {
                self.build(transit, radix, self.transit_orb_scale, &mut aspects);
            }
        }
        aspects
    }

    /// Transit-to-natal aspects, strongest first.
    pub fn calculate_transit_aspects(
        &self,
        transiting: &[PlanetPosition],
        natal: &[PlanetPosition],
    ) -> Vec<Aspect> {
        let mut aspects = self.detect_transit_aspects(transiting, natal);
        sort_by_strength(&mut aspects);
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::with_settings(&AstrologySettings::default())
    }
}

/// Stable descending sort; ties keep detection order.
pub fn sort_by_strength(aspects: &mut [Aspect]) {
    aspects.sort_by(|a, b| b.strength.partial_cmp(&a.strength).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::types::Planet;

    fn pos(planet: Planet, lon: f64) -> PlanetPosition {
        PlanetPosition::at_longitude(planet, lon, false)
    }

    #[test]
    fn test_separation_reflects() {
        assert_eq!(AspectCalculator::separation(10.0, 350.0), 20.0);
        assert_eq!(AspectCalculator::separation(0.0, 180.0), 180.0);
        assert_eq!(AspectCalculator::separation(100.0, 40.0), 60.0);
    }

    #[test]
    fn test_conjunction_at_same_degree() {
        let calc = AspectCalculator::new();
        let aspects = calc.calculate_aspects(&[pos(Planet::Sun, 42.0), pos(Planet::Mars, 42.0)]);
        assert_eq!(aspects.len(), 1);
        let a = &aspects[0];
        assert_eq!(a.aspect_type, AspectType::Conjunction);
        assert_eq!(a.orb, 0.0);
        assert_eq!(a.strength, 1.0);
        assert!(a.is_exact);
        assert_eq!((a.planet1, a.planet2), (Planet::Sun, Planet::Mars));
    }

    #[test]
    fn test_square_across_zero() {
        let calc = AspectCalculator::new();
        let aspects = calc.calculate_aspects(&[pos(Planet::Moon, 315.0), pos(Planet::Venus, 45.0)]);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].aspect_type, AspectType::Square);
        assert_eq!(aspects[0].orb, 0.0);
    }

    #[test]
    fn test_orb_edges() {
        let calc = AspectCalculator::new();
        // Quincunx orb is 3: 153 is inside, 153.5 is out.
        let hits = calc.match_aspects(0.0, 153.0, 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, AspectType::Quincunx);
        assert_eq!(hits[0].2, 0.0);
        assert!(calc.match_aspects(0.0, 153.5, 1.0).is_empty());
    }

    #[test]
    fn test_transit_orbs_are_tighter() {
        let calc = AspectCalculator::new();
        let natal = [pos(Planet::Sun, 0.0)];
        // 8 degrees is inside the natal conjunction orb (10) but outside 7.
        let transit = [pos(Planet::Mars, 8.0)];
        assert!(calc.calculate_transit_aspects(&transit, &natal).is_empty());
        assert_eq!(calc.calculate_aspects(&[natal[0].clone(), transit[0].clone()]).len(), 1);

        let transit = [pos(Planet::Mars, 3.5)];
        let aspects = calc.calculate_transit_aspects(&transit, &natal);
        assert_eq!(aspects.len(), 1);
        assert!((aspects[0].strength - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_transit_detection_order() {
        let calc = AspectCalculator::new();
        let natal = [pos(Planet::Sun, 0.0)];
        let transit = [pos(Planet::Sun, 5.0), pos(Planet::Saturn, 0.0)];

        let detected = calc.detect_transit_aspects(&transit, &natal);
        let planets: Vec<Planet> = detected.iter().map(|a| a.planet1).collect();
        assert_eq!(planets, vec![Planet::Sun, Planet::Saturn]);

        let sorted = calc.calculate_transit_aspects(&transit, &natal);
        let planets: Vec<Planet> = sorted.iter().map(|a| a.planet1).collect();
        assert_eq!(planets, vec![Planet::Saturn, Planet::Sun]);
    }

    #[test]
    fn test_sorted_descending() {
        let calc = AspectCalculator::new();
        let positions = [
            pos(Planet::Sun, 0.0),
            pos(Planet::Moon, 95.0),
            pos(Planet::Mercury, 118.0),
            pos(Planet::Venus, 181.0),
            pos(Planet::Mars, 62.0),
        ];
        let aspects = calc.calculate_aspects(&positions);
        assert!(!aspects.is_empty());
        for pair in aspects.windows(2) {
            assert!(pair[0].strength >= pair[1].strength);
        }
    }
}
