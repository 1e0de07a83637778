use urasei_engine::aspects::{AspectCalculator, AspectType};
use urasei_engine::chart::transit::{aspect_advice, overall_energy, MAX_ENERGY, MIN_ENERGY};
use urasei_engine::ephemeris::ALL_PLANETS;
use urasei_engine::settings::AstrologySettings;
use urasei_engine::{
    birth_datetime, calculate_aspects, calculate_daily_transit, calculate_planet_positions,
    generate_birth_chart, AstrologyEngine, MoonPhase, Planet, PlanetPosition, ZodiacSign,
};

fn pos(planet: Planet, lon: f64) -> PlanetPosition {
    PlanetPosition::at_longitude(planet, lon, false)
}

#[test]
fn test_positions_cover_every_body() {
    let dt = birth_datetime(1990, 5, 15, 10, 30).unwrap();
    let positions = calculate_planet_positions(dt);
    assert_eq!(positions.len(), ALL_PLANETS.len());
    for p in &positions {
        assert!((0.0..360.0).contains(&p.absolute_degree));
        assert!((0.0..30.0).contains(&p.degree));
        assert_eq!(p.zodiac_sign, ZodiacSign::from_longitude(p.absolute_degree));
        assert_eq!(p.house, None);
    }
    assert_eq!(positions, calculate_planet_positions(dt));
}

#[test]
fn test_sun_near_expected_sign() {
    // Mean longitude on 2000-01-01 12:00 is ~280.47, early Capricorn.
    let dt = birth_datetime(2000, 1, 1, 12, 0).unwrap();
    let sun = &calculate_planet_positions(dt)[0];
    assert_eq!(sun.planet, Planet::Sun);
    assert_eq!(sun.zodiac_sign, ZodiacSign::Capricorn);
    assert!((sun.absolute_degree - 280.46646).abs() < 1e-6);
}

#[test]
fn test_identical_degree_conjunction() {
    let aspects = calculate_aspects(&[pos(Planet::Venus, 123.4), pos(Planet::Jupiter, 123.4)]);
    let conj = aspects
        .iter()
        .find(|a| a.aspect_type == AspectType::Conjunction)
        .unwrap();
    assert_eq!(conj.orb, 0.0);
    assert_eq!(conj.strength, 1.0);
    assert!(conj.is_exact);
}

#[test]
fn test_ninety_degrees_is_square() {
    let aspects = calculate_aspects(&[pos(Planet::Sun, 10.0), pos(Planet::Saturn, 100.0)]);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, AspectType::Square);
    assert_eq!(aspects[0].orb, 0.0);
}

#[test]
fn test_real_chart_aspects_sorted() {
    let dt = birth_datetime(1985, 11, 3, 6, 45).unwrap();
    let aspects = calculate_aspects(&calculate_planet_positions(dt));
    for pair in aspects.windows(2) {
        assert!(pair[0].strength >= pair[1].strength);
    }
    for a in &aspects {
        assert!(a.orb <= a.aspect_type.orb());
        assert!((0.0..=1.0).contains(&a.strength));
        assert_eq!(a.is_exact, a.orb <= 1.0);
    }
}

#[test]
fn test_birth_chart() {
    let dt = birth_datetime(1990, 5, 15, 10, 30).unwrap();
    let chart = generate_birth_chart(dt, 35.68, 139.69, "Asia/Tokyo").unwrap();
    assert_eq!(chart.planets.len(), 10);
    assert_eq!(chart.houses.len(), 12);
    for (i, pair) in chart.houses.windows(2).enumerate() {
        let gap = (pair[1] - pair[0]).rem_euclid(360.0);
        assert!((gap - 30.0).abs() < 1e-9, "house {}", i + 1);
    }
    assert_eq!(chart.location.timezone, "Asia/Tokyo");
    assert_eq!(chart.chart_date, dt);
    assert!(generate_birth_chart(dt, 0.0, 200.0, "UTC").is_err());
}

#[test]
fn test_daily_transit() {
    let birth = birth_datetime(1990, 5, 15, 10, 30).unwrap();
    let chart = generate_birth_chart(birth, 35.68, 139.69, "Asia/Tokyo").unwrap();
    let today = birth_datetime(2024, 6, 1, 9, 0).unwrap();
    let transit = calculate_daily_transit(&chart, today);

    assert_eq!(transit.date, today);
    assert_eq!(transit.transiting_planets.len(), 10);
    assert!((MIN_ENERGY..=MAX_ENERGY).contains(&transit.overall_energy));
    assert_eq!(transit.overall_energy, overall_energy(&transit.significant_aspects));
    assert_eq!(transit.recommendations[0], transit.moon_phase.advice());
    assert!(transit.recommendations.len() <= 4);
    for pair in transit.significant_aspects.windows(2) {
        assert!(pair[0].strength >= pair[1].strength);
    }
    for a in &transit.significant_aspects {
        assert!(a.orb <= a.aspect_type.orb() * 0.7 + 1e-9);
    }
}

#[test]
fn test_transit_against_itself_has_conjunctions() {
    let birth = birth_datetime(1990, 5, 15, 10, 30).unwrap();
    let chart = generate_birth_chart(birth, 0.0, 0.0, "UTC").unwrap();
    let transit = calculate_daily_transit(&chart, birth);
    for planet in ALL_PLANETS {
        assert!(transit.significant_aspects.iter().any(|a| {
            a.planet1 == planet
                && a.planet2 == planet
                && a.aspect_type == AspectType::Conjunction
                && a.strength == 1.0
        }));
    }
    // Ten exact self-conjunctions alone push energy to the cap.
    assert_eq!(transit.overall_energy, MAX_ENERGY);
}

#[test]
fn test_transit_advice_follows_detection_order() {
    let birth = birth_datetime(1990, 5, 15, 10, 30).unwrap();
    let chart = generate_birth_chart(birth, 0.0, 0.0, "UTC").unwrap();
    let transit = calculate_daily_transit(&chart, birth);
    // Transit Sun on natal Sun is the first pair checked.
    assert_eq!(transit.recommendations[1], "Your power of self-expression is rising");
}

#[test]
fn test_transit_advice_over_a_month() {
    let birth = birth_datetime(1990, 5, 15, 10, 30).unwrap();
    let chart = generate_birth_chart(birth, 35.68, 139.69, "Asia/Tokyo").unwrap();
    let calc = AspectCalculator::new();
    let mut advised_days = 0;

    for day in 1..=28 {
        let today = birth_datetime(2024, 6, day, 9, 0).unwrap();
        let transit = calculate_daily_transit(&chart, today);

        // Only Sun and Moon carry advice, and they are detected first.
        let luminary: Vec<&str> = calc
            .detect_transit_aspects(&transit.transiting_planets, &chart.planets)
            .iter()
            .take(3)
            .filter(|a| matches!(a.planet1, Planet::Sun | Planet::Moon))
            .filter_map(aspect_advice)
            .collect();
        let luminary_count = transit
            .significant_aspects
            .iter()
            .filter(|a| matches!(a.planet1, Planet::Sun | Planet::Moon))
            .count();

        assert_eq!(transit.recommendations.len(), 1 + luminary_count.min(3), "2024-06-{:02}", day);
        assert_eq!(&transit.recommendations[1..], luminary.as_slice(), "2024-06-{:02}", day);
        if luminary_count > 0 {
            advised_days += 1;
        }
    }
    assert!(advised_days > 20, "only {} days carried aspect advice", advised_days);
}

#[test]
fn test_moon_phase_boundaries() {
    let cases = [
        (0.0, MoonPhase::New),
        (45.0, MoonPhase::WaxingCrescent),
        (90.0, MoonPhase::FirstQuarter),
        (135.0, MoonPhase::WaxingGibbous),
        (180.0, MoonPhase::Full),
        (225.0, MoonPhase::WaningGibbous),
        (270.0, MoonPhase::LastQuarter),
        (315.0, MoonPhase::WaningCrescent),
    ];
    for (angle, phase) in cases {
        assert_eq!(MoonPhase::from_elongation(angle), phase);
        assert_eq!(MoonPhase::from_elongation(angle + 44.9), phase);
    }
    let json = serde_json::to_string(&MoonPhase::WaxingGibbous).unwrap();
    assert_eq!(json, "\"waxing_gibbous\"");
}

#[test]
fn test_engine_settings_override() {
    let settings = AstrologySettings {
        max_aspect_recommendations: 0,
        ..AstrologySettings::default()
    };
    let engine = AstrologyEngine::with_settings(settings);
    let birth = birth_datetime(1990, 5, 15, 10, 30).unwrap();
    let chart = engine
        .generate_birth_chart(birth, urasei_engine::GeoLocation::new(0.0, 0.0, "UTC").unwrap())
        .unwrap();
    let transit = engine.calculate_daily_transit(&chart, birth);
    assert_eq!(transit.recommendations.len(), 1);
}
