use chrono::{Datelike, Duration, NaiveDate};
use urasei_engine::bazi::{day_pillar, year_pillar, BaziCalculator};
use urasei_engine::calendar::{ALL_BRANCHES, ALL_STEMS};
use urasei_engine::settings::BaziSettings;
use urasei_engine::{
    calculate_bazi_chart, generate_bazi_reading, Branch, Element, EngineError, Polarity, Stem,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_chart_1990_05_15_hour_10() {
    let chart = calculate_bazi_chart(ymd(1990, 5, 15), 10).unwrap();

    assert_eq!((chart.year.stem, chart.year.branch), (Stem::Geng, Branch::Wu));
    assert_eq!((chart.month.stem, chart.month.branch), (Stem::Bing, Branch::Wu));
    assert_eq!((chart.day.stem, chart.day.branch), (Stem::Geng, Branch::Wu));
    assert_eq!((chart.hour.stem, chart.hour.branch), (Stem::Bing, Branch::Si));

    assert_eq!(chart.day_master, Stem::Geng);
    assert_eq!(chart.day_master_element, Element::Metal);
    assert_eq!(chart.day_master_polarity, Polarity::Yang);

    assert_eq!(chart.elements.fire, 4.0);
    assert_eq!(chart.elements.metal, 2.0);
    assert_eq!(chart.elements.wood + chart.elements.earth + chart.elements.water, 0.0);
    assert_eq!(chart.strength.self_strength, 2.0);
    assert_eq!(chart.strength.control, 0.0);

    assert_eq!(chart.useful_god, Element::Earth);
    assert_eq!(chart.avoid_god, Element::Wood);
    assert_eq!(chart.lucky_elements, vec![Element::Earth, Element::Fire]);
    assert_eq!(chart.unlucky_elements, vec![Element::Wood]);

    let reading = generate_bazi_reading(&chart);
    assert!(reading.texts().iter().all(|t| !t.is_empty()));
    assert!(!reading.lucky_colors.is_empty());
    assert!(!reading.lucky_numbers.is_empty());
    assert!(!reading.lucky_directions.is_empty());
}

#[test]
fn test_chart_is_deterministic() {
    let a = calculate_bazi_chart(ymd(1990, 5, 15), 10).unwrap();
    let b = calculate_bazi_chart(ymd(1990, 5, 15), 10).unwrap();
    assert_eq!(a, b);
    assert_eq!(generate_bazi_reading(&a), generate_bazi_reading(&b));
}

#[test]
fn test_elements_always_sum_to_six() {
    let start = ymd(1950, 1, 1);
    for step in 0..400 {
        let date = start + Duration::days(step * 67);
        let hour = (step % 24) as u32;
        let chart = calculate_bazi_chart(date, hour).unwrap();
        let values: Vec<f64> = chart.elements.iter().map(|(_, w)| w).collect();
        assert!(values.iter().all(|w| *w >= 0.0));
        assert_eq!(values.iter().sum::<f64>(), 6.0, "{} {}h", date, hour);
        assert_ne!(chart.useful_god, chart.avoid_god, "{} {}h", date, hour);
        assert_eq!(chart.lucky_elements[0], chart.useful_god);
        assert_eq!(chart.unlucky_elements, vec![chart.avoid_god]);
    }
}

#[test]
fn test_pillar_fields_match_tables() {
    let chart = calculate_bazi_chart(ymd(2001, 9, 11), 23).unwrap();
    for pillar in chart.pillars() {
        assert!(ALL_STEMS.contains(&pillar.stem));
        assert!(ALL_BRANCHES.contains(&pillar.branch));
        assert_eq!(pillar.stem_element, pillar.stem.element());
        assert_eq!(pillar.branch_element, pillar.branch.element());
        assert_eq!(pillar.polarity, pillar.stem.polarity());
    }
}

#[test]
fn test_year_cycle_has_period_sixty() {
    for year in [1800, 1899, 1900, 1984, 2000, 2023] {
        for (m, d) in [(1, 15), (2, 3), (2, 4), (7, 1)] {
            let date = ymd(year, m, d);
            let later = date.with_year(year + 60).unwrap();
            assert_eq!(year_pillar(date), year_pillar(later));
        }
    }
}

#[test]
fn test_day_pillar_reference_and_offsets() {
    let reference = day_pillar(ymd(1900, 1, 1));
    assert_eq!((reference.stem, reference.branch), (Stem::Jia, Branch::Zi));

    let before = day_pillar(ymd(1899, 12, 31));
    assert_eq!((before.stem, before.branch), (Stem::Gui, Branch::Hai));

    let later = day_pillar(ymd(1900, 3, 2));
    assert_eq!(later, day_pillar(ymd(1900, 3, 2) + Duration::days(60)));
}

#[test]
fn test_invalid_hour_rejected() {
    let err = calculate_bazi_chart(ymd(1990, 5, 15), 24).unwrap_err();
    assert_eq!(err, EngineError::InvalidHour { hour: 24 });
    assert!(err.is_invalid_input());
}

#[test]
fn test_custom_threshold_flips_strength() {
    let lenient = BaziCalculator::with_settings(BaziSettings {
        strength_threshold: 1.5,
        ..BaziSettings::default()
    });
    let chart = lenient.calculate_chart(ymd(1990, 5, 15), 10).unwrap();
    // self strength 2.0 now counts as strong
    assert_eq!(chart.useful_god, Element::Water);
    assert_eq!(chart.avoid_god, Element::Metal);
    assert_eq!(chart.lucky_elements, vec![Element::Water, Element::Metal]);
}

#[test]
fn test_chart_serializes_with_original_keys() {
    let chart = calculate_bazi_chart(ymd(1990, 5, 15), 10).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["dayMaster"], "geng");
    assert_eq!(json["usefulGod"], "earth");
    assert_eq!(json["strength"]["self"], 2.0);
    assert_eq!(json["strength"]["fire"], 4.0);
    assert_eq!(json["year"]["stemElement"], "metal");
}
