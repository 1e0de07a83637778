//! Canned reading text and lucky attributes for a chart.
//!
//! Every lookup falls back to a fixed default string when a key is missing,
//! so a reading is always complete.

use crate::bazi::types::{BaziChart, Reading};
use crate::calendar::{Element, Polarity};
use crate::settings::BaziSettings;

pub const DEFAULT_PERSONALITY: &str = "You carry a distinctive individuality of your own.";
pub const DEFAULT_CAREER: &str = "You have the potential to succeed across many fields.";
pub const DEFAULT_HEALTH: &str = "Your health is generally well supported.";
pub const DEFAULT_LUCKY_COLORS: &[&str] = &["white"];
pub const DEFAULT_LUCKY_NUMBERS: &[u8] = &[8];
pub const DEFAULT_LUCKY_DIRECTIONS: &[&str] = &["east"];

const PERSONALITIES: &[(Element, Polarity, &str)] = &[
    (Element::Wood, Polarity::Yang, "Driven and ambitious, you lead naturally. You are creative and love taking on new challenges."),
    (Element::Wood, Polarity::Yin, "Flexible and cooperative, you work well with others. You have an artistic eye and love beautiful things."),
    (Element::Fire, Polarity::Yang, "Passionate and energetic, you are bright and sociable. Your expressiveness draws people to you."),
    (Element::Fire, Polarity::Yin, "Thoughtful and perceptive, you see into the heart of things with a quiet intelligence."),
    (Element::Earth, Polarity::Yang, "Steady and responsible, you are patient and see things through to the end."),
    (Element::Earth, Polarity::Yin, "Careful and caring, you support the people around you and create a place where others feel safe."),
    (Element::Metal, Polarity::Yang, "Strong-willed with a firm sense of justice, you are decisive and face hard situations with courage."),
    (Element::Metal, Polarity::Yin, "Refined and graceful, you have a fine aesthetic sense and a talent for detailed, technical work."),
    (Element::Water, Polarity::Yang, "Adaptable and fluid, you are wise and respond to each situation with flexibility."),
    (Element::Water, Polarity::Yin, "A deep thinker with sharp intuition, you are drawn to the mysterious and value the inner life."),
];

const CAREERS: &[(Element, &str)] = &[
    (Element::Wood, "Your talents shine in education, publishing, environmental work, forestry and architectural design."),
    (Element::Fire, "Entertainment, advertising, IT, electrical work and cooking suit you well."),
    (Element::Earth, "You succeed in stable fields such as real estate, agriculture, construction, medicine and insurance."),
    (Element::Metal, "You show your strength in finance, manufacturing, machinery, jewellery and law."),
    (Element::Water, "Logistics, trade, fisheries, cleaning services and academic research are a good match."),
];

const HEALTH: &[(Element, &str)] = &[
    (Element::Wood, "Look after your liver and muscles, and try not to let stress build up."),
    (Element::Fire, "Take care of your heart, circulation and eyes, and avoid overexcitement."),
    (Element::Earth, "Watch your digestion and muscles, and keep regular eating habits."),
    (Element::Metal, "Mind your lungs and skin, and guard against dryness."),
    (Element::Water, "Take care of your kidneys, reproductive system and bones, and avoid getting chilled."),
];

const LUCKY_COLORS: &[(Element, &[&str])] = &[
    (Element::Wood, &["green", "teal", "blue"]),
    (Element::Fire, &["red", "pink", "orange"]),
    (Element::Earth, &["yellow", "beige", "brown"]),
    (Element::Metal, &["white", "silver", "gold"]),
    (Element::Water, &["black", "navy", "deep purple"]),
];

const LUCKY_NUMBERS: &[(Element, &[u8])] = &[
    (Element::Wood, &[3, 4, 8]),
    (Element::Fire, &[2, 7, 9]),
    (Element::Earth, &[5, 6, 0]),
    (Element::Metal, &[4, 9, 1]),
    (Element::Water, &[1, 6, 7]),
];

const LUCKY_DIRECTIONS: &[(Element, &[&str])] = &[
    (Element::Wood, &["east", "southeast"]),
    (Element::Fire, &["south"]),
    (Element::Earth, &["center", "southwest", "northeast"]),
    (Element::Metal, &["west", "northwest"]),
    (Element::Water, &["north"]),
];

fn lookup<T: Copy>(table: &[(Element, T)], element: Element, default: T) -> T {
    match table.iter().find(|(e, _)| *e == element) {
        Some((_, value)) => *value,
        None => {
            log::warn!("no table entry for element {:?}, using default", element);
            default
        }
    }
}

pub fn personality_text(element: Element, polarity: Polarity) -> &'static str {
    PERSONALITIES
        .iter()
        .find(|(e, p, _)| *e == element && *p == polarity)
        .map(|(_, _, text)| *text)
        .unwrap_or(DEFAULT_PERSONALITY)
}

pub fn career_text(useful: Element) -> &'static str {
    lookup(CAREERS, useful, DEFAULT_CAREER)
}

pub fn relationship_text(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Yang => "You tend to make the first move. You look for a partner with understanding and a generous heart.",
        Polarity::Yin => "You build relationships carefully and value deep bonds and a spiritual connection.",
    }
}

pub fn health_text(avoid: Element) -> &'static str {
    lookup(HEALTH, avoid, DEFAULT_HEALTH)
}

pub fn wealth_text(self_strength: f64, settings: &BaziSettings) -> &'static str {
    if self_strength > settings.strength_threshold {
        "Your finances are stable. Planned investment and saving will build your assets."
    } else {
        "Effort opens your path to wealth, and you can count on help from allies."
    }
}

/// Keyed on the mean element weight. With the default weights the total is
/// always 6.0, so the mean (1.2) never clears the default threshold.
pub fn overall_text(balance: f64, settings: &BaziSettings) -> &'static str {
    if balance > settings.balance_threshold {
        "Your five elements are fairly balanced, promising a stable path through life."
    } else {
        "You may show outstanding talent in one particular field."
    }
}

pub fn advice_text(useful: Element) -> String {
    format!(
        "Living in tune with {name}, your useful element, will lift your fortune. \
         Bring {name} into your colors, directions and food.",
        name = useful.name()
    )
}

pub fn lucky_colors(element: Element) -> Vec<String> {
    lookup(LUCKY_COLORS, element, DEFAULT_LUCKY_COLORS)
        .iter()
        .map(|c| c.to_string())
        .collect()
}

pub fn lucky_numbers(element: Element) -> Vec<u8> {
    lookup(LUCKY_NUMBERS, element, DEFAULT_LUCKY_NUMBERS).to_vec()
}

pub fn lucky_directions(element: Element) -> Vec<String> {
    lookup(LUCKY_DIRECTIONS, element, DEFAULT_LUCKY_DIRECTIONS)
        .iter()
        .map(|d| d.to_string())
        .collect()
}

pub fn generate_reading(chart: &BaziChart, settings: &BaziSettings) -> Reading {
    Reading {
        personality: personality_text(chart.day_master_element, chart.day_master_polarity)
            .to_string(),
        career: career_text(chart.useful_god).to_string(),
        relationships: relationship_text(chart.day_master_polarity).to_string(),
        health: health_text(chart.avoid_god).to_string(),
        wealth: wealth_text(chart.strength.self_strength, settings).to_string(),
        overall: overall_text(chart.elements.mean(), settings).to_string(),
        advice: advice_text(chart.useful_god),
        lucky_colors: lucky_colors(chart.useful_god),
        lucky_numbers: lucky_numbers(chart.useful_god),
        lucky_directions: lucky_directions(chart.useful_god),
    }
}
