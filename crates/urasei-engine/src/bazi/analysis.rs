//! Element balance, day-master strength and the useful/avoid elements.
//!
//! This is a single-path model: hidden stems inside branches, seasonal
//! strength and branch combinations are deliberately not considered. The
//! half weight given to branches stands in for their hidden stems.

use crate::bazi::types::{ElementWeights, Pillar, Strength};
use crate::calendar::{Element, Stem};
use crate::settings::BaziSettings;

/// Sum stem elements at weight 1 and branch elements at `branch_weight`.
pub fn analyze_elements(pillars: &[Pillar], settings: &BaziSettings) -> ElementWeights {
    let mut weights = ElementWeights::default();
    for pillar in pillars {
        weights.add(pillar.stem_element, 1.0);
        weights.add(pillar.branch_element, settings.branch_weight);
    }
    weights
}

pub fn analyze_strength(
    day_master: Stem,
    elements: &ElementWeights,
    settings: &BaziSettings,
) -> Strength {
    let own = day_master.element();
    let support = elements.get(own.generated_by());
    Strength {
        elements: *elements,
        self_strength: elements.get(own) + support * settings.support_weight,
        control: elements.get(own.controls()),
    }
}

/// Beneficial and detrimental element for a day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsefulGod {
    pub useful: Element,
    pub avoid: Element,
}

/// Strong: useful is the element the day master generates, avoid is its own.
/// Weak: useful is the element generating it, avoid is the element it controls.
pub fn determine_useful_god(
    strength: &Strength,
    day_element: Element,
    settings: &BaziSettings,
) -> UsefulGod {
    if strength.self_strength > settings.strength_threshold {
        UsefulGod {
            useful: day_element.generates(),
            avoid: day_element,
        }
    } else {
        UsefulGod {
            useful: day_element.generated_by(),
            avoid: day_element.controls(),
        }
    }
}

/// `[useful, element generating useful]`. Not de-duplicated.
pub fn lucky_elements(useful: Element) -> Vec<Element> {
    vec![useful, useful.generated_by()]
}

pub fn unlucky_elements(avoid: Element) -> Vec<Element> {
    vec![avoid]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Branch, ALL_ELEMENTS};

    fn sample_pillars() -> Vec<Pillar> {
        vec![
            Pillar::new(Stem::Geng, Branch::Wu),
            Pillar::new(Stem::Bing, Branch::Wu),
            Pillar::new(Stem::Geng, Branch::Wu),
            Pillar::new(Stem::Bing, Branch::Si),
        ]
    }

    #[test]
    fn test_analyze_elements() {
        let weights = analyze_elements(&sample_pillars(), &BaziSettings::default());
        assert_eq!(weights.metal, 2.0);
        assert_eq!(weights.fire, 4.0);
        assert_eq!(weights.wood, 0.0);
        assert_eq!(weights.total(), 6.0);
    }

    #[test]
    fn test_weak_day_master() {
        let settings = BaziSettings::default();
        let weights = analyze_elements(&sample_pillars(), &settings);
        let strength = analyze_strength(Stem::Geng, &weights, &settings);
        assert_eq!(strength.self_strength, 2.0);
        assert_eq!(strength.control, 0.0);
        let god = determine_useful_god(&strength, Element::Metal, &settings);
        assert_eq!(god.useful, Element::Earth);
        assert_eq!(god.avoid, Element::Wood);
    }

    #[test]
    fn test_strong_day_master() {
        let settings = BaziSettings::default();
        let pillars = vec![
            Pillar::new(Stem::Jia, Branch::Yin),
            Pillar::new(Stem::Yi, Branch::Mao),
            Pillar::new(Stem::Jia, Branch::Zi),
            Pillar::new(Stem::Ren, Branch::Hai),
        ];
        let weights = analyze_elements(&pillars, &settings);
        let strength = analyze_strength(Stem::Jia, &weights, &settings);
        // wood 3 + 1.0, water 1 + 1.0 -> 4.0 + 2.0 * 0.5
        assert_eq!(strength.self_strength, 5.0);
        let god = determine_useful_god(&strength, Element::Wood, &settings);
        assert_eq!(god.useful, Element::Fire);
        assert_eq!(god.avoid, Element::Wood);
    }

    #[test]
    fn test_useful_never_equals_avoid() {
        let settings = BaziSettings::default();
        for element in ALL_ELEMENTS {
            for self_strength in [0.0, 2.5, 2.51, 6.0] {
                let strength = Strength {
                    elements: ElementWeights::default(),
                    self_strength,
                    control: 0.0,
                };
                let god = determine_useful_god(&strength, element, &settings);
                assert_ne!(god.useful, god.avoid);
            }
        }
    }

    #[test]
    fn test_lucky_elements() {
        assert_eq!(lucky_elements(Element::Earth), vec![Element::Earth, Element::Fire]);
        assert_eq!(unlucky_elements(Element::Wood), vec![Element::Wood]);
    }
}
