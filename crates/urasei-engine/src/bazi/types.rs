use crate::calendar::{Branch, Element, Polarity, Stem, ALL_ELEMENTS};
use serde::{Deserialize, Serialize};

/// One stem/branch pair of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
    pub stem_element: Element,
    pub branch_element: Element,
    /// Taken from the stem; branches carry no polarity.
    pub polarity: Polarity,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            stem_element: stem.element(),
            branch_element: branch.element(),
            polarity: stem.polarity(),
        }
    }

    /// Two-character label such as "甲子".
    pub fn glyphs(&self) -> String {
        [self.stem.glyph(), self.branch.glyph()].iter().collect()
    }
}

/// Weighted element counts across the four pillars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementWeights {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementWeights {
    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn add(&mut self, element: Element, weight: f64) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += weight;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.iter().map(move |&e| (e, self.get(e)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }

    pub fn mean(&self) -> f64 {
        self.total() / ALL_ELEMENTS.len() as f64
    }
}

/// Element weights plus the derived strengths of the day master.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    #[serde(flatten)]
    pub elements: ElementWeights,
    /// Day master's own weight boosted by part of its generating element.
    #[serde(rename = "self")]
    pub self_strength: f64,
    /// Weight of the element the day master controls.
    pub control: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub day_master: Stem,
    pub day_master_element: Element,
    pub day_master_polarity: Polarity,
    pub elements: ElementWeights,
    pub strength: Strength,
    pub useful_god: Element,
    pub avoid_god: Element,
    pub lucky_elements: Vec<Element>,
    pub unlucky_elements: Vec<Element>,
}

impl BaziChart {
    /// Year, month, day and hour pillars in that order.
    pub fn pillars(&self) -> [&Pillar; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub personality: String,
    pub career: String,
    pub relationships: String,
    pub health: String,
    pub wealth: String,
    pub overall: String,
    pub advice: String,
    pub lucky_colors: Vec<String>,
    pub lucky_numbers: Vec<u8>,
    pub lucky_directions: Vec<String>,
}

impl Reading {
    /// The seven prose fields, in display order.
    pub fn texts(&self) -> [&str; 7] {
        [
            &self.personality,
            &self.career,
            &self.relationships,
            &self.health,
            &self.wealth,
            &self.overall,
            &self.advice,
        ]
    }
}
