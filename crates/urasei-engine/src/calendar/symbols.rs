//! The ten heavenly stems, the twelve earthly branches and the five elements.
//!
//! All tables are compile-time constants indexed by the enum discriminant.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

/// Heavenly stem (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// Earthly branch (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const ELEMENT_GLYPHS: [char; 5] = ['木', '火', '土', '金', '水'];
const STEM_GLYPHS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const BRANCH_GLYPHS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

// Stems pair up by element in generating order: 甲乙 wood, 丙丁 fire, ...
const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // 子
    Element::Earth, // 丑
    Element::Wood,  // 寅
    Element::Wood,  // 卯
    Element::Earth, // 辰
    Element::Fire,  // 巳
    Element::Fire,  // 午
    Element::Earth, // 未
    Element::Metal, // 申
    Element::Metal, // 酉
    Element::Earth, // 戌
    Element::Water, // 亥
];

impl Element {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> char {
        ELEMENT_GLYPHS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    pub fn from_glyph(glyph: char) -> Result<Self> {
        ELEMENT_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(|i| ALL_ELEMENTS[i])
            .ok_or_else(|| EngineError::UnknownSymbol {
                kind: "element",
                value: glyph.to_string(),
            })
    }

    /// The element this one generates (wood feeds fire, fire makes earth, ...).
    pub fn generates(self) -> Element {
        ALL_ELEMENTS[(self.index() + 1) % 5]
    }

    /// Inverse of [`Element::generates`]: the element that generates this one.
    pub fn generated_by(self) -> Element {
        ALL_ELEMENTS[(self.index() + 4) % 5]
    }

    /// The element this one controls (wood parts earth, earth dams water, ...).
    pub fn controls(self) -> Element {
        ALL_ELEMENTS[(self.index() + 2) % 5]
    }

    /// Inverse of [`Element::controls`].
    pub fn controlled_by(self) -> Element {
        ALL_ELEMENTS[(self.index() + 3) % 5]
    }
}

impl Stem {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at `index`, wrapping modulo 10.
    pub fn from_index(index: usize) -> Self {
        ALL_STEMS[index % 10]
    }

    pub fn from_glyph(glyph: char) -> Result<Self> {
        STEM_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(Stem::from_index)
            .ok_or_else(|| EngineError::UnknownSymbol {
                kind: "stem",
                value: glyph.to_string(),
            })
    }

    pub fn glyph(self) -> char {
        STEM_GLYPHS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Stem::Jia => "jia",
            Stem::Yi => "yi",
            Stem::Bing => "bing",
            Stem::Ding => "ding",
            Stem::Wu => "wu",
            Stem::Ji => "ji",
            Stem::Geng => "geng",
            Stem::Xin => "xin",
            Stem::Ren => "ren",
            Stem::Gui => "gui",
        }
    }

    pub fn element(self) -> Element {
        STEM_ELEMENTS[self.index()]
    }

    /// Even stems are yang, odd stems are yin.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl Branch {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        ALL_BRANCHES[index % 12]
    }

    pub fn from_glyph(glyph: char) -> Result<Self> {
        BRANCH_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(Branch::from_index)
            .ok_or_else(|| EngineError::UnknownSymbol {
                kind: "branch",
                value: glyph.to_string(),
            })
    }

    pub fn glyph(self) -> char {
        BRANCH_GLYPHS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }

    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index()]
    }
}
