//! Zodiac signs and their static master data.
//!
//! Signs run in canonical order from Aries, 30 degrees each.

use crate::ephemeris::types::Planet;
use crate::error::{EngineError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Civil-date span of a sun sign, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignPeriod {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignCompatibility {
    pub best: &'static [ZodiacSign],
    pub good: &'static [ZodiacSign],
    pub normal: &'static [ZodiacSign],
    pub challenging: &'static [ZodiacSign],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignMeta {
    pub sign: ZodiacSign,
    pub name: &'static str,
    pub glyph: &'static str,
    pub period: SignPeriod,
    pub element: SignElement,
    pub ruler: Planet,
    pub compatibility: SignCompatibility,
}

use ZodiacSign::*;

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
];

const fn period(sm: u32, sd: u32, em: u32, ed: u32) -> SignPeriod {
    SignPeriod {
        start: (sm, sd),
        end: (em, ed),
    }
}

pub const SIGNS: [SignMeta; 12] = [
    SignMeta {
        sign: Aries,
        name: "Aries",
        glyph: "♈",
        period: period(3, 21, 4, 19),
        element: SignElement::Fire,
        ruler: Planet::Mars,
        compatibility: SignCompatibility {
            best: &[Leo, Sagittarius],
            good: &[Gemini, Aquarius],
            normal: &[Aries, Taurus, Cancer, Virgo, Scorpio, Capricorn],
            challenging: &[Libra, Pisces],
        },
    },
    SignMeta {
        sign: Taurus,
        name: "Taurus",
        glyph: "♉",
        period: period(4, 20, 5, 20),
        element: SignElement::Earth,
        ruler: Planet::Venus,
        compatibility: SignCompatibility {
            best: &[Virgo, Capricorn],
            good: &[Cancer, Pisces],
            normal: &[Taurus, Gemini, Leo, Libra, Sagittarius, Aquarius],
            challenging: &[Aries, Scorpio],
        },
    },
    SignMeta {
        sign: Gemini,
        name: "Gemini",
        glyph: "♊",
        period: period(5, 21, 6, 21),
        element: SignElement::Air,
        ruler: Planet::Mercury,
        compatibility: SignCompatibility {
            best: &[Libra, Aquarius],
            good: &[Aries, Leo],
            normal: &[Taurus, Gemini, Cancer, Virgo, Scorpio, Capricorn],
            challenging: &[Sagittarius, Pisces],
        },
    },
    SignMeta {
        sign: Cancer,
        name: "Cancer",
        glyph: "♋",
        period: period(6, 22, 7, 22),
        element: SignElement::Water,
        ruler: Planet::Moon,
        compatibility: SignCompatibility {
            best: &[Scorpio, Pisces],
            good: &[Taurus, Virgo],
            normal: &[Aries, Gemini, Cancer, Leo, Libra, Sagittarius],
            challenging: &[Capricorn, Aquarius],
        },
    },
    SignMeta {
        sign: Leo,
        name: "Leo",
        glyph: "♌",
        period: period(7, 23, 8, 22),
        element: SignElement::Fire,
        ruler: Planet::Sun,
        compatibility: SignCompatibility {
            best: &[Aries, Sagittarius],
            good: &[Gemini, Libra],
            normal: &[Taurus, Cancer, Leo, Virgo, Scorpio, Capricorn],
            challenging: &[Aquarius, Pisces],
        },
    },
    SignMeta {
        sign: Virgo,
        name: "Virgo",
        glyph: "♍",
        period: period(8, 23, 9, 22),
        element: SignElement::Earth,
        ruler: Planet::Mercury,
        compatibility: SignCompatibility {
            best: &[Taurus, Capricorn],
            good: &[Cancer, Scorpio],
            normal: &[Aries, Gemini, Leo, Virgo, Sagittarius, Aquarius],
            challenging: &[Libra, Pisces],
        },
    },
    SignMeta {
        sign: Libra,
        name: "Libra",
        glyph: "♎",
        period: period(9, 23, 10, 23),
        element: SignElement::Air,
        ruler: Planet::Venus,
        compatibility: SignCompatibility {
            best: &[Gemini, Aquarius],
            good: &[Leo, Sagittarius],
            normal: &[Taurus, Cancer, Virgo, Libra, Scorpio, Capricorn],
            challenging: &[Aries, Pisces],
        },
    },
    SignMeta {
        sign: Scorpio,
        name: "Scorpio",
        glyph: "♏",
        period: period(10, 24, 11, 22),
        element: SignElement::Water,
        ruler: Planet::Mars,
        compatibility: SignCompatibility {
            best: &[Cancer, Pisces],
            good: &[Virgo, Capricorn],
            normal: &[Aries, Gemini, Leo, Libra, Scorpio, Sagittarius],
            challenging: &[Taurus, Aquarius],
        },
    },
    SignMeta {
        sign: Sagittarius,
        name: "Sagittarius",
        glyph: "♐",
        period: period(11, 23, 12, 21),
        element: SignElement::Fire,
        ruler: Planet::Jupiter,
        compatibility: SignCompatibility {
            best: &[Aries, Leo],
            good: &[Libra, Aquarius],
            normal: &[Taurus, Cancer, Virgo, Scorpio, Sagittarius, Capricorn],
            challenging: &[Gemini, Pisces],
        },
    },
    SignMeta {
        sign: Capricorn,
        name: "Capricorn",
        glyph: "♑",
        period: period(12, 22, 1, 19),
        element: SignElement::Earth,
        ruler: Planet::Saturn,
        compatibility: SignCompatibility {
            best: &[Taurus, Virgo],
            good: &[Scorpio, Pisces],
            normal: &[Aries, Gemini, Leo, Libra, Sagittarius, Capricorn],
            challenging: &[Cancer, Aquarius],
        },
    },
    SignMeta {
        sign: Aquarius,
        name: "Aquarius",
        glyph: "♒",
        period: period(1, 20, 2, 18),
        element: SignElement::Air,
        ruler: Planet::Saturn,
        compatibility: SignCompatibility {
            best: &[Gemini, Libra],
            good: &[Aries, Sagittarius],
            normal: &[Taurus, Cancer, Virgo, Scorpio, Capricorn, Aquarius],
            challenging: &[Leo, Pisces],
        },
    },
    SignMeta {
        sign: Pisces,
        name: "Pisces",
        glyph: "♓",
        period: period(2, 19, 3, 20),
        element: SignElement::Water,
        ruler: Planet::Jupiter,
        compatibility: SignCompatibility {
            best: &[Cancer, Scorpio],
            good: &[Taurus, Capricorn],
            normal: &[Gemini, Leo, Virgo, Libra, Sagittarius, Pisces],
            challenging: &[Aries, Aquarius],
        },
    },
];

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

impl ZodiacSign {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        ALL_SIGNS[index % 12]
    }

    /// Sign containing an ecliptic longitude (any real value, normalized first).
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        Self::from_index((lon / 30.0).floor() as usize)
    }

    pub fn meta(self) -> &'static SignMeta {
        &SIGNS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    pub fn glyph(self) -> &'static str {
        self.meta().glyph
    }

    pub fn element(self) -> SignElement {
        self.meta().element
    }

    /// Traditional ruler.
    pub fn ruler(self) -> Planet {
        self.meta().ruler
    }
}

/// Degree within the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % 30.0
}

/// Sun sign for a civil birthday.
pub fn sun_sign_for(month: u32, day: u32) -> Result<ZodiacSign> {
    // 2000 is a leap year, so Feb 29 is accepted.
    if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
        return Err(EngineError::InvalidBirthday { month, day });
    }
    let sign = SIGNS
        .iter()
        .find(|meta| {
            let SignPeriod { start, end } = meta.period;
            (month == start.0 && day >= start.1) || (month == end.0 && day <= end.1)
        })
        .map(|meta| meta.sign)
        .unwrap_or(Pisces);
    Ok(sign)
}
