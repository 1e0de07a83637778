//! Approximate civil dates of the 24 solar terms.
//!
//! The dates are fixed per month rather than computed from the sun's true
//! longitude, so a birth near a term boundary may land a day early or late.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarTerm {
    pub name: &'static str,
    pub glyphs: &'static str,
    pub month: u32,
    pub day: u32,
}

const fn term(name: &'static str, glyphs: &'static str, month: u32, day: u32) -> SolarTerm {
    SolarTerm {
        name,
        glyphs,
        month,
        day,
    }
}

/// The year of the pillars starts at the beginning of spring.
pub const SPRING_BEGINS: SolarTerm = SOLAR_TERMS[0];

/// Ordered from the beginning of spring. Within a month the first entry is
/// the term that opens the pillar month.
pub const SOLAR_TERMS: [SolarTerm; 24] = [
    term("lichun", "立春", 2, 4),
    term("yushui", "雨水", 2, 19),
    term("jingzhe", "啓蟄", 3, 6),
    term("chunfen", "春分", 3, 21),
    term("qingming", "清明", 4, 5),
    term("guyu", "穀雨", 4, 20),
    term("lixia", "立夏", 5, 6),
    term("xiaoman", "小満", 5, 21),
    term("mangzhong", "芒種", 6, 6),
    term("xiazhi", "夏至", 6, 21),
    term("xiaoshu", "小暑", 7, 7),
    term("dashu", "大暑", 7, 23),
    term("liqiu", "立秋", 8, 8),
    term("chushu", "処暑", 8, 23),
    term("bailu", "白露", 9, 8),
    term("qiufen", "秋分", 9, 23),
    term("hanlu", "寒露", 10, 8),
    term("shuangjiang", "霜降", 10, 23),
    term("lidong", "立冬", 11, 7),
    term("xiaoxue", "小雪", 11, 22),
    term("daxue", "大雪", 12, 7),
    term("dongzhi", "冬至", 12, 21),
    term("xiaohan", "小寒", 1, 6),
    term("dahan", "大寒", 1, 20),
];

/// First solar term falling in the given civil month.
pub fn opening_term(month: u32) -> Option<&'static SolarTerm> {
    SOLAR_TERMS.iter().find(|t| t.month == month)
}

/// Whether a civil date precedes the beginning of spring of its year.
pub fn is_before_spring(month: u32, day: u32) -> bool {
    month < SPRING_BEGINS.month || (month == SPRING_BEGINS.month && day < SPRING_BEGINS.day)
}

/// Civil month (1..=12) the pillar month is counted from.
///
/// A date before its month's opening term belongs to the previous month;
/// January rolls back to December.
pub fn pillar_month(month: u32, day: u32) -> u32 {
    match opening_term(month) {
        Some(t) if day < t.day => {
            if month == 1 {
                12
            } else {
                month - 1
            }
        }
        _ => month,
    }
}
