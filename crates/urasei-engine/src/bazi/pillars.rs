//! Year, month, day and hour pillars from a civil date and hour.

use crate::bazi::types::Pillar;
use crate::calendar::{is_before_spring, pillar_month, Branch, Stem};
use crate::error::{EngineError, Result};
use chrono::{Datelike, NaiveDate};

/// A year whose pillar is 甲子 (stem 0, branch 0).
pub const REFERENCE_YEAR: i32 = 1984;

/// Day number (counted from 0001-01-01 = 1) of 1900-01-01, taken as a 甲子 day.
pub const REFERENCE_DAY_NUMBER: i32 = 693_596;

/// Month stems, one row per year-stem group (甲己, 乙庚, 丙辛, 丁壬, 戊癸),
/// one column per pillar month starting at January.
const MONTH_STEM_TABLE: [[usize; 12]; 5] = [
    [2, 4, 6, 8, 0, 2, 4, 6, 8, 0, 2, 4],
    [4, 6, 8, 0, 2, 4, 6, 8, 0, 2, 4, 6],
    [6, 8, 0, 2, 4, 6, 8, 0, 2, 4, 6, 8],
    [8, 0, 2, 4, 6, 8, 0, 2, 4, 6, 8, 0],
    [0, 2, 4, 6, 8, 0, 2, 4, 6, 8, 0, 2],
];

/// Hour stems, one row per day-stem group, one column per hour branch.
const HOUR_STEM_TABLE: [[usize; 12]; 5] = [
    [0, 2, 4, 6, 8, 0, 2, 4, 6, 8, 0, 2],
    [2, 4, 6, 8, 0, 2, 4, 6, 8, 0, 2, 4],
    [4, 6, 8, 0, 2, 4, 6, 8, 0, 2, 4, 6],
    [6, 8, 0, 2, 4, 6, 8, 0, 2, 4, 6, 8],
    [8, 0, 2, 4, 6, 8, 0, 2, 4, 6, 8, 0],
];

/// Pillar for a signed offset into the sexagenary cycle.
fn cycle_pillar(offset: i64) -> Pillar {
    let stem = offset.rem_euclid(10) as usize;
    let branch = offset.rem_euclid(12) as usize;
    Pillar::new(Stem::from_index(stem), Branch::from_index(branch))
}

/// Year pillar. Dates before the beginning of spring belong to the previous year.
pub fn year_pillar(date: NaiveDate) -> Pillar {
    let mut year = date.year();
    if is_before_spring(date.month(), date.day()) {
        year -= 1;
    }
    cycle_pillar(i64::from(year - REFERENCE_YEAR).rem_euclid(60))
}

/// Month pillar, keyed off the year stem of the same date.
pub fn month_pillar(date: NaiveDate, year_stem: Stem) -> Pillar {
    let month = pillar_month(date.month(), date.day());
    let month_index = (month - 1) as usize;
    let stem = MONTH_STEM_TABLE[year_stem.index() % 5][month_index];
    // Month 1 lands on 寅 (index 2).
    let branch = (month as usize + 1) % 12;
    Pillar::new(Stem::from_index(stem), Branch::from_index(branch))
}

/// Days between `date` and the reference 甲子 day. Negative before 1900.
pub fn days_from_reference(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(REFERENCE_DAY_NUMBER)
}

/// Day pillar. Depends only on the day count from the reference day.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    cycle_pillar(days_from_reference(date))
}

/// Branch index of a clock hour; 23:00-00:59 is 子 (0).
pub fn hour_branch_index(hour: u32) -> Result<usize> {
    if hour > 23 {
        return Err(EngineError::InvalidHour { hour });
    }
    Ok(((hour as usize + 1) / 2) % 12)
}

/// Hour pillar, keyed off the day stem.
pub fn hour_pillar(hour: u32, day_stem: Stem) -> Result<Pillar> {
    let branch = hour_branch_index(hour)?;
    let stem = HOUR_STEM_TABLE[day_stem.index() % 5][branch];
    Ok(Pillar::new(Stem::from_index(stem), Branch::from_index(branch)))
}

/// All four pillars: year, month, day, hour.
pub fn four_pillars(date: NaiveDate, hour: u32) -> Result<[Pillar; 4]> {
    let year = year_pillar(date);
    let month = month_pillar(date, year.stem);
    let day = day_pillar(date);
    let hour = hour_pillar(hour, day.stem)?;
    Ok([year, month, day, hour])
}
