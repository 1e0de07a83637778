use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000: f64 = 2_451_545.0;

/// Convert a civil date and time to a continuous Julian day.
///
/// Uses the Gregorian day-number algorithm; seconds are ignored.
pub fn datetime_to_julian_day(dt: NaiveDateTime) -> f64 {
    let year = i64::from(dt.year());
    let month = i64::from(dt.month());
    let day = i64::from(dt.day());

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    jdn as f64 + (f64::from(dt.hour()) - 12.0) / 24.0 + f64::from(dt.minute()) / 1440.0
}

pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000
}
