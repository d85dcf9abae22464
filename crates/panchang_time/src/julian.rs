//! Gregorian calendar ↔ Julian Day conversion.
//!
//! Day numbers use the Fliegel–Van Flandern integer algorithm (Communications
//! of the ACM 11, 1968), valid for the proleptic Gregorian calendar. Julian
//! Days are day counts from -4712-01-01 12:00, so a civil midnight sits at a
//! `.5` fraction.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First supported year (first full year of the Gregorian calendar).
pub const MIN_YEAR: i32 = 1583;

/// Last supported year.
pub const MAX_YEAR: i32 = 2999;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-based), or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number (the integer day count at noon) of a Gregorian date.
///
/// Fliegel–Van Flandern. Correct for all dates with a positive JDN, which
/// covers every supported year.
pub fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (14 - m) / 12;
    let yy = y + 4800 - a;
    let mm = m + 12 * a - 3;
    d + (153 * mm + 2) / 5 + 365 * yy + yy / 4 - yy / 100 + yy / 400 - 32045
}

/// Inverse of [`calendar_to_jdn`]: Gregorian `(year, month, day)`.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let mut l = jdn + 68_569;
    let n = 4 * l / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = 4000 * (l + 1) / 1_461_001;
    l = l - 1461 * i / 4 + 31;
    let j = 80 * l / 2447;
    let day = l - 2447 * j / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u32, day as u32)
}

/// Julian Date from a calendar date with fractional day.
///
/// `day_frac` of `1.5` is noon on the first of the month.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor();
    let jdn = calendar_to_jdn(year, month, day as u32);
    jdn as f64 - 0.5 + (day_frac - day)
}

/// Calendar date with fractional day from a Julian Date.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = jd + 0.5;
    let jdn = z.floor();
    let (year, month, day) = jdn_to_calendar(jdn as i64);
    (year, month, day as f64 + (z - jdn))
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Weekday of the civil date containing `jd` (0 = Sunday .. 6 = Saturday).
///
/// `jd` must already be shifted to local time if a local weekday is wanted.
pub fn weekday_from_jd(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn jdn_known_dates() {
        assert_eq!(calendar_to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(calendar_to_jdn(1858, 11, 17), 2_400_001);
        assert_eq!(calendar_to_jdn(1583, 1, 1), 2_299_239);
        assert_eq!(calendar_to_jdn(2025, 6, 29), 2_460_856);
    }

    #[test]
    fn jdn_roundtrip_across_boundaries() {
        for &(y, m, d) in &[
            (1999, 12, 31),
            (2000, 2, 29),
            (2000, 3, 1),
            (2024, 12, 31),
            (2100, 2, 28),
            (2100, 3, 1),
            (1600, 2, 29),
        ] {
            let jdn = calendar_to_jdn(y, m, d);
            assert_eq!(jdn_to_calendar(jdn), (y, m, d));
            assert_eq!(jdn_to_calendar(jdn + 1).2 == 1, d == days_in_month(y, m));
        }
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn jd_calendar_fraction() {
        let jd = calendar_to_jd(2024, 3, 20.75);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 3));
        assert!((d - 20.75).abs() < 1e-9);
    }

    #[test]
    fn weekday_known() {
        // 2000-01-01 was a Saturday, 2025-06-29 a Sunday.
        assert_eq!(weekday_from_jd(calendar_to_jd(2000, 1, 1.0)), 6);
        assert_eq!(weekday_from_jd(calendar_to_jd(2025, 6, 29.5)), 0);
        assert_eq!(weekday_from_jd(calendar_to_jd(2025, 6, 25.99)), 3);
    }

    #[test]
    fn centuries() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}
