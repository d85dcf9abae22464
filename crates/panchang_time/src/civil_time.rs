//! Civil calendar instants with a fixed UTC offset.
//!
//! A [`CivilTime`] is what callers hand to the engine: a wall-clock reading at
//! some place. All astronomy runs on Julian Days (UT), so the conversion here
//! is the only place where the offset is applied.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{
    MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, calendar_to_jdn, days_in_month, jdn_to_calendar,
};

/// Largest accepted UTC offset magnitude, in minutes (±14 h).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// A civil date and wall-clock time with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Seconds, may carry a fraction. Must be in `[0, 60)`.
    pub second: f64,
    /// Offset of local time from UTC, east positive (IST = +330).
    pub utc_offset_minutes: i32,
}

impl CivilTime {
    /// Build and validate a civil time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_minutes: i32,
    ) -> Result<Self, TimeError> {
        let t = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes,
        };
        t.validate()?;
        Ok(t)
    }

    /// Midnight at the start of a civil date.
    pub fn date(year: i32, month: u32, day: u32, utc_offset_minutes: i32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0.0, utc_offset_minutes)
    }

    /// Check every field against the supported calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(TimeError::InvalidInstant(format!(
                "year {} outside supported range {MIN_YEAR}..={MAX_YEAR}",
                self.year
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidInstant(format!(
                "month {} not in 1..=12",
                self.month
            )));
        }
        let dim = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > dim {
            return Err(TimeError::InvalidInstant(format!(
                "day {} not in 1..={dim} for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidInstant(format!(
                "clock {:02}:{:02} out of range",
                self.hour, self.minute
            )));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidInstant(format!(
                "second {} not in [0, 60)",
                self.second
            )));
        }
        check_offset(self.utc_offset_minutes)
    }

    /// Julian Day (UT) of this instant.
    pub fn to_jd_ut(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let jdn = calendar_to_jdn(self.year, self.month, self.day);
        let secs = self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second
            - self.utc_offset_minutes as f64 * 60.0;
        Ok(jdn as f64 - 0.5 + secs / SECONDS_PER_DAY)
    }

    /// Civil time at `jd_ut` seen from a zone at `utc_offset_minutes`.
    ///
    /// Seconds are rounded to the nearest whole second; a rounded 60 carries
    /// into minute, hour, day, month and year.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_minutes: i32) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::InvalidInstant(format!(
                "Julian Day {jd_ut} is not finite"
            )));
        }
        check_offset(utc_offset_minutes)?;

        let z = jd_ut + utc_offset_minutes as f64 / 1440.0 + 0.5;
        let mut jdn = z.floor() as i64;
        let mut secs = ((z - jdn as f64) * SECONDS_PER_DAY).round() as i64;
        if secs >= 86_400 {
            jdn += 1;
            secs -= 86_400;
        }
        let (year, month, day) = jdn_to_calendar(jdn);
        let t = Self {
            year,
            month,
            day,
            hour: (secs / 3600) as u32,
            minute: ((secs % 3600) / 60) as u32,
            second: (secs % 60) as f64,
            utc_offset_minutes,
        };
        t.validate()?;
        Ok(t)
    }

    /// Julian Day (UT) of local midnight starting this civil date.
    pub fn midnight_jd_ut(&self) -> f64 {
        calendar_to_jdn(self.year, self.month, self.day) as f64
            - 0.5
            - self.utc_offset_minutes as f64 / 1440.0
    }

    /// Weekday of this civil date (0 = Sunday .. 6 = Saturday).
    pub fn weekday(&self) -> u8 {
        (calendar_to_jdn(self.year, self.month, self.day) + 1).rem_euclid(7) as u8
    }

    /// The same zone's civil date `days` later, at midnight.
    pub fn add_days(&self, days: i64) -> Result<Self, TimeError> {
        let jdn = calendar_to_jdn(self.year, self.month, self.day) + days;
        let (year, month, day) = jdn_to_calendar(jdn);
        Self::date(year, month, day, self.utc_offset_minutes)
    }

    /// Wall-clock part as `hh:mm:ss`.
    pub fn clock_string(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.hour,
            self.minute,
            self.second.floor() as u32
        )
    }
}

fn check_offset(minutes: i32) -> Result<(), TimeError> {
    if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(TimeError::InvalidInstant(format!(
            "UTC offset {minutes} min exceeds ±14 h"
        )));
    }
    Ok(())
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        if self.second.fract() == 0.0 {
            write!(f, "{:02}", self.second as u32)?;
        } else {
            write!(f, "{:06.3}", self.second)?;
        }
        if self.utc_offset_minutes == 0 {
            return write!(f, "Z");
        }
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let abs = self.utc_offset_minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD[Thh:mm[:ss[.fff]]][Z|±hh:mm]`.
    ///
    /// A space is accepted in place of `T`. A missing offset means UTC and a
    /// missing clock means midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || TimeError::Parse(format!("expected YYYY-MM-DD[Thh:mm[:ss]][Z|±hh:mm], got {s:?}"));

        let (date_part, rest) = match s.find(['T', ' ']) {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };

        let mut fields = date_part.splitn(3, '-');
        let year: i32 = parse_num(fields.next(), &bad)?;
        let month: u32 = parse_num(fields.next(), &bad)?;
        let day: u32 = parse_num(fields.next(), &bad)?;

        let (mut hour, mut minute, mut second, mut offset) = (0, 0, 0.0, 0);
        if let Some(rest) = rest {
            let (clock, zone) = split_zone(rest);
            let mut parts = clock.split(':');
            hour = parse_num(parts.next(), &bad)?;
            minute = parse_num(parts.next(), &bad)?;
            if let Some(sec) = parts.next() {
                second = sec.parse::<f64>().map_err(|_| bad())?;
            }
            if parts.next().is_some() {
                return Err(bad());
            }
            offset = parse_zone(zone).ok_or_else(bad)?;
        }

        Self::new(year, month, day, hour, minute, second, offset)
    }
}

fn parse_num<T: FromStr>(field: Option<&str>, bad: &impl Fn() -> TimeError) -> Result<T, TimeError> {
    field
        .filter(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|f| f.parse().ok())
        .ok_or_else(bad)
}

fn split_zone(s: &str) -> (&str, &str) {
    match s.find(['Z', 'z', '+', '-']) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

fn parse_zone(zone: &str) -> Option<i32> {
    match zone {
        "" | "Z" | "z" => Some(0),
        _ => {
            let sign = match zone.as_bytes().first()? {
                b'+' => 1,
                b'-' => -1,
                _ => return None,
            };
            let body = &zone[1..];
            let (h, m) = match body.split_once(':') {
                Some((h, m)) => (h, m),
                None if body.len() == 4 => body.split_at(2),
                None if body.len() == 2 => (body, "00"),
                None => return None,
            };
            let h: i32 = h.parse().ok()?;
            let m: i32 = m.parse().ok()?;
            if m >= 60 {
                return None;
            }
            Some(sign * (h * 60 + m))
        }
    }
}

impl Serialize for CivilTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IST: i32 = 330;

    #[test]
    fn ist_noon_to_jd() {
        let t = CivilTime::new(2025, 6, 29, 12, 0, 0.0, IST).unwrap();
        let jd = t.to_jd_ut().unwrap();
        // 06:30 UTC on 2025-06-29.
        assert!((jd - (2_460_855.5 + 6.5 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_to_the_second() {
        let t = CivilTime::new(2024, 2, 29, 23, 59, 59.0, -300).unwrap();
        let back = CivilTime::from_jd_ut(t.to_jd_ut().unwrap(), -300).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn rounding_carries_into_new_year() {
        let t = CivilTime::new(2024, 12, 31, 23, 59, 59.6, 0).unwrap();
        let back = CivilTime::from_jd_ut(t.to_jd_ut().unwrap(), 0).unwrap();
        assert_eq!((back.year, back.month, back.day), (2025, 1, 1));
        assert_eq!((back.hour, back.minute, back.second), (0, 0, 0.0));
    }

    #[test]
    fn offset_changes_local_date() {
        let jd = CivilTime::new(2025, 6, 20, 20, 0, 0.0, 0)
            .unwrap()
            .to_jd_ut()
            .unwrap();
        let ist = CivilTime::from_jd_ut(jd, IST).unwrap();
        assert_eq!((ist.day, ist.hour, ist.minute), (21, 1, 30));
    }

    #[test]
    fn rejects_invalid_fields() {
        assert!(CivilTime::new(2025, 2, 29, 0, 0, 0.0, 0).is_err());
        assert!(CivilTime::new(2025, 13, 1, 0, 0, 0.0, 0).is_err());
        assert!(CivilTime::new(2025, 1, 1, 24, 0, 0.0, 0).is_err());
        assert!(CivilTime::new(2025, 1, 1, 0, 0, 60.0, 0).is_err());
        assert!(CivilTime::new(2025, 1, 1, 0, 0, f64::NAN, 0).is_err());
        assert!(CivilTime::new(2025, 1, 1, 0, 0, 0.0, 15 * 60).is_err());
        assert!(CivilTime::new(1500, 1, 1, 0, 0, 0.0, 0).is_err());
        assert!(CivilTime::new(3000, 1, 1, 0, 0, 0.0, 0).is_err());
    }

    #[test]
    fn from_jd_rejects_out_of_range() {
        assert!(CivilTime::from_jd_ut(f64::NAN, 0).is_err());
        assert!(CivilTime::from_jd_ut(2_000_000.0, 0).is_err());
    }

    #[test]
    fn weekday_and_midnight() {
        let t = CivilTime::new(2025, 6, 29, 12, 0, 0.0, IST).unwrap();
        assert_eq!(t.weekday(), 0);
        let mid = t.midnight_jd_ut();
        let back = CivilTime::from_jd_ut(mid, IST).unwrap();
        assert_eq!((back.day, back.hour, back.minute), (29, 0, 0));
        assert_eq!(t.add_days(3).unwrap().weekday(), 3);
    }

    #[test]
    fn parse_forms() {
        let t: CivilTime = "2025-06-29T12:00+05:30".parse().unwrap();
        assert_eq!((t.hour, t.minute, t.utc_offset_minutes), (12, 0, IST));

        let t: CivilTime = "2025-06-29 06:07:08Z".parse().unwrap();
        assert_eq!((t.hour, t.minute, t.second, t.utc_offset_minutes), (6, 7, 8.0, 0));

        let t: CivilTime = "2025-01-05T10:00:30.5-0800".parse().unwrap();
        assert_eq!(t.second, 30.5);
        assert_eq!(t.utc_offset_minutes, -480);

        let t: CivilTime = "2025-06-29".parse().unwrap();
        assert_eq!((t.hour, t.minute), (0, 0));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("2025/06/29".parse::<CivilTime>(), Err(TimeError::Parse(_))));
        assert!(matches!("2025-06-29T12".parse::<CivilTime>(), Err(TimeError::Parse(_))));
        assert!(matches!("2025-06-29T12:00+5:75".parse::<CivilTime>(), Err(TimeError::Parse(_))));
        assert!(matches!(
            "2025-06-31T12:00".parse::<CivilTime>(),
            Err(TimeError::InvalidInstant(_))
        ));
    }

    #[test]
    fn display_roundtrip() {
        for s in ["2025-06-29T12:00:00+05:30", "2000-01-01T00:00:00Z", "1999-12-31T18:30:15-04:00"] {
            let t: CivilTime = s.parse().unwrap();
            assert_eq!(t.to_string(), s);
        }
        assert_eq!(
            CivilTime::new(2025, 1, 1, 0, 0, 5.25, 0).unwrap().to_string(),
            "2025-01-01T00:00:05.250Z"
        );
    }

    #[test]
    fn serializes_as_string() {
        let t = CivilTime::new(2025, 6, 29, 5, 45, 45.0, IST).unwrap();
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            "\"2025-06-29T05:45:45+05:30\""
        );
    }
}
