//! Day and night windows derived from sunrise and sunset.
//!
//! Rahu Kalam, Gulika Kaal and Yamaganda are one eighth of the daytime each,
//! picked per weekday. Choghadiya divide day and night into eight periods
//! each. Abhijit is the muhurta around local midday; Brahma Muhurta is the
//! second-to-last muhurta before sunrise. Horas split the Vedic day into 24.

use serde::Serialize;

use crate::choghadiya::{Choghadiya, Nature, day_sequence, night_sequence};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::vaar::{HORA_COUNT, Vaar, hora_lord};

/// Rahu Kalam: 0-based eighth of the day, Sunday first.
pub const RAHU_KALAM_SEGMENT: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Gulika Kaal: 0-based eighth of the day, Sunday first.
pub const GULIKA_SEGMENT: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Yamaganda: 0-based eighth of the day, Sunday first.
pub const YAMAGANDA_SEGMENT: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// One muhurta is 48 minutes.
const MUHURTA_DAYS: f64 = 48.0 / 1440.0;

/// A named window in UT Julian Days, `start_jd < end_jd`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayInterval {
    pub label: &'static str,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl DayInterval {
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// i-th of n equal segments of [start, end).
fn segment(label: &'static str, start: f64, end: f64, n: u8, i: u8) -> DayInterval {
    let len = (end - start) / f64::from(n);
    DayInterval {
        label,
        start_jd: start + f64::from(i) * len,
        end_jd: start + f64::from(i + 1) * len,
    }
}

fn check_order(start: f64, end: f64, what: &'static str) -> Result<(), VedicError> {
    if start.is_finite() && end.is_finite() && end > start {
        Ok(())
    } else {
        Err(VedicError::InvalidInterval(what))
    }
}

/// One choghadiya period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChoghadiyaPeriod {
    pub choghadiya: Choghadiya,
    pub nature: Nature,
    pub interval: DayInterval,
}

/// Inauspicious eighths of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InauspiciousWindows {
    pub rahu_kalam: DayInterval,
    pub gulika: DayInterval,
    pub yamaganda: DayInterval,
}

/// Rahu Kalam, Gulika Kaal and Yamaganda for a day.
pub fn inauspicious_windows(
    sunrise_jd: f64,
    sunset_jd: f64,
    vaar: Vaar,
) -> Result<InauspiciousWindows, VedicError> {
    check_order(sunrise_jd, sunset_jd, "sunset must follow sunrise")?;
    let w = vaar.index() as usize;
    Ok(InauspiciousWindows {
        rahu_kalam: segment("Rahu Kalam", sunrise_jd, sunset_jd, 8, RAHU_KALAM_SEGMENT[w]),
        gulika: segment("Gulika Kaal", sunrise_jd, sunset_jd, 8, GULIKA_SEGMENT[w]),
        yamaganda: segment("Yamaganda", sunrise_jd, sunset_jd, 8, YAMAGANDA_SEGMENT[w]),
    })
}

/// Local midday ± one thirtieth of the day length.
pub fn abhijit_muhurta(sunrise_jd: f64, sunset_jd: f64) -> Result<DayInterval, VedicError> {
    check_order(sunrise_jd, sunset_jd, "sunset must follow sunrise")?;
    let midday = 0.5 * (sunrise_jd + sunset_jd);
    let half = (sunset_jd - sunrise_jd) / 30.0;
    Ok(DayInterval {
        label: "Abhijit Muhurta",
        start_jd: midday - half,
        end_jd: midday + half,
    })
}

/// [sunrise − 96 min, sunrise − 48 min].
pub fn brahma_muhurta(sunrise_jd: f64) -> DayInterval {
    DayInterval {
        label: "Brahma Muhurta",
        start_jd: sunrise_jd - 2.0 * MUHURTA_DAYS,
        end_jd: sunrise_jd - MUHURTA_DAYS,
    }
}

fn periods(
    names: [Choghadiya; 8],
    label: &'static str,
    start: f64,
    end: f64,
) -> [ChoghadiyaPeriod; 8] {
    std::array::from_fn(|i| {
        let c = names[i];
        ChoghadiyaPeriod {
            choghadiya: c,
            nature: c.nature(),
            interval: segment(label, start, end, 8, i as u8),
        }
    })
}

/// The eight daytime choghadiya.
pub fn day_choghadiya(
    sunrise_jd: f64,
    sunset_jd: f64,
    vaar: Vaar,
) -> Result<[ChoghadiyaPeriod; 8], VedicError> {
    check_order(sunrise_jd, sunset_jd, "sunset must follow sunrise")?;
    Ok(periods(day_sequence(vaar), "day choghadiya", sunrise_jd, sunset_jd))
}

/// The eight night choghadiya; `vaar` is the weekday whose sunset opens the night.
pub fn night_choghadiya(
    sunset_jd: f64,
    next_sunrise_jd: f64,
    vaar: Vaar,
) -> Result<[ChoghadiyaPeriod; 8], VedicError> {
    check_order(sunset_jd, next_sunrise_jd, "next sunrise must follow sunset")?;
    Ok(periods(
        night_sequence(vaar),
        "night choghadiya",
        sunset_jd,
        next_sunrise_jd,
    ))
}

/// One planetary hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hora {
    /// 0-based position in the Vedic day, 0..24.
    pub index: u8,
    pub lord: Graha,
    pub interval: DayInterval,
}

/// The 24 horas of a Vedic day: 12 equal day horas, then 12 equal night horas.
pub fn horas(
    sunrise_jd: f64,
    sunset_jd: f64,
    next_sunrise_jd: f64,
    vaar: Vaar,
) -> Result<Vec<Hora>, VedicError> {
    check_order(sunrise_jd, sunset_jd, "sunset must follow sunrise")?;
    check_order(sunset_jd, next_sunrise_jd, "next sunrise must follow sunset")?;
    let half = HORA_COUNT / 2;
    Ok((0..HORA_COUNT)
        .map(|i| {
            let interval = if i < half {
                segment("hora", sunrise_jd, sunset_jd, half, i)
            } else {
                segment("hora", sunset_jd, next_sunrise_jd, half, i - half)
            };
            Hora {
                index: i,
                lord: hora_lord(vaar, i),
                interval,
            }
        })
        .collect())
}
