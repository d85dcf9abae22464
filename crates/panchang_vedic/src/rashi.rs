//! Rashi (sidereal sign) lookup.
//!
//! Twelve equal signs of 30° starting at Mesha, measured on the sidereal
//! zodiac.

use serde::Serialize;

use panchang_ephem::normalize_360;

use crate::graha::{Graha, rashi_lord};
use crate::names::Named;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (0 = Mesha).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }
}

impl Named for Rashi {
    const KIND: &'static str = "rashi";

    fn members() -> &'static [Self] {
        &ALL_RASHIS
    }

    fn display_name(self) -> &'static str {
        self.name()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Mesha => &["Aries"],
            Self::Vrishabha => &["Taurus", "Vrishabh"],
            Self::Mithuna => &["Gemini", "Mithun"],
            Self::Karka => &["Cancer", "Kark", "Karkata"],
            Self::Simha => &["Leo", "Simh"],
            Self::Kanya => &["Virgo"],
            Self::Tula => &["Libra"],
            Self::Vrischika => &["Scorpio", "Vrishchika"],
            Self::Dhanu => &["Sagittarius", "Dhanus"],
            Self::Makara => &["Capricorn", "Makar"],
            Self::Kumbha => &["Aquarius", "Kumbh"],
            Self::Meena => &["Pisces", "Mina"],
        }
    }
}

/// Rashi containing a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiPosition {
    pub rashi: Rashi,
    /// 0-based index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Determine the rashi from a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    RashiPosition {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        degrees_in_rashi: lon - f64::from(idx) * RASHI_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.9999).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(-15.0).rashi, Rashi::Meena);
    }

    #[test]
    fn degrees_within_sign() {
        let r = rashi_from_longitude(75.5);
        assert_eq!(r.rashi, Rashi::Mithuna);
        assert_eq!(r.rashi_index, 2);
        assert!((r.degrees_in_rashi - 15.5).abs() < 1e-10);
    }

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }
}
