//! Element kinds and the solved elements themselves.

use serde::Serialize;

use panchang_vedic::{
    ALL_NAKSHATRAS_27, ALL_YOGAS, Graha, KARANA_SPAN, Karana, NAKSHATRA_SPAN_27, TITHI_SPAN,
    Tithi, YOGA_SPAN,
};

/// The four angle-driven panchang elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
}

pub const ALL_ELEMENT_KINDS: [ElementKind; 4] = [
    ElementKind::Tithi,
    ElementKind::Nakshatra,
    ElementKind::Yoga,
    ElementKind::Karana,
];

impl ElementKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
        }
    }

    /// Angular width of one element.
    pub const fn span_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SPAN,
            Self::Nakshatra => NAKSHATRA_SPAN_27,
            Self::Yoga => YOGA_SPAN,
            Self::Karana => KARANA_SPAN,
        }
    }

    /// Elements per full turn of the driving angle.
    pub const fn count(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => 60,
        }
    }

    /// Search step, about a quarter of an element's typical duration.
    pub const fn step_days(self) -> f64 {
        match self {
            Self::Nakshatra => 0.5,
            Self::Tithi | Self::Yoga | Self::Karana => 0.25,
        }
    }

    /// Mean rate of the driving angle, degrees per day.
    pub const fn mean_rate_deg_per_day(self) -> f64 {
        match self {
            // 360 / synodic month
            Self::Tithi | Self::Karana => 12.190_749,
            // 360 / sidereal month
            Self::Nakshatra => 13.176_358,
            // Moon + Sun, sidereal
            Self::Yoga => 14.161_967,
        }
    }

    /// Public index for a 0-based slot: tithi and karana count from 1,
    /// nakshatra and yoga from 0.
    pub const fn public_index(self, slot: u8) -> u8 {
        match self {
            Self::Tithi | Self::Karana => slot + 1,
            Self::Nakshatra | Self::Yoga => slot,
        }
    }

    /// Name and lord of the element in a 0-based slot.
    pub fn describe(self, slot: u8) -> (&'static str, Option<Graha>) {
        match self {
            Self::Tithi => match Tithi::from_number(slot + 1) {
                Some(t) => (t.name(), Some(t.lord())),
                None => ("?", None),
            },
            Self::Nakshatra => {
                let n = ALL_NAKSHATRAS_27[usize::from(slot) % 27];
                (n.name(), Some(n.lord()))
            }
            Self::Yoga => {
                let y = ALL_YOGAS[usize::from(slot) % 27];
                (y.name(), Some(y.lord()))
            }
            Self::Karana => match Karana::from_slot(slot + 1) {
                Some(k) => (k.name(), k.lord()),
                None => ("?", None),
            },
        }
    }
}

/// How far a boundary can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Bracketed and bisected to under a second.
    High,
    /// Extrapolated at the mean angular rate after the search found no bracket.
    Low,
}

/// One element with its boundaries, as UT Julian Days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangElement {
    pub kind: ElementKind,
    /// Tithi 1-30, nakshatra 0-26, yoga 0-26, karana 1-60.
    pub index: u8,
    pub name: &'static str,
    pub lord: Option<Graha>,
    pub start_jd: f64,
    pub end_jd: f64,
    /// Lower of the two boundary confidences.
    pub confidence: Confidence,
}

impl PanchangElement {
    /// 0-based slot within the cycle.
    pub fn slot(&self) -> u8 {
        match self.kind {
            ElementKind::Tithi | ElementKind::Karana => self.index - 1,
            ElementKind::Nakshatra | ElementKind::Yoga => self.index,
        }
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd_ut: f64) -> bool {
        jd_ut >= self.start_jd && jd_ut < self.end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_full_circle() {
        for k in ALL_ELEMENT_KINDS {
            assert!((k.span_deg() * f64::from(k.count()) - 360.0).abs() < 1e-9);
        }
    }

    #[test]
    fn describe_by_kind() {
        assert_eq!(ElementKind::Tithi.describe(4), ("Shukla Panchami", Some(Graha::Guru)));
        assert_eq!(ElementKind::Tithi.describe(29).1, Some(Graha::Rahu));
        assert_eq!(ElementKind::Nakshatra.describe(9), ("Magha", Some(Graha::Ketu)));
        assert_eq!(ElementKind::Yoga.describe(14).0, "Vajra");
        assert_eq!(ElementKind::Karana.describe(0), ("Kimstughna", None));
        assert_eq!(ElementKind::Karana.describe(8), ("Bava", Some(Graha::Surya)));
    }

    #[test]
    fn public_index_bases() {
        assert_eq!(ElementKind::Tithi.public_index(0), 1);
        assert_eq!(ElementKind::Karana.public_index(59), 60);
        assert_eq!(ElementKind::Nakshatra.public_index(26), 26);
    }
}
