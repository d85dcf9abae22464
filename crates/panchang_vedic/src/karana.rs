//! Karana: half of a tithi, 6° of Moon−Sun elongation.
//!
//! Sixty karanas fill a synodic month. The first half of Shukla Pratipada is
//! the fixed Kimstughna, the seven movable karanas then repeat eight times
//! (slots 2-57), and Shakuni, Chatushpada and Naga close the month.

use serde::Serialize;

use panchang_ephem::normalize_360;

use crate::graha::Graha;
use crate::names::Named;

/// Elongation span of one karana in degrees.
pub const KARANA_SPAN: f64 = 6.0;

/// Karana slots per synodic month.
pub const KARANAS_PER_MONTH: u8 = 60;

/// The 11 distinct karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Karana; 11] {
        &ALL_KARANAS
    }

    /// Shakuni, Chatushpada, Naga and Kimstughna occur once a month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    /// Lord of a movable karana (Surya through Shani in order); fixed karanas have none.
    pub const fn lord(self) -> Option<Graha> {
        match self {
            Self::Bava => Some(Graha::Surya),
            Self::Balava => Some(Graha::Chandra),
            Self::Kaulava => Some(Graha::Mangal),
            Self::Taitila => Some(Graha::Buddh),
            Self::Garaja => Some(Graha::Guru),
            Self::Vanija => Some(Graha::Shukra),
            Self::Vishti => Some(Graha::Shani),
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna => None,
        }
    }

    /// Karana occupying a 1-based monthly slot; `None` outside 1..=60.
    pub const fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Self::Kimstughna),
            2..=57 => Some(MOVABLE[((slot - 2) % 7) as usize]),
            58 => Some(Self::Shakuni),
            59 => Some(Self::Chatushpada),
            60 => Some(Self::Naga),
            _ => None,
        }
    }
}

impl Named for Karana {
    const KIND: &'static str = "karana";

    fn members() -> &'static [Self] {
        &ALL_KARANAS
    }

    fn display_name(self) -> &'static str {
        self.name()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Bava => &["Bav"],
            Self::Balava => &["Balav", "Baalava"],
            Self::Kaulava => &["Kaulav"],
            Self::Taitila => &["Taitil", "Taitula"],
            Self::Garaja => &["Gara", "Garija"],
            Self::Vanija => &["Vanij", "Banija"],
            Self::Vishti => &["Bhadra", "Visti"],
            Self::Shakuni => &["Sakuni"],
            Self::Chatushpada => &["Chatushpad", "Catuspada"],
            Self::Naga => &["Nag", "Nagava"],
            Self::Kimstughna => &["Kinstughna", "Kimstughana"],
        }
    }
}

/// Karana containing a Moon−Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 1-based slot within the month, 1..=60.
    pub slot: u8,
    pub degrees_in_karana: f64,
}

/// Determine the karana from the Moon−Sun elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let e = normalize_360(elongation_deg);
    let idx = ((e / KARANA_SPAN).floor() as u8).min(KARANAS_PER_MONTH - 1);
    let slot = idx + 1;
    let karana = match Karana::from_slot(slot) {
        Some(k) => k,
        None => Karana::Naga,
    };
    KaranaPosition {
        karana,
        slot,
        degrees_in_karana: e - f64::from(idx) * KARANA_SPAN,
    }
}
