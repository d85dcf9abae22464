//! Vaar (weekday) and hora lordship.
//!
//! The Vedic day runs sunrise to sunrise. Each day is split into 24 horas
//! whose lords follow the Chaldean order, starting from the day's own lord.

use serde::Serialize;

use crate::graha::Graha;
use crate::names::Named;

/// Horas in one Vedic day.
pub const HORA_COUNT: u8 = 24;

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

/// Chaldean order, slowest to fastest.
pub const CHALDEAN_SEQUENCE: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0 = Sunday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Vaar; 7] {
        &ALL_VAARS
    }

    /// Weekday from a 0-based index (0 = Sunday), taken modulo 7.
    pub const fn from_weekday(weekday: u8) -> Self {
        ALL_VAARS[(weekday % 7) as usize]
    }

    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivara => Graha::Surya,
            Self::Somavara => Graha::Chandra,
            Self::Mangalavara => Graha::Mangal,
            Self::Budhavara => Graha::Buddh,
            Self::Guruvara => Graha::Guru,
            Self::Shukravara => Graha::Shukra,
            Self::Shanivara => Graha::Shani,
        }
    }

    pub const fn next(self) -> Self {
        Self::from_weekday(self as u8 + 1)
    }
}

impl Named for Vaar {
    const KIND: &'static str = "vaar";

    fn members() -> &'static [Self] {
        &ALL_VAARS
    }

    fn display_name(self) -> &'static str {
        self.name()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Ravivara => &["Sunday", "Ravivar", "Sun"],
            Self::Somavara => &["Monday", "Somvar", "Mon"],
            Self::Mangalavara => &["Tuesday", "Mangalvar", "Tue"],
            Self::Budhavara => &["Wednesday", "Budhvar", "Wed"],
            Self::Guruvara => &["Thursday", "Guruvar", "Brihaspativara", "Thu"],
            Self::Shukravara => &["Friday", "Shukravar", "Fri"],
            Self::Shanivara => &["Saturday", "Shanivar", "Sat"],
        }
    }
}

/// Lord of the n-th hora (0-based, 0..24) of a Vedic day.
///
/// The first hora belongs to the day lord; each following hora steps one
/// place along the Chaldean sequence.
pub fn hora_lord(vaar: Vaar, hora_index: u8) -> Graha {
    let start = CHALDEAN_SEQUENCE
        .iter()
        .position(|&g| g == vaar.lord())
        .unwrap_or(0);
    CHALDEAN_SEQUENCE[(start + hora_index as usize) % 7]
}
