//! Tithi (lunar day) and paksha.
//!
//! A tithi is each 12° of Moon−Sun elongation. Tithis 1-15 form Shukla
//! paksha (waxing, ending at Purnima); 16-30 form Krishna paksha (waning,
//! ending at Amavasya).

use serde::Serialize;

use panchang_ephem::normalize_360;

use crate::graha::Graha;
use crate::names::Named;

/// Elongation span of one tithi in degrees.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing.
    Shukla,
    /// Waning.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day-within-paksha names, 1..=14.
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Tithi lords cycle through the seven weekday grahas and Rahu.
const TITHI_LORD_CYCLE: [Graha; 8] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
];

impl Tithi {
    /// Display name, e.g. "Shukla Panchami", "Purnima".
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShuklaPratipada => "Shukla Pratipada",
            Self::ShuklaDwitiya => "Shukla Dwitiya",
            Self::ShuklaTritiya => "Shukla Tritiya",
            Self::ShuklaChaturthi => "Shukla Chaturthi",
            Self::ShuklaPanchami => "Shukla Panchami",
            Self::ShuklaShashthi => "Shukla Shashthi",
            Self::ShuklaSaptami => "Shukla Saptami",
            Self::ShuklaAshtami => "Shukla Ashtami",
            Self::ShuklaNavami => "Shukla Navami",
            Self::ShuklaDashami => "Shukla Dashami",
            Self::ShuklaEkadashi => "Shukla Ekadashi",
            Self::ShuklaDwadashi => "Shukla Dwadashi",
            Self::ShuklaTrayodashi => "Shukla Trayodashi",
            Self::ShuklaChaturdashi => "Shukla Chaturdashi",
            Self::Purnima => "Purnima",
            Self::KrishnaPratipada => "Krishna Pratipada",
            Self::KrishnaDwitiya => "Krishna Dwitiya",
            Self::KrishnaTritiya => "Krishna Tritiya",
            Self::KrishnaChaturthi => "Krishna Chaturthi",
            Self::KrishnaPanchami => "Krishna Panchami",
            Self::KrishnaShashthi => "Krishna Shashthi",
            Self::KrishnaSaptami => "Krishna Saptami",
            Self::KrishnaAshtami => "Krishna Ashtami",
            Self::KrishnaNavami => "Krishna Navami",
            Self::KrishnaDashami => "Krishna Dashami",
            Self::KrishnaEkadashi => "Krishna Ekadashi",
            Self::KrishnaDwadashi => "Krishna Dwadashi",
            Self::KrishnaTrayodashi => "Krishna Trayodashi",
            Self::KrishnaChaturdashi => "Krishna Chaturdashi",
            Self::Amavasya => "Amavasya",
        }
    }

    /// 1-based number within the month (1 = Shukla Pratipada, 30 = Amavasya).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }

    /// Tithi from its 1-based number; `None` outside 1..=30.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 30 {
            Some(ALL_TITHIS[(n - 1) as usize])
        } else {
            None
        }
    }

    pub const fn paksha(self) -> Paksha {
        if (self as u8) < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the paksha, 1..=15.
    pub const fn day_in_paksha(self) -> u8 {
        self as u8 % 15 + 1
    }

    /// Name without the paksha prefix ("Ekadashi", "Purnima").
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_DAY_NAMES[(self as usize) % 15],
        }
    }

    /// Presiding graha. Amavasya is always Rahu.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Amavasya => Graha::Rahu,
            _ => TITHI_LORD_CYCLE[(self as usize) % 8],
        }
    }
}

impl Named for Tithi {
    const KIND: &'static str = "tithi";

    fn members() -> &'static [Self] {
        &ALL_TITHIS
    }

    fn display_name(self) -> &'static str {
        self.name()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ShuklaPratipada => &["Shukla Prathama", "Shukla Padyami"],
            Self::ShuklaDwitiya => &["Shukla Dvitiya"],
            Self::ShuklaShashthi => &["Shukla Shashti", "Shukla Sashti"],
            Self::ShuklaChaturdashi => &["Shukla Chaturdasi"],
            Self::Purnima => &["Poornima", "Pournami", "Purnamasi", "Full Moon"],
            Self::KrishnaPratipada => &["Krishna Prathama", "Krishna Padyami"],
            Self::KrishnaDwitiya => &["Krishna Dvitiya"],
            Self::KrishnaShashthi => &["Krishna Shashti", "Krishna Sashti"],
            Self::KrishnaChaturdashi => &["Krishna Chaturdasi"],
            Self::Amavasya => &["Amavasai", "Amavasi", "New Moon"],
            _ => &[],
        }
    }
}

/// Tithi containing a Moon−Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// 1-based day within the paksha.
    pub tithi_in_paksha: u8,
    /// Degrees of elongation past the tithi start, [0, 12).
    pub degrees_in_tithi: f64,
}

/// Determine the tithi from the Moon−Sun elongation (degrees, any range).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let e = normalize_360(elongation_deg);
    let idx = ((e / TITHI_SPAN).floor() as u8).min(29);
    let tithi = ALL_TITHIS[idx as usize];
    TithiPosition {
        tithi,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.day_in_paksha(),
        degrees_in_tithi: e - f64::from(idx) * TITHI_SPAN,
    }
}
