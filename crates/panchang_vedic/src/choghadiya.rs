//! Choghadiya: eighth-of-day periods named after seven natures.

use serde::Serialize;

use crate::graha::Graha;
use crate::names::Named;
use crate::vaar::Vaar;

/// The seven choghadiya names, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Choghadiya {
    Udveg,
    Char,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

pub const ALL_CHOGHADIYAS: [Choghadiya; 7] = [
    Choghadiya::Udveg,
    Choghadiya::Char,
    Choghadiya::Labh,
    Choghadiya::Amrit,
    Choghadiya::Kaal,
    Choghadiya::Shubh,
    Choghadiya::Rog,
];

/// First day period per weekday, Sunday first.
const DAY_START: [Choghadiya; 7] = [
    Choghadiya::Udveg,
    Choghadiya::Amrit,
    Choghadiya::Rog,
    Choghadiya::Labh,
    Choghadiya::Shubh,
    Choghadiya::Char,
    Choghadiya::Kaal,
];

/// First night period per weekday, Sunday first.
const NIGHT_START: [Choghadiya; 7] = [
    Choghadiya::Shubh,
    Choghadiya::Char,
    Choghadiya::Kaal,
    Choghadiya::Udveg,
    Choghadiya::Amrit,
    Choghadiya::Rog,
    Choghadiya::Labh,
];

/// Places advanced per night period.
const NIGHT_STEP: usize = 5;

/// General quality of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nature {
    Auspicious,
    Neutral,
    Inauspicious,
}

impl Nature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "auspicious",
            Self::Neutral => "neutral",
            Self::Inauspicious => "inauspicious",
        }
    }
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Char => "Char",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Choghadiya; 7] {
        &ALL_CHOGHADIYAS
    }

    pub const fn nature(self) -> Nature {
        match self {
            Self::Amrit | Self::Shubh | Self::Labh => Nature::Auspicious,
            Self::Char => Nature::Neutral,
            Self::Udveg | Self::Kaal | Self::Rog => Nature::Inauspicious,
        }
    }

    pub const fn lord(self) -> Graha {
        match self {
            Self::Udveg => Graha::Surya,
            Self::Char => Graha::Shukra,
            Self::Labh => Graha::Buddh,
            Self::Amrit => Graha::Chandra,
            Self::Kaal => Graha::Shani,
            Self::Shubh => Graha::Guru,
            Self::Rog => Graha::Mangal,
        }
    }
}

impl Named for Choghadiya {
    const KIND: &'static str = "choghadiya";

    fn members() -> &'static [Self] {
        &ALL_CHOGHADIYAS
    }

    fn display_name(self) -> &'static str {
        self.name()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Udveg => &["Udvega"],
            Self::Char => &["Chal", "Chara"],
            Self::Labh => &["Labha"],
            Self::Amrit => &["Amrita", "Amrut"],
            Self::Kaal => &["Kala"],
            Self::Shubh => &["Shubha"],
            Self::Rog => &["Roga"],
        }
    }
}

/// The eight day periods (sunrise → sunset) of a weekday, in order.
pub fn day_sequence(vaar: Vaar) -> [Choghadiya; 8] {
    let start = DAY_START[vaar.index() as usize].index() as usize;
    std::array::from_fn(|i| ALL_CHOGHADIYAS[(start + i) % 7])
}

/// The eight night periods (sunset → next sunrise) of a weekday, in order.
pub fn night_sequence(vaar: Vaar) -> [Choghadiya; 8] {
    let start = NIGHT_START[vaar.index() as usize].index() as usize;
    std::array::from_fn(|i| ALL_CHOGHADIYAS[(start + i * NIGHT_STEP) % 7])
}
