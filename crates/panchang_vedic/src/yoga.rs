//! Nitya yoga: each 13°20′ of the sidereal Sun+Moon longitude sum.

use serde::Serialize;

use panchang_ephem::normalize_360;

use crate::graha::Graha;
use crate::names::Named;

/// Span of one yoga in degrees.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

/// The 27 nitya yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

const YOGA_LORDS: [Graha; 9] = [
    Graha::Shani,
    Graha::Buddh,
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }

    pub const fn lord(self) -> Graha {
        YOGA_LORDS[(self as usize) % 9]
    }

    /// Vishkambha, Atiganda, Shula, Ganda, Vyaghata, Vajra, Vyatipata,
    /// Parigha and Vaidhriti are held inauspicious.
    pub const fn is_inauspicious(self) -> bool {
        matches!(
            self,
            Self::Vishkambha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }
}

impl Named for Yoga {
    const KIND: &'static str = "yoga";

    fn members() -> &'static [Self] {
        &ALL_YOGAS
    }

    fn display_name(self) -> &'static str {
        self.name()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Vishkambha => &["Vishkumbha", "Viskambha"],
            Self::Ayushman => &["Ayushmana"],
            Self::Shobhana => &["Sobhana"],
            Self::Shula => &["Shoola", "Sula"],
            Self::Vyaghata => &["Vyaghat"],
            Self::Vyatipata => &["Vyatipat"],
            Self::Variyan => &["Variyana", "Vareeyan"],
            Self::Sadhya => &["Saadhya"],
            Self::Vaidhriti => &["Vaidhruti"],
            _ => &[],
        }
    }
}

/// Yoga containing a sidereal longitude sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based index (0 = Vishkambha).
    pub yoga_index: u8,
    pub degrees_in_yoga: f64,
}

/// Determine the yoga from the sidereal Sun + Moon longitude sum.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let s = normalize_360(sum_deg);
    let idx = ((s / YOGA_SPAN).floor() as u8).min(26);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
        degrees_in_yoga: s - f64::from(idx) * YOGA_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_boundaries() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(YOGA_SPAN * 14.5).yoga, Yoga::Vajra);
        assert_eq!(yoga_from_sum(359.999).yoga, Yoga::Vaidhriti);
        assert_eq!(yoga_from_sum(360.0 + 1.0).yoga, Yoga::Vishkambha);
    }

    #[test]
    fn lords_cycle_every_nine() {
        assert_eq!(Yoga::Vishkambha.lord(), Graha::Shani);
        assert_eq!(Yoga::Dhruva.lord(), Graha::Shani);
        assert_eq!(Yoga::Vaidhriti.lord(), Graha::Guru);
    }

    #[test]
    fn nine_inauspicious() {
        assert_eq!(ALL_YOGAS.iter().filter(|y| y.is_inauspicious()).count(), 9);
    }
}
