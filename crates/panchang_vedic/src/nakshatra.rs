//! Nakshatra (lunar mansion) lookup, 27-scheme.
//!
//! Each nakshatra spans 13°20′ of sidereal longitude and is split into four
//! padas of 3°20′. Lords follow the Vimshottari sequence starting at Ketu.

use serde::Serialize;

use panchang_ephem::normalize_360;

use crate::graha::Graha;
use crate::names::Named;

/// Span of one nakshatra in degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada in degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras, Ashwini through Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lords, repeating every nine nakshatras.
const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (0 = Ashwini).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }

    /// Vimshottari lord.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self as usize) % 9]
    }
}

impl Named for Nakshatra {
    const KIND: &'static str = "nakshatra";

    fn members() -> &'static [Self] {
        &ALL_NAKSHATRAS_27
    }

    fn display_name(self) -> &'static str {
        self.name()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Ashwini => &["Ashvini", "Aswini"],
            Self::Krittika => &["Kritika", "Karthigai"],
            Self::Mrigashira => &["Mrigasira", "Mrigashirsha"],
            Self::Ardra => &["Arudra", "Thiruvathirai"],
            Self::Pushya => &["Pushyami", "Pooyam"],
            Self::Ashlesha => &["Aslesha", "Ashlesa"],
            Self::PurvaPhalguni => &["Purvaphalguni", "Pubba", "Pooram"],
            Self::UttaraPhalguni => &["Uttaraphalguni", "Uttara", "Uthiram"],
            Self::Hasta => &["Hastha"],
            Self::Chitra => &["Chithra", "Chittirai"],
            Self::Swati => &["Svati", "Swathi"],
            Self::Vishakha => &["Visakha", "Vishaka"],
            Self::Anuradha => &["Anusham"],
            Self::Jyeshtha => &["Jyestha", "Jyeshta", "Kettai"],
            Self::Mula => &["Moola", "Moolam"],
            Self::PurvaAshadha => &["Purvashadha", "Pooradam"],
            Self::UttaraAshadha => &["Uttarashadha", "Uthiradam"],
            Self::Shravana => &["Sravana", "Thiruvonam"],
            Self::Dhanishtha => &["Dhanishta", "Shravishtha", "Avittam"],
            Self::Shatabhisha => &["Shatabhishak", "Satabhisha", "Sadayam"],
            Self::PurvaBhadrapada => &["Purvabhadra", "Poorattathi"],
            Self::UttaraBhadrapada => &["Uttarabhadra", "Uthirattathi"],
            Self::Revati => &["Revathi"],
            Self::Bharani | Self::Rohini | Self::Punarvasu | Self::Magha => &[],
        }
    }
}

/// Result of a 27-nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees within the nakshatra, [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(idx) * NAKSHATRA_SPAN_27;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS_27[idx as usize],
        nakshatra_index: idx,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ashwini_at_zero() {
        let n = nakshatra_from_longitude(0.0);
        assert_eq!(n.nakshatra, Nakshatra::Ashwini);
        assert_eq!(n.pada, 1);
    }

    #[test]
    fn revati_at_end() {
        let n = nakshatra_from_longitude(359.99);
        assert_eq!(n.nakshatra, Nakshatra::Revati);
        assert_eq!(n.pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(PADA_SPAN - 1e-9).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN + 1e-9).pada, 2);
        assert_eq!(nakshatra_from_longitude(NAKSHATRA_SPAN_27 + 1e-9).nakshatra, Nakshatra::Bharani);
    }

    #[test]
    fn magha_region() {
        // Magha: 120°00′ to 133°20′.
        let n = nakshatra_from_longitude(125.0);
        assert_eq!(n.nakshatra, Nakshatra::Magha);
        assert_eq!(n.nakshatra_index, 9);
        assert_eq!(n.pada, 2);
    }

    #[test]
    fn vimshottari_lords() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Rohini.lord(), Graha::Chandra);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }
}
