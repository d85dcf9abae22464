//! Vedic calendar primitives for the panchang engine.
//!
//! This crate provides:
//! - Ayanamsha systems and tropical → sidereal conversion
//! - Sunrise, sunset, moonrise, moonset and transits for a civil day
//! - Canonical enumerations (graha, rashi, nakshatra, tithi, yoga, karana,
//!   vaar, choghadiya) with name resolution
//! - Rahu Kalam, Gulika, Yamaganda, Abhijit, Brahma Muhurta, choghadiya and hora
//! - [`Field`], the per-value status carried through a report

pub mod ayanamsha;
pub mod choghadiya;
pub mod error;
pub mod field;
pub mod graha;
pub mod karana;
pub mod muhurta;
pub mod nakshatra;
pub mod names;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{
    ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg, sidereal_longitude,
};
pub use choghadiya::{ALL_CHOGHADIYAS, Choghadiya, Nature, day_sequence, night_sequence};
pub use error::VedicError;
pub use field::Field;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use karana::{
    ALL_KARANAS, KARANA_SPAN, KARANAS_PER_MONTH, Karana, KaranaPosition, karana_from_elongation,
};
pub use muhurta::{
    ChoghadiyaPeriod, DayInterval, GULIKA_SEGMENT, Hora, InauspiciousWindows, RAHU_KALAM_SEGMENT,
    YAMAGANDA_SEGMENT, abhijit_muhurta, brahma_muhurta, day_choghadiya, horas,
    inauspicious_windows, night_choghadiya,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraPosition, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use names::{Named, resolve_name};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiPosition, rashi_from_longitude};
pub use riseset::{
    approximate_local_noon_jd, compute_rise_set, compute_transit, rise_set_for_day,
    rise_set_for_day_with_budget,
};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetKind, RiseSetResult};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SPAN, Tithi, TithiPosition, tithi_from_elongation};
pub use vaar::{ALL_VAARS, CHALDEAN_SEQUENCE, HORA_COUNT, Vaar, hora_lord};
pub use yoga::{ALL_YOGAS, YOGA_SPAN, Yoga, YogaPosition, yoga_from_sum};
