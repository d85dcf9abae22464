//! Low-order analytic ephemeris for the Sun and the Moon.
//!
//! This crate provides:
//! - Apparent solar position (Meeus ch. 25) with equation of time
//! - Apparent lunar position (truncated ELP-2000/82, Meeus ch. 47)
//! - Low-order nutation and the obliquity of the ecliptic
//! - IAU 2006 general precession in longitude
//!
//! Every model is a total function of a TT Julian Day.

pub mod angle;
pub mod coords;
pub mod lunar;
pub mod nutation;
pub mod precession;
pub mod solar;

use serde::Serialize;

pub use angle::{normalize_360, normalize_pm180};
pub use coords::{
    AU_KM, EARTH_RADIUS_KM, EclipticPosition, EquatorialPosition, ecliptic_to_equatorial,
};
pub use lunar::{LunarPosition, lunar_position, moon_longitude_deg};
pub use nutation::{Nutation, mean_obliquity_deg, nutation, true_obliquity_deg};
pub use precession::{general_precession_arcsec, general_precession_deg};
pub use solar::{SolarPosition, solar_position, sun_longitude_deg};

/// Bodies the engine can position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }

    /// Apparent ecliptic position at a TT Julian Day.
    pub fn ecliptic(self, jd_tt: f64) -> EclipticPosition {
        match self {
            Self::Sun => solar_position(jd_tt).ecliptic,
            Self::Moon => lunar_position(jd_tt).ecliptic,
        }
    }

    /// Apparent equatorial position at a TT Julian Day.
    pub fn equatorial(self, jd_tt: f64) -> EquatorialPosition {
        match self {
            Self::Sun => solar_position(jd_tt).equatorial,
            Self::Moon => lunar_position(jd_tt).equatorial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_dispatch_matches_models() {
        let jd = 2_460_856.0;
        assert_eq!(Body::Sun.ecliptic(jd), solar_position(jd).ecliptic);
        assert_eq!(Body::Moon.equatorial(jd), lunar_position(jd).equatorial);
        assert_eq!(Body::Moon.name(), "Moon");
    }
}
