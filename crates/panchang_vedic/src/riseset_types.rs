//! Types for sunrise/sunset and moonrise/moonset calculations.

use std::f64::consts::PI;

use serde::Serialize;

use panchang_ephem::Body;

use crate::error::VedicError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Highest observer altitude accepted, in meters.
const MAX_ALTITUDE_M: f64 = 10_000.0;

/// Ratio of the Moon's topocentric correction to its horizontal parallax
/// at the horizon, net of its semidiameter.
const MOON_PARALLAX_FACTOR: f64 = 0.7275;

/// Geographic location on Earth's surface. Only constructible with valid values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_m: f64,
}

impl GeoLocation {
    /// Validated location: latitude in [-90, 90], longitude in [-180, 180]
    /// (east positive), altitude in [0, 10 000] m.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidCoordinate(format!(
                "latitude {latitude_deg} outside [-90, 90]"
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidCoordinate(format!(
                "longitude {longitude_deg} outside [-180, 180]"
            )));
        }
        if !altitude_m.is_finite() || !(0.0..=MAX_ALTITUDE_M).contains(&altitude_m) {
            return Err(VedicError::InvalidCoordinate(format!(
                "altitude {altitude_m} m outside [0, {MAX_ALTITUDE_M}]"
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// East positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Which horizon event to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiseSetKind {
    Rise,
    Set,
    /// Upper meridian transit.
    Transit,
}

impl RiseSetKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rise => "rise",
            Self::Set => "set",
            Self::Transit => "transit",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observer altitude, sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon in degrees.
    pub fn horizon_dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        }
    }

    /// Altitude of the Sun's centre at rise/set, in degrees (negative).
    pub fn sun_altitude_deg(&self, altitude_m: f64) -> f64 {
        -(self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 - self.horizon_dip_deg(altitude_m)
    }

    /// Altitude of the Moon's centre at rise/set, in degrees.
    pub fn moon_altitude_deg(&self, horizontal_parallax_deg: f64, altitude_m: f64) -> f64 {
        MOON_PARALLAX_FACTOR * horizontal_parallax_deg
            - self.refraction_arcmin / 60.0
            - self.horizon_dip_deg(altitude_m)
    }
}

/// Outcome of one rise/set solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Day (UT).
    Event { jd_ut: f64 },
    /// Body stays below the horizon for the whole day.
    NeverRises,
    /// Body stays above the horizon for the whole day.
    NeverSets,
    /// Body crosses the horizon, but not within the requested civil day.
    NoEventInDay,
}

impl RiseSetResult {
    pub fn jd_ut(&self) -> Option<f64> {
        match self {
            Self::Event { jd_ut } => Some(*jd_ut),
            _ => None,
        }
    }

    /// True when the body stays on one side of the horizon all day.
    pub const fn is_no_horizon_crossing(&self) -> bool {
        matches!(self, Self::NeverRises | Self::NeverSets)
    }

    /// Reason text for non-events.
    pub const fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Event { .. } => None,
            Self::NeverRises => Some("no horizon crossing: body never rises"),
            Self::NeverSets => Some("no horizon crossing: body never sets"),
            Self::NoEventInDay => Some("no event within the civil day"),
        }
    }
}

/// A solved rise, set or transit of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiseSetEvent {
    pub kind: RiseSetKind,
    pub body: Body,
    pub result: RiseSetResult,
}

impl RiseSetEvent {
    /// False for polar and out-of-day results.
    pub fn is_valid(&self) -> bool {
        matches!(self.result, RiseSetResult::Event { .. })
    }

    pub fn jd_ut(&self) -> Option<f64> {
        self.result.jd_ut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(13.08, 80.27, 0.0).is_ok());
        assert!(GeoLocation::new(90.0, -180.0, 0.0).is_ok());
        assert!(matches!(
            GeoLocation::new(91.0, 0.0, 0.0),
            Err(VedicError::InvalidCoordinate(_))
        ));
        assert!(GeoLocation::new(0.0, 180.5, 0.0).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(GeoLocation::new(0.0, 0.0, -5.0).is_err());
    }

    #[test]
    fn default_sun_altitude() {
        let c = RiseSetConfig::default();
        assert!((c.sun_altitude_deg(0.0) + 50.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn dip_lowers_horizon() {
        let c = RiseSetConfig::default();
        // 1000 m: dip ≈ 1.015°.
        let dip = c.horizon_dip_deg(1000.0);
        assert!((dip - 1.015).abs() < 0.01, "dip = {dip}");
        assert!(c.sun_altitude_deg(1000.0) < c.sun_altitude_deg(0.0));
        let flat = RiseSetConfig {
            altitude_correction: false,
            ..c
        };
        assert_eq!(flat.horizon_dip_deg(1000.0), 0.0);
    }

    #[test]
    fn moon_altitude_typical() {
        let c = RiseSetConfig::default();
        // π = 0.95° → h0 ≈ +0.125°.
        let h0 = c.moon_altitude_deg(0.95, 0.0);
        assert!((h0 - (0.7275 * 0.95 - 34.0 / 60.0)).abs() < 1e-12);
        assert!(h0 > 0.0);
    }

    #[test]
    fn result_accessors() {
        let e = RiseSetResult::Event { jd_ut: 2_460_000.25 };
        assert_eq!(e.jd_ut(), Some(2_460_000.25));
        assert!(e.reason().is_none());
        assert!(RiseSetResult::NeverSets.reason().is_some());
        assert!(!e.is_no_horizon_crossing());
    }

    #[test]
    fn polar_results_are_no_horizon_crossing() {
        assert!(RiseSetResult::NeverRises.is_no_horizon_crossing());
        assert!(RiseSetResult::NeverSets.is_no_horizon_crossing());
        assert!(!RiseSetResult::NoEventInDay.is_no_horizon_crossing());
    }
}
