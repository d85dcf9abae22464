//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! The rise/set solver turns right ascension into hour angle with these.
//! All functions take UT Julian Dates.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Mean sidereal rotation of the Earth, degrees per solar day.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Earth Rotation Angle in degrees, [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD_UT − 2451545.0.
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split the day fraction off first so the large turn count does not eat precision.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (360.0 * turns.rem_euclid(1.0)).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵)″
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time in degrees from GMST and east longitude.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}
