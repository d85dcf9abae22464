//! Scalar angles that drive the panchang elements.
//!
//! All functions take a UT Julian Day and convert to TT internally, so
//! boundary searches yield UT instants directly.

use panchang_ephem::{moon_longitude_deg, normalize_360, sun_longitude_deg};
use panchang_time::jd_ut_to_tt;
use panchang_vedic::sidereal_longitude;

use crate::config::PanchangConfig;

/// Moon − Sun elongation in [0, 360). The ayanamsha cancels in the difference.
pub fn elongation_deg(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    normalize_360(moon_longitude_deg(jd_tt) - sun_longitude_deg(jd_tt))
}

/// Sidereal longitude of the Sun.
pub fn sun_sidereal_deg(jd_ut: f64, config: &PanchangConfig) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    sidereal_longitude(
        sun_longitude_deg(jd_tt),
        jd_tt,
        config.ayanamsha,
        config.use_nutation,
    )
}

/// Sidereal longitude of the Moon.
pub fn moon_sidereal_deg(jd_ut: f64, config: &PanchangConfig) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    sidereal_longitude(
        moon_longitude_deg(jd_tt),
        jd_tt,
        config.ayanamsha,
        config.use_nutation,
    )
}

/// Sidereal Sun + Moon in [0, 360). The ayanamsha does not cancel here.
pub fn sidereal_sum_deg(jd_ut: f64, config: &PanchangConfig) -> f64 {
    normalize_360(sun_sidereal_deg(jd_ut, config) + moon_sidereal_deg(jd_ut, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_vedic::AyanamshaSystem;

    #[test]
    fn elongation_independent_of_ayanamsha() {
        let jd = 2_460_856.0;
        let a = PanchangConfig::default();
        let b = PanchangConfig::new(AyanamshaSystem::FaganBradley, false);
        let diff = normalize_360(moon_sidereal_deg(jd, &a) - sun_sidereal_deg(jd, &a));
        assert!((diff - elongation_deg(jd)).abs() < 1e-9);
        let diff_b = normalize_360(moon_sidereal_deg(jd, &b) - sun_sidereal_deg(jd, &b));
        assert!((diff_b - elongation_deg(jd)).abs() < 1e-9);
    }

    #[test]
    fn sum_shifts_by_twice_the_ayanamsha_difference() {
        let jd = 2_460_856.0;
        let lahiri = PanchangConfig::new(AyanamshaSystem::Lahiri, false);
        let raman = PanchangConfig::new(AyanamshaSystem::Raman, false);
        let shift = normalize_360(sidereal_sum_deg(jd, &raman) - sidereal_sum_deg(jd, &lahiri));
        let expected = 2.0 * (23.853 - 22.370);
        assert!((shift - expected).abs() < 1e-6, "shift {shift}");
    }
}
