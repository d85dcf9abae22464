//! Apparent position of the Sun.
//!
//! Meeus, Astronomical Algorithms ch. 25 (low accuracy): geometric mean
//! longitude and anomaly, a three-term equation of centre, aberration and
//! nutation in longitude. Accuracy about 0.01°.

use serde::Serialize;

use panchang_time::jd_to_centuries;

use crate::angle::{normalize_360, normalize_pm180};
use crate::coords::{AU_KM, EclipticPosition, EquatorialPosition, ecliptic_to_equatorial};
use crate::nutation::{mean_obliquity_deg, nutation};

/// Constant of aberration in arcseconds (for R in AU).
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Full solar state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    pub ecliptic: EclipticPosition,
    pub equatorial: EquatorialPosition,
    /// Sun–Earth distance in AU.
    pub radius_au: f64,
    /// Apparent minus mean solar time, in minutes.
    pub equation_of_time_min: f64,
}

/// Apparent solar position at a Julian Day in TT.
pub fn solar_position(jd_tt: f64) -> SolarPosition {
    let t = jd_to_centuries(jd_tt);

    let l0 = normalize_360(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let m_rad = m.to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + c;
    let true_anomaly = (m + c).to_radians();
    let radius_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    let nut = nutation(t);
    let aberration = -ABERRATION_ARCSEC / 3600.0 / radius_au;
    let longitude = normalize_360(true_longitude + aberration + nut.dpsi_deg);
    let obliquity = mean_obliquity_deg(t) + nut.deps_deg;

    let ecliptic = EclipticPosition {
        longitude_deg: longitude,
        latitude_deg: 0.0,
        distance_km: radius_au * AU_KM,
    };
    let equatorial = ecliptic_to_equatorial(&ecliptic, obliquity);

    // E = L0 − 0.0057183° − α + Δψ·cos ε, four minutes of time per degree.
    let eot_deg = normalize_pm180(
        l0 - 0.0057183 - equatorial.ra_deg + nut.dpsi_deg * obliquity.to_radians().cos(),
    );

    SolarPosition {
        ecliptic,
        equatorial,
        radius_au,
        equation_of_time_min: eot_deg * 4.0,
    }
}

/// Apparent tropical longitude of the Sun in degrees.
pub fn sun_longitude_deg(jd_tt: f64) -> f64 {
    solar_position(jd_tt).ecliptic.longitude_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 0h TD: λ = 199.90895°, α = 198.38083°, δ = −7.78507°, R = 0.99766 AU.
        let s = solar_position(2_448_908.5);
        assert!((s.ecliptic.longitude_deg - 199.90895).abs() < 0.01);
        assert!((s.equatorial.ra_deg - 198.38083).abs() < 0.01);
        assert!((s.equatorial.dec_deg + 7.78507).abs() < 0.01);
        assert!((s.radius_au - 0.99766).abs() < 1e-4);
    }

    #[test]
    fn meeus_example_28a_equation_of_time() {
        // 1992-10-13 0h TD: E = +13m 42.6s.
        let s = solar_position(2_448_908.5);
        assert!(
            (s.equation_of_time_min - 13.71).abs() < 0.05,
            "E = {} min",
            s.equation_of_time_min
        );
    }

    #[test]
    fn june_solstice_2025() {
        // 2025-06-21 02:42 UTC (+69 s ΔT).
        let jd_tt = 2_460_847.5 + (2.0 * 60.0 + 42.0) / 1440.0 + 69.0 / 86_400.0;
        let s = solar_position(jd_tt);
        assert!((s.ecliptic.longitude_deg - 90.0).abs() < 0.02);
        assert!((s.equatorial.dec_deg - 23.436).abs() < 0.01);
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let mut prev = sun_longitude_deg(2_460_000.5);
        for d in 1..=366 {
            let lon = sun_longitude_deg(2_460_000.5 + d as f64);
            let step = normalize_360(lon - prev);
            assert!((0.94..1.03).contains(&step), "daily motion {step}");
            prev = lon;
        }
    }
}
