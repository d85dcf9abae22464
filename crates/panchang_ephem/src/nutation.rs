//! Nutation and obliquity of the ecliptic.
//!
//! Four-term nutation series (Meeus, Astronomical Algorithms ch. 22), good to
//! about 0.5″ in Δψ and 0.1″ in Δε. Mean obliquity from Laskar's cubic
//! (IAU 1980 form).

use serde::Serialize;

/// Nutation in longitude and obliquity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub dpsi_deg: f64,
    /// Δε, nutation in obliquity.
    pub deps_deg: f64,
}

/// Low-order nutation for `t` Julian centuries (TT) from J2000.0.
pub fn nutation(t: f64) -> Nutation {
    // Ω: Moon's ascending node, L: Sun's mean longitude, L′: Moon's mean longitude.
    let om = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * om).cos();

    Nutation {
        dpsi_deg: dpsi / 3600.0,
        deps_deg: deps / 3600.0,
    }
}

/// Mean obliquity of the ecliptic in degrees.
///
/// ε₀ = 23°26′21.448″ − 46.8150″T − 0.00059″T² + 0.001813″T³
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity (mean obliquity plus Δε) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).deps_deg
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_time::jd_to_centuries;

    #[test]
    fn meeus_example_22a() {
        // 1987-04-10 0h TD: Δψ = −3.788″, Δε = +9.443″, ε₀ = 23°26′27.407″.
        let t = jd_to_centuries(2_446_895.5);
        let n = nutation(t);
        assert!((n.dpsi_deg * 3600.0 + 3.788).abs() < 0.5, "Δψ = {}″", n.dpsi_deg * 3600.0);
        assert!((n.deps_deg * 3600.0 - 9.443).abs() < 0.1, "Δε = {}″", n.deps_deg * 3600.0);
        let eps0 = mean_obliquity_deg(t);
        assert!((eps0 - 23.440_946).abs() < 1e-5, "ε₀ = {eps0}");
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn nutation_bounded() {
        for i in 0..200 {
            let n = nutation(-4.0 + i as f64 * 0.05);
            assert!(n.dpsi_deg.abs() * 3600.0 < 19.5);
            assert!(n.deps_deg.abs() * 3600.0 < 10.5);
        }
    }
}
