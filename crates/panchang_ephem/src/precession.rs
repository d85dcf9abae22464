//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated westward drift of the equinox along the ecliptic
//! since J2000.0, which is exactly what a sidereal zodiac must subtract.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

/// Coefficients of p_A in arcseconds, powers T¹..T⁵.
const P_A_ARCSEC: [f64; 5] = [5028.796195, 1.1054348, 0.00007964, -0.000023857, -0.0000000383];

/// General precession in longitude, arcseconds, for `t` Julian centuries (TT) from J2000.0.
pub fn general_precession_arcsec(t: f64) -> f64 {
    P_A_ARCSEC.iter().rev().fold(0.0, |acc, &c| (acc + c) * t)
}

/// General precession in longitude, degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_epoch() {
        assert_eq!(general_precession_arcsec(0.0), 0.0);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let p = general_precession_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(1 yr) = {p}");
    }

    #[test]
    fn one_century() {
        let p = general_precession_arcsec(1.0);
        assert!((p - 5029.90).abs() < 0.01, "p_A(1 cy) = {p}");
        assert!(general_precession_arcsec(-1.0) < 0.0);
    }

    #[test]
    fn monotonic_over_supported_range() {
        let mut prev = general_precession_deg(-4.3);
        for i in -42..=100 {
            let p = general_precession_deg(i as f64 / 10.0);
            assert!(p > prev);
            prev = p;
        }
    }
}
