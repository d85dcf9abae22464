//! ΔT = TT − UT estimates.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA Five Millennium Canon),
//! with the post-2005 segments refitted to observed values. Only the
//! segments covering the supported calendar range are kept.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Days in one Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// Evaluate `c[0] + c[1]·x + c[2]·x² + …` by Horner's rule.
fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// ΔT in seconds for a decimal year.
///
/// Outside 1500..=3000 the long-term parabola `−20 + 32·u²` is used.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let y = decimal_year;
    if y < 1500.0 {
        let u = (y - 1820.0) / 100.0;
        polynomial(&[-20.0, 0.0, 32.0], u)
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        polynomial(
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
            u,
        )
    } else if y < 1700.0 {
        polynomial(&[120.0, -0.9808, -0.01532, 1.0 / 7129.0], y - 1600.0)
    } else if y < 1800.0 {
        polynomial(
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
            y - 1700.0,
        )
    } else if y < 1860.0 {
        polynomial(
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
            y - 1800.0,
        )
    } else if y < 1900.0 {
        polynomial(
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
            y - 1860.0,
        )
    } else if y < 1920.0 {
        polynomial(&[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197], y - 1900.0)
    } else if y < 1941.0 {
        polynomial(&[21.20, 0.84493, -0.076100, 0.0020936], y - 1920.0)
    } else if y < 1961.0 {
        polynomial(&[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0], y - 1950.0)
    } else if y < 1986.0 {
        polynomial(&[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0], y - 1975.0)
    } else if y < 2005.0 {
        polynomial(
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
            y - 2000.0,
        )
    } else if y < 2015.0 {
        polynomial(&[64.69, 0.2930], y - 2005.0)
    } else if y <= 3000.0 {
        polynomial(&[67.62, 0.3645, 0.0039755], y - 2015.0)
    } else {
        let u = (y - 1820.0) / 100.0;
        polynomial(&[-20.0, 0.0, 32.0], u)
    }
}

/// Decimal year of a Julian Day.
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

/// ΔT in seconds at a UT Julian Day.
pub fn delta_t_at_jd(jd_ut: f64) -> f64 {
    delta_t_seconds(jd_to_decimal_year(jd_ut))
}

/// Convert a UT Julian Day to Terrestrial Time.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_at_jd(jd_ut) / SECONDS_PER_DAY
}
