//! Apparent geocentric position of the Moon.
//!
//! Truncated ELP-2000/82 series as tabulated by Meeus (Astronomical
//! Algorithms ch. 47): 60 longitude/distance terms, 30 latitude terms, the
//! Venus, Jupiter and Earth-flattening additive terms, and the eccentricity
//! factor E on every term involving the Sun's anomaly. Accuracy about 10″ in
//! longitude and 4″ in latitude.

use serde::Serialize;

use panchang_time::jd_to_centuries;

use crate::angle::normalize_360;
use crate::coords::{EARTH_RADIUS_KM, EclipticPosition, EquatorialPosition, ecliptic_to_equatorial};
use crate::nutation::{mean_obliquity_deg, nutation};

/// Periodic terms for longitude (Σl, 1e-6°) and distance (Σr, 1e-3 km).
///
/// Each row: `[D, M, M′, F, Σl, Σr]`. Meeus, Astronomical Algorithms, Table 47.A.
#[rustfmt::skip]
static LONGITUDE_DISTANCE_TERMS: [[i32; 6]; 60] = [
    //  D   M   M′   F        Σl         Σr
    [  0,  0,  1,  0,    6288774,  -20905355],
    [  2,  0, -1,  0,    1274027,   -3699111],
    [  2,  0,  0,  0,     658314,   -2955968],
    [  0,  0,  2,  0,     213618,    -569925],
    [  0,  1,  0,  0,    -185116,      48888],
    [  0,  0,  0,  2,    -114332,      -3149],
    [  2,  0, -2,  0,      58793,     246158],
    [  2, -1, -1,  0,      57066,    -152138],
    [  2,  0,  1,  0,      53322,    -170733],
    [  2, -1,  0,  0,      45758,    -204586],
    [  0,  1, -1,  0,     -40923,    -129620],
    [  1,  0,  0,  0,     -34720,     108743],
    [  0,  1,  1,  0,     -30383,     104755],
    [  2,  0,  0, -2,      15327,      10321],
    [  0,  0,  1,  2,     -12528,          0],
    [  0,  0,  1, -2,      10980,      79661],
    [  4,  0, -1,  0,      10675,     -34782],
    [  0,  0,  3,  0,      10034,     -23210],
    [  4,  0, -2,  0,       8548,     -21636],
    [  2,  1, -1,  0,      -7888,      24208],
    [  2,  1,  0,  0,      -6766,      30824],
    [  1,  0, -1,  0,      -5163,      -8379],
    [  1,  1,  0,  0,       4987,     -16675],
    [  2, -1,  1,  0,       4036,     -12831],
    [  2,  0,  2,  0,       3994,     -10445],
    [  4,  0,  0,  0,       3861,     -11650],
    [  2,  0, -3,  0,       3665,      14403],
    [  0,  1, -2,  0,      -2689,      -7003],
    [  2,  0, -1,  2,      -2602,          0],
    [  2, -1, -2,  0,       2390,      10056],
    [  1,  0,  1,  0,      -2348,       6322],
    [  2, -2,  0,  0,       2236,      -9884],
    [  0,  1,  2,  0,      -2120,       5751],
    [  0,  2,  0,  0,      -2069,          0],
    [  2, -2, -1,  0,       2048,      -4950],
    [  2,  0,  1, -2,      -1773,       4130],
    [  2,  0,  0,  2,      -1595,          0],
    [  4, -1, -1,  0,       1215,      -3958],
    [  0,  0,  2,  2,      -1110,          0],
    [  3,  0, -1,  0,       -892,       3258],
    [  2,  1,  1,  0,       -810,       2616],
    [  4, -1, -2,  0,        759,      -1897],
    [  0,  2, -1,  0,       -713,      -2117],
    [  2,  2, -1,  0,       -700,       2354],
    [  2,  1, -2,  0,        691,          0],
    [  2, -1,  0, -2,        596,          0],
    [  4,  0,  1,  0,        549,      -1423],
    [  0,  0,  4,  0,        537,      -1117],
    [  4, -1,  0,  0,        520,      -1571],
    [  1,  0, -2,  0,       -487,      -1739],
    [  2,  1,  0, -2,       -399,          0],
    [  0,  0,  2, -2,       -381,      -4421],
    [  1,  1,  1,  0,        351,          0],
    [  3,  0, -2,  0,       -340,          0],
    [  4,  0, -3,  0,        330,          0],
    [  2, -1,  2,  0,        327,          0],
    [  0,  2,  1,  0,       -323,       1165],
    [  1,  1, -1,  0,        299,          0],
    [  2,  0,  3,  0,        294,          0],
    [  2,  0, -1, -2,          0,       8752],
];

/// Periodic terms for latitude (Σb, 1e-6°).
///
/// Each row: `[D, M, M′, F, Σb]`. Meeus, Table 47.B.
#[rustfmt::skip]
static LATITUDE_TERMS: [[i32; 5]; 30] = [
    //  D   M   M′   F        Σb
    [  0,  0,  0,  1,    5128122],
    [  0,  0,  1,  1,     280602],
    [  0,  0,  1, -1,     277693],
    [  2,  0,  0, -1,     173237],
    [  2,  0, -1,  1,      55413],
    [  2,  0, -1, -1,      46271],
    [  2,  0,  0,  1,      32573],
    [  0,  0,  2,  1,      17198],
    [  2,  0,  1, -1,       9266],
    [  0,  0,  2, -1,       8822],
    [  2, -1,  0, -1,       8216],
    [  2,  0, -2, -1,       4324],
    [  2,  0,  1,  1,       4200],
    [  2,  1,  0, -1,      -3359],
    [  2, -1, -1,  1,       2463],
    [  2, -1,  0,  1,       2211],
    [  2, -1, -1, -1,       2065],
    [  0,  1, -1, -1,      -1870],
    [  4,  0, -1, -1,       1828],
    [  0,  1,  0,  1,      -1794],
    [  0,  0,  0,  3,      -1749],
    [  0,  1, -1,  1,      -1565],
    [  1,  0,  0,  1,      -1491],
    [  0,  1,  1,  1,      -1475],
    [  0,  1,  1, -1,      -1410],
    [  0,  1,  0, -1,      -1344],
    [  1,  0,  0, -1,      -1335],
    [  0,  0,  3,  1,       1107],
    [  4,  0,  0, -1,       1021],
    [  4,  0, -1,  1,        833],
];

/// Full lunar state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPosition {
    pub ecliptic: EclipticPosition,
    pub equatorial: EquatorialPosition,
    /// Equatorial horizontal parallax in degrees.
    pub horizontal_parallax_deg: f64,
}

/// Mean arguments of the lunar theory, in degrees.
#[derive(Debug, Clone, Copy)]
struct MeanArguments {
    /// L′, mean longitude.
    l: f64,
    /// D, mean elongation.
    d: f64,
    /// M, Sun's mean anomaly.
    m: f64,
    /// M′, Moon's mean anomaly.
    mp: f64,
    /// F, argument of latitude.
    f: f64,
}

fn mean_arguments(t: f64) -> MeanArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    MeanArguments {
        l: 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
        d: 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        m: 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        mp: 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        f: 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    }
}

/// Argument of one periodic term, radians, and its eccentricity weight.
fn term_argument(a: &MeanArguments, coeffs: &[i32], e: f64) -> (f64, f64) {
    let arg = coeffs[0] as f64 * a.d
        + coeffs[1] as f64 * a.m
        + coeffs[2] as f64 * a.mp
        + coeffs[3] as f64 * a.f;
    let weight = match coeffs[1].abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };
    (arg.to_radians(), weight)
}

/// Apparent lunar position at a Julian Day in TT.
pub fn lunar_position(jd_tt: f64) -> LunarPosition {
    let t = jd_to_centuries(jd_tt);
    let a = mean_arguments(t);

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LONGITUDE_DISTANCE_TERMS {
        let (arg, w) = term_argument(&a, row, e);
        sum_l += row[4] as f64 * w * arg.sin();
        sum_r += row[5] as f64 * w * arg.cos();
    }

    let mut sum_b = 0.0;
    for row in &LATITUDE_TERMS {
        let (arg, w) = term_argument(&a, row, e);
        sum_b += row[4] as f64 * w * arg.sin();
    }

    let l_rad = a.l.to_radians();
    let f_rad = a.f.to_radians();
    let mp_rad = a.mp.to_radians();

    // Venus (A1), Jupiter (A2) and flattening (L′ − F) terms.
    sum_l += 3958.0 * a1.sin() + 1962.0 * (l_rad - f_rad).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * l_rad.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_rad).sin()
        + 175.0 * (a1 + f_rad).sin()
        + 127.0 * (l_rad - mp_rad).sin()
        - 115.0 * (l_rad + mp_rad).sin();

    let nut = nutation(t);
    let distance_km = 385_000.56 + sum_r / 1000.0;
    let ecliptic = EclipticPosition {
        longitude_deg: normalize_360(a.l + sum_l / 1e6 + nut.dpsi_deg),
        latitude_deg: sum_b / 1e6,
        distance_km,
    };
    let equatorial = ecliptic_to_equatorial(&ecliptic, mean_obliquity_deg(t) + nut.deps_deg);

    LunarPosition {
        ecliptic,
        equatorial,
        horizontal_parallax_deg: (EARTH_RADIUS_KM / distance_km).asin().to_degrees(),
    }
}

/// Apparent tropical longitude of the Moon in degrees.
pub fn moon_longitude_deg(jd_tt: f64) -> f64 {
    lunar_position(jd_tt).ecliptic.longitude_deg
}
