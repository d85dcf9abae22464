//! Rise, set and transit of the Sun and the Moon.
//!
//! Algorithm:
//! 1. Position the body at approximate local noon and derive the transit
//!    from its hour angle.
//! 2. Solve cos H₀ = (sin h₀ − sin φ sin δ) / (cos φ cos δ) at the transit;
//!    |cos H₀| > 1 means the body stays on one side of the horizon.
//! 3. Start at transit ∓ H₀ and iterate: re-position the body, recompute
//!    its actual hour angle from GMST, and correct by the hour-angle error.
//!
//! Civil-day selection wraps this: candidates are seeded from the transits of
//! the previous, current and next day, and the earliest event falling inside
//! [local midnight, next local midnight) wins.

use log::{debug, warn};

use panchang_ephem::{Body, lunar_position, normalize_pm180, solar_position};
use panchang_time::{
    CivilTime, SIDEREAL_RATE_DEG_PER_DAY, calendar_to_jdn, gmst_deg, jd_ut_to_tt,
};

use crate::error::VedicError;
use crate::riseset_types::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetKind, RiseSetResult,
};

/// Refinement passes after the initial estimate.
const MAX_ITERATIONS: usize = 5;

/// Sun convergence: 1 second.
const SUN_CONVERGENCE_DAYS: f64 = 1.0 / 86_400.0;

/// Moon convergence: 30 seconds.
const MOON_CONVERGENCE_DAYS: f64 = 30.0 / 86_400.0;

/// Approximate local noon as a UT Julian Day.
///
/// `jd_ut_midnight` is 0h UT of the calendar date; local noon shifts by
/// −longitude/360 days (east positive).
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn convergence_days(body: Body) -> f64 {
    match body {
        Body::Sun => SUN_CONVERGENCE_DAYS,
        Body::Moon => MOON_CONVERGENCE_DAYS,
    }
}

/// Right ascension, declination and target altitude h₀, all in degrees.
fn horizon_state(
    body: Body,
    jd_ut: f64,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> (f64, f64, f64) {
    let jd_tt = jd_ut_to_tt(jd_ut);
    match body {
        Body::Sun => {
            let s = solar_position(jd_tt);
            (
                s.equatorial.ra_deg,
                s.equatorial.dec_deg,
                config.sun_altitude_deg(location.altitude_m()),
            )
        }
        Body::Moon => {
            let m = lunar_position(jd_tt);
            (
                m.equatorial.ra_deg,
                m.equatorial.dec_deg,
                config.moon_altitude_deg(m.horizontal_parallax_deg, location.altitude_m()),
            )
        }
    }
}

/// Local hour angle in [-180, 180).
fn hour_angle_deg(jd_ut: f64, location: &GeoLocation, ra_deg: f64) -> f64 {
    normalize_pm180(gmst_deg(jd_ut) + location.longitude_deg() - ra_deg)
}

/// cos H₀, or the polar result when it leaves [-1, 1].
fn semi_arc_deg(phi_rad: f64, dec_deg: f64, h0_deg: f64) -> Result<f64, RiseSetResult> {
    let dec = dec_deg.to_radians();
    let cos_h = (h0_deg.to_radians().sin() - phi_rad.sin() * dec.sin()) / (phi_rad.cos() * dec.cos());
    if cos_h > 1.0 {
        Err(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Err(RiseSetResult::NeverSets)
    } else {
        Ok(cos_h.acos().to_degrees())
    }
}

/// Upper transit nearest `jd_ut_noon`.
pub fn compute_transit(
    body: Body,
    location: &GeoLocation,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<f64, VedicError> {
    let tolerance = convergence_days(body);
    let mut jd = jd_ut_noon;
    for _ in 0..=MAX_ITERATIONS {
        let (ra, _, _) = horizon_state(body, jd, location, config);
        let correction = -hour_angle_deg(jd, location, ra) / SIDEREAL_RATE_DEG_PER_DAY;
        jd += correction;
        if correction.abs() < tolerance {
            return Ok(jd);
        }
    }
    warn!("{} transit did not converge near JD {jd:.5}", body.name());
    Err(VedicError::NumericDivergence {
        what: "transit",
        last_estimate_jd: jd,
    })
}

/// Solve one rise, set or transit seeded from an approximate local noon.
///
/// Polar days come back as `Ok(NeverRises | NeverSets)`; failure to
/// converge is `Err(NumericDivergence)` carrying the last estimate.
pub fn compute_rise_set(
    body: Body,
    location: &GeoLocation,
    kind: RiseSetKind,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    rise_set_with_budget(body, location, kind, jd_ut_noon, config, MAX_ITERATIONS)
}

fn rise_set_with_budget(
    body: Body,
    location: &GeoLocation,
    kind: RiseSetKind,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
    max_iterations: usize,
) -> Result<RiseSetResult, VedicError> {
    let rising = match kind {
        RiseSetKind::Rise => true,
        RiseSetKind::Set => false,
        RiseSetKind::Transit => {
            let jd_ut = compute_transit(body, location, jd_ut_noon, config)?;
            return Ok(RiseSetResult::Event { jd_ut });
        }
    };
    let phi = location.latitude_rad();

    let (ra, _, _) = horizon_state(body, jd_ut_noon, location, config);
    let transit =
        jd_ut_noon - hour_angle_deg(jd_ut_noon, location, ra) / SIDEREAL_RATE_DEG_PER_DAY;

    let (_, dec, h0) = horizon_state(body, transit, location, config);
    let semi_arc = match semi_arc_deg(phi, dec, h0) {
        Ok(h) => h,
        Err(polar) => {
            debug!("{} {}: {polar:?} at transit JD {transit:.5}", body.name(), kind.name());
            return Ok(polar);
        }
    };

    let signed = |h: f64| if rising { -h } else { h };
    let tolerance = convergence_days(body);
    let mut jd = transit + signed(semi_arc) / SIDEREAL_RATE_DEG_PER_DAY;

    for iteration in 0..max_iterations {
        let (ra, dec, h0) = horizon_state(body, jd, location, config);
        let target = match semi_arc_deg(phi, dec, h0) {
            Ok(h) => signed(h),
            Err(polar) => return Ok(polar),
        };
        let actual = hour_angle_deg(jd, location, ra);
        let correction = normalize_pm180(target - actual) / SIDEREAL_RATE_DEG_PER_DAY;
        jd += correction;
        if correction.abs() < tolerance {
            debug!(
                "{} {} converged after {} iterations",
                body.name(),
                kind.name(),
                iteration + 1
            );
            return Ok(RiseSetResult::Event { jd_ut: jd });
        }
    }

    warn!("{} {} did not converge near JD {jd:.5}", body.name(), kind.name());
    Err(VedicError::NumericDivergence {
        what: match kind {
            RiseSetKind::Rise => "rise",
            _ => "set",
        },
        last_estimate_jd: jd,
    })
}

/// Rise, set or transit of a body within the civil day of `date`.
///
/// The window is [local midnight, next local midnight) in the date's UTC
/// offset; only the calendar fields of `date` are used.
pub fn rise_set_for_day(
    body: Body,
    location: &GeoLocation,
    kind: RiseSetKind,
    date: &CivilTime,
    config: &RiseSetConfig,
) -> Result<RiseSetEvent, VedicError> {
    rise_set_for_day_with_budget(body, location, kind, date, config, MAX_ITERATIONS)
}

/// [`rise_set_for_day`] with an explicit rise/set refinement budget per candidate.
///
/// A budget too small to converge surfaces the in-day estimate as
/// `Err(NumericDivergence)`.
pub fn rise_set_for_day_with_budget(
    body: Body,
    location: &GeoLocation,
    kind: RiseSetKind,
    date: &CivilTime,
    config: &RiseSetConfig,
    max_iterations: usize,
) -> Result<RiseSetEvent, VedicError> {
    date.validate()?;
    let window_start = date.midnight_jd_ut();
    let window_end = window_start + 1.0;
    let in_window = |jd: f64| (window_start..window_end).contains(&jd);

    let jd_0h = calendar_to_jdn(date.year, date.month, date.day) as f64 - 0.5;
    let noon = approximate_local_noon_jd(jd_0h, location.longitude_deg());

    let mut earliest: Option<f64> = None;
    let mut polar: Option<RiseSetResult> = None;
    let mut divergence: Option<VedicError> = None;

    for k in -1..=1 {
        let seed = noon + f64::from(k);
        let solved = match kind {
            RiseSetKind::Transit => compute_rise_set(body, location, kind, seed, config),
            _ => rise_set_with_budget(body, location, kind, seed, config, max_iterations),
        };
        match solved {
            Ok(RiseSetResult::Event { jd_ut }) => {
                if in_window(jd_ut) && earliest.is_none_or(|e| jd_ut < e) {
                    earliest = Some(jd_ut);
                }
            }
            Ok(other) => {
                if k == 0 && other.is_no_horizon_crossing() {
                    polar = Some(other);
                }
            }
            Err(VedicError::NumericDivergence {
                what,
                last_estimate_jd,
            }) => {
                if in_window(last_estimate_jd) {
                    divergence = Some(VedicError::NumericDivergence {
                        what,
                        last_estimate_jd,
                    });
                }
            }
            Err(e) => return Err(e),
        }
    }

    let event = |result| RiseSetEvent { kind, body, result };
    if let Some(jd_ut) = earliest {
        return Ok(event(RiseSetResult::Event { jd_ut }));
    }
    if let Some(p) = polar {
        warn!("{} {} on {date}: {p:?}", body.name(), kind.name());
        return Ok(event(p));
    }
    if let Some(d) = divergence {
        return Err(d);
    }
    debug!("{} {} on {date}: no event in civil day", body.name(), kind.name());
    Ok(event(RiseSetResult::NoEventInDay))
}
