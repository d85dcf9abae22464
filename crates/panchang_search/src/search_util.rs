//! Bracket-and-bisect root finding on wrapped angles.

use panchang_ephem::normalize_pm180;

/// Bisection stops once the bracket is narrower than this (under a second).
pub const BISECTION_TOLERANCE_DAYS: f64 = 1e-5;

/// Hard cap on bisection halvings.
const MAX_BISECTIONS: usize = 60;

/// Find where `angle_fn(jd) == target_deg`, stepping from `jd_start` by
/// `step_days` (negative searches backwards) for at most `max_steps` steps.
///
/// The difference is wrapped to [-180, 180); a sign change only counts as a
/// bracket when the two samples are closer than 180°, which rejects the
/// jump where the angle sits opposite the target. Returns `None` when no
/// bracket is found.
pub fn find_angle_crossing<F>(
    angle_fn: F,
    jd_start: f64,
    target_deg: f64,
    step_days: f64,
    max_steps: usize,
) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let g = |jd: f64| normalize_pm180(angle_fn(jd) - target_deg);

    let mut a = jd_start;
    let mut ga = g(a);
    if ga == 0.0 {
        return Some(a);
    }
    for _ in 0..max_steps {
        let b = a + step_days;
        let gb = g(b);
        if gb == 0.0 {
            return Some(b);
        }
        if (ga < 0.0) != (gb < 0.0) && (gb - ga).abs() < 180.0 {
            return Some(bisect(&g, a, b, ga));
        }
        a = b;
        ga = gb;
    }
    None
}

fn bisect(g: &dyn Fn(f64) -> f64, mut a: f64, mut b: f64, mut ga: f64) -> f64 {
    for _ in 0..MAX_BISECTIONS {
        if (b - a).abs() <= BISECTION_TOLERANCE_DAYS {
            break;
        }
        let mid = 0.5 * (a + b);
        let gm = g(mid);
        if gm == 0.0 {
            return mid;
        }
        if (gm < 0.0) == (ga < 0.0) {
            a = mid;
            ga = gm;
        } else {
            b = mid;
        }
    }
    0.5 * (a + b)
}
