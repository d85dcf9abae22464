//! Panchang element search: current element, boundaries, and chained sequences.
//!
//! Each element kind is a state machine on one scalar angle (see
//! [`element_angle_deg`]). The element containing an instant is read off the
//! angle; its start and end are the instants where the angle crosses the
//! element's lower and upper thresholds.

use log::{debug, warn};

use panchang_ephem::normalize_360;

use crate::config::PanchangConfig;
use crate::panchang_types::{Confidence, ElementKind, PanchangElement};
use crate::search_util::find_angle_crossing;
use crate::sky::{elongation_deg, moon_sidereal_deg, sidereal_sum_deg};

/// Step budget for each boundary search.
const MAX_STEPS: usize = 20;

/// Upper bound on elements returned for a time window.
const MAX_WINDOW_ELEMENTS: usize = 16;

/// The angle driving an element kind at a UT instant, in [0, 360).
pub fn element_angle_deg(kind: ElementKind, jd_ut: f64, config: &PanchangConfig) -> f64 {
    match kind {
        ElementKind::Tithi | ElementKind::Karana => elongation_deg(jd_ut),
        ElementKind::Nakshatra => moon_sidereal_deg(jd_ut, config),
        ElementKind::Yoga => sidereal_sum_deg(jd_ut, config),
    }
}

fn slot_for_angle(kind: ElementKind, angle_deg: f64) -> u8 {
    let slot = (normalize_360(angle_deg) / kind.span_deg()).floor() as u8;
    slot.min(kind.count() - 1)
}

/// Instant where the driving angle reaches `target_deg`, searching forward
/// or backward from `jd_from`. Falls back to the mean rate when unbracketed.
fn find_boundary(
    kind: ElementKind,
    jd_from: f64,
    target_deg: f64,
    forward: bool,
    max_steps: usize,
    config: &PanchangConfig,
) -> (f64, Confidence) {
    let step = if forward {
        kind.step_days()
    } else {
        -kind.step_days()
    };
    let angle = |jd: f64| element_angle_deg(kind, jd, config);

    if let Some(jd) = find_angle_crossing(angle, jd_from, target_deg, step, max_steps) {
        debug!("{} boundary {target_deg:.3}° at JD {jd:.6}", kind.name());
        return (jd, Confidence::High);
    }

    let rate = kind.mean_rate_deg_per_day();
    let now = angle(jd_from);
    let jd = if forward {
        jd_from + normalize_360(target_deg - now) / rate
    } else {
        jd_from - normalize_360(now - target_deg) / rate
    };
    warn!(
        "{} boundary {target_deg:.3}° not bracketed within {max_steps} steps from JD {jd_from:.5}; \
         using mean-rate estimate JD {jd:.5}",
        kind.name()
    );
    (jd, Confidence::Low)
}

fn lower(a: Confidence, b: Confidence) -> Confidence {
    if a == Confidence::Low || b == Confidence::Low {
        Confidence::Low
    } else {
        Confidence::High
    }
}

fn build(
    kind: ElementKind,
    slot: u8,
    start: (f64, Confidence),
    end: (f64, Confidence),
) -> PanchangElement {
    let (name, lord) = kind.describe(slot);
    PanchangElement {
        kind,
        index: kind.public_index(slot),
        name,
        lord,
        start_jd: start.0,
        end_jd: end.0,
        confidence: lower(start.1, end.1),
    }
}

fn element_with_budget(
    kind: ElementKind,
    jd_ut: f64,
    max_steps: usize,
    config: &PanchangConfig,
) -> PanchangElement {
    let slot = slot_for_angle(kind, element_angle_deg(kind, jd_ut, config));
    let span = kind.span_deg();
    let start = find_boundary(kind, jd_ut, f64::from(slot) * span, false, max_steps, config);
    let end = find_boundary(kind, jd_ut, f64::from(slot + 1) * span, true, max_steps, config);
    build(kind, slot, start, end)
}

/// The element of `kind` in force at `jd_ut`, with its start and end.
pub fn element_at(kind: ElementKind, jd_ut: f64, config: &PanchangConfig) -> PanchangElement {
    element_with_budget(kind, jd_ut, MAX_STEPS, config)
}

/// The element following `prev`, starting exactly at its end.
fn next_element(
    kind: ElementKind,
    prev: &PanchangElement,
    prev_end_confidence: Confidence,
    config: &PanchangConfig,
) -> (PanchangElement, Confidence) {
    let slot = (prev.slot() + 1) % kind.count();
    let target = f64::from(slot + 1) * kind.span_deg();
    let end = find_boundary(kind, prev.end_jd, target, true, MAX_STEPS, config);
    (
        build(kind, slot, (prev.end_jd, prev_end_confidence), end),
        end.1,
    )
}

/// `count` consecutive elements starting with the one in force at `jd_ut`.
///
/// Each element's start is the previous element's end, so adjacent
/// elements always meet exactly.
pub fn element_sequence(
    kind: ElementKind,
    jd_ut: f64,
    count: usize,
    config: &PanchangConfig,
) -> Vec<PanchangElement> {
    if count == 0 {
        return Vec::new();
    }
    chain(kind, jd_ut, config, |out| out.len() < count)
}

/// All elements of `kind` overlapping [`from_jd`, `to_jd`), in order.
pub fn elements_between(
    kind: ElementKind,
    from_jd: f64,
    to_jd: f64,
    config: &PanchangConfig,
) -> Vec<PanchangElement> {
    chain(kind, from_jd, config, |out| {
        out.len() < MAX_WINDOW_ELEMENTS && out.last().is_some_and(|e| e.end_jd < to_jd)
    })
}

/// The element at `jd_ut` followed by its successors while `more` holds.
fn chain(
    kind: ElementKind,
    jd_ut: f64,
    config: &PanchangConfig,
    more: impl Fn(&[PanchangElement]) -> bool,
) -> Vec<PanchangElement> {
    let mut out = Vec::new();
    let first = element_at(kind, jd_ut, config);
    let mut end_confidence = first.confidence;
    out.push(first);
    while more(&out) {
        let Some(prev) = out.last() else { break };
        let (next, conf) = next_element(kind, prev, end_confidence, config);
        end_confidence = conf;
        out.push(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-06-29 06:30 UT (12:00 IST).
    const JD: f64 = 2_460_855.770_833_3;

    #[test]
    fn element_contains_instant() {
        let cfg = PanchangConfig::default();
        for kind in crate::panchang_types::ALL_ELEMENT_KINDS {
            let e = element_at(kind, JD, &cfg);
            assert!(e.contains(JD), "{kind:?}");
            assert!(e.end_jd > e.start_jd);
            assert_eq!(e.confidence, Confidence::High);
        }
    }

    #[test]
    fn sequence_is_continuous() {
        let cfg = PanchangConfig::default();
        let seq = element_sequence(ElementKind::Karana, JD, 10, &cfg);
        assert_eq!(seq.len(), 10);
        for w in seq.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
            assert_eq!(w[1].slot(), (w[0].slot() + 1) % 60);
        }
    }

    #[test]
    fn exhausted_budget_is_low_confidence() {
        let cfg = PanchangConfig::default();
        let good = element_at(ElementKind::Tithi, JD, &cfg);
        let poor = element_with_budget(ElementKind::Tithi, JD, 0, &cfg);
        assert_eq!(poor.confidence, Confidence::Low);
        assert_eq!(poor.index, good.index);
        assert!(poor.start_jd <= JD && poor.end_jd >= JD);
        // The mean-rate estimate is within a few hours of the true boundary.
        assert!((poor.end_jd - good.end_jd).abs() < 0.3);
    }

    #[test]
    fn window_covers_range() {
        let cfg = PanchangConfig::default();
        let from = JD - 0.3;
        let to = from + 1.0;
        let ks = elements_between(ElementKind::Karana, from, to, &cfg);
        assert!(ks.len() >= 2 && ks.len() <= 4, "{} karanas", ks.len());
        assert!(ks[0].start_jd <= from);
        assert!(ks.last().is_some_and(|k| k.end_jd >= to));
        for w in ks.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }
}
