//! Golden values and structural properties of the panchang report.
//!
//! Reference place: Chennai (13.0827°N, 80.2707°E), IST (+05:30). Boundary
//! times are this ephemeris' values; they agree with published almanacs to
//! within a few minutes.

use panchang_search::{
    ElementKind, ElementReport, PanchangCache, PanchangConfig, PanchangQuery, element_sequence,
    panchang_batch, panchang_batch_cached, panchang_report,
};
use panchang_time::CivilTime;
use panchang_vedic::{Field, GeoLocation, Graha, Paksha};

const IST: i32 = 330;
const SYNODIC_MONTH: f64 = 29.530_589;
const SIDEREAL_MONTH: f64 = 27.321_661;

fn chennai() -> GeoLocation {
    GeoLocation::new(13.0827, 80.2707, 0.0).unwrap()
}

fn noon_query(y: i32, m: u32, d: u32) -> PanchangQuery {
    PanchangQuery::new(CivilTime::new(y, m, d, 12, 0, 0.0, IST).unwrap(), chennai())
}

fn ist(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> CivilTime {
    CivilTime::new(y, m, d, h, min, f64::from(s), IST).unwrap()
}

fn assert_time(label: &str, got: &CivilTime, expected: CivilTime, tol_min: f64) {
    let diff = (got.to_jd_ut().unwrap() - expected.to_jd_ut().unwrap()) * 1440.0;
    assert!(
        diff.abs() <= tol_min,
        "{label}: got {got}, expected {expected} ({diff:+.2} min)"
    );
}

fn valid<'a, T: std::fmt::Debug>(label: &str, f: &'a Field<T>) -> &'a T {
    match f {
        Field::Valid(v) => v,
        other => panic!("{label} not valid: {other:?}"),
    }
}

fn assert_element(
    label: &str,
    e: &Field<ElementReport>,
    index: u8,
    start: CivilTime,
    end: CivilTime,
) {
    let e = valid(label, e);
    assert_eq!(e.index, index, "{label} index");
    assert_time(&format!("{label} start"), &e.start, start, 2.0);
    assert_time(&format!("{label} end"), &e.end, end, 2.0);
}

#[test]
fn chennai_2025_06_29() {
    let r = panchang_report(&noon_query(2025, 6, 29), &PanchangConfig::default()).unwrap();

    assert_element(
        "tithi",
        &r.tithi.current,
        5,
        ist(2025, 6, 29, 9, 15, 17),
        ist(2025, 6, 30, 9, 24, 37),
    );
    assert_eq!(valid("tithi", &r.tithi.current).name, "Shukla Panchami");
    assert_eq!(r.paksha, Paksha::Shukla);

    assert_element(
        "nakshatra",
        &r.nakshatra.current,
        9,
        ist(2025, 6, 29, 6, 33, 54),
        ist(2025, 6, 30, 7, 20, 24),
    );
    assert_eq!(valid("nakshatra", &r.nakshatra.current).name, "Magha");
    assert_eq!(r.nakshatra_pada, 1);

    assert_element(
        "yoga",
        &r.yoga.current,
        14,
        ist(2025, 6, 28, 19, 14, 13),
        ist(2025, 6, 29, 17, 57, 31),
    );
    assert_eq!(valid("yoga", &r.yoga.current).name, "Vajra");

    let bava = r
        .karana
        .sequence
        .iter()
        .filter_map(Field::value)
        .find(|k| k.index == 9)
        .expect("karana 9 within the Vedic day");
    assert_eq!(bava.name, "Bava");
    assert_time("karana start", &bava.start, ist(2025, 6, 29, 9, 15, 17), 2.0);
    assert_time("karana end", &bava.end, ist(2025, 6, 29, 21, 13, 50), 2.0);

    assert_eq!(r.weekday.english_name, "Sunday");
    assert_eq!(r.weekday.lord, Graha::Surya);

    assert_time("sunrise", valid("sunrise", &r.sun.rise), ist(2025, 6, 29, 5, 45, 45), 3.0);
    assert_time("sunset", valid("sunset", &r.sun.set), ist(2025, 6, 29, 18, 39, 6), 3.0);
    assert_time("moonrise", valid("moonrise", &r.moon.rise), ist(2025, 6, 29, 9, 20, 11), 3.0);
    assert_time("moonset", valid("moonset", &r.moon.set), ist(2025, 6, 29, 22, 8, 29), 3.0);

    // Sunday: Rahu Kalam is the last eighth of the day.
    let rahu = valid("rahu kalam", &r.inauspicious.rahu_kalam);
    assert_time("rahu kalam start", &rahu.start, ist(2025, 6, 29, 17, 2, 26), 3.0);
    assert_time("rahu kalam end", &rahu.end, *valid("sunset", &r.sun.set), 0.05);

    assert!((r.ayanamsha.degrees - 24.2099).abs() < 0.002);
    assert!((r.sun.sidereal_longitude_deg - 73.578).abs() < 0.01);
    assert!((r.moon.sidereal_longitude_deg - 122.962).abs() < 0.01);
    assert_eq!(r.sun.rashi.rashi_index, 2);
    assert_eq!(r.moon.rashi.rashi_index, 4);
}

#[test]
fn chennai_2025_06_20() {
    let r = panchang_report(&noon_query(2025, 6, 20), &PanchangConfig::default()).unwrap();

    assert_element(
        "tithi",
        &r.tithi.current,
        25,
        ist(2025, 6, 20, 9, 50, 37),
        ist(2025, 6, 21, 7, 19, 52),
    );
    assert_eq!(r.paksha, Paksha::Krishna);
    assert_element(
        "nakshatra",
        &r.nakshatra.current,
        26,
        ist(2025, 6, 19, 23, 16, 36),
        ist(2025, 6, 20, 21, 44, 39),
    );
    assert_eq!(valid("nakshatra", &r.nakshatra.current).name, "Revati");
    assert_eq!(r.nakshatra_pada, 3);
    assert_element(
        "yoga",
        &r.yoga.current,
        4,
        ist(2025, 6, 20, 2, 44, 39),
        ist(2025, 6, 20, 23, 45, 25),
    );

    // Revati wraps to Ashwini.
    assert_eq!(valid("next nakshatra", &r.nakshatra.next).index, 0);

    let k49 = r
        .karana
        .sequence
        .iter()
        .filter_map(Field::value)
        .find(|k| k.index == 49)
        .expect("karana 49 within the Vedic day");
    assert_time("karana start", &k49.start, ist(2025, 6, 20, 9, 50, 37), 2.0);
    assert_time("karana end", &k49.end, ist(2025, 6, 20, 20, 38, 7), 2.0);

    assert_time("sunrise", valid("sunrise", &r.sun.rise), ist(2025, 6, 20, 5, 43, 36), 3.0);
    assert_time("sunset", valid("sunset", &r.sun.set), ist(2025, 6, 20, 18, 37, 28), 3.0);
    assert_time("solar noon", valid("noon", &r.sun.solar_noon), ist(2025, 6, 20, 12, 10, 32), 3.0);
    assert_eq!(r.weekday.english_name, "Friday");
}

#[test]
fn following_days_advance() {
    let cfg = PanchangConfig::default();
    let d21 = panchang_report(&noon_query(2025, 6, 21), &cfg).unwrap();
    assert_eq!(valid("tithi", &d21.tithi.current).index, 26);
    assert_eq!(valid("nakshatra", &d21.nakshatra.current).index, 0);
    assert_eq!(valid("yoga", &d21.yoga.current).index, 5);

    let d22 = panchang_report(&noon_query(2025, 6, 22), &cfg).unwrap();
    assert_eq!(valid("tithi", &d22.tithi.current).index, 27);
    assert_eq!(valid("nakshatra", &d22.nakshatra.current).name, "Bharani");
}

#[test]
fn sunrise_before_noon_before_sunset() {
    let r = panchang_report(&noon_query(2025, 3, 15), &PanchangConfig::default()).unwrap();
    let rise = valid("rise", &r.sun.rise).to_jd_ut().unwrap();
    let noon = valid("noon", &r.sun.solar_noon).to_jd_ut().unwrap();
    let set = valid("set", &r.sun.set).to_jd_ut().unwrap();
    assert!(rise < noon && noon < set);
    let hours = (set - rise) * 24.0;
    assert!((8.0..=16.0).contains(&hours));
}

#[test]
fn choghadiya_tiles_day_and_night() {
    let r = panchang_report(&noon_query(2025, 6, 29), &PanchangConfig::default()).unwrap();
    let day = valid("day choghadiya", &r.auspicious.day_choghadiya);
    let night = valid("night choghadiya", &r.auspicious.night_choghadiya);
    assert_eq!(day.len(), 8);
    assert_eq!(night.len(), 8);
    assert_eq!(day[0].start, *valid("sunrise", &r.sun.rise));
    assert_time("day/night seam", &day[7].end, night[0].start, 0.05);
    for w in day.windows(2).chain(night.windows(2)) {
        assert_eq!(w[0].end, w[1].start);
    }
    let abhijit = valid("abhijit", &r.auspicious.abhijit_muhurta);
    let noon = valid("noon", &r.sun.solar_noon);
    assert!(abhijit.start.to_jd_ut().unwrap() < noon.to_jd_ut().unwrap());
    assert!(abhijit.end.to_jd_ut().unwrap() > noon.to_jd_ut().unwrap());
    let brahma = valid("brahma", &r.auspicious.brahma_muhurta);
    assert_time("brahma muhurta", &brahma.start, ist(2025, 6, 29, 4, 9, 45), 3.0);
}

#[test]
fn adjacent_elements_meet() {
    let cfg = PanchangConfig::default();
    let jd = noon_query(2025, 1, 1).instant.to_jd_ut().unwrap();
    for kind in panchang_search::ALL_ELEMENT_KINDS {
        let seq = element_sequence(kind, jd, 40, &cfg);
        for w in seq.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd, "{kind:?}");
            assert!(w[1].end_jd > w[1].start_jd, "{kind:?}");
        }
    }
}

/// Mean length of `cycles` full cycles, starting at the first element with
/// public index `first_index`.
fn mean_cycle(kind: ElementKind, first_index: u8, cycles: usize) -> (f64, Vec<f64>) {
    let cfg = PanchangConfig::default();
    let jd = noon_query(2025, 1, 1).instant.to_jd_ut().unwrap();
    let n = usize::from(kind.count());
    let seq = element_sequence(kind, jd, n * (cycles + 1) + 1, &cfg);
    let p = seq
        .iter()
        .position(|e| e.index == first_index)
        .expect("cycle start");
    let singles = (0..cycles)
        .map(|c| seq[p + (c + 1) * n].start_jd - seq[p + c * n].start_jd)
        .collect();
    let mean = (seq[p + cycles * n].start_jd - seq[p].start_jd) / cycles as f64;
    (mean, singles)
}

#[test]
fn tithi_cycle_is_synodic_month() {
    let (mean, singles) = mean_cycle(ElementKind::Tithi, 1, 12);
    assert!((mean - SYNODIC_MONTH).abs() < 0.05, "mean lunation {mean}");
    for s in singles {
        assert!((29.2..=29.9).contains(&s), "lunation {s}");
    }
}

#[test]
fn nakshatra_cycle_is_sidereal_month() {
    let (mean, singles) = mean_cycle(ElementKind::Nakshatra, 0, 13);
    assert!((mean - SIDEREAL_MONTH).abs() < 0.05, "mean sidereal month {mean}");
    for s in singles {
        assert!((27.0..=27.7).contains(&s), "sidereal month {s}");
    }
}

#[test]
fn indices_stay_in_range() {
    let cfg = PanchangConfig::default();
    for d in 1..=28 {
        let r = panchang_report(&noon_query(2025, 2, d), &cfg).unwrap();
        assert!((1..=30).contains(&valid("t", &r.tithi.current).index));
        assert!(valid("n", &r.nakshatra.current).index <= 26);
        assert!(valid("y", &r.yoga.current).index <= 26);
        assert!((1..=4).contains(&r.nakshatra_pada));
        for k in r.karana.sequence.iter().filter_map(Field::value) {
            assert!((1..=60).contains(&k.index));
        }
    }
}

#[test]
fn repeated_reports_serialize_identically() {
    let q = noon_query(2025, 6, 29);
    let cfg = PanchangConfig::default();
    let first = serde_json::to_string(&panchang_report(&q, &cfg).unwrap()).unwrap();
    for _ in 0..100 {
        let again = serde_json::to_string(&panchang_report(&q, &cfg).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn polar_summer_has_no_sunset() {
    let q = PanchangQuery::new(
        CivilTime::new(2025, 6, 21, 12, 0, 0.0, 0).unwrap(),
        GeoLocation::new(80.0, 0.0, 0.0).unwrap(),
    );
    let r = panchang_report(&q, &PanchangConfig::default()).unwrap();
    assert!(r.sun.set.is_indeterminate());
    assert!(r.sun.rise.is_indeterminate());
    assert!(r.inauspicious.rahu_kalam.is_indeterminate());
    assert!(r.auspicious.day_choghadiya.is_indeterminate());
    assert!(r.hora.is_indeterminate());
    // Elements do not depend on the horizon.
    assert!(r.tithi.current.is_valid());
    assert!(!r.karana.sequence.is_empty());

    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["sun"]["set"]["status"], "indeterminate");
}

#[test]
fn polar_winter_never_rises() {
    let q = PanchangQuery::new(
        CivilTime::new(2025, 12, 21, 12, 0, 0.0, 0).unwrap(),
        GeoLocation::new(80.0, 0.0, 0.0).unwrap(),
    );
    let r = panchang_report(&q, &PanchangConfig::default()).unwrap();
    match &r.sun.rise {
        Field::Indeterminate(reason) => assert!(reason.contains("never rises")),
        other => panic!("expected indeterminate sunrise, got {other:?}"),
    }
}

#[test]
fn invalid_instant_is_fatal() {
    let mut t = CivilTime::new(2025, 6, 29, 12, 0, 0.0, IST).unwrap();
    t.month = 13;
    let q = PanchangQuery::new(t, chennai());
    assert!(panchang_report(&q, &PanchangConfig::default()).is_err());
}

#[test]
fn last_supported_day_degrades_per_field() {
    let r = panchang_report(&noon_query(2999, 12, 31), &PanchangConfig::default()).unwrap();
    // Anything ending in year 3000 has no civil time.
    assert!(r.tithi.next.is_indeterminate());
    assert!(r.yoga.next.is_indeterminate());
    assert!(r.auspicious.night_choghadiya.is_indeterminate());
    assert!(r.karana.sequence.iter().any(Field::is_indeterminate));
    valid("sunrise", &r.sun.rise);
    valid("sunset", &r.sun.set);
    valid("rahu kalam", &r.inauspicious.rahu_kalam);
    valid("day choghadiya", &r.auspicious.day_choghadiya);
}

#[test]
fn first_supported_day_reports() {
    let r = panchang_report(&noon_query(1583, 1, 1), &PanchangConfig::default()).unwrap();
    valid("sunrise", &r.sun.rise);
    valid("sunset", &r.sun.set);
}

#[test]
fn cached_matches_uncached() {
    let cfg = PanchangConfig::default();
    let cache = PanchangCache::new(cfg, 8).unwrap();
    let q = noon_query(2025, 6, 20);
    let direct = panchang_report(&q, &cfg).unwrap();
    assert_eq!(cache.report(&q).unwrap(), direct);
    assert_eq!(cache.report(&q).unwrap(), direct);
    assert_eq!(cache.stats().cache_hits, 1);
}

#[test]
fn batch_preserves_order() {
    let cfg = PanchangConfig::default();
    let queries: Vec<PanchangQuery> = (1..=8).map(|d| noon_query(2025, 6, d)).collect();
    let serial: Vec<_> = queries
        .iter()
        .map(|q| panchang_report(q, &cfg).unwrap())
        .collect();

    let parallel = panchang_batch(&queries, &cfg, 3);
    assert_eq!(parallel.len(), queries.len());
    for (p, s) in parallel.iter().zip(&serial) {
        assert_eq!(p.as_ref().unwrap(), s);
    }

    let cache = PanchangCache::new(cfg, 16).unwrap();
    let cached = panchang_batch_cached(&queries, &cache, 4);
    for (c, s) in cached.iter().zip(&serial) {
        assert_eq!(c.as_ref().unwrap(), s);
    }
    assert_eq!(cache.stats().evaluations, 8);
}

#[test]
fn concurrent_callers_agree() {
    let q = noon_query(2025, 6, 29);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || panchang_report(&q, &PanchangConfig::default()).unwrap()))
        .collect();
    let reports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &reports[1..] {
        assert_eq!(r, &reports[0]);
    }
}
