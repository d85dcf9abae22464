//! Civil ↔ Julian Day conversion over the whole supported range.

use panchang_time::{CivilTime, MAX_YEAR, MIN_YEAR, TimeError, jdn_to_calendar};

#[test]
fn every_tenth_day_roundtrips_in_several_zones() {
    let first = CivilTime::date(MIN_YEAR, 1, 1, 0).unwrap().to_jd_ut().unwrap();
    let last = CivilTime::date(MAX_YEAR, 12, 31, 0).unwrap().to_jd_ut().unwrap();

    let mut jd = first + 1.0;
    let mut checked = 0;
    while jd < last - 1.0 {
        for &offset in &[-600, -210, 0, 330, 345, 840] {
            let t = CivilTime::from_jd_ut(jd + 0.123_456, offset).unwrap();
            let back = t.to_jd_ut().unwrap();
            let t2 = CivilTime::from_jd_ut(back, offset).unwrap();
            assert_eq!(t, t2, "roundtrip drift at JD {jd}, offset {offset}");
            assert!(
                (back - (jd + 0.123_456)).abs() * 86_400.0 <= 0.5 + 1e-3,
                "more than half a second lost at JD {jd}"
            );
        }
        jd += 10.0;
        checked += 1;
    }
    assert!(checked > 50_000);
}

#[test]
fn range_edges() {
    assert!(CivilTime::date(MIN_YEAR, 1, 1, 0).is_ok());
    assert!(CivilTime::date(MAX_YEAR, 12, 31, 0).is_ok());
    assert!(matches!(
        CivilTime::date(MIN_YEAR - 1, 12, 31, 0),
        Err(TimeError::InvalidInstant(_))
    ));
    // 1583-01-01 00:00 at +05:30 is still 1582 in UT, but the civil date is valid.
    let t = CivilTime::date(MIN_YEAR, 1, 1, 330).unwrap();
    let jd = t.to_jd_ut().unwrap();
    assert_eq!(jdn_to_calendar((jd + 0.5).floor() as i64).0, MIN_YEAR - 1);
}

#[test]
fn weekday_advances_daily() {
    let mut t = CivilTime::date(2024, 12, 29, 330).unwrap();
    for k in 0..21u8 {
        assert_eq!(t.weekday(), k % 7);
        t = t.add_days(1).unwrap();
    }
}
