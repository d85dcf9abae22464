//! Full panchang report for one place and instant.
//!
//! Fatal problems (a bad instant or location) abort with `Err`. Everything
//! else degrades per field: a Sun that never sets makes the sunset and every
//! window built on it [`Field::Indeterminate`], and a solver that runs out of
//! iterations yields its last estimate as [`Field::LowConfidence`]. A derived
//! instant outside the supported calendar range is indeterminate too.

use log::warn;
use serde::Serialize;

use panchang_ephem::Body;
use panchang_time::{CivilTime, TimeError, jd_to_centuries, jd_ut_to_tt};
use panchang_vedic::{
    AyanamshaSystem, Choghadiya, ChoghadiyaPeriod, DayInterval, Field, GeoLocation, Graha,
    Nature, Paksha, RashiPosition, RiseSetEvent, RiseSetKind, RiseSetResult, Vaar, VedicError,
    abhijit_muhurta, ayanamsha_deg, brahma_muhurta, day_choghadiya, horas, inauspicious_windows,
    nakshatra_from_longitude, night_choghadiya, rashi_from_longitude, rise_set_for_day,
    tithi_from_elongation,
};

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::panchang::{element_sequence, elements_between};
use crate::panchang_types::{Confidence, ElementKind, PanchangElement};
use crate::sky::{elongation_deg, moon_sidereal_deg, sun_sidereal_deg};
use crate::trace::{Trace, TraceEntry};

/// Where and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangQuery {
    /// Local civil time; its UTC offset is also used for every time in the report.
    pub instant: CivilTime,
    pub location: GeoLocation,
}

impl PanchangQuery {
    pub fn new(instant: CivilTime, location: GeoLocation) -> Self {
        Self { instant, location }
    }
}

/// One tithi, nakshatra, yoga or karana with local start and end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReport {
    pub index: u8,
    pub name: &'static str,
    pub lord: Option<Graha>,
    pub start: CivilTime,
    pub end: CivilTime,
}

impl ElementReport {
    /// Local-time view of a solved element; low confidence carries over.
    ///
    /// A boundary that cannot be shown as a civil time leaves the element
    /// indeterminate.
    pub fn from_element(e: &PanchangElement, utc_offset_minutes: i32) -> Field<Self> {
        let report = Field::from_result(
            civil_span(e.start_jd, e.end_jd, utc_offset_minutes).map(|(start, end)| Self {
                index: e.index,
                name: e.name,
                lord: e.lord,
                start,
                end,
            }),
        );
        match e.confidence {
            Confidence::High => report,
            Confidence::Low => report.and_then(Field::LowConfidence),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementPair {
    pub current: Field<ElementReport>,
    pub next: Field<ElementReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KaranaReport {
    /// Every karana overlapping the Vedic day, in order.
    pub sequence: Vec<Field<ElementReport>>,
}

/// Civil weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayReport {
    pub name: &'static str,
    pub english_name: &'static str,
    pub lord: Graha,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AyanamshaReport {
    pub system: AyanamshaSystem,
    pub degrees: f64,
    /// Nutation in longitude included.
    pub true_ayanamsha: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunReport {
    pub rise: Field<CivilTime>,
    pub set: Field<CivilTime>,
    pub solar_noon: Field<CivilTime>,
    pub sidereal_longitude_deg: f64,
    pub rashi: RashiPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonReport {
    pub rise: Field<CivilTime>,
    pub set: Field<CivilTime>,
    pub sidereal_longitude_deg: f64,
    pub rashi: RashiPosition,
}

/// A named local-time window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeWindow {
    pub name: &'static str,
    pub start: CivilTime,
    pub end: CivilTime,
}

impl TimeWindow {
    fn from_interval(iv: &DayInterval, utc_offset_minutes: i32) -> Result<Self, TimeError> {
        let (start, end) = civil_span(iv.start_jd, iv.end_jd, utc_offset_minutes)?;
        Ok(Self {
            name: iv.label,
            start,
            end,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoghadiyaReport {
    pub name: Choghadiya,
    pub nature: Nature,
    pub start: CivilTime,
    pub end: CivilTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuspiciousReport {
    pub abhijit_muhurta: Field<TimeWindow>,
    pub brahma_muhurta: Field<TimeWindow>,
    pub day_choghadiya: Field<Vec<ChoghadiyaReport>>,
    pub night_choghadiya: Field<Vec<ChoghadiyaReport>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InauspiciousReport {
    pub rahu_kalam: Field<TimeWindow>,
    pub gulika: Field<TimeWindow>,
    pub yamaganda: Field<TimeWindow>,
}

/// The planetary hour containing the query instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoraReport {
    /// 1-based position in the Vedic day, 1..=24.
    pub number: u8,
    pub lord: Graha,
    pub start: CivilTime,
    pub end: CivilTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangReport {
    pub instant: CivilTime,
    pub location: GeoLocation,
    pub ayanamsha: AyanamshaReport,
    pub tithi: ElementPair,
    pub paksha: Paksha,
    pub nakshatra: ElementPair,
    /// Pada (1-4) of the Moon's nakshatra at the instant.
    pub nakshatra_pada: u8,
    pub yoga: ElementPair,
    pub karana: KaranaReport,
    pub weekday: WeekdayReport,
    pub sun: SunReport,
    pub moon: MoonReport,
    pub auspicious: AuspiciousReport,
    pub inauspicious: InauspiciousReport,
    pub hora: Field<HoraReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceEntry>>,
}

/// Rise/set outcome as a field. Divergence keeps the last estimate.
fn event_field(result: Result<RiseSetEvent, VedicError>) -> Result<Field<f64>, SearchError> {
    match result {
        Ok(event) => Ok(match event.result {
            RiseSetResult::Event { jd_ut } => Field::Valid(jd_ut),
            other => Field::indeterminate(other.reason().unwrap_or("no event")),
        }),
        Err(VedicError::NumericDivergence {
            what,
            last_estimate_jd,
        }) => {
            warn!("{what} did not converge; keeping estimate JD {last_estimate_jd:.6}");
            Ok(Field::LowConfidence(last_estimate_jd))
        }
        Err(e) => Err(e.into()),
    }
}

/// Local start and end of a derived span.
fn civil_span(
    start_jd: f64,
    end_jd: f64,
    offset: i32,
) -> Result<(CivilTime, CivilTime), TimeError> {
    Ok((
        CivilTime::from_jd_ut(start_jd, offset)?,
        CivilTime::from_jd_ut(end_jd, offset)?,
    ))
}

fn describe(field: &Field<f64>) -> String {
    match field {
        Field::Valid(jd) => format!("JD {jd:.6}"),
        Field::LowConfidence(jd) => format!("JD {jd:.6} (low confidence)"),
        Field::Indeterminate(reason) => reason.clone(),
    }
}

/// Sun events for one civil day.
struct SolarDay {
    rise: Field<f64>,
    set: Field<f64>,
    noon: Field<f64>,
}

fn solar_day(
    date: &CivilTime,
    days: i64,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<SolarDay, SearchError> {
    let date = match date.add_days(days) {
        Ok(d) => d,
        Err(e) => {
            let reason = e.to_string();
            return Ok(SolarDay {
                rise: Field::indeterminate(reason.clone()),
                set: Field::indeterminate(reason.clone()),
                noon: Field::indeterminate(reason),
            });
        }
    };
    let solve = |kind| {
        event_field(rise_set_for_day(
            Body::Sun,
            location,
            kind,
            &date,
            &config.riseset,
        ))
    };
    Ok(SolarDay {
        rise: solve(RiseSetKind::Rise)?,
        set: solve(RiseSetKind::Set)?,
        noon: solve(RiseSetKind::Transit)?,
    })
}

/// Sunrise, sunset, next sunrise and weekday of the Vedic day (sunrise to
/// sunrise) containing `jd_ut`.
fn vedic_day(
    jd_ut: f64,
    yesterday: &SolarDay,
    today: &SolarDay,
    tomorrow: &SolarDay,
    civil_vaar: Vaar,
) -> Field<(f64, f64, f64, Vaar)> {
    match today.rise.value() {
        Some(&rise) if jd_ut >= rise => today
            .rise
            .clone()
            .zip(today.set.clone())
            .zip(tomorrow.rise.clone())
            .map(|((r, s), n)| (r, s, n, civil_vaar)),
        Some(_) => {
            let prev_vaar = Vaar::from_weekday(civil_vaar.index() + 6);
            yesterday
                .rise
                .clone()
                .zip(yesterday.set.clone())
                .zip(today.rise.clone())
                .map(|((r, s), n)| (r, s, n, prev_vaar))
        }
        None => today.rise.clone().map(|r| (r, r, r, civil_vaar)),
    }
}

fn element_pair(
    kind: ElementKind,
    jd_ut: f64,
    offset: i32,
    config: &PanchangConfig,
    trace: &mut Trace,
) -> ElementPair {
    let seq = element_sequence(kind, jd_ut, 2, config);
    let (current, next) = (&seq[0], &seq[1]);
    trace.record(kind.name(), || {
        format!(
            "{} {} [{:.6}, {:.6}) {:?}, next {}",
            current.index, current.name, current.start_jd, current.end_jd, current.confidence,
            next.name
        )
    });
    ElementPair {
        current: ElementReport::from_element(current, offset),
        next: ElementReport::from_element(next, offset),
    }
}

fn choghadiya_reports(
    periods: &[ChoghadiyaPeriod; 8],
    offset: i32,
) -> Result<Vec<ChoghadiyaReport>, TimeError> {
    periods
        .iter()
        .map(|p| -> Result<ChoghadiyaReport, TimeError> {
            let (start, end) = civil_span(p.interval.start_jd, p.interval.end_jd, offset)?;
            Ok(ChoghadiyaReport {
                name: p.choghadiya,
                nature: p.nature,
                start,
                end,
            })
        })
        .collect()
}

fn to_civil(field: Field<f64>, offset: i32) -> Field<CivilTime> {
    field.and_then(|jd| Field::from_result(CivilTime::from_jd_ut(jd, offset)))
}

fn to_window(field: Field<DayInterval>, offset: i32) -> Field<TimeWindow> {
    field.and_then(|iv| Field::from_result(TimeWindow::from_interval(&iv, offset)))
}

/// Assemble the full panchang for a query.
pub fn panchang_report(
    query: &PanchangQuery,
    config: &PanchangConfig,
) -> Result<PanchangReport, SearchError> {
    let instant = query.instant;
    let location = query.location;
    let offset = instant.utc_offset_minutes;
    let jd = instant.to_jd_ut()?;
    let mut trace = Trace::new(config.trace);
    trace.record("input", || {
        format!(
            "{instant} at {:.4}, {:.4} (JD UT {jd:.6})",
            location.latitude_deg(),
            location.longitude_deg()
        )
    });

    let jd_tt = jd_ut_to_tt(jd);
    let aya = ayanamsha_deg(config.ayanamsha, jd_to_centuries(jd_tt), config.use_nutation);
    trace.record("ayanamsha", || {
        format!("{} {aya:.6}° (ΔT {:.1} s)", config.ayanamsha.name(), (jd_tt - jd) * 86_400.0)
    });

    let sun_lon = sun_sidereal_deg(jd, config);
    let moon_lon = moon_sidereal_deg(jd, config);
    let elongation = elongation_deg(jd);
    trace.record("positions", || {
        format!("sun {sun_lon:.4}°, moon {moon_lon:.4}° sidereal, elongation {elongation:.4}°")
    });

    let tithi = element_pair(ElementKind::Tithi, jd, offset, config, &mut trace);
    let nakshatra = element_pair(ElementKind::Nakshatra, jd, offset, config, &mut trace);
    let yoga = element_pair(ElementKind::Yoga, jd, offset, config, &mut trace);

    let yesterday = solar_day(&instant, -1, &location, config)?;
    let today = solar_day(&instant, 0, &location, config)?;
    let tomorrow = solar_day(&instant, 1, &location, config)?;
    trace.record("sun", || {
        format!(
            "rise {}, set {}, noon {}, next rise {}",
            describe(&today.rise),
            describe(&today.set),
            describe(&today.noon),
            describe(&tomorrow.rise)
        )
    });

    let moon_event = |kind| {
        event_field(rise_set_for_day(
            Body::Moon,
            &location,
            kind,
            &instant,
            &config.riseset,
        ))
    };
    let moon_rise = moon_event(RiseSetKind::Rise)?;
    let moon_set = moon_event(RiseSetKind::Set)?;
    trace.record("moon", || {
        format!("rise {}, set {}", describe(&moon_rise), describe(&moon_set))
    });

    let vaar = Vaar::from_weekday(instant.weekday());
    let day = today.rise.clone().zip(today.set.clone());
    let night = today.set.clone().zip(tomorrow.rise.clone());

    let windows = day
        .clone()
        .and_then(|(r, s)| Field::from_result(inauspicious_windows(r, s, vaar)));
    let inauspicious = InauspiciousReport {
        rahu_kalam: to_window(windows.clone().map(|w| w.rahu_kalam), offset),
        gulika: to_window(windows.clone().map(|w| w.gulika), offset),
        yamaganda: to_window(windows.map(|w| w.yamaganda), offset),
    };

    let auspicious = AuspiciousReport {
        abhijit_muhurta: to_window(
            day.clone()
                .and_then(|(r, s)| Field::from_result(abhijit_muhurta(r, s))),
            offset,
        ),
        brahma_muhurta: to_window(today.rise.clone().map(brahma_muhurta), offset),
        day_choghadiya: day
            .and_then(|(r, s)| Field::from_result(day_choghadiya(r, s, vaar)))
            .and_then(|p| Field::from_result(choghadiya_reports(&p, offset))),
        night_choghadiya: night
            .and_then(|(s, n)| Field::from_result(night_choghadiya(s, n, vaar)))
            .and_then(|p| Field::from_result(choghadiya_reports(&p, offset))),
    };

    let vedic = vedic_day(jd, &yesterday, &today, &tomorrow, vaar);
    let hora = vedic
        .clone()
        .and_then(|(r, s, n, v)| Field::from_result(horas(r, s, n, v)))
        .and_then(|hs| match hs.into_iter().find(|h| h.interval.contains(jd)) {
            Some(h) => Field::Valid(h),
            None => Field::indeterminate("instant outside the Vedic day"),
        })
        .and_then(|h| {
            Field::from_result(
                civil_span(h.interval.start_jd, h.interval.end_jd, offset).map(|(start, end)| {
                    HoraReport {
                        number: h.index + 1,
                        lord: h.lord,
                        start,
                        end,
                    }
                }),
            )
        });

    let (karana_from, karana_to) = match vedic.value() {
        Some(&(rise, _, next_rise, _)) if next_rise > rise => (rise, next_rise),
        _ => {
            let midnight = instant.midnight_jd_ut();
            (midnight, midnight + 1.0)
        }
    };
    let karanas = elements_between(ElementKind::Karana, karana_from, karana_to, config);
    trace.record("karana", || {
        let names: Vec<&str> = karanas.iter().map(|k| k.name).collect();
        format!(
            "{} karanas in [{karana_from:.6}, {karana_to:.6}): {}",
            karanas.len(),
            names.join(", ")
        )
    });
    let karana = KaranaReport {
        sequence: karanas
            .iter()
            .map(|k| ElementReport::from_element(k, offset))
            .collect(),
    };

    Ok(PanchangReport {
        instant,
        location,
        ayanamsha: AyanamshaReport {
            system: config.ayanamsha,
            degrees: aya,
            true_ayanamsha: config.use_nutation,
        },
        tithi,
        paksha: tithi_from_elongation(elongation).paksha,
        nakshatra,
        nakshatra_pada: nakshatra_from_longitude(moon_lon).pada,
        yoga,
        karana,
        weekday: WeekdayReport {
            name: vaar.name(),
            english_name: vaar.english_name(),
            lord: vaar.lord(),
        },
        sun: SunReport {
            rise: to_civil(today.rise, offset),
            set: to_civil(today.set, offset),
            solar_noon: to_civil(today.noon, offset),
            sidereal_longitude_deg: sun_lon,
            rashi: rashi_from_longitude(sun_lon),
        },
        moon: MoonReport {
            rise: to_civil(moon_rise, offset),
            set: to_civil(moon_set, offset),
            sidereal_longitude_deg: moon_lon,
            rashi: rashi_from_longitude(moon_lon),
        },
        auspicious,
        inauspicious,
        hora,
        trace: trace.finish(),
    })
}
