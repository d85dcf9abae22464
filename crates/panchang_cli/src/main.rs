use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;

use panchang_ephem::Body;
use panchang_search::{
    AuspiciousReport, ElementKind, ElementReport, HoraReport, InauspiciousReport, PanchangConfig,
    PanchangQuery, PanchangReport, SearchError, TimeWindow, element_sequence, panchang_batch,
    panchang_report,
};
use panchang_time::{CivilTime, jd_to_centuries, jd_ut_to_tt};
use panchang_vedic::{
    ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, Field, GeoLocation, RiseSetConfig, RiseSetEvent,
    RiseSetKind, RiseSetResult, VedicError, ayanamsha_deg, resolve_name, rise_set_for_day,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(name = "panchang", version, about = "Hindu calendar (panchang) calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where and when.
#[derive(Args, Debug, Clone)]
struct PlaceArgs {
    /// Local date-time, e.g. 2025-06-29T12:00:00+05:30 (no offset = UTC)
    #[arg(long)]
    date: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Altitude above sea level in meters
    #[arg(long, default_value_t = 0.0)]
    alt: f64,
}

/// Calculation and output options.
#[derive(Args, Debug, Clone)]
struct CalcArgs {
    /// Ayanamsha system (Lahiri, KP, Raman, Fagan-Bradley, Yukteshwar)
    #[arg(long, default_value = "Lahiri")]
    ayanamsha: String,
    /// Use the mean ayanamsha (no nutation in longitude)
    #[arg(long)]
    no_nutation: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full panchang for a place and instant
    Report {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        calc: CalcArgs,
        /// Include the diagnostic trace
        #[arg(long)]
        trace: bool,
    },
    /// Sunrise, sunset and solar noon for the civil day
    Sun {
        #[command(flatten)]
        place: PlaceArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Moonrise, moonset and lunar transit for the civil day
    Moon {
        #[command(flatten)]
        place: PlaceArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Current and next tithi
    Tithi {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Current and next nakshatra
    Nakshatra {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Current and next yoga
    Yoga {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Current and next karana
    Karana {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Auspicious and inauspicious windows of the day
    Muhurta {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Evaluate a file of queries, one `<date> <lat> <lon> [alt]` per line
    Batch {
        /// Query file
        #[arg(long)]
        file: PathBuf,
        /// Worker threads (0 = one per core)
        #[arg(long, default_value_t = 0)]
        threads: usize,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Ayanamsha value at an instant
    Ayanamsha {
        /// Date-time, e.g. 2025-06-29T12:00:00+05:30
        #[arg(long)]
        date: String,
        /// System name; all systems when omitted
        #[arg(long)]
        system: Option<String>,
        /// Use the mean ayanamsha (no nutation in longitude)
        #[arg(long)]
        no_nutation: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl PlaceArgs {
    fn query(&self) -> CliResult<PanchangQuery> {
        let instant: CivilTime = self.date.parse()?;
        let location = GeoLocation::new(self.lat, self.lon, self.alt)?;
        Ok(PanchangQuery::new(instant, location))
    }
}

impl CalcArgs {
    fn config(&self) -> CliResult<PanchangConfig> {
        let system: AyanamshaSystem = resolve_name(&self.ayanamsha)?;
        Ok(PanchangConfig::new(system, !self.no_nutation))
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Report { place, calc, trace } => {
            let query = place.query()?;
            let config = calc.config()?.with_trace(trace);
            let report = panchang_report(&query, &config)?;
            if calc.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Sun { place, json } => body_day(Body::Sun, &place, json)?,
        Commands::Moon { place, json } => body_day(Body::Moon, &place, json)?,
        Commands::Tithi { place, calc } => element(ElementKind::Tithi, &place, &calc)?,
        Commands::Nakshatra { place, calc } => element(ElementKind::Nakshatra, &place, &calc)?,
        Commands::Yoga { place, calc } => element(ElementKind::Yoga, &place, &calc)?,
        Commands::Karana { place, calc } => element(ElementKind::Karana, &place, &calc)?,
        Commands::Muhurta { place, calc } => {
            let report = panchang_report(&place.query()?, &calc.config()?)?;
            if calc.json {
                let view = MuhurtaView {
                    weekday: report.weekday.english_name,
                    sunrise: &report.sun.rise,
                    sunset: &report.sun.set,
                    auspicious: &report.auspicious,
                    inauspicious: &report.inauspicious,
                    hora: &report.hora,
                };
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_muhurta(&report);
            }
        }
        Commands::Batch {
            file,
            threads,
            calc,
        } => batch(&file, threads, &calc)?,
        Commands::Ayanamsha {
            date,
            system,
            no_nutation,
            json,
        } => ayanamsha(&date, system.as_deref(), !no_nutation, json)?,
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct BodyDay {
    body: Body,
    date: CivilTime,
    rise: Field<CivilTime>,
    set: Field<CivilTime>,
    transit: Field<CivilTime>,
}

#[derive(Serialize)]
struct MuhurtaView<'a> {
    weekday: &'static str,
    sunrise: &'a Field<CivilTime>,
    sunset: &'a Field<CivilTime>,
    auspicious: &'a AuspiciousReport,
    inauspicious: &'a InauspiciousReport,
    hora: &'a Field<HoraReport>,
}

#[derive(Serialize)]
struct ElementView {
    kind: ElementKind,
    current: Field<ElementReport>,
    next: Field<ElementReport>,
}

#[derive(Serialize)]
struct AyanamshaView {
    system: AyanamshaSystem,
    degrees: f64,
    true_ayanamsha: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum BatchLine {
    Report(Box<PanchangReport>),
    Failed { line: usize, error: String },
}

/// Rise/set outcome as a local-time field.
fn event_field(
    event: Result<RiseSetEvent, VedicError>,
    offset: i32,
) -> CliResult<Field<CivilTime>> {
    let field = match event {
        Ok(ev) => match ev.result {
            RiseSetResult::Event { jd_ut } => Field::Valid(jd_ut),
            other => Field::indeterminate(other.reason().unwrap_or("no event")),
        },
        Err(VedicError::NumericDivergence {
            last_estimate_jd, ..
        }) => Field::LowConfidence(last_estimate_jd),
        Err(e) => return Err(e.into()),
    };
    Ok(field.and_then(|jd| Field::from_result(CivilTime::from_jd_ut(jd, offset))))
}

fn body_day(body: Body, place: &PlaceArgs, json: bool) -> CliResult<()> {
    let query = place.query()?;
    let date = query.instant;
    let config = RiseSetConfig::default();
    let solve = |kind| {
        event_field(
            rise_set_for_day(body, &query.location, kind, &date, &config),
            date.utc_offset_minutes,
        )
    };
    let day = BodyDay {
        body,
        date: CivilTime::date(date.year, date.month, date.day, date.utc_offset_minutes)?,
        rise: solve(RiseSetKind::Rise)?,
        set: solve(RiseSetKind::Set)?,
        transit: solve(RiseSetKind::Transit)?,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&day)?);
    } else {
        println!(
            "{} on {:04}-{:02}-{:02} at {}\n",
            body.name(),
            date.year,
            date.month,
            date.day,
            place_label(&query.location)
        );
        println!("Rise:     {}", show(&day.rise, |t| t.to_string()));
        println!("Set:      {}", show(&day.set, |t| t.to_string()));
        println!("Transit:  {}", show(&day.transit, |t| t.to_string()));
    }
    Ok(())
}

fn element(kind: ElementKind, place: &PlaceArgs, calc: &CalcArgs) -> CliResult<()> {
    let query = place.query()?;
    let config = calc.config()?;
    let offset = query.instant.utc_offset_minutes;
    let seq = element_sequence(kind, query.instant.to_jd_ut()?, 2, &config);
    let [current, next] = seq.as_slice() else {
        return Err(format!("{} search returned {} elements", kind.name(), seq.len()).into());
    };
    let view = ElementView {
        kind,
        current: ElementReport::from_element(current, offset),
        next: ElementReport::from_element(next, offset),
    };
    if calc.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let label = capitalize(kind.name());
        print_element(&label, &view.current);
        print_element("  Next", &view.next);
    }
    Ok(())
}

/// One query from a batch line: `<date> <lat> <lon> [alt]`.
fn parse_batch_line(line: &str) -> CliResult<PanchangQuery> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(format!("expected `<date> <lat> <lon> [alt]`, got {line:?}").into());
    }
    let instant: CivilTime = fields[0].parse()?;
    let lat: f64 = fields[1].parse()?;
    let lon: f64 = fields[2].parse()?;
    let alt: f64 = match fields.get(3) {
        Some(a) => a.parse()?,
        None => 0.0,
    };
    Ok(PanchangQuery::new(instant, GeoLocation::new(lat, lon, alt)?))
}

fn batch(file: &Path, threads: usize, calc: &CalcArgs) -> CliResult<()> {
    let config = calc.config()?;
    let text = fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;

    let mut queries = Vec::new();
    let mut line_numbers = Vec::new();
    let mut failures: Vec<(usize, String)> = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_batch_line(line) {
            Ok(q) => {
                queries.push(q);
                line_numbers.push(i + 1);
            }
            Err(e) => failures.push((i + 1, e.to_string())),
        }
    }

    info!(
        "{}: {} queries, {} unparsable lines",
        file.display(),
        queries.len(),
        failures.len()
    );
    let results: Vec<(usize, Result<PanchangReport, SearchError>)> = line_numbers
        .into_iter()
        .zip(panchang_batch(&queries, &config, threads))
        .collect();

    let mut out: Vec<(usize, BatchLine)> = failures
        .into_iter()
        .map(|(line, error)| (line, BatchLine::Failed { line, error }))
        .collect();
    for (line, result) in results {
        out.push((
            line,
            match result {
                Ok(r) => BatchLine::Report(Box::new(r)),
                Err(e) => BatchLine::Failed {
                    line,
                    error: e.to_string(),
                },
            },
        ));
    }
    out.sort_by_key(|(line, _)| *line);
    let failed = out
        .iter()
        .filter(|(_, b)| matches!(b, BatchLine::Failed { .. }))
        .count();

    if calc.json {
        let lines: Vec<&BatchLine> = out.iter().map(|(_, b)| b).collect();
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for (_, b) in &out {
            match b {
                BatchLine::Report(r) => print_summary(r),
                BatchLine::Failed { line, error } => eprintln!("line {line}: {error}"),
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {} queries failed", out.len()).into());
    }
    Ok(())
}

fn ayanamsha(date: &str, system: Option<&str>, use_nutation: bool, json: bool) -> CliResult<()> {
    let instant: CivilTime = date.parse()?;
    let t = jd_to_centuries(jd_ut_to_tt(instant.to_jd_ut()?));
    let systems: Vec<AyanamshaSystem> = match system {
        Some(name) => vec![resolve_name(name)?],
        None => ALL_AYANAMSHA_SYSTEMS.to_vec(),
    };
    let views: Vec<AyanamshaView> = systems
        .into_iter()
        .map(|s| AyanamshaView {
            system: s,
            degrees: ayanamsha_deg(s, t, use_nutation),
            true_ayanamsha: use_nutation,
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        let kind = if use_nutation { "true" } else { "mean" };
        println!("Ayanamsha ({kind}) at {instant}\n");
        for v in &views {
            println!("{:14} {:>10.6}°  {}", v.system.name(), v.degrees, dms(v.degrees));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn show<T>(field: &Field<T>, fmt: impl Fn(&T) -> String) -> String {
    match field {
        Field::Valid(v) => fmt(v),
        Field::LowConfidence(v) => format!("{} (low confidence)", fmt(v)),
        Field::Indeterminate(reason) => format!("n/a ({reason})"),
    }
}

fn window(w: &TimeWindow) -> String {
    format!("{} to {}", w.start.clock_string(), w.end.clock_string())
}

fn place_label(loc: &GeoLocation) -> String {
    let ns = if loc.latitude_deg() < 0.0 { 'S' } else { 'N' };
    let ew = if loc.longitude_deg() < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.4}°{ns}, {:.4}°{ew}",
        loc.latitude_deg().abs(),
        loc.longitude_deg().abs()
    )
}

fn dms(deg: f64) -> String {
    let total = (deg.abs() * 3600.0).round() as u64;
    let sign = if deg < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}°{:02}'{:02}\"",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn print_element(label: &str, field: &Field<ElementReport>) {
    println!(
        "{label:10}{}",
        show(field, |e| format!("{} ({})  {} to {}", e.name, e.index, e.start, e.end))
    );
}

fn print_report(r: &PanchangReport) {
    println!("Panchang for {} at {}\n", r.instant, place_label(&r.location));
    println!(
        "Vaar:     {} ({}), lord {}",
        r.weekday.name,
        r.weekday.english_name,
        r.weekday.lord.name()
    );
    print_element("Tithi:", &r.tithi.current);
    print_element("  Next:", &r.tithi.next);
    println!("  Paksha: {}", r.paksha.name());
    print_element("Nakshatra:", &r.nakshatra.current);
    println!("  Pada:   {}", r.nakshatra_pada);
    print_element("  Next:", &r.nakshatra.next);
    print_element("Yoga:", &r.yoga.current);
    print_element("  Next:", &r.yoga.next);
    println!("Karana:");
    for k in &r.karana.sequence {
        print_element("", k);
    }

    let clock = |t: &CivilTime| t.clock_string();
    println!();
    println!("Sunrise:  {}", show(&r.sun.rise, clock));
    println!("Sunset:   {}", show(&r.sun.set, clock));
    println!("Noon:     {}", show(&r.sun.solar_noon, clock));
    println!("Moonrise: {}", show(&r.moon.rise, clock));
    println!("Moonset:  {}", show(&r.moon.set, clock));
    println!(
        "Sun:      {:.4}° {} ({:.2}°)",
        r.sun.sidereal_longitude_deg,
        r.sun.rashi.rashi.name(),
        r.sun.rashi.degrees_in_rashi
    );
    println!(
        "Moon:     {:.4}° {} ({:.2}°)",
        r.moon.sidereal_longitude_deg,
        r.moon.rashi.rashi.name(),
        r.moon.rashi.degrees_in_rashi
    );
    println!(
        "Ayanamsha: {} {:.6}° ({})",
        r.ayanamsha.system.name(),
        r.ayanamsha.degrees,
        dms(r.ayanamsha.degrees)
    );
    println!();
    print_muhurta(r);

    if let Some(trace) = &r.trace {
        println!("\nTrace:");
        for e in trace {
            println!("  [{}] {}", e.stage, e.message);
        }
    }
}

fn print_muhurta(r: &PanchangReport) {
    let a = &r.auspicious;
    let i = &r.inauspicious;
    println!("Abhijit:    {}", show(&a.abhijit_muhurta, window));
    println!("Brahma:     {}", show(&a.brahma_muhurta, window));
    println!("Rahu Kalam: {}", show(&i.rahu_kalam, window));
    println!("Gulika:     {}", show(&i.gulika, window));
    println!("Yamaganda:  {}", show(&i.yamaganda, window));
    println!(
        "Hora:       {}",
        show(&r.hora, |h| format!(
            "{} ({} of 24)  {} to {}",
            h.lord.name(),
            h.number,
            h.start.clock_string(),
            h.end.clock_string()
        ))
    );

    for (title, periods) in [
        ("Day choghadiya:", &a.day_choghadiya),
        ("Night choghadiya:", &a.night_choghadiya),
    ] {
        println!("{title}");
        match periods {
            Field::Valid(ps) | Field::LowConfidence(ps) => {
                for p in ps {
                    println!(
                        "  {:6} {:12} {} to {}",
                        p.name.name(),
                        p.nature.name(),
                        p.start.clock_string(),
                        p.end.clock_string()
                    );
                }
            }
            Field::Indeterminate(reason) => println!("  n/a ({reason})"),
        }
    }
}

fn print_summary(r: &PanchangReport) {
    let name = |f: &Field<ElementReport>| show(f, |e| e.name.to_string());
    println!(
        "{}  {}  {} | {} | {} | sunrise {}",
        r.instant,
        place_label(&r.location),
        name(&r.tithi.current),
        name(&r.nakshatra.current),
        name(&r.yoga.current),
        show(&r.sun.rise, |t| t.clock_string())
    );
}
