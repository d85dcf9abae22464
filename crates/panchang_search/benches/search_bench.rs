use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_search::{
    ElementKind, PanchangCache, PanchangConfig, PanchangQuery, element_at, element_sequence,
    panchang_batch, panchang_report,
};
use panchang_time::CivilTime;
use panchang_vedic::GeoLocation;

// 2025-06-29 06:30 UT.
const JD: f64 = 2_460_855.770_833_3;

fn query(day: u32) -> PanchangQuery {
    PanchangQuery::new(
        CivilTime::new(2025, 6, day, 12, 0, 0.0, 330).expect("valid instant"),
        GeoLocation::new(13.0827, 80.2707, 0.0).expect("valid location"),
    )
}

fn element_bench(c: &mut Criterion) {
    let cfg = PanchangConfig::default();

    let mut group = c.benchmark_group("element_search");
    group.bench_function("tithi_at", |b| {
        b.iter(|| element_at(ElementKind::Tithi, black_box(JD), &cfg))
    });
    group.bench_function("nakshatra_at", |b| {
        b.iter(|| element_at(ElementKind::Nakshatra, black_box(JD), &cfg))
    });
    group.bench_function("karana_sequence_4", |b| {
        b.iter(|| element_sequence(ElementKind::Karana, black_box(JD), 4, &cfg))
    });
    group.finish();
}

fn report_bench(c: &mut Criterion) {
    let cfg = PanchangConfig::default();
    let q = query(29);

    let mut group = c.benchmark_group("panchang_report");
    group.sample_size(20);
    group.bench_function("uncached", |b| b.iter(|| panchang_report(black_box(&q), &cfg)));

    let cache = PanchangCache::with_default_capacity(cfg);
    group.bench_function("cached_hit", |b| b.iter(|| cache.report(black_box(&q))));

    let month: Vec<PanchangQuery> = (1..=30).map(query).collect();
    group.bench_function("batch_30_days_4_threads", |b| {
        b.iter(|| panchang_batch(black_box(&month), &cfg, 4))
    });
    group.finish();
}

criterion_group!(benches, element_bench, report_bench);
criterion_main!(benches);
