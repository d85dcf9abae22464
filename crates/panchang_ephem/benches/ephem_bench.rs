use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_ephem::{lunar_position, nutation, solar_position};
use panchang_time::{CivilTime, gmst_deg, jd_ut_to_tt};

fn position_bench(c: &mut Criterion) {
    let jd_tt = 2_460_856.0;

    let mut group = c.benchmark_group("positions");
    group.bench_function("solar_position", |b| {
        b.iter(|| solar_position(black_box(jd_tt)))
    });
    group.bench_function("lunar_position", |b| {
        b.iter(|| lunar_position(black_box(jd_tt)))
    });
    group.bench_function("nutation", |b| b.iter(|| nutation(black_box(0.25))));
    group.finish();
}

fn time_bench(c: &mut Criterion) {
    let t = CivilTime::new(2025, 6, 29, 12, 0, 0.0, 330).expect("valid instant");

    let mut group = c.benchmark_group("time");
    group.bench_function("civil_to_jd", |b| b.iter(|| black_box(&t).to_jd_ut()));
    group.bench_function("jd_ut_to_tt", |b| {
        b.iter(|| jd_ut_to_tt(black_box(2_460_856.0)))
    });
    group.bench_function("gmst", |b| b.iter(|| gmst_deg(black_box(2_460_856.0))));
    group.finish();
}

criterion_group!(benches, position_bench, time_bench);
criterion_main!(benches);
