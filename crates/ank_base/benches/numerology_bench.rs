use ank_base::{
    MasterPolicy, abracadabra, behavior_fractal, individual_numbers_at, parse_birth_date,
    pythagorean_square, reduce, shadows_peaks_challenges,
};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn reduction_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");
    group.bench_function("none_i64_max", |b| {
        b.iter(|| reduce(black_box(i64::MAX), MasterPolicy::None))
    });
    group.bench_function("standard_2049", |b| {
        b.iter(|| reduce(black_box(2049), MasterPolicy::Standard))
    });
    group.finish();
}

fn date_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("date");
    group.bench_function("parse_dotted", |b| {
        b.iter(|| parse_birth_date(black_box("15.03.1990")))
    });
    group.bench_function("parse_iso_with_time", |b| {
        b.iter(|| parse_birth_date(black_box("1990-03-15T08:30:00Z")))
    });
    group.finish();
}

fn derived_bench(c: &mut Criterion) {
    let target = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap_or_default();

    let mut group = c.benchmark_group("derived");
    group.bench_function("behavior_fractal", |b| {
        b.iter(|| behavior_fractal(black_box("15.03.1990")))
    });
    group.bench_function("life_cycle_table", |b| {
        b.iter(|| shadows_peaks_challenges(black_box("15.03.1990")))
    });
    group.bench_function("individual_numbers", |b| {
        b.iter(|| individual_numbers_at(black_box("15.03.1990"), target, None))
    });
    group.bench_function("pythagorean_square", |b| {
        b.iter(|| pythagorean_square(black_box("15.03.1990")))
    });
    group.bench_function("abracadabra", |b| {
        b.iter(|| abracadabra(black_box("Alexander"), black_box("Pushkin")))
    });
    group.finish();
}

criterion_group!(benches, reduction_bench, date_bench, derived_bench);
criterion_main!(benches);
