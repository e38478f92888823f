use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luna_core::AnalyticEphemeris;
use luna_phase::{
    DEFAULT_SAMPLES, DISK_RADIUS, ObserverConfig, build_lit_region_polygon, compute_observation,
    observations_for_range,
};
use luna_time::CivilDate;

fn observation_bench(c: &mut Criterion) {
    let date = CivilDate::new(2024, 1, 26).unwrap();
    let config = ObserverConfig::seoul();

    let mut group = c.benchmark_group("observation");
    group.bench_function("compute_observation", |b| {
        b.iter(|| compute_observation(black_box(&AnalyticEphemeris), black_box(date), &config))
    });
    group.sample_size(20);
    group.bench_function("observations_for_range_30d", |b| {
        b.iter(|| observations_for_range(&AnalyticEphemeris, black_box(date), 30, &config))
    });
    group.finish();
}

fn polygon_bench(c: &mut Criterion) {
    c.bench_function("build_lit_region_polygon", |b| {
        b.iter(|| {
            build_lit_region_polygon(
                black_box(37.5),
                black_box(true),
                DISK_RADIUS,
                DEFAULT_SAMPLES,
            )
        })
    });
}

criterion_group!(benches, observation_bench, polygon_bench);
criterion_main!(benches);
