use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pitch_visualizer::{
    detector::{autocorrelation::AutocorrelationDetector, PeriodDetector},
    utils::peak::{first_max, first_min},
};

pub fn utils_benchmark(c: &mut Criterion) {
    let v = (0..1024)
        .into_iter()
        .map(|v| ((v as f64) / PI / 30.).sin())
        .collect::<Vec<f64>>();
    let vv = v.as_slice();

    c.bench_function("first_min", |b| b.iter(|| first_min(black_box(vv))));
    c.bench_function("first_max", |b| b.iter(|| first_max(black_box(vv))));
}

pub fn period_detect_benchmark(c: &mut Criterion) {
    const SAMPLE_RATE: usize = 16000;
    // About the length of a recorded phoneme.
    const SIZE: usize = 4096;

    // Signal coming from some source (microphone, generated, etc...)
    let dt = 1.0 / SAMPLE_RATE as f64;
    let freq = 150.0;
    let signal: Vec<f64> = (0..SIZE)
        .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
        .collect();

    let mut autocorrelation_detector = AutocorrelationDetector::new(SIZE);

    c.bench_function("Autocorrelation get_period", |b| {
        b.iter(|| {
            autocorrelation_detector
                .get_period(black_box(&signal), SAMPLE_RATE)
                .unwrap()
        });
    });
}

criterion_group!(benches, period_detect_benchmark, utils_benchmark);
criterion_main!(benches);
