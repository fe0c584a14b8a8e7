//! Step driver throughput benchmarks.
//!
//! Wall-clock per `step()` call at several field sizes and both
//! discrete/continuous modes. Each iteration drains the ring buffer's
//! queue immediately after stepping so the producer never hits
//! backpressure mid-measurement.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use smoothlife::{init, Field, Ruleset, StepDriver};

fn step_and_drain(driver: &mut StepDriver<'_>, scratch: &mut Field) {
    black_box(driver.step());
    driver.ring().pop(scratch);
}

fn bench_continuous(c: &mut Criterion) {
    let mut group = c.benchmark_group("step-continuous");

    for size in [64_usize, 128, 256] {
        let rules = Ruleset::smooth_life_l(size, size);
        let initial = init::random(size, size, 0x5EED);
        let mut driver = StepDriver::new(&rules, 4, initial);
        let mut scratch = Field::zeros(size, size);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| step_and_drain(&mut driver, &mut scratch));
        });
    }
    group.finish();
}

fn bench_discrete(c: &mut Criterion) {
    let mut group = c.benchmark_group("step-discrete");

    for size in [64_usize, 128, 256] {
        let rules = Ruleset::new(
            size, size, 20.0, 3.0, 0.257, 0.336, 0.365, 0.549, 0.147, 0.028, 0.1, true,
        )
        .expect("preset-derived ruleset is valid");
        let initial = init::random(size, size, 0x5EED);
        let mut driver = StepDriver::new(&rules, 4, initial);
        let mut scratch = Field::zeros(size, size);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| step_and_drain(&mut driver, &mut scratch));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_continuous, bench_discrete);
criterion_main!(benches);
