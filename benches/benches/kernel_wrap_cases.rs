//! Stencil kernel wrap-case cost.
//!
//! Compares the cost of the fast vectorizable wrap cases (interior, one
//! edge wrapped) against the scalar corner fallback.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use smoothlife::kernel::fill;
use smoothlife::{Field, MaskFamily, Ruleset};

const SIZE: usize = 128;

fn bench_positions(c: &mut Criterion) {
    let rules = Ruleset::smooth_life_l(SIZE, SIZE);
    let annulus = MaskFamily::annulus(rules.ra(), rules.ri());
    let mut field = Field::zeros(SIZE, SIZE);
    for y in 0..SIZE {
        for x in 0..SIZE {
            field.set(x, y, ((x * 7 + y * 13) % 11) as f32 / 10.0);
        }
    }

    let mut group = c.benchmark_group("kernel-wrap-cases");

    let positions = [
        ("interior", (SIZE / 2, SIZE / 2)),
        ("top-edge", (SIZE / 2, 0)),
        ("bottom-edge", (SIZE / 2, SIZE - 1)),
        ("left-edge", (0, SIZE / 2)),
        ("right-edge", (SIZE - 1, SIZE / 2)),
        ("corner", (0, 0)),
    ];

    for (name, (x, y)) in positions {
        group.bench_function(name, |b| {
            b.iter(|| black_box(fill(&field, x, y, &annulus)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
