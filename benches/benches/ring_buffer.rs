//! Frame ring buffer push/pop throughput.
//!
//! Measures both the empty-queue fast path and push/pop performance when
//! the queue is kept at capacity (worst-case backpressure).

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use smoothlife::{Field, FrameRingBuffer};

const SIZE: usize = 64;

fn bench_push_pop_empty_queue(c: &mut Criterion) {
    let ring = FrameRingBuffer::new(8, Field::zeros(SIZE, SIZE));
    let mut dst = Field::zeros(SIZE, SIZE);

    c.bench_function("ring-push-then-pop", |b| {
        b.iter(|| {
            black_box(ring.push());
            black_box(ring.pop(&mut dst));
        });
    });
}

fn bench_push_at_capacity(c: &mut Criterion) {
    let ring = FrameRingBuffer::new(2, Field::zeros(SIZE, SIZE));
    ring.push();
    ring.push();

    c.bench_function("ring-push-backpressure", |b| {
        b.iter(|| black_box(ring.push()));
    });
}

criterion_group!(benches, bench_push_pop_empty_queue, bench_push_at_capacity);
criterion_main!(benches);
