//! Initial-condition generators.
//!
//! Seeded with an explicit `u64` everywhere, rather than OS entropy, so a
//! run is fully reproducible from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::field::Field;

/// Fill every cell with the constant `value`.
pub fn uniform(width: usize, height: usize, value: f32) -> Field {
    let mut field = Field::zeros(width, height);
    for y in 0..height {
        for x in 0..width {
            field.set(x, y, value);
        }
    }
    field
}

/// Fill every cell independently and uniformly in `[0, 1)`.
pub fn random(width: usize, height: usize, seed: u64) -> Field {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = Field::zeros(width, height);
    for y in 0..height {
        for x in 0..width {
            field.set(x, y, rng.random::<f32>());
        }
    }
    field
}

/// Paint roughly `W*H / (2*ra)^2` filled disks at random centers, each
/// with an independent uniform radius in `[0.5*ra, ra]`, wrapping at the
/// field's edges (unlike [`Field::draw_disk`], which does not wrap).
pub fn splat(width: usize, height: usize, seed: u64, ra: f64) -> Field {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = Field::zeros(width, height);
    let count = ((width * height) as f64 / (2.0 * ra).powi(2)).round().max(1.0) as usize;
    for _ in 0..count {
        let cx = rng.random_range(0..width) as f64;
        let cy = rng.random_range(0..height) as f64;
        let r = rng.random_range((0.5 * ra)..=ra);
        draw_disk_wrapped(&mut field, cx, cy, r);
    }
    field
}

fn draw_disk_wrapped(field: &mut Field, cx: f64, cy: f64, r: f64) {
    let width = field.width() as i64;
    let height = field.height() as i64;
    let span = r.ceil() as i64 + 1;
    let icx = cx as i64;
    let icy = cy as i64;
    for dy in -span..=span {
        for dx in -span..=span {
            let ddx = dx as f64 + 0.5 - (cx - icx as f64);
            let ddy = dy as f64 + 0.5 - (cy - icy as f64);
            if ddx.hypot(ddy) > r {
                continue;
            }
            let x = (icx + dx).rem_euclid(width) as usize;
            let y = (icy + dy).rem_euclid(height) as usize;
            field.set(x, y, 1.0);
        }
    }
}

/// Sparse single-cell seeding followed by a few rounds of probabilistic
/// 4-neighbor propagation, producing a scattered, irregular starting
/// pattern rather than the hard-edged disks [`splat`] paints.
pub fn propagate(width: usize, height: usize, seed: u64) -> Field {
    const SEED_PROBABILITY: f64 = 0.01;
    const PROPAGATION_ROUNDS: usize = 5;
    const PROPAGATION_PROBABILITY: f64 = 0.3;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = Field::zeros(width, height);
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(SEED_PROBABILITY) {
                field.set(x, y, 1.0);
            }
        }
    }

    for _ in 0..PROPAGATION_ROUNDS {
        let mut next = field.clone();
        for y in 0..height {
            for x in 0..width {
                if field.get(x, y) > 0.0 {
                    continue;
                }
                let alive_neighbor = [
                    field.get_wrapped(x as i64 - 1, y as i64),
                    field.get_wrapped(x as i64 + 1, y as i64),
                    field.get_wrapped(x as i64, y as i64 - 1),
                    field.get_wrapped(x as i64, y as i64 + 1),
                ]
                .into_iter()
                .any(|v| v > 0.0);
                if alive_neighbor && rng.random_bool(PROPAGATION_PROBABILITY) {
                    next.set(x, y, 1.0);
                }
            }
        }
        field = next;
    }

    field
}
