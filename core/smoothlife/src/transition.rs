//! Smooth threshold and state transition functions.
//!
//! All functions operate on plain `f64` scalars; the ruleset's sharpness
//! and threshold parameters are passed explicitly rather than captured
//! from hidden state, so these remain simple, independently testable pure
//! functions.

/// Logistic threshold: `1 / (1 + exp(-4(x - a) / alpha))`.
#[must_use]
pub fn sigma1(x: f64, a: f64, alpha: f64) -> f64 {
    1.0 / (1.0 + (-4.0 * (x - a) / alpha).exp())
}

/// Interval membership via two logistic thresholds: high near `a`, low
/// near `b`, smoothly zero outside `[a, b]`.
#[must_use]
pub fn sigma2(x: f64, a: f64, b: f64, alpha_n: f64) -> f64 {
    sigma1(x, a, alpha_n) * (1.0 - sigma1(x, b, alpha_n))
}

/// Mixes `x` and `y` by the inner-disk filling `m`, switching smoothly at
/// `m = 0.5` with sharpness `alpha_m`.
#[must_use]
pub fn sigma_m(x: f64, y: f64, m: f64, alpha_m: f64) -> f64 {
    let blend = sigma1(m, 0.5, alpha_m);
    x * (1.0 - blend) + y * blend
}

/// Continuous state transition `s(n, m) in [0, 1]`: the birth/death
/// interval selected by `m`, continuously in `n`.
#[must_use]
pub fn s(n: f64, m: f64, b1: f64, b2: f64, d1: f64, d2: f64, alpha_m: f64, alpha_n: f64) -> f64 {
    let birth = sigma2(n, b1, b2, alpha_n);
    let death = sigma2(n, d1, d2, alpha_n);
    sigma_m(birth, death, m, alpha_m)
}

/// Signed drive `s'(n, m) = 2*s(n, m) - 1 in [-1, 1]`, used by the Euler
/// update.
#[must_use]
pub fn s_prime(n: f64, m: f64, b1: f64, b2: f64, d1: f64, d2: f64, alpha_m: f64, alpha_n: f64) -> f64 {
    2.0 * s(n, m, b1, b2, d1, d2, alpha_m, alpha_n) - 1.0
}

/// Forward-Euler update of one cell's value: `clamp(value + dt * s'(n, m), 0, 1)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn euler_step(
    value: f64,
    n: f64,
    m: f64,
    b1: f64,
    b2: f64,
    d1: f64,
    d2: f64,
    alpha_m: f64,
    alpha_n: f64,
    dt: f64,
) -> f64 {
    (value + dt * s_prime(n, m, b1, b2, d1, d2, alpha_m, alpha_n)).clamp(0.0, 1.0)
}

/// Discrete (direct-replacement) transition: the obvious two-threshold
/// piecewise rule, `1.0` if the annulus filling `n` falls in the
/// birth/death interval selected by whether the inner-disk filling `m` is
/// above or below `0.5`, else `0.0`.
#[must_use]
pub fn discrete_step(n: f64, m: f64, b1: f64, b2: f64, d1: f64, d2: f64) -> f64 {
    let alive = if m <= 0.5 {
        n >= b1 && n <= b2
    } else {
        n >= d1 && n <= d2
    };
    f64::from(u8::from(alive))
}
