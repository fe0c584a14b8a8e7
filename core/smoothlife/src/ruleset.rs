//! Immutable simulation parameters.

use crate::types::ConfigError;

/// Immutable rule parameters for one simulation run.
///
/// Every field is set once at construction and never mutated afterward;
/// `Ruleset` and the [`crate::mask::MaskFamily`] built from it are freely
/// shared (by reference) across the compute and consumer threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruleset {
    width: usize,
    height: usize,
    ra: f64,
    rr: f64,
    b1: f64,
    b2: f64,
    d1: f64,
    d2: f64,
    alpha_m: f64,
    alpha_n: f64,
    dt: f64,
    discrete: bool,
}

impl Ruleset {
    /// Construct a ruleset, validating that every numeric parameter is
    /// strictly positive.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the first non-positive field found.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: usize,
        height: usize,
        ra: f64,
        rr: f64,
        b1: f64,
        b2: f64,
        d1: f64,
        d2: f64,
        alpha_m: f64,
        alpha_n: f64,
        dt: f64,
        discrete: bool,
    ) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::new("width", width as f64));
        }
        if height == 0 {
            return Err(ConfigError::new("height", height as f64));
        }
        for (name, value) in [
            ("ra", ra),
            ("rr", rr),
            ("b1", b1),
            ("b2", b2),
            ("d1", d1),
            ("d2", d2),
            ("alpha_m", alpha_m),
            ("alpha_n", alpha_n),
            ("dt", dt),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::new(name, value));
            }
        }
        Ok(Self {
            width,
            height,
            ra,
            rr,
            b1,
            b2,
            d1,
            d2,
            alpha_m,
            alpha_n,
            dt,
            discrete,
        })
    }

    /// `smooth_life_l` preset: the canonical SmoothLife "L" rule.
    #[must_use]
    pub fn smooth_life_l(width: usize, height: usize) -> Self {
        // Validated literals; safe to discard the `Result`.
        Self::new(
            width, height, 20.0, 3.0, 0.257, 0.336, 0.365, 0.549, 0.147, 0.028, 0.1, false,
        )
        .unwrap_or_else(|e| unreachable!("smooth_life_l preset is always valid: {e}"))
    }

    /// `rafler_paper` preset, from Stephan Rafler's original paper.
    #[must_use]
    pub fn rafler_paper(width: usize, height: usize) -> Self {
        Self::new(
            width, height, 21.0, 3.0, 0.278, 0.365, 0.267, 0.445, 0.147, 0.028, 0.05, false,
        )
        .unwrap_or_else(|e| unreachable!("rafler_paper preset is always valid: {e}"))
    }

    /// Inner-disk radius, derived: `ri = ra / rr`.
    #[must_use]
    pub fn ri(&self) -> f64 {
        self.ra / self.rr
    }

    /// Field width `W`.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Field height `H`.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Outer (annulus) radius `ra`.
    #[must_use]
    pub const fn ra(&self) -> f64 {
        self.ra
    }

    /// Radius ratio `rr` (`ri = ra / rr`).
    #[must_use]
    pub const fn rr(&self) -> f64 {
        self.rr
    }

    /// Birth lower threshold.
    #[must_use]
    pub const fn b1(&self) -> f64 {
        self.b1
    }

    /// Birth upper threshold.
    #[must_use]
    pub const fn b2(&self) -> f64 {
        self.b2
    }

    /// Death lower threshold.
    #[must_use]
    pub const fn d1(&self) -> f64 {
        self.d1
    }

    /// Death upper threshold.
    #[must_use]
    pub const fn d2(&self) -> f64 {
        self.d2
    }

    /// Sharpness of the inner-disk mixing sigmoid, `αₘ`.
    #[must_use]
    pub const fn alpha_m(&self) -> f64 {
        self.alpha_m
    }

    /// Sharpness of the annulus threshold sigmoids, `αₙ`.
    #[must_use]
    pub const fn alpha_n(&self) -> f64 {
        self.alpha_n
    }

    /// Euler integration time step.
    #[must_use]
    pub const fn dt(&self) -> f64 {
        self.dt
    }

    /// `true` for discrete (direct-replacement) mode, `false` for
    /// continuous (Euler-integrated) mode.
    #[must_use]
    pub const fn discrete(&self) -> bool {
        self.discrete
    }
}
