//! # smoothlife
//!
//! A continuous generalization of Conway's Game of Life: a toroidal 2-D
//! field of `f32` cell values evolves under an area-weighted convolution
//! against an inner disk and a surrounding annulus, passed through a
//! smooth (or, in discrete mode, hard) threshold transition.
//!
//! ```rust
//! use smoothlife::{init, Ruleset, StepDriver};
//!
//! let rules = Ruleset::smooth_life_l(64, 64);
//! let initial = init::random(rules.width(), rules.height(), 42);
//! let mut driver = StepDriver::new(&rules, 4, initial);
//!
//! for _ in 0..10 {
//!     driver.step();
//! }
//! ```

mod engine;
mod field;
pub mod init;
pub mod kernel;
mod mask;
mod ruleset;
mod transition;
mod types;

pub use engine::{ComputeHalf, FrameRingBuffer, StepDriver};
pub use field::{Field, CACHELINE_FLOATS, CACHELINE_SIZE};
pub use mask::{Mask, MaskFamily, K};
pub use ruleset::Ruleset;
pub use transition::{discrete_step, euler_step, s, s_prime, sigma1, sigma2, sigma_m};
pub use types::{ConfigError, DimensionMismatchError};
