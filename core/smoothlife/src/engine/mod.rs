//! Execution engine: the per-generation step driver and the frame ring
//! buffer that hands finished generations to a consumer thread.

pub mod ring;
pub mod step;

pub use ring::FrameRingBuffer;
pub use step::{ComputeHalf, StepDriver};
