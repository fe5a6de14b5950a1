//! Time subsystem.
//!
//! Wall-clock frame timing for presentation effects (entrance transitions).
//! The hero mesh rotation is deliberately frame-coupled and does not read
//! from here.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
