//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per presented frame.
//! There is no frame-rate limiting anywhere in the engine; the clock
//! only observes.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
