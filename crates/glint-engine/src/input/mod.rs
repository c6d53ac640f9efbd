//! Input subsystem.
//!
//! The public API is platform-agnostic and does not expose winit types;
//! the context layer translates platform events into these values. The
//! core interprets exactly one configured close key; everything else is
//! surfaced to the caller untouched.

mod platform;
mod types;

pub use types::{Key, KeyEvent};

pub(crate) use platform::map_physical_key;
