//! Shared coordinate types.
//!
//! The engine works in physical pixels throughout: the viewport is the
//! drawable region in physical pixels and always mirrors the last size
//! the windowing backend reported.

mod viewport;

pub use viewport::Viewport;
