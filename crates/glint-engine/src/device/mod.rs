//! GPU device + surface management.
//!
//! Responsible for:
//! - acquiring the wgpu Instance/Adapter/Device/Queue against a window
//! - configuring the surface (swapchain) and tracking its size
//! - acquiring frames and presenting them

mod gpu;
mod init;

pub use gpu::{Frame, Gpu, SurfaceErrorAction};
pub use init::GpuInit;
