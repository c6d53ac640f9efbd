//! Shader compilation and program linking.
//!
//! A [`ShaderStage`] is one compiled WGSL unit (vertex or fragment); a
//! [`ShaderProgram`] is the linked, drawable combination. Both constructors
//! capture the driver's validation diagnostics verbatim on failure, so a
//! value of either type only ever exists in its usable state: there is no
//! partially compiled stage or unlinked program to misuse.

mod program;
mod stage;

pub use program::ShaderProgram;
pub use stage::{ShaderStage, StageKind};
