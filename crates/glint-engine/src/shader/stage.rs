use std::fmt;

use crate::context::GraphicsContext;
use crate::error::{Error, clip_diagnostic};

/// Role of a shader stage within a program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Vertex => f.write_str("vertex"),
            StageKind::Fragment => f.write_str("fragment"),
        }
    }
}

/// One successfully compiled shader unit.
///
/// Compilation failure never produces a `ShaderStage`; it produces
/// [`Error::Compile`] carrying the stage kind and the verbatim diagnostic
/// log. The compiled module is released when the stage is dropped,
/// typically by [`super::ShaderProgram::link`], which consumes its stages.
pub struct ShaderStage {
    kind: StageKind,
    module: wgpu::ShaderModule,
}

impl ShaderStage {
    /// Compiles WGSL source text for the given stage.
    ///
    /// The module must contain exactly one entry point for its stage; the
    /// program selects it at link time. Diagnostics are captured through a
    /// validation error scope, logged at error level, and returned in
    /// [`Error::Compile`]. A failed compile leaves no usable handle behind.
    pub fn compile(ctx: &GraphicsContext, kind: StageKind, source: &str) -> Result<Self, Error> {
        let device = ctx.device();

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(match kind {
                StageKind::Vertex => "glint vertex stage",
                StageKind::Fragment => "glint fragment stage",
            }),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            let log = clip_diagnostic(&err.to_string());
            log::error!("{kind} shader compilation failed:\n{log}");
            return Err(Error::Compile { stage: kind, log });
        }

        Ok(Self { kind, module })
    }

    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub(crate) fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_kinds_display_their_role() {
        assert_eq!(StageKind::Vertex.to_string(), "vertex");
        assert_eq!(StageKind::Fragment.to_string(), "fragment");
    }
}
