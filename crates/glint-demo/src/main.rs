//! Hardcoded-triangle demo.
//!
//! Supplies every configuration constant the engine treats as external:
//! window size and title, shader source text, the vertex data and its
//! layout, the clear color, and the close key. Startup failures map to
//! distinct process exit codes via [`Error::exit_code`]; a normal window
//! close exits 0.

use std::process::ExitCode;

use bytemuck::{Pod, Zeroable};

use glint_engine::Error;
use glint_engine::context::{ContextConfig, GraphicsContext};
use glint_engine::input::Key;
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::mesh::{PrimitiveKind, StaticMesh, VertexFormat, VertexLayout};
use glint_engine::runloop::RenderLoop;
use glint_engine::shader::{ShaderProgram, ShaderStage, StageKind};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "glint triangle";

const VERTEX_SHADER: &str = include_str!("shaders/triangle.vert.wgsl");
const FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag.wgsl");

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
}

const TRIANGLE: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5, 0.0] },
    Vertex { position: [0.5, -0.5, 0.0] },
    Vertex { position: [0.0, 0.5, 0.0] },
];

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), Error> {
    let mut ctx = GraphicsContext::create(ContextConfig {
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
        title: WINDOW_TITLE.to_string(),
        close_key: Key::Escape,
        gpu: Default::default(),
    })?;

    let vertex = ShaderStage::compile(&ctx, StageKind::Vertex, VERTEX_SHADER)?;
    let fragment = ShaderStage::compile(&ctx, StageKind::Fragment, FRAGMENT_SHADER)?;

    let layout = VertexLayout::single(VertexFormat::Float32x3);
    let program = ShaderProgram::link(
        &ctx,
        vec![vertex, fragment],
        &layout,
        PrimitiveKind::TriangleList,
    )?;

    let mesh = StaticMesh::upload(&ctx, &TRIANGLE, layout)?;

    RenderLoop::new(CLEAR_COLOR).run(&mut ctx, &program, &mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_matches_declared_layout() {
        let layout = VertexLayout::single(VertexFormat::Float32x3);
        assert_eq!(std::mem::size_of::<Vertex>() as u64, layout.stride());
        assert_eq!(TRIANGLE.len(), 3);
    }

    #[test]
    fn shader_sources_are_embedded() {
        assert!(VERTEX_SHADER.contains("@vertex"));
        assert!(FRAGMENT_SHADER.contains("@fragment"));
    }
}
