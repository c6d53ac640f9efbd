use crate::context::GraphicsContext;
use crate::error::{Error, clip_diagnostic};
use crate::mesh::{PrimitiveKind, VertexLayout};

use super::{ShaderStage, StageKind};

/// A linked, drawable shader program.
///
/// Linking consumes its stages: their compiled modules are not needed once
/// the pipeline exists and are released on return, on the success and the
/// failure path alike. A `ShaderProgram` value is always in the linked
/// state; link failure returns [`Error::Link`] and the partially built
/// pipeline handle is dropped, never leaked.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Links one vertex and one fragment stage into a program.
    ///
    /// Stage roles are paired by kind, not by position in `stages`. The
    /// vertex layout and primitive interpretation are fixed at link time
    /// (the pipeline bakes them in), which is what lets a draw call bind
    /// the program and the mesh without re-declaring attribute state.
    pub fn link(
        ctx: &GraphicsContext,
        stages: Vec<ShaderStage>,
        layout: &VertexLayout,
        primitive: PrimitiveKind,
    ) -> Result<Self, Error> {
        let kinds: Vec<StageKind> = stages.iter().map(ShaderStage::kind).collect();
        let (vertex, fragment) = pick_roles(&kinds).map_err(|log| {
            log::error!("program link failed: {log}");
            Error::Link { log }
        })?;

        let device = ctx.device();
        let attributes = layout.wgpu_attributes();
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: layout.stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &attributes,
        }];

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint program layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint program"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: stages[vertex].module(),
                entry_point: None,
                compilation_options: Default::default(),
                buffers: &buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: stages[fragment].module(),
                entry_point: None,
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: primitive.topology(),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        // Stages drop on return from here on: their modules are attached to
        // the pipeline (or discarded with it) and no longer needed.
        match pollster::block_on(scope.pop()) {
            Some(err) => {
                let log = clip_diagnostic(&err.to_string());
                log::error!("program link failed:\n{log}");
                Err(Error::Link { log })
            }
            None => Ok(Self { pipeline }),
        }
    }

    /// Makes this program current for subsequent draw calls on the pass.
    ///
    /// Rebinding an already-bound program is allowed and never errors.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
    }
}

/// Selects the vertex- and fragment-role stages from an ordered sequence,
/// by kind rather than position.
fn pick_roles(kinds: &[StageKind]) -> Result<(usize, usize), String> {
    let vertex = kinds.iter().position(|k| *k == StageKind::Vertex);
    let fragment = kinds.iter().position(|k| *k == StageKind::Fragment);

    match (vertex, fragment) {
        (Some(v), Some(f)) => Ok((v, f)),
        (None, _) => Err("link requires a vertex stage".to_string()),
        (_, None) => Err("link requires a fragment stage".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── role pairing ──────────────────────────────────────────────────────

    #[test]
    fn pairing_is_order_independent() {
        assert_eq!(
            pick_roles(&[StageKind::Vertex, StageKind::Fragment]),
            Ok((0, 1))
        );
        assert_eq!(
            pick_roles(&[StageKind::Fragment, StageKind::Vertex]),
            Ok((1, 0))
        );
    }

    #[test]
    fn missing_vertex_stage_is_reported() {
        let err = pick_roles(&[StageKind::Fragment]).unwrap_err();
        assert!(err.contains("vertex"));
    }

    #[test]
    fn missing_fragment_stage_is_reported() {
        let err = pick_roles(&[StageKind::Vertex, StageKind::Vertex]).unwrap_err();
        assert!(err.contains("fragment"));
    }

    #[test]
    fn first_stage_of_each_kind_wins() {
        let kinds = [
            StageKind::Fragment,
            StageKind::Vertex,
            StageKind::Fragment,
            StageKind::Vertex,
        ];
        assert_eq!(pick_roles(&kinds), Ok((1, 0)));
    }
}
