use wgpu::util::DeviceExt;

use crate::context::GraphicsContext;
use crate::error::{Error, clip_diagnostic};

use super::VertexLayout;

/// An immutable GPU vertex buffer and its attribute layout.
///
/// Upload is write-once: the vertex data is copied to GPU memory exactly
/// once and never rewritten. The layout travels with the buffer from the
/// moment of upload, so attribute state can never be declared against the
/// wrong buffer or in the wrong order. Buffer memory is released when the
/// mesh is dropped; single owner, single release site.
pub struct StaticMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    layout: VertexLayout,
}

impl StaticMesh {
    /// Copies `vertices` into GPU-resident storage.
    ///
    /// `V` must match the layout: one `V` per vertex, `size_of::<V>()`
    /// equal to the layout stride. Allocation failures (device OOM or an
    /// inconsistent layout) surface as [`Error::GpuAllocation`].
    pub fn upload<V: bytemuck::Pod>(
        ctx: &GraphicsContext,
        vertices: &[V],
        layout: VertexLayout,
    ) -> Result<Self, Error> {
        layout.check().map_err(|reason| {
            log::error!("mesh upload rejected: {reason}");
            Error::GpuAllocation { reason }
        })?;

        let vertex_size = std::mem::size_of::<V>() as u64;
        if vertex_size != layout.stride() {
            let reason = format!(
                "vertex type is {vertex_size} bytes but the layout stride is {}",
                layout.stride()
            );
            log::error!("mesh upload rejected: {reason}");
            return Err(Error::GpuAllocation { reason });
        }

        let device = ctx.device();

        let oom_scope = device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        let validation_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint static mesh"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let validation = pollster::block_on(validation_scope.pop());
        let oom = pollster::block_on(oom_scope.pop());

        if let Some(err) = oom.or(validation) {
            let reason = clip_diagnostic(&err.to_string());
            log::error!("mesh upload failed:\n{reason}");
            return Err(Error::GpuAllocation { reason });
        }

        Ok(Self {
            buffer,
            vertex_count: vertices.len() as u32,
            layout,
        })
    }

    /// Issues a draw covering every vertex in the mesh.
    ///
    /// Precondition: a successfully linked [`crate::shader::ShaderProgram`]
    /// whose layout matches this mesh is bound on `pass`. Drawing without
    /// one is undefined at the GPU level and is not guarded here.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }
}
