/// How a vertex stream is assembled into primitives.
///
/// Fixed at program link time (the pipeline bakes the topology in), so a
/// draw call only ever supplies vertices.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrimitiveKind {
    PointList,
    LineList,
    LineStrip,
    TriangleList,
    TriangleStrip,
}

impl PrimitiveKind {
    pub(crate) fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            PrimitiveKind::PointList => wgpu::PrimitiveTopology::PointList,
            PrimitiveKind::LineList => wgpu::PrimitiveTopology::LineList,
            PrimitiveKind::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            PrimitiveKind::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            PrimitiveKind::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }
}
