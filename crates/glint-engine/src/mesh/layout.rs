/// Per-component format of one vertex attribute.
///
/// Component count, component type, and normalization are encoded together,
/// matching how the GPU API expresses them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VertexFormat {
    Float32,
    Float32x2,
    Float32x3,
    Float32x4,
    /// Four unsigned bytes normalized to [0, 1]; common for packed colors.
    Unorm8x4,
}

impl VertexFormat {
    /// Size of one attribute of this format, in bytes.
    pub const fn size(self) -> u64 {
        match self {
            VertexFormat::Float32 => 4,
            VertexFormat::Float32x2 => 8,
            VertexFormat::Float32x3 => 12,
            VertexFormat::Float32x4 => 16,
            VertexFormat::Unorm8x4 => 4,
        }
    }

    pub(crate) fn to_wgpu(self) -> wgpu::VertexFormat {
        match self {
            VertexFormat::Float32 => wgpu::VertexFormat::Float32,
            VertexFormat::Float32x2 => wgpu::VertexFormat::Float32x2,
            VertexFormat::Float32x3 => wgpu::VertexFormat::Float32x3,
            VertexFormat::Float32x4 => wgpu::VertexFormat::Float32x4,
            VertexFormat::Unorm8x4 => wgpu::VertexFormat::Unorm8x4,
        }
    }
}

/// One attribute slot: where in the vertex it lives and what it holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    /// Shader input location.
    pub slot: u32,
    pub format: VertexFormat,
    /// Byte offset within one vertex.
    pub offset: u64,
}

/// How a vertex buffer's bytes map to shader inputs.
///
/// Pure value that owns no GPU state. Captured by [`super::StaticMesh`] at
/// upload and baked into the program's pipeline at link.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexLayout {
    stride: u64,
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    pub fn new(stride: u64, attributes: Vec<VertexAttribute>) -> Self {
        Self { stride, attributes }
    }

    /// Layout with a single attribute at slot 0, offset 0, tightly packed.
    pub fn single(format: VertexFormat) -> Self {
        Self {
            stride: format.size(),
            attributes: vec![VertexAttribute {
                slot: 0,
                format,
                offset: 0,
            }],
        }
    }

    /// Distance between consecutive vertices, in bytes.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Verifies internal consistency: a non-zero stride, every attribute
    /// contained within it, and no duplicate slots.
    pub fn check(&self) -> Result<(), String> {
        if self.stride == 0 {
            return Err("vertex stride must be non-zero".to_string());
        }

        for attr in &self.attributes {
            let end = attr.offset + attr.format.size();
            if end > self.stride {
                return Err(format!(
                    "attribute at slot {} ends at byte {end}, past the {}-byte stride",
                    attr.slot, self.stride
                ));
            }
        }

        for (i, attr) in self.attributes.iter().enumerate() {
            if self.attributes[i + 1..].iter().any(|a| a.slot == attr.slot) {
                return Err(format!("attribute slot {} declared twice", attr.slot));
            }
        }

        Ok(())
    }

    pub(crate) fn wgpu_attributes(&self) -> Vec<wgpu::VertexAttribute> {
        self.attributes
            .iter()
            .map(|a| wgpu::VertexAttribute {
                format: a.format.to_wgpu(),
                offset: a.offset,
                shader_location: a.slot,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── formats ───────────────────────────────────────────────────────────

    #[test]
    fn format_sizes() {
        assert_eq!(VertexFormat::Float32.size(), 4);
        assert_eq!(VertexFormat::Float32x3.size(), 12);
        assert_eq!(VertexFormat::Unorm8x4.size(), 4);
    }

    // ── layout checks ─────────────────────────────────────────────────────

    #[test]
    fn position_triple_layout_is_consistent() {
        // One 3-float attribute at slot 0, stride 12, offset 0.
        let layout = VertexLayout::single(VertexFormat::Float32x3);
        assert_eq!(layout.stride(), 12);
        assert_eq!(layout.attributes().len(), 1);
        assert_eq!(layout.attributes()[0].slot, 0);
        assert_eq!(layout.attributes()[0].offset, 0);
        assert!(layout.check().is_ok());
    }

    #[test]
    fn zero_stride_rejected() {
        let layout = VertexLayout::new(0, vec![]);
        assert!(layout.check().is_err());
    }

    #[test]
    fn attribute_past_stride_rejected() {
        let layout = VertexLayout::new(
            8,
            vec![VertexAttribute {
                slot: 0,
                format: VertexFormat::Float32x3,
                offset: 0,
            }],
        );
        let err = layout.check().unwrap_err();
        assert!(err.contains("stride"));
    }

    #[test]
    fn duplicate_slots_rejected() {
        let layout = VertexLayout::new(
            16,
            vec![
                VertexAttribute { slot: 0, format: VertexFormat::Float32x2, offset: 0 },
                VertexAttribute { slot: 0, format: VertexFormat::Float32x2, offset: 8 },
            ],
        );
        assert!(layout.check().is_err());
    }

    #[test]
    fn interleaved_layout_accepted() {
        // position + packed color, 16-byte stride
        let layout = VertexLayout::new(
            16,
            vec![
                VertexAttribute { slot: 0, format: VertexFormat::Float32x3, offset: 0 },
                VertexAttribute { slot: 1, format: VertexFormat::Unorm8x4, offset: 12 },
            ],
        );
        assert!(layout.check().is_ok());
    }

    // ── wgpu conversion ───────────────────────────────────────────────────

    #[test]
    fn wgpu_attributes_preserve_slot_and_offset() {
        let layout = VertexLayout::new(
            16,
            vec![
                VertexAttribute { slot: 0, format: VertexFormat::Float32x3, offset: 0 },
                VertexAttribute { slot: 1, format: VertexFormat::Unorm8x4, offset: 12 },
            ],
        );
        let attrs = layout.wgpu_attributes();
        assert_eq!(attrs[0].shader_location, 0);
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(attrs[1].shader_location, 1);
        assert_eq!(attrs[1].offset, 12);
        assert_eq!(attrs[1].format, wgpu::VertexFormat::Unorm8x4);
    }
}
