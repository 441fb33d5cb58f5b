//! GPU-compatible data types for the shape pipeline
//!
//! These types match the layouts in `shape.wgsl`.

use bytemuck::{Pod, Zeroable};
use poly3d_math::{Mat4, mat4::IDENTITY};

/// Per-draw transform uniform
/// Layout: 64 bytes (must match shape.wgsl Transform)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    /// Column-major model matrix
    pub matrix: Mat4,
}

impl TransformUniform {
    pub fn new(matrix: Mat4) -> Self {
        Self { matrix }
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new(IDENTITY)
    }
}

/// Distance between consecutive transform slots in the uniform buffer
///
/// Each slot is bound with a dynamic offset, so it is rounded up to the
/// device's `min_uniform_buffer_offset_alignment`.
pub fn uniform_stride(alignment: u32) -> u64 {
    let size = std::mem::size_of::<TransformUniform>() as u64;
    let alignment = alignment.max(1) as u64;
    size.div_ceil(alignment) * alignment
}

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [
    // position: vec4<f32>
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 0,
        shader_location: 0,
    },
];

const COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [
    // color: vec4<f32>
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 0,
        shader_location: 1,
    },
];

/// Vertex buffer slot 0: positions
pub const POSITION_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &POSITION_ATTRIBUTES,
};

/// Vertex buffer slot 1: colours
pub const COLOR_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &COLOR_ATTRIBUTES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_transform_uniform_size() {
        // 16 floats = 64 bytes
        assert_eq!(size_of::<TransformUniform>(), 64);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<TransformUniform>(), 4);
    }

    #[test]
    fn test_uniform_stride() {
        assert_eq!(uniform_stride(256), 256);
        assert_eq!(uniform_stride(64), 64);
        assert_eq!(uniform_stride(32), 64);
        assert_eq!(uniform_stride(0), 64);
    }

    #[test]
    fn test_vertex_layouts() {
        assert_eq!(POSITION_LAYOUT.array_stride, 16);
        assert_eq!(COLOR_LAYOUT.array_stride, 16);
        assert_eq!(POSITION_LAYOUT.attributes[0].shader_location, 0);
        assert_eq!(COLOR_LAYOUT.attributes[0].shader_location, 1);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(TransformUniform::default().matrix, IDENTITY);
    }
}
