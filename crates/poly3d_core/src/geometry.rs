//! Geometry generation
//!
//! Expands a [`ShapeKind`]'s face table into a flat triangle list of
//! position/colour pairs ready for upload.

use poly3d_math::Vec4;
use crate::ShapeKind;

/// A triangle-list vertex: homogeneous position plus RGBA colour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Position with w = 1
    pub position: Vec4,
    /// RGBA colour, each channel in [0, 1]
    pub color: [f32; 4],
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec4, color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Generate the flat-shaded triangle list for `kind`
///
/// Every face contributes six vertices in `[a, b, c, a, c, d]` order, all
/// carrying the same face colour.
pub fn generate(kind: ShapeKind) -> Vec<Vertex> {
    kind.polyhedron()
        .triangulate()
        .into_iter()
        .map(|(position, color)| Vertex::new(position, color))
        .collect()
}

/// Split vertices into the parallel position and colour arrays the backend
/// stores in separate buffers.
pub fn split_attributes(vertices: &[Vertex]) -> (Vec<[f32; 4]>, Vec<[f32; 4]>) {
    vertices
        .iter()
        .map(|v| (v.position.to_array(), v.color))
        .unzip()
}
