//! Triangular prism geometry
//!
//! Two triangular end caps at z = ±0.8 joined by three rectangles.

use crate::{Vec4, shape::{Face, Polyhedron, BASIC_COLORS}};

const POSITIONS: [Vec4; 6] = [
    Vec4::point( 0.5, -0.5,  0.8),
    Vec4::point(-0.5, -0.5,  0.8),
    Vec4::point( 0.0,  0.5,  0.8),
    Vec4::point( 0.5, -0.5, -0.8),
    Vec4::point(-0.5, -0.5, -0.8),
    Vec4::point( 0.0,  0.5, -0.8),
];

const FACES: [Face; 5] = [
    // Rectangular sides
    Face::new([0, 2, 5, 3], 6),
    Face::new([0, 1, 4, 3], 2),
    Face::new([1, 2, 5, 4], 3),
    // End caps
    Face::new([0, 1, 2, 0], 4),
    Face::new([3, 4, 5, 3], 5),
];

/// A triangular prism
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangularPrism;

impl TriangularPrism {
    /// Number of rectangular side faces
    pub const SIDE_COUNT: usize = 3;
}

impl Polyhedron for TriangularPrism {
    fn positions(&self) -> &[Vec4] {
        &POSITIONS
    }

    fn palette(&self) -> &[[f32; 4]] {
        &BASIC_COLORS
    }

    fn faces(&self) -> &[Face] {
        &FACES
    }
}
