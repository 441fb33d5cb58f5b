//! Octahedron geometry
//!
//! Six vertices on the axes at distance 0.5 and eight triangular faces, four
//! around the top apex and four around the bottom apex.

use crate::{Vec4, shape::{Face, Polyhedron, BASIC_COLORS}};

const POSITIONS: [Vec4; 6] = [
    Vec4::point( 0.0,  0.5,  0.0), // top
    Vec4::point(-0.5,  0.0,  0.0),
    Vec4::point( 0.0,  0.0,  0.5),
    Vec4::point( 0.5,  0.0,  0.0),
    Vec4::point( 0.0,  0.0, -0.5),
    Vec4::point( 0.0, -0.5,  0.0), // bottom
];

const FACES: [Face; 8] = [
    Face::new([0, 2, 3, 0], 0),
    Face::new([0, 3, 4, 0], 1),
    Face::new([0, 4, 1, 0], 2),
    Face::new([0, 1, 2, 0], 3),
    Face::new([5, 2, 3, 5], 4),
    Face::new([5, 3, 4, 5], 5),
    Face::new([5, 4, 1, 5], 6),
    Face::new([5, 1, 2, 5], 7),
];

/// A regular octahedron
#[derive(Clone, Copy, Debug, Default)]
pub struct Octahedron;

impl Polyhedron for Octahedron {
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
