//! Tetrahedron geometry
//!
//! Four vertices and four triangular faces. Each triangle is stored as a quad
//! whose last index repeats the first, so it still emits six vertices.

use crate::{Vec4, shape::{Face, Polyhedron}};

const POSITIONS: [Vec4; 4] = [
    Vec4::point(-0.5, -0.5,  0.5),
    Vec4::point( 0.5, -0.5,  0.5),
    Vec4::point( 0.0,  0.5,  0.0),
    Vec4::point( 0.0, -0.5, -0.5),
];

const PALETTE: [[f32; 4]; 4] = [
    [0.0, 0.0, 0.0, 1.0], // black
    [1.0, 0.0, 0.0, 1.0], // red
    [0.0, 1.0, 0.0, 1.0], // green
    [0.0, 0.0, 1.0, 1.0], // blue
];

const FACES: [Face; 4] = [
    Face::new([0, 1, 2, 0], 0),
    Face::new([0, 3, 2, 0], 1),
    Face::new([0, 1, 3, 0], 2),
    Face::new([1, 2, 3, 1], 3),
];

/// A tetrahedron with one colour per face
#[derive(Clone, Copy, Debug, Default)]
pub struct Tetrahedron;

impl Polyhedron for Tetrahedron {
    fn positions(&self) -> &[Vec4] {
        &POSITIONS
    }

    fn palette(&self) -> &[[f32; 4]] {
        &PALETTE
    }

    fn faces(&self) -> &[Face] {
        &FACES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetrahedron_counts() {
        assert_eq!(Tetrahedron.positions().len(), 4);
        assert_eq!(Tetrahedron.faces().len(), 4);
        assert_eq!(Tetrahedron.triangulate().len(), 24);
    }

    #[test]
    fn test_each_face_has_its_own_color() {
        let verts = Tetrahedron.triangulate();
        for (face_idx, chunk) in verts.chunks(Face::VERTEX_COUNT).enumerate() {
            assert!(chunk.iter().all(|(_, c)| *c == PALETTE[face_idx]));
        }
    }

    #[test]
    fn test_second_triangle_is_degenerate() {
        // (a, c, d) with d == a collapses to a line
        for face in Tetrahedron.faces() {
            let tri = face.triangle_indices();
            assert_eq!(tri[3], tri[5]);
        }
    }

    #[test]
    fn test_every_vertex_is_used() {
        let mut used = [false; 4];
        for face in Tetrahedron.faces() {
            for &i in &face.indices {
                used[i] = true;
            }
        }
        assert!(used.iter().all(|&u| u));
    }
}
