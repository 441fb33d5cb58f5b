//! Cube geometry
//!
//! A unit cube centred on the origin: 8 corners at ±0.5 and six quad faces.
//! Faces take the colour of their first vertex index, so the cube indexes
//! the palette by vertex rather than by an explicit face colour.

use crate::{Vec4, shape::{Face, Polyhedron, BASIC_COLORS}};

const POSITIONS: [Vec4; 8] = [
    Vec4::point(-0.5, -0.5,  0.5),
    Vec4::point(-0.5,  0.5,  0.5),
    Vec4::point( 0.5,  0.5,  0.5),
    Vec4::point( 0.5, -0.5,  0.5),
    Vec4::point(-0.5, -0.5, -0.5),
    Vec4::point(-0.5,  0.5, -0.5),
    Vec4::point( 0.5,  0.5, -0.5),
    Vec4::point( 0.5, -0.5, -0.5),
];

// The colour slot mirrors the first index; `face_color` reads the index.
const FACES: [Face; 6] = [
    Face::new([1, 0, 3, 2], 1),
    Face::new([2, 3, 7, 6], 2),
    Face::new([3, 0, 4, 7], 3),
    Face::new([6, 5, 1, 2], 6),
    Face::new([4, 5, 6, 7], 4),
    Face::new([5, 4, 0, 1], 5),
];

/// A unit cube
#[derive(Clone, Copy, Debug, Default)]
pub struct Cube;

impl Polyhedron for Cube {
    fn positions(&self) -> &[Vec4] {
        &POSITIONS
    }

    fn palette(&self) -> &[[f32; 4]] {
        &BASIC_COLORS
    }

    fn faces(&self) -> &[Face] {
        &FACES
    }

    fn face_color(&self, face: &Face) -> [f32; 4] {
        self.palette()[face.indices[0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_vertex_table() {
        assert_eq!(Cube.positions().len(), 8);
        for p in Cube.positions() {
            assert_eq!(p.x.abs(), 0.5);
            assert_eq!(p.y.abs(), 0.5);
            assert_eq!(p.z.abs(), 0.5);
            assert_eq!(p.w, 1.0);
        }
    }

    #[test]
    fn test_cube_triangle_count() {
        assert_eq!(Cube.faces().len(), 6);
        assert_eq!(Cube.triangulate().len(), 36);
    }

    #[test]
    fn test_cube_colors_by_first_vertex() {
        let expected = [
            BASIC_COLORS[1], // red
            BASIC_COLORS[2], // yellow
            BASIC_COLORS[3], // green
            BASIC_COLORS[6], // cyan
            BASIC_COLORS[4], // blue
            BASIC_COLORS[5], // magenta
        ];
        let verts = Cube.triangulate();
        for (face_idx, chunk) in verts.chunks(Face::VERTEX_COUNT).enumerate() {
            for (_, color) in chunk {
                assert_eq!(*color, expected[face_idx], "face {}", face_idx);
            }
        }
    }

    #[test]
    fn test_cube_faces_are_planar() {
        // Every face keeps one coordinate fixed at ±0.5
        for face in Cube.faces() {
            let pts: Vec<Vec4> = face.indices.iter().map(|&i| POSITIONS[i]).collect();
            let fixed_x = pts.iter().all(|p| p.x == pts[0].x);
            let fixed_y = pts.iter().all(|p| p.y == pts[0].y);
            let fixed_z = pts.iter().all(|p| p.z == pts[0].z);
            assert!(fixed_x || fixed_y || fixed_z, "face {:?} is not axis aligned", face);
        }
    }
}
