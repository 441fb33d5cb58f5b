//! Polyhedron trait and face primitives
//!
//! A polyhedron is a small fixed table of unique vertex positions, a colour
//! palette, and a list of faces that index into both. Every face is a quad
//! `(a, b, c, d)`; triangular faces repeat a vertex as `d`. Triangulation
//! always expands a face into the two triangles `(a, b, c)` and `(a, c, d)`.

use crate::Vec4;

/// Opaque RGBA colours shared by most solids
pub const BASIC_COLORS: [[f32; 4]; 8] = [
    [0.0, 0.0, 0.0, 1.0], // black
    [1.0, 0.0, 0.0, 1.0], // red
    [1.0, 1.0, 0.0, 1.0], // yellow
    [0.0, 1.0, 0.0, 1.0], // green
    [0.0, 0.0, 1.0, 1.0], // blue
    [1.0, 0.0, 1.0, 1.0], // magenta
    [0.0, 1.0, 1.0, 1.0], // cyan
    [1.0, 1.0, 1.0, 1.0], // white
];

/// One face of a polyhedron
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    /// Indices into the parent polyhedron's vertex table
    pub indices: [usize; 4],
    /// Index into the parent polyhedron's palette
    pub color: usize,
}

impl Face {
    /// Positions within `indices` emitted for the two triangles of a face
    pub const TRIANGLE_LIST_PATTERN: [usize; 6] = [0, 1, 2, 0, 2, 3];

    /// Number of vertices a face contributes to a triangle list
    pub const VERTEX_COUNT: usize = Self::TRIANGLE_LIST_PATTERN.len();

    /// A quad face with an explicit palette colour
    #[inline]
    pub const fn new(indices: [usize; 4], color: usize) -> Self {
        Self { indices, color }
    }

    /// The six vertex-table indices of this face in triangle-list order
    pub fn triangle_indices(&self) -> [usize; 6] {
        Self::TRIANGLE_LIST_PATTERN.map(|i| self.indices[i])
    }
}

/// A flat-shaded polyhedron that can be expanded into a triangle list
pub trait Polyhedron: Send + Sync {
    /// Unique local vertex positions (w = 1)
    fn positions(&self) -> &[Vec4];

    /// Colour table the faces index into
    fn palette(&self) -> &[[f32; 4]];

    /// Face definitions
    fn faces(&self) -> &[Face];

    /// Colour of a whole face.
    ///
    /// Defaults to the face's explicit palette index.
    fn face_color(&self, face: &Face) -> [f32; 4] {
        self.palette()[face.color]
    }

    /// Number of vertices the triangle list will contain
    #[inline]
    fn triangle_vertex_count(&self) -> usize {
        self.faces().len() * Face::VERTEX_COUNT
    }

    /// Expand every face into two triangles, pairing each emitted position
    /// with its face colour.
    fn triangulate(&self) -> Vec<(Vec4, [f32; 4])> {
        let positions = self.positions();
        let mut out = Vec::with_capacity(self.triangle_vertex_count());

        for face in self.faces() {
            let color = self.face_color(face);
            for index in face.triangle_indices() {
                out.push((positions[index], color));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Square;

    const SQUARE_POSITIONS: [Vec4; 4] = [
        Vec4::point(0.0, 0.0, 0.0),
        Vec4::point(1.0, 0.0, 0.0),
        Vec4::point(1.0, 1.0, 0.0),
        Vec4::point(0.0, 1.0, 0.0),
    ];
    const SQUARE_FACES: [Face; 1] = [Face::new([0, 1, 2, 3], 4)];

    impl Polyhedron for Square {
        fn positions(&self) -> &[Vec4] {
            &SQUARE_POSITIONS
        }

        fn palette(&self) -> &[[f32; 4]] {
            &BASIC_COLORS
        }

        fn faces(&self) -> &[Face] {
            &SQUARE_FACES
        }
    }

    #[test]
    fn test_triangle_indices_pattern() {
        let face = Face::new([7, 3, 5, 1], 0);
        assert_eq!(face.triangle_indices(), [7, 3, 5, 7, 5, 1]);
    }

    #[test]
    fn test_triangulate_emits_two_triangles_per_face() {
        let verts = Square.triangulate();
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].0, SQUARE_POSITIONS[0]);
        assert_eq!(verts[2].0, SQUARE_POSITIONS[2]);
        assert_eq!(verts[3].0, SQUARE_POSITIONS[0]);
        assert_eq!(verts[5].0, SQUARE_POSITIONS[3]);
    }

    #[test]
    fn test_triangulate_is_flat_shaded() {
        for (_, color) in Square.triangulate() {
            assert_eq!(color, BASIC_COLORS[4]);
        }
    }
}
