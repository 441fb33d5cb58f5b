//! Shape kinds the viewer can add

use std::fmt;
use poly3d_math::{Cube, Octahedron, Polyhedron, Tetrahedron, TriangularPrism};
use serde::{Serialize, Deserialize};

/// Which solid a shape is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    Tetrahedron,
    TriangularPrism,
    Octahedron,
}

impl ShapeKind {
    /// Every kind, in button order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Cube,
        ShapeKind::Tetrahedron,
        ShapeKind::TriangularPrism,
        ShapeKind::Octahedron,
    ];

    /// The static solid this kind is generated from
    pub fn polyhedron(self) -> &'static dyn Polyhedron {
        match self {
            ShapeKind::Cube => &Cube,
            ShapeKind::Tetrahedron => &Tetrahedron,
            ShapeKind::TriangularPrism => &TriangularPrism,
            ShapeKind::Octahedron => &Octahedron,
        }
    }

    /// Number of triangle-list vertices the generator emits for this kind
    pub const fn expected_vertex_count(self) -> usize {
        match self {
            ShapeKind::Cube => 36,
            ShapeKind::Tetrahedron => 24,
            ShapeKind::TriangularPrism => 30,
            ShapeKind::Octahedron => 48,
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Tetrahedron => "tetrahedron",
            ShapeKind::TriangularPrism => "triangular prism",
            ShapeKind::Octahedron => "octahedron",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
