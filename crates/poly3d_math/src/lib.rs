//! Mathematics and static geometry for poly3d
//!
//! ## Core Types
//!
//! - [`Vec4`] - Homogeneous vector with x, y, z, w components
//! - [`Mat4`] - Column-major 4x4 matrix and transform helpers
//!
//! ## Shape Types
//!
//! - [`Polyhedron`] - Trait for flat-shaded solids built from quad faces
//! - [`Face`] - Four vertex indices plus a palette colour
//! - [`Cube`], [`Tetrahedron`], [`TriangularPrism`], [`Octahedron`]

mod vec4;
pub mod mat4;
pub mod shape;
pub mod cube;
pub mod tetrahedron;
pub mod prism;
pub mod octahedron;

pub use vec4::Vec4;
pub use mat4::Mat4;
pub use shape::{Face, Polyhedron, BASIC_COLORS};
pub use cube::Cube;
pub use tetrahedron::Tetrahedron;
pub use prism::TriangularPrism;
pub use octahedron::Octahedron;
