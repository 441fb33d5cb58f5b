//! Core types for poly3d
//!
//! This crate holds the backend-independent model of the viewer:
//!
//! - [`ShapeKind`] - Which solid to build
//! - [`Vertex`] / [`generate`] - Flat-shaded triangle-list geometry
//! - [`GraphicsBackend`] - Capability the shapes draw through
//! - [`Shape`] - Backend buffers, draw count, and transform of one shape
//! - [`InteractionState`] - Current rotation, scale, and translation controls
//! - [`compute_transform`] - Composite matrix built from the controls
//! - [`Scene`] - Append-only shape list whose last shape follows the controls

mod shape_kind;
mod geometry;
mod backend;
mod error;
mod shape;
mod interaction;
mod transform;
mod scene;

pub use shape_kind::ShapeKind;
pub use geometry::{Vertex, generate, split_attributes};
pub use backend::{BackendCall, BufferId, GraphicsBackend, RecordedDraw, RecordingBackend, UniformId};
pub use error::ShapeError;
pub use shape::{DirtyFlags, Shape, ShapeId, UploadPolicy};
pub use interaction::InteractionState;
pub use transform::compute_transform;
pub use scene::Scene;

// Re-export commonly used types from poly3d_math for convenience
pub use poly3d_math::{Mat4, Vec4};
