//! Shape entity
//!
//! A shape owns two backend buffers (positions and colours), the number of
//! vertices to draw, and its current transform.

use bitflags::bitflags;
use poly3d_math::{Mat4, mat4::IDENTITY};
use serde::{Serialize, Deserialize};
use crate::{BufferId, GraphicsBackend, ShapeError, ShapeKind, UniformId};

bitflags! {
    /// Which parts of a shape changed since it was last drawn
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        const NONE = 0;
        /// Geometry was (re)uploaded
        const GEOMETRY = 1 << 0;
        /// Transform was replaced
        const TRANSFORM = 1 << 1;
        const ALL = Self::GEOMETRY.bits() | Self::TRANSFORM.bits();
    }
}

/// What to do when position and colour arrays differ in length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPolicy {
    /// Refuse the upload and leave the shape unrendered
    #[default]
    Reject,
    /// Log a warning, upload anyway, and draw only the paired prefix
    WarnAndContinue,
}

/// Identifier of a shape: its position in creation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw creation index
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A shape in the scene with its backend buffers and transform
#[derive(Debug)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    positions: BufferId,
    colors: BufferId,
    vertex_count: u32,
    transform: Mat4,
    dirty: DirtyFlags,
}

impl Shape {
    /// Create a shape with fresh, empty buffers and an identity transform
    pub fn new<B: GraphicsBackend + ?Sized>(id: ShapeId, kind: ShapeKind, backend: &mut B) -> Self {
        Self {
            id,
            kind,
            positions: backend.create_buffer(),
            colors: backend.create_buffer(),
            vertex_count: 0,
            transform: IDENTITY,
            dirty: DirtyFlags::ALL,
        }
    }

    /// Upload positions and colours into the shape's buffers.
    ///
    /// The draw count is the number of vertices actually uploaded.
    pub fn upload<B: GraphicsBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        positions: &[[f32; 4]],
        colors: &[[f32; 4]],
        policy: UploadPolicy,
    ) -> Result<(), ShapeError> {
        if positions.len() != colors.len() {
            let err = ShapeError::LengthMismatch {
                positions: positions.len(),
                colors: colors.len(),
            };
            match policy {
                UploadPolicy::Reject => {
                    self.vertex_count = 0;
                    return Err(err);
                }
                UploadPolicy::WarnAndContinue => {
                    log::warn!("{} {:?}: {}", self.kind, self.id, err);
                }
            }
        }

        backend.upload(self.colors, colors);
        backend.upload(self.positions, positions);

        let count = positions.len().min(colors.len());
        if count != self.kind.expected_vertex_count() {
            log::warn!(
                "{} {:?} uploaded {} vertices, expected {}",
                self.kind,
                self.id,
                count,
                self.kind.expected_vertex_count()
            );
        }
        self.vertex_count = count as u32;
        self.dirty |= DirtyFlags::GEOMETRY;
        Ok(())
    }

    /// Replace the transform. Takes effect on the next draw.
    pub fn set_transform(&mut self, transform: Mat4) {
        if self.transform != transform {
            self.dirty |= DirtyFlags::TRANSFORM;
        }
        self.transform = transform;
    }

    /// Bind buffers, write the transform to `uniform`, and draw
    pub fn draw<B: GraphicsBackend + ?Sized>(&mut self, backend: &mut B, uniform: UniformId) {
        if self.vertex_count == 0 {
            log::debug!("Skipping {} {:?}: nothing uploaded", self.kind, self.id);
            self.dirty = DirtyFlags::NONE;
            return;
        }

        backend.bind_vertex_buffers(self.positions, self.colors);
        backend.set_transform(uniform, &self.transform);
        backend.draw_triangles(self.vertex_count);
        self.dirty = DirtyFlags::NONE;
    }

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Position and colour buffer handles
    #[inline]
    pub fn buffers(&self) -> (BufferId, BufferId) {
        (self.positions, self.colors)
    }

    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BackendCall, RecordingBackend};
    use crate::geometry::{generate, split_attributes};
    use poly3d_math::mat4;

    fn make_shape(backend: &mut RecordingBackend, kind: ShapeKind) -> Shape {
        Shape::new(ShapeId::new(0), kind, backend)
    }

    #[test]
    fn test_new_shape_defaults() {
        let mut backend = RecordingBackend::new();
        let shape = make_shape(&mut backend, ShapeKind::Cube);

        assert_eq!(shape.transform(), &IDENTITY);
        assert_eq!(shape.vertex_count(), 0);
        assert!(shape.is_dirty());
        let (pos, col) = shape.buffers();
        assert_ne!(pos, col);
    }

    #[test]
    fn test_upload_sets_draw_count_from_data() {
        let mut backend = RecordingBackend::new();
        let mut shape = make_shape(&mut backend, ShapeKind::Octahedron);
        let (positions, colors) = split_attributes(&generate(ShapeKind::Octahedron));

        shape.upload(&mut backend, &positions, &colors, UploadPolicy::Reject).unwrap();

        assert_eq!(shape.vertex_count(), 48);
        let (pos_buf, col_buf) = shape.buffers();
        assert_eq!(backend.buffer_data(pos_buf).unwrap().len(), 48);
        assert_eq!(backend.buffer_data(col_buf).unwrap(), colors.as_slice());
    }

    #[test]
    fn test_draw_count_follows_uploaded_length_not_kind() {
        let mut backend = RecordingBackend::new();
        let mut shape = make_shape(&mut backend, ShapeKind::Cube);
        let data = vec![[0.0, 0.0, 0.0, 1.0]; 6];

        shape.upload(&mut backend, &data, &data, UploadPolicy::Reject).unwrap();
        assert_eq!(shape.vertex_count(), 6);
    }

    #[test]
    fn test_mismatch_rejected() {
        let mut backend = RecordingBackend::new();
        let mut shape = make_shape(&mut backend, ShapeKind::Cube);
        let positions = vec![[0.0, 0.0, 0.0, 1.0]; 6];
        let colors = vec![[1.0, 0.0, 0.0, 1.0]; 3];
        backend.reset_calls();

        let result = shape.upload(&mut backend, &positions, &colors, UploadPolicy::Reject);

        assert_eq!(result, Err(ShapeError::LengthMismatch { positions: 6, colors: 3 }));
        assert_eq!(shape.vertex_count(), 0);
        assert!(backend.calls().is_empty(), "nothing should reach the backend");
    }

    #[test]
    fn test_mismatch_warn_and_continue_draws_paired_prefix() {
        let mut backend = RecordingBackend::new();
        let mut shape = make_shape(&mut backend, ShapeKind::Cube);
        let positions = vec![[0.0, 0.0, 0.0, 1.0]; 6];
        let colors = vec![[1.0, 0.0, 0.0, 1.0]; 3];

        let result = shape.upload(&mut backend, &positions, &colors, UploadPolicy::WarnAndContinue);

        assert!(result.is_ok());
        assert_eq!(shape.vertex_count(), 3);
    }

    #[test]
    fn test_draw_sequence() {
        let mut backend = RecordingBackend::new();
        let mut shape = make_shape(&mut backend, ShapeKind::Tetrahedron);
        let (positions, colors) = split_attributes(&generate(ShapeKind::Tetrahedron));
        shape.upload(&mut backend, &positions, &colors, UploadPolicy::Reject).unwrap();
        let transform = mat4::rotate_z(30.0);
        shape.set_transform(transform);
        backend.reset_calls();

        let uniform = backend.transform_uniform();
        shape.draw(&mut backend, uniform);

        let (pos, col) = shape.buffers();
        assert_eq!(
            backend.calls(),
            &[
                BackendCall::BindVertexBuffers { positions: pos, colors: col },
                BackendCall::SetTransform { uniform, transform },
                BackendCall::DrawTriangles { vertex_count: 24 },
            ]
        );
        assert!(!shape.is_dirty());
    }

    #[test]
    fn test_draw_skipped_when_empty() {
        let mut backend = RecordingBackend::new();
        let mut shape = make_shape(&mut backend, ShapeKind::Cube);
        backend.reset_calls();

        shape.draw(&mut backend, UniformId(0));
        assert!(backend.calls().is_empty());
        assert!(!shape.is_dirty(), "an undrawable shape has nothing pending");
    }

    #[test]
    fn test_set_transform_marks_dirty_only_on_change() {
        let mut backend = RecordingBackend::new();
        let mut shape = make_shape(&mut backend, ShapeKind::Cube);
        let data = vec![[0.0, 0.0, 0.0, 1.0]; 36];
        shape.upload(&mut backend, &data, &data, UploadPolicy::Reject).unwrap();
        shape.draw(&mut backend, UniformId(0));
        assert!(!shape.is_dirty());

        shape.set_transform(IDENTITY);
        assert!(!shape.is_dirty());

        shape.set_transform(mat4::scaling(2.0, 2.0, 2.0));
        assert_eq!(shape.dirty_flags(), DirtyFlags::TRANSFORM);
    }
}
