//! Scene controller
//!
//! The scene is an append-only list of shapes. The most recently added shape
//! is the active one: each render recomputes the composite transform from
//! the current [`InteractionState`] and applies it to that shape only.
//! Earlier shapes keep whatever transform they had when they stopped being
//! active.

use poly3d_math::Mat4;
use crate::{
    compute_transform, generate, split_attributes,
    GraphicsBackend, InteractionState, Shape, ShapeError, ShapeId, ShapeKind, UploadPolicy,
};

/// Ordered collection of shapes plus the upload policy used when adding
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    upload_policy: UploadPolicy,
}

impl Scene {
    /// Create an empty scene using `upload_policy` for every added shape
    pub fn new(upload_policy: UploadPolicy) -> Self {
        Self {
            shapes: Vec::new(),
            upload_policy,
        }
    }

    /// Generate geometry for `kind`, upload it, and append the new shape.
    ///
    /// The new shape becomes the active one.
    pub fn add_shape<B: GraphicsBackend + ?Sized>(
        &mut self,
        kind: ShapeKind,
        backend: &mut B,
    ) -> Result<ShapeId, ShapeError> {
        let vertices = generate(kind);
        let (positions, colors) = split_attributes(&vertices);
        self.add_geometry(kind, &positions, &colors, backend)
    }

    /// Append a shape built from caller-supplied attribute arrays
    pub fn add_geometry<B: GraphicsBackend + ?Sized>(
        &mut self,
        kind: ShapeKind,
        positions: &[[f32; 4]],
        colors: &[[f32; 4]],
        backend: &mut B,
    ) -> Result<ShapeId, ShapeError> {
        let id = ShapeId::new(self.shapes.len());
        let mut shape = Shape::new(id, kind, backend);
        let uploaded = shape.upload(backend, positions, colors, self.upload_policy);

        // A rejected shape still takes its slot so ids stay in creation order.
        self.shapes.push(shape);

        match uploaded {
            Ok(()) => {
                log::info!("Added {} as shape {} ({} vertices)", kind, id.index(), positions.len());
                Ok(id)
            }
            Err(e) => {
                log::error!("Shape {} ({}) left unrendered: {}", id.index(), kind, e);
                Err(e)
            }
        }
    }

    /// Recompute the active shape's transform, clear, and draw every shape
    /// in insertion order.
    ///
    /// Returns the transform that was applied to the active shape.
    pub fn render<B: GraphicsBackend + ?Sized>(&mut self, state: &InteractionState, backend: &mut B) -> Mat4 {
        let transform = compute_transform(state);

        if let Some(active) = self.shapes.last_mut() {
            active.set_transform(transform);
        }

        backend.clear();
        let uniform = backend.transform_uniform();
        for shape in &mut self.shapes {
            shape.draw(backend, uniform);
        }

        log::debug!("Rendered {} shapes", self.shapes.len());
        transform
    }

    /// All shapes in creation order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Look up a shape by id
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    /// The shape that receives the interaction transform
    pub fn active_shape(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Whether any shape changed since it was last drawn
    pub fn has_dirty_shapes(&self) -> bool {
        self.shapes.iter().any(Shape::is_dirty)
    }

    #[inline]
    pub fn upload_policy(&self) -> UploadPolicy {
        self.upload_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BackendCall, RecordingBackend};
    use poly3d_math::mat4::{self, approx_eq, IDENTITY};

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_scene_default() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        assert!(scene.active_shape().is_none());
        assert_eq!(scene.upload_policy(), UploadPolicy::Reject);
    }

    #[test]
    fn test_add_shape_becomes_active() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::Reject);

        let first = scene.add_shape(ShapeKind::Cube, &mut backend).unwrap();
        let second = scene.add_shape(ShapeKind::Octahedron, &mut backend).unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.active_shape().unwrap().id(), second);
        assert_eq!(scene.get(first).unwrap().kind(), ShapeKind::Cube);
    }

    #[test]
    fn test_render_empty_scene_only_clears() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::Reject);

        scene.render(&InteractionState::default(), &mut backend);
        assert_eq!(backend.calls(), &[BackendCall::Clear]);
    }

    #[test]
    fn test_render_applies_transform_to_last_only() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::Reject);
        scene.add_shape(ShapeKind::Tetrahedron, &mut backend).unwrap();
        scene.add_shape(ShapeKind::Cube, &mut backend).unwrap();

        let state = InteractionState::default().with_rotation(0.0, 45.0, 0.0);
        let applied = scene.render(&state, &mut backend);

        assert!(approx_eq(&applied, &mat4::rotate_y(45.0), EPSILON));
        assert_eq!(scene.shapes()[0].transform(), &IDENTITY);
        assert_eq!(scene.shapes()[1].transform(), &applied);
    }

    #[test]
    fn test_render_draws_in_insertion_order() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::Reject);
        for kind in ShapeKind::ALL {
            scene.add_shape(kind, &mut backend).unwrap();
        }

        scene.render(&InteractionState::default(), &mut backend);

        let counts: Vec<u32> = backend.frame_draws().iter().map(|d| d.vertex_count).collect();
        assert_eq!(counts, vec![36, 24, 30, 48]);
        assert_eq!(backend.clear_count(), 1);
    }

    #[test]
    fn test_render_clears_dirty_state() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::Reject);
        scene.add_shape(ShapeKind::Cube, &mut backend).unwrap();
        assert!(scene.has_dirty_shapes());

        scene.render(&InteractionState::default(), &mut backend);
        assert!(!scene.has_dirty_shapes());
    }

    #[test]
    fn test_rejected_geometry_keeps_slot_but_is_not_drawn() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::Reject);
        let positions = vec![[0.0, 0.0, 0.0, 1.0]; 6];
        let colors = vec![[1.0, 1.0, 1.0, 1.0]; 5];

        let result = scene.add_geometry(ShapeKind::Cube, &positions, &colors, &mut backend);
        assert!(result.is_err());
        assert_eq!(scene.len(), 1);

        let id = scene.add_shape(ShapeKind::Tetrahedron, &mut backend).unwrap();
        assert_eq!(id.index(), 1);

        scene.render(&InteractionState::default(), &mut backend);
        assert_eq!(backend.frame_draws().len(), 1);
        assert_eq!(backend.frame_draws()[0].vertex_count, 24);
    }

    #[test]
    fn test_rejected_shape_does_not_stay_dirty() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::Reject);
        let positions = vec![[0.0, 0.0, 0.0, 1.0]; 6];
        let colors = vec![[1.0, 1.0, 1.0, 1.0]; 5];
        assert!(scene.add_geometry(ShapeKind::Cube, &positions, &colors, &mut backend).is_err());

        for _ in 0..3 {
            scene.render(&InteractionState::default(), &mut backend);
        }

        assert!(backend.frame_draws().is_empty());
        assert!(!scene.has_dirty_shapes());
    }

    #[test]
    fn test_warn_and_continue_policy() {
        let mut backend = RecordingBackend::new();
        let mut scene = Scene::new(UploadPolicy::WarnAndContinue);
        let positions = vec![[0.0, 0.0, 0.0, 1.0]; 6];
        let colors = vec![[1.0, 1.0, 1.0, 1.0]; 3];

        assert!(scene.add_geometry(ShapeKind::Cube, &positions, &colors, &mut backend).is_ok());
        assert_eq!(scene.active_shape().unwrap().vertex_count(), 3);
    }
}
