//! Graphics backend capability
//!
//! Shapes and the scene talk to the GPU only through [`GraphicsBackend`].
//! The backend is synchronous and stateful: `bind_vertex_buffers` and
//! `set_transform` change global binding state that the next
//! `draw_triangles` consumes, so callers must issue the
//! bind → transform → draw sequence for one shape before starting the next.

use std::collections::HashMap;
use poly3d_math::Mat4;

/// Handle to a vertex attribute buffer owned by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

/// Handle to the transform uniform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UniformId(pub u32);

/// A backend that accepts vertex/colour buffers and a 4x4 transform uniform
/// and draws triangle lists.
pub trait GraphicsBackend {
    /// Allocate a new, empty vertex attribute buffer
    fn create_buffer(&mut self) -> BufferId;

    /// Fill a buffer with vec4 attributes. Written once per shape.
    fn upload(&mut self, buffer: BufferId, data: &[[f32; 4]]);

    /// The uniform the per-shape transform is written to
    fn transform_uniform(&self) -> UniformId;

    /// Clear colour and depth for a new frame
    fn clear(&mut self);

    /// Bind the position and colour buffers for the next draw
    fn bind_vertex_buffers(&mut self, positions: BufferId, colors: BufferId);

    /// Write a transform into `uniform` for the next draw
    fn set_transform(&mut self, uniform: UniformId, transform: &Mat4);

    /// Draw `vertex_count` vertices from the bound buffers as a triangle list
    fn draw_triangles(&mut self, vertex_count: u32);
}

/// A single call observed by [`RecordingBackend`]
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    CreateBuffer(BufferId),
    Upload { buffer: BufferId, len: usize },
    Clear,
    BindVertexBuffers { positions: BufferId, colors: BufferId },
    SetTransform { uniform: UniformId, transform: Mat4 },
    DrawTriangles { vertex_count: u32 },
}

/// A recorded draw with the state that was bound when it was issued
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDraw {
    pub positions: BufferId,
    pub colors: BufferId,
    pub transform: Mat4,
    pub vertex_count: u32,
}

/// Backend that records every call instead of touching a GPU
///
/// Used by tests to check ordering, draw counts, and per-shape transforms.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
    buffers: HashMap<BufferId, Vec<[f32; 4]>>,
    next_buffer: u32,
    bound: Option<(BufferId, BufferId)>,
    transform: Option<Mat4>,
    frame: Vec<RecordedDraw>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in the order it was made
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Contents last uploaded to `buffer`
    pub fn buffer_data(&self, buffer: BufferId) -> Option<&[[f32; 4]]> {
        self.buffers.get(&buffer).map(Vec::as_slice)
    }

    /// Draws issued since the last `clear`
    pub fn frame_draws(&self) -> &[RecordedDraw] {
        &self.frame
    }

    /// Number of `clear` calls so far
    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, BackendCall::Clear)).count()
    }

    /// Forget recorded calls (buffers stay allocated)
    pub fn reset_calls(&mut self) {
        self.calls.clear();
    }
}

impl GraphicsBackend for RecordingBackend {
    fn create_buffer(&mut self) -> BufferId {
        let id = BufferId(self.next_buffer);
        self.next_buffer += 1;
        self.buffers.insert(id, Vec::new());
        self.calls.push(BackendCall::CreateBuffer(id));
        id
    }

    fn upload(&mut self, buffer: BufferId, data: &[[f32; 4]]) {
        self.buffers.insert(buffer, data.to_vec());
        self.calls.push(BackendCall::Upload { buffer, len: data.len() });
    }

    fn transform_uniform(&self) -> UniformId {
        UniformId(0)
    }

    fn clear(&mut self) {
        self.frame.clear();
        self.calls.push(BackendCall::Clear);
    }

    fn bind_vertex_buffers(&mut self, positions: BufferId, colors: BufferId) {
        self.bound = Some((positions, colors));
        self.calls.push(BackendCall::BindVertexBuffers { positions, colors });
    }

    fn set_transform(&mut self, uniform: UniformId, transform: &Mat4) {
        self.transform = Some(*transform);
        self.calls.push(BackendCall::SetTransform { uniform, transform: *transform });
    }

    fn draw_triangles(&mut self, vertex_count: u32) {
        self.calls.push(BackendCall::DrawTriangles { vertex_count });
        match (self.bound, self.transform) {
            (Some((positions, colors)), Some(transform)) => self.frame.push(RecordedDraw {
                positions,
                colors,
                transform,
                vertex_count,
            }),
            _ => log::warn!("draw_triangles called with no bound buffers or transform"),
        }
    }
}
