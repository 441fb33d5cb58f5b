//! GPU rendering system
//!
//! Owns the wgpu backend and the scene drawn through it.

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};
use poly3d_core::{InteractionState, Mat4, Scene, ShapeError, ShapeId, ShapeKind};
use poly3d_render::{RenderError, WgpuBackend};
use crate::config::AppConfig;

/// Manages GPU rendering of the scene
pub struct RenderSystem {
    backend: WgpuBackend,
    scene: Scene,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, config: &AppConfig) -> Result<Self, RenderError> {
        let backend = WgpuBackend::new(window, config.render_settings())?;
        Ok(Self {
            backend,
            scene: Scene::new(config.scene.upload_policy),
        })
    }

    /// Add a shape; it becomes the one the controls act on
    pub fn add_shape(&mut self, kind: ShapeKind) -> Result<ShapeId, ShapeError> {
        self.scene.add_shape(kind, &mut self.backend)
    }

    /// Whether any shape changed since it was last drawn
    pub fn needs_redraw(&self) -> bool {
        self.scene.has_dirty_shapes()
    }

    /// Render a single frame
    ///
    /// Returns the transform applied to the active shape.
    pub fn render_frame(&mut self, state: &InteractionState) -> Result<Mat4, RenderError> {
        let transform = self.scene.render(state, &mut self.backend);
        self.backend.present()?;
        Ok(transform)
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.backend.resize(size);
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        self.backend.reconfigure();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
