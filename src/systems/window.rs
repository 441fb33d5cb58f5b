//! Window management system
//!
//! Handles window creation, canvas size, and the status line in the title.

use std::sync::Arc;
use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    window::Window,
};
use poly3d_core::InteractionState;
use poly3d_input::Control;
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Canvas size in physical pixels, the space cursor positions arrive in
    pub fn canvas_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Show the selected control and current values in the title
    pub fn update_title(&self, selected: Control, value: f32, state: &InteractionState) {
        self.window.set_title(&format_title(&self.base_title, selected, value, state));
    }

    /// Replace the title with an error message
    pub fn show_error(&self, message: &str) {
        self.window.set_title(&format_error_title(&self.base_title, message));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Build the window title: base, focused control, then the status line
pub fn format_title(base: &str, selected: Control, value: f32, state: &InteractionState) -> String {
    format!("{} - [{}: {:.2}] {}", base, selected, value, state.status_line())
}

/// Build the title shown when the viewer cannot run
pub fn format_error_title(base: &str, message: &str) -> String {
    format!("{} - Error: {}", base, message)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
