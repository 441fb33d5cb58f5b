//! poly3d - interactive polyhedron viewer
//!
//! Add cubes, tetrahedra, prisms, and octahedra, then rotate, scale, and
//! drag the most recently added one.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use poly3d::config::AppConfig;
use poly3d::input::{InputAction, InputMapper};
use poly3d::systems::{RenderSystem, WindowSystem};
use poly3d_input::InputController;
use poly3d_render::RenderError;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    input: InputController,
    shift_held: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let input = InputController::new(config.controls);
        Self {
            config,
            window: None,
            render: None,
            input,
            shift_held: false,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Apply a key action. Returns true if a render is needed.
    fn apply(&mut self, action: InputAction, event_loop: &ActiveEventLoop) -> bool {
        match action {
            InputAction::AddShape(kind) => {
                let Some(render) = self.render.as_mut() else {
                    return false;
                };
                if let Err(e) = render.add_shape(kind) {
                    log::warn!("Could not add {}: {}", kind, e);
                }
                render.needs_redraw()
            }
            InputAction::SelectNext => {
                let control = self.input.select_next();
                log::debug!("Selected {}", control);
                true
            }
            InputAction::SelectPrevious => {
                let control = self.input.select_previous();
                log::debug!("Selected {}", control);
                true
            }
            InputAction::Nudge(steps) => self.input.nudge_selected(steps),
            InputAction::ResetSelected => self.input.reset_selected(),
            InputAction::ResetAll => {
                log::info!("Controls reset to defaults");
                self.input.reset_all()
            }
            InputAction::Exit => {
                event_loop.exit();
                false
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let state = self.input.state();

        let Some(render) = self.render.as_mut() else {
            return;
        };

        match render.render_frame(&state) {
            Ok(_) => {}
            Err(RenderError::SurfaceLost) => {
                render.reconfigure();
                self.request_redraw();
                return;
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("{}", e);
                return;
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        if let Some(window) = &self.window {
            let panel = self.input.panel();
            window.update_title(panel.selected(), panel.value(panel.selected()), &state);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        // Without a graphics backend there is nothing to draw. The window
        // stays up with the error in its title until the user closes it.
        let mut render = match RenderSystem::new(window.window().clone(), &self.config) {
            Ok(render) => render,
            Err(e) => {
                let message = format!("Graphics backend unavailable: {}", e);
                log::error!("{}", message);
                window.show_error(&message);
                self.window = Some(window);
                return;
            }
        };

        for &kind in &self.config.scene.initial_shapes {
            if let Err(e) = render.add_shape(kind) {
                log::warn!("Could not add {}: {}", kind, e);
            }
        }
        log::info!("Scene ready with {} shapes", render.scene().len());

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size);
                }
                self.request_redraw();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_held = modifiers.state().shift_key();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state, self.shift_held) {
                        if self.apply(action, event_loop) {
                            self.request_redraw();
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
                if state == ElementState::Released {
                    log::trace!("Drag released at {:?}", self.input.drag().translation());
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let Some(window) = &self.window else {
                    return;
                };
                let size = window.canvas_size();
                if self.input.cursor_moved(position.x, position.y, size.width, size.height) {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting poly3d");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    // Only redraw when input changed something
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
