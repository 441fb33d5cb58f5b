//! Mouse drag to X/Y translation
//!
//! A left-button press arms the drag. While armed, every cursor movement
//! maps the cursor's pixel position on the canvas to normalized device
//! coordinates, with y flipped so that up is positive:
//!
//! ```text
//! tx = 2 * x / width - 1
//! ty = 2 * (height - y) / height - 1
//! ```
//!
//! The translation is absolute, not accumulated from deltas, and persists
//! after release until the next drag.

use winit::event::{ElementState, MouseButton};

/// Tracks the drag flag and the translation it last produced
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragController {
    armed: bool,
    translation: [f32; 2],
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the drag
    pub fn press(&mut self) {
        self.armed = true;
    }

    /// Disarm the drag. The last translation is kept.
    pub fn release(&mut self) {
        self.armed = false;
    }

    /// Process mouse button input. Only the left button drives the drag.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => self.press(),
            ElementState::Released => self.release(),
        }
    }

    /// Process a cursor position in physical pixels, origin top-left.
    ///
    /// Returns true if the translation was recomputed and a render is
    /// needed. Ignored while disarmed or when the canvas has no area.
    pub fn cursor_moved(&mut self, x: f64, y: f64, width: u32, height: u32) -> bool {
        if !self.armed || width == 0 || height == 0 {
            return false;
        }

        let w = width as f64;
        let h = height as f64;
        self.translation = [
            (2.0 * x / w - 1.0) as f32,
            (2.0 * (h - y) / h - 1.0) as f32,
        ];
        true
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Current (tx, ty)
    #[inline]
    pub fn translation(&self) -> [f32; 2] {
        self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_movement_ignored() {
        let mut drag = DragController::new();
        assert!(!drag.cursor_moved(10.0, 10.0, 100, 100));
        assert_eq!(drag.translation(), [0.0, 0.0]);
    }

    #[test]
    fn test_center_maps_to_origin() {
        let mut drag = DragController::new();
        drag.press();
        assert!(drag.cursor_moved(200.0, 150.0, 400, 300));
        assert_eq!(drag.translation(), [0.0, 0.0]);
    }

    #[test]
    fn test_corners() {
        let mut drag = DragController::new();
        drag.press();

        drag.cursor_moved(0.0, 0.0, 400, 400);
        assert_eq!(drag.translation(), [-1.0, 1.0]);

        drag.cursor_moved(400.0, 400.0, 400, 400);
        assert_eq!(drag.translation(), [1.0, -1.0]);
    }

    #[test]
    fn test_quarter_position() {
        let mut drag = DragController::new();
        drag.press();
        drag.cursor_moved(100.0, 100.0, 400, 400);
        assert_eq!(drag.translation(), [-0.5, 0.5]);
    }

    #[test]
    fn test_release_keeps_translation() {
        let mut drag = DragController::new();
        drag.press();
        drag.cursor_moved(300.0, 100.0, 400, 400);
        drag.release();

        assert!(!drag.cursor_moved(0.0, 0.0, 400, 400));
        assert_eq!(drag.translation(), [0.5, 0.5]);
    }

    #[test]
    fn test_zero_sized_canvas_ignored() {
        let mut drag = DragController::new();
        drag.press();
        assert!(!drag.cursor_moved(5.0, 5.0, 0, 300));
        assert!(!drag.cursor_moved(5.0, 5.0, 300, 0));
        assert_eq!(drag.translation(), [0.0, 0.0]);
    }

    #[test]
    fn test_only_left_button_arms() {
        let mut drag = DragController::new();
        drag.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(!drag.is_armed());

        drag.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(drag.is_armed());

        drag.process_mouse_button(MouseButton::Middle, ElementState::Released);
        assert!(drag.is_armed());

        drag.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!drag.is_armed());
    }
}
