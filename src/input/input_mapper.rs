//! Input mapping from raw key events to semantic actions
//!
//! Keyboard stands in for the button and slider widgets:
//! - `1`-`4`: add cube / tetrahedron / prism / octahedron
//! - `Tab` / `Shift+Tab`: select next / previous control
//! - Arrow keys: nudge the selected control
//! - `Backspace`: restore the selected control's default
//! - `R`: restore every control's default
//! - `Escape`: exit
//!
//! Mouse buttons are NOT mapped here - they go directly to the InputController.

use poly3d_core::ShapeKind;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Add a new shape, which becomes the active one
    AddShape(ShapeKind),
    /// Focus the next control
    SelectNext,
    /// Focus the previous control
    SelectPrevious,
    /// Move the focused control by this many steps
    Nudge(i32),
    /// Restore the focused control's default (double-click equivalent)
    ResetSelected,
    /// Restore every control's default
    ResetAll,
    /// Exit application
    Exit,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Key repeats are passed through so holding an arrow key keeps nudging.
    pub fn map_keyboard(key: KeyCode, state: ElementState, shift: bool) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(InputAction::AddShape(ShapeKind::Cube)),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(InputAction::AddShape(ShapeKind::Tetrahedron)),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(InputAction::AddShape(ShapeKind::TriangularPrism)),
            KeyCode::Digit4 | KeyCode::Numpad4 => Some(InputAction::AddShape(ShapeKind::Octahedron)),
            KeyCode::Tab if shift => Some(InputAction::SelectPrevious),
            KeyCode::Tab => Some(InputAction::SelectNext),
            KeyCode::ArrowUp | KeyCode::ArrowRight => Some(InputAction::Nudge(1)),
            KeyCode::ArrowDown | KeyCode::ArrowLeft => Some(InputAction::Nudge(-1)),
            KeyCode::Backspace => Some(InputAction::ResetSelected),
            KeyCode::KeyR => Some(InputAction::ResetAll),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}
