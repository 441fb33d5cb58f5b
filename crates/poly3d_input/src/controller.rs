//! Combined slider and drag input

use poly3d_core::InteractionState;
use winit::event::{ElementState, MouseButton};
use crate::{Control, ControlPanel, ControlRanges, DragController};

/// Owns the control panel and drag state and produces the
/// [`InteractionState`] to render with.
///
/// Every mutating method returns whether a render is needed.
#[derive(Clone, Debug, Default)]
pub struct InputController {
    panel: ControlPanel,
    drag: DragController,
}

impl InputController {
    pub fn new(ranges: ControlRanges) -> Self {
        Self {
            panel: ControlPanel::new(ranges),
            drag: DragController::new(),
        }
    }

    #[inline]
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    #[inline]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Slider input
    pub fn set_control(&mut self, control: Control, value: f32) -> bool {
        self.panel.set(control, value)
    }

    /// Slider reset (double-click)
    pub fn reset_control(&mut self, control: Control) -> bool {
        self.panel.reset(control)
    }

    /// Nudge the keyboard-selected control by `steps` of its step size
    pub fn nudge_selected(&mut self, steps: i32) -> bool {
        let control = self.panel.selected();
        let target = self.panel.slider(control).stepped(steps);
        self.set_control(control, target)
    }

    /// Restore the keyboard-selected control's initial value
    pub fn reset_selected(&mut self) -> bool {
        self.reset_control(self.panel.selected())
    }

    /// Reset every slider. Drag translation is kept.
    pub fn reset_all(&mut self) -> bool {
        self.panel.reset_all()
    }

    /// Move keyboard focus to the next control
    pub fn select_next(&mut self) -> Control {
        self.panel.select_next()
    }

    pub fn select_previous(&mut self) -> Control {
        self.panel.select_previous()
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.drag.process_mouse_button(button, state);
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64, width: u32, height: u32) -> bool {
        self.drag.cursor_moved(x, y, width, height)
    }

    /// Snapshot of the current control values
    pub fn state(&self) -> InteractionState {
        let [tx, ty] = self.drag.translation();
        InteractionState::default()
            .with_rotation(
                self.panel.value(Control::RotateX),
                self.panel.value(Control::RotateY),
                self.panel.value(Control::RotateZ),
            )
            .with_scale(self.panel.value(Control::Scale))
            .with_translation(tx, ty, self.panel.value(Control::TranslateZ))
    }
}
