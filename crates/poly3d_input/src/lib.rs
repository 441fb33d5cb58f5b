//! Input handling for poly3d
//!
//! Turns slider edits and mouse drags into the [`InteractionState`] the scene
//! renders from:
//! - Five sliders: rotation about X, Y, Z, uniform scale, Z translation
//! - Left-button drag: X/Y translation from the cursor's canvas position
//!
//! [`InteractionState`]: poly3d_core::InteractionState

mod slider;
mod control_panel;
mod drag;
mod controller;

pub use slider::{Slider, SliderRange};
pub use control_panel::{Control, ControlPanel, ControlRanges};
pub use drag::DragController;
pub use controller::InputController;
