//! The five transform sliders and which one has focus

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{Slider, SliderRange};

/// One of the slider-driven transform parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    RotateX,
    RotateY,
    RotateZ,
    Scale,
    TranslateZ,
}

impl Control {
    /// All controls in panel order
    pub const ALL: [Control; 5] = [
        Control::RotateX,
        Control::RotateY,
        Control::RotateZ,
        Control::Scale,
        Control::TranslateZ,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::RotateX => "Rotate X",
            Control::RotateY => "Rotate Y",
            Control::RotateZ => "Rotate Z",
            Control::Scale => "Scale",
            Control::TranslateZ => "Translate Z",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Range settings for every control
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlRanges {
    pub rotate_x: SliderRange,
    pub rotate_y: SliderRange,
    pub rotate_z: SliderRange,
    pub scale: SliderRange,
    pub translate_z: SliderRange,
}

impl Default for ControlRanges {
    fn default() -> Self {
        let angle = SliderRange::new(-180.0, 180.0, 0.0, 5.0);
        Self {
            rotate_x: angle,
            rotate_y: angle,
            rotate_z: angle,
            scale: SliderRange::new(0.1, 2.0, 1.0, 0.05),
            translate_z: SliderRange::new(-1.0, 1.0, 0.0, 0.05),
        }
    }
}

impl ControlRanges {
    pub fn get(&self, control: Control) -> SliderRange {
        match control {
            Control::RotateX => self.rotate_x,
            Control::RotateY => self.rotate_y,
            Control::RotateZ => self.rotate_z,
            Control::Scale => self.scale,
            Control::TranslateZ => self.translate_z,
        }
    }
}

/// The sliders plus the keyboard-selected control
#[derive(Clone, Debug)]
pub struct ControlPanel {
    sliders: [Slider; 5],
    selected: Control,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(ControlRanges::default())
    }
}

impl ControlPanel {
    pub fn new(ranges: ControlRanges) -> Self {
        Self {
            sliders: Control::ALL.map(|c| Slider::new(ranges.get(c))),
            selected: Control::RotateX,
        }
    }

    #[inline]
    pub fn slider(&self, control: Control) -> &Slider {
        &self.sliders[control.index()]
    }

    #[inline]
    pub fn value(&self, control: Control) -> f32 {
        self.slider(control).value()
    }

    /// Set a control's value (clamped). Returns true if it changed.
    pub fn set(&mut self, control: Control, value: f32) -> bool {
        self.sliders[control.index()].set(value)
    }

    /// Restore a control's initial value
    pub fn reset(&mut self, control: Control) -> bool {
        log::debug!("Reset {} to default", control);
        self.sliders[control.index()].reset()
    }

    /// Restore every control's initial value
    pub fn reset_all(&mut self) -> bool {
        for slider in &mut self.sliders {
            slider.reset();
        }
        true
    }

    #[inline]
    pub fn selected(&self) -> Control {
        self.selected
    }

    /// Move focus to the next control, wrapping around
    pub fn select_next(&mut self) -> Control {
        let next = (self.selected.index() + 1) % Control::ALL.len();
        self.selected = Control::ALL[next];
        self.selected
    }

    /// Move focus to the previous control, wrapping around
    pub fn select_previous(&mut self) -> Control {
        let len = Control::ALL.len();
        let prev = (self.selected.index() + len - 1) % len;
        self.selected = Control::ALL[prev];
        self.selected
    }
}
