//! User-controlled transform parameters

use serde::{Serialize, Deserialize};

/// Current values of the rotation, scale, and translation controls
///
/// Rotations are in degrees. X/Y translation comes from mouse drag in
/// normalized canvas space; Z translation comes from its slider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    /// Rotation about X, Y, Z in degrees
    pub rotation: [f32; 3],
    /// Uniform scale factor
    pub scale: f32,
    /// Translation along X, Y, Z
    pub translation: [f32; 3],
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            rotation: [0.0; 3],
            scale: 1.0,
            translation: [0.0; 3],
        }
    }
}

impl InteractionState {
    /// Builder: set the three rotation angles in degrees
    pub fn with_rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = [x, y, z];
        self
    }

    /// Builder: set the uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set the translation
    pub fn with_translation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translation = [x, y, z];
        self
    }

    /// One-line summary for the status display
    ///
    /// Angles are rounded to whole degrees, scale and translation to two
    /// decimals.
    pub fn status_line(&self) -> String {
        let [rx, ry, rz] = self.rotation;
        let [tx, ty, tz] = self.translation;
        format!(
            "Angles: {:.0}, {:.0}, {:.0}. Scale: {:.2}. Translation: {:.2}, {:.2}, {:.2}",
            rx, ry, rz, self.scale, tx, ty, tz
        )
    }
}
