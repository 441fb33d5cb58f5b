//! Bounded numeric control

use serde::{Serialize, Deserialize};

/// Limits, step, and initial value of a slider
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    /// Initial value, restored by [`Slider::reset`]
    pub default: f32,
    /// Amount a single nudge moves the value
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, default: f32, step: f32) -> Self {
        Self { min, max, default, step }
    }

    /// Clamp `value` into `[min, max]`
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }
}

/// A single slider: current value plus its range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    value: f32,
    range: SliderRange,
}

impl Slider {
    /// Create a slider at its default value
    ///
    /// A default outside `[min, max]` is clamped, and inverted bounds are
    /// swapped.
    pub fn new(range: SliderRange) -> Self {
        let mut range = range;
        if range.min > range.max {
            log::warn!("Slider bounds inverted ({} > {}), swapping", range.min, range.max);
            std::mem::swap(&mut range.min, &mut range.max);
        }
        range.default = range.clamp(range.default);
        Self { value: range.default, range }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn range(&self) -> &SliderRange {
        &self.range
    }

    /// Set the value, clamped to the range. Returns true if it changed.
    pub fn set(&mut self, value: f32) -> bool {
        let clamped = self.range.clamp(value);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    /// Restore the initial value
    ///
    /// Always reports a change so the caller re-renders, the same as
    /// double-clicking a range input does.
    pub fn reset(&mut self) -> bool {
        self.value = self.range.default;
        true
    }

    /// Move by `steps` increments of the step size
    pub fn nudge(&mut self, steps: i32) -> bool {
        self.set(self.stepped(steps))
    }

    /// Value `steps` increments away, snapped to the step grid from `min`
    ///
    /// Snapping keeps repeated nudges from accumulating rounding error.
    pub fn stepped(&self, steps: i32) -> f32 {
        let SliderRange { min, step, .. } = self.range;
        let target = self.value + steps as f32 * step;
        if step <= 0.0 {
            return self.range.clamp(target);
        }
        let snapped = min + ((target - min) / step).round() * step;
        self.range.clamp(snapped)
    }

    /// Whether the slider currently holds its initial value
    pub fn is_default(&self) -> bool {
        self.value == self.range.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angle_slider() -> Slider {
        Slider::new(SliderRange::new(-180.0, 180.0, 0.0, 5.0))
    }

    #[test]
    fn test_starts_at_default() {
        let slider = angle_slider();
        assert_eq!(slider.value(), 0.0);
        assert!(slider.is_default());
    }

    #[test]
    fn test_set_clamps() {
        let mut slider = angle_slider();
        assert!(slider.set(500.0));
        assert_eq!(slider.value(), 180.0);
        assert!(slider.set(-500.0));
        assert_eq!(slider.value(), -180.0);
    }

    #[test]
    fn test_set_same_value_is_not_a_change() {
        let mut slider = angle_slider();
        slider.set(45.0);
        assert!(!slider.set(45.0));
    }

    #[test]
    fn test_reset_restores_default() {
        let mut slider = angle_slider();
        slider.set(90.0);
        assert!(slider.reset());
        assert_eq!(slider.value(), 0.0);
        // Resetting an untouched slider still asks for a render
        assert!(slider.reset());
    }

    #[test]
    fn test_nudge() {
        let mut slider = angle_slider();
        assert!(slider.nudge(3));
        assert_eq!(slider.value(), 15.0);
        assert!(slider.nudge(-4));
        assert_eq!(slider.value(), -5.0);
    }

    #[test]
    fn test_nudge_snaps_to_step_grid() {
        let mut slider = Slider::new(SliderRange::new(-1.0, 1.0, 0.0, 0.05));
        for _ in 0..6 {
            slider.nudge(1);
        }
        let expected = -1.0 + 26.0 * 0.05;
        assert_eq!(slider.value(), expected);
        assert!((slider.value() - 0.3).abs() < 1e-6);

        slider.nudge(-6);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_nudge_from_off_grid_value_lands_on_grid() {
        let mut slider = angle_slider();
        slider.set(12.0);
        assert!(slider.nudge(1));
        assert_eq!(slider.value(), 15.0);
    }

    #[test]
    fn test_nudge_at_limit_reports_no_change() {
        let mut slider = angle_slider();
        slider.set(180.0);
        assert!(!slider.nudge(1));
    }

    #[test]
    fn test_out_of_range_default_is_clamped() {
        let slider = Slider::new(SliderRange::new(0.5, 2.0, 10.0, 0.1));
        assert_eq!(slider.value(), 2.0);
        assert_eq!(slider.range().default, 2.0);
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let slider = Slider::new(SliderRange::new(1.0, -1.0, 0.0, 0.1));
        assert_eq!(slider.range().min, -1.0);
        assert_eq!(slider.range().max, 1.0);
    }
}
