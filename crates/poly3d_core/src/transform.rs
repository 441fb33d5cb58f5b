//! Composite transform
//!
//! The active shape's matrix is rebuilt from scratch on every render as
//! `T(tx, ty, tz) * S(s, s, s) * Rz * Ry * Rx`, so the object is rotated
//! about X first, then Y, then Z, then scaled, then translated.

use poly3d_math::{Mat4, mat4};
use crate::InteractionState;

/// Build the composite transform for the given control values
pub fn compute_transform(state: &InteractionState) -> Mat4 {
    let [rx, ry, rz] = state.rotation;
    let [tx, ty, tz] = state.translation;
    let s = state.scale;

    let rotation = mat4::mul(mat4::rotate_z(rz), mat4::mul(mat4::rotate_y(ry), mat4::rotate_x(rx)));
    mat4::mul(mat4::translation(tx, ty, tz), mat4::mul(mat4::scaling(s, s, s), rotation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly3d_math::{Vec4, mat4::{approx_eq, IDENTITY}};

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_defaults_give_identity() {
        let m = compute_transform(&InteractionState::default());
        assert!(approx_eq(&m, &IDENTITY, EPSILON), "got {:?}", m);
    }

    #[test]
    fn test_single_axis_rotation() {
        let state = InteractionState::default().with_rotation(90.0, 0.0, 0.0);
        assert!(approx_eq(&compute_transform(&state), &mat4::rotate_x(90.0), EPSILON));
    }

    #[test]
    fn test_x_applied_before_y() {
        let state = InteractionState::default().with_rotation(30.0, 60.0, 0.0);
        let m = compute_transform(&state);

        let x_then_y = mat4::mul(mat4::rotate_y(60.0), mat4::rotate_x(30.0));
        let y_then_x = mat4::mul(mat4::rotate_x(30.0), mat4::rotate_y(60.0));

        assert!(approx_eq(&m, &x_then_y, EPSILON));
        assert!(!approx_eq(&m, &y_then_x, EPSILON));
    }

    #[test]
    fn test_full_order() {
        // (1,0,0) --Rx90--> (1,0,0) --Ry90--> (0,0,-1) --Rz90--> (0,0,-1)
        // --S2--> (0,0,-2) --T(1,2,3)--> (1,2,1)
        let state = InteractionState::default()
            .with_rotation(90.0, 90.0, 90.0)
            .with_scale(2.0)
            .with_translation(1.0, 2.0, 3.0);
        let p = mat4::transform(compute_transform(&state), Vec4::point(1.0, 0.0, 0.0));
        assert!(p.approx_eq(Vec4::point(1.0, 2.0, 1.0), EPSILON), "got {:?}", p);
    }

    #[test]
    fn test_translation_not_scaled() {
        let state = InteractionState::default()
            .with_scale(3.0)
            .with_translation(0.5, 0.0, 0.0);
        let p = mat4::transform(compute_transform(&state), Vec4::point(0.0, 0.0, 0.0));
        assert!(p.approx_eq(Vec4::point(0.5, 0.0, 0.0), EPSILON));
    }
}
