//! 4x4 matrix utilities for homogeneous 3D transforms
//!
//! Matrices are column-major (`m[column][row]`), which is also the layout
//! WGSL expects for `mat4x4<f32>`, so they can be uploaded without transposing.
//! Angles taken by the `rotate_*` helpers are in degrees, matching the
//! slider values they are fed from.

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by axes `p1` and `p2`.
///
/// Rotates `p1` toward `p2` by `angle` radians (0=X, 1=Y, 2=Z).
///
/// # Example
/// ```
/// use poly3d_math::mat4::plane_rotation;
/// // YZ plane rotation, i.e. a rotation about X
/// let pitch = plane_rotation(0.5, 1, 2);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Rotation about the X axis (Y toward Z)
pub fn rotate_x(degrees: f32) -> Mat4 {
    plane_rotation(degrees.to_radians(), 1, 2)
}

/// Rotation about the Y axis (Z toward X)
pub fn rotate_y(degrees: f32) -> Mat4 {
    plane_rotation(degrees.to_radians(), 2, 0)
}

/// Rotation about the Z axis (X toward Y)
pub fn rotate_z(degrees: f32) -> Mat4 {
    plane_rotation(degrees.to_radians(), 0, 1)
}

/// Non-uniform scale
pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = sx;
    m[1][1] = sy;
    m[2][2] = sz;
    m
}

/// Translation by `(tx, ty, tz)`
pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[3] = [tx, ty, tz, 1.0];
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Element-wise comparison within `epsilon`
pub fn approx_eq(a: &Mat4, b: &Mat4, epsilon: f32) -> bool {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).abs() < epsilon)
}
