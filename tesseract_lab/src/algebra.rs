//! Fixed-size 4D linear algebra
//!
//! Thin helpers over `glam::Vec4` / `glam::Mat4`. Matrices are addressed as
//! (row, column) in the formulas below; glam stores them column-major.

use glam::{Mat4, Vec4};

/// Apply a 4x4 matrix to a 4D point
#[inline]
pub fn apply_matrix(m: &Mat4, v: Vec4) -> Vec4 {
    *m * v
}

/// Compose two matrices as `a · b` (apply `b` first, then `a`)
#[inline]
pub fn multiply_matrices(a: &Mat4, b: &Mat4) -> Mat4 {
    *a * *b
}

/// Rotation confined to the plane spanned by axes `i` and `j`.
///
/// Identity except for the 2x2 block:
///
/// ```text
/// m[i][i] = cos θ   m[i][j] = -sin θ
/// m[j][i] = sin θ   m[j][j] =  cos θ
/// ```
pub fn plane_rotation(i: usize, j: usize, theta: f32) -> Mat4 {
    debug_assert!(i < 4 && j < 4, "axis index out of range: ({i}, {j})");
    debug_assert!(i != j, "plane rotation needs two distinct axes");

    let (s, c) = theta.sin_cos();
    // cols[column][row]
    let mut cols = Mat4::IDENTITY.to_cols_array_2d();
    cols[i][i] = c;
    cols[j][i] = -s;
    cols[i][j] = s;
    cols[j][j] = c;
    Mat4::from_cols_array_2d(&cols)
}
