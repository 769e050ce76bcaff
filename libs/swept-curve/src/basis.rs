//! # Basis Transform
//!
//! Constant 4x4 matrices mapping the four control points of a cubic segment
//! to power-basis coefficients, plus the change-of-basis operator.
//!
//! ## Conventions
//!
//! A geometry matrix `G` holds one control point per column (homogeneous
//! `w = 0`). Row `i` of a basis matrix holds the power-basis coefficients of
//! control point `i`'s blending function, so a segment is evaluated as
//!
//! ```text
//! P(t) = G · B · [1, t, t², t³]ᵀ
//! ```

use config::constants::CONTROL_POINTS_PER_SEGMENT;
use glam::{DMat4, DVec3, DVec4};

/// Bernstein cubic blending in the power basis.
///
/// Rows `[1,-3,3,-1; 0,3,-6,3; 0,0,3,-3; 0,0,0,1]`, stored column-major.
pub const BEZIER_BASIS: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(-3.0, 3.0, 0.0, 0.0),
    DVec4::new(3.0, -6.0, 3.0, 0.0),
    DVec4::new(-1.0, 3.0, -3.0, 1.0),
);

const SIXTH: f64 = 1.0 / 6.0;

/// Uniform cubic B-spline blending in the power basis.
///
/// Rows `[1,-3,3,-1; 4,0,-6,3; 1,3,3,-3; 0,0,0,1] / 6`, stored column-major.
pub const BSPLINE_BASIS: DMat4 = DMat4::from_cols(
    DVec4::new(SIXTH, 4.0 * SIXTH, SIXTH, 0.0),
    DVec4::new(-3.0 * SIXTH, 0.0, 3.0 * SIXTH, 0.0),
    DVec4::new(3.0 * SIXTH, -6.0 * SIXTH, 3.0 * SIXTH, 0.0),
    DVec4::new(-SIXTH, 3.0 * SIXTH, -3.0 * SIXTH, SIXTH),
);

/// Returns the operator converting a geometry matrix expressed against
/// basis `from` into one expressed against basis `to`: `to · from⁻¹`.
///
/// A singular `from` is not detected; the result then contains
/// non-finite entries.
///
/// # Example
///
/// ```rust
/// use swept_curve::basis::{change_of_basis, BEZIER_BASIS, BSPLINE_BASIS};
///
/// // B-spline geometry -> equivalent Bezier geometry
/// let to_bezier = change_of_basis(BEZIER_BASIS, BSPLINE_BASIS);
/// assert!(to_bezier.is_finite());
/// ```
#[inline]
pub fn change_of_basis(from: DMat4, to: DMat4) -> DMat4 {
    to * from.inverse()
}

/// Packs four control points as the columns of a geometry matrix.
pub fn control_points_to_matrix(points: &[DVec3; CONTROL_POINTS_PER_SEGMENT]) -> DMat4 {
    DMat4::from_cols(
        points[0].extend(0.0),
        points[1].extend(0.0),
        points[2].extend(0.0),
        points[3].extend(0.0),
    )
}

/// Unpacks the columns of a geometry matrix back into four control points.
pub fn matrix_to_control_points(matrix: &DMat4) -> [DVec3; CONTROL_POINTS_PER_SEGMENT] {
    [
        matrix.col(0).truncate(),
        matrix.col(1).truncate(),
        matrix.col(2).truncate(),
        matrix.col(3).truncate(),
    ]
}

/// Power-basis row `[1, t, t², t³]`.
#[inline]
pub fn power_basis(t: f64) -> DVec4 {
    DVec4::new(1.0, t, t * t, t * t * t)
}

/// Derivative of the power basis, `[0, 1, 2t, 3t²]`.
#[inline]
pub fn power_basis_derivative(t: f64) -> DVec4 {
    DVec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t)
}
