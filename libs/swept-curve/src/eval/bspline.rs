//! # Uniform Cubic B-Splines
//!
//! Each window of four consecutive control points is converted to the
//! equivalent Bézier segment and sampled with the Bézier evaluator.

use super::bezier::append_bezier_chain;
use crate::basis::{
    change_of_basis, control_points_to_matrix, matrix_to_control_points, BEZIER_BASIS,
    BSPLINE_BASIS,
};
use crate::error::{CurveError, CurveResult};
use crate::point::Curve;
use config::constants::CONTROL_POINTS_PER_SEGMENT;
use glam::DVec3;
use log::{debug, trace};

/// Samples a uniform cubic B-spline.
///
/// Window `i` covers control points `i..=i+3`; the result concatenates
/// `(n - 3) * (steps + 1)` samples. Each window's first frame is seeded
/// from the last binormal of the window before it.
///
/// # Errors
///
/// * [`CurveError::BsplinePointCount`] when fewer than four points are given
/// * [`CurveError::ZeroSteps`] when `steps == 0`
///
/// # Example
///
/// ```rust
/// use swept_curve::eval_bspline;
/// use glam::DVec3;
///
/// let points: Vec<DVec3> = (0..6)
///     .map(|i| DVec3::new(i as f64, (i % 2) as f64, 0.0))
///     .collect();
/// let curve = eval_bspline(&points, 4)?;
/// assert_eq!(curve.len(), 3 * 5);
/// # Ok::<(), swept_curve::CurveError>(())
/// ```
pub fn eval_bspline(points: &[DVec3], steps: u32) -> CurveResult<Curve> {
    eval_bspline_seeded(points, steps, None)
}

/// Samples a uniform cubic B-spline whose first frame is seeded by the
/// caller.
///
/// Passing `Some(DVec3::Z)` for a spline drawn in the XY plane keeps every
/// normal in that plane, which is what the surface builders require of a
/// profile.
///
/// # Errors
///
/// Same as [`eval_bspline`].
pub fn eval_bspline_seeded(
    points: &[DVec3],
    steps: u32,
    initial_binormal: Option<DVec3>,
) -> CurveResult<Curve> {
    if points.len() < CONTROL_POINTS_PER_SEGMENT {
        return Err(CurveError::BsplinePointCount {
            count: points.len(),
        });
    }
    if steps == 0 {
        return Err(CurveError::ZeroSteps);
    }

    let windows = points.len() + 1 - CONTROL_POINTS_PER_SEGMENT;
    debug!(
        "eval_bspline: {} control points, {} windows, {} steps",
        points.len(),
        windows,
        steps
    );

    let to_bezier = change_of_basis(BEZIER_BASIS, BSPLINE_BASIS);
    let mut curve = Curve::with_capacity(windows * (steps as usize + 1));

    for window in points.windows(CONTROL_POINTS_PER_SEGMENT) {
        let geometry =
            control_points_to_matrix(&[window[0], window[1], window[2], window[3]]) * to_bezier;
        let bezier_points = matrix_to_control_points(&geometry);
        trace!("bspline window {window:?} -> bezier {bezier_points:?}");

        let seed = curve.last().map(|p| p.b).or(initial_binormal);
        append_bezier_chain(&bezier_points, steps, seed, &mut curve);
    }

    Ok(curve)
}
