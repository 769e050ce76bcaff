//! # Bézier Chains
//!
//! Evaluates a chain of cubic Bézier segments. Segment `i` uses control
//! points `3i..=3i+3`, so neighbouring segments share an end point.

use super::transport_frame;
use crate::basis::{control_points_to_matrix, power_basis, power_basis_derivative, BEZIER_BASIS};
use crate::error::{CurveError, CurveResult};
use crate::point::Curve;
use config::constants::{BEZIER_SEGMENT_STRIDE, CONTROL_POINTS_PER_SEGMENT};
use glam::DVec3;
use log::{debug, trace};

/// Samples a chain of cubic Bézier segments.
///
/// Each segment contributes `steps + 1` samples at `t = step / steps`, so a
/// chain of `k` segments yields `k * (steps + 1)` points; the junction
/// between two segments is sampled once by each of them.
///
/// # Arguments
///
/// * `points` - Control polygon with `3k + 1` points, `k >= 1`
/// * `steps` - Parameter subdivisions per segment (>= 1)
/// * `initial_binormal` - Binormal that seeds the first frame; when absent
///   an arbitrary vector orthogonal to the first tangent is used
///
/// # Errors
///
/// * [`CurveError::BezierPointCount`] for a malformed control polygon
/// * [`CurveError::ZeroSteps`] when `steps == 0`
///
/// # Example
///
/// ```rust
/// use swept_curve::eval_bezier;
/// use glam::DVec3;
///
/// let points = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(2.0, 1.0, 0.0),
///     DVec3::new(3.0, 0.0, 0.0),
/// ];
/// let curve = eval_bezier(&points, 10, None)?;
/// assert_eq!(curve.len(), 11);
/// # Ok::<(), swept_curve::CurveError>(())
/// ```
pub fn eval_bezier(
    points: &[DVec3],
    steps: u32,
    initial_binormal: Option<DVec3>,
) -> CurveResult<Curve> {
    if points.len() < CONTROL_POINTS_PER_SEGMENT || points.len() % BEZIER_SEGMENT_STRIDE != 1 {
        return Err(CurveError::BezierPointCount {
            count: points.len(),
        });
    }
    if steps == 0 {
        return Err(CurveError::ZeroSteps);
    }

    let segments = (points.len() - 1) / BEZIER_SEGMENT_STRIDE;
    debug!(
        "eval_bezier: {} control points, {} segments, {} steps",
        points.len(),
        segments,
        steps
    );

    let mut curve = Curve::with_capacity(segments * (steps as usize + 1));
    append_bezier_chain(points, steps, initial_binormal, &mut curve);
    Ok(curve)
}

/// Appends the samples of an already validated chain to `curve`.
///
/// The first frame is seeded from `initial_binormal`; every later frame is
/// transported from the sample before it, across segment boundaries.
pub(super) fn append_bezier_chain(
    points: &[DVec3],
    steps: u32,
    initial_binormal: Option<DVec3>,
    curve: &mut Curve,
) {
    let mut prev_binormal = initial_binormal;

    for (index, window) in points
        .windows(CONTROL_POINTS_PER_SEGMENT)
        .step_by(BEZIER_SEGMENT_STRIDE)
        .enumerate()
    {
        trace!("bezier segment {index}: {window:?}");
        let geometry =
            control_points_to_matrix(&[window[0], window[1], window[2], window[3]]) * BEZIER_BASIS;

        for step in 0..=steps {
            let t = f64::from(step) / f64::from(steps);
            let position = (geometry * power_basis(t)).truncate();
            let tangent = (geometry * power_basis_derivative(t)).truncate().normalize();

            let sample = transport_frame(position, tangent, prev_binormal);
            prev_binormal = Some(sample.b);
            curve.push(sample);
        }
    }
}
