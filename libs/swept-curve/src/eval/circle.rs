//! # Reference Circle

use crate::error::{CurveError, CurveResult};
use crate::point::{Curve, CurvePoint};
use glam::DVec3;
use std::f64::consts::TAU;

/// Samples a circle of the given radius in the XY plane, counterclockwise.
///
/// Produces `steps + 1` samples at `θ = 2π·i/steps`; the last sample
/// coincides with the first. Tangent and normal are the normalized first
/// and second derivatives, the binormal is `+Z`.
///
/// # Errors
///
/// [`CurveError::ZeroSteps`] when `steps == 0`.
///
/// # Example
///
/// ```rust
/// use swept_curve::eval_circle;
///
/// let circle = eval_circle(2.0, 8)?;
/// assert_eq!(circle.len(), 9);
/// assert!((circle[2].v.y - 2.0).abs() < 1e-12);
/// # Ok::<(), swept_curve::CurveError>(())
/// ```
pub fn eval_circle(radius: f64, steps: u32) -> CurveResult<Curve> {
    if steps == 0 {
        return Err(CurveError::ZeroSteps);
    }

    let curve = (0..=steps)
        .map(|i| {
            let theta = TAU * f64::from(i) / f64::from(steps);
            let (sin, cos) = theta.sin_cos();
            CurvePoint::new(
                radius * DVec3::new(cos, sin, 0.0),
                DVec3::new(-sin, cos, 0.0),
                DVec3::new(-cos, -sin, 0.0),
                DVec3::Z,
            )
        })
        .collect();

    Ok(curve)
}
