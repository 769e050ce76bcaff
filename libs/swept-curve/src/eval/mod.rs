//! # Curve Evaluation
//!
//! Discretizes piecewise cubic curves into [`Curve`](crate::Curve) samples:
//! - **eval_bezier**: Chains of cubic Bézier segments (`3k + 1` points)
//! - **eval_bspline**: Uniform cubic B-splines (`n >= 4` points)
//! - **eval_circle**: Closed-form reference circle in the XY plane
//!
//! ## Frame Propagation
//!
//! Frames are carried from sample to sample by parallel transport: the
//! previous binormal seeds the current normal,
//!
//! ```text
//! N = normalize(B_prev × T)
//! B = normalize(T × N)
//! ```
//!
//! which keeps the frame from flipping on near-straight stretches. This is a
//! left-to-right fold, so the samples of one curve are produced strictly in
//! order. Curves are assumed G1; cusps produce undefined frames.

mod bezier;
mod bspline;
mod circle;


pub use bezier::eval_bezier;
pub use bspline::{eval_bspline, eval_bspline_seeded};
pub use circle::eval_circle;

use crate::point::CurvePoint;
use glam::DVec3;

/// Returns a vector orthogonal to `v`.
///
/// Picks, among `(0, z, -y)`, `(-z, 0, x)` and `(-y, x, 0)`, the candidate
/// with the largest magnitude so the result stays well away from zero. Ties
/// keep the earliest candidate. A zero input yields the zero vector.
///
/// # Example
///
/// ```rust
/// use swept_curve::orthogonal;
/// use glam::DVec3;
///
/// let v = DVec3::new(1.0, 2.0, 3.0);
/// assert_eq!(orthogonal(v).dot(v), 0.0);
/// ```
pub fn orthogonal(v: DVec3) -> DVec3 {
    let candidates = [
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(-v.y, v.x, 0.0),
    ];

    candidates[1..].iter().fold(candidates[0], |best, &candidate| {
        if candidate.length_squared() > best.length_squared() {
            candidate
        } else {
            best
        }
    })
}

/// Builds the sample at `position` with unit `tangent`, transporting the
/// previous binormal (or an arbitrary orthogonal one for the first sample).
fn transport_frame(position: DVec3, tangent: DVec3, prev_binormal: Option<DVec3>) -> CurvePoint {
    let prev_b = prev_binormal.unwrap_or_else(|| orthogonal(tangent));
    let normal = prev_b.cross(tangent).normalize();
    let binormal = tangent.cross(normal).normalize();
    CurvePoint::new(position, tangent, normal, binormal)
}
