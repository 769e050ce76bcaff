//! # Curve Samples
//!
//! A sampled curve is a fully materialized sequence of [`CurvePoint`]s, each
//! carrying its position and an orthonormal moving frame.

use config::constants::FRAME_TOLERANCE;
use glam::{DMat3, DMat4, DVec3};
use serde::Serialize;

/// One sample of a discretized curve.
///
/// `t`, `n` and `b` are unit length, mutually orthogonal and right-handed
/// (`b = t × n`, `n = b × t`).
///
/// # Example
///
/// ```rust
/// use swept_curve::CurvePoint;
/// use glam::DVec3;
///
/// let p = CurvePoint::new(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z);
/// assert!(p.is_orthonormal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Position
    pub v: DVec3,
    /// Unit tangent
    pub t: DVec3,
    /// Unit normal
    pub n: DVec3,
    /// Unit binormal
    pub b: DVec3,
}

/// An ordered sequence of curve samples.
pub type Curve = Vec<CurvePoint>;

impl CurvePoint {
    /// Creates a sample from its position and frame vectors.
    pub const fn new(v: DVec3, t: DVec3, n: DVec3, b: DVec3) -> Self {
        Self { v, t, n, b }
    }

    /// Returns true if the frame is orthonormal and right-handed within
    /// `FRAME_TOLERANCE`.
    pub fn is_orthonormal(&self) -> bool {
        let unit = |v: DVec3| (v.length() - 1.0).abs() < FRAME_TOLERANCE;
        unit(self.t)
            && unit(self.n)
            && unit(self.b)
            && self.t.dot(self.n).abs() < FRAME_TOLERANCE
            && self.n.dot(self.b).abs() < FRAME_TOLERANCE
            && self.t.dot(self.b).abs() < FRAME_TOLERANCE
            && self.t.cross(self.n).abs_diff_eq(self.b, FRAME_TOLERANCE)
    }

    /// Rotation part of the local frame: columns `[N | B | T]`.
    ///
    /// Maps local X to the normal, local Y to the binormal and local Z to
    /// the tangent.
    pub fn rotation(&self) -> DMat3 {
        DMat3::from_cols(self.n, self.b, self.t)
    }

    /// Affine local frame: columns `[N | B | T | V]`.
    ///
    /// This is the transform a renderer applies before drawing the unit axes
    /// of a per-sample coordinate frame, and the transform that places a
    /// profile at this sample when sweeping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swept_curve::CurvePoint;
    /// use glam::DVec3;
    ///
    /// let p = CurvePoint::new(DVec3::new(1.0, 2.0, 3.0), DVec3::Z, DVec3::X, DVec3::Y);
    /// let m = p.frame_matrix();
    /// assert_eq!(m.transform_point3(DVec3::ZERO), p.v);
    /// assert_eq!(m.transform_vector3(DVec3::Z), p.t);
    /// ```
    pub fn frame_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            self.n.extend(0.0),
            self.b.extend(0.0),
            self.t.extend(0.0),
            self.v.extend(1.0),
        )
    }
}
