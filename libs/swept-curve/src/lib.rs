//! # Swept Curve
//!
//! Discretizes piecewise cubic curves into samples carrying an orthonormal
//! moving frame (tangent, normal, binormal).
//!
//! ## Architecture
//!
//! ```text
//! control points → basis (geometry matrix · basis matrix) → eval (sampling + frames) → Curve
//! ```
//!
//! ## Curves
//!
//! - **Bézier chains**: `3k + 1` control points, segments share end points
//! - **Uniform cubic B-splines**: `n >= 4` control points, converted window by
//!   window to Bézier form
//! - **Circle**: closed-form reference curve in the XY plane
//!
//! ## Usage
//!
//! ```rust
//! use swept_curve::eval_bezier;
//! use glam::DVec3;
//!
//! let points = [
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//!     DVec3::new(1.0, 1.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//! ];
//! let curve = eval_bezier(&points, 16, None)?;
//! assert!(curve.iter().all(|p| p.is_orthonormal()));
//! # Ok::<(), swept_curve::CurveError>(())
//! ```

pub mod basis;
pub mod error;
pub mod eval;
pub mod point;

pub use error::{CurveError, CurveResult};
pub use eval::{eval_bezier, eval_bspline, eval_bspline_seeded, eval_circle, orthogonal};
pub use point::{Curve, CurvePoint};
