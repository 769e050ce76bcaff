//! # Curve Errors
//!
//! Error types for curve evaluation. Malformed control polygons are
//! reported to the caller; no partial curve is ever returned.

use thiserror::Error;

/// Errors that can occur during curve evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Bezier chains need `3k + 1` control points with `k >= 1`.
    #[error("Bezier curve needs 3n+1 control points (n >= 1), got {count}")]
    BezierPointCount {
        /// Number of control points supplied
        count: usize,
    },

    /// B-splines need at least four control points.
    #[error("B-spline curve needs at least 4 control points, got {count}")]
    BsplinePointCount {
        /// Number of control points supplied
        count: usize,
    },

    /// A step count of zero leaves the parameter spacing undefined.
    #[error("Step count must be at least 1")]
    ZeroSteps,
}

/// Result type alias for curve evaluation.
pub type CurveResult<T> = Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::BezierPointCount { count: 5 };
        assert!(err.to_string().contains("3n+1"));
        assert!(err.to_string().contains('5'));

        let err = CurveError::BsplinePointCount { count: 2 };
        assert!(err.to_string().contains("at least 4"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CurveError>();
    }
}
