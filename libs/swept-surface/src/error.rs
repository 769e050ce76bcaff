//! # Surface Errors
//!
//! Error types for surface construction and OBJ input/output.

use thiserror::Error;

/// Errors that can occur while building a surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The profile has a sample whose position, tangent or normal leaves the
    /// XY plane.
    #[error("Profile curve must be flat on the XY plane (sample {index} is not)")]
    ProfileNotFlat {
        /// Index of the first offending profile sample
        index: usize,
    },

    /// A sweep with zero angular steps has no defined rotation increment.
    #[error("Step count must be at least 1")]
    ZeroSteps,

    /// A welded seam needs two rings, otherwise the single ring is stitched
    /// onto itself.
    #[error("Welded seam needs at least 2 steps, got {steps}")]
    WeldedSeamSteps {
        /// Requested angular steps
        steps: u32,
    },

    /// Vertex, normal and face data do not describe a consistent mesh.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What is inconsistent
        message: String,
    },
}

impl SurfaceError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Result type alias for surface construction.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors that can occur while writing or reading OBJ text.
#[derive(Debug, Error)]
pub enum ObjError {
    /// Underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// A face references a vertex or normal that does not exist
    #[error("Face {face} references index {index}, but only {len} records exist")]
    Index {
        /// 0-based face number
        face: usize,
        /// 0-based index that is out of range
        index: u32,
        /// Number of available records
        len: usize,
    },

    /// A face corner uses different vertex and normal indices, which a
    /// [`Surface`](crate::Surface) cannot represent
    #[error("Face {face} pairs a vertex with a normal of a different index")]
    MismatchedCorner {
        /// 0-based face number
        face: usize,
    },

    /// The parsed records do not form a valid surface
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl ObjError {
    /// Creates a parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurfaceError::ProfileNotFlat { index: 3 };
        assert!(err.to_string().contains("XY plane"));
        assert!(err.to_string().contains('3'));

        let err = ObjError::parse(7, "expected 3 coordinates");
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SurfaceError>();
        assert_send_sync::<ObjError>();
    }
}
