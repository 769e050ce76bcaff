//! # Configuration Constants
//!
//! Centralized constants for curve evaluation and surface construction.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sampling**: Default step counts for curves and sweeps
//! - **Topology**: Fixed shape of piecewise cubic control polygons
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for the orthonormality of a sampled `{T, N, B}` frame.
///
/// Every frame vector produced by the curve evaluators has unit length and
/// is orthogonal to the other two within this tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::FRAME_TOLERANCE;
///
/// let dot: f64 = 3e-9;
/// assert!(dot.abs() < FRAME_TOLERANCE);
/// ```
pub const FRAME_TOLERANCE: f64 = 1e-6;

/// Largest Z component still considered "on the XY plane".
///
/// Profiles handed to the surface builders must have `V`, `T` and `N` flat
/// on the XY plane. Curves evaluated from planar control points produce
/// exact zeros, so this only absorbs noise from callers that construct
/// profiles by hand.
///
/// # Example
///
/// ```rust
/// use config::constants::FLATNESS_EPSILON;
///
/// let z: f64 = 0.0;
/// assert!(z.abs() <= FLATNESS_EPSILON);
/// ```
pub const FLATNESS_EPSILON: f64 = EPSILON;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of steps per curve segment.
///
/// Each cubic segment yields `steps + 1` samples.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_STEPS;
///
/// let samples_per_segment = DEFAULT_CURVE_STEPS + 1;
/// assert!(samples_per_segment > 2);
/// ```
pub const DEFAULT_CURVE_STEPS: u32 = 16;

/// Default number of angular steps for a surface of revolution.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_REVOLVE_STEPS;
///
/// let step_angle = 360.0 / DEFAULT_REVOLVE_STEPS as f64;
/// assert!(step_angle <= 30.0);
/// ```
pub const DEFAULT_REVOLVE_STEPS: u32 = 32;

/// Default radius of the circular profile carried along a sweep curve.
pub const DEFAULT_PROFILE_RADIUS: f64 = 0.25;

/// Minimum number of steps accepted by any evaluator.
///
/// Zero steps would divide the parameter range by zero.
pub const MIN_STEPS: u32 = 1;

/// Maximum number of steps accepted by the command-line front end.
///
/// Safety limit to prevent excessive sampling that could exhaust memory.
pub const MAX_STEPS: u32 = 10_000;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Number of control points consumed by one cubic segment.
pub const CONTROL_POINTS_PER_SEGMENT: usize = 4;

/// Stride between consecutive Bézier segments in a control polygon.
///
/// Adjacent cubic Bézier segments share their end point, so a chain of
/// `k` segments has `3k + 1` control points.
///
/// # Example
///
/// ```rust
/// use config::constants::BEZIER_SEGMENT_STRIDE;
///
/// let segments = 2;
/// assert_eq!(segments * BEZIER_SEGMENT_STRIDE + 1, 7);
/// ```
pub const BEZIER_SEGMENT_STRIDE: usize = 3;

// =============================================================================
// SAMPLING CONFIGURATION
// =============================================================================

/// Validated sampling resolution shared between the curve and surface stages.
///
/// # Examples
/// ```
/// use config::constants::SamplingConfig;
/// let config = SamplingConfig::default();
/// assert!(config.curve_steps > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Steps per curve segment.
    pub curve_steps: u32,
    /// Angular steps around the revolution axis.
    pub revolve_steps: u32,
}

impl SamplingConfig {
    /// Builds a configuration, rejecting step counts outside
    /// `MIN_STEPS..=MAX_STEPS`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SamplingConfig;
    /// let cfg = SamplingConfig::new(8, 24).expect("valid config");
    /// assert_eq!(cfg.revolve_steps, 24);
    /// assert!(SamplingConfig::new(0, 24).is_err());
    /// ```
    pub fn new(curve_steps: u32, revolve_steps: u32) -> Result<Self, ConfigError> {
        validate_steps(curve_steps)?;
        validate_steps(revolve_steps)?;
        Ok(Self {
            curve_steps,
            revolve_steps,
        })
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            curve_steps: DEFAULT_CURVE_STEPS,
            revolve_steps: DEFAULT_REVOLVE_STEPS,
        }
    }
}

/// Checks that a step count lies within `MIN_STEPS..=MAX_STEPS`.
///
/// # Example
///
/// ```rust
/// use config::constants::{validate_steps, MAX_STEPS};
///
/// assert!(validate_steps(1).is_ok());
/// assert!(validate_steps(MAX_STEPS + 1).is_err());
/// ```
pub fn validate_steps(steps: u32) -> Result<u32, ConfigError> {
    if (MIN_STEPS..=MAX_STEPS).contains(&steps) {
        Ok(steps)
    } else {
        Err(ConfigError::StepsOutOfRange(steps))
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a step count is zero or above `MAX_STEPS`.
    StepsOutOfRange(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::StepsOutOfRange(value) => {
                write!(f, "steps must be in {MIN_STEPS}..={MAX_STEPS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
