//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_frame_tolerance_looser_than_epsilon() {
    assert!(
        FRAME_TOLERANCE >= EPSILON,
        "FRAME_TOLERANCE should be >= EPSILON"
    );
    assert!(FRAME_TOLERANCE <= 1e-5);
}

#[test]
fn test_flatness_epsilon_is_tight() {
    assert!(FLATNESS_EPSILON > 0.0);
    assert!(FLATNESS_EPSILON <= FRAME_TOLERANCE);
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_default_steps_within_limits() {
    assert!(validate_steps(DEFAULT_CURVE_STEPS).is_ok());
    assert!(validate_steps(DEFAULT_REVOLVE_STEPS).is_ok());
}

#[test]
fn test_default_profile_radius_is_positive() {
    assert!(DEFAULT_PROFILE_RADIUS > 0.0);
    assert!(DEFAULT_PROFILE_RADIUS.is_finite());
}

#[test]
fn test_zero_steps_rejected() {
    assert_eq!(validate_steps(0), Err(ConfigError::StepsOutOfRange(0)));
}

#[test]
fn test_steps_above_max_rejected() {
    assert_eq!(
        validate_steps(MAX_STEPS + 1),
        Err(ConfigError::StepsOutOfRange(MAX_STEPS + 1))
    );
    assert_eq!(validate_steps(MAX_STEPS), Ok(MAX_STEPS));
}

#[test]
fn test_sampling_config_default() {
    let cfg = SamplingConfig::default();
    assert_eq!(cfg.curve_steps, DEFAULT_CURVE_STEPS);
    assert_eq!(cfg.revolve_steps, DEFAULT_REVOLVE_STEPS);
}

#[test]
fn test_sampling_config_validates_both_fields() {
    assert!(SamplingConfig::new(0, 8).is_err());
    assert!(SamplingConfig::new(8, 0).is_err());
    assert_eq!(
        SamplingConfig::new(4, 8),
        Ok(SamplingConfig {
            curve_steps: 4,
            revolve_steps: 8
        })
    );
}

#[test]
fn test_config_error_display() {
    let msg = ConfigError::StepsOutOfRange(0).to_string();
    assert!(msg.contains("steps"));
    assert!(msg.contains('0'));
}

// =============================================================================
// TOPOLOGY TESTS
// =============================================================================

#[test]
fn test_bezier_stride_matches_segment_size() {
    assert_eq!(BEZIER_SEGMENT_STRIDE + 1, CONTROL_POINTS_PER_SEGMENT);
}
