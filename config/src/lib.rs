//! # Config Crate
//!
//! Centralized configuration constants for the curve and surface crates.
//! All magic numbers and tunable parameters are defined here so that the
//! evaluators, the surface builders and the command-line front end agree on
//! tolerances and sampling defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CURVE_STEPS, FRAME_TOLERANCE};
//!
//! // Unit-length check for a frame vector
//! let length: f64 = 1.0 + 1e-9;
//! assert!((length - 1.0).abs() < FRAME_TOLERANCE);
//!
//! // Sampling defaults
//! let requested: Option<u32> = None;
//! let steps = requested.unwrap_or(DEFAULT_CURVE_STEPS);
//! assert_eq!(steps, DEFAULT_CURVE_STEPS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Usable from every crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
