//! # Surface of Revolution
//!
//! Sweeps a profile curve drawn on the XY plane around the Y axis.
//!
//! ## Algorithm
//!
//! 1. The profile is checked to be flat on the XY plane
//! 2. For `u` in `0..=steps` the profile is rotated by `θ = 2π·u/steps`
//! 3. Each rotated sample contributes its position and the rotated, negated
//!    profile normal (pointing away from the curvature center)
//! 4. Neighbouring copies are stitched into two triangles per quad

use super::{check_flat, stitch_copies};
use crate::error::{SurfaceError, SurfaceResult};
use crate::surface::Surface;
use config::constants::DEFAULT_REVOLVE_STEPS;
use glam::DMat3;
use log::debug;
use std::f64::consts::TAU;
use swept_curve::CurvePoint;

/// How the first and last copies of a full revolution are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeamMode {
    /// Emit the copy at `θ = 2π` as its own ring of vertices, coincident
    /// with the ring at `θ = 0` but index-distinct.
    #[default]
    Duplicate,
    /// Skip the copy at `θ = 2π` and stitch the last quads to the first
    /// ring, giving a closed vertex-shared mesh. Requires at least 2 steps.
    Welded,
}

/// Parameters for a surface of revolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevolveParams {
    /// Number of angular steps around the axis
    pub steps: u32,
    /// Seam handling
    pub seam: SeamMode,
}

impl Default for RevolveParams {
    fn default() -> Self {
        Self {
            steps: DEFAULT_REVOLVE_STEPS,
            seam: SeamMode::Duplicate,
        }
    }
}

/// Revolves a flat profile around the Y axis with a duplicated seam.
///
/// Produces `(steps + 1) * profile.len()` vertices and
/// `2 * steps * (profile.len() - 1)` triangles.
///
/// # Errors
///
/// * [`SurfaceError::ProfileNotFlat`] if the profile leaves the XY plane
/// * [`SurfaceError::ZeroSteps`] when `steps == 0`
///
/// # Example
///
/// ```rust
/// use swept_curve::eval_circle;
/// use swept_surface::make_surface_of_revolution;
///
/// let profile = eval_circle(1.0, 8)?;
/// let surface = make_surface_of_revolution(&profile, 8)?;
/// assert_eq!(surface.vertex_count(), 81);
/// assert_eq!(surface.triangle_count(), 128);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn make_surface_of_revolution(profile: &[CurvePoint], steps: u32) -> SurfaceResult<Surface> {
    make_surface_of_revolution_with(
        profile,
        &RevolveParams {
            steps,
            seam: SeamMode::Duplicate,
        },
    )
}

/// Revolves a flat profile around the Y axis.
///
/// With [`SeamMode::Welded`] the ring at `θ = 2π` is not emitted, giving
/// `steps * profile.len()` vertices; the triangle count is unchanged.
///
/// # Errors
///
/// Same as [`make_surface_of_revolution`], plus
/// [`SurfaceError::WeldedSeamSteps`] for a welded seam with fewer than 2
/// steps.
pub fn make_surface_of_revolution_with(
    profile: &[CurvePoint],
    params: &RevolveParams,
) -> SurfaceResult<Surface> {
    check_flat(profile)?;
    if params.steps == 0 {
        return Err(SurfaceError::ZeroSteps);
    }
    if params.seam == SeamMode::Welded && params.steps < 2 {
        return Err(SurfaceError::WeldedSeamSteps { steps: params.steps });
    }

    let steps = params.steps as usize;
    let n = profile.len();
    let rings = match params.seam {
        SeamMode::Duplicate => steps + 1,
        SeamMode::Welded => steps,
    };
    debug!(
        "surface of revolution: {} profile samples, {} steps, {:?} seam",
        n, steps, params.seam
    );

    let mut surface = Surface::with_capacity(rings * n, 2 * steps * n.saturating_sub(1));

    for u in 0..rings {
        let theta = TAU * u as f64 / steps as f64;
        let rotation = DMat3::from_rotation_y(theta);

        for p in profile {
            surface.push_vertex(rotation * p.v, rotation * -p.n);
        }
    }

    let seam = params.seam;
    stitch_copies(&mut surface, steps + 1, n, |u| match seam {
        SeamMode::Welded if u == steps => 0,
        _ => u * n,
    });

    Ok(surface)
}
