//! # Generalized Cylinder
//!
//! Carries a flat profile along a sweep curve. The profile's XY plane is
//! mapped onto each sweep sample's normal/binormal plane, so the sweep
//! tangent becomes the profile's Z axis.

use super::{check_flat, stitch_copies};
use crate::error::SurfaceResult;
use crate::surface::Surface;
use log::debug;
use swept_curve::CurvePoint;

/// Sweeps a flat profile along the frames of `sweep`.
///
/// Copy `u` of the profile is placed with the affine frame `[N | B | T | V]`
/// of sweep sample `u`; normals are rotated by `[N | B | T]`, which is its
/// own inverse transpose. Produces `sweep.len() * profile.len()` vertices
/// and `2 * (sweep.len() - 1) * (profile.len() - 1)` triangles. An empty
/// profile or sweep yields an empty surface.
///
/// # Errors
///
/// [`SurfaceError::ProfileNotFlat`](crate::SurfaceError::ProfileNotFlat) if
/// the profile leaves the XY plane.
///
/// # Example
///
/// ```rust
/// use swept_curve::eval_circle;
/// use swept_surface::make_generalized_cylinder;
///
/// // A torus: small circle swept around a large one
/// let profile = eval_circle(0.5, 12)?;
/// let sweep = eval_circle(3.0, 24)?;
/// let surface = make_generalized_cylinder(&profile, &sweep)?;
/// assert_eq!(surface.vertex_count(), 13 * 25);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn make_generalized_cylinder(
    profile: &[CurvePoint],
    sweep: &[CurvePoint],
) -> SurfaceResult<Surface> {
    check_flat(profile)?;

    let n = profile.len();
    debug!(
        "generalized cylinder: {} profile samples along {} sweep samples",
        n,
        sweep.len()
    );

    let mut surface = Surface::with_capacity(
        sweep.len() * n,
        2 * sweep.len().saturating_sub(1) * n.saturating_sub(1),
    );

    for frame in sweep {
        let placement = frame.frame_matrix();
        let rotation = frame.rotation();

        for p in profile {
            surface.push_vertex(placement.transform_point3(p.v), rotation * -p.n);
        }
    }

    stitch_copies(&mut surface, sweep.len(), n, |u| u * n);

    Ok(surface)
}
