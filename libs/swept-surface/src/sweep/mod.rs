//! # Sweep Operations
//!
//! Builders that carry a flat profile curve through a sequence of rigid
//! placements and stitch consecutive copies into triangles:
//! - **make_surface_of_revolution**: Rotate the profile around the Y axis
//! - **make_generalized_cylinder**: Place the profile in each frame of a
//!   sweep curve
//!
//! ## Grid Layout
//!
//! Copy `u` of profile sample `v` is vertex `u * profile.len() + v`. Every
//! quad between copies `u-1`, `u` and samples `v-1`, `v` becomes the two
//! triangles
//!
//! ```text
//! (u, v-1), (u-1, v-1), (u-1, v)
//! (u-1, v), (u, v),     (u, v-1)
//! ```

mod gen_cyl;
mod revolve;


pub use gen_cyl::make_generalized_cylinder;
pub use revolve::{
    make_surface_of_revolution, make_surface_of_revolution_with, RevolveParams, SeamMode,
};

use crate::error::{SurfaceError, SurfaceResult};
use crate::surface::Surface;
use config::constants::FLATNESS_EPSILON;
use swept_curve::CurvePoint;

/// Checks that every profile sample lies flat on the XY plane: zero Z for
/// position, tangent and normal.
fn check_flat(profile: &[CurvePoint]) -> SurfaceResult<()> {
    let off_plane = |p: &CurvePoint| {
        p.v.z.abs() > FLATNESS_EPSILON
            || p.t.z.abs() > FLATNESS_EPSILON
            || p.n.z.abs() > FLATNESS_EPSILON
    };

    match profile.iter().position(off_plane) {
        Some(index) => Err(SurfaceError::ProfileNotFlat { index }),
        None => Ok(()),
    }
}

/// Emits the two triangles of every quad between profile copies.
///
/// `copy_base(u)` maps copy `u` to the index of its first vertex, which lets
/// a welded seam point its last copy back at the first one.
fn stitch_copies(
    surface: &mut Surface,
    copies: usize,
    profile_len: usize,
    copy_base: impl Fn(usize) -> usize,
) {
    let loc = |u: usize, v: usize| (copy_base(u) + v) as u32;

    for u in 1..copies {
        for v in 1..profile_len {
            surface.push_triangle(loc(u, v - 1), loc(u - 1, v - 1), loc(u - 1, v));
            surface.push_triangle(loc(u - 1, v), loc(u, v), loc(u, v - 1));
        }
    }
}
