//! # Swept Surface
//!
//! Builds indexed triangle meshes from sampled curves and moves them in and
//! out of OBJ text.
//!
//! ## Architecture
//!
//! ```text
//! Curve (profile) ─┬─ sweep::revolve ─┬─→ Surface ─→ obj (export / load)
//! Curve (sweep)  ──┴─ sweep::gen_cyl ─┘
//! ```
//!
//! Profiles must lie flat on the XY plane with their normals pointing toward
//! the center of curvature; surface normals are the negated profile normals
//! carried along with the profile.
//!
//! ## Usage
//!
//! ```rust
//! use swept_curve::eval_circle;
//! use swept_surface::{make_surface_of_revolution, obj};
//!
//! let profile = eval_circle(1.0, 8)?;
//! let sphere = make_surface_of_revolution(&profile, 8)?;
//! let text = obj::to_obj_string(&sphere);
//! let loaded = obj::read_obj(text.as_bytes())?.into_surface()?;
//! assert_eq!(loaded, sphere);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod obj;
pub mod surface;
pub mod sweep;

pub use error::{ObjError, SurfaceError, SurfaceResult};
pub use obj::{read_obj, to_obj_string, write_obj, ObjFace, ObjMesh};
pub use surface::Surface;
pub use sweep::{
    make_generalized_cylinder, make_surface_of_revolution, make_surface_of_revolution_with,
    RevolveParams, SeamMode,
};
