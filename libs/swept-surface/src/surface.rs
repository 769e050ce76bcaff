//! # Surface Data Structure
//!
//! Triangle mesh with one normal per vertex, as produced by the sweep
//! builders and consumed by renderers and exporters.

use crate::error::{SurfaceError, SurfaceResult};
use glam::DVec3;

/// A triangle mesh with per-vertex normals.
///
/// `vertices` and `normals` share one index space; every index in
/// `triangles` is smaller than the vertex count. Surfaces are built once and
/// are read-only afterwards.
///
/// # Example
///
/// ```rust
/// use swept_surface::Surface;
/// use glam::DVec3;
///
/// let surface = Surface::from_parts(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![DVec3::Z; 3],
///     vec![[0, 1, 2]],
/// )?;
/// assert_eq!(surface.triangle_count(), 1);
/// # Ok::<(), swept_surface::SurfaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Surface {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Vertex normals, same length as `vertices`
    normals: Vec<DVec3>,
    /// Triangle indices into `vertices` / `normals`
    triangles: Vec<[u32; 3]>,
}

impl Surface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty surface with pre-allocated capacity.
    pub(crate) fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a surface from raw buffers, checking that normals match the
    /// vertices one-to-one and that every triangle index is in range.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::InvalidTopology`] when either check fails.
    pub fn from_parts(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> SurfaceResult<Self> {
        let surface = Self {
            vertices,
            normals,
            triangles,
        };
        surface.check_topology()?;
        Ok(surface)
    }

    /// Appends a vertex with its normal and returns its index.
    pub(crate) fn push_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Appends a triangle by vertex indices.
    pub(crate) fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the surface has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Vertex normals, indexed like [`vertices`](Self::vertices).
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Triangle indices.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or two zero vectors for an empty surface.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Returns true if normals match vertices and all indices are valid.
    pub fn validate(&self) -> bool {
        self.check_topology().is_ok()
    }

    fn check_topology(&self) -> SurfaceResult<()> {
        if self.normals.len() != self.vertices.len() {
            return Err(SurfaceError::invalid_topology(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                self.vertices.len()
            )));
        }

        let vertex_count = self.vertices.len();
        if let Some((face, tri)) = self
            .triangles
            .iter()
            .enumerate()
            .find(|(_, tri)| tri.iter().any(|&i| i as usize >= vertex_count))
        {
            return Err(SurfaceError::invalid_topology(format!(
                "triangle {face} {tri:?} indexes past {vertex_count} vertices"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Surface {
        let mut surface = Surface::new();
        surface.push_vertex(DVec3::ZERO, DVec3::Z);
        surface.push_vertex(DVec3::X, DVec3::Z);
        surface.push_vertex(DVec3::Y, DVec3::Z);
        surface.push_triangle(0, 1, 2);
        surface
    }

    #[test]
    fn test_surface_new() {
        let surface = Surface::new();
        assert!(surface.is_empty());
        assert_eq!(surface.vertex_count(), 0);
        assert_eq!(surface.triangle_count(), 0);
        assert!(surface.validate());
    }

    #[test]
    fn test_surface_push() {
        let surface = triangle();
        assert_eq!(surface.vertex_count(), 3);
        assert_eq!(surface.normals().len(), 3);
        assert_eq!(surface.triangles(), &[[0, 1, 2]]);
        assert!(surface.validate());
    }

    #[test]
    fn test_surface_bounding_box() {
        let surface = Surface::from_parts(
            vec![DVec3::new(-1.0, -2.0, -3.0), DVec3::new(4.0, 5.0, 6.0)],
            vec![DVec3::X; 2],
            Vec::new(),
        )
        .unwrap();
        let (min, max) = surface.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_from_parts_rejects_bad_index() {
        let result = Surface::from_parts(vec![DVec3::ZERO], vec![DVec3::Z], vec![[0, 1, 2]]);
        assert!(matches!(result, Err(SurfaceError::InvalidTopology { .. })));
    }

    #[test]
    fn test_from_parts_rejects_normal_count() {
        let result = Surface::from_parts(vec![DVec3::ZERO, DVec3::X], vec![DVec3::Z], Vec::new());
        assert!(matches!(result, Err(SurfaceError::InvalidTopology { .. })));
    }
}
