//! # OBJ Export and Loading
//!
//! Text serialization of a [`Surface`] in the Wavefront OBJ subset used by
//! the viewer:
//!
//! ```text
//! v x y z               one per vertex
//! vn x y z              one per normal
//! vt 0 0 0              single placeholder texture coordinate
//! f a/1/a b/1/b c/1/c   one per triangle, 1-based
//! ```
//!
//! Coordinates are written with the shortest representation that parses
//! back to the same `f64`, so export followed by [`read_obj`] and
//! [`ObjMesh::into_surface`] reproduces the surface exactly.

use crate::error::ObjError;
use crate::surface::Surface;
use glam::DVec3;
use log::debug;
use std::fmt;
use std::io::{BufRead, Write};

/// Display adapter that renders a surface as OBJ text.
///
/// # Example
///
/// ```rust
/// use swept_surface::{obj::Obj, Surface};
/// use glam::DVec3;
///
/// let surface = Surface::from_parts(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![DVec3::Z; 3],
///     vec![[0, 1, 2]],
/// )?;
/// let text = Obj(&surface).to_string();
/// assert!(text.ends_with("f 1/1/1 2/1/2 3/1/3\n"));
/// # Ok::<(), swept_surface::SurfaceError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Obj<'a>(pub &'a Surface);

impl fmt::Display for Obj<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let surface = self.0;

        for v in surface.vertices() {
            writeln!(f, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in surface.normals() {
            writeln!(f, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        writeln!(f, "vt 0 0 0")?;
        for tri in surface.triangles() {
            let [a, b, c] = tri.map(|i| u64::from(i) + 1);
            writeln!(f, "f {a}/1/{a} {b}/1/{b} {c}/1/{c}")?;
        }

        Ok(())
    }
}

/// Writes a surface as OBJ text.
///
/// # Errors
///
/// [`ObjError::Io`] if the writer fails.
pub fn write_obj<W: Write>(mut out: W, surface: &Surface) -> Result<(), ObjError> {
    debug!(
        "writing OBJ: {} vertices, {} triangles",
        surface.vertex_count(),
        surface.triangle_count()
    );
    write!(out, "{}", Obj(surface))?;
    out.flush()?;
    Ok(())
}

/// Renders a surface as an OBJ string.
pub fn to_obj_string(surface: &Surface) -> String {
    Obj(surface).to_string()
}

/// One triangle of a loaded OBJ file, with 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjFace {
    /// Vertex index of each corner
    pub vertices: [u32; 3],
    /// Normal index of each corner, if given
    pub normals: [Option<u32>; 3],
}

/// Vertex, normal and face records parsed from OBJ text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjMesh {
    /// `v` records
    pub vertices: Vec<DVec3>,
    /// `vn` records
    pub normals: Vec<DVec3>,
    /// `f` records
    pub faces: Vec<ObjFace>,
}

impl ObjMesh {
    /// Converts the records into a [`Surface`].
    ///
    /// Every corner must reference a normal with the same index as its
    /// vertex, which is how [`write_obj`] lays faces out.
    ///
    /// # Errors
    ///
    /// * [`ObjError::Index`] for out-of-range indices
    /// * [`ObjError::MismatchedCorner`] when vertex and normal indices differ
    /// * [`ObjError::Surface`] when normals and vertices differ in count
    pub fn into_surface(self) -> Result<Surface, ObjError> {
        let vertex_count = self.vertices.len();
        let normal_count = self.normals.len();
        let mut triangles = Vec::with_capacity(self.faces.len());

        for (face, record) in self.faces.iter().enumerate() {
            for (&vertex, &normal) in record.vertices.iter().zip(&record.normals) {
                if vertex as usize >= vertex_count {
                    return Err(ObjError::Index {
                        face,
                        index: vertex,
                        len: vertex_count,
                    });
                }
                match normal {
                    Some(n) if n as usize >= normal_count => {
                        return Err(ObjError::Index {
                            face,
                            index: n,
                            len: normal_count,
                        });
                    }
                    Some(n) if n == vertex => {}
                    _ => return Err(ObjError::MismatchedCorner { face }),
                }
            }
            triangles.push(record.vertices);
        }

        Ok(Surface::from_parts(self.vertices, self.normals, triangles)?)
    }
}

/// Parses `v`, `vn` and `f` records from OBJ text.
///
/// Blank lines, `#` comments and other record types are skipped. Faces must
/// be triangles; corners may be written `a`, `a/b`, `a//c` or `a/b/c`.
///
/// # Errors
///
/// * [`ObjError::Io`] if the reader fails
/// * [`ObjError::Parse`] for malformed records
///
/// # Example
///
/// ```rust
/// use swept_surface::obj::read_obj;
///
/// let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let mesh = read_obj(text.as_bytes())?;
/// assert_eq!(mesh.vertices.len(), 3);
/// assert_eq!(mesh.faces[0].vertices, [0, 1, 2]);
/// # Ok::<(), swept_surface::ObjError>(())
/// ```
pub fn read_obj<R: BufRead>(reader: R) -> Result<ObjMesh, ObjError> {
    let mut mesh = ObjMesh::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let mut words = line.split_whitespace();

        match words.next() {
            Some("v") => mesh.vertices.push(parse_vec3(words, line_no)?),
            Some("vn") => mesh.normals.push(parse_vec3(words, line_no)?),
            Some("f") => mesh.faces.push(parse_face(words, line_no)?),
            _ => {}
        }
    }

    debug!(
        "read OBJ: {} vertices, {} normals, {} faces",
        mesh.vertices.len(),
        mesh.normals.len(),
        mesh.faces.len()
    );
    Ok(mesh)
}

fn parse_vec3<'a>(mut words: impl Iterator<Item = &'a str>, line: usize) -> Result<DVec3, ObjError> {
    let mut coords = [0.0; 3];
    for coord in &mut coords {
        let word = words
            .next()
            .ok_or_else(|| ObjError::parse(line, "expected 3 coordinates"))?;
        *coord = word
            .parse()
            .map_err(|err| ObjError::parse(line, format!("bad coordinate `{word}`: {err}")))?;
    }
    Ok(DVec3::from_array(coords))
}

fn parse_face<'a>(words: impl Iterator<Item = &'a str>, line: usize) -> Result<ObjFace, ObjError> {
    let corners = words
        .map(|word| parse_corner(word, line))
        .collect::<Result<Vec<_>, _>>()?;

    let [c0, c1, c2] = corners[..] else {
        return Err(ObjError::parse(
            line,
            format!("faces must be triangles, got {} corners", corners.len()),
        ));
    };

    Ok(ObjFace {
        vertices: [c0.0, c1.0, c2.0],
        normals: [c0.1, c1.1, c2.1],
    })
}

/// Parses one face corner into 0-based (vertex, normal) indices.
fn parse_corner(word: &str, line: usize) -> Result<(u32, Option<u32>), ObjError> {
    let mut parts = word.split('/');
    let vertex = parse_index(parts.next().unwrap_or_default(), line)?;
    let _texture = parts.next();
    let normal = match parts.next() {
        Some(part) if !part.is_empty() => Some(parse_index(part, line)?),
        _ => None,
    };
    Ok((vertex, normal))
}

fn parse_index(word: &str, line: usize) -> Result<u32, ObjError> {
    match word.parse::<u32>() {
        Ok(index) if index >= 1 => Ok(index - 1),
        _ => Err(ObjError::parse(line, format!("bad index `{word}`"))),
    }
}
