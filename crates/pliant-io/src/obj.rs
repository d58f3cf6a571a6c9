//! Wavefront OBJ parsing.
//!
//! Records are selected by the first whitespace-delimited token of each
//! line:
//!
//! | Record | Effect |
//! |--------|--------|
//! | `v x y z` | append a position |
//! | `vn x y z` | append a normal |
//! | `vt u v` | append a UV |
//! | `f r r r ...` | one triangle from the first three references |
//!
//! Everything else (blank lines, comments, groups, materials) is skipped.
//! Faces are assumed triangular: references past the third are read and
//! discarded, no fan triangulation happens. A face with fewer than three
//! valid references is dropped. Reference indices are 1-based in the file
//! and 0-based in the mesh, for positions, UVs and normals alike.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pliant_math::{Vec2, Vec3};
use pliant_mesh::{DeformableMesh, Triangle, VertexRef};
use pliant_types::{PliantError, PliantResult};
use serde::{Deserialize, Serialize};

/// Counters describing what the parser kept and what it absorbed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Lines consumed, including skipped ones.
    pub lines: usize,
    /// Blank, comment and unrecognized lines.
    pub skipped_lines: usize,
    /// `v`/`vn`/`vt` records with missing or unparsable components.
    /// They are still appended (missing components read as 0.0).
    pub malformed_records: usize,
    /// `f` records dropped for having fewer than three valid references.
    pub degenerate_faces: usize,
    /// `f` records with tokens past the third reference (ignored).
    pub truncated_faces: usize,
    /// Triangles dropped because a position index does not exist.
    pub out_of_range_faces: usize,
}

impl ParseReport {
    /// Returns true if the parser had to absorb anything other than
    /// blank or unrecognized lines.
    pub fn has_warnings(&self) -> bool {
        self.malformed_records > 0
            || self.degenerate_faces > 0
            || self.truncated_faces > 0
            || self.out_of_range_faces > 0
    }
}

/// Accumulates geometry line by line.
#[derive(Default)]
struct ObjParser {
    vertices: Vec<Vec3>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
    report: ParseReport,
}

impl ObjParser {
    fn parse_line(&mut self, line: &str) {
        self.report.lines += 1;

        let mut tokens = line.split_whitespace();
        let Some(record) = tokens.next() else {
            self.report.skipped_lines += 1;
            return;
        };

        match record {
            "v" => {
                let [x, y, z] = self.components(tokens);
                self.vertices.push(Vec3::new(x, y, z));
            }
            "vn" => {
                let [x, y, z] = self.components(tokens);
                self.normals.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let [u, v] = self.components(tokens);
                self.uvs.push(Vec2::new(u, v));
            }
            "f" => self.parse_face(tokens),
            other => {
                tracing::trace!(record = other, line = self.report.lines, "skipping OBJ record");
                self.report.skipped_lines += 1;
            }
        }
    }

    /// Reads `N` floats. Missing or unparsable components become 0.0 so
    /// the record still occupies its index.
    fn components<'a, const N: usize>(&mut self, mut tokens: impl Iterator<Item = &'a str>) -> [f32; N] {
        let mut out = [0.0; N];
        let mut malformed = false;
        for slot in &mut out {
            match tokens.next().map(str::parse::<f32>) {
                Some(Ok(value)) => *slot = value,
                _ => malformed = true,
            }
        }
        if malformed {
            tracing::debug!(line = self.report.lines, "malformed OBJ record, missing components read as 0");
            self.report.malformed_records += 1;
        }
        out
    }

    /// Only the first three references build the triangle. Anything after
    /// them is read past without validation.
    fn parse_face<'a>(&mut self, mut tokens: impl Iterator<Item = &'a str>) {
        let mut refs = [VertexRef::new(0); 3];
        for (slot, r) in refs.iter_mut().enumerate() {
            let Some(token) = tokens.next() else {
                tracing::debug!(line = self.report.lines, refs = slot, "dropping face with fewer than 3 references");
                self.report.degenerate_faces += 1;
                return;
            };
            match parse_vertex_ref(token) {
                Some(parsed) => *r = parsed,
                None => {
                    tracing::debug!(line = self.report.lines, token, "invalid face reference");
                    self.report.degenerate_faces += 1;
                    return;
                }
            }
        }

        if tokens.next().is_some() {
            self.report.truncated_faces += 1;
        }

        self.triangles.push(Triangle::new(refs));
    }

    fn finish(mut self) -> (DeformableMesh, ParseReport) {
        let (mesh, dropped) =
            DeformableMesh::build(self.vertices, self.uvs, self.normals, self.triangles);
        self.report.out_of_range_faces = dropped;
        tracing::debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            edges = mesh.edges().len(),
            skipped = self.report.skipped_lines,
            "parsed OBJ geometry"
        );
        (mesh, self.report)
    }
}

/// Parses one `p`, `p/t`, `p//n` or `p/t/n` reference into 0-based indices.
///
/// Returns `None` for a zero, negative or non-numeric index.
fn parse_vertex_ref(token: &str) -> Option<VertexRef> {
    let mut parts = token.split('/');
    let position = parse_index(parts.next()?)?;
    let uv = parse_optional_index(parts.next())?;
    let normal = parse_optional_index(parts.next())?;
    if parts.next().is_some() {
        return None;
    }

    Some(VertexRef {
        position,
        uv,
        normal,
    })
}

/// 1-based file index → 0-based.
fn parse_index(s: &str) -> Option<usize> {
    s.parse::<usize>().ok()?.checked_sub(1)
}

/// An absent or empty component is `Some(None)`; an invalid one is `None`.
fn parse_optional_index(s: Option<&str>) -> Option<Option<usize>> {
    match s {
        None | Some("") => Some(None),
        Some(s) => parse_index(s).map(Some),
    }
}

/// Parses OBJ text into a mesh.
///
/// ```
/// let mesh = pliant_io::parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/2/1 3/3/1\n");
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
pub fn parse_obj(text: &str) -> DeformableMesh {
    parse_obj_with_report(text).0
}

/// Parses OBJ text, also returning what the parser skipped or dropped.
pub fn parse_obj_with_report(text: &str) -> (DeformableMesh, ParseReport) {
    let mut parser = ObjParser::default();
    for line in text.lines() {
        parser.parse_line(line);
    }
    parser.finish()
}

/// Parses OBJ data from any buffered reader.
///
/// Fails only if the reader itself fails (including invalid UTF-8).
pub fn read_obj<R: BufRead>(reader: R) -> PliantResult<(DeformableMesh, ParseReport)> {
    let mut parser = ObjParser::default();
    for line in reader.lines() {
        parser.parse_line(&line?);
    }
    Ok(parser.finish())
}

/// Loads an OBJ file from disk.
///
/// An unopenable or unreadable file is reported as
/// [`PliantError::MeshLoad`]; it never produces an empty mesh silently.
pub fn load_obj<P: AsRef<Path>>(path: P) -> PliantResult<DeformableMesh> {
    load_obj_with_report(path).map(|(mesh, _)| mesh)
}

/// Loads an OBJ file from disk, also returning the parse report.
pub fn load_obj_with_report<P: AsRef<Path>>(path: P) -> PliantResult<(DeformableMesh, ParseReport)> {
    let path = path.as_ref();
    let load_error = |source: std::io::Error| {
        tracing::warn!(path = %path.display(), error = %source, "failed to read OBJ file");
        PliantError::MeshLoad {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = File::open(path).map_err(load_error)?;
    match read_obj(BufReader::new(file)) {
        Ok(parsed) => Ok(parsed),
        Err(PliantError::Io(source)) => Err(load_error(source)),
        Err(other) => Err(other),
    }
}
