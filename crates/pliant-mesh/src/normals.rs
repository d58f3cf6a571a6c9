//! Face and vertex normal computation.
//!
//! Face normals are flat (one per triangle, from the winding order).
//! Vertex normals are the *unweighted* average of the face normals
//! incident to each position: every triangle contributes its unit normal
//! once per corner, regardless of area.

use pliant_math::{face_normal, Vec3};

use crate::topology::Triangle;

/// One unit normal per triangle, in triangle order.
///
/// Zero-area triangles produce a non-finite normal; this is not guarded.
pub fn compute_face_normals(positions: &[Vec3], triangles: &[Triangle]) -> Vec<Vec3> {
    triangles
        .iter()
        .map(|tri| {
            let [a, b, c] = tri.positions();
            face_normal(positions[a], positions[b], positions[c])
        })
        .collect()
}

/// Smooth normals, one per position index.
///
/// Each triangle's face normal is added into the accumulator of its three
/// position indices; every accumulator is normalized once at the end.
/// Positions that no triangle touches (or whose sum has no direction)
/// get a zero normal.
pub fn compute_vertex_normals(
    vertex_count: usize,
    triangles: &[Triangle],
    face_normals: &[Vec3],
) -> Vec<Vec3> {
    let mut accum = vec![Vec3::ZERO; vertex_count];

    for (tri, &n) in triangles.iter().zip(face_normals) {
        for p in tri.positions() {
            accum[p] += n;
        }
    }

    for n in &mut accum {
        *n = n.normalize_or_zero();
    }
    accum
}
