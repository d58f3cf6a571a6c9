//! Procedural mesh generators for tests and demos.
//!
//! These generators produce deterministic meshes with consistent
//! counter-clockwise winding, so face normals point outward.

use pliant_math::{Vec2, Vec3};

use crate::mesh::DeformableMesh;
use crate::topology::{Triangle, VertexRef};

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0, facing +Z. Corners carry UV references
/// equal to their position index and a single shared `+Z` normal.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width.
/// - `height` — Total height.
///
/// # Example
/// ```
/// use pliant_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.face_count(), 8);    // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> DeformableMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut vertices = Vec::with_capacity(verts_x * verts_y);
    let mut uvs = Vec::with_capacity(verts_x * verts_y);
    let mut triangles = Vec::with_capacity(cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols.max(1) as f32;
            let v = j as f32 / rows.max(1) as f32;
            vertices.push(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
            uvs.push(Vec2::new(u, v));
        }
    }

    let corner = |p: usize| VertexRef::new(p).with_uv(p).with_normal(0);

    // Two triangles per quad
    for j in 0..rows {
        for i in 0..cols {
            let top_left = j * verts_x + i;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x;
            let bot_right = bot_left + 1;

            triangles.push(Triangle::new([
                corner(top_left),
                corner(bot_left),
                corner(top_right),
            ]));
            triangles.push(Triangle::new([
                corner(top_right),
                corner(bot_left),
                corner(bot_right),
            ]));
        }
    }

    DeformableMesh::new(vertices, uvs, vec![Vec3::Z], triangles)
}

/// Generates a closed axis-aligned cube centered at the origin.
///
/// 8 vertices, 12 triangles, outward-facing winding. Faces are emitted
/// in the order +X, -X, +Y, -Y, +Z, -Z (two triangles each).
pub fn cube(half_extent: f32) -> DeformableMesh {
    let h = half_extent;
    let vertices = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];

    let faces: [[usize; 3]; 12] = [
        [1, 2, 6],
        [1, 6, 5], // +X
        [0, 4, 7],
        [0, 7, 3], // -X
        [3, 7, 6],
        [3, 6, 2], // +Y
        [0, 1, 5],
        [0, 5, 4], // -Y
        [4, 5, 6],
        [4, 6, 7], // +Z
        [0, 3, 2],
        [0, 2, 1], // -Z
    ];

    let triangles = faces.iter().map(|&f| Triangle::from_positions(f)).collect();
    DeformableMesh::new(vertices, Vec::new(), Vec::new(), triangles)
}
