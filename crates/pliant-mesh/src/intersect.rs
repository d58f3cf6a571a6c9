//! Closest-hit ray queries against the mesh surface.
//!
//! A linear scan over every triangle behind a single bounding-box reject.
//! Triangles touching an excluded vertex are skipped, so a vertex being
//! dragged along a picking ray never occludes itself.

use pliant_math::{face_normal, ray_triangle_intersect, Ray, TriangleHit, Vec3};
use pliant_types::constants::RAY_PARALLEL_EPSILON;
use pliant_types::{TriangleId, VertexId};
use serde::{Deserialize, Serialize};

use crate::mesh::DeformableMesh;

/// Closest intersection of a ray with the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Parametric distance along the ray. Negative when the hit lies
    /// behind the origin.
    pub t: f32,
    /// Flat normal of the hit triangle (not interpolated).
    pub normal: Vec3,
    /// The triangle that was hit.
    pub triangle: TriangleId,
}

impl DeformableMesh {
    /// Finds the triangle hit closest to the ray origin by `|t|`.
    ///
    /// Hits behind the origin compete on equal terms with hits in front
    /// of it; among equal `|t|` the lowest triangle index wins. Triangles
    /// containing `exclude` are ignored. Uses the stored bounding box as
    /// is; refresh it after moving positions.
    pub fn intersect(&self, ray: &Ray, exclude: Option<VertexId>) -> Option<RayHit> {
        if !self.bounding_box().intersects_ray(ray) {
            return None;
        }

        let mut best_t = f32::INFINITY;
        let mut best: Option<usize> = None;

        for index in 0..self.face_count() {
            let Some(hit) = self.intersect_triangle(ray, TriangleId::from(index), exclude) else {
                continue;
            };
            if hit.t.abs() < best_t.abs() {
                best_t = hit.t;
                best = Some(index);
            }
        }

        let index = best?;
        let [a, b, c] = self.triangles()[index].positions();
        let v = self.vertices();
        Some(RayHit {
            t: best_t,
            normal: face_normal(v[a], v[b], v[c]),
            triangle: TriangleId::from(index),
        })
    }

    /// Möller–Trumbore test against a single triangle, honouring the
    /// self-exclusion rule. Unknown triangle ids never hit.
    pub fn intersect_triangle(
        &self,
        ray: &Ray,
        triangle: TriangleId,
        exclude: Option<VertexId>,
    ) -> Option<TriangleHit> {
        let tri = self.triangle(triangle)?;
        if let Some(excluded) = exclude {
            if tri.contains_position(excluded.index()) {
                return None;
            }
        }

        let [a, b, c] = tri.positions();
        let v = self.vertices();
        ray_triangle_intersect(ray, v[a], v[b], v[c], RAY_PARALLEL_EPSILON)
    }
}
