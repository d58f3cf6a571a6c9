//! Single-triangle primitives shared by the normal generator and the
//! ray/mesh intersector.

use glam::Vec3;

use crate::ray::Ray;

/// Parametric result of a ray/triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray. May be negative (behind the origin).
    pub t: f32,
    /// Barycentric weight of `v1`.
    pub u: f32,
    /// Barycentric weight of `v2`.
    pub v: f32,
}

/// Flat normal of the triangle `(v0, v1, v2)` in winding order.
///
/// `normalize(cross(v1 - v0, v2 - v0))`. A zero-area triangle has no
/// direction and yields a non-finite vector; callers accept that.
#[inline]
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize()
}

/// Möller–Trumbore ray/triangle intersection.
///
/// Returns `None` when `|det| < parallel_epsilon` (ray parallel to the
/// plane) or when the hit falls outside the triangle. There is no `t > 0`
/// check: intersections behind the origin are reported with negative `t`.
#[allow(clippy::many_single_char_names)]
pub fn ray_triangle_intersect(
    ray: &Ray,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    parallel_epsilon: f32,
) -> Option<TriangleHit> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;

    let pvec = ray.direction.cross(e2);
    let det = e1.dot(pvec);
    if det.abs() < parallel_epsilon {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(e1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(qvec) * inv_det;
    Some(TriangleHit { t, u, v })
}
