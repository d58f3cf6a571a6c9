//! Integration tests for pliant-math.

use pliant_math::{face_normal, ray_triangle_intersect, Ray, Vec3};

const EPS: f32 = 1.0e-4;

fn unit_triangle() -> (Vec3, Vec3, Vec3) {
    (
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    )
}

// ─── Ray Tests ────────────────────────────────────────────────

#[test]
fn ray_at_forward_and_backward() {
    let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -2.0));
    assert_eq!(ray.at(0.0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(ray.at(1.0), Vec3::new(1.0, 2.0, 1.0));
    assert_eq!(ray.at(-0.5), Vec3::new(1.0, 2.0, 4.0));
}

#[test]
fn ray_serialization() {
    let ray = Ray::new(Vec3::ONE, Vec3::NEG_X);
    let json = serde_json::to_string(&ray).unwrap();
    let recovered: Ray = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, ray);
}

// ─── Face Normal Tests ────────────────────────────────────────

#[test]
fn ccw_triangle_faces_positive_z() {
    let (a, b, c) = unit_triangle();
    let n = face_normal(a, b, c);
    assert!((n - Vec3::Z).length() < 1e-6);
}

#[test]
fn reversed_winding_flips_normal() {
    let (a, b, c) = unit_triangle();
    let n = face_normal(a, c, b);
    assert!((n + Vec3::Z).length() < 1e-6);
}

#[test]
fn degenerate_triangle_normal_is_not_finite() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    let n = face_normal(p, p, Vec3::new(2.0, 2.0, 2.0));
    assert!(!n.is_finite());
}

// ─── Möller–Trumbore Tests ────────────────────────────────────

#[test]
fn hit_from_above() {
    let (a, b, c) = unit_triangle();
    let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), Vec3::NEG_Z);
    let hit = ray_triangle_intersect(&ray, a, b, c, EPS).unwrap();
    assert!((hit.t - 1.0).abs() < 1e-6, "t = {}", hit.t);
    assert!((hit.u - 0.25).abs() < 1e-6);
    assert!((hit.v - 0.25).abs() < 1e-6);
}

#[test]
fn hit_behind_origin_has_negative_t() {
    let (a, b, c) = unit_triangle();
    let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), Vec3::Z);
    let hit = ray_triangle_intersect(&ray, a, b, c, EPS).unwrap();
    assert!((hit.t + 1.0).abs() < 1e-6, "t = {}", hit.t);
}

#[test]
fn miss_outside_triangle() {
    let (a, b, c) = unit_triangle();
    let ray = Ray::new(Vec3::new(0.9, 0.9, 1.0), Vec3::NEG_Z);
    assert!(ray_triangle_intersect(&ray, a, b, c, EPS).is_none());
}

#[test]
fn miss_negative_u() {
    let (a, b, c) = unit_triangle();
    let ray = Ray::new(Vec3::new(-0.1, 0.5, 1.0), Vec3::NEG_Z);
    assert!(ray_triangle_intersect(&ray, a, b, c, EPS).is_none());
}

#[test]
fn parallel_ray_is_rejected() {
    let (a, b, c) = unit_triangle();
    let ray = Ray::new(Vec3::new(-1.0, 0.25, 0.0), Vec3::X);
    assert!(ray_triangle_intersect(&ray, a, b, c, EPS).is_none());
}

#[test]
fn near_parallel_below_epsilon_is_rejected() {
    let (a, b, c) = unit_triangle();
    // det = |direction.z| for this triangle; 1e-5 < 1e-4.
    let ray = Ray::new(Vec3::new(0.25, 0.25, 0.0), Vec3::new(1.0, 0.0, -1.0e-5));
    assert!(ray_triangle_intersect(&ray, a, b, c, EPS).is_none());
}

#[test]
fn hit_on_edge_is_accepted() {
    let (a, b, c) = unit_triangle();
    let ray = Ray::new(Vec3::new(0.5, 0.0, 2.0), Vec3::NEG_Z);
    let hit = ray_triangle_intersect(&ray, a, b, c, EPS).unwrap();
    assert!((hit.t - 2.0).abs() < 1e-6);
    assert_eq!(hit.v, 0.0);
}
