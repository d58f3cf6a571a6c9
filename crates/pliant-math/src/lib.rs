//! # pliant-math
//!
//! Geometry primitives for the Pliant deformable mesh core.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - [`Ray`] — origin + direction, evaluated at a parametric distance
//! - Triangle primitives: flat face normal and Möller–Trumbore intersection

pub mod ray;
pub mod triangle;

pub use ray::Ray;
pub use triangle::{face_normal, ray_triangle_intersect, TriangleHit};

// Re-export glam types as the canonical math types for Pliant.
pub use glam::{Mat4, Vec2, Vec3, Vec4};
