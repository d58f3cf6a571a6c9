//! # pliant-mesh
//!
//! Deformable triangle mesh with OBJ-style vertex indirection.
//!
//! ## Key Types
//!
//! - [`DeformableMesh`] — Owns positions (live and initial snapshot), UVs,
//!   source normals, triangles, and the derived topology.
//! - [`Topology`] — Canonical edge set and edge → triangle adjacency.
//! - [`BoundingBox`] — Axis-aligned box over the current positions, used
//!   as a fast reject before per-triangle ray tests.
//! - [`RayHit`] — Closest hit reported by [`DeformableMesh::intersect`].
//! - Procedural generators (quad grid, cube) for tests and demos.

pub mod bounds;
pub mod generators;
pub mod intersect;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use bounds::BoundingBox;
pub use intersect::RayHit;
pub use mesh::DeformableMesh;
pub use topology::{Edge, Topology, Triangle, VertexRef};
