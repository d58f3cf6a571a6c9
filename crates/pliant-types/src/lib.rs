//! # pliant-types
//!
//! Shared types, identifiers, error types, and numeric constants
//! for the Pliant deformable mesh core.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Pliant crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{PliantError, PliantResult};
pub use ids::{TriangleId, VertexId};
