//! Strongly-typed identifiers for mesh entities.
//!
//! Newtype wrappers prevent accidental mixing of vertex (position)
//! indices with triangle indices.

use serde::{Deserialize, Serialize};

/// Index into the position (and per-vertex simulation) arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// Index into the triangle array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TriangleId(pub u32);

impl VertexId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TriangleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<usize> for VertexId {
    fn from(val: usize) -> Self {
        debug_assert!(val <= u32::MAX as usize, "VertexId index {val} exceeds u32");
        Self(val as u32)
    }
}

impl From<u32> for TriangleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<usize> for TriangleId {
    fn from(val: usize) -> Self {
        debug_assert!(val <= u32::MAX as usize, "TriangleId index {val} exceeds u32");
        Self(val as u32)
    }
}
