//! Rays used for picking queries.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A ray `origin + t * direction`.
///
/// The direction is not required to be unit length; parametric distances
/// reported against this ray are in units of `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parametric distance `t`. Negative `t` lies behind the origin.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Component-wise reciprocal of the direction, for slab tests.
    ///
    /// Zero components map to `±inf`; slab tests must treat those axes
    /// as parallel instead of multiplying through.
    #[inline]
    pub fn inverse_direction(&self) -> Vec3 {
        self.direction.recip()
    }
}
