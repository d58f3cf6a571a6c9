//! Axis-aligned bounding box over the mesh's current positions.
//!
//! Only a fast reject for ray queries: a ray that passes the box still
//! goes through the exact per-triangle test.

use pliant_math::{Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
///
/// The empty box is inverted (`min = +inf`, `max = -inf`) and intersects
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// The inverted box that contains no points.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Box spanning `points`. Empty input yields [`BoundingBox::EMPTY`].
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut bounds = Self::EMPTY;
        bounds.recompute(points);
        bounds
    }

    /// Refit to `points` with a single linear scan.
    pub fn recompute(&mut self, points: &[Vec3]) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for p in points {
            if p.x < min.x {
                min.x = p.x;
            }
            if p.x > max.x {
                max.x = p.x;
            }

            if p.y < min.y {
                min.y = p.y;
            }
            if p.y > max.y {
                max.y = p.y;
            }

            if p.z < min.z {
                min.z = p.z;
            }
            if p.z > max.z {
                max.z = p.z;
            }
        }

        self.min = min;
        self.max = max;
    }

    /// Returns true if no point has been accumulated on some axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Slab test against the infinite line carrying `ray`.
    ///
    /// Boxes behind the origin are accepted: the mesh intersector also
    /// selects hits by `|t|`, so the reject must not be stricter than it.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let inv = ray.inverse_direction();
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            // A ray parallel to a slab never crosses its planes: it is
            // inside for every t or for none.
            if ray.direction[axis] == 0.0 {
                let o = ray.origin[axis];
                if o < self.min[axis] || o > self.max[axis] {
                    return false;
                }
                continue;
            }

            let t1 = (self.min[axis] - ray.origin[axis]) * inv[axis];
            let t2 = (self.max[axis] - ray.origin[axis]) * inv[axis];
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
        }

        t_enter <= t_exit
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}
