//! Numeric tolerances and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default per-vertex inverse mass for a freshly loaded body.
pub const DEFAULT_INVERSE_MASS: f32 = 1.0;

/// Default stiffness of a distance constraint (1.0 = fully rigid).
pub const DEFAULT_STIFFNESS: f32 = 1.0;

/// Below this `|det|` a ray is treated as parallel to a triangle's plane.
pub const RAY_PARALLEL_EPSILON: f32 = 1.0e-4;
