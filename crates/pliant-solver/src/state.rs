//! Simulation state: per-vertex data the solver reads and writes.
//!
//! Positions live on the mesh; everything else the solver needs per
//! vertex lives here. All per-vertex arrays have length `vertex_count`.

use pliant_math::Vec3;
use pliant_types::{PliantError, PliantResult, VertexId};
use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;

/// Per-vertex simulation buffers plus the constraint list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Per-vertex velocity.
    pub velocities: Vec<Vec3>,
    /// Per-vertex inverse mass. Zero means immovable.
    pub inverse_masses: Vec<f32>,
    /// Scratch positions the solver predicts and projects.
    pub estimate_positions: Vec<Vec3>,
    /// Constraints projected by the solver.
    pub constraints: Vec<Constraint>,
    /// Whether the solver applies gravity to this body.
    pub gravity_affected: bool,
    /// Whether the solver applies wind to this body.
    pub wind_affected: bool,
}

impl SimulationState {
    /// Creates a state at rest for `vertex_count` vertices, every vertex
    /// with the same inverse mass.
    pub fn new(vertex_count: usize, inverse_mass: f32) -> Self {
        Self {
            velocities: vec![Vec3::ZERO; vertex_count],
            inverse_masses: vec![inverse_mass; vertex_count],
            estimate_positions: vec![Vec3::ZERO; vertex_count],
            constraints: Vec::new(),
            gravity_affected: false,
            wind_affected: false,
        }
    }

    /// Number of vertices the buffers are sized for.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.velocities.len()
    }

    /// Zeroes velocities and estimate positions and restores a uniform
    /// inverse mass, resizing to `vertex_count`. Constraints and flags
    /// are kept.
    pub fn reset(&mut self, vertex_count: usize, inverse_mass: f32) {
        self.velocities.clear();
        self.velocities.resize(vertex_count, Vec3::ZERO);
        self.estimate_positions.clear();
        self.estimate_positions.resize(vertex_count, Vec3::ZERO);
        self.inverse_masses.clear();
        self.inverse_masses.resize(vertex_count, inverse_mass);
    }

    /// Adds `force` to every velocity.
    ///
    /// Uniform and unconditional: inverse mass is ignored, so pinned
    /// vertices pick up velocity too. Solvers are expected to hold them.
    pub fn apply_impulse(&mut self, force: Vec3) {
        for v in &mut self.velocities {
            *v += force;
        }
    }

    /// Sets the inverse mass of one vertex.
    pub fn set_inverse_mass(&mut self, vertex: VertexId, inverse_mass: f32) -> PliantResult<()> {
        let len = self.inverse_masses.len();
        let slot = self
            .inverse_masses
            .get_mut(vertex.index())
            .ok_or(PliantError::IndexOutOfRange {
                kind: "vertex",
                index: vertex.index(),
                len,
            })?;
        *slot = inverse_mass;
        Ok(())
    }

    /// Returns true if `vertex` has zero inverse mass.
    pub fn is_pinned(&self, vertex: VertexId) -> bool {
        self.inverse_masses.get(vertex.index()) == Some(&0.0)
    }

    /// Adds a constraint after checking that every vertex it names exists.
    pub fn add_constraint(&mut self, constraint: Constraint) -> PliantResult<()> {
        let len = self.vertex_count();
        if let Some(bad) = constraint.indices().iter().find(|v| v.index() >= len) {
            return Err(PliantError::IndexOutOfRange {
                kind: "vertex",
                index: bad.index(),
                len,
            });
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// Checks that every buffer has the same length.
    pub fn validate(&self) -> PliantResult<()> {
        let n = self.vertex_count();
        if self.inverse_masses.len() != n || self.estimate_positions.len() != n {
            return Err(PliantError::InvalidConfig(format!(
                "State buffers out of sync: {} velocities, {} inverse masses, {} estimates",
                n,
                self.inverse_masses.len(),
                self.estimate_positions.len()
            )));
        }
        Ok(())
    }
}
