//! Ballistic stub solver.
//!
//! Implements the full solver interface but projects no constraints:
//! free vertices follow a pure ballistic trajectory under the external
//! forces their body is flagged for, pinned vertices stay put. Enough to
//! drive the mesh → state → solver → render pipeline end to end.

use std::time::Instant;

use pliant_math::Vec3;
use pliant_mesh::DeformableMesh;
use pliant_types::constants::GRAVITY;
use pliant_types::{PliantError, PliantResult};

use crate::config::BodyConfig;
use crate::state::SimulationState;
use crate::strategy::{SolverStrategy, StepResult};

/// Explicit integrator for gravity and wind.
///
/// Per free vertex (`inverse_mass > 0`):
///
/// ```text
/// v += dt * (gravity if gravity_affected) + dt * (wind if wind_affected)
/// estimate = x + dt * v
/// x = estimate
/// v *= 1 - damping
/// ```
///
/// Pinned vertices keep their position and have their velocity cleared.
#[derive(Debug, Clone)]
pub struct BallisticStub {
    /// Acceleration applied to gravity-affected bodies.
    pub gravity: Vec3,
    /// Acceleration applied to wind-affected bodies.
    pub wind: Vec3,
    /// Velocity damping per step (0.0 = none, 1.0 = full).
    pub damping: f32,
    vertex_count: Option<usize>,
}

impl BallisticStub {
    /// Creates a stub with standard gravity, no wind and no damping.
    pub fn new() -> Self {
        Self {
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
            wind: Vec3::ZERO,
            damping: 0.0,
            vertex_count: None,
        }
    }

    /// Sets the wind acceleration.
    pub fn with_wind(mut self, wind: Vec3) -> Self {
        self.wind = wind;
        self
    }

    /// Sets the velocity damping factor.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }
}

impl Default for BallisticStub {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStrategy for BallisticStub {
    fn init(&mut self, mesh: &DeformableMesh, config: &BodyConfig) -> PliantResult<()> {
        config.validate()?;
        self.vertex_count = Some(mesh.vertex_count());
        tracing::debug!(
            solver = self.name(),
            vertices = mesh.vertex_count(),
            "solver initialized"
        );
        Ok(())
    }

    fn step(
        &mut self,
        mesh: &mut DeformableMesh,
        state: &mut SimulationState,
        dt: f32,
    ) -> PliantResult<StepResult> {
        let start = Instant::now();

        let Some(n) = self.vertex_count else {
            return Err(PliantError::InvalidConfig(
                "Solver not initialized. Call init() first.".into(),
            ));
        };
        if !(dt.is_finite() && dt > 0.0) {
            return Err(PliantError::InvalidConfig(format!(
                "Timestep must be positive and finite, got {dt}"
            )));
        }
        state.validate()?;
        if mesh.vertex_count() != n || state.vertex_count() != n {
            return Err(PliantError::InvalidMesh(format!(
                "Solver initialized for {} vertices, mesh has {}, state has {}",
                n,
                mesh.vertex_count(),
                state.vertex_count()
            )));
        }

        let mut acceleration = Vec3::ZERO;
        if state.gravity_affected {
            acceleration += self.gravity;
        }
        if state.wind_affected {
            acceleration += self.wind;
        }
        let keep = 1.0 - self.damping;

        let positions = mesh.vertices_mut();
        for i in 0..n {
            if state.inverse_masses[i] == 0.0 {
                state.velocities[i] = Vec3::ZERO;
                state.estimate_positions[i] = positions[i];
                continue;
            }

            state.velocities[i] += dt * acceleration;
            state.estimate_positions[i] = positions[i] + dt * state.velocities[i];
            positions[i] = state.estimate_positions[i];
            state.velocities[i] *= keep;
        }

        Ok(StepResult {
            iterations: 0,
            wall_time: start.elapsed().as_secs_f64(),
        })
    }

    fn name(&self) -> &str {
        "ballistic_stub"
    }
}
