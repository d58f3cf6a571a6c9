//! Solver strategy trait — the seam for position-based dynamics solvers.
//!
//! The core never iterates constraints itself. A solver owns that loop and
//! gets direct access to the mesh positions and the simulation state.

use pliant_mesh::DeformableMesh;
use pliant_types::PliantResult;

use crate::config::BodyConfig;
use crate::state::SimulationState;

/// Result of a solver step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Constraint projection iterations performed.
    pub iterations: u32,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// Trait for time integration solvers.
///
/// ```text
/// solver.init(mesh, config)?;
/// loop {
///     solver.step(mesh, state, dt)?;
///     mesh.update_bounding_box();
/// }
/// ```
///
/// Solvers write positions through
/// [`DeformableMesh::vertices_mut`] and must not refresh the bounding
/// box; the caller decides when to pay for that.
pub trait SolverStrategy: Send {
    /// Prepares the solver for a mesh. Called again after a reset.
    fn init(&mut self, mesh: &DeformableMesh, config: &BodyConfig) -> PliantResult<()>;

    /// Advances the body by one timestep.
    fn step(
        &mut self,
        mesh: &mut DeformableMesh,
        state: &mut SimulationState,
        dt: f32,
    ) -> PliantResult<StepResult>;

    /// Returns the solver's name.
    fn name(&self) -> &str;
}
