//! A deformable mesh paired with its simulation state.

use pliant_math::{Mat4, Ray, Vec3};
use pliant_mesh::{DeformableMesh, RayHit};
use pliant_types::{PliantError, PliantResult, VertexId};

use crate::config::BodyConfig;
use crate::constraint::Constraint;
use crate::state::SimulationState;

/// A soft body: geometry, per-vertex simulation state and how to draw it.
///
/// `position` is a model-space offset that only affects rendering and
/// world-space picking; the mesh positions themselves stay in model space.
#[derive(Debug, Clone)]
pub struct SoftBody {
    pub mesh: DeformableMesh,
    pub state: SimulationState,
    pub colour: Vec3,
    pub position: Vec3,
    inverse_mass: f32,
}

impl SoftBody {
    /// Builds a body at rest with a uniform inverse mass.
    pub fn new(mesh: DeformableMesh, config: &BodyConfig) -> PliantResult<Self> {
        config.validate()?;

        let mut state = SimulationState::new(mesh.vertex_count(), config.inverse_mass);
        state.gravity_affected = config.gravity_affected;
        state.wind_affected = config.wind_affected;

        tracing::debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            inverse_mass = config.inverse_mass,
            "soft body created"
        );

        Ok(Self {
            mesh,
            state,
            colour: config.colour,
            position: config.position,
            inverse_mass: config.inverse_mass,
        })
    }

    /// Restores initial positions, zeroes velocities and restores the
    /// configured inverse mass. Vertices held by a `Fixed` constraint stay
    /// pinned. The bounding box is not refreshed.
    pub fn reset(&mut self) {
        self.mesh.reset_positions();
        self.state.reset(self.mesh.vertex_count(), self.inverse_mass);

        for constraint in &self.state.constraints {
            if let Constraint::Fixed { vertex, .. } = constraint {
                if let Some(m) = self.state.inverse_masses.get_mut(vertex.index()) {
                    *m = 0.0;
                }
            }
        }
    }

    /// Rigidly shifts every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.mesh.translate(delta);
    }

    /// Adds `force` to every vertex velocity.
    pub fn apply_impulse(&mut self, force: Vec3) {
        self.state.apply_impulse(force);
    }

    /// Refits the mesh bounding box to the current positions.
    pub fn update_bounding_box(&mut self) {
        self.mesh.update_bounding_box();
    }

    /// Model matrix for rendering.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    /// Nearest hit of a world-space ray, skipping triangles that contain
    /// `exclude`. Uses the bounding box as of the last refresh.
    pub fn pick(&self, ray: &Ray, exclude: Option<VertexId>) -> Option<RayHit> {
        let local = Ray::new(ray.origin - self.position, ray.direction);
        self.mesh.intersect(&local, exclude)
    }

    /// Pins `vertex` at its current position: zero inverse mass plus a
    /// `Fixed` constraint the solver can project.
    pub fn pin(&mut self, vertex: VertexId) -> PliantResult<()> {
        let target = self.mesh.position(vertex).ok_or(PliantError::IndexOutOfRange {
            kind: "vertex",
            index: vertex.index(),
            len: self.mesh.vertex_count(),
        })?;
        self.state.set_inverse_mass(vertex, 0.0)?;
        self.state.add_constraint(Constraint::fixed(vertex, target))
    }

    /// Adds one distance constraint per mesh edge at its current length.
    pub fn add_edge_constraints(&mut self, stiffness: f32) {
        let constraints = crate::constraint::distance_constraints_from_edges(&self.mesh, stiffness);
        self.state.constraints.extend(constraints);
    }
}
