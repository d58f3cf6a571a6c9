//! Mesh validation.
//!
//! Validates a loaded mesh before it reaches rendering or the solver,
//! catching data-level errors early with clear diagnostics.

use pliant_mesh::DeformableMesh;
use pliant_types::{PliantError, PliantResult};

/// Validates a mesh for rendering and picking.
///
/// Checks:
/// - Mesh integrity (UV/normal references, edge count, snapshot length)
/// - At least one face (a zero-face mesh cannot be rendered or picked)
/// - All positions are finite
///
/// Non-manifold edges are legal input and only logged.
pub fn validate_mesh(mesh: &DeformableMesh) -> PliantResult<()> {
    mesh.validate()?;

    if !mesh.is_renderable() {
        return Err(PliantError::InvalidMesh("Mesh has no faces".into()));
    }

    if let Some(i) = mesh.vertices().iter().position(|v| !v.is_finite()) {
        return Err(PliantError::InvalidMesh(format!(
            "Position {} is not finite: {:?}",
            i,
            mesh.vertices()[i]
        )));
    }

    let non_manifold = mesh.topology().non_manifold_edges().count();
    if non_manifold > 0 {
        tracing::warn!(edges = non_manifold, "mesh has non-manifold edges");
    }

    Ok(())
}
