//! Position constraints consumed by the solver.
//!
//! The arity of a constraint is part of its variant, so a `Distance`
//! constraint can never be built with one vertex.

use pliant_math::Vec3;
use pliant_mesh::DeformableMesh;
use pliant_types::constants::DEFAULT_STIFFNESS;
use pliant_types::VertexId;
use serde::{Deserialize, Serialize};

/// A constraint over one or two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Holds a vertex at `target`.
    Fixed { vertex: VertexId, target: Vec3 },
    /// Keeps two vertices `distance` apart.
    Distance {
        vertices: [VertexId; 2],
        distance: f32,
        stiffness: f32,
    },
}

impl Constraint {
    /// Pins `vertex` to `target`.
    pub fn fixed(vertex: VertexId, target: Vec3) -> Self {
        Self::Fixed { vertex, target }
    }

    /// Distance constraint with [`DEFAULT_STIFFNESS`].
    pub fn distance(a: VertexId, b: VertexId, distance: f32) -> Self {
        Self::Distance {
            vertices: [a, b],
            distance,
            stiffness: DEFAULT_STIFFNESS,
        }
    }

    /// Returns a copy with the given stiffness. Fixed constraints are
    /// always rigid and are returned unchanged.
    pub fn with_stiffness(self, stiffness: f32) -> Self {
        match self {
            Self::Distance {
                vertices, distance, ..
            } => Self::Distance {
                vertices,
                distance,
                stiffness,
            },
            fixed => fixed,
        }
    }

    /// Number of vertices involved (1 or 2).
    pub fn cardinality(&self) -> usize {
        self.indices().len()
    }

    /// The vertices involved, in declaration order.
    pub fn indices(&self) -> &[VertexId] {
        match self {
            Self::Fixed { vertex, .. } => std::slice::from_ref(vertex),
            Self::Distance { vertices, .. } => vertices,
        }
    }

    /// Returns true if the constraint involves `vertex`.
    pub fn involves(&self, vertex: VertexId) -> bool {
        self.indices().contains(&vertex)
    }
}

/// One distance constraint per mesh edge, at the edge's current length.
///
/// Follows the mesh's canonical edge order, so the output is
/// deterministic.
pub fn distance_constraints_from_edges(mesh: &DeformableMesh, stiffness: f32) -> Vec<Constraint> {
    let positions = mesh.vertices();
    mesh.edges()
        .iter()
        .map(|edge| {
            let (a, b) = edge.vertices();
            let rest = positions[a].distance(positions[b]);
            Constraint::distance(VertexId::from(a), VertexId::from(b), rest).with_stiffness(stiffness)
        })
        .collect()
}
