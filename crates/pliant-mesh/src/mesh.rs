//! Core deformable mesh type.
//!
//! Positions are stored as an array of `Vec3` and mutate every simulation
//! step. Everything else (UVs, source normals, triangles, edges,
//! adjacency) is fixed at construction. A frozen copy of the positions,
//! taken at construction, backs [`DeformableMesh::reset_positions`].

use pliant_math::{Vec2, Vec3};
use pliant_types::{PliantError, PliantResult, TriangleId, VertexId};

use crate::bounds::BoundingBox;
use crate::normals::{compute_face_normals, compute_vertex_normals};
use crate::topology::{Edge, Topology, Triangle};

/// A triangle mesh whose positions deform while its topology stays fixed.
///
/// The bounding box is owned by value and is **not** refreshed
/// automatically. After moving positions (`translate`, `reset_positions`,
/// or a solver writing through [`vertices_mut`](Self::vertices_mut)),
/// call [`update_bounding_box`](Self::update_bounding_box) before running
/// ray queries, otherwise the fast reject tests a stale box.
#[derive(Debug, Clone, Default)]
pub struct DeformableMesh {
    vertices: Vec<Vec3>,
    initial_vertices: Vec<Vec3>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
    topology: Topology,
    face_normals: Vec<Vec3>,
    bounding_box: BoundingBox,
}

impl DeformableMesh {
    /// Builds a mesh from parsed geometry.
    ///
    /// Triangles referencing a position that does not exist are dropped
    /// (with a warning) so later normal and ray computations can index
    /// without bounds failures. Edges and adjacency are derived from the
    /// surviving triangles, the current positions are snapshotted, face
    /// normals are generated and the bounding box is computed.
    pub fn new(vertices: Vec<Vec3>, uvs: Vec<Vec2>, normals: Vec<Vec3>, triangles: Vec<Triangle>) -> Self {
        Self::build(vertices, uvs, normals, triangles).0
    }

    /// Like [`new`](Self::new), also returning how many triangles were
    /// dropped for referencing missing positions.
    pub fn build(
        vertices: Vec<Vec3>,
        uvs: Vec<Vec2>,
        normals: Vec<Vec3>,
        mut triangles: Vec<Triangle>,
    ) -> (Self, usize) {
        let vertex_count = vertices.len();
        let before = triangles.len();
        triangles.retain(|tri| tri.positions().iter().all(|&p| p < vertex_count));
        let dropped = before - triangles.len();
        if dropped > 0 {
            tracing::warn!(
                dropped,
                vertex_count,
                "dropped triangles referencing missing positions"
            );
        }

        let topology = Topology::build(&triangles);
        let face_normals = compute_face_normals(&vertices, &triangles);
        let bounding_box = BoundingBox::from_points(&vertices);

        let mesh = Self {
            initial_vertices: vertices.clone(),
            vertices,
            uvs,
            normals,
            triangles,
            topology,
            face_normals,
            bounding_box,
        };
        (mesh, dropped)
    }

    /// An empty but valid mesh (zero vertices, zero faces).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of vertex positions.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }

    /// A mesh without faces cannot be rendered or picked.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        !self.triangles.is_empty()
    }

    /// Current (possibly deformed) positions.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Mutable positions for the solver. The slice length is fixed.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vec3] {
        &mut self.vertices
    }

    /// Positions as they were right after construction.
    #[inline]
    pub fn initial_vertices(&self) -> &[Vec3] {
        &self.initial_vertices
    }

    /// Returns the position of vertex `id`, if it exists.
    #[inline]
    pub fn position(&self, id: VertexId) -> Option<Vec3> {
        self.vertices.get(id.index()).copied()
    }

    #[inline]
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Source normals read from the file (`vn` records), not derived ones.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn triangle(&self, id: TriangleId) -> Option<&Triangle> {
        self.triangles.get(id.index())
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn edges(&self) -> &std::collections::BTreeSet<Edge> {
        self.topology.edges()
    }

    #[inline]
    pub fn adjacency(&self) -> &std::collections::BTreeMap<Edge, Vec<TriangleId>> {
        self.topology.adjacency()
    }

    #[inline]
    pub fn adjacent_triangles(&self, edge: &Edge) -> &[TriangleId] {
        self.topology.adjacent_triangles(edge)
    }

    /// Face normals from the last [`generate_face_normals`](Self::generate_face_normals).
    #[inline]
    pub fn face_normals(&self) -> &[Vec3] {
        &self.face_normals
    }

    /// Recompute one flat normal per triangle from the current positions.
    ///
    /// Normals are not tracked against position changes; call this again
    /// after deforming the mesh.
    pub fn generate_face_normals(&mut self) {
        self.face_normals = compute_face_normals(&self.vertices, &self.triangles);
    }

    /// Smooth per-vertex normals for shading, computed from the current
    /// positions. Not stored.
    pub fn vertex_normals(&self) -> Vec<Vec3> {
        let face_normals = compute_face_normals(&self.vertices, &self.triangles);
        compute_vertex_normals(self.vertices.len(), &self.triangles, &face_normals)
    }

    /// Restore every position to the construction-time snapshot.
    pub fn reset_positions(&mut self) {
        self.vertices.copy_from_slice(&self.initial_vertices);
    }

    /// Rigidly shift every position by `delta`, bypassing any solver.
    pub fn translate(&mut self, delta: Vec3) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// The bounding box as of the last refresh.
    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Refit the bounding box to the current positions.
    pub fn update_bounding_box(&mut self) {
        self.bounding_box.recompute(&self.vertices);
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Every UV and normal reference points into its array
    /// - The edge set is no larger than three edges per triangle
    /// - The initial snapshot matches the live position count
    pub fn validate(&self) -> PliantResult<()> {
        for tri in &self.triangles {
            for r in &tri.refs {
                if let Some(uv) = r.uv {
                    if uv >= self.uvs.len() {
                        return Err(PliantError::IndexOutOfRange {
                            kind: "uv",
                            index: uv,
                            len: self.uvs.len(),
                        });
                    }
                }
                if let Some(n) = r.normal {
                    if n >= self.normals.len() {
                        return Err(PliantError::IndexOutOfRange {
                            kind: "normal",
                            index: n,
                            len: self.normals.len(),
                        });
                    }
                }
            }
        }

        if self.topology.edge_count() > 3 * self.triangles.len() {
            return Err(PliantError::InvalidMesh(format!(
                "Edge count ({}) exceeds three per triangle ({} triangles)",
                self.topology.edge_count(),
                self.triangles.len()
            )));
        }

        if self.initial_vertices.len() != self.vertices.len() {
            return Err(PliantError::InvalidMesh(format!(
                "Initial snapshot has {} positions, mesh has {}",
                self.initial_vertices.len(),
                self.vertices.len()
            )));
        }

        Ok(())
    }
}
