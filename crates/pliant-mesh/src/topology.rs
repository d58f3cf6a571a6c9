//! Mesh topology: vertex references, triangles, canonical edges and
//! edge → triangle adjacency.
//!
//! Built once when a mesh is loaded. Topology never changes afterwards;
//! only position values move.

use std::collections::{BTreeMap, BTreeSet};

use pliant_types::TriangleId;
use serde::{Deserialize, Serialize};

/// One corner of a face: independent indices into the position, UV and
/// normal arrays (OBJ-style indirection). All indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexRef {
    /// Index into the position array.
    pub position: usize,
    /// Index into the UV array, if the face supplied one.
    pub uv: Option<usize>,
    /// Index into the source normal array, if the face supplied one.
    pub normal: Option<usize>,
}

impl VertexRef {
    /// A reference to a position with no UV or normal.
    #[inline]
    pub fn new(position: usize) -> Self {
        Self {
            position,
            uv: None,
            normal: None,
        }
    }

    #[inline]
    pub fn with_uv(mut self, uv: usize) -> Self {
        self.uv = Some(uv);
        self
    }

    #[inline]
    pub fn with_normal(mut self, normal: usize) -> Self {
        self.normal = Some(normal);
        self
    }
}

/// Exactly three vertex references in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub refs: [VertexRef; 3],
}

impl Triangle {
    #[inline]
    pub fn new(refs: [VertexRef; 3]) -> Self {
        Self { refs }
    }

    /// A triangle whose corners only carry position indices.
    #[inline]
    pub fn from_positions(positions: [usize; 3]) -> Self {
        Self::new(positions.map(VertexRef::new))
    }

    /// The three position indices in winding order.
    #[inline]
    pub fn positions(&self) -> [usize; 3] {
        [
            self.refs[0].position,
            self.refs[1].position,
            self.refs[2].position,
        ]
    }

    /// Returns true if any corner references position `index`.
    #[inline]
    pub fn contains_position(&self, index: usize) -> bool {
        self.refs.iter().any(|r| r.position == index)
    }

    /// The three canonical edges: `(v0, v1)`, `(v0, v2)`, `(v1, v2)`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.positions();
        [Edge::new(a, b), Edge::new(a, c), Edge::new(b, c)]
    }
}

/// An undirected edge between two position indices.
///
/// Always stored as `(min, max)`, so `Edge::new(3, 1) == Edge::new(1, 3)`
/// and the derived ordering/hash act on the canonical pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// The smaller position index.
    #[inline]
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// The larger position index.
    #[inline]
    pub fn hi(&self) -> usize {
        self.hi
    }

    #[inline]
    pub fn vertices(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.lo == index || self.hi == index
    }
}

/// Deduplicated edge set plus the triangles sharing each edge.
///
/// Adjacency lists keep triangles in the order they were added, so the
/// first entry of an edge is always the lowest-numbered triangle.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    edges: BTreeSet<Edge>,
    adjacency: BTreeMap<Edge, Vec<TriangleId>>,
}

impl Topology {
    /// Build topology from a triangle list.
    pub fn build(triangles: &[Triangle]) -> Self {
        let mut topology = Self::default();
        for (index, triangle) in triangles.iter().enumerate() {
            topology.insert(TriangleId::from(index), triangle);
        }
        topology
    }

    fn insert(&mut self, id: TriangleId, triangle: &Triangle) {
        for edge in triangle.edges() {
            self.edges.insert(edge);
            self.adjacency.entry(edge).or_default().push(id);
        }
    }

    /// The canonical edge set.
    #[inline]
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Edge → triangles containing that edge.
    #[inline]
    pub fn adjacency(&self) -> &BTreeMap<Edge, Vec<TriangleId>> {
        &self.adjacency
    }

    /// Triangles sharing `edge`; empty if the edge is not in the mesh.
    pub fn adjacent_triangles(&self, edge: &Edge) -> &[TriangleId] {
        self.adjacency.get(edge).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges with exactly one adjacent triangle.
    pub fn boundary_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .iter()
            .filter(|(_, tris)| tris.len() == 1)
            .map(|(edge, _)| edge)
    }

    /// Returns the number of boundary edges.
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary_edges().count()
    }

    /// Edges shared by more than two triangles.
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .iter()
            .filter(|(_, tris)| tris.len() > 2)
            .map(|(edge, _)| edge)
    }

    /// Returns true if the mesh has edges and none of them is a boundary.
    pub fn is_closed(&self) -> bool {
        !self.edges.is_empty() && self.boundary_edge_count() == 0
    }
}
