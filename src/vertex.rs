//! Named graph vertices and their stable identifiers.

use crate::bitset::BitSet;

/// Stable identifier of a vertex within its graph.
///
/// Identifiers are insertion indices: the first vertex added is `VertexId(0)`. Vertices are never
/// removed, so an identifier stays valid for the lifetime of the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the raw insertion index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named node holding its outgoing adjacency row.
///
/// Bit `i` of the row is set when there is an edge from this vertex to the vertex with id `i`.
/// A vertex has no meaning outside the graph that owns it; [`Vertex::new`] produces a detached
/// vertex whose row is sized when it is handed to [`crate::Graph::add_vertex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    pub(crate) neighbours: BitSet,
}

impl Vertex {
    /// Creates a detached vertex with no edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbours: BitSet::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this vertex has an edge to `id`.
    pub fn has_neighbour(&self, id: VertexId) -> bool {
        self.neighbours.get(id.0)
    }

    /// Targets of this vertex's outgoing edges, in id order.
    pub fn neighbours(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbours.ones().map(VertexId)
    }

    pub fn out_degree(&self) -> usize {
        self.neighbours.count_ones()
    }
}
