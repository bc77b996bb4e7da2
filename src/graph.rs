//! Vertex storage, edge mutation and topological ordering.
//!
//! A [`Graph`] keeps its vertices in insertion order; a vertex's position is its stable
//! [`VertexId`]. Adjacency is a dense boolean matrix stored as one bitset row per vertex, where
//! bit `j` of row `i` means "edge from vertex `i` to vertex `j`". The matrix is always square:
//! adding a vertex extends every existing row by one cleared bit.
//!
//! Edge semantics depend on the variant marker `K` (see [`crate::kind`]). Source detection and
//! sorting are only offered on directional variants.

use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::bitset::BitSet;
use crate::error::{GraphError, GraphResult};
use crate::kind::{Directed, Directional, EdgeKind};
use crate::vertex::{Vertex, VertexId};

/// Outcome of one pass of Kahn's algorithm.
///
/// Sorting is a probe as much as a query: the acyclic variant runs it after every tentative edge
/// and branches on the outcome. [`Graph::topological_sort`] turns it into a [`GraphResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Every vertex was ordered; each edge points from an earlier to a later entry.
    Ordered(Vec<VertexId>),
    /// Edges were left over. `unresolved` lists the vertices that never reached in-degree zero,
    /// in id order: the members of at least one cycle plus anything only reachable through one.
    Cyclic { unresolved: Vec<VertexId> },
}

impl SortOutcome {
    pub fn is_ordered(&self) -> bool {
        matches!(self, SortOutcome::Ordered(_))
    }
}

/// In-memory graph of uniquely named vertices.
///
/// # Examples
///
/// ```
/// use jobdag::{DirectedAcyclicGraph, Vertex};
///
/// let mut dag = DirectedAcyclicGraph::new();
/// dag.add_vertex(Vertex::new("a"))?
///     .add_vertex(Vertex::new("b"))?
///     .add_vertex(Vertex::new("c"))?
///     .add_vertex(Vertex::new("d"))?;
/// dag.add_edge("a", "d")?.add_edge("d", "c")?;
///
/// assert_eq!(dag.topological_order()?, vec!["b", "a", "d", "c"]);
///
/// // Closing the loop is refused and leaves the graph untouched.
/// assert!(dag.add_edge("c", "a").is_err());
/// assert!(!dag.has_edge("c", "a"));
/// # Ok::<(), jobdag::GraphError>(())
/// ```
pub struct Graph<K: EdgeKind = Directed> {
    vertices: Vec<Vertex>,
    _kind: PhantomData<K>,
}

impl<K: EdgeKind> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EdgeKind> Clone for Graph<K> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: EdgeKind> fmt::Debug for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &std::any::type_name::<K>())
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl<K: EdgeKind> Graph<K> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            _kind: PhantomData,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Vertex names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(Vertex::name)
    }

    /// Maps ids back to names. Ids not issued by this graph are skipped.
    pub fn names_of(&self, ids: &[VertexId]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.name_of(id)).collect()
    }

    pub(crate) fn name_of(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id.0).map(Vertex::name)
    }

    pub(crate) fn owned_names(&self, ids: &[VertexId]) -> Vec<String> {
        self.names_of(ids).into_iter().map(str::to_owned).collect()
    }

    pub fn find_vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.name() == name)
    }

    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name() == name)
            .map(VertexId)
    }

    /// Like [`Graph::index_of`], but reports a missing vertex as an error.
    pub fn vertex_id(&self, name: &str) -> GraphResult<VertexId> {
        self.index_of(name)
            .ok_or_else(|| GraphError::vertex_not_found(name))
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Appends a vertex, extending the adjacency matrix by one cleared row and column.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateVertex`] if a vertex with the same name exists; the graph is left
    /// unchanged.
    pub fn add_vertex(&mut self, mut vertex: Vertex) -> GraphResult<&mut Self> {
        if self.contains_vertex(vertex.name()) {
            return Err(GraphError::duplicate_vertex(vertex.name()));
        }

        let len = self.vertices.len() + 1;
        for existing in &mut self.vertices {
            existing.neighbours.grow(len);
            debug_assert_eq!(existing.neighbours.len(), len);
        }
        vertex.neighbours = BitSet::new_empty(len);

        #[cfg(feature = "tracing")]
        debug!(vertex = vertex.name(), id = len - 1, "added vertex");

        self.vertices.push(vertex);
        Ok(self)
    }

    /// Shorthand for `add_vertex(Vertex::new(name))`.
    pub fn add_vertex_named(&mut self, name: impl Into<String>) -> GraphResult<&mut Self> {
        self.add_vertex(Vertex::new(name))
    }

    /// Adds the edge `start -> end` following the variant's edge semantics.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyGraph`] if the graph has no vertices
    /// - [`GraphError::EdgeSourceNotFound`] / [`GraphError::EdgeTargetNotFound`] for a missing
    ///   endpoint
    /// - on acyclic graphs, [`GraphError::SelfDependency`] for `start == end` and
    ///   [`GraphError::UnexpectedCycle`] if the edge would close a cycle
    ///
    /// A failed call leaves the graph exactly as it was.
    pub fn add_edge(&mut self, start: &str, end: &str) -> GraphResult<&mut Self> {
        if self.vertices.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let from = self
            .index_of(start)
            .ok_or_else(|| GraphError::EdgeSourceNotFound { name: start.into() })?;
        let to = self
            .index_of(end)
            .ok_or_else(|| GraphError::EdgeTargetNotFound { name: end.into() })?;

        K::link(self, from, to)?;

        #[cfg(feature = "tracing")]
        trace!(start, end, "added edge");

        Ok(self)
    }

    /// Removes the edge `start -> end`. Removing an edge that does not exist is a no-op.
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeRemovalSourceNotFound`] / [`GraphError::EdgeRemovalTargetNotFound`] for a
    /// missing endpoint.
    pub fn remove_edge(&mut self, start: &str, end: &str) -> GraphResult<&mut Self> {
        let from = self
            .index_of(start)
            .ok_or_else(|| GraphError::EdgeRemovalSourceNotFound { name: start.into() })?;
        let to = self
            .index_of(end)
            .ok_or_else(|| GraphError::EdgeRemovalTargetNotFound { name: end.into() })?;

        K::unlink(self, from, to);

        #[cfg(feature = "tracing")]
        trace!(start, end, "removed edge");

        Ok(self)
    }

    /// Returns true if the edge `start -> end` exists. Missing vertices yield false.
    pub fn has_edge(&self, start: &str, end: &str) -> bool {
        match (self.index_of(start), self.index_of(end)) {
            (Some(from), Some(to)) => self.cell(from, to),
            _ => false,
        }
    }

    /// Returns true if any adjacency cell is set.
    pub fn has_edges(&self) -> bool {
        self.vertices.iter().any(|v| v.neighbours.any())
    }

    /// Number of set adjacency cells. A mirrored edge counts once per direction.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    /// Set adjacency cells as `(start, end)` names, in vertex order then neighbour order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vertices.iter().flat_map(move |v| {
            v.neighbours()
                .filter_map(move |to| self.name_of(to).map(|end| (v.name(), end)))
        })
    }

    pub(crate) fn cell(&self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get(from.0)
            .is_some_and(|v| v.neighbours.get(to.0))
    }

    pub(crate) fn set_cell(&mut self, from: VertexId, to: VertexId) {
        if let Some(v) = self.vertices.get_mut(from.0) {
            v.neighbours.set(to.0);
        }
    }

    pub(crate) fn clear_cell(&mut self, from: VertexId, to: VertexId) {
        if let Some(v) = self.vertices.get_mut(from.0) {
            v.neighbours.clear(to.0);
        }
    }
}

impl<K: Directional> Graph<K> {
    /// Ids of vertices with in-degree zero, in insertion order.
    ///
    /// Starts from the full id set and drops every id that is the target of some edge.
    pub fn find_source_vertex_indexes(&self) -> Vec<VertexId> {
        let len = self.vertices.len();
        let mut targets = BitSet::new_empty(len);
        for v in &self.vertices {
            targets.union_with(&v.neighbours);
        }

        let mut sources = BitSet::new_full(len);
        sources.subtract_with(&targets);
        sources.ones().map(VertexId).collect()
    }

    /// Returns true if the named vertex has no incoming edges. Unknown names yield false.
    pub fn is_source(&self, name: &str) -> bool {
        self.index_of(name).is_some_and(|id| self.is_source_id(id))
    }

    /// Returns true if `id` has no incoming edges. Ids not issued by this graph yield false.
    pub fn is_source_id(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len() && !self.vertices.iter().any(|v| v.neighbours.get(id.0))
    }

    /// Runs Kahn's algorithm without touching the graph.
    ///
    /// The ready set is a stack seeded with [`Graph::find_source_vertex_indexes`]: the most
    /// recently readied vertex is emitted first, and a vertex's targets are visited in id order.
    /// Among vertices with no ordering constraint this picks one fixed order; nothing else about
    /// tie order is promised.
    ///
    /// Edge deletion is simulated on a private in-degree table, so the adjacency rows are only
    /// read.
    pub fn sort_outcome(&self) -> SortOutcome {
        let len = self.vertices.len();
        let mut in_degree = vec![0_usize; len];
        for v in &self.vertices {
            for to in v.neighbours.ones() {
                in_degree[to] += 1;
            }
        }

        let mut ready = self.find_source_vertex_indexes();
        let mut order = Vec::with_capacity(len);

        while let Some(next) = ready.pop() {
            order.push(next);
            for to in self.vertices[next.0].neighbours.ones() {
                in_degree[to] -= 1;
                if in_degree[to] == 0 {
                    ready.push(VertexId(to));
                }
            }
        }

        if order.len() == len {
            SortOutcome::Ordered(order)
        } else {
            let unresolved = in_degree
                .iter()
                .enumerate()
                .filter(|&(_, &degree)| degree > 0)
                .map(|(idx, _)| VertexId(idx))
                .collect();
            SortOutcome::Cyclic { unresolved }
        }
    }

    /// Orders all vertices so that every edge points from an earlier to a later entry.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnexpectedCycle`] if the graph holds a cycle. Never fails on an acyclic graph.
    pub fn topological_sort(&self) -> GraphResult<Vec<VertexId>> {
        match self.sort_outcome() {
            SortOutcome::Ordered(order) => {
                #[cfg(feature = "tracing")]
                debug!(vertex_count = order.len(), "topological sort complete");

                Ok(order)
            }
            SortOutcome::Cyclic { unresolved } => Err(GraphError::UnexpectedCycle {
                unresolved: self.owned_names(&unresolved),
            }),
        }
    }

    /// [`Graph::topological_sort`] with ids mapped back to names.
    pub fn topological_order(&self) -> GraphResult<Vec<&str>> {
        let order = self.topological_sort()?;
        Ok(self.names_of(&order))
    }

    pub fn has_cycle(&self) -> bool {
        !self.sort_outcome().is_ordered()
    }
}
