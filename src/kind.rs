//! Graph variants.
//!
//! A [`Graph`] is parameterized by a marker type that fixes its edge semantics once, at
//! construction:
//!
//! - [`Undirected`]: every edge is mirrored, so `a -> b` implies `b -> a`.
//! - [`Directed`]: edges point one way; source detection and sorting are available.
//! - [`Acyclic`]: directed, and every edge insertion is guarded so the graph never holds a cycle.
//!
//! The marker traits are sealed; the three variants above are the only implementations.

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, SortOutcome};
use crate::vertex::VertexId;

mod private {
    pub trait Sealed {}
}

/// Edge mutation policy of a graph variant.
pub trait EdgeKind: private::Sealed + Sized {
    /// Whether an edge from a vertex to itself is refused.
    #[doc(hidden)]
    const REJECTS_SELF_LOOPS: bool = false;

    #[doc(hidden)]
    fn link(graph: &mut Graph<Self>, start: VertexId, end: VertexId) -> GraphResult<()>;

    #[doc(hidden)]
    fn unlink(graph: &mut Graph<Self>, start: VertexId, end: VertexId);
}

/// Variants whose edges have a direction, enabling source detection and topological sorting.
pub trait Directional: EdgeKind {}

/// Marker for graphs whose edges are symmetric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

/// Marker for graphs whose edges point from start to end only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for directed graphs that reject any edge closing a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acyclic;

/// Graph with mirrored edges.
pub type UndirectedGraph = Graph<Undirected>;

/// Graph with one-way edges; cycles are allowed.
pub type DirectedGraph = Graph<Directed>;

/// Graph with one-way edges that stays acyclic at every observable point.
pub type DirectedAcyclicGraph = Graph<Acyclic>;

impl private::Sealed for Undirected {}
impl private::Sealed for Directed {}
impl private::Sealed for Acyclic {}

impl EdgeKind for Undirected {
    fn link(graph: &mut Graph<Self>, start: VertexId, end: VertexId) -> GraphResult<()> {
        graph.set_cell(start, end);
        graph.set_cell(end, start);
        Ok(())
    }

    fn unlink(graph: &mut Graph<Self>, start: VertexId, end: VertexId) {
        graph.clear_cell(start, end);
        graph.clear_cell(end, start);
    }
}

impl EdgeKind for Directed {
    fn link(graph: &mut Graph<Self>, start: VertexId, end: VertexId) -> GraphResult<()> {
        graph.set_cell(start, end);
        Ok(())
    }

    fn unlink(graph: &mut Graph<Self>, start: VertexId, end: VertexId) {
        graph.clear_cell(start, end);
    }
}

impl EdgeKind for Acyclic {
    const REJECTS_SELF_LOOPS: bool = true;

    /// Sets the edge tentatively and keeps it only if a full Kahn pass still orders every vertex.
    /// On failure exactly that one cell is unset again, so the graph is left as it was.
    fn link(graph: &mut Graph<Self>, start: VertexId, end: VertexId) -> GraphResult<()> {
        if start == end {
            let name = graph.name_of(start).unwrap_or_default().to_owned();
            return Err(GraphError::self_dependency(name));
        }

        // An existing edge cannot introduce a new cycle.
        if graph.cell(start, end) {
            return Ok(());
        }

        graph.set_cell(start, end);

        match graph.sort_outcome() {
            SortOutcome::Ordered(_) => Ok(()),
            SortOutcome::Cyclic { unresolved } => {
                graph.clear_cell(start, end);

                #[cfg(feature = "tracing")]
                debug!(
                    start = start.0,
                    end = end.0,
                    unresolved_count = unresolved.len(),
                    "edge would close a cycle, rolled back"
                );

                Err(GraphError::UnexpectedCycle {
                    unresolved: graph.owned_names(&unresolved),
                })
            }
        }
    }

    fn unlink(graph: &mut Graph<Self>, start: VertexId, end: VertexId) {
        graph.clear_cell(start, end);
    }
}

impl Directional for Directed {}
impl Directional for Acyclic {}
