//! In-memory dependency graphs
//!
//! A small directed-acyclic-graph engine for expressing dependencies between named jobs and
//! deriving a valid order to run them in.
//!
//! # Features
//!
//! - **Three variants, one type**: [`Graph`] is parameterized by its edge semantics:
//!   [`UndirectedGraph`] mirrors every edge, [`DirectedGraph`] keeps edges one-way, and
//!   [`DirectedAcyclicGraph`] additionally refuses any edge that would close a cycle.
//! - **Guarded edge insertion**: on the acyclic variant every [`Graph::add_edge`] is validated by
//!   a full topological sort; a rejected edge is rolled back, so a failed call leaves the graph
//!   exactly as it was.
//! - **Kahn's algorithm**: [`Graph::topological_sort`] orders vertices so every edge points
//!   forward, and reports [`GraphError::UnexpectedCycle`] otherwise.
//! - **Text and mapping input**: [`Graph::build`] accepts `(name, dependency)` pairs, the
//!   `name=>target,...` text form, or (with the `json` feature) a `serde_json::Value`;
//!   [`Graph::to_text`] renders the same text form.
//! - **Job ordering**: [`JobDependencyResolver`] turns "job depends on job" data into an
//!   execution sequence with dependencies first.
//!
//! # Quick Start
//!
//! ```
//! use jobdag::JobDependencyResolver;
//!
//! let resolver = JobDependencyResolver::new("deploy=>build,build=>fetch,lint=>")?;
//! let sequence = resolver.sequence()?;
//!
//! let pos = |job| sequence.iter().position(|j| *j == job).unwrap();
//! assert!(pos("fetch") < pos("build"));
//! assert!(pos("build") < pos("deploy"));
//! # Ok::<(), jobdag::ResolveError>(())
//! ```
//!
//! # Working with the graph directly
//!
//! ```
//! use jobdag::{DirectedAcyclicGraph, ErrorKind};
//!
//! let mut dag: DirectedAcyclicGraph = "a=>b,b=>c".parse()?;
//!
//! let err = dag.add_edge("c", "a").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnexpectedCycle);
//! assert_eq!(dag.to_text(), "a=>b,b=>c,c=>");
//!
//! assert_eq!(dag.topological_order()?, vec!["a", "b", "c"]);
//! # Ok::<(), jobdag::GraphError>(())
//! ```
//!
//! # Ordering of ties
//!
//! Kahn's algorithm keeps its ready vertices on a stack seeded in insertion order, so among
//! vertices with no ordering constraint the most recently readied one is emitted first. That
//! order is deterministic for a given graph but is not part of the API contract; rely only on
//! "every edge points forward".
//!
//! # Cargo features
//!
//! - `json` (default): `serde_json::Value` build input.
//! - `tracing`: structured `debug`/`trace` events for vertex and edge mutation, cycle-guard
//!   rollbacks, sorting and resolver construction.
//!
//! # Concurrency
//!
//! Graphs are plain owned data: `Send` and `Sync`, with mutation through `&mut self`. Share one
//! across threads behind a lock if it must be mutated from several places.

mod bitset;
mod error;
mod graph;
pub mod kind;
mod resolver;
mod text;
mod vertex;

pub use error::{ErrorKind, GraphError, GraphResult};
pub use graph::{Graph, SortOutcome};
pub use kind::{
    Acyclic, Directed, DirectedAcyclicGraph, DirectedGraph, Directional, EdgeKind, Undirected,
    UndirectedGraph,
};
pub use resolver::{JobDependencyResolver, ResolveError};
pub use text::BuildInput;
pub use vertex::{Vertex, VertexId};
