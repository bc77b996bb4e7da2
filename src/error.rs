//! Error types for graph operations.
//!
//! Every fallible graph operation reports a [`GraphError`]. Several variants describe the same
//! underlying condition from different call sites (an edge endpoint missing during insertion vs.
//! removal, for example); [`GraphError::kind`] folds them back onto a small [`ErrorKind`]
//! taxonomy so callers can branch without matching every variant.

use std::convert::Infallible;

use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building, mutating or sorting a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A lookup referenced a vertex that is not in the graph
    #[error("Vertex '{name}' could not be found")]
    VertexNotFound {
        /// The name that was looked up
        name: String,
    },

    /// A vertex with the same name is already present
    #[error("Vertex with this name already exists in the graph")]
    DuplicateVertex {
        /// The duplicated name
        name: String,
    },

    /// Edge insertion attempted before any vertex exists
    #[error("No edges can be added to an empty graph")]
    EmptyGraph,

    /// The start vertex of a new edge is missing
    #[error("Edge cannot be added. First vertex could not be found")]
    EdgeSourceNotFound {
        /// The missing start vertex
        name: String,
    },

    /// The end vertex of a new edge is missing
    #[error("Edge cannot be added. Second vertex could not be found")]
    EdgeTargetNotFound {
        /// The missing end vertex
        name: String,
    },

    /// The start vertex of an edge being removed is missing
    #[error("Edge removal error. First vertex could not be found")]
    EdgeRemovalSourceNotFound {
        /// The missing start vertex
        name: String,
    },

    /// The end vertex of an edge being removed is missing
    #[error("Edge removal error. Second vertex could not be found")]
    EdgeRemovalTargetNotFound {
        /// The missing end vertex
        name: String,
    },

    /// An acyclic graph refused an edge from a vertex to itself
    #[error("Edge cannot be added as it would create a self-dependency")]
    SelfDependency {
        /// The vertex that would depend on itself
        name: String,
    },

    /// Kahn's algorithm finished with edges left over
    #[error("Topological sort could not be performed. Graph has at least one cycle")]
    UnexpectedCycle {
        /// Vertices that could not be ordered, in insertion order
        unresolved: Vec<String>,
    },

    /// Textual build input does not match the `name=>name,...` grammar
    #[error("String representation of the graph is invalid")]
    InvalidGraphText {
        /// The rejected input
        text: String,
    },

    /// Build input is neither a mapping nor a string
    #[error("Unsupported data type for build function")]
    UnsupportedBuildInput {
        /// Short description of what was supplied instead
        found: &'static str,
    },
}

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    VertexNotFound,
    DuplicateVertex,
    EmptyGraph,
    SelfDependency,
    UnexpectedCycle,
    InvalidGraphText,
    UnsupportedBuildInput,
}

impl GraphError {
    /// Returns the kind of condition this error reports.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexNotFound { .. }
            | GraphError::EdgeSourceNotFound { .. }
            | GraphError::EdgeTargetNotFound { .. }
            | GraphError::EdgeRemovalSourceNotFound { .. }
            | GraphError::EdgeRemovalTargetNotFound { .. } => ErrorKind::VertexNotFound,
            GraphError::DuplicateVertex { .. } => ErrorKind::DuplicateVertex,
            GraphError::EmptyGraph => ErrorKind::EmptyGraph,
            GraphError::SelfDependency { .. } => ErrorKind::SelfDependency,
            GraphError::UnexpectedCycle { .. } => ErrorKind::UnexpectedCycle,
            GraphError::InvalidGraphText { .. } => ErrorKind::InvalidGraphText,
            GraphError::UnsupportedBuildInput { .. } => ErrorKind::UnsupportedBuildInput,
        }
    }

    pub(crate) fn vertex_not_found(name: impl Into<String>) -> Self {
        Self::VertexNotFound { name: name.into() }
    }

    pub(crate) fn duplicate_vertex(name: impl Into<String>) -> Self {
        Self::DuplicateVertex { name: name.into() }
    }

    pub(crate) fn self_dependency(name: impl Into<String>) -> Self {
        Self::SelfDependency { name: name.into() }
    }

    pub(crate) fn invalid_text(text: impl Into<String>) -> Self {
        Self::InvalidGraphText { text: text.into() }
    }
}

// Lets infallible `From` conversions flow through `TryInto`-based build APIs.
impl From<Infallible> for GraphError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
