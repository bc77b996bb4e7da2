//! Job execution ordering on top of [`DirectedAcyclicGraph`].
//!
//! Each job is a vertex; "job depends on dependency" is the edge `job -> dependency`. A
//! topological sort therefore lists dependents before their dependencies, and the resolver
//! reverses it so that every job comes after everything it depends on.

use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::GraphError;
use crate::kind::DirectedAcyclicGraph;
use crate::text::BuildInput;

/// Errors reported by [`JobDependencyResolver`].
///
/// The two dependency-shape failures get job-oriented messages; every other graph error is
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("Jobs must not depend on themselves")]
    SelfDependency { job: String },

    #[error("Jobs must not create circular dependencies")]
    CircularDependency {
        /// Jobs that could not be ordered
        jobs: Vec<String>,
    },

    #[error(transparent)]
    Graph(GraphError),
}

impl From<GraphError> for ResolveError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::SelfDependency { name } => ResolveError::SelfDependency { job: name },
            GraphError::UnexpectedCycle { unresolved } => {
                ResolveError::CircularDependency { jobs: unresolved }
            }
            other => ResolveError::Graph(other),
        }
    }
}

/// Derives an execution order for jobs with dependencies.
///
/// # Examples
///
/// ```
/// use jobdag::JobDependencyResolver;
///
/// let resolver = JobDependencyResolver::new([("a", None), ("b", Some("c")), ("c", None)])?;
/// let sequence = resolver.sequence()?;
///
/// let pos = |job| sequence.iter().position(|j| *j == job).unwrap();
/// assert!(pos("c") < pos("b"));
/// assert_eq!(sequence.len(), 3);
/// # Ok::<(), jobdag::ResolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct JobDependencyResolver {
    graph: DirectedAcyclicGraph,
}

impl JobDependencyResolver {
    /// Builds the dependency graph from a mapping of job to optional dependency, or from the
    /// `job=>dependency,...` text form.
    ///
    /// Invalid data is rejected here rather than when the sequence is requested.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::SelfDependency`] if a job depends on itself
    /// - [`ResolveError::CircularDependency`] if the dependencies form a cycle
    /// - [`ResolveError::Graph`] for malformed or unsupported input
    pub fn new<I>(data: I) -> Result<Self, ResolveError>
    where
        I: TryInto<BuildInput>,
        GraphError: From<I::Error>,
    {
        let mut graph = DirectedAcyclicGraph::new();
        graph.build(data)?;

        #[cfg(feature = "tracing")]
        debug!(job_count = graph.len(), "job graph built");

        Ok(Self { graph })
    }

    /// Adds one job, creating it and its dependency as needed. Adding an existing job again only
    /// adds the dependency.
    ///
    /// # Errors
    ///
    /// Same as [`JobDependencyResolver::new`]; on error the resolver is unchanged.
    pub fn add_job(
        &mut self,
        job: &str,
        dependency: Option<&str>,
    ) -> Result<&mut Self, ResolveError> {
        self.graph.build([(job, dependency)])?;
        Ok(self)
    }

    /// Jobs in the order they should run: every job appears after all of its dependencies.
    ///
    /// Jobs with no ordering constraint between them come out in a fixed but unspecified order.
    pub fn sequence(&self) -> Result<Vec<&str>, ResolveError> {
        let mut order = self.graph.topological_order()?;
        order.reverse();
        Ok(order)
    }

    /// Direct dependencies of `job`, or `None` if the job is unknown.
    pub fn dependencies_of(&self, job: &str) -> Option<Vec<&str>> {
        let vertex = self.graph.find_vertex(job)?;
        let ids: Vec<_> = vertex.neighbours().collect();
        Some(self.graph.names_of(&ids))
    }

    /// Job names in the order they were first mentioned.
    pub fn jobs(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.names()
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DirectedAcyclicGraph {
        &self.graph
    }
}
