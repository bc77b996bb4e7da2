//! Building graphs from external representations and rendering them as text.
//!
//! The textual form is a comma-separated list of `name=>target` tokens, where names are
//! non-empty runs of ASCII letters and digits and an empty target means "no outgoing edge":
//!
//! ```text
//! a=>,b=>c,c=>
//! ```
//!
//! The empty string is the empty graph. [`Graph::to_text`] produces the same grammar, one token
//! per set adjacency cell plus one `name=>` token for every vertex without outgoing edges.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::kind::EdgeKind;

/// Input accepted by [`Graph::build`].
///
/// A mapping lists `(name, dependency)` pairs in the order they should be applied; a missing or
/// empty dependency adds the vertex without an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildInput {
    Mapping(Vec<(String, Option<String>)>),
    Text(String),
}

impl BuildInput {
    /// Resolves the input into `(name, dependency)` pairs.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidGraphText`] if textual input does not match the token grammar.
    pub fn into_pairs(self) -> GraphResult<Vec<(String, Option<String>)>> {
        match self {
            BuildInput::Mapping(pairs) => Ok(pairs),
            BuildInput::Text(text) => parse_text(&text),
        }
    }
}

impl From<&str> for BuildInput {
    fn from(text: &str) -> Self {
        BuildInput::Text(text.to_owned())
    }
}

impl From<String> for BuildInput {
    fn from(text: String) -> Self {
        BuildInput::Text(text)
    }
}

impl From<&String> for BuildInput {
    fn from(text: &String) -> Self {
        BuildInput::Text(text.clone())
    }
}

impl<S: Into<String>> From<Vec<(S, Option<S>)>> for BuildInput {
    fn from(pairs: Vec<(S, Option<S>)>) -> Self {
        BuildInput::Mapping(
            pairs
                .into_iter()
                .map(|(name, dep)| (name.into(), dep.map(Into::into)))
                .collect(),
        )
    }
}

impl<S: Into<String>, const N: usize> From<[(S, Option<S>); N]> for BuildInput {
    fn from(pairs: [(S, Option<S>); N]) -> Self {
        BuildInput::from(Vec::from(pairs))
    }
}

impl From<BTreeMap<String, Option<String>>> for BuildInput {
    fn from(map: BTreeMap<String, Option<String>>) -> Self {
        BuildInput::Mapping(map.into_iter().collect())
    }
}

#[cfg(feature = "json")]
impl TryFrom<&serde_json::Value> for BuildInput {
    type Error = GraphError;

    /// Objects whose values are strings or null become mappings, in the object's insertion
    /// order; strings become text. Anything else is [`GraphError::UnsupportedBuildInput`].
    fn try_from(value: &serde_json::Value) -> GraphResult<Self> {
        use serde_json::Value;

        match value {
            Value::String(text) => Ok(BuildInput::Text(text.clone())),
            Value::Object(map) => map
                .iter()
                .map(|(name, dep)| match dep {
                    Value::Null => Ok((name.clone(), None)),
                    Value::String(dep) => Ok((name.clone(), Some(dep.clone()))),
                    other => Err(GraphError::UnsupportedBuildInput {
                        found: json_type_name(other),
                    }),
                })
                .collect::<GraphResult<Vec<_>>>()
                .map(BuildInput::Mapping),
            other => Err(GraphError::UnsupportedBuildInput {
                found: json_type_name(other),
            }),
        }
    }
}

#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for BuildInput {
    type Error = GraphError;

    fn try_from(value: serde_json::Value) -> GraphResult<Self> {
        BuildInput::try_from(&value)
    }
}

#[cfg(feature = "json")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses `name=>target,...` into pairs.
fn parse_text(text: &str) -> GraphResult<Vec<(String, Option<String>)>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|token| parse_token(token).ok_or_else(|| GraphError::invalid_text(text)))
        .collect()
}

fn parse_token(token: &str) -> Option<(String, Option<String>)> {
    let (name, target) = token.split_once("=>")?;
    if !is_identifier(name) {
        return None;
    }
    if target.is_empty() {
        return Some((name.to_owned(), None));
    }
    is_identifier(target).then(|| (name.to_owned(), Some(target.to_owned())))
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl<K: EdgeKind> Graph<K> {
    /// Adds the vertices and edges described by `data`.
    ///
    /// Pairs are applied in order: the named vertex is created if missing, then, if a dependency
    /// is given, the dependency vertex is created if missing and the edge `name -> dependency` is
    /// added with the variant's usual checks.
    ///
    /// Each vertex and edge insertion is atomic on its own, but a build that fails part way keeps
    /// whatever earlier pairs already added.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidGraphText`] for malformed text (nothing is added)
    /// - [`GraphError::UnsupportedBuildInput`] for input that is neither a mapping nor text
    /// - any error [`Graph::add_edge`] reports, e.g. [`GraphError::UnexpectedCycle`] on acyclic
    ///   graphs
    pub fn build<I>(&mut self, data: I) -> GraphResult<&mut Self>
    where
        I: TryInto<BuildInput>,
        GraphError: From<I::Error>,
    {
        let input: BuildInput = data.try_into()?;
        let pairs = input.into_pairs()?;

        #[cfg(feature = "tracing")]
        debug!(pair_count = pairs.len(), "building graph");

        for (name, dependency) in pairs {
            let dependency = dependency.filter(|d| !d.is_empty());
            // Refused before either endpoint is created, so a rejected pair leaves no vertex.
            if K::REJECTS_SELF_LOOPS && dependency.as_deref() == Some(name.as_str()) {
                return Err(GraphError::self_dependency(name));
            }

            self.ensure_vertex(&name)?;
            if let Some(dependency) = dependency {
                self.ensure_vertex(&dependency)?;
                self.add_edge(&name, &dependency)?;
            }
        }
        Ok(self)
    }

    fn ensure_vertex(&mut self, name: &str) -> GraphResult<()> {
        if !self.contains_vertex(name) {
            self.add_vertex_named(name)?;
        }
        Ok(())
    }

    /// Canonical textual form; see the module docs for the grammar.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<K: EdgeKind> fmt::Display for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut separator = |f: &mut fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                f.write_str(",")
            }
        };

        for vertex in self.vertices() {
            let mut targets = vertex.neighbours().peekable();
            if targets.peek().is_none() {
                separator(f)?;
                write!(f, "{}=>", vertex.name())?;
                continue;
            }
            for target in targets {
                if let Some(target) = self.vertex(target) {
                    separator(f)?;
                    write!(f, "{}=>{}", vertex.name(), target.name())?;
                }
            }
        }
        Ok(())
    }
}

impl<K: EdgeKind> FromStr for Graph<K> {
    type Err = GraphError;

    fn from_str(text: &str) -> GraphResult<Self> {
        let mut graph = Graph::new();
        graph.build(text)?;
        Ok(graph)
    }
}
