//! Graph fixtures and proptest strategies for internal use in jobdag tests and benchmarks.
//!
//! This crate is not meant for public use and offers no stability guarantees.

use jobdag::{DirectedAcyclicGraph, Directional, EdgeKind, Graph, VertexId};
use proptest::collection::vec;
use proptest::prelude::*;

/// Name of the `i`th generated vertex. Always a valid text-form identifier.
pub fn vertex_name(i: usize) -> String {
    format!("v{i}")
}

/// Graph of any variant with `n` vertices named by [`vertex_name`] and no edges.
pub fn with_vertices<K: EdgeKind>(n: usize) -> Graph<K> {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex_named(vertex_name(i)).unwrap();
    }
    graph
}

/// `v0 -> v1 -> ... -> v{len-1}`
pub fn chain(len: usize) -> DirectedAcyclicGraph {
    let mut dag = with_vertices(len);
    for i in 1..len {
        dag.add_edge(&vertex_name(i - 1), &vertex_name(i)).unwrap();
    }
    dag
}

/// `v0` with an edge to each of `width` other vertices.
pub fn fan_out(width: usize) -> DirectedAcyclicGraph {
    let mut dag = with_vertices(width + 1);
    for i in 1..=width {
        dag.add_edge(&vertex_name(0), &vertex_name(i)).unwrap();
    }
    dag
}

/// `layers` layers of `width` vertices, each vertex linked to every vertex of the next layer.
pub fn layered(layers: usize, width: usize) -> DirectedAcyclicGraph {
    let mut dag = with_vertices(layers * width);
    for layer in 1..layers {
        for from in 0..width {
            for to in 0..width {
                dag.add_edge(
                    &vertex_name((layer - 1) * width + from),
                    &vertex_name(layer * width + to),
                )
                .unwrap();
            }
        }
    }
    dag
}

/// Panics unless `order` lists every vertex of `graph` exactly once with every edge pointing
/// forward.
pub fn assert_topological<K: Directional>(graph: &Graph<K>, order: &[VertexId]) {
    assert_eq!(order.len(), graph.len(), "order must cover every vertex");

    let mut position = vec![usize::MAX; graph.len()];
    for (pos, id) in order.iter().enumerate() {
        assert_eq!(position[id.index()], usize::MAX, "{id:?} listed twice");
        position[id.index()] = pos;
    }

    for (from, vertex) in graph.vertices().iter().enumerate() {
        for to in vertex.neighbours() {
            assert!(
                position[from] < position[to.index()],
                "edge {} -> {} points backwards in {order:?}",
                vertex.name(),
                graph.vertices()[to.index()].name(),
            );
        }
    }
}

/// Vertex count in `1..=max_vertices` plus arbitrary `(start, end)` index pairs within it.
/// Pairs may repeat, point backwards or be self-loops.
pub fn arb_edges(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_vertices).prop_flat_map(|n| (Just(n), vec((0..n, 0..n), 0..n * 3)))
}

/// Valid text-form input: up to `max_tokens` tokens over up to `max_vertices` names.
pub fn arb_graph_text(max_vertices: usize, max_tokens: usize) -> impl Strategy<Value = String> {
    vec(
        (0..max_vertices, proptest::option::of(0..max_vertices)),
        0..=max_tokens,
    )
    .prop_map(|tokens| {
        tokens
            .into_iter()
            .map(|(name, target)| match target {
                Some(target) => format!("{}=>{}", vertex_name(name), vertex_name(target)),
                None => format!("{}=>", vertex_name(name)),
            })
            .collect::<Vec<_>>()
            .join(",")
    })
}
