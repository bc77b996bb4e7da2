//! Text rendering preserves the adjacency relation

use std::collections::BTreeSet;

use jobdag::{DirectedGraph, EdgeKind, Graph, UndirectedGraph};
use proptest::prelude::*;

use crate::common::arb_graph_text;

fn edge_set<K: EdgeKind>(graph: &Graph<K>) -> BTreeSet<(String, String)> {
    graph
        .edges()
        .map(|(from, to)| (from.to_owned(), to.to_owned()))
        .collect()
}

fn vertex_set<K: EdgeKind>(graph: &Graph<K>) -> BTreeSet<String> {
    graph.names().map(str::to_owned).collect()
}

proptest! {
    #[test]
    fn test_directed_round_trip(text in arb_graph_text(8, 16)) {
        let graph: DirectedGraph = text.parse().unwrap();
        let again: DirectedGraph = graph.to_text().parse().unwrap();

        prop_assert_eq!(edge_set(&again), edge_set(&graph));
        prop_assert_eq!(vertex_set(&again), vertex_set(&graph));
    }

    #[test]
    fn test_undirected_round_trip(text in arb_graph_text(8, 16)) {
        let graph: UndirectedGraph = text.parse().unwrap();
        let again: UndirectedGraph = graph.to_text().parse().unwrap();

        prop_assert_eq!(edge_set(&again), edge_set(&graph));
        prop_assert_eq!(vertex_set(&again), vertex_set(&graph));
    }

    #[test]
    fn test_undirected_stays_symmetric(text in arb_graph_text(8, 16)) {
        let graph: UndirectedGraph = text.parse().unwrap();

        for (from, to) in graph.edges() {
            prop_assert!(graph.has_edge(to, from));
        }
    }

    #[test]
    fn test_one_token_per_edge_or_isolated_vertex(text in arb_graph_text(8, 16)) {
        let graph: DirectedGraph = text.parse().unwrap();
        let rendered = graph.to_text();

        let isolated = graph.vertices().iter().filter(|v| v.out_degree() == 0).count();
        let tokens = if rendered.is_empty() { 0 } else { rendered.split(',').count() };
        prop_assert_eq!(tokens, graph.edge_count() + isolated);
    }
}
