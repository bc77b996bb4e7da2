//! Guarded insertion keeps the graph sortable; failed calls change nothing

use jobdag::{DirectedAcyclicGraph, DirectedGraph, ErrorKind, GraphError};
use proptest::prelude::*;

use crate::common::{arb_edges, assert_topological, vertex_name, with_vertices};

proptest! {
    #[test]
    fn test_successful_inserts_keep_graph_sortable((n, edges) in arb_edges(12)) {
        let mut dag: DirectedAcyclicGraph = with_vertices(n);

        for (from, to) in edges {
            let before = dag.to_text();
            let result = dag.add_edge(&vertex_name(from), &vertex_name(to)).map(|_| ());
            match result {
                Ok(_) => {
                    prop_assert!(dag.has_edge(&vertex_name(from), &vertex_name(to)));
                    let order = dag.topological_sort();
                    prop_assert!(order.is_ok());
                }
                Err(err) => {
                    prop_assert!(matches!(
                        err.kind(),
                        ErrorKind::SelfDependency | ErrorKind::UnexpectedCycle
                    ));
                    prop_assert_eq!(dag.to_text(), before);
                }
            }
        }

        let order = dag.topological_sort().unwrap();
        assert_topological(&dag, &order);
    }

    #[test]
    fn test_guard_agrees_with_unguarded_sort((n, edges) in arb_edges(10)) {
        let mut dag: DirectedAcyclicGraph = with_vertices(n);

        for (from, to) in edges {
            let (start, end) = (vertex_name(from), vertex_name(to));

            // Same edge on an unguarded copy of the current state.
            let mut probe: DirectedGraph = dag.to_text().parse().unwrap();
            probe.add_edge(&start, &end).unwrap();
            let would_cycle = probe.has_cycle();

            let result = dag.add_edge(&start, &end).map(|_| ());
            prop_assert_eq!(result.is_err(), would_cycle);
            if let Err(GraphError::UnexpectedCycle { unresolved }) = result {
                prop_assert!(!unresolved.is_empty());
            }
        }
    }

    #[test]
    fn test_directed_sort_valid_or_cyclic((n, edges) in arb_edges(10)) {
        let mut graph: DirectedGraph = with_vertices(n);
        for (from, to) in edges {
            graph.add_edge(&vertex_name(from), &vertex_name(to)).unwrap();
        }

        match graph.topological_sort() {
            Ok(order) => assert_topological(&graph, &order),
            Err(err) => prop_assert_eq!(err.kind(), ErrorKind::UnexpectedCycle),
        }
    }

    #[test]
    fn test_removing_missing_edge_is_idempotent(
        (n, edges) in arb_edges(8),
        (from, to) in any::<(prop::sample::Index, prop::sample::Index)>(),
    ) {
        let (from, to) = (from.index(n), to.index(n));
        let mut graph: DirectedGraph = with_vertices(n);
        for (a, b) in edges {
            if (a, b) != (from, to) {
                graph.add_edge(&vertex_name(a), &vertex_name(b)).unwrap();
            }
        }
        let before = graph.to_text();

        graph.remove_edge(&vertex_name(from), &vertex_name(to)).unwrap();
        graph.remove_edge(&vertex_name(from), &vertex_name(to)).unwrap();

        prop_assert_eq!(graph.to_text(), before);
    }
}
