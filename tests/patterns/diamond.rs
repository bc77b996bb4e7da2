//! Diamond: one source fanning out and joining again

use jobdag::{DirectedAcyclicGraph, GraphResult, VertexId};

use crate::common::{assert_topological, position};

fn diamond() -> DirectedAcyclicGraph {
    "top=>left,top=>right,left=>bottom,right=>bottom".parse().unwrap()
}

#[test]
fn test_diamond_order() -> GraphResult<()> {
    let dag = diamond();
    let order = dag.topological_order()?;

    assert_eq!(order.first(), Some(&"top"));
    assert_eq!(order.last(), Some(&"bottom"));
    assert_topological(&dag, &dag.topological_sort()?);
    Ok(())
}

#[test]
fn test_diamond_tie_break_is_stable() -> GraphResult<()> {
    let dag = diamond();

    // Both branches become ready while `top` is drained; the later one is emitted first.
    assert_eq!(dag.topological_order()?, vec!["top", "right", "left", "bottom"]);
    assert_eq!(dag.topological_sort()?, dag.topological_sort()?);
    Ok(())
}

#[test]
fn test_diamond_rejects_bottom_to_top() {
    let mut dag = diamond();
    assert!(dag.add_edge("bottom", "top").is_err());
    assert!(dag.add_edge("bottom", "left").is_err());
    assert!(dag.add_edge("right", "left").is_ok());

    let order = dag.topological_order().unwrap();
    assert!(position(&order, "right") < position(&order, "left"));
}

#[test]
fn test_diamond_sources() {
    let mut dag = diamond();
    assert_eq!(dag.find_source_vertex_indexes(), vec![VertexId(0)]);

    dag.remove_edge("top", "left").unwrap();
    assert_eq!(dag.find_source_vertex_indexes(), vec![VertexId(0), VertexId(1)]);

    dag.remove_edge("top", "right").unwrap();
    assert_eq!(
        dag.find_source_vertex_indexes(),
        vec![VertexId(0), VertexId(1), VertexId(2)]
    );
}
