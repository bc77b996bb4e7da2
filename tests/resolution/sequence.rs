//! Incremental job registration

use jobdag::{JobDependencyResolver, ResolveError};

use crate::common::position;

#[test]
fn test_incremental_pipeline() -> Result<(), ResolveError> {
    let mut resolver = JobDependencyResolver::default();
    resolver
        .add_job("package", Some("test"))?
        .add_job("test", Some("compile"))?
        .add_job("compile", Some("fetch"))?
        .add_job("docs", Some("compile"))?;

    let sequence = resolver.sequence()?;
    assert_eq!(sequence.len(), 5);
    assert_eq!(sequence[0], "fetch");
    assert_eq!(sequence[1], "compile");
    assert!(position(&sequence, "test") < position(&sequence, "package"));
    Ok(())
}

#[test]
fn test_rejected_job_does_not_change_sequence() -> Result<(), ResolveError> {
    let mut resolver = JobDependencyResolver::new("b=>a,c=>b")?;
    let before: Vec<String> = resolver.sequence()?.into_iter().map(String::from).collect();

    let err = resolver.add_job("a", Some("c")).unwrap_err();
    assert!(matches!(err, ResolveError::CircularDependency { .. }));

    assert_eq!(resolver.sequence()?, before);
    Ok(())
}

#[test]
fn test_rejected_new_job_is_not_registered() -> Result<(), ResolveError> {
    let mut resolver = JobDependencyResolver::new("a=>")?;

    let err = resolver.add_job("x", Some("x")).unwrap_err();
    assert_eq!(err, ResolveError::SelfDependency { job: "x".into() });

    assert_eq!(resolver.len(), 1);
    assert_eq!(resolver.jobs().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(resolver.sequence()?, vec!["a"]);
    Ok(())
}

#[test]
fn test_sequence_is_reverse_of_graph_order() -> Result<(), ResolveError> {
    let resolver = JobDependencyResolver::new("a=>,b=>c,c=>")?;

    let mut graph_order = resolver.graph().topological_order()?;
    graph_order.reverse();
    assert_eq!(resolver.sequence()?, graph_order);
    Ok(())
}
