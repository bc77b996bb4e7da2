//! Job sets and the sequences or errors they must produce

use jobdag::{JobDependencyResolver, ResolveError};
use test_case::test_case;

use crate::common::position;

#[test_case("" ; "empty")]
#[test_case("a=>" ; "single")]
#[test_case("a=>,b=>,c=>" ; "independent")]
#[test_case("a=>,b=>c,c=>" ; "one dependency")]
#[test_case("a=>,b=>c,c=>f,d=>a,e=>b,f=>" ; "multiple dependencies")]
#[test_case("a=>b,a=>c,b=>d,c=>d" ; "diamond")]
fn test_dependencies_come_first(jobs: &str) {
    let resolver = JobDependencyResolver::new(jobs).unwrap();
    let sequence = resolver.sequence().unwrap();

    assert_eq!(sequence.len(), resolver.len());
    for job in resolver.jobs() {
        for dependency in resolver.dependencies_of(job).unwrap() {
            assert!(
                position(&sequence, dependency) < position(&sequence, job),
                "{dependency} must run before {job}: {sequence:?}"
            );
        }
    }
}

#[test]
fn test_single_job() {
    let resolver = JobDependencyResolver::new([("a", None)]).unwrap();
    assert_eq!(resolver.sequence().unwrap(), vec!["a"]);
}

#[test]
fn test_one_dependency_allowed_orders() {
    let resolver = JobDependencyResolver::new([("a", None), ("b", Some("c")), ("c", None)]).unwrap();
    let sequence = resolver.sequence().unwrap();

    let allowed = [["a", "c", "b"], ["c", "b", "a"], ["c", "a", "b"]];
    assert!(allowed.iter().any(|order| order[..] == sequence[..]), "{sequence:?}");
}

#[test_case(&[("a", None), ("b", None), ("c", Some("c"))], "Jobs must not depend on themselves" ; "self dependency")]
#[test_case(&[("a", Some("b")), ("b", Some("c")), ("c", Some("a")), ("d", Some("b"))], "Jobs must not create circular dependencies" ; "cycle")]
#[test_case(&[("a", Some("b")), ("b", Some("a"))], "Jobs must not create circular dependencies" ; "mutual")]
fn test_construction_fails_fast(jobs: &[(&str, Option<&str>)], message: &str) {
    let err = JobDependencyResolver::new(jobs.to_vec()).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_other_errors_pass_through() {
    let err = JobDependencyResolver::new("a=>,=>b").unwrap_err();

    assert!(matches!(err, ResolveError::Graph(_)));
    assert_eq!(err.to_string(), "String representation of the graph is invalid");
}

#[cfg(feature = "json")]
#[test]
fn test_jobs_from_json() {
    let resolver =
        JobDependencyResolver::new(serde_json::json!({"a": null, "b": "c", "c": null})).unwrap();
    let sequence = resolver.sequence().unwrap();

    assert!(position(&sequence, "c") < position(&sequence, "b"));

    let err = JobDependencyResolver::new(serde_json::json!(42)).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported data type for build function");
}
