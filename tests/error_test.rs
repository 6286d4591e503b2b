//! Integration tests for malformed payload reporting.

use errjoin::{parse_errors, MalformedErrorTree, MalformedErrors, TreePath};
use serde_json::json;
use stillwater::prelude::*;

#[test]
fn test_every_problem_is_reported_once() {
    let errors = parse_errors(&json!({
        "name": 1,
        "age": ["Required", false],
        "urls": [{"site": "oops"}, {}],
        "tag": {"nested": {"a": ["fine"]}}
    }))
    .into_result()
    .unwrap_err();

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.at_path(&TreePath::root().push_key("name")).len(), 1);
    assert_eq!(
        errors
            .at_path(&TreePath::root().push_key("age").push_index(1))
            .first()
            .map(|e| e.found),
        Some("boolean")
    );
    assert_eq!(
        errors
            .at_path(&TreePath::root().push_key("urls").push_index(0).push_key("site"))
            .len(),
        1
    );
}

#[test]
fn test_null_root() {
    let errors = parse_errors(&json!(null)).into_result().unwrap_err();
    assert_eq!(
        errors.first().to_string(),
        "(root): expected error map, found null"
    );
}

#[test]
fn test_errors_combine_via_semigroup() {
    let a = MalformedErrors::single(MalformedErrorTree::new(
        TreePath::root().push_key("a"),
        "error map",
        "number",
    ));
    let b = MalformedErrors::single(MalformedErrorTree::new(
        TreePath::root().push_key("b"),
        "error map",
        "string",
    ));

    let combined: Vec<MalformedErrorTree> = a.combine(b).into_iter().collect();
    assert_eq!(combined.len(), 2);
    assert_eq!(combined[1].found, "string");
}

#[test]
fn test_errors_work_as_std_error() {
    let errors = parse_errors(&json!({"name": null})).into_result().unwrap_err();
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(errors);
    assert!(boxed.to_string().contains("name: expected"));
}
