//! Integration tests for TreePath.

use errjoin::{PathSegment, TreePath};

#[test]
fn test_path_display() {
    assert_eq!(TreePath::root().to_string(), "");
    assert_eq!(TreePath::root().push_key("name").to_string(), "name");
    assert_eq!(TreePath::root().push_index(0).to_string(), "[0]");

    let path = TreePath::root()
        .push_key("tags")
        .push_index(3)
        .push_key("non_field_errors")
        .push_index(1);
    assert_eq!(path.to_string(), "tags[3].non_field_errors[1]");
}

#[test]
fn test_path_segments_preserved() {
    let path = TreePath::root().push_key("urls").push_index(2).push_key("site");

    let segments: Vec<&PathSegment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            &PathSegment::Key("urls".to_string()),
            &PathSegment::Index(2),
            &PathSegment::Key("site".to_string()),
        ]
    );
}

#[test]
fn test_path_hash() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(TreePath::root().push_key("a"));
    set.insert(TreePath::root().push_key("b"));
    set.insert(TreePath::root().push_key("a"));

    assert_eq!(set.len(), 2);
}
