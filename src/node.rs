//! The input error tree.
//!
//! This module provides [`ErrorNode`], the three shapes a validation backend
//! uses for field errors, and [`parse_errors`] for reading them out of a JSON
//! payload. Parsing accumulates every malformed node instead of stopping at
//! the first one.

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{MalformedErrorTree, MalformedErrors};
use crate::path::TreePath;
use crate::ParseResult;

/// Field name to error node, in payload order.
pub type ErrorMap = IndexMap<String, ErrorNode>;

const EXPECTED_NODE: &str = "list of messages, error map or list of error maps";
const EXPECTED_MESSAGE: &str = "message string";
const EXPECTED_ROW: &str = "error map";

/// One value in an error tree.
///
/// # Example
///
/// ```rust
/// use errjoin::ErrorNode;
///
/// let site = ErrorNode::map([
///     ("code", ErrorNode::messages(["This site code is invalid"])),
///     ("id", ErrorNode::messages(["Unsupported id"])),
/// ]);
///
/// let messages: Vec<&str> = site.messages_depth_first().collect();
/// assert_eq!(messages, vec!["This site code is invalid", "Unsupported id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorNode {
    /// Messages for a single field, possibly with duplicates.
    StringList(Vec<String>),
    /// Errors for a nested object, keyed by field name.
    ErrorMap(ErrorMap),
    /// One error map per row of a repeated sub-form. Rows without errors are empty maps.
    ErrorMapList(Vec<ErrorMap>),
}

impl ErrorNode {
    pub fn messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ErrorNode::StringList(messages.into_iter().map(Into::into).collect())
    }

    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ErrorNode)>,
        K: Into<String>,
    {
        ErrorNode::ErrorMap(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ErrorMap>,
    {
        ErrorNode::ErrorMapList(rows.into_iter().collect())
    }

    /// Walks every message under this node: depth-first, map keys in order,
    /// list rows in order. Duplicates are yielded as often as they occur.
    pub fn messages_depth_first(&self) -> impl Iterator<Item = &str> {
        let mut out = Vec::new();
        self.collect_messages(&mut out);
        out.into_iter()
    }

    fn collect_messages<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ErrorNode::StringList(messages) => out.extend(messages.iter().map(String::as_str)),
            ErrorNode::ErrorMap(map) => {
                for node in map.values() {
                    node.collect_messages(out);
                }
            }
            ErrorNode::ErrorMapList(rows) => {
                for node in rows.iter().flat_map(|row| row.values()) {
                    node.collect_messages(out);
                }
            }
        }
    }

    /// Reads a node out of a JSON value.
    ///
    /// Objects become [`ErrorNode::ErrorMap`]. An array whose first element is
    /// an object is a list of rows, and every element must then be an object.
    /// Any other array, including the empty one, is a list of messages whose
    /// elements must all be strings. Scalars and null are malformed.
    pub fn from_value(value: &Value, path: &TreePath) -> ParseResult<ErrorNode> {
        match value {
            Value::Object(_) => parse_map(value, path).map(ErrorNode::ErrorMap),
            Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
                parse_rows(items, path).map(ErrorNode::ErrorMapList)
            }
            Value::Array(items) => parse_messages(items, path).map(ErrorNode::StringList),
            other => malformed(path, EXPECTED_NODE, other),
        }
    }
}

/// Reads the root error map out of a JSON payload.
///
/// # Example
///
/// ```rust
/// use errjoin::parse_errors;
/// use serde_json::json;
///
/// let parsed = parse_errors(&json!({"name": ["This field is required"]}));
/// assert!(parsed.is_success());
///
/// let parsed = parse_errors(&json!({"name": "This field is required", "age": null}));
/// let errors = parsed.into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn parse_errors(value: &Value) -> ParseResult<ErrorMap> {
    parse_map(value, &TreePath::root())
}

fn parse_map(value: &Value, path: &TreePath) -> ParseResult<ErrorMap> {
    let object = match value.as_object() {
        Some(o) => o,
        None => return malformed(path, EXPECTED_ROW, value),
    };

    let mut errors = Vec::new();
    let mut map = ErrorMap::with_capacity(object.len());
    for (key, entry) in object {
        match ErrorNode::from_value(entry, &path.push_key(key.as_str())) {
            Validation::Success(node) => {
                map.insert(key.clone(), node);
            }
            Validation::Failure(e) => errors.extend(e),
        }
    }

    finish(map, errors)
}

fn parse_rows(items: &[Value], path: &TreePath) -> ParseResult<Vec<ErrorMap>> {
    let mut errors = Vec::new();
    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match parse_map(item, &path.push_index(index)) {
            Validation::Success(row) => rows.push(row),
            Validation::Failure(e) => errors.extend(e),
        }
    }

    finish(rows, errors)
}

fn parse_messages(items: &[Value], path: &TreePath) -> ParseResult<Vec<String>> {
    let mut errors = Vec::new();
    let mut messages = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => messages.push(s.clone()),
            other => errors.push(MalformedErrorTree::new(
                path.push_index(index),
                EXPECTED_MESSAGE,
                value_type_name(other),
            )),
        }
    }

    finish(messages, errors)
}

fn finish<T>(value: T, errors: Vec<MalformedErrorTree>) -> ParseResult<T> {
    match MalformedErrors::from_vec(errors) {
        None => Validation::Success(value),
        Some(errors) => Validation::Failure(errors),
    }
}

fn malformed<T>(path: &TreePath, expected: &'static str, got: &Value) -> ParseResult<T> {
    Validation::Failure(MalformedErrors::single(MalformedErrorTree::new(
        path.clone(),
        expected,
        value_type_name(got),
    )))
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
