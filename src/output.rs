//! The transformed tree.
//!
//! [`JoinedNode`] mirrors [`ErrorNode`](crate::ErrorNode) with every message
//! list replaced by one joined string. Flattened fields are a bare
//! [`JoinedNode::Message`]; preserved fields keep their maps and rows.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Field name to transformed node, in input order.
pub type JoinedMap = IndexMap<String, JoinedNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinedNode {
    /// Deduplicated, period-joined messages.
    Message(String),
    /// A preserved nested error map.
    Map(JoinedMap),
    /// Preserved rows of a repeated sub-form, same length as the input.
    List(Vec<JoinedMap>),
}

impl JoinedNode {
    pub fn as_message(&self) -> Option<&str> {
        match self {
            JoinedNode::Message(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&JoinedMap> {
        match self {
            JoinedNode::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[JoinedMap]> {
        match self {
            JoinedNode::List(rows) => Some(rows.as_slice()),
            _ => None,
        }
    }
}

/// Converts a transformed map to a JSON object, keeping key order.
///
/// # Example
///
/// ```rust
/// use errjoin::{joined_map_to_value, JoinedMap, JoinedNode};
/// use serde_json::json;
///
/// let mut map = JoinedMap::new();
/// map.insert("name".to_string(), JoinedNode::Message("This field is required.".to_string()));
/// map.insert("urls".to_string(), JoinedNode::List(vec![JoinedMap::new()]));
///
/// assert_eq!(
///     joined_map_to_value(map),
///     json!({"name": "This field is required.", "urls": [{}]})
/// );
/// ```
pub fn joined_map_to_value(map: JoinedMap) -> Value {
    Value::Object(
        map.into_iter()
            .map(|(key, node)| (key, Value::from(node)))
            .collect::<Map<String, Value>>(),
    )
}

impl From<JoinedNode> for Value {
    fn from(node: JoinedNode) -> Self {
        match node {
            JoinedNode::Message(s) => Value::String(s),
            JoinedNode::Map(m) => joined_map_to_value(m),
            JoinedNode::List(rows) => {
                Value::Array(rows.into_iter().map(joined_map_to_value).collect())
            }
        }
    }
}
