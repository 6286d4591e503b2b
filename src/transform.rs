//! The error tree transformation.
//!
//! Top-level fields are either flattened into one joined string or, when
//! their key is preserved, kept in shape with only the message lists joined.
//! [`Transformer`] bundles the preserved keys with the JSON boundary.

use serde_json::Value;

use crate::error::MalformedErrors;
use crate::join::{join_messages, merge_errors};
use crate::node::{parse_errors, ErrorMap, ErrorNode};
use crate::output::{joined_map_to_value, JoinedMap, JoinedNode};
use crate::preserve::PreserveKeys;

/// Transforms a parsed error tree.
///
/// Keys keep their input order. The input is not modified.
///
/// # Example
///
/// ```rust
/// use errjoin::{parse_errors, transform, PreserveKeys};
/// use serde_json::json;
///
/// let errors = parse_errors(&json!({
///     "age": ["This field is required", "Only numeric characters are allowed"],
///     "url": {"site": {"id": ["Unsupported id"]}}
/// }))
/// .into_result()
/// .unwrap();
///
/// let preserve: PreserveKeys = ["url"].into_iter().collect();
/// let joined = transform(&errors, &preserve);
///
/// assert_eq!(
///     joined["age"].as_message(),
///     Some("This field is required. Only numeric characters are allowed.")
/// );
/// assert!(joined["url"].as_map().is_some());
/// ```
pub fn transform(errors: &ErrorMap, preserve: &PreserveKeys) -> JoinedMap {
    errors
        .iter()
        .map(|(key, entry)| {
            let joined = if preserve.contains(key) {
                tracing::trace!(key = %key, "preserving nested errors");
                match entry {
                    // `[]` parses as a message list, but a preserved field keeps it as zero rows.
                    ErrorNode::StringList(messages) if messages.is_empty() => {
                        JoinedNode::List(Vec::new())
                    }
                    _ => preserve_and_join(entry),
                }
            } else {
                tracing::trace!(key = %key, "flattening errors");
                JoinedNode::Message(merge_errors(entry))
            };
            (key.clone(), joined)
        })
        .collect()
}

/// Keeps the shape of `node`, joining each message list on its own.
///
/// Sibling lists are never pooled together. Empty rows stay empty.
pub fn preserve_and_join(node: &ErrorNode) -> JoinedNode {
    match node {
        ErrorNode::StringList(messages) => {
            JoinedNode::Message(join_messages(messages.iter().map(String::as_str)))
        }
        ErrorNode::ErrorMap(map) => JoinedNode::Map(preserve_map(map)),
        ErrorNode::ErrorMapList(rows) => JoinedNode::List(rows.iter().map(preserve_map).collect()),
    }
}

fn preserve_map(map: &ErrorMap) -> JoinedMap {
    map.iter()
        .map(|(key, node)| (key.clone(), preserve_and_join(node)))
        .collect()
}

/// A reusable transformation configured with its preserved keys.
///
/// `Transformer` holds no state besides its configuration and can be shared
/// across threads behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use errjoin::Transformer;
/// use serde_json::json;
///
/// let transformer = Transformer::new().preserve("urls");
///
/// let joined = transformer
///     .transform_value(&json!({
///         "name": ["This field is required"],
///         "urls": [{}, {"id": ["Unsupported id"]}]
///     }))
///     .unwrap();
///
/// assert_eq!(
///     joined,
///     json!({"name": "This field is required.", "urls": [{}, {"id": "Unsupported id."}]})
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    preserve: PreserveKeys,
}

impl Transformer {
    /// Creates a transformer that flattens every field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the nested shape of the top-level field `key`.
    pub fn preserve(mut self, key: impl Into<String>) -> Self {
        self.preserve.insert(key);
        self
    }

    pub fn preserve_all<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preserve.extend(keys);
        self
    }

    pub fn preserve_keys(&self) -> &PreserveKeys {
        &self.preserve
    }

    /// Transforms an already parsed tree. Never fails.
    pub fn transform(&self, errors: &ErrorMap) -> JoinedMap {
        tracing::debug!(
            fields = errors.len(),
            preserved = self.preserve.len(),
            "transforming error tree"
        );
        transform(errors, &self.preserve)
    }

    /// Parses a JSON error payload, transforms it and returns JSON again.
    ///
    /// # Errors
    ///
    /// Returns every malformed node in the payload if any node is not a
    /// message list, error map or list of error maps.
    pub fn transform_value(&self, payload: &Value) -> Result<Value, MalformedErrors> {
        let errors = parse_errors(payload).into_result().map_err(|e| {
            tracing::debug!(problems = e.len(), first = %e.first(), "rejected error tree");
            e
        })?;
        Ok(joined_map_to_value(self.transform(&errors)))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Transformer>();
    assert_sync::<Transformer>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn row<const N: usize>(entries: [(&str, ErrorNode); N]) -> ErrorMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn site() -> ErrorNode {
        ErrorNode::map([(
            "site",
            ErrorNode::map([
                ("code", ErrorNode::messages(["This site code is invalid"])),
                ("id", ErrorNode::messages(["Unsupported id"])),
            ]),
        )])
    }

    #[test]
    fn test_unpreserved_field_becomes_message() {
        let errors = row([("url", site())]);
        let joined = transform(&errors, &PreserveKeys::new());
        assert_eq!(
            joined["url"].as_message(),
            Some("This site code is invalid. Unsupported id.")
        );
    }

    #[test]
    fn test_preserved_map_keeps_shape() {
        let errors = row([("url", site())]);
        let preserve: PreserveKeys = ["url"].into_iter().collect();
        let joined = transform(&errors, &preserve);

        let site = joined["url"].as_map().unwrap()["site"].as_map().unwrap();
        assert_eq!(site["code"].as_message(), Some("This site code is invalid."));
        assert_eq!(site["id"].as_message(), Some("Unsupported id."));
    }

    #[test]
    fn test_preserved_message_list_joins_only_itself() {
        let errors = row([
            ("name", ErrorNode::messages(["Required", "Required", "Too short"])),
            ("age", ErrorNode::messages(["Required"])),
        ]);
        let preserve: PreserveKeys = ["name"].into_iter().collect();
        let joined = transform(&errors, &preserve);

        assert_eq!(joined["name"].as_message(), Some("Required. Too short."));
        assert_eq!(joined["age"].as_message(), Some("Required."));
    }

    #[test]
    fn test_preserved_siblings_are_not_pooled() {
        let node = ErrorNode::map([
            ("a", ErrorNode::messages(["Same"])),
            ("b", ErrorNode::messages(["Same"])),
        ]);
        let joined = preserve_and_join(&node);
        let map = joined.as_map().unwrap();

        assert_eq!(map["a"].as_message(), Some("Same."));
        assert_eq!(map["b"].as_message(), Some("Same."));
    }

    #[test]
    fn test_preserved_rows_keep_length_and_empty_rows() {
        let node = ErrorNode::rows([ErrorMap::new(), row([("site", site())]), ErrorMap::new()]);
        let joined = preserve_and_join(&node);
        let rows = joined.as_list().unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert!(rows[2].is_empty());
        assert!(rows[1]["site"].as_map().is_some());
    }

    #[test]
    fn test_preserved_empty_field_stays_a_list() {
        let errors = row([
            ("urls", ErrorNode::StringList(Vec::new())),
            ("url", ErrorNode::map([("id", ErrorNode::StringList(Vec::new()))])),
        ]);
        let preserve: PreserveKeys = ["urls", "url"].into_iter().collect();
        let joined = transform(&errors, &preserve);

        assert_eq!(joined["urls"], JoinedNode::List(Vec::new()));
        assert_eq!(joined["url"].as_map().unwrap()["id"].as_message(), Some(""));
    }

    #[test]
    fn test_output_keeps_input_key_order() {
        let errors = row([
            ("zeta", ErrorNode::messages(["z"])),
            ("alpha", ErrorNode::messages(["a"])),
            ("mid", site()),
        ]);
        let preserve: PreserveKeys = ["mid"].into_iter().collect();
        let joined = transform(&errors, &preserve);

        let keys: Vec<&str> = joined.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_preserved_key_missing_from_tree_is_ignored() {
        let errors = row([("name", ErrorNode::messages(["Required"]))]);
        let joined = Transformer::new().preserve("urls").transform(&errors);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined["name"].as_message(), Some("Required."));
    }

    #[test]
    fn test_builder_collects_keys() {
        let transformer = Transformer::new()
            .preserve("url")
            .preserve_all(["urls", "url"]);

        assert_eq!(transformer.preserve_keys().len(), 2);
        assert!(transformer.preserve_keys().contains("urls"));
    }
}
