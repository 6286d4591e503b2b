//! Joining messages into a single human-readable string.

use indexmap::IndexSet;

use crate::node::ErrorNode;

/// Joins messages into one period-separated string.
///
/// Duplicates are dropped by exact equality and the first occurrence keeps
/// its position. Each message is followed by `". "` and the result is trimmed.
///
/// # Example
///
/// ```rust
/// use errjoin::join_messages;
///
/// let joined = join_messages(["This field is required", "Too short", "This field is required"]);
/// assert_eq!(joined, "This field is required. Too short.");
/// ```
pub fn join_messages<'a, I>(messages: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: IndexSet<&str> = messages.into_iter().collect();

    let mut joined = String::new();
    for message in unique {
        joined.push_str(message);
        joined.push_str(". ");
    }
    joined.trim().to_string()
}

/// Flattens a whole subtree into one joined string.
///
/// Messages from different fields and rows are pooled before deduplication,
/// so the same text reported for two fields appears once.
pub fn merge_errors(node: &ErrorNode) -> String {
    join_messages(node.messages_depth_first())
}
