//! # errjoin
//!
//! Turns the nested error payload of a form-validation backend into
//! human-readable strings.
//!
//! ## Overview
//!
//! Validation APIs report errors as a tree: a list of messages per field,
//! nested maps for nested objects and lists of maps for repeated sub-forms.
//! Most of the time a UI only needs one sentence per top-level field, so
//! every message under a field is pooled, deduplicated and joined with
//! periods. Fields whose key is *preserved* keep their nested shape instead,
//! and only their innermost message lists are joined.
//!
//! ## Core Types
//!
//! - [`ErrorNode`]: one of the three shapes found in an error payload
//! - [`PreserveKeys`]: the top-level keys that keep their nested shape
//! - [`JoinedNode`]: the transformed tree
//! - [`Transformer`]: configured entry point working on JSON
//! - [`MalformedErrorTree`]: a payload node that has none of the expected shapes
//!
//! ## Example
//!
//! ```rust
//! use errjoin::Transformer;
//! use serde_json::json;
//!
//! let transformer = Transformer::new().preserve("url");
//!
//! let joined = transformer
//!     .transform_value(&json!({
//!         "age": ["This field is required", "Only numeric characters are allowed"],
//!         "url": {"site": {"code": ["This site code is invalid"]}}
//!     }))
//!     .unwrap();
//!
//! assert_eq!(joined, json!({
//!     "age": "This field is required. Only numeric characters are allowed.",
//!     "url": {"site": {"code": "This site code is invalid."}}
//! }));
//! ```

pub mod error;
pub mod join;
pub mod node;
pub mod output;
pub mod path;
pub mod preserve;
pub mod transform;

pub use error::{MalformedErrorTree, MalformedErrors};
pub use join::{join_messages, merge_errors};
pub use node::{parse_errors, ErrorMap, ErrorNode};
pub use output::{joined_map_to_value, JoinedMap, JoinedNode};
pub use path::{PathSegment, TreePath};
pub use preserve::PreserveKeys;
pub use transform::{preserve_and_join, transform, Transformer};

/// Result of reading an error tree, accumulating every malformed node.
pub type ParseResult<T> = stillwater::Validation<T, MalformedErrors>;
