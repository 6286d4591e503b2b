//! Error types for error trees that do not have one of the expected shapes.
//!
//! A well-formed tree never fails to transform. The only failure is a payload
//! whose nodes are not string lists, error maps or lists of error maps.

mod malformed;

pub use malformed::{MalformedErrorTree, MalformedErrors};
