//! Paths into an error tree.
//!
//! A [`TreePath`] names the position of a node inside a nested error payload,
//! such as `urls[2].site.code`. Paths are attached to every
//! [`MalformedErrorTree`](crate::MalformedErrorTree) so callers can see exactly
//! which part of the payload broke the contract.

use std::fmt::{self, Display};

/// One step into an error tree: a map key or a list position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field name inside an error map (e.g. `site`, `non_field_errors`)
    Key(String),
    /// A row inside a list (e.g. `[0]`)
    Index(usize),
}

/// A location inside a nested error tree.
///
/// # Example
///
/// ```rust
/// use errjoin::TreePath;
///
/// let path = TreePath::root()
///     .push_key("urls")
///     .push_index(2)
///     .push_key("site");
///
/// assert_eq!(path.to_string(), "urls[2].site");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TreePath {
    segments: Vec<PathSegment>,
}

impl TreePath {
    /// The path of the root error map.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path one key deeper. `self` is left untouched.
    pub fn push_key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.into()));
        Self { segments }
    }

    /// Returns a new path one list position deeper. `self` is left untouched.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the deepest segment, or None for the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the path for messages, using `(root)` for the empty path.
    pub fn describe(&self) -> String {
        if self.is_root() {
            "(root)".to_string()
        } else {
            self.to_string()
        }
    }
}

impl Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
