//! Malformed input reporting.
//!
//! [`MalformedErrorTree`] describes one node with an unexpected shape and
//! [`MalformedErrors`] accumulates every such node found in a payload.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::TreePath;

/// A node in an error payload that is not one of the supported shapes.
///
/// # Example
///
/// ```rust
/// use errjoin::{MalformedErrorTree, TreePath};
///
/// let error = MalformedErrorTree::new(
///     TreePath::root().push_key("age"),
///     "list of messages or list of error maps",
///     "number",
/// );
///
/// assert_eq!(
///     error.to_string(),
///     "age: expected list of messages or list of error maps, found number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: expected {expected}, found {found}", .path.describe())]
pub struct MalformedErrorTree {
    /// Where the offending node sits.
    pub path: TreePath,
    /// The shape the position requires.
    pub expected: &'static str,
    /// The JSON type that was actually there.
    pub found: &'static str,
}

impl MalformedErrorTree {
    pub fn new(path: TreePath, expected: &'static str, found: &'static str) -> Self {
        Self {
            path,
            expected,
            found,
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<MalformedErrorTree>();
    assert_sync::<MalformedErrorTree>();
};

/// Every malformed node found in one payload. Never empty.
///
/// Sibling subtrees are checked independently and their failures are
/// combined through [`Semigroup`], so a single parse reports all problems:
///
/// ```rust
/// use errjoin::{MalformedErrorTree, MalformedErrors, TreePath};
/// use stillwater::prelude::*;
///
/// let name = MalformedErrors::single(MalformedErrorTree::new(
///     TreePath::root().push_key("name"),
///     "list of messages or list of error maps",
///     "string",
/// ));
/// let age = MalformedErrors::single(MalformedErrorTree::new(
///     TreePath::root().push_key("age"),
///     "list of messages or list of error maps",
///     "null",
/// ));
///
/// assert_eq!(name.combine(age).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedErrors(NonEmptyVec<MalformedErrorTree>);

impl MalformedErrors {
    pub fn single(error: MalformedErrorTree) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Builds the collection from a vec, or `None` if the vec is empty.
    pub fn from_vec(errors: Vec<MalformedErrorTree>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let first = Self::single(errors.next()?);
        Some(errors.fold(first, |acc, e| acc.combine(Self::single(e))))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &MalformedErrorTree> {
        self.0.iter()
    }

    pub fn first(&self) -> &MalformedErrorTree {
        self.0.head()
    }

    /// Returns the problems reported at exactly `path`.
    pub fn at_path(&self, path: &TreePath) -> Vec<&MalformedErrorTree> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    pub fn into_vec(self) -> Vec<MalformedErrorTree> {
        self.0.into_vec()
    }
}

impl Semigroup for MalformedErrors {
    fn combine(self, other: Self) -> Self {
        MalformedErrors(self.0.combine(other.0))
    }
}

impl Display for MalformedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "malformed error tree ({} problem(s)):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for MalformedErrors {}

impl IntoIterator for MalformedErrors {
    type Item = MalformedErrorTree;
    type IntoIter = std::vec::IntoIter<MalformedErrorTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<MalformedErrors>();
    assert_sync::<MalformedErrors>();
};
