//! Errors raised when a [`Tree`][crate::Tree] is built from an existing node graph.
//!
//! Ordinary absence (a value that isn't in the tree, an empty tree, a tree too small to have a
//! second-highest value) is never an error. Those cases are reported as `None`.

use thiserror::Error;

/// Errors that can occur when adopting a hand-built root.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The node graph does not satisfy the BST property. Visiting it in order does not produce
    /// strictly ascending values: the value at `position` (0-based, in-order) is not greater than
    /// the one before it. Equal neighbours are duplicates, which a tree never holds.
    #[error("values are not strictly ascending at in-order position {position}")]
    Unordered {
        /// In-order index of the first value that breaks the ordering.
        position: usize,
    },
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
