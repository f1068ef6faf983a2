//! This crate exposes an ordered, unbalanced Binary Search Tree (BST) of distinct values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does not rebalance itself, so inserting
//! values in sorted order produces a chain whose height is the number of values.
//! [`Tree::is_balanced`] reports whether the current shape is height-balanced. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree ([`Tree::dfs_in_order`]).
//!
//! Insertion and lookup come in two flavours with identical results: loop based
//! ([`Tree::insert`], [`Tree::find`]) and recursive ([`Tree::insert_recursive`],
//! [`Tree::find_recursive`]). Everything else walks the tree with an explicit stack or queue.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(10).insert(6).insert(15).insert(3).insert(8).insert(20);
//!
//! assert_eq!(tree.dfs_in_order(), [&3, &6, &8, &10, &15, &20]);
//! assert_eq!(tree.find_second_highest(), Some(&15));
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.remove(&6), Some(6));
//! assert_eq!(tree.dfs_in_order(), [&3, &8, &10, &15, &20]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod query;
pub mod recursive;
pub mod traverse;
mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use traverse::Order;
pub use tree::Tree;
