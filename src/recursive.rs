//! Recursive versions of insertion and lookup. They behave exactly like [`Tree::insert`] and
//! [`Tree::find`] but use one stack frame per level of the tree, so prefer the loop based ones
//! for trees that may be badly unbalanced.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert_recursive(2).insert_recursive(1).insert_recursive(2);
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.find_recursive(&1).map(|n| *n.value()), Some(1));
//! assert!(tree.find_recursive(&3).is_none());
//! ```

use std::cmp::Ordering;

use crate::node::{Link, Node};
use crate::Tree;

impl<T: Ord> Tree<T> {
    /// Inserts the given value, recursing down to the empty link where it belongs. Inserting a
    /// value that is already present leaves the tree unchanged. Returns the tree so calls can be
    /// chained.
    pub fn insert_recursive(&mut self, value: T) -> &mut Self {
        if insert(&mut self.root, value) {
            self.len += 1;
        }
        self
    }

    /// Finds the node holding `value`, recursing into one subtree per level. If no node has the
    /// value, `None` is returned.
    pub fn find_recursive(&self, value: &T) -> Option<&Node<T>> {
        find(&self.root, value)
    }
}

/// Returns whether a new node was attached.
fn insert<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    match link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            true
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Equal => false,
            Ordering::Greater => insert(&mut node.right, value),
        },
    }
}

fn find<'a, T: Ord>(link: &'a Link<T>, value: &T) -> Option<&'a Node<T>> {
    let node = link.as_deref()?;
    match value.cmp(&node.value) {
        Ordering::Less => find(&node.left, value),
        Ordering::Equal => Some(node),
        Ordering::Greater => find(&node.right, value),
    }
}
