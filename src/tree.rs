//! The ordered tree itself. Insertion, lookup, and removal here are loop based; the recursive
//! strategies live in [`recursive`][crate::recursive].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(10).insert(6).insert(15);
//! assert_eq!(tree.find(&6).map(|n| *n.value()), Some(6));
//!
//! // Inserting an existing value does nothing.
//! tree.insert(6);
//! assert_eq!(tree.len(), 3);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&6), Some(6));
//! assert_eq!(tree.remove(&6), None);
//! assert!(tree.find(&6).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::traverse;

/// An unbalanced Binary Search Tree of distinct values. This can be used for inserting, finding,
/// and removing values, and for visiting them in several orders.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Chains as deep as the tree is long are possible (sorted insertions) so the default recursive
    // drop of `Box<Node>` could overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    /// Re-inserting values in pre-order rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        self.dfs_pre_order().into_iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    // TODO stack based Debug; the derived `Node` impl recurses once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> TryFrom<Node<T>> for Tree<T> {
    type Error = Error;

    fn try_from(root: Node<T>) -> Result<Self> {
        Self::with_root(root)
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T: Ord> Tree<T> {
    /// Adopts an existing node graph as a tree. The graph is checked once, here: visiting it in
    /// order must give strictly ascending values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, Node, Tree};
    ///
    /// let tree = Tree::with_root(Node::with_children(2, Some(Node::new(1)), None)).unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// // 3 can't live in the left subtree of 2.
    /// let bad = Tree::with_root(Node::with_children(2, Some(Node::new(3)), None));
    /// assert_eq!(bad.unwrap_err(), Error::Unordered { position: 1 });
    /// ```
    pub fn with_root(root: Node<T>) -> Result<Self> {
        // Owned by a `Tree` straight away so a rejected graph is still dropped without recursion.
        let mut tree = Self {
            root: Some(Box::new(root)),
            len: 0,
        };
        let len = {
            let nodes = traverse::in_order(tree.root());
            if let Some(position) = nodes
                .windows(2)
                .position(|pair| pair[0].value >= pair[1].value)
            {
                return Err(Error::Unordered {
                    position: position + 1,
                });
            }
            nodes.len()
        };
        tree.len = len;
        Ok(tree)
    }

    /// Inserts the given value into the tree by walking down from the root in a loop. Inserting a
    /// value that is already present leaves the tree unchanged. Returns the tree so calls can be
    /// chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3).insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.dfs_in_order(), [&1, &2, &3]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self {
        let link = slot(&mut self.root, &value);
        if link.is_none() {
            *link = Some(Box::new(Node::new(value)));
            self.len += 1;
        }
        self
    }

    /// Finds the node holding `value` by walking down from the root in a loop. If no node has the
    /// value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut node = self.root()?;
        loop {
            node = match value.cmp(&node.value) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Returns true if `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes `value` from the tree and returns it. If the tree doesn't contain the value,
    /// nothing happens and `None` is returned.
    ///
    /// A node with two children takes over the value of its in-order successor (the smallest
    /// value in its right subtree) and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 6, 15, 3, 8, 20].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&6), Some(6));
    /// assert_eq!(tree.dfs_in_order(), [&3, &8, &10, &15, &20]);
    /// assert_eq!(tree.remove(&6), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let link = slot(&mut self.root, value);
        let node = link.as_mut()?;

        let removed = if node.left.is_some() && node.right.is_some() {
            let successor = take_leftmost(&mut node.right)?;
            let removed = mem::replace(&mut node.value, successor.value);

            if cfg!(debug_assertions) {
                if let Some(left) = node.left() {
                    assert!(left.rightmost().value < node.value);
                }
                if let Some(right) = node.right() {
                    assert!(node.value < right.leftmost().value);
                }
            }
            removed
        } else {
            let node = link.take()?;
            let Node { value, left, right } = *node;
            // Leaves clear the link, single children move up into it.
            *link = left.or(right);
            value
        };

        self.len -= 1;
        Some(removed)
    }
}

/// Walks down from `link` and returns the link that holds `value` or, if the value isn't there,
/// the empty link where it belongs.
fn slot<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    while let Some(ordering) = link.as_deref().map(|node| value.cmp(&node.value)) {
        link = match (ordering, link) {
            (Ordering::Equal, link) => return link,
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, None) => unreachable!("compared against a node that isn't there"),
        };
    }
    link
}

/// Unlinks the leftmost node below `link`, moving its right child into its place.
fn take_leftmost<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost)
}
