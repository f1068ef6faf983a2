//! Depth-first and breadth-first traversals. Every traversal builds and returns a fresh `Vec`
//! using an explicit stack or queue, so none of them recurse and calling one twice gives the same
//! sequence.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, Tree};
//!
//! let tree: Tree<_> = [10, 6, 15, 3, 8, 20].into_iter().collect();
//!
//! assert_eq!(tree.dfs_pre_order(), [&10, &6, &3, &8, &15, &20]);
//! assert_eq!(tree.dfs_in_order(), [&3, &6, &8, &10, &15, &20]);
//! assert_eq!(tree.dfs_post_order(), [&3, &8, &6, &20, &15, &10]);
//! assert_eq!(tree.bfs(), [&10, &6, &15, &3, &8, &20]);
//!
//! assert_eq!(tree.traverse(Order::InOrder), tree.dfs_in_order());
//! ```

use std::collections::VecDeque;

use crate::node::Node;
use crate::Tree;

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. For a tree this is ascending.
    #[default]
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
    /// Level by level from the root, left to right within a level.
    BreadthFirst,
}

impl<T> Tree<T> {
    /// Values in pre-order.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        values(pre_order(self.root()))
    }

    /// Values in in-order, which is ascending.
    pub fn dfs_in_order(&self) -> Vec<&T> {
        values(in_order(self.root()))
    }

    /// Values in post-order.
    pub fn dfs_post_order(&self) -> Vec<&T> {
        values(post_order(self.root()))
    }

    /// Values level by level.
    pub fn bfs(&self) -> Vec<&T> {
        values(breadth_first(self.root()))
    }

    /// Values in the given [`Order`].
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        match order {
            Order::PreOrder => self.dfs_pre_order(),
            Order::InOrder => self.dfs_in_order(),
            Order::PostOrder => self.dfs_post_order(),
            Order::BreadthFirst => self.bfs(),
        }
    }
}

fn values<T>(nodes: Vec<&Node<T>>) -> Vec<&T> {
    nodes.into_iter().map(Node::value).collect()
}

pub(crate) fn pre_order<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut visited = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visited.push(node);
        // Right goes on first so the left subtree is popped first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
    visited
}

pub(crate) fn in_order<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut visited = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            return visited;
        };
        visited.push(node);
        current = node.right();
    }
}

/// Visits node, right, left and reverses the result, which gives left, right, node.
pub(crate) fn post_order<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut visited = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visited.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    visited.reverse();
    visited
}

pub(crate) fn breadth_first<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut visited = Vec::new();
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visited.push(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
    visited
}
