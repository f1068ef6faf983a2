//! The `Node` record every [`Tree`][crate::Tree] is made of.

/// A child slot. Either empty or the single owner of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value and up to two children. Each child exclusively owns its subtree so a
/// node has at most one parent and there are no cycles.
///
/// Nodes handed out by a tree are read-only. Detached nodes can be built with [`Node::new`] and
/// [`Node::with_children`] and adopted by [`Tree::with_root`][crate::Tree::with_root].
///
/// # Examples
///
/// ```
/// use ordered_tree::{Node, Tree};
///
/// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
/// let tree = Tree::with_root(root).unwrap();
///
/// let two = tree.find(&2).unwrap();
/// assert_eq!(two.left().map(Node::value), Some(&1));
/// assert_eq!(two.right().map(Node::value), Some(&3));
/// ```
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node owning the given subtrees.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Follows right children until there are none.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Follows left children until there are none.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }
}
