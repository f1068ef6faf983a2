//! Whole-tree questions: shape (height, balance) and extremes (min, max, second highest).

use crate::traverse;
use crate::Tree;

impl<T> Tree<T> {
    /// How many levels are in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        self.fold_heights().map_or(0, |(height, _)| height)
    }

    /// Returns true if, at every node, the heights of the left and right subtrees differ by at
    /// most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let chain: Tree<_> = [1, 2, 3, 4, 5].into_iter().collect();
    /// assert!(!chain.is_balanced());
    ///
    /// let full: Tree<_> = [3, 1, 5, 0, 2, 4, 6].into_iter().collect();
    /// assert!(full.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.fold_heights().map_or(true, |(_, balanced)| balanced)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.leftmost().value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| root.rightmost().value())
    }

    /// The second largest value in the tree, or `None` if there are fewer than two values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 6, 15, 3, 8, 20].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&15));
    ///
    /// let lonely: Tree<_> = [10].into_iter().collect();
    /// assert_eq!(lonely.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut parent = None;
        let mut max = self.root()?;
        while let Some(right) = max.right() {
            parent = Some(max);
            max = right;
        }

        match max.left() {
            Some(left) => Some(left.rightmost().value()),
            None => parent.map(|parent| parent.value()),
        }
    }

    /// Computes subtree heights bottom-up in one pass over the post-order sequence. A child's
    /// height is pushed before its parent is visited, and a right subtree always finishes after
    /// its left sibling, so each node pops its right height and then its left height.
    ///
    /// Returns the height of the whole tree and whether every node was balanced, or `None` for an
    /// empty tree.
    fn fold_heights(&self) -> Option<(usize, bool)> {
        let mut heights: Vec<usize> = Vec::new();
        let mut balanced = true;
        for node in traverse::post_order(self.root()) {
            let right = node.right().and_then(|_| heights.pop()).unwrap_or(0);
            let left = node.left().and_then(|_| heights.pop()).unwrap_or(0);
            balanced &= left.abs_diff(right) <= 1;
            heights.push(left.max(right) + 1);
        }
        heights.pop().map(|height| (height, balanced))
    }
}
