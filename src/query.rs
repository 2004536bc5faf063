//! Queries derived from the shape and contents of a [`Tree`]: mirroring,
//! Binary Search Tree validation, extrema and root-to-leaf paths.
//!
//! None of these rely on the values being ordered. `min` and `max` look at
//! every node and `is_bst` is how one finds out whether they are.

use std::mem;

use tracing::{debug, instrument};

use crate::bound::Stepped;
use crate::error::{TreeError, TreeResult};
use crate::node::{Link, Node};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Reflects the tree left-to-right in place by swapping the children of
    /// every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, Tree};
    ///
    /// let mut tree = Tree::join(2, Tree::with_root(1), Tree::with_root(3));
    /// tree.mirror();
    ///
    /// assert_eq!(tree.values(Order::In), vec![&3, &2, &1]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn mirror(&mut self) {
        fn mirror_link<T>(link: &mut Link<T>) {
            if let Some(node) = link.as_deref_mut() {
                mem::swap(&mut node.left, &mut node.right);
                mirror_link(&mut node.left);
                mirror_link(&mut node.right);
            }
        }

        mirror_link(self.root_mut());
        debug!("mirrored tree");
    }

    /// Returns `true` if the values are arranged as a Binary Search Tree. Each
    /// node's value has to lie within bounds inherited from its ancestors:
    /// going left the upper bound becomes the node's value plus one, going right
    /// the lower bound becomes the node's value minus one. The one-step slack
    /// means a left child may equal its parent or be one larger, and a right
    /// child may equal its parent or be one smaller. An empty tree is a valid
    /// BST.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let bst = Tree::join(2, Tree::with_root(1), Tree::with_root(3));
    /// assert!(bst.is_bst());
    ///
    /// let not_bst = Tree::join(2, Tree::with_root(4), Tree::with_root(0));
    /// assert!(!not_bst.is_bst());
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn is_bst(&self) -> bool
    where
        T: Stepped,
    {
        Self::is_bst_within(self.root(), T::MIN, T::MAX)
    }

    /// Checks that every value behind `link` lies in `low..=high`. Bounds that
    /// would step past `MIN` or `MAX` saturate there.
    fn is_bst_within(link: &Link<T>, low: T, high: T) -> bool
    where
        T: Stepped,
    {
        let Some(node) = link.as_deref() else {
            return true;
        };
        let value = node.value;
        if value < low || value > high {
            return false;
        }

        let upper = value.succ().unwrap_or(T::MAX);
        let lower = value.pred().unwrap_or(T::MIN);
        Self::is_bst_within(&node.left, low, upper) && Self::is_bst_within(&node.right, lower, high)
    }

    /// Borrows the largest value in the tree. Every node is inspected; ties
    /// resolve to the first value found in preorder.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] when the tree is empty.
    #[instrument(level = "trace", skip_all)]
    pub fn max(&self) -> TreeResult<&T>
    where
        T: Ord,
    {
        self.extremum("Tree::max", |candidate, best| candidate > best)
    }

    /// Borrows the smallest value in the tree. Every node is inspected; ties
    /// resolve to the first value found in preorder.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] when the tree is empty.
    #[instrument(level = "trace", skip_all)]
    pub fn min(&self) -> TreeResult<&T>
    where
        T: Ord,
    {
        self.extremum("Tree::min", |candidate, best| candidate < best)
    }

    /// Scans every node in preorder starting from the root's value, replacing
    /// the running extremum whenever `better` says the candidate beats it.
    fn extremum<F>(&self, operation: &'static str, better: F) -> TreeResult<&T>
    where
        F: Fn(&T, &T) -> bool,
    {
        fn scan<'a, T, F>(link: &'a Link<T>, best: &mut &'a T, better: &F)
        where
            F: Fn(&T, &T) -> bool,
        {
            if let Some(node) = link.as_deref() {
                if better(&node.value, *best) {
                    *best = &node.value;
                }
                scan(&node.left, best, better);
                scan(&node.right, best, better);
            }
        }

        let root = self
            .root()
            .as_deref()
            .ok_or(TreeError::PreconditionViolated(operation))?;
        let mut best = &root.value;
        scan(self.root(), &mut best, &better);
        Ok(best)
    }

    /// Calls `emit` once for every root-to-leaf path, left paths first, with
    /// the values along the path from the root down to the leaf.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] when the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::join(1, Tree::with_root(2), Tree::with_root(3));
    /// let mut lines = Vec::new();
    /// tree.for_each_path(|path| {
    ///     let line: Vec<String> = path.iter().map(|x| x.to_string()).collect();
    ///     lines.push(line.join(" "));
    /// })?;
    ///
    /// assert_eq!(lines, vec!["1 2", "1 3"]);
    /// # Ok::<(), bintree::TreeError>(())
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn for_each_path<'a, F>(&'a self, mut emit: F) -> TreeResult<()>
    where
        F: FnMut(&[&'a T]),
    {
        if self.is_empty() {
            return Err(TreeError::PreconditionViolated("Tree::for_each_path"));
        }

        let mut path = Vec::with_capacity(self.height());
        Self::walk_paths(self.root(), &mut path, &mut |path: &[&'a T]| {
            emit(path);
            false
        });
        Ok(())
    }

    /// Collects every root-to-leaf path, left paths first.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] when the tree is empty.
    pub fn paths(&self) -> TreeResult<Vec<Vec<&T>>> {
        let mut paths = Vec::new();
        self.for_each_path(|path| paths.push(path.to_vec()))?;
        Ok(paths)
    }

    /// Returns `true` if the values along some root-to-leaf path add up to
    /// `target`. The search stops at the first such path. A path whose sum
    /// overflows `T` matches no target.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] when the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::join(5, Tree::join(4, Tree::with_root(2), Tree::new()), Tree::with_root(8));
    ///
    /// assert_eq!(tree.has_path_with_sum(11), Ok(true));
    /// assert_eq!(tree.has_path_with_sum(13), Ok(true));
    /// assert_eq!(tree.has_path_with_sum(9), Ok(false));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn has_path_with_sum(&self, target: T) -> TreeResult<bool>
    where
        T: Stepped,
    {
        if self.is_empty() {
            return Err(TreeError::PreconditionViolated("Tree::has_path_with_sum"));
        }

        let mut path = Vec::with_capacity(self.height());
        let found = Self::walk_paths(self.root(), &mut path, &mut |path: &[&T]| {
            Self::checked_sum(path) == Some(target)
        });
        Ok(found)
    }

    fn checked_sum(path: &[&T]) -> Option<T>
    where
        T: Stepped,
    {
        let (first, rest) = path.split_first()?;
        rest.iter().try_fold(**first, |sum, value| sum.checked_plus(**value))
    }

    /// Depth-first walk pushing each value onto `path` on the way down and
    /// popping it on the way back. `at_leaf` sees the full path at every leaf;
    /// the walk stops as soon as it returns `true`.
    fn walk_paths<'a, F>(link: &'a Link<T>, path: &mut Vec<&'a T>, at_leaf: &mut F) -> bool
    where
        F: FnMut(&[&'a T]) -> bool,
    {
        let Some(node) = link.as_deref() else {
            return false;
        };

        path.push(&node.value);
        let stop = if Node::is_leaf(node) {
            at_leaf(path)
        } else {
            Self::walk_paths(&node.left, path, at_leaf)
                || Self::walk_paths(&node.right, path, at_leaf)
        };
        path.pop();
        stop
    }
}
