use std::fmt;
use std::mem;

use tracing::{debug, instrument, trace};

use crate::error::{TreeError, TreeResult};
use crate::node::{Link, Node};

/// A pointer based binary tree. Every node exclusively owns its children so the
/// tree is always a finite, acyclic hierarchy rooted at `root`.
///
/// Values are not ordered: [`add`](Tree::add) places new values to keep the tree
/// shallow, and lookups search the whole tree in preorder.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Node::release(&mut self.root);
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    /// Replaces the contents of `self` with a deep copy of `source`. The copy is
    /// finished before the old nodes are released, so a panic while cloning a
    /// value leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut old = mem::replace(&mut self.root, source.root.clone());
        Node::release(&mut old);
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generate a `Tree` with a single node holding `value`.
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Node::new_boxed(value)),
        }
    }

    /// Builds a tree whose root holds `value` and whose children are the roots
    /// of `left` and `right`. The nodes of both subtrees are moved into the new
    /// tree; clone them first to keep the originals around.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, Tree};
    ///
    /// let left = Tree::with_root(3);
    /// let right = Tree::join(8, Tree::with_root(7), Tree::new());
    /// let tree = Tree::join(5, left.clone(), right);
    ///
    /// assert_eq!(tree.values(Order::Pre), vec![&5, &3, &8, &7]);
    /// assert_eq!(left.count(), 1);
    /// ```
    pub fn join(value: T, mut left: Tree<T>, mut right: Tree<T>) -> Self {
        Self {
            root: Some(Box::new(Node::with_children(
                value,
                left.root.take(),
                right.root.take(),
            ))),
        }
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels in the tree: 0 when empty, 1 for a lone root.
    #[instrument(level = "trace", skip_all)]
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Number of nodes in the tree.
    #[instrument(level = "trace", skip_all)]
    pub fn count(&self) -> usize {
        Node::count(&self.root)
    }

    /// Borrows the value stored at the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] when the tree is empty.
    pub fn root_value(&self) -> TreeResult<&T> {
        self.root
            .as_deref()
            .map(|root| &root.value)
            .ok_or(TreeError::PreconditionViolated("Tree::root_value"))
    }

    /// Overwrites the root's value, creating the root if the tree is empty.
    pub fn set_root_value(&mut self, value: T) {
        match self.root.as_deref_mut() {
            Some(root) => root.value = value,
            None => self.root = Some(Node::new_boxed(value)),
        }
    }

    /// Adds `value` as a new leaf. At every node the new leaf goes down the
    /// right subtree if the left one is strictly taller, otherwise down the
    /// left. This keeps the tree shallow without any rotations, but it is not a
    /// strict balance guarantee.
    ///
    /// Always returns `true`: the global allocator aborts rather than failing,
    /// so there is no failure to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=7 {
    ///     assert!(tree.add(x));
    /// }
    ///
    /// assert_eq!(tree.count(), 7);
    /// assert_eq!(tree.height(), 4);
    /// assert_eq!(tree.values(Order::Pre), vec![&1, &2, &4, &7, &6, &3, &5]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn add(&mut self, value: T) -> bool {
        Self::balanced_add(&mut self.root, Node::new_boxed(value));
        trace!("added value");
        true
    }

    /// Removes the first node, in preorder, whose value equals `target` and
    /// returns whether anything was removed.
    ///
    /// The matched node stays in place: values from the taller child subtree
    /// are promoted up one level at a time until a leaf is reached, and that
    /// leaf is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<i32> = (1..=5).collect();
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&42));
    /// assert_eq!(tree.count(), 4);
    /// assert!(!tree.contains(&1));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        let removed = Self::remove_value(&mut self.root, target);
        if removed {
            debug!("removed value");
        } else {
            debug!("value to remove not found");
        }
        removed
    }

    /// Drops every node, leaving an empty tree.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        Node::release(&mut self.root);
        debug!("cleared tree");
    }

    /// Finds the first value, in preorder, equal to `target`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] when no value equals `target`.
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, target: &T) -> TreeResult<&T>
    where
        T: PartialEq,
    {
        Self::find_value(&self.root, target).ok_or(TreeError::NotFound)
    }

    /// Returns `true` if some value in the tree equals `target`.
    #[instrument(level = "trace", skip_all)]
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        Self::find_value(&self.root, target).is_some()
    }

    pub(crate) fn root(&self) -> &Link<T> {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Link<T> {
        &mut self.root
    }

    fn balanced_add(link: &mut Link<T>, new_node: Box<Node<T>>) {
        match link {
            None => *link = Some(new_node),
            Some(node) => {
                if Node::height(&node.left) > Node::height(&node.right) {
                    Self::balanced_add(&mut node.right, new_node);
                } else {
                    Self::balanced_add(&mut node.left, new_node);
                }
            }
        }
    }

    fn remove_value(link: &mut Link<T>, target: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(node) = link.as_deref_mut() else {
            return false;
        };
        if node.value == *target {
            Self::move_values_up(link);
            return true;
        }

        Self::remove_value(&mut node.left, target) || Self::remove_value(&mut node.right, target)
    }

    /// Pushes the value at `link` down to a leaf by swapping it with the value
    /// of the taller child (right on ties) at each level, then drops that leaf.
    fn move_values_up(link: &mut Link<T>) {
        let Some(node) = link.as_deref_mut() else {
            return;
        };
        if node.is_leaf() {
            *link = None;
            return;
        }

        let donor = if Node::height(&node.left) > Node::height(&node.right) {
            &mut node.left
        } else {
            &mut node.right
        };
        if let Some(child) = donor.as_deref_mut() {
            mem::swap(&mut node.value, &mut child.value);
        }
        Self::move_values_up(donor);
    }

    fn find_value<'a>(link: &'a Link<T>, target: &T) -> Option<&'a T>
    where
        T: PartialEq,
    {
        let node = link.as_deref()?;
        if node.value == *target {
            return Some(&node.value);
        }

        Self::find_value(&node.left, target).or_else(|| Self::find_value(&node.right, target))
    }
}
