use tracing::instrument;

use crate::node::Link;
use crate::tree::Tree;

/// The depth-first order in which a traversal visits each node relative to its
/// children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Visit the node, then its left subtree, then its right subtree.
    Pre,
    /// Visit the left subtree, then the node, then the right subtree.
    In,
    /// Visit the left subtree, then the right subtree, then the node.
    Post,
}

fn walk<'a, T, F>(link: &'a Link<T>, order: Order, visit: &mut F)
where
    F: FnMut(&'a T),
{
    let Some(node) = link.as_deref() else {
        return;
    };
    if order == Order::Pre {
        visit(&node.value);
    }
    walk(&node.left, order, visit);
    if order == Order::In {
        visit(&node.value);
    }
    walk(&node.right, order, visit);
    if order == Order::Post {
        visit(&node.value);
    }
}

fn walk_mut<T, F>(link: &mut Link<T>, order: Order, visit: &mut F)
where
    F: FnMut(&mut T),
{
    let Some(node) = link.as_deref_mut() else {
        return;
    };
    if order == Order::Pre {
        visit(&mut node.value);
    }
    walk_mut(&mut node.left, order, visit);
    if order == Order::In {
        visit(&mut node.value);
    }
    walk_mut(&mut node.right, order, visit);
    if order == Order::Post {
        visit(&mut node.value);
    }
}

impl<T> Tree<T> {
    /// Calls `visit` once per node, in the given `order`, with a mutable
    /// reference to its value. Changes made by `visit` stay in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, Tree};
    ///
    /// let mut tree: Tree<i32> = (1..=3).collect();
    /// tree.traverse(Order::Post, |x| *x *= 10);
    ///
    /// assert_eq!(tree.values(Order::In), vec![&20, &10, &30]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn traverse<F>(&mut self, order: Order, mut visit: F)
    where
        F: FnMut(&mut T),
    {
        walk_mut(self.root_mut(), order, &mut visit);
    }

    /// Shorthand for [`traverse`](Tree::traverse) with [`Order::Pre`].
    pub fn preorder_traverse<F>(&mut self, visit: F)
    where
        F: FnMut(&mut T),
    {
        self.traverse(Order::Pre, visit);
    }

    /// Shorthand for [`traverse`](Tree::traverse) with [`Order::In`].
    pub fn inorder_traverse<F>(&mut self, visit: F)
    where
        F: FnMut(&mut T),
    {
        self.traverse(Order::In, visit);
    }

    /// Shorthand for [`traverse`](Tree::traverse) with [`Order::Post`].
    pub fn postorder_traverse<F>(&mut self, visit: F)
    where
        F: FnMut(&mut T),
    {
        self.traverse(Order::Post, visit);
    }

    /// Calls `visit` once per node, in the given `order`, without modifying the
    /// tree.
    pub fn for_each<'a, F>(&'a self, order: Order, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        walk(self.root(), order, &mut visit);
    }

    /// Collects references to every value in the given `order`.
    pub fn values(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::new();
        self.for_each(order, |value| values.push(value));
        values
    }
}
