use std::fmt;

use crate::node::Link;
use crate::tree::Tree;

/// Renders the tree sideways: values are written in inorder, one per line,
/// indented by one space more than their depth. Reading the output with the
/// head tilted left shows the root on the left and left children above their
/// parents. An empty tree renders as nothing.
///
/// # Examples
///
/// ```
/// use bintree::Tree;
///
/// let tree = Tree::join(2, Tree::with_root(1), Tree::with_root(3));
///
/// assert_eq!(tree.to_string(), "  1\n 2\n  3\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_link<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            link: &Link<T>,
            depth: usize,
        ) -> fmt::Result {
            let Some(node) = link.as_deref() else {
                return Ok(());
            };
            write_link(f, &node.left, depth + 1)?;
            writeln!(f, "{:indent$}{}", "", node.value, indent = depth + 1)?;
            write_link(f, &node.right, depth + 1)
        }

        write_link(f, self.root(), 0)
    }
}
