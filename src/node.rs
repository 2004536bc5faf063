/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and exclusively owns up to two children. There are
/// no parent pointers: every algorithm walks downwards from the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self::with_children(value, None, None)
    }

    pub(crate) fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree behind `link`. An absent subtree has
    /// a height of 0 and a leaf has a height of 1.
    pub(crate) fn height(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(n) => 1 + Self::height(&n.left).max(Self::height(&n.right)),
        }
    }

    /// How many nodes are in the subtree behind `link`.
    pub(crate) fn count(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(n) => 1 + Self::count(&n.left) + Self::count(&n.right),
        }
    }

    /// Drops the subtree behind `link` without recursing, so arbitrarily deep
    /// chains can't overflow the stack.
    pub(crate) fn release(link: &mut Link<T>) {
        let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
