//! This crate exposes a pointer based binary tree mostly for educational
//! purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is a data structure where every `Node` stores some value and
//! owns at most two child `Node`s, a left one and a right one. Unlike a Binary
//! Search Tree, values are not kept in any particular order: [`Tree::add`] grafts
//! new values wherever the tree is shallowest so that the height stays close to
//! `lg N` (where `N` is the number of nodes) without any rotations.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! On top of the usual insert/find/remove operations the tree supports the
//! three depth-first traversals (see [`Order`]) and a handful of derived queries:
//! mirroring, checking whether the values happen to form a Binary Search Tree,
//! min/max extraction, root-to-leaf path enumeration and path sums.
//!
//! # Examples
//!
//! ```
//! use bintree::{Order, Tree, TreeError};
//!
//! let mut tree: Tree<i32> = [5, 8, 4, 3].into_iter().collect();
//!
//! assert_eq!(tree.count(), 4);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root_value(), Ok(&5));
//! assert_eq!(tree.values(Order::Pre), vec![&5, &8, &3, &4]);
//!
//! assert!(tree.remove(&8));
//! assert!(!tree.contains(&8));
//! assert_eq!(tree.find(&8), Err(TreeError::NotFound));
//! ```

#![deny(missing_docs)]

mod bound;
mod display;
mod error;
mod node;
mod query;
mod traversal;
mod tree;


pub use bound::Stepped;
pub use error::{TreeError, TreeResult};
pub use traversal::Order;
pub use tree::Tree;
