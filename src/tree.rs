//! An owner for a root [`Link`].
//!
//! The free functions in [`bst`] return a new root on every call. `Tree`
//! stores that root so callers can't accidentally keep using a stale one.
//!
//! # Examples
//!
//! ```
//! use treelab::Tree;
//!
//! let mut tree = Tree::bst(&[21, 33, 10]);
//! assert_eq!(tree.len(), 3);
//!
//! tree.delete(21);
//! assert!(!tree.contains(21));
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![10, 33]);
//! ```

use serde::Serialize;

use crate::balanced;
use crate::bst;
use crate::node::{InOrder, Link, TreeNode};

/// A possibly empty binary tree.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Tree {
    root: Link,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a BST by inserting `values` in order, dropping duplicates.
    pub fn bst(values: &[i32]) -> Self {
        Self {
            root: bst::build(values),
        }
    }

    /// Builds a balanced tree from `values`, keeping duplicates.
    pub fn balanced(values: &[i32]) -> Self {
        Self {
            root: balanced::build_balanced(values),
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Inserts `value` with BST ordering. Returns `false` if it was already
    /// present, in which case nothing changed.
    pub fn insert(&mut self, value: i32) -> bool {
        let added = !self.contains(value);
        self.root = Some(bst::insert(self.root.take(), value));
        added
    }

    /// Deletes `value` with BST ordering. Returns `false` if it wasn't found.
    pub fn delete(&mut self, value: i32) -> bool {
        let found = self.contains(value);
        self.root = bst::delete(self.root.take(), value);
        found
    }

    /// Whether a node holding `value` can be reached by BST descent.
    pub fn contains(&self, value: i32) -> bool {
        self.root().and_then(|n| n.find(value)).is_some()
    }

    /// Values in order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.root().map_or(0, TreeNode::len)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }
}

impl From<Link> for Tree {
    fn from(root: Link) -> Self {
        Self { root }
    }
}
