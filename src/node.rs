//! The recursive node type shared by every builder in this crate.
//!
//! A [`TreeNode`] exclusively owns its children through [`Link`]s, so any
//! tree reachable from a root is a strict tree: no sharing and no cycles.
//! Every walk over it terminates, and the walks here use explicit stacks so
//! tall trees never exhaust the call stack.

use std::cmp;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// An optional, owned child. `None` means there is no child.
pub type Link = Option<Box<TreeNode>>;

/// Source of fresh [`NodeId`]s. Ids start at 1 and only ever go up.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a node, assigned when the node is created and never
/// reused. It is only meant for keying nodes externally (e.g. stable UI keys)
/// and plays no part in ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// One vertex of a binary tree.
#[derive(Debug, Serialize)]
pub struct TreeNode {
    id: NodeId,
    pub(crate) value: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) left: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) right: Link,
}

impl TreeNode {
    /// Creates a childless node holding `value` with a fresh id.
    pub fn leaf(value: i32) -> Box<Self> {
        Box::new(Self {
            id: NodeId::next(),
            value,
            left: None,
            right: None,
        })
    }

    /// Creates a node with the given children.
    pub(crate) fn with_children(value: i32, left: Link, right: Link) -> Box<Self> {
        Box::new(Self {
            id: NodeId::next(),
            value,
            left,
            right,
        })
    }

    /// This node's identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in the subtree rooted here.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// Number of levels in the subtree rooted here. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|l| (l, depth + 1)));
            stack.extend(node.right().map(|r| (r, depth + 1)));
        }
        height
    }

    /// The smallest value in this subtree, found by following left children.
    pub fn min(&self) -> i32 {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node.value
    }

    /// Searches this subtree for `value` using the BST ordering.
    pub fn find(&self, value: i32) -> Option<&TreeNode> {
        let mut node = Some(self);
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                cmp::Ordering::Less => n.left(),
                cmp::Ordering::Equal => return Some(n),
                cmp::Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Iterates over the values of this subtree in order: left subtree, node,
    /// right subtree.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(Some(self))
    }
}

impl Drop for TreeNode {
    // Detach descendants onto a heap stack. The derived drop recurses once
    // per level and overflows on tall trees.
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// In-order iterator over node values. It keeps an explicit stack of the
/// nodes whose left subtrees are still being visited.
pub struct InOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value)
    }
}
