//! This crate builds and mutates small binary trees for teaching purposes,
//! and exposes every intermediate state as a snapshot that renderers and an
//! explanation service can consume.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s. Each `Node` holds one
//! value and may have a left and a right child. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Visiting the left subtree, then the node, then the right subtree (an
//! in-order traversal) yields the values sorted. The [`bst`] module grows a
//! tree one insertion at a time, so its height depends on the input order.
//! The [`balanced`] module instead sorts the input first and always splits at
//! the midpoint, which keeps the height at `O(lg N)`.
//!
//! ## Ownership
//!
//! Each [`TreeNode`] owns its children, so a tree is always a strict tree. The
//! mutating operations take a root by value and return the new root; a
//! [`Tree`] holds that root for callers that would rather not thread it
//! through themselves.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod bst;
pub mod explain;
pub mod fixture;
pub mod node;
pub mod problem;
pub mod snapshot;
pub mod tree;

pub use node::{Link, NodeId, TreeNode};
pub use snapshot::Snapshot;
pub use tree::Tree;
