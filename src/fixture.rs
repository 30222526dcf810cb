//! The hand-drawn binary search decision tree used by the first problem.
//!
//! The tree is stored as its preorder listing. Inserting a BST's values in
//! preorder rebuilds exactly that BST, so the constant pins down the shape.

use crate::tree::Tree;

/// Preorder values of the decision tree over
/// `11, 13, 25, 37, 44, 51, 59, 63, 67, 71, 79, 83, 101`.
///
/// ```text
///              59
///          /        \
///        25          71
///       /  \        /   \
///     11    44    63     83
///       \  /  \     \   /  \
///       13 37 51    67 79  101
/// ```
pub const DECISION_TREE_PREORDER: [i32; 13] = [59, 25, 11, 13, 44, 37, 51, 71, 63, 67, 83, 79, 101];

/// A fresh copy of the decision tree, with fresh node ids.
pub fn decision_tree() -> Tree {
    Tree::bst(&DECISION_TREE_PREORDER)
}
