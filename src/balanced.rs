//! Height-balanced construction from an arbitrary sequence.
//!
//! This is not an AVL tree: there are no rotations and no balance factors.
//! The input is sorted once and the tree is built top-down by always picking
//! the middle element as the subtree root, which already gives the minimum
//! possible height.

use crate::node::{Link, TreeNode};

/// Builds a balanced tree holding every value of `values`, duplicates
/// included, so the tree has exactly `values.len()` nodes.
///
/// # Examples
///
/// ```
/// use treelab::balanced::build_balanced;
///
/// let root = build_balanced(&[3, 1, 2, 2]).unwrap();
///
/// assert_eq!(root.len(), 4);
/// assert_eq!(root.height(), 3);
/// assert_eq!(root.in_order().collect::<Vec<_>>(), vec![1, 2, 2, 3]);
/// ```
pub fn build_balanced(values: &[i32]) -> Link {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    from_sorted(&sorted)
}

/// Recursive helper for [`build_balanced`].
fn from_sorted(xs: &[i32]) -> Link {
    if xs.is_empty() {
        return None;
    }

    let mid = xs.len() / 2;
    Some(TreeNode::with_children(
        xs[mid],
        from_sorted(&xs[..mid]),
        from_sorted(&xs[mid + 1..]),
    ))
}
