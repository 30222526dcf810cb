//! Plain (unbalanced) Binary Search Tree construction and deletion.
//!
//! Every operation takes ownership of a subtree and hands back the subtree
//! that should replace it. Internally the descent walks a `&mut Link` cursor
//! instead of recursing, since sorted input grows a tree as tall as the input
//! is long.
//!
//! # Examples
//!
//! ```
//! use treelab::bst;
//!
//! let root = bst::build(&[5, 3, 8, 5]);
//!
//! // The duplicate 5 was dropped.
//! let values: Vec<_> = root.as_deref().unwrap().in_order().collect();
//! assert_eq!(values, vec![3, 5, 8]);
//!
//! // Deleting returns the new root.
//! let root = bst::delete(root, 5);
//! assert_eq!(root.as_deref().map(|n| n.value()), Some(8));
//! ```

use std::cmp;
use std::collections::BTreeMap;
use std::ops::Bound;

use tracing::debug;

use crate::node::{Link, TreeNode};

/// Walks down from `cursor` and returns the link that holds `value`, or the
/// empty link where `value` would be attached.
fn slot(mut cursor: &mut Link, value: i32) -> &mut Link {
    loop {
        match cursor {
            Some(node) if value < node.value => cursor = &mut node.left,
            Some(node) if value > node.value => cursor = &mut node.right,
            _ => return cursor,
        }
    }
}

/// Inserts `value` into the subtree rooted at `node` and returns the root of
/// the resulting subtree.
///
/// Inserting a value that is already present does nothing: the subtree is
/// returned unchanged and no node is created.
pub fn insert(node: Link, value: i32) -> Box<TreeNode> {
    let Some(mut root) = node else {
        return TreeNode::leaf(value);
    };

    let link = match value.cmp(&root.value) {
        cmp::Ordering::Less => slot(&mut root.left, value),
        cmp::Ordering::Greater => slot(&mut root.right, value),
        cmp::Ordering::Equal => return root,
    };
    if link.is_none() {
        *link = Some(TreeNode::leaf(value));
    }

    root
}

/// A node of [`build`]'s scratch arena. Children are indices into the arena.
struct Slot {
    value: i32,
    left: Option<usize>,
    right: Option<usize>,
}

/// Builds a tree by inserting `values` one at a time, in order. Duplicates
/// are dropped and an empty slice gives an empty tree.
///
/// The result is exactly the tree repeated [`insert`] calls would give, but
/// it is built in `O(n lg n)`: a new value always ends up as a child of its
/// nearest smaller or nearest larger value already in the tree, whichever
/// of the two was inserted later. Those are found in an ordered map and the
/// owned tree is assembled at the end.
pub fn build(values: &[i32]) -> Link {
    let mut arena: Vec<Slot> = Vec::with_capacity(values.len());
    let mut positions: BTreeMap<i32, usize> = BTreeMap::new();

    for &value in values {
        if positions.contains_key(&value) {
            continue;
        }

        let at = arena.len();
        let below = positions.range(..value).next_back().map(|(_, &i)| i);
        let above = positions
            .range((Bound::Excluded(value), Bound::Unbounded))
            .next()
            .map(|(_, &i)| i);
        match (below, above) {
            (Some(b), Some(a)) if b > a => arena[b].right = Some(at),
            (_, Some(a)) => arena[a].left = Some(at),
            (Some(b), None) => arena[b].right = Some(at),
            (None, None) => {}
        }

        arena.push(Slot {
            value,
            left: None,
            right: None,
        });
        positions.insert(value, at);
    }

    // Children always sit later in the arena than their parent, so walking
    // it backwards assembles every subtree before its parent needs it.
    let mut nodes: Vec<Link> = Vec::with_capacity(arena.len());
    nodes.resize_with(arena.len(), || None);
    for (i, slot) in arena.iter().enumerate().rev() {
        let left = slot.left.and_then(|l| nodes[l].take());
        let right = slot.right.and_then(|r| nodes[r].take());
        nodes[i] = Some(TreeNode::with_children(slot.value, left, right));
    }

    nodes.into_iter().next().flatten()
}

/// Removes `value` from the subtree rooted at `root` and returns the new root.
///
/// Deleting a value that isn't in the tree leaves it untouched. When the
/// target has two children its value is replaced by its in-order successor
/// (the smallest value of its right subtree), which is then deleted from the
/// right subtree. The target node itself, and therefore its [`id`], survives.
///
/// [`id`]: TreeNode::id
pub fn delete(mut root: Link, value: i32) -> Link {
    let mut cursor = &mut root;
    let mut value = value;

    loop {
        let link = slot(cursor, value);
        match link {
            None => {
                debug!(value, "value not found, nothing deleted");
                break;
            }
            Some(node) if node.left.is_some() && node.right.is_some() => {
                let successor = node.right.as_deref().map_or(node.value, TreeNode::min);
                debug!(value, successor, id = %node.id(), "promoting in-order successor");
                node.value = successor;
                cursor = &mut node.right;
                value = successor;
            }
            Some(_) => {
                if let Some(mut node) = link.take() {
                    *link = node.left.take().or_else(|| node.right.take());
                }
                break;
            }
        }
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(root: &Link) -> Vec<i32> {
        root.as_deref()
            .map(|n| n.in_order().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_build_empty() {
        assert!(build(&[]).is_none());
    }

    #[test]
    fn test_insert_shape() {
        let root = build(&[2, 1, 3]);
        let root = root.as_deref().unwrap();

        assert_eq!(root.value(), 2);
        assert_eq!(root.left().map(TreeNode::value), Some(1));
        assert_eq!(root.right().map(TreeNode::value), Some(3));
    }

    #[test]
    fn test_duplicates_dropped() {
        let root = build(&[5, 5, 3]);
        assert_eq!(root.as_deref().map(TreeNode::len), Some(2));
        assert_eq!(values(&root), vec![3, 5]);

        let before = root.as_deref().unwrap().id();
        let root = insert(root, 5);
        assert_eq!(root.len(), 2);
        assert_eq!(root.id(), before);
    }

    #[test]
    fn test_delete_from_empty() {
        assert!(delete(None, 1).is_none());
    }

    #[test]
    fn test_delete_no_children() {
        let root = build(&[1, 2]);
        let root = delete(root, 2);

        assert_eq!(values(&root), vec![1]);
    }

    #[test]
    fn test_delete_only_child_root() {
        let root = delete(build(&[1]), 1);
        assert!(root.is_none());
    }

    #[test]
    fn test_delete_no_left_child() {
        let root = build(&[1, 2]);
        let root = delete(root, 1);

        assert_eq!(root.as_deref().map(TreeNode::value), Some(2));
        assert_eq!(values(&root), vec![2]);
    }

    #[test]
    fn test_delete_no_right_child() {
        let root = build(&[2, 1]);
        let root = delete(root, 2);

        assert_eq!(root.as_deref().map(TreeNode::value), Some(1));
        assert_eq!(values(&root), vec![1]);
    }

    #[test]
    fn test_delete_two_children_with_no_grandchildren() {
        let root = build(&[2, 1, 3]);
        let root = delete(root, 2);
        let node = root.as_deref().unwrap();

        assert_eq!(node.value(), 3);
        assert_eq!(node.left().map(TreeNode::value), Some(1));
        assert!(node.right().is_none());
    }

    #[test]
    fn test_delete_two_children_keeps_identity() {
        let root = build(&[10, 5, 20, 15, 25, 17]);
        let id = root.as_deref().unwrap().id();
        let successor = root.as_deref().and_then(TreeNode::right).map(TreeNode::min);
        assert_eq!(successor, Some(15));

        let root = delete(root, 10);
        let node = root.as_deref().unwrap();

        assert_eq!(node.id(), id);
        assert_eq!(node.value(), 15);
        assert!(node.right().and_then(|r| r.find(15)).is_none());
        // 15's right child moved up into its place.
        assert_eq!(
            node.right().and_then(TreeNode::left).map(TreeNode::value),
            Some(17)
        );
        assert_eq!(values(&root), vec![5, 15, 17, 20, 25]);
    }

    #[test]
    fn test_build_matches_insert_order() {
        // 3 attaches under 2 (inserted after 4), 5 under 4.
        let root = build(&[1, 4, 2, 3, 5]);
        let node = root.as_deref().unwrap();

        assert_eq!(node.value(), 1);
        let four = node.right().unwrap();
        assert_eq!(four.value(), 4);
        assert_eq!(four.left().and_then(TreeNode::right).map(TreeNode::value), Some(3));
        assert_eq!(four.right().map(TreeNode::value), Some(5));
    }

    #[test]
    fn test_tall_tree() {
        let n = 200_000;
        let xs: Vec<i32> = (0..n).collect();
        let mut root = build(&xs);
        assert_eq!(root.as_deref().map(TreeNode::height), Some(n as usize));

        root = Some(insert(root, n));
        root = delete(root, n - 1);
        root = delete(root, 0);
        let node = root.as_deref().unwrap();

        assert_eq!(node.value(), 1);
        assert_eq!(node.len(), n as usize - 1);
        assert!(node.find(n).is_some());
        assert!(node.find(n - 1).is_none());
        drop(root);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let root = build(&[21, 33, 10, 5, 9, 37, 35, 29, 17, 55, 20]);
        let before = values(&root);
        let root = delete(root, 999);

        assert_eq!(values(&root), before);
    }
}

#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same values in both, in the same order.
    fn do_ops(ops: &[Op<i8>], mut root: Link, set: &mut BTreeSet<i8>) -> (Link, bool) {
        for op in ops {
            match *op {
                Op::Insert(v) => {
                    root = Some(insert(root, i32::from(v)));
                    set.insert(v);
                }
                Op::Remove(v) => {
                    root = delete(root, i32::from(v));
                    set.remove(&v);
                }
                Op::Iter => {
                    let expected: Vec<i32> = set.iter().copied().map(i32::from).collect();
                    let actual: Vec<i32> = root
                        .as_deref()
                        .map(|n| n.in_order().collect())
                        .unwrap_or_default();
                    if expected != actual {
                        return (root, false);
                    }
                }
            }
        }

        (root, true)
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut set = BTreeSet::new();
            let (root, ok) = do_ops(&ops, None, &mut set);

            ok && set.iter().all(|&v| root.as_deref().and_then(|n| n.find(i32::from(v))).is_some())
        }
    }

    /// Preorder values, each with whether it has a left and a right child.
    /// Two trees with the same listing have the same shape.
    fn shape(root: &Link) -> Vec<(i32, bool, bool)> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode> = root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push((node.value(), node.left().is_some(), node.right().is_some()));
            stack.extend(node.right());
            stack.extend(node.left());
        }
        out
    }

    quickcheck::quickcheck! {
        fn build_matches_repeated_insert(xs: Vec<i8>) -> bool {
            let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
            let inserted = xs.iter().fold(None, |root, &x| Some(insert(root, x)));

            shape(&build(&xs)) == shape(&inserted)
        }
    }

    quickcheck::quickcheck! {
        fn build_yields_sorted_distinct(xs: Vec<i32>) -> bool {
            let root = build(&xs);
            let expected: Vec<i32> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
            let actual: Vec<i32> = root.as_deref().map(|n| n.in_order().collect()).unwrap_or_default();

            expected == actual
        }
    }
}
