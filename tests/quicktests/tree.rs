use treelab::Tree;

use std::collections::BTreeSet;

/// Builds a BST from `xs`, deletes each of `deletes` from it, and the same
/// from a set. This way we can check the tree holds exactly the survivors.
fn apply(xs: &[i32], deletes: &[i32]) -> (Tree, BTreeSet<i32>) {
    let mut tree = Tree::bst(xs);
    let mut set: BTreeSet<i32> = xs.iter().copied().collect();
    for delete in deletes {
        assert_eq!(tree.delete(*delete), set.remove(delete));
    }

    (tree, set)
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_and_distinct(xs: Vec<i32>) -> bool {
        let tree = Tree::bst(&xs);
        let distinct: BTreeSet<i32> = xs.into_iter().collect();

        tree.in_order().eq(distinct.into_iter())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
        let deletes: Vec<i32> = deletes.into_iter().map(i32::from).collect();
        let (tree, still_present) = apply(&xs, &deletes);

        deletes.iter().all(|x| !tree.contains(*x))
            && still_present.iter().all(|x| tree.contains(*x))
            && tree.in_order().eq(still_present.iter().copied())
    }
}

quickcheck::quickcheck! {
    fn delete_missing_is_noop(xs: Vec<i8>) -> bool {
        let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
        let mut tree = Tree::bst(&xs);
        let before: Vec<i32> = tree.in_order().collect();

        !tree.delete(999) && tree.in_order().eq(before.into_iter())
    }
}

quickcheck::quickcheck! {
    fn balanced_keeps_duplicates(xs: Vec<i8>) -> bool {
        let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
        let tree = Tree::balanced(&xs);
        let mut sorted = xs.clone();
        sorted.sort();

        tree.len() == xs.len() && tree.in_order().eq(sorted.into_iter())
    }
}
