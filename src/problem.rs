//! The demonstration problems and the tree states each one walks through.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::fixture;
use crate::snapshot::Snapshot;
use crate::tree::Tree;

/// How a problem's tree is produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TreeKind {
    /// The fixed decision tree from [`fixture`].
    Decision,
    /// Sequential BST insertion, optionally followed by deletions.
    Bst,
    /// Labelled AVL, built with [`Tree::balanced`]. No rotations are involved.
    Avl,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decision => "decision tree",
            Self::Bst => "BST",
            Self::Avl => "AVL tree",
        })
    }
}

/// One exercise: input data plus what is done with it.
#[derive(Clone, Debug, Serialize)]
pub struct Problem {
    /// Short key, e.g. `q2`.
    pub id: &'static str,
    /// Heading shown to the student.
    pub title: &'static str,
    /// The exercise text.
    pub description: &'static str,
    /// Which builder produces the tree.
    pub kind: TreeKind,
    /// Values the tree is built from.
    pub initial_data: Vec<i32>,
    /// Values deleted one after another once the tree is built.
    pub deletions: Vec<i32>,
}

impl Problem {
    /// The ordered tree states of this problem.
    ///
    /// Every state is recomputed from `initial_data`, so the returned trees
    /// share nothing. For a BST problem the first state is the freshly built
    /// tree and each later one has one more of `deletions` applied.
    pub fn steps(&self) -> Vec<Snapshot> {
        match self.kind {
            TreeKind::Decision => vec![Snapshot::new("Full Tree", fixture::decision_tree())],
            TreeKind::Bst => bst_steps(&self.initial_data, &self.deletions),
            TreeKind::Avl => vec![Snapshot::new(
                "Final AVL State",
                Tree::balanced(&self.initial_data),
            )],
        }
    }
}

/// The states of a BST built from `values`: the initial tree, then one
/// state per deletion with every deletion up to it applied.
pub fn bst_steps(values: &[i32], deletions: &[i32]) -> Vec<Snapshot> {
    let mut steps = vec![Snapshot::new("Initial BST", Tree::bst(values))];
    for (i, &value) in deletions.iter().enumerate() {
        let mut tree = Tree::bst(values);
        for &earlier in &deletions[..i] {
            tree.delete(earlier);
        }
        if !tree.delete(value) {
            debug!(value, "deleted value was not in the tree");
        }
        steps.push(Snapshot::new(format!("After deleting {value}"), tree));
    }
    steps
}

/// All problems, in presentation order.
pub fn problems() -> Vec<Problem> {
    vec![
        Problem {
            id: "q1",
            title: "Problem 1: Decision Tree",
            description: "A binary search decision tree based on the data: 11, 13, 25, 37, 44, \
                          51, 59, 63, 67, 71, 79, 83, 101. The midpoint logic (L+H)//2 \
                          determines nodes.",
            kind: TreeKind::Decision,
            initial_data: vec![11, 13, 25, 37, 44, 51, 59, 63, 67, 71, 79, 83, 101],
            deletions: Vec::new(),
        },
        Problem {
            id: "q2",
            title: "Problem 2: BST Operations",
            description: "Initial sequence: 21, 33, 10, 5, 9, 37, 35, 29, 17, 55, 20. Explore \
                          the tree before and after deleting root 21, then 37 and 55.",
            kind: TreeKind::Bst,
            initial_data: vec![21, 33, 10, 5, 9, 37, 35, 29, 17, 55, 20],
            deletions: vec![21, 37, 55],
        },
        Problem {
            id: "q3",
            title: "Problem 3: Final AVL Tree",
            description: "Visualizing the final state of an AVL tree built from a decreasing \
                          sequence: 23, 21, 19, ..., 1. Shows a perfectly balanced structure.",
            kind: TreeKind::Avl,
            initial_data: (0..12).map(|i| 23 - i * 2).collect(),
            deletions: Vec::new(),
        },
    ]
}

/// Looks a problem up by its id.
pub fn find(id: &str) -> Option<Problem> {
    problems().into_iter().find(|p| p.id == id)
}
