//! Labelled tree states handed to renderers and to the explanation service.
//!
//! A snapshot serializes to JSON as `{ "label": ..., "root": ... }` where
//! `root` is `null` or a node object `{ "id", "value", "left"?, "right"? }`.
//! Its [`Display`](fmt::Display) impl draws the tree as indented text:
//!
//! ```text
//! Initial BST
//! 2
//! ├─L 1
//! └─R 3
//! ```

use std::fmt;

use serde::Serialize;

use crate::node::TreeNode;
use crate::tree::Tree;

/// A tree state with a human readable label.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    /// What this state represents, e.g. "After deleting 21".
    pub label: String,
    /// The tree itself.
    pub root: Tree,
}

impl Snapshot {
    /// Labels `tree`.
    pub fn new(label: impl Into<String>, tree: Tree) -> Self {
        Self {
            label: label.into(),
            root: tree,
        }
    }

    /// Serializes this snapshot to pretty printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        write!(f, "{}", self.root)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return writeln!(f, "(empty)");
        };

        writeln!(f, "{}", root.value())?;
        let mut stack = Vec::new();
        push_children(&mut stack, root, "");
        while let Some(line) = stack.pop() {
            let (branch, indent) = if line.last { ("└─", "   ") } else { ("├─", "│  ") };
            writeln!(f, "{}{}{} {}", line.prefix, branch, line.side, line.node.value())?;
            push_children(&mut stack, line.node, &format!("{}{}", line.prefix, indent));
        }

        Ok(())
    }
}

/// One child still to be drawn.
struct Line<'a> {
    node: &'a TreeNode,
    side: &'static str,
    prefix: String,
    last: bool,
}

/// Queues the children of `node` so the left one is popped first.
fn push_children<'a>(stack: &mut Vec<Line<'a>>, node: &'a TreeNode, prefix: &str) {
    let children: Vec<(&'static str, &'a TreeNode)> = [("L", node.left()), ("R", node.right())]
        .into_iter()
        .filter_map(|(side, child)| child.map(|c| (side, c)))
        .collect();

    let count = children.len();
    for (i, (side, child)) in children.into_iter().enumerate().rev() {
        stack.push(Line {
            node: child,
            side,
            prefix: prefix.to_string(),
            last: i + 1 == count,
        });
    }
}
