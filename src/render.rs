//! ASCII rendering of tree structure.
//!
//! The renderer is presentation-only: it walks a tree exclusively through
//! the [`NodeAccess`] handles, exactly like any external consumer would.

use crate::arena::{Color, NodeId};

/// Read-only structural access a renderer needs: the root handle plus key,
/// color and child handles per node. Implemented by both tree variants.
pub trait NodeAccess {
    /// Root handle (NIL for an empty tree).
    fn root(&self) -> NodeId;
    /// Key of a real node.
    fn key(&self, id: NodeId) -> i64;
    /// Color of a node.
    fn color(&self, id: NodeId) -> Color;
    /// Left child handle.
    fn left(&self, id: NodeId) -> NodeId;
    /// Right child handle.
    fn right(&self, id: NodeId) -> NodeId;
}

/// Render a tree hierarchically, one node per line.
///
/// The left subtree is printed before the right one, connected with `├──`
/// and `└──` respectively:
///
/// ```text
/// └── 40 (BLACK)
///     ├── 17 (RED)
///     │   ├── 13 (BLACK)
///     │   │   └── 14 (RED)
///     │   └── 34 (BLACK)
///     │       └── 35 (RED)
///     └── 54 (RED)
///         ├── 42 (BLACK)
///         └── 61 (BLACK)
///             └── 98 (RED)
/// ```
pub fn render(tree: &impl NodeAccess) -> String {
    let mut out = String::new();
    // Explicit stack; pushing the right child first keeps left-before-right
    // output order.
    let mut stack: Vec<(NodeId, String, bool)> = Vec::new();
    if !tree.root().is_nil() {
        stack.push((tree.root(), String::new(), true));
    }

    while let Some((id, indent, last)) = stack.pop() {
        let connector = if last { "└── " } else { "├── " };
        out.push_str(&indent);
        out.push_str(connector);
        out.push_str(&format!("{} ({})\n", tree.key(id), tree.color(id)));

        let child_indent = if last {
            format!("{indent}    ")
        } else {
            format!("{indent}│   ")
        };

        let right = tree.right(id);
        if !right.is_nil() {
            stack.push((right, child_indent.clone(), true));
        }
        let left = tree.left(id);
        if !left.is_nil() {
            stack.push((left, child_indent, false));
        }
    }

    out
}
