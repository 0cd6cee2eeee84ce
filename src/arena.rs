//! Flat node storage shared by the tree variants.
//!
//! Nodes form a cyclic graph (left/right children plus a parent pointer), so
//! they live in a growable arena and refer to each other by index instead of
//! by ownership. Slot 0 is the reserved sentinel: always black, never carries
//! a meaningful key, and stands in for "no child", "no parent" and the empty
//! root all at once.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Index of a node inside a [`NodeArena`].
///
/// `NodeId::NIL` (slot 0) is the sentinel and never addresses a real node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// The sentinel id.
    pub const NIL: NodeId = NodeId(0);

    /// Whether this id is the sentinel.
    #[inline]
    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Node color under the red-black discipline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Freshly inserted nodes start red.
    Red,
    /// The sentinel and the root are always black.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("RED"),
            Color::Black => f.write_str("BLACK"),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub key: i64,
    pub color: Color,
    pub left: NodeId,
    pub right: NodeId,
    pub parent: NodeId,
}

/// Growable node storage with the sentinel pre-allocated at slot 0.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    slots: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        // The sentinel's key slot exists but is never read.
        Self {
            slots: vec![Node {
                key: 0,
                color: Color::Black,
                left: NodeId::NIL,
                right: NodeId::NIL,
                parent: NodeId::NIL,
            }],
        }
    }

    /// Allocate a fresh node with both children and the parent set to NIL.
    pub fn alloc(&mut self, key: i64, color: Color) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Node {
            key,
            color,
            left: NodeId::NIL,
            right: NodeId::NIL,
            parent: NodeId::NIL,
        });
        id
    }

    /// Number of real (non-sentinel) nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.index()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.index()]
    }
}

/// Lazy in-order traversal over the real nodes of a tree.
///
/// Uses an explicit stack so the traversal depth is bounded by heap capacity
/// rather than the call stack. Yields `(key, color, depth)` with the root at
/// depth 0.
pub struct InorderIter<'a> {
    arena: &'a NodeArena,
    stack: Vec<(NodeId, usize)>,
    next: (NodeId, usize),
}

impl<'a> InorderIter<'a> {
    pub(crate) fn new(arena: &'a NodeArena, root: NodeId) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            next: (root, 0),
        }
    }
}

impl Iterator for InorderIter<'_> {
    type Item = (i64, Color, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (mut id, mut depth) = self.next;
        while !id.is_nil() {
            self.stack.push((id, depth));
            id = self.arena[id].left;
            depth += 1;
        }
        let (id, depth) = self.stack.pop()?;
        let node = &self.arena[id];
        self.next = (node.right, depth + 1);
        Some((node.key, node.color, depth))
    }
}
