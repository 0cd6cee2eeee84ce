//! Plain (unbalanced) binary search tree baseline.
//!
//! Same interface and counting semantics as [`RbTree`](crate::RbTree), minus
//! the rebalancing step. It exists so comparison counts of the balanced tree
//! can be measured against a naive baseline; insertion order fully
//! determines its shape, so adversarial orders degrade it to a list.

use std::cmp::Ordering;

use crate::arena::{Color, InorderIter, NodeArena, NodeId};
use crate::render::NodeAccess;
use crate::OrderedKeyTree;

/// An ordered key container without rebalancing.
///
/// Nodes carry no meaningful color; they are stored black so the shared
/// rendering and traversal machinery works unchanged.
#[derive(Clone, Debug)]
pub struct BstTree {
    arena: NodeArena,
    root: NodeId,
    comparison_count: u64,
    hits: u64,
    misses: u64,
}

impl BstTree {
    /// Create an empty tree. All counters start at zero.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: NodeId::NIL,
            comparison_count: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Insert `key` as a leaf found by ordered descent (`<` goes left,
    /// `>=` goes right), counting one comparison per node visited.
    pub fn insert(&mut self, key: i64) {
        let mut parent = NodeId::NIL;
        let mut current = self.root;

        while !current.is_nil() {
            parent = current;
            self.comparison_count += 1;
            current = if key < self.arena[current].key {
                self.arena[current].left
            } else {
                self.arena[current].right
            };
        }

        let node = self.arena.alloc(key, Color::Black);
        self.arena[node].parent = parent;

        if parent.is_nil() {
            self.root = node;
        } else if key < self.arena[parent].key {
            self.arena[parent].left = node;
        } else {
            self.arena[parent].right = node;
        }
    }

    /// Look up `key`; same contract as [`RbTree::search`](crate::RbTree::search).
    pub fn search(&mut self, key: i64) -> u64 {
        let mut current = self.root;
        let mut comparisons = 0u64;

        while !current.is_nil() {
            comparisons += 1;
            match key.cmp(&self.arena[current].key) {
                Ordering::Equal => {
                    self.hits += 1;
                    return comparisons;
                }
                Ordering::Less => current = self.arena[current].left,
                Ordering::Greater => current = self.arena[current].right,
            }
        }

        self.misses += 1;
        comparisons
    }

    /// Total key comparisons made by all insertions so far.
    pub fn comparison_count(&self) -> u64 {
        self.comparison_count
    }

    /// Number of searches that found their key.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of searches that did not find their key.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of keys stored (duplicates included).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = Vec::new();
        if !self.root.is_nil() {
            stack.push((self.root, 1usize));
        }
        while let Some((id, level)) = stack.pop() {
            max = max.max(level);
            let node = &self.arena[id];
            if !node.left.is_nil() {
                stack.push((node.left, level + 1));
            }
            if !node.right.is_nil() {
                stack.push((node.right, level + 1));
            }
        }
        max
    }

    /// In-order traversal yielding `(key, color, depth)` per node.
    pub fn iter(&self) -> InorderIter<'_> {
        InorderIter::new(&self.arena, self.root)
    }

    /// Handle of the root node (NIL when the tree is empty).
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Key of a real node.
    ///
    /// # Panics
    /// Panics when `id` is the sentinel.
    pub fn key(&self, id: NodeId) -> i64 {
        assert!(!id.is_nil(), "the sentinel has no key");
        self.arena[id].key
    }

    /// Color of a node (always black for this variant).
    pub fn color(&self, id: NodeId) -> Color {
        self.arena[id].color
    }

    /// Left child handle (possibly NIL).
    pub fn left(&self, id: NodeId) -> NodeId {
        self.arena[id].left
    }

    /// Right child handle (possibly NIL).
    pub fn right(&self, id: NodeId) -> NodeId {
        self.arena[id].right
    }
}

impl Default for BstTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeAccess for BstTree {
    fn root(&self) -> NodeId {
        self.root
    }

    fn key(&self, id: NodeId) -> i64 {
        BstTree::key(self, id)
    }

    fn color(&self, id: NodeId) -> Color {
        BstTree::color(self, id)
    }

    fn left(&self, id: NodeId) -> NodeId {
        BstTree::left(self, id)
    }

    fn right(&self, id: NodeId) -> NodeId {
        BstTree::right(self, id)
    }
}

impl OrderedKeyTree for BstTree {
    fn insert(&mut self, key: i64) {
        BstTree::insert(self, key)
    }

    fn search(&mut self, key: i64) -> u64 {
        BstTree::search(self, key)
    }

    fn comparison_count(&self) -> u64 {
        self.comparison_count
    }

    fn hits(&self) -> u64 {
        self.hits
    }

    fn misses(&self) -> u64 {
        self.misses
    }

    fn len(&self) -> usize {
        BstTree::len(self)
    }

    fn height(&self) -> usize {
        BstTree::height(self)
    }
}
