//! Comparison-counting red-black tree over signed integer keys.
//!
//! The tree maintains the usual red-black invariants (black root, no two
//! consecutive reds, equal black count on every root-to-sentinel path) and
//! additionally counts key comparisons: insertions bump a tree-wide counter
//! once per descent comparison, and each search reports its own comparison
//! count while updating the `hits`/`misses` tallies.
//!
//! Counting is deliberately descent-only: the color and uncle checks inside
//! the fix-up loop do not touch the counter, matching the reporting
//! semantics of the harness this crate was built for.

use std::cmp::Ordering;

use log::trace;

use crate::arena::{Color, InorderIter, NodeArena, NodeId};
use crate::render::NodeAccess;
use crate::OrderedKeyTree;

/// A self-balancing ordered key container with comparison counters.
///
/// Duplicate keys are accepted; an equal key is routed to the right subtree,
/// so a search for a duplicated key finds whichever copy sits highest on the
/// descent path (the earliest-inserted one).
///
/// ```rust
/// use rbmap::RbTree;
///
/// let mut tree = RbTree::new();
/// for key in [40, 54, 34, 42, 17] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.search(40), 1); // root hit, a single comparison
/// assert_eq!(tree.hits(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RbTree {
    arena: NodeArena,
    root: NodeId,
    comparison_count: u64,
    hits: u64,
    misses: u64,
}

impl RbTree {
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

    /// Insert `key`, keeping the tree balanced.
    ///
    /// The new node starts red and is attached as a leaf found by ordered
    /// descent (`<` goes left, `>=` goes right), then the fix-up loop
    /// restores the red-black invariants. Every descent comparison
    /// increments [`comparison_count`](Self::comparison_count); fix-up
    /// comparisons are not counted.
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

        let node = self.arena.alloc(key, Color::Red);
        self.arena[node].parent = parent;

        if parent.is_nil() {
            self.root = node;
        } else if key < self.arena[parent].key {
            self.arena[parent].left = node;
        } else {
            self.arena[parent].right = node;
        }

        trace!("inserted key {key}, fixing up");
        self.fix_insert(node);
    }

    /// Restore the red-black invariants after inserting `node`.
    ///
    /// Canonical three-case loop, applied symmetrically depending on which
    /// side of the grandparent the parent sits on. The sentinel is black, so
    /// reaching the root (parent NIL) ends the loop naturally.
    fn fix_insert(&mut self, mut node: NodeId) {
        while self.arena[self.arena[node].parent].color == Color::Red {
            let parent = self.arena[node].parent;
            let grandparent = self.arena[parent].parent;
            // A red node is never the root, so a red parent has a parent.
            assert!(
                !grandparent.is_nil(),
                "fix-up reached a red parent with no grandparent: invariants broken"
            );

            if parent == self.arena[grandparent].left {
                let uncle = self.arena[grandparent].right;
                if self.arena[uncle].color == Color::Red {
                    // Case 1: red uncle. Recolor and continue two levels up.
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    node = grandparent;
                } else {
                    if node == self.arena[parent].right {
                        // Case 2: inner grandchild, rotate into case 3.
                        node = parent;
                        self.rotate_left(node);
                    }
                    // Case 3: outer grandchild. Recolor, rotate the
                    // grandparent, done on this path.
                    let parent = self.arena[node].parent;
                    let grandparent = self.arena[parent].parent;
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.arena[grandparent].left;
                if self.arena[uncle].color == Color::Red {
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    node = grandparent;
                } else {
                    if node == self.arena[parent].left {
                        node = parent;
                        self.rotate_right(node);
                    }
                    let parent = self.arena[node].parent;
                    let grandparent = self.arena[parent].parent;
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }

            if node == self.root {
                break;
            }
        }

        // The root is unconditionally black.
        let root = self.root;
        self.arena[root].color = Color::Black;
    }

    /// Rotate `x`'s right child above it. Pure relation surgery: no key is
    /// ever compared and the in-order sequence is unchanged.
    fn rotate_left(&mut self, x: NodeId) {
        let y = self.arena[x].right;
        assert!(!y.is_nil(), "rotate_left: pivot has no right child");

        let moved = self.arena[y].left;
        self.arena[x].right = moved;
        if !moved.is_nil() {
            self.arena[moved].parent = x;
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        if x_parent.is_nil() {
            self.root = y;
        } else if x == self.arena[x_parent].left {
            self.arena[x_parent].left = y;
        } else {
            self.arena[x_parent].right = y;
        }

        self.arena[y].left = x;
        self.arena[x].parent = y;
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, y: NodeId) {
        let x = self.arena[y].left;
        assert!(!x.is_nil(), "rotate_right: pivot has no left child");

        let moved = self.arena[x].right;
        self.arena[y].left = moved;
        if !moved.is_nil() {
            self.arena[moved].parent = y;
        }

        let y_parent = self.arena[y].parent;
        self.arena[x].parent = y_parent;
        if y_parent.is_nil() {
            self.root = x;
        } else if y == self.arena[y_parent].right {
            self.arena[y_parent].right = x;
        } else {
            self.arena[y_parent].left = x;
        }

        self.arena[x].right = y;
        self.arena[y].parent = x;
    }

    /// Look up `key` and return the number of comparisons this call made.
    ///
    /// One comparison is counted per node visited, including the matching
    /// one, so a root hit reports 1 and an empty tree reports 0. An exact
    /// match bumps [`hits`](Self::hits); falling off the tree bumps
    /// [`misses`](Self::misses). The structure is never modified and the
    /// insertion-time [`comparison_count`](Self::comparison_count) is
    /// unaffected.
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

    /// In-order traversal yielding `(key, color, depth)` per real node.
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

    /// Color of a node; the sentinel reads as black.
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

impl Default for RbTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeAccess for RbTree {
    fn root(&self) -> NodeId {
        self.root
    }

    fn key(&self, id: NodeId) -> i64 {
        RbTree::key(self, id)
    }

    fn color(&self, id: NodeId) -> Color {
        RbTree::color(self, id)
    }

    fn left(&self, id: NodeId) -> NodeId {
        RbTree::left(self, id)
    }

    fn right(&self, id: NodeId) -> NodeId {
        RbTree::right(self, id)
    }
}

impl OrderedKeyTree for RbTree {
    fn insert(&mut self, key: i64) {
        RbTree::insert(self, key)
    }

    fn search(&mut self, key: i64) -> u64 {
        RbTree::search(self, key)
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
        RbTree::len(self)
    }

    fn height(&self) -> usize {
        RbTree::height(self)
    }
}
