//! # rbmap
//!
//! An ordered integer map backed by a red-black tree that counts key
//! comparisons.
//!
//! The crate was built to measure how much lookup work a self-balancing
//! tree saves over a naive one: every insertion descent bumps a tree-wide
//! comparison counter, every search reports its own comparison count, and
//! hit/miss tallies accumulate across searches. A plain unbalanced BST with
//! the identical interface ([`BstTree`]) serves as the baseline.
//!
//! ## Example
//!
//! ```rust
//! use rbmap::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [40, 54, 34, 42, 17] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.search(40), 1); // the root matches on one comparison
//! assert_eq!(tree.search(99), 2); // probed 40 then 54, then fell off
//! assert_eq!(tree.hits(), 1);
//! assert_eq!(tree.misses(), 1);
//!
//! let keys: Vec<i64> = tree.iter().map(|(key, _, _)| key).collect();
//! assert_eq!(keys, vec![17, 34, 40, 42, 54]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arena;
pub mod bst;
pub mod input;
pub mod rbtree;
pub mod render;

pub use arena::{Color, InorderIter, NodeId};
pub use bst::BstTree;
pub use input::InputError;
pub use rbtree::RbTree;

/// Common surface of the two tree variants.
///
/// [`RbTree`] and [`BstTree`] share the same insertion/search contract and
/// counters; this trait lets drivers switch between them at runtime.
pub trait OrderedKeyTree {
    /// Insert a key; duplicates are routed to the right subtree.
    fn insert(&mut self, key: i64);
    /// Look up a key, returning the comparisons made by this call.
    fn search(&mut self, key: i64) -> u64;
    /// Total key comparisons made by all insertions.
    fn comparison_count(&self) -> u64;
    /// Searches that found their key.
    fn hits(&self) -> u64;
    /// Searches that did not find their key.
    fn misses(&self) -> u64;
    /// Number of stored keys.
    fn len(&self) -> usize;
    /// Whether no keys are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Nodes on the longest root-to-leaf path.
    fn height(&self) -> usize;
}

#[cfg(test)]
mod proptests;
