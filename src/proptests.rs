use crate::arena::{Color, NodeId};
use crate::{BstTree, RbTree};

use proptest::prelude::*;

/// Check every red-black invariant plus the ordering invariant.
fn validate_rb(tree: &RbTree) {
    if tree.root().is_nil() {
        assert_eq!(tree.len(), 0);
        return;
    }

    assert_eq!(
        tree.color(tree.root()),
        Color::Black,
        "root must be black"
    );

    // No red node may have a red child, and every root-to-sentinel path
    // must carry the same number of black nodes.
    fn walk(tree: &RbTree, id: NodeId) -> usize {
        if id.is_nil() {
            // The sentinel counts as one black node below every leaf.
            return 1;
        }

        let left = tree.left(id);
        let right = tree.right(id);

        if tree.color(id) == Color::Red {
            assert_eq!(
                tree.color(left),
                Color::Black,
                "red node {} has a red left child",
                tree.key(id)
            );
            assert_eq!(
                tree.color(right),
                Color::Black,
                "red node {} has a red right child",
                tree.key(id)
            );
        }

        let lh = walk(tree, left);
        let rh = walk(tree, right);
        assert_eq!(
            lh,
            rh,
            "unequal black-heights below key {}",
            tree.key(id)
        );
        lh + usize::from(tree.color(id) == Color::Black)
    }
    walk(tree, tree.root());

    let keys: Vec<i64> = tree.iter().map(|(k, _, _)| k).collect();
    assert!(
        keys.windows(2).all(|w| w[0] <= w[1]),
        "in-order sequence must be non-decreasing"
    );
    assert_eq!(keys.len(), tree.len());
}

#[derive(Clone, Debug)]
enum Op {
    Insert(i64),
    Search(i64),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // A small key domain forces duplicates and repeat searches.
    let key = -200i64..200;
    let op = prop_oneof![
        3 => key.clone().prop_map(Op::Insert),
        1 => key.prop_map(Op::Search),
    ];
    prop::collection::vec(op, 0..=400)
}

fn sorted(mut keys: Vec<i64>) -> Vec<i64> {
    keys.sort_unstable();
    keys
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_rb_invariants_and_model(ops in ops_strategy()) {
        let mut tree = RbTree::new();
        let mut model: Vec<i64> = Vec::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                Op::Insert(key) => {
                    tree.insert(key);
                    model.push(key);
                    validate_rb(&tree);
                }
                Op::Search(key) => {
                    let count_before = tree.comparison_count();
                    let comparisons = tree.search(key);
                    if model.contains(&key) {
                        expected_hits += 1;
                        prop_assert!(comparisons >= 1);
                    } else {
                        expected_misses += 1;
                        prop_assert!(comparisons as usize <= tree.height());
                    }
                    // Searching never touches the insertion counter.
                    prop_assert_eq!(tree.comparison_count(), count_before);
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert_eq!(tree.hits(), expected_hits);
        prop_assert_eq!(tree.misses(), expected_misses);

        let inorder: Vec<i64> = tree.iter().map(|(k, _, _)| k).collect();
        prop_assert_eq!(inorder, sorted(model));
    }

    #[test]
    fn prop_bst_matches_model(ops in ops_strategy()) {
        let mut tree = BstTree::new();
        let mut model: Vec<i64> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    tree.insert(key);
                    model.push(key);
                }
                Op::Search(key) => {
                    let hits_before = tree.hits();
                    tree.search(key);
                    prop_assert_eq!(
                        tree.hits() - hits_before,
                        u64::from(model.contains(&key))
                    );
                }
            }
        }

        prop_assert!(tree.height() <= tree.len());
        let inorder: Vec<i64> = tree.iter().map(|(k, _, _)| k).collect();
        prop_assert_eq!(inorder, sorted(model));
    }

    #[test]
    fn prop_variants_agree_on_search_outcomes(ops in ops_strategy()) {
        let mut rb = RbTree::new();
        let mut bst = BstTree::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    rb.insert(key);
                    bst.insert(key);
                }
                Op::Search(key) => {
                    rb.search(key);
                    bst.search(key);
                }
            }
        }

        // Same keys, same queries: outcomes (not costs) must agree.
        prop_assert_eq!(rb.hits(), bst.hits());
        prop_assert_eq!(rb.misses(), bst.misses());
        prop_assert_eq!(rb.len(), bst.len());

        let rb_keys: Vec<i64> = rb.iter().map(|(k, _, _)| k).collect();
        let bst_keys: Vec<i64> = bst.iter().map(|(k, _, _)| k).collect();
        prop_assert_eq!(rb_keys, bst_keys);
    }

    #[test]
    fn prop_height_stays_logarithmic(keys in prop::collection::vec(any::<i64>(), 1..=1024)) {
        let mut tree = RbTree::new();
        for &key in &keys {
            tree.insert(key);
        }

        let n = keys.len() as f64;
        let bound = (2.0 * (n + 1.0).log2()).floor() as usize + 1;
        prop_assert!(
            tree.height() <= bound,
            "height {} exceeds bound {} for {} keys",
            tree.height(),
            bound,
            keys.len()
        );
    }
}
