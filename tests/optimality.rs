//! Property-based tests for the hexagon solver.
//!
//! These tests generate small random inventories and verify that:
//! 1. The arrangement respects the bead counts of every pool.
//! 2. It agrees exactly, ties included, with a plain recursive search that
//!    tries every pool for every ring.
//! 3. Bound pruning and the order of the pools never change its length.
//! 4. The inventory is left as it was found.

use hex_rings::{hexagonise, rings, Inventory, Solver};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// -- Reference Search --

/// Visits every assignment of pools to rings, keeping a copy of the first
/// longest one in `best`.
fn reference(counts: &mut [usize], attempt: &mut Vec<usize>, best: &mut Vec<usize>) {
    let demand = rings::ring_size(attempt.len());
    for ix in 0..counts.len() {
        if counts[ix] >= demand {
            counts[ix] -= demand;
            attempt.push(ix);
            if attempt.len() > best.len() {
                best.clone_from(attempt);
            }
            reference(counts, attempt, best);
            attempt.pop();
            counts[ix] += demand;
        }
    }
}

fn reference_solution(counts: &[usize]) -> Vec<usize> {
    let mut counts = counts.to_vec();
    let mut best = Vec::new();
    reference(&mut counts, &mut Vec::new(), &mut best);
    best
}

fn inventory_of(counts: &[usize]) -> Inventory<usize> {
    counts.iter().copied().enumerate().collect()
}

fn solve(counts: &[usize], bound_pruning: bool) -> Vec<usize> {
    let mut inventory = inventory_of(counts);
    let arrangement = Solver::new(&mut inventory)
        .bound_pruning(bound_pruning)
        .solve();
    arrangement.types().iter().map(|ix| ix.get()).collect()
}

// -- Strategies --

/// Generate up to five pools of at most 30 beads each.
fn counts_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..=30, 0..=5)
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// No pool supplies more beads than it holds.
    #[test]
    fn prop_arrangement_is_feasible(counts in counts_strategy()) {
        let types = solve(&counts, true);
        let mut used = vec![0; counts.len()];
        for (layer, &ix) in types.iter().enumerate() {
            used[ix] += rings::ring_size(layer);
        }
        for (ix, (&used, &count)) in used.iter().zip(&counts).enumerate() {
            prop_assert!(used <= count, "pool {} uses {} of {} beads", ix, used, count);
        }
        let total: usize = counts.iter().sum();
        prop_assert!(rings::beads_within(types.len()) <= total);
    }

    /// The explicit-stack search finds the same arrangement as the recursive
    /// one, with and without bound pruning.
    #[test]
    fn prop_matches_recursive_search(counts in counts_strategy()) {
        let expected = reference_solution(&counts);
        prop_assert_eq!(solve(&counts, false), expected.clone());
        prop_assert_eq!(solve(&counts, true), expected);
    }

    /// Reordering the pools changes at most which arrangement is found.
    #[test]
    fn prop_length_is_independent_of_order(counts in counts_strategy()) {
        let mut inventory = inventory_of(&counts);
        let length = Solver::new(&mut inventory).solve().len();
        inventory.sort_by_count();
        let sorted_length = Solver::new(&mut inventory).solve().len();
        prop_assert_eq!(length, sorted_length);

        let mut reversed: Vec<_> = counts.clone();
        reversed.reverse();
        prop_assert_eq!(solve(&reversed, true).len(), length);
    }

    /// Solving leaves every count unchanged, and solving again gives the
    /// same result.
    #[test]
    fn prop_restores_inventory(counts in counts_strategy()) {
        let mut inventory = inventory_of(&counts);
        let before = inventory.clone();
        let first = Solver::new(&mut inventory).solve();
        prop_assert_eq!(&inventory, &before);
        let second = Solver::new(&mut inventory).solve();
        prop_assert_eq!(first.types(), second.types());
        prop_assert_eq!(&inventory, &before);
    }

    /// A single pool fills exactly the rings of the largest centered
    /// hexagonal number it can cover.
    #[test]
    fn prop_single_pool(count in 0usize..2000) {
        let layers = hexagonise(&[("only", count)]);
        prop_assert_eq!(layers.len(), rings::max_layers(count));
    }
}

// -- Regression Tests --

#[test]
fn largest_pool_first_is_not_always_best() {
    // Ring 2 needs 12 beads, which only "a" can supply if it is not used for
    // the center or ring 1.
    let layers = hexagonise(&[("a", 12), ("b", 6), ("c", 1)]);
    assert_eq!(layers, ["c", "b", "a"]);
}

#[test]
fn built_in_collection_fills_fourteen_layers() {
    // 547 beads are exactly enough for 14 layers, so every bead is used.
    let types = [
        ("magenta", 252),
        ("black", 126),
        ("orange", 84),
        ("brown", 78),
        ("pink", 7),
    ];
    let mut inventory: Inventory<_> = types.into_iter().collect();
    let arrangement = Solver::new(&mut inventory).solve();
    assert_eq!(
        arrangement.labels(&inventory),
        [
            &"pink", &"pink", &"magenta", &"magenta", &"magenta", &"magenta", &"orange",
            &"magenta", &"orange", &"magenta", &"black", &"black", &"magenta", &"brown",
        ]
    );
    assert_eq!(arrangement.beads_used(), 547);
    assert!(arrangement.statistics().exhausted);
    assert_eq!(inventory.total(), 547);
}
