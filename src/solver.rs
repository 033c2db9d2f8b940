use crate::indices::{LayerIndex, TypeIndex};
use crate::inventory::Inventory;
use crate::rings;
use smallvec::SmallVec;
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// The number of innermost layers for which [`Progress::Branch`] events are
/// reported by default.
pub const DEFAULT_PROGRESS_DEPTH: usize = 2;

/// An event reported by [`Solver::solve_with`] while the search runs.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Progress<'a> {
    /// A pool was chosen for one of the innermost layers; see
    /// [`Solver::progress_depth`].
    Branch {
        /// The layer being filled.
        layer: LayerIndex,
        /// The position of the pool that fills it.
        candidate: TypeIndex,
        /// The number of pools in the inventory.
        candidates: usize,
    },
    /// The search found an arrangement with more rings than any before.
    Improved {
        /// The pools of the new best arrangement, innermost ring first.
        best: &'a [TypeIndex],
    },
}

/// Counters collected during a search.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone)]
pub struct Statistics {
    /// The number of times a pool was assigned to a ring.
    pub commits: u64,
    /// The number of times the best arrangement grew.
    pub improvements: u64,
    /// The number of layers abandoned because no arrangement passing through
    /// them could beat the best one.
    pub pruned: u64,
    /// Whether the search explored the whole tree. This is `false` only if
    /// the observer passed to [`Solver::solve_with`] stopped it early.
    pub exhausted: bool,
}

/// The result of a search: one pool per ring, innermost ring first.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Arrangement {
    types: Vec<TypeIndex>,
    statistics: Statistics,
}

impl Arrangement {
    /// Returns the position in the inventory of the pool that fills each
    /// ring, starting with the central bead.
    pub fn types(&self) -> &[TypeIndex] {
        &self.types
    }

    /// Returns the number of rings in the arrangement.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if not even the central bead could be placed.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the total number of beads in the arrangement.
    pub fn beads_used(&self) -> usize {
        rings::beads_within(self.types.len())
    }

    /// Returns the counters collected while searching for this arrangement.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Returns the label of the pool that fills each ring, innermost first.
    ///
    /// # Panics
    ///
    /// This function panics if `inventory` has fewer pools than the one
    /// the arrangement was computed from.
    pub fn labels<'a, L>(&self, inventory: &'a Inventory<L>) -> Vec<&'a L> {
        self.types.iter().map(|&ix| inventory.label(ix)).collect()
    }
}

/// Finds an arrangement of beads into the largest possible number of
/// concentric hexagonal rings, where every ring has a single color.
///
/// The solver performs an exhaustive depth-first search. At layer $k$ it
/// tries, in inventory order, every pool that still holds at least
/// [`ring_size(k)`](rings::ring_size) beads; it takes those beads from the
/// pool, explores all arrangements that extend the current one, and then
/// puts the beads back before it moves on to the next pool. Whenever the
/// current arrangement has strictly more rings than the best one seen so
/// far, a copy of it becomes the new best. Ties are therefore resolved in
/// favor of the arrangement found first.
///
/// In the worst case the running time is exponential in the number of pools,
/// since every assignment of pools to rings may have to be examined. The
/// depth of the search, on the other hand, is at most $O(\sqrt{n})$ for $n$
/// beads because ring sizes grow linearly. The search is driven by an
/// explicit stack rather than by recursion.
///
/// # Example
///
/// ```
/// use hex_rings::{Inventory, Solver};
///
/// let mut inventory = Inventory::new();
/// inventory.push("red", 9);
/// inventory.push("green", 6);
/// inventory.push("blue", 1);
///
/// let arrangement = Solver::new(&mut inventory).solve();
/// // Three rings would need 1 + 6 + 12 = 19 beads, but there are only 16.
/// assert_eq!(arrangement.labels(&inventory), [&"red", &"red"]);
/// assert_eq!(arrangement.beads_used(), 7);
/// // The solver has put back all the beads it took.
/// assert_eq!(inventory.total(), 16);
/// ```
pub struct Solver<'i, L> {
    /// The pools of beads, whose counts are lowered by the rings of the
    /// current partial arrangement.
    inventory: &'i mut Inventory<L>,
    /// The number of beads not placed in the current partial arrangement.
    ///
    /// # Invariant
    ///
    /// `remaining` is the sum of the counts of the pools in `inventory`.
    remaining: usize,
    /// The pool chosen for each ring of the current partial arrangement,
    /// innermost first. This is the stack used for backtracking.
    attempt: SmallVec<[TypeIndex; 32]>,
    /// A copy of the longest partial arrangement found so far.
    best: Vec<TypeIndex>,
    /// Whether to abandon layers that cannot lead to a longer arrangement.
    bound_pruning: bool,
    /// The number of innermost layers that generate [`Progress::Branch`]
    /// events.
    progress_depth: usize,
    statistics: Statistics,
}

impl<'i, L> Solver<'i, L> {
    /// Creates a solver for the given pools of beads.
    ///
    /// The inventory is modified while the search runs, but it is restored
    /// to its initial state by the time [`Self::solve`] returns.
    pub fn new(inventory: &'i mut Inventory<L>) -> Self {
        let remaining = inventory.total();
        Self {
            inventory,
            remaining,
            attempt: SmallVec::new(),
            best: Vec::new(),
            bound_pruning: true,
            progress_depth: DEFAULT_PROGRESS_DEPTH,
            statistics: Statistics::default(),
        }
    }

    /// Enables or disables bound pruning, which is on by default.
    ///
    /// With pruning enabled, the solver abandons a layer as soon as the beads
    /// left over cannot fill enough further rings to beat the best
    /// arrangement, regardless of color. Such a layer can only lead to
    /// arrangements that are not strictly longer than the best one, so the
    /// result of the search is the same either way; only the running time
    /// differs.
    #[must_use]
    pub fn bound_pruning(mut self, enabled: bool) -> Self {
        self.bound_pruning = enabled;
        self
    }

    /// Sets the number of innermost layers whose choices are reported as
    /// [`Progress::Branch`] events. The default is [`DEFAULT_PROGRESS_DEPTH`].
    #[must_use]
    pub fn progress_depth(mut self, depth: usize) -> Self {
        self.progress_depth = depth;
        self
    }

    /// Searches for the longest arrangement of rings.
    pub fn solve(self) -> Arrangement {
        self.solve_with(|_| ControlFlow::Continue(()))
    }

    /// Searches for the longest arrangement of rings, calling a closure on
    /// every [progress event](`Progress`).
    ///
    /// The search continues until the closure returns [`ControlFlow::Break`]
    /// or the whole search tree has been explored, whichever occurs first.
    /// In the former case the result is the best arrangement found so far.
    pub fn solve_with<F>(mut self, mut observe: F) -> Arrangement
    where
        F: FnMut(Progress<'_>) -> ControlFlow<()>,
    {
        debug!(
            types = self.inventory.len(),
            beads = self.remaining,
            bound_pruning = self.bound_pruning,
            "searching for hexagonal arrangement"
        );
        // The first pool to consider for the ring at the current layer.
        let mut first = TypeIndex::new(0);
        let mut exhausted = true;
        'outer: loop {
            // Fill as many rings as possible, without backtracking.
            while let Some(ix) = self.choose_type(first) {
                let layer = self.layer();
                self.commit(ix);
                first = TypeIndex::new(0);
                if layer.get() < self.progress_depth {
                    let event = Progress::Branch {
                        layer,
                        candidate: ix,
                        candidates: self.inventory.len(),
                    };
                    if observe(event).is_break() {
                        exhausted = false;
                        break 'outer;
                    }
                }
                if self.update_best() && observe(Progress::Improved { best: &self.best }).is_break()
                {
                    exhausted = false;
                    break 'outer;
                }
            }
            // No pool can fill the next ring; try the next pool for the
            // outermost ring, or terminate if all choices have been explored.
            if let Some(ix) = self.undo() {
                first = ix.increment();
            } else {
                break;
            }
        }
        // Put back the beads of an interrupted search.
        while self.undo().is_some() {}
        debug_assert_eq!(self.remaining, self.inventory.total());

        self.statistics.exhausted = exhausted;
        debug!(
            layers = self.best.len(),
            commits = self.statistics.commits,
            improvements = self.statistics.improvements,
            pruned = self.statistics.pruned,
            exhausted,
            "search finished"
        );
        Arrangement {
            types: self.best,
            statistics: self.statistics,
        }
    }

    /// Returns the layer of the next ring to be filled.
    fn layer(&self) -> LayerIndex {
        LayerIndex::new(self.attempt.len())
    }

    /// Finds the first pool at or after position `first` that can fill the
    /// next ring.
    ///
    /// Returns `None` if there is no such pool, if the beads left over do not
    /// suffice for the ring, or if bound pruning shows that no arrangement
    /// extending the current one can beat the best arrangement.
    fn choose_type(&mut self, first: TypeIndex) -> Option<TypeIndex> {
        let layer = self.layer();
        let demand = layer.ring_size();
        if demand > self.remaining {
            return None;
        }
        if self.bound_pruning
            && layer.get() + rings::layers_from(layer.get(), self.remaining) <= self.best.len()
        {
            self.statistics.pruned += 1;
            return None;
        }
        (first.get()..self.inventory.len())
            .map(TypeIndex::new)
            .find(|&ix| self.inventory.remaining(ix) >= demand)
    }

    /// Fills the next ring with beads from the pool at position `ix`.
    fn commit(&mut self, ix: TypeIndex) {
        let demand = self.layer().ring_size();
        self.inventory.commit(ix, demand);
        self.remaining -= demand;
        self.attempt.push(ix);
        self.statistics.commits += 1;
    }

    /// Empties the outermost ring of the current partial arrangement, and
    /// returns the position of the pool that filled it. Returns `None` if
    /// the partial arrangement is empty.
    fn undo(&mut self) -> Option<TypeIndex> {
        let ix = self.attempt.pop()?;
        let demand = self.layer().ring_size();
        self.inventory.undo(ix, demand);
        self.remaining += demand;
        Some(ix)
    }

    /// Replaces the best arrangement with a copy of the current one if the
    /// latter has strictly more rings. Returns whether it did so.
    fn update_best(&mut self) -> bool {
        if self.attempt.len() > self.best.len() {
            self.best.clear();
            self.best.extend_from_slice(&self.attempt);
            self.statistics.improvements += 1;
            trace!(layers = self.best.len(), "found longer arrangement");
            true
        } else {
            false
        }
    }
}

/// Arranges the given pools of beads into the largest possible number of
/// single-colored concentric hexagonal rings.
///
/// Returns the color of each ring, starting with the central bead; the result
/// is empty if no pool has any beads. See [`Solver`] for details.
///
/// # Example
///
/// ```
/// let rings = hex_rings::hexagonise(&[("blue", 1), ("green", 6), ("red", 12)]);
/// assert_eq!(rings, ["blue", "green", "red"]);
/// ```
pub fn hexagonise<L: Clone>(types: &[(L, usize)]) -> Vec<L> {
    let mut inventory: Inventory<L> = types.iter().cloned().collect();
    let arrangement = Solver::new(&mut inventory).solve();
    arrangement
        .labels(&inventory)
        .into_iter()
        .cloned()
        .collect()
}
