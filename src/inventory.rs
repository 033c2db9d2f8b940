use crate::error::{Error, Result};
use crate::indices::TypeIndex;
use std::str::FromStr;

/// A pool of interchangeable beads of one color.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ItemType<L> {
    /// The color of the beads, or any other label that identifies the pool.
    label: L,
    /// The number of beads that have not been placed in a ring.
    remaining: usize,
}

impl<L> ItemType<L> {
    /// Creates a pool of `remaining` beads with the given label.
    pub fn new(label: L, remaining: usize) -> Self {
        Self { label, remaining }
    }

    /// Returns the label of the beads in this pool.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Returns the number of beads left in this pool.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// An ordered collection of [bead pools](`ItemType`).
///
/// The order of the pools matters only when several arrangements have the
/// same number of rings: the solver tries the pools from first to last at
/// every layer, and keeps the first longest arrangement it finds.
///
/// Labels need not be unique. Two pools with the same label are treated as
/// independent sources of beads, and both may appear in an arrangement.
///
/// # Invariant
///
/// While a [`Solver`] holds the inventory, the counts are temporarily lowered
/// by the rings of the current partial arrangement. The solver restores them
/// before it returns.
///
/// [`Solver`]: crate::Solver
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Inventory<L> {
    types: Vec<ItemType<L>>,
}

impl<L> Inventory<L> {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Appends a pool of `count` beads with the given label, and returns its
    /// position in the inventory.
    pub fn push(&mut self, label: L, count: usize) -> TypeIndex {
        self.types.push(ItemType::new(label, count));
        TypeIndex::new(self.types.len() - 1)
    }

    /// Returns the number of pools in the inventory.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if the inventory has no pools.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the total number of beads left in all pools.
    pub fn total(&self) -> usize {
        self.types.iter().map(ItemType::remaining).sum()
    }

    /// Returns the pool at the given position, if any.
    pub fn get(&self, ix: TypeIndex) -> Option<&ItemType<L>> {
        self.types.get(ix.get())
    }

    /// Returns an iterator over the pools, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ItemType<L>> {
        self.types.iter()
    }

    /// Sorts the pools by increasing bead count. Pools with the same count
    /// keep their relative order.
    ///
    /// Trying the scarcest colors first tends to find a long arrangement
    /// early, which lets bound pruning cut more of the search tree. The
    /// length of the optimal arrangement does not depend on the order.
    pub fn sort_by_count(&mut self) {
        self.types.sort_by_key(ItemType::remaining);
    }

    /// Takes `n` beads from the pool at position `ix`.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds. In debug mode it
    /// also panics if the pool holds fewer than `n` beads.
    pub(crate) fn commit(&mut self, ix: TypeIndex, n: usize) {
        let pool = &mut self.types[ix.get()];
        debug_assert!(
            pool.remaining >= n,
            "pool at index {ix:?} cannot supply {n} beads"
        );
        pool.remaining -= n;
    }

    /// Returns `n` beads to the pool at position `ix`, undoing a previous
    /// [`commit`](Self::commit).
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn undo(&mut self, ix: TypeIndex, n: usize) {
        self.types[ix.get()].remaining += n;
    }

    /// Returns the remaining count of the pool at position `ix`.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn remaining(&self, ix: TypeIndex) -> usize {
        self.types[ix.get()].remaining
    }

    /// Returns the label of the pool at position `ix`.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn label(&self, ix: TypeIndex) -> &L {
        &self.types[ix.get()].label
    }
}

impl<L> Default for Inventory<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> FromIterator<(L, usize)> for Inventory<L> {
    fn from_iter<T: IntoIterator<Item = (L, usize)>>(iter: T) -> Self {
        Self {
            types: iter
                .into_iter()
                .map(|(label, count)| ItemType::new(label, count))
                .collect(),
        }
    }
}

impl<'a, L> IntoIterator for &'a Inventory<L> {
    type Item = &'a ItemType<L>;
    type IntoIter = std::slice::Iter<'a, ItemType<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Splits a single inventory entry into its label and count.
///
/// The entry is either `label=count`, `label:count`, or `label count`; in
/// the last form the count is the final whitespace-separated token, so the
/// label may itself contain spaces.
fn parse_entry(entry: &str, line: usize) -> Result<ItemType<String>> {
    let (label, count) = if let Some(pair) = entry.split_once(['=', ':']) {
        pair
    } else if let Some(pair) = entry.rsplit_once(char::is_whitespace) {
        pair
    } else if entry.parse::<i128>().is_ok() {
        return Err(Error::EmptyLabel { line });
    } else {
        return Err(Error::MissingCount { line });
    };
    let (label, count) = (label.trim(), count.trim());
    if label.is_empty() {
        return Err(Error::EmptyLabel { line });
    }
    if count.is_empty() {
        return Err(Error::MissingCount { line });
    }
    let remaining = count.parse().map_err(|source| Error::InvalidCount {
        line,
        count: count.to_owned(),
        source,
    })?;
    Ok(ItemType::new(label.to_owned(), remaining))
}

impl FromStr for ItemType<String> {
    type Err = Error;

    /// Parses a `label=count` pair, such as `magenta=252`.
    fn from_str(s: &str) -> Result<Self> {
        parse_entry(s.trim(), 1)
    }
}

impl FromStr for Inventory<String> {
    type Err = Error;

    /// Parses an inventory with one pool per line. Blank lines and text
    /// after a `#` are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut types = Vec::new();
        for (ix, line) in s.lines().enumerate() {
            let entry = line.split('#').next().unwrap_or_default().trim();
            if !entry.is_empty() {
                types.push(parse_entry(entry, ix + 1)?);
            }
        }
        Ok(Self { types })
    }
}
