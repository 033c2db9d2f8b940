use crate::rings;

/// The position of an item type in an [`Inventory`].
///
/// Two item types with the same label occupy different positions, so an
/// arrangement expressed as a list of type indices keeps them apart.
///
/// [`Inventory`]: crate::Inventory
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
#[repr(transparent)]
pub struct TypeIndex(usize);

impl TypeIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the position of the next item type in the inventory, if any.
    ///
    /// The result is meaningful only if `self` is less than [`usize::MAX`].
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0 + 1)
    }
}

/// The number of a concentric ring, counting outwards from the single
/// central bead at layer $0$.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
#[repr(transparent)]
pub struct LayerIndex(usize);

impl LayerIndex {
    /// The central layer, which holds exactly one bead.
    pub const CENTER: Self = Self(0);

    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the number of beads needed to fill this ring.
    ///
    /// See [`rings::ring_size`] for details.
    #[must_use]
    pub const fn ring_size(self) -> usize {
        rings::ring_size(self.0)
    }

    /// Returns the index of the ring that surrounds this one.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the index of the ring enclosed by this one.
    ///
    /// The result is meaningful only if `self` is not [`Self::CENTER`].
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self(self.0 - 1)
    }
}
