use crate::indices::LayerIndex;
use crate::inventory::Inventory;
use crate::solver::Arrangement;
use std::fmt;

/// One ring of a [`Report`].
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Layer<'a, L> {
    /// The layer of the ring, with the central bead at layer $0$.
    pub layer: LayerIndex,
    /// The color of the beads in the ring.
    pub label: &'a L,
    /// The number of beads in the ring.
    pub beads: usize,
}

/// A summary of an [`Arrangement`] that lists the color and size of every
/// ring, together with the number of beads that were left over.
///
/// The [`Display`](fmt::Display) implementation numbers the rings from 1:
///
/// ```
/// use hex_rings::{Inventory, Report, Solver};
///
/// let mut inventory: Inventory<_> = [("blue", 1), ("green", 8)].into_iter().collect();
/// let arrangement = Solver::new(&mut inventory).solve();
/// let report = Report::new(&inventory, &arrangement);
/// assert_eq!(
///     report.to_string(),
///     "Layer 1 - blue, 1\n\
///      Layer 2 - green, 6\n\
///      \n\
///      You started with 9 beads\n\
///      You can use 7 beads\n\
///      9 - 7 = 2 beads left over\n"
/// );
/// ```
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Report<'a, L> {
    layers: Vec<Layer<'a, L>>,
    available: usize,
    used: usize,
}

impl<'a, L> Report<'a, L> {
    /// Summarizes an arrangement of the beads in `inventory`.
    ///
    /// # Panics
    ///
    /// This function panics if `inventory` has fewer pools than the one
    /// the arrangement was computed from.
    pub fn new(inventory: &'a Inventory<L>, arrangement: &Arrangement) -> Self {
        let layers = arrangement
            .labels(inventory)
            .into_iter()
            .enumerate()
            .map(|(ix, label)| {
                let layer = LayerIndex::new(ix);
                Layer {
                    layer,
                    label,
                    beads: layer.ring_size(),
                }
            })
            .collect();
        Self {
            layers,
            available: inventory.total(),
            used: arrangement.beads_used(),
        }
    }

    /// Returns the rings of the arrangement, innermost first.
    pub fn layers(&self) -> &[Layer<'a, L>] {
        &self.layers
    }

    /// Returns the number of beads in the inventory.
    pub fn available(&self) -> usize {
        self.available
    }

    /// Returns the number of beads in the arrangement.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Returns the number of beads that do not fit in the arrangement.
    pub fn left_over(&self) -> usize {
        self.available - self.used
    }
}

impl<L: fmt::Display> fmt::Display for Report<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in &self.layers {
            writeln!(
                f,
                "Layer {} - {}, {}",
                layer.layer.get() + 1,
                layer.label,
                layer.beads
            )?;
        }
        writeln!(f)?;
        writeln!(f, "You started with {} beads", self.available)?;
        writeln!(f, "You can use {} beads", self.used)?;
        writeln!(
            f,
            "{} - {} = {} beads left over",
            self.available,
            self.used,
            self.left_over()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solver;

    #[test]
    fn summarizes_rings() {
        let mut inventory: Inventory<_> = [("r", 9), ("g", 6), ("b", 1)].into_iter().collect();
        let arrangement = Solver::new(&mut inventory).solve();
        let report = Report::new(&inventory, &arrangement);
        assert_eq!(
            report.layers(),
            [
                Layer {
                    layer: LayerIndex::CENTER,
                    label: &"r",
                    beads: 1,
                },
                Layer {
                    layer: LayerIndex::new(1),
                    label: &"r",
                    beads: 6,
                },
            ]
        );
        assert_eq!(report.available(), 16);
        assert_eq!(report.used(), 7);
        assert_eq!(report.left_over(), 9);
    }

    #[test]
    fn empty_arrangement() {
        let mut inventory: Inventory<String> = Inventory::new();
        let arrangement = Solver::new(&mut inventory).solve();
        let report = Report::new(&inventory, &arrangement);
        assert!(report.layers().is_empty());
        assert_eq!(
            report.to_string(),
            "\nYou started with 0 beads\nYou can use 0 beads\n0 - 0 = 0 beads left over\n"
        );
    }
}
