//! Arithmetic on hexagonal rings.
//!
//! A hexagon of beads is built up from a single central bead at layer $0$,
//! surrounded by rings of $6k$ beads at layer $k>0$. Consequently the first
//! $L\ge1$ layers hold $1+6(1+2+\dots+(L-1))=1+3L(L-1)$ beads, the
//! [centered hexagonal numbers] $1, 7, 19, 37, 61,\dots$
//!
//! [centered hexagonal numbers]: https://oeis.org/A003215

/// Returns the number of beads in the ring at the given layer: $1$ for the
/// center, and $6k$ for layer $k>0$.
#[must_use]
pub const fn ring_size(layer: usize) -> usize {
    if layer == 0 {
        1
    } else {
        6 * layer
    }
}

/// Returns the number of beads in a hexagon made of the first `layers` rings.
#[must_use]
pub const fn beads_within(layers: usize) -> usize {
    if layers == 0 {
        0
    } else {
        1 + 3 * layers * (layers - 1)
    }
}

/// Returns the largest number of rings that `count` beads of a single color
/// can fill, that is, the largest $L$ with `beads_within(L) <= count`.
#[must_use]
pub fn max_layers(count: usize) -> usize {
    layers_from(0, count)
}

/// Returns how many consecutive rings, starting with the ring at `layer`,
/// fit into `count` beads when colors are disregarded.
///
/// No arrangement that has already filled `layer` rings can grow by more
/// than this number of layers, so the solver uses it as an upper bound.
#[must_use]
pub fn layers_from(layer: usize, count: usize) -> usize {
    let mut left = count;
    let mut cur = layer;
    while ring_size(cur) <= left {
        left -= ring_size(cur);
        cur += 1;
    }
    cur - layer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_sizes() {
        let sizes: Vec<_> = (0..6).map(ring_size).collect();
        assert_eq!(sizes, [1, 6, 12, 18, 24, 30]);
    }

    #[test]
    fn centered_hexagonal_numbers() {
        let totals: Vec<_> = (0..7).map(beads_within).collect();
        assert_eq!(totals, [0, 1, 7, 19, 37, 61, 91]);
        // The closed formula agrees with the sum of the ring sizes.
        for layers in 0..50 {
            let sum: usize = (0..layers).map(ring_size).sum();
            assert_eq!(beads_within(layers), sum);
        }
    }

    #[test]
    fn max_layers_of_a_single_color() {
        assert_eq!(max_layers(0), 0);
        assert_eq!(max_layers(1), 1);
        assert_eq!(max_layers(6), 1);
        assert_eq!(max_layers(7), 2);
        assert_eq!(max_layers(18), 2);
        assert_eq!(max_layers(19), 3);
        assert_eq!(max_layers(546), 13);
        assert_eq!(max_layers(547), 14);
    }

    #[test]
    fn layers_from_an_outer_ring() {
        // Rings 2 and 3 need 12 and 18 beads.
        assert_eq!(layers_from(2, 11), 0);
        assert_eq!(layers_from(2, 12), 1);
        assert_eq!(layers_from(2, 29), 1);
        assert_eq!(layers_from(2, 30), 2);
        assert_eq!(layers_from(5, 0), 0);
    }
}
