//! This program arranges a box of magnetic beads of eight colors into the
//! largest hexagon whose concentric rings are each of a single color, and
//! draws the result.
//!
//! The $256$ beads could make a hexagon of at most $9$ layers, which holds
//! $1+3\cdot9\cdot8=217$ beads, provided the colors can be distributed
//! suitably among the rings. A layer of the drawing consists of the cells
//! at hexagonal distance $k$ from the center; in axial coordinates $(q,r)$
//! this distance is $\max(|q|,|r|,|q+r|)$.

use hex_rings::{rings, Inventory, Solver};

fn main() {
    let inventory: Inventory<_> = [
        ("pink", 5),
        ("orange", 4),
        ("black", 15),
        ("brown", 25),
        ("blue", 25 + 3),
        ("silver/turquoise", 6 * 5 + 1),
        ("yellow", 13 * 5 + 1),
        ("red", 16 * 5 + 2),
    ]
    .into_iter()
    .collect();
    let total = inventory.total();
    println!(
        "{total} beads, enough for at most {} layers",
        rings::max_layers(total)
    );

    // Trying the scarce colors first finds a long arrangement sooner.
    let mut sorted = inventory.clone();
    sorted.sort_by_count();
    let arrangement = Solver::new(&mut sorted).solve();
    let colors = arrangement.labels(&sorted);
    for (layer, color) in colors.iter().enumerate() {
        println!("layer {layer}: {color} x {}", rings::ring_size(layer));
    }

    // The order of the pools only affects which of the longest arrangements
    // is found, not its length.
    let mut unsorted = inventory;
    let check = Solver::new(&mut unsorted).solve();
    assert_eq!(check.len(), arrangement.len());

    // Draw the hexagon, one row of cells per line, with the initial letter
    // of each color.
    if colors.is_empty() {
        return;
    }
    let n = (colors.len() - 1) as isize;
    for r in -n..=n {
        let row: Vec<_> = (0.max(-r) - n..=n.min(n - r))
            .map(|q| {
                let layer = q.abs().max(r.abs()).max((q + r).abs()) as usize;
                colors[layer].chars().next().unwrap_or('?')
            })
            .map(String::from)
            .collect();
        println!("{}{}", " ".repeat(r.unsigned_abs()), row.join(" "));
    }
}
