// The following doc comment is kept in sync with the README.md file. Please
// run the `cargo sync-readme` command after modifying the comment contents.
//! This crate finds the largest hexagon that can be built from a collection
//! of colored beads, under the condition that every concentric ring of the
//! hexagon is made of beads of a single color.
//!
//! A hexagon with $L$ layers consists of a central bead (layer $0$) surrounded
//! by rings of $6k$ beads at layers $k=1,2,\dots,L-1$, for a total of
//! $1+3L(L-1)$ beads:
//!
//! ```text
//!     r r r
//!    r g g r
//!   r g b g r
//!    r g g r
//!     r r r
//! ```
//!
//! Suppose we're given $m$ _pools_ of beads, where pool $j$ holds $c_j\ge0$
//! beads of color $\ell_j$. The task is to choose a pool $p_k$ for every
//! layer $k<L$ so that no pool supplies more beads than it holds, that is,
//! $\sum_{k:\\,p_k=j}|\text{ring}_k|\le c_j$ for all $j$, and so that $L$ is
//! as large as possible. The objective is the number of rings, not the number
//! of beads used. A pool may fill several rings, as long as it has enough
//! beads for all of them.
//!
//! No polynomial-time method is known for this problem, so the [`Solver`]
//! carries out an exhaustive depth-first search over the pool assigned to each
//! successive ring, taking beads from a pool when it fills a ring and putting
//! them back when it backtracks. Its output is the first arrangement of maximum
//! length in the order of the search, which tries the pools in inventory order
//! at every layer. A simple counting bound, which ignores colors altogether,
//! prunes the branches that cannot lead to a longer arrangement.
//!
//! The following structures are the most important pieces of the crate:
//! - [`Inventory`] holds the pools of beads in the order in which they
//!   should be tried.
//! - [`Solver`] finds an arrangement with the maximum number of rings, and
//!   optionally reports its progress to an observer.
//! - [`Report`] lists the color and size of every ring in an [`Arrangement`],
//!   together with the number of beads left over.
//!
//! For the common case, the [`hexagonise`] function wraps these steps:
//!
//! ```
//! let rings = hex_rings::hexagonise(&[("black", 6), ("pink", 7), ("orange", 12)]);
//! assert_eq!(rings, ["black", "pink", "orange"]);
//! ```
//!
//! The `demos` directory contains a program that prints the best arrangement
//! of a larger bead collection, and the `hexagonise` binary reads an inventory
//! from the command line or from a file.

mod error;
mod indices;
mod inventory;
mod report;
pub mod rings;
mod solver;

pub use error::{Error, Result};
pub use indices::{LayerIndex, TypeIndex};
pub use inventory::{Inventory, ItemType};
pub use report::{Layer, Report};
pub use solver::{hexagonise, Arrangement, Progress, Solver, Statistics, DEFAULT_PROGRESS_DEPTH};
