//! Command-line front end that arranges a collection of beads into the largest
//! possible hexagon of single-colored rings.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use hex_rings::{Inventory, ItemType, Progress, Report, Solver, DEFAULT_PROGRESS_DEPTH};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use tracing::{debug, info};

/// The bead collection used when no pools are given on the command line.
const DEFAULT_INVENTORY: [(&str, usize); 5] = [
    ("magenta", 252),
    ("black", 126),
    ("orange", 84),
    ("brown", 78),
    ("pink", 7),
];

/// Arrange colored beads into concentric hexagonal rings of a single color each
#[derive(Parser, Debug)]
#[command(name = "hexagonise")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Pools of beads, given as `color=count`
    #[arg(value_name = "COLOR=COUNT")]
    types: Vec<ItemType<String>>,

    /// Read additional pools from a file with one `color count` entry per line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Try the pools with the fewest beads first
    #[arg(short, long)]
    sort: bool,

    /// Explore every branch, even those that cannot lead to more rings
    #[arg(long)]
    no_bound: bool,

    /// Number of innermost layers whose choices are logged
    #[arg(long, default_value_t = DEFAULT_PROGRESS_DEPTH)]
    progress_depth: usize,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Installs a `tracing` subscriber; `RUST_LOG` takes precedence over
    /// the verbosity flags.
    fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Collects the pools given on the command line and in the inventory
    /// file, falling back to [`DEFAULT_INVENTORY`] if there are none.
    fn inventory(&self) -> Result<Inventory<String>> {
        let mut inventory = Inventory::new();
        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let from_file: Inventory<String> = text
                .parse()
                .with_context(|| format!("failed to parse {}", path.display()))?;
            for pool in &from_file {
                inventory.push(pool.label().clone(), pool.remaining());
            }
        }
        for pool in &self.types {
            inventory.push(pool.label().clone(), pool.remaining());
        }
        if inventory.is_empty() {
            ensure!(self.file.is_none(), "the inventory file lists no beads");
            for (label, count) in DEFAULT_INVENTORY {
                inventory.push(label.to_owned(), count);
            }
        }
        Ok(inventory)
    }
}

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut inventory = cli.inventory()?;
    if cli.sort {
        inventory.sort_by_count();
    }

    println!("You have {} types of bead, these are they:", inventory.len());
    for (ix, pool) in inventory.iter().enumerate() {
        println!("{ix}: {} x {}", pool.label(), pool.remaining());
    }

    let timer = Instant::now();
    let arrangement = Solver::new(&mut inventory)
        .bound_pruning(!cli.no_bound)
        .progress_depth(cli.progress_depth)
        .solve_with(|event| {
            match event {
                Progress::Branch {
                    layer,
                    candidate,
                    candidates,
                } if layer.get() == 0 => {
                    let done = candidate.get() as f64 / candidates as f64;
                    info!(
                        "processing {:.1}% - {:.3}s",
                        done * 100.0,
                        timer.elapsed().as_secs_f64()
                    );
                }
                Progress::Branch {
                    layer, candidate, ..
                } => debug!(layer = layer.get(), candidate = candidate.get(), "branch"),
                Progress::Improved { best } => debug!(layers = best.len(), "new best arrangement"),
            }
            ControlFlow::Continue(())
        });
    info!(
        "finished calculation: {:.3}s",
        timer.elapsed().as_secs_f64()
    );
    debug!(statistics = ?arrangement.statistics(), "search statistics");

    println!();
    print!("{}", Report::new(&inventory, &arrangement));
    println!("Total elapsed {:.3}s", timer.elapsed().as_secs_f64());
    Ok(())
}
