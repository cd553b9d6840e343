//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng as _};

/// Default number of grid rows.
pub(crate) const DEFAULT_ROWS: usize = 6;

/// Default number of grid columns.
pub(crate) const DEFAULT_COLS: usize = 6;

/// Default delay between revealed path cells, in milliseconds.
pub(crate) const DEFAULT_STEP_MS: u64 = 1000;

/// Runtime configuration parsed from the command line.
///
/// Grid dimensions are passed through to generation unchecked; undersized grids are reported as
/// generation errors before any search runs.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(
    name = "labyrinth-dfs",
    version,
    about = "Generates a random grid maze, solves it by depth-first search and animates the path"
)]
pub struct Config {
    /// Number of rows in the generated grid.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns in the generated grid.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Delay between two revealed path cells, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_STEP_MS)]
    pub step_ms: u64,

    /// Seed for the random generator; a fresh seed is drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the diagnostics and the solved grid instead of opening the terminal interface.
    #[arg(long)]
    pub headless: bool,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            step_ms: DEFAULT_STEP_MS,
            seed: None,
            headless: false,
            log_file: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Delay between two revealed path cells.
    pub const fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    /// Builds the random generator for maze generation, seeded if a seed was given.
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}
