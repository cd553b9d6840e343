//! Depth-first path search.
//!
//! This module contains the stack-based depth-first search that looks for a route from the start
//! cell to the end cell, together with the report it hands to the presentation layer and console
//! diagnostics.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    iter,
};

use tracing::{info, trace};

use crate::{
    grid::{Cell, Grid},
    neighbors::neighbors,
};

/// Result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A route was found.
    ///
    /// The path starts at the first step taken after the start cell and ends with the end cell. It
    /// is empty when the start already is the end.
    Found(Vec<Cell>),
    /// The end cannot be reached from the start.
    NotFound,
}

impl Outcome {
    /// Returns the path if one was found.
    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    /// Returns whether a path was found.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Exploration counters kept for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of distinct cells expanded.
    pub nodes_explored: usize,
    /// Number of exploration steps, one per expanded cell.
    pub elapsed_steps: usize,
}

/// Everything a search produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Whether and how the end was reached.
    pub outcome: Outcome,
    /// Exploration counters.
    pub stats: Stats,
    /// Expanded cells in the order they were expanded.
    pub explored: Vec<Cell>,
}

impl Report {
    /// Returns the path if one was found.
    pub fn path(&self) -> Option<&[Cell]> {
        self.outcome.path()
    }
}

/// Searches for a path from `start` to `end` by depth-first search.
///
/// The work list is a stack seeded with `start`. Every popped cell is compared against `end`
/// before the visited check, so stale entries for the end still terminate the search. Unvisited
/// cells are expanded by pushing their walkable neighbors in [`OFFSETS`] order, which makes the
/// down-right neighbor the first one explored. The grid only provides the bounds; the walls come
/// from `barriers`.
///
/// The returned path is the first one found under this order and is not necessarily the shortest.
///
/// [`OFFSETS`]: crate::neighbors::OFFSETS
pub fn search(grid: &Grid, start: Cell, end: Cell, barriers: &BTreeSet<Cell>) -> Report {
    let bounds = grid.bounds();
    let mut stack: Vec<(Cell, Option<Cell>)> = vec![(start, None)];
    let mut visited = HashSet::new();
    let mut came_from = HashMap::new();
    let mut explored = Vec::new();
    let mut stats = Stats::default();

    while let Some((current, parent)) = stack.pop() {
        if current == end {
            let path = reconstruct_path(start, end, parent, &came_from);
            info!(
                path_len = path.len(),
                nodes_explored = stats.nodes_explored,
                "path found"
            );

            return Report {
                outcome: Outcome::Found(path),
                stats,
                explored,
            };
        }

        if !visited.insert(current) {
            continue;
        }
        if let Some(parent) = parent {
            let _ = came_from.insert(current, parent);
        }
        explored.push(current);
        stats.nodes_explored += 1;
        stats.elapsed_steps += 1;
        trace!(cell = %current, depth = stack.len(), "expanding cell");

        stack.extend(
            neighbors(current, barriers, bounds)
                .into_iter()
                .map(|neighbor| (neighbor, Some(current))),
        );
    }

    info!(nodes_explored = stats.nodes_explored, "no path found");

    Report {
        outcome: Outcome::NotFound,
        stats,
        explored,
    }
}

/// Searches the grid's own start, end and barriers.
pub fn solve(grid: &Grid) -> Report {
    search(grid, grid.start(), grid.end(), grid.barriers())
}

/// Rebuilds the path that reached `end` through `parent`.
///
/// Every expanded cell except the start has an entry in `came_from` pointing at the cell it was
/// first expanded from, so following the links from `parent` always arrives at the start.
fn reconstruct_path(
    start: Cell,
    end: Cell,
    parent: Option<Cell>,
    came_from: &HashMap<Cell, Cell>,
) -> Vec<Cell> {
    let Some(parent) = parent else {
        return Vec::new();
    };

    let mut path: Vec<Cell> = iter::successors(Some(parent), |cell| came_from.get(cell).copied())
        .take_while(|cell| *cell != start)
        .collect();
    path.reverse();
    path.push(end);

    path
}
