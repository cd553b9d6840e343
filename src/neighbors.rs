//! Neighbor resolution over 8-directional adjacency.

use std::collections::BTreeSet;

use crate::grid::{Bounds, Cell};

/// Column and row offsets of the eight surrounding cells.
///
/// The order is fixed: up-left, up, up-right, left, right, down-left, down, down-right. The search
/// pushes neighbors in this order, so the last entry is the first one it explores.
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Returns the walkable neighbors of a cell.
///
/// A neighbor is kept if it lies within `bounds` and is not one of `barriers`. The result follows
/// the order of [`OFFSETS`].
pub fn neighbors(cell: Cell, barriers: &BTreeSet<Cell>, bounds: Bounds) -> Vec<Cell> {
    OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            let candidate = Cell::new(
                cell.col.checked_add_signed(dx)?,
                cell.row.checked_add_signed(dy)?,
            );

            (bounds.contains(candidate) && !barriers.contains(&candidate)).then_some(candidate)
        })
        .collect()
}
