//! Grid model module.
//!
//! This module contains the [`Grid`] type and the coordinate and tag types it is built from, along
//! with random maze generation and the plain-text grid dump used for console diagnostics.

use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter, Write as _},
};

use rand::{seq::SliceRandom as _, Rng};
use thiserror::Error;
use tracing::{debug, trace};

/// Number of barrier cells placed in every generated grid.
pub const BARRIER_COUNT: usize = 4;

/// Upper bound on random draws while placing barriers.
///
/// Dimensions are validated before sampling begins, so reaching this bound means the random source
/// kept landing on occupied cells. The bound turns that into an error instead of a hang.
pub const MAX_BARRIER_DRAWS: usize = 10_000;

/// Grid coordinate.
///
/// Cells are addressed by column first and row second, both 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Column index, growing to the right.
    pub col: usize,
    /// Row index, growing downwards.
    pub row: usize,
}

impl Cell {
    /// Creates a cell from its column and row.
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Returns whether both cells touch horizontally, vertically or diagonally.
    ///
    /// A cell is not adjacent to itself.
    pub const fn is_adjacent(self, other: Self) -> bool {
        let col_distance = self.col.abs_diff(other.col);
        let row_distance = self.row.abs_diff(other.row);

        col_distance <= 1 && row_distance <= 1 && col_distance + row_distance > 0
    }
}

impl Display for Cell {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.col, self.row)
    }
}

/// Dimensions of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Bounds {
    /// Creates bounds for a grid with the given number of rows and columns.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns whether the cell lies within `[0, cols) x [0, rows)`.
    pub const fn contains(self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// Total number of cells.
    pub const fn area(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Row-major index of an in-bounds cell.
    const fn index(self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }
}

/// Role of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    /// Walkable cell with no special role.
    Empty,
    /// Cell the search starts from.
    Start,
    /// Cell the search tries to reach.
    End,
    /// Impassable cell.
    Barrier,
}

impl Tag {
    /// Single-character representation used in the grid dump.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
        }
    }
}

/// Failures while building a grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested dimensions cannot hold a start column pair and an end column pair.
    #[error("a {rows}x{cols} grid is invalid: at least 1 row and 2 columns are required")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// The grid has fewer cells than the start, end and barriers need.
    #[error("a {rows}x{cols} grid is too small: {required} distinct cells are needed for the start, end and barriers")]
    GridTooSmall {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Minimum number of cells for a valid layout.
        required: usize,
    },
    /// Rejection sampling did not find enough free cells within [`MAX_BARRIER_DRAWS`] draws.
    #[error("gave up placing barriers after {attempts} random draws")]
    BarrierPlacementExhausted {
        /// Number of draws performed.
        attempts: usize,
    },
    /// A placement lies outside the grid.
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),
    /// A cell was given more than one role.
    #[error("cell {0} is assigned more than one role")]
    Overlap(Cell),
}

/// Rectangular maze with its placements.
///
/// A grid is immutable once built. Besides the per-cell tags it keeps the start, end and barrier
/// placements so the search and the renderers can use them without scanning the tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Dimensions of the grid.
    bounds: Bounds,
    /// Row-major cell tags.
    tags: Vec<Tag>,
    /// Start placement.
    start: Cell,
    /// End placement.
    end: Cell,
    /// Barrier placements.
    barriers: BTreeSet<Cell>,
}

impl Grid {
    /// Generates a random grid.
    ///
    /// The start is drawn from the first two columns and the end from the last two columns, never
    /// on the start itself. Then [`BARRIER_COUNT`] distinct barriers are drawn uniformly from the
    /// whole grid by rejection sampling, skipping the start, the end and barriers already placed.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - `rows` is zero or `cols` is below two
    /// - the grid has fewer cells than the start, end and barriers need
    /// - barrier sampling exceeds [`MAX_BARRIER_DRAWS`] draws
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        let bounds = checked_bounds(rows, cols)?;
        let required = BARRIER_COUNT + 2;
        if bounds.area() < required {
            return Err(GenerationError::GridTooSmall {
                rows,
                cols,
                required,
            });
        }

        let start = Cell::new(rng.gen_range(0..=1), rng.gen_range(0..rows));

        let end_candidates: Vec<Cell> = (cols - 2..cols)
            .flat_map(|col| (0..rows).map(move |row| Cell::new(col, row)))
            .filter(|cell| *cell != start)
            .collect();
        let end = *end_candidates
            .choose(rng)
            .ok_or(GenerationError::GridTooSmall {
                rows,
                cols,
                required,
            })?;
        debug!(%start, %end, "placed start and end");

        let mut barriers = BTreeSet::new();
        let mut draws = 0_usize;
        while barriers.len() < BARRIER_COUNT {
            if draws == MAX_BARRIER_DRAWS {
                return Err(GenerationError::BarrierPlacementExhausted { attempts: draws });
            }
            draws += 1;

            let candidate = Cell::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
            if candidate != start && candidate != end && barriers.insert(candidate) {
                trace!(barrier = %candidate, draws, "placed barrier");
            }
        }
        debug!(draws, "placed barriers");

        Self::with_layout(rows, cols, start, end, barriers)
    }

    /// Builds a grid from explicit placements.
    ///
    /// Unlike [`Grid::generate`], any number of barriers is accepted, which allows describing
    /// fixed scenarios such as walls spanning a whole column.
    ///
    /// # Errors
    ///
    /// This function returns an error if the dimensions are invalid, a placement lies outside the
    /// grid, or a cell is used for more than one role.
    pub fn with_layout<I>(
        rows: usize,
        cols: usize,
        start: Cell,
        end: Cell,
        barriers: I,
    ) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let bounds = checked_bounds(rows, cols)?;
        let mut tags = vec![Tag::Empty; bounds.area()];

        let mut place = |cell: Cell, tag: Tag| -> Result<(), GenerationError> {
            let slot = bounds
                .index(cell)
                .and_then(|index| tags.get_mut(index))
                .ok_or(GenerationError::OutOfBounds(cell))?;
            if *slot != Tag::Empty {
                return Err(GenerationError::Overlap(cell));
            }
            *slot = tag;
            Ok(())
        };

        place(start, Tag::Start)?;
        place(end, Tag::End)?;
        let mut placed = BTreeSet::new();
        for barrier in barriers {
            place(barrier, Tag::Barrier)?;
            let _ = placed.insert(barrier);
        }

        Ok(Self {
            bounds,
            tags,
            start,
            end,
            barriers: placed,
        })
    }

    /// Dimensions of the grid.
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Start placement.
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// End placement.
    pub const fn end(&self) -> Cell {
        self.end
    }

    /// Barrier placements in ascending order.
    pub const fn barriers(&self) -> &BTreeSet<Cell> {
        &self.barriers
    }

    /// Tag of a cell, or `None` if the cell lies outside the grid.
    pub fn tag(&self, cell: Cell) -> Option<Tag> {
        self.bounds
            .index(cell)
            .and_then(|index| self.tags.get(index))
            .copied()
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tag]> {
        self.tags.chunks(self.bounds.cols)
    }

    /// Produces the grid dump: one line per row, tags separated by single spaces.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Grid {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                formatter.write_char('\n')?;
            }
            for (col_idx, tag) in row.iter().enumerate() {
                if col_idx > 0 {
                    formatter.write_char(' ')?;
                }
                formatter.write_char(tag.symbol())?;
            }
        }

        Ok(())
    }
}

/// Validates the dimensions shared by every grid constructor.
const fn checked_bounds(rows: usize, cols: usize) -> Result<Bounds, GenerationError> {
    if rows < 1 || cols < 2 {
        return Err(GenerationError::InvalidDimensions { rows, cols });
    }

    Ok(Bounds::new(rows, cols))
}
