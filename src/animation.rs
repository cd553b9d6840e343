//! Path animation module.
//!
//! This module contains the timed reveal of a found path, the frame it exposes to renderers, the
//! [`FrameRenderer`] capability every renderer implements, and a plain-text renderer used for
//! headless runs.

use std::{
    io::Write,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result;

use crate::grid::{Cell, Grid, Tag};

/// Default delay between two revealed path cells.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_secs(1);

/// Marker the text renderer prints on revealed path cells.
pub const REVEALED_MARKER: char = 'o';

/// Marker the text renderer prints on cells of a completed path.
pub const COMPLETED_MARKER: char = '*';

/// Path cells to draw over the static grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFrame<'path> {
    /// The reveal is in progress; holds the cells revealed so far, in path order.
    Revealing(&'path [Cell]),
    /// Every cell has been revealed; holds the whole path.
    Complete(&'path [Cell]),
}

impl<'path> PathFrame<'path> {
    /// Cells the frame marks, regardless of phase.
    pub const fn cells(self) -> &'path [Cell] {
        match self {
            Self::Revealing(cells) | Self::Complete(cells) => cells,
        }
    }
}

/// Capability of drawing one animation frame.
///
/// Implementors receive the finished grid and the path cells to mark. They never see the search
/// itself, which keeps the core independent of any display technology.
pub trait FrameRenderer {
    /// Draws the static grid with the frame's path cells marked on top.
    ///
    /// # Errors
    ///
    /// This function may return errors from the underlying output device.
    fn render_frame(&mut self, grid: &Grid, frame: PathFrame<'_>) -> Result<()>;
}

/// Timed reveal state for a found path.
///
/// The first cell is revealed as soon as the animation is created. Each elapsed interval reveals
/// one more cell; the interval after the last reveal switches to the completed state, after which
/// the animation no longer advances.
#[derive(Clone, Debug)]
pub struct Reveal {
    /// Path being revealed.
    path: Vec<Cell>,
    /// Number of cells revealed so far.
    revealed: usize,
    /// Whether the completed frame has been reached.
    complete: bool,
    /// Delay between two steps.
    interval: Duration,
    /// Time of the last step.
    last_update_time: Instant,
}

impl Reveal {
    /// Creates an animation for `path` advancing once per `interval`.
    pub fn new(path: Vec<Cell>, interval: Duration) -> Self {
        let mut animation = Self {
            path,
            revealed: 0,
            complete: false,
            interval,
            last_update_time: Instant::now(),
        };
        animation.advance();

        animation
    }

    /// Restarts the reveal from the first cell.
    pub fn reset(&mut self) {
        self.revealed = 0;
        self.complete = false;
        self.last_update_time = Instant::now();
        self.advance();
    }

    /// Advances the animation if the interval has elapsed since the last step.
    pub fn update(&mut self) {
        let _ = self.update_at(Instant::now());
    }

    /// Advances the animation if the interval has elapsed between the last step and `now`.
    ///
    /// Returns whether a step was taken.
    pub fn update_at(&mut self, now: Instant) -> bool {
        if self.complete || now.saturating_duration_since(self.last_update_time) < self.interval {
            return false;
        }

        self.last_update_time = now;
        self.advance();

        true
    }

    /// Reveals the next cell, or completes the animation once every cell is revealed.
    fn advance(&mut self) {
        if self.revealed < self.path.len() {
            self.revealed += 1;
        } else {
            self.complete = true;
        }
    }

    /// Returns whether the completed frame has been reached.
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// The whole path being animated.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// The frame to draw for the current state.
    pub fn frame(&self) -> PathFrame<'_> {
        if self.complete {
            PathFrame::Complete(&self.path)
        } else {
            PathFrame::Revealing(self.path.get(..self.revealed).unwrap_or_default())
        }
    }

    /// Draws the current frame with the given renderer.
    ///
    /// # Errors
    ///
    /// This function forwards errors from the renderer.
    pub fn render<R: FrameRenderer + ?Sized>(&self, grid: &Grid, renderer: &mut R) -> Result<()> {
        renderer.render_frame(grid, self.frame())
    }
}

/// Renderer writing frames as text.
///
/// Frames use the grid dump format with path cells marked on empty cells: [`REVEALED_MARKER`]
/// while revealing and [`COMPLETED_MARKER`] once complete. Every frame is followed by a blank line.
#[derive(Debug)]
pub struct TextRenderer<W> {
    /// Destination of the frames.
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FrameRenderer for TextRenderer<W> {
    fn render_frame(&mut self, grid: &Grid, frame: PathFrame<'_>) -> Result<()> {
        let marker = match frame {
            PathFrame::Revealing(_) => REVEALED_MARKER,
            PathFrame::Complete(_) => COMPLETED_MARKER,
        };
        let cells = frame.cells();

        for (row_idx, row) in grid.rows().enumerate() {
            let mut line = String::with_capacity(row.len() * 2);
            for (col_idx, tag) in row.iter().enumerate() {
                if col_idx > 0 {
                    line.push(' ');
                }
                let on_path = cells.contains(&Cell::new(col_idx, row_idx));
                line.push(if on_path && *tag == Tag::Empty {
                    marker
                } else {
                    tag.symbol()
                });
            }
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three-step path used across the animation tests.
    fn sample_path() -> Vec<Cell> {
        vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]
    }

    /// Renders a single frame to a string.
    fn render_to_string(grid: &Grid, frame: PathFrame<'_>) -> String {
        let mut buffer = Vec::new();
        TextRenderer::new(&mut buffer)
            .render_frame(grid, frame)
            .expect("writing to a vector should succeed");

        String::from_utf8(buffer).expect("frames are valid UTF-8")
    }

    #[test]
    fn test_new_animation_reveals_first_cell() {
        let animation = Reveal::new(sample_path(), Duration::from_secs(1));

        assert_eq!(
            animation.frame(),
            PathFrame::Revealing(&[Cell::new(1, 0)])
        );
        assert!(!animation.is_complete());
    }

    #[test]
    fn test_animation_reveals_one_cell_per_interval_then_completes() {
        let interval = Duration::from_secs(1);
        let mut animation = Reveal::new(sample_path(), interval);
        let start = animation.last_update_time;

        assert!(!animation.update_at(start + Duration::from_millis(500)));
        assert_eq!(animation.frame().cells().len(), 1);

        assert!(animation.update_at(start + interval));
        assert_eq!(animation.frame().cells().len(), 2);

        assert!(animation.update_at(start + interval * 2));
        assert_eq!(animation.frame(), PathFrame::Revealing(&sample_path()));

        assert!(animation.update_at(start + interval * 3));
        assert!(animation.is_complete());
        assert_eq!(animation.frame(), PathFrame::Complete(&sample_path()));

        assert!(!animation.update_at(start + interval * 10), "completed animations stay put");
    }

    #[test]
    fn test_empty_path_is_complete_immediately() {
        let animation = Reveal::new(Vec::new(), DEFAULT_STEP_INTERVAL);

        assert!(animation.is_complete());
        assert_eq!(animation.frame(), PathFrame::Complete(&[]));
    }

    #[test]
    fn test_reset_restarts_reveal() {
        let interval = Duration::from_millis(10);
        let mut animation = Reveal::new(sample_path(), interval);
        let start = animation.last_update_time;
        for step in 1..=3 {
            let _ = animation.update_at(start + interval * step);
        }
        assert!(animation.is_complete());

        animation.reset();

        assert!(!animation.is_complete());
        assert_eq!(animation.frame().cells(), &[Cell::new(1, 0)]);
        assert_eq!(animation.path(), sample_path().as_slice());
    }

    #[test]
    fn test_text_renderer_marks_revealed_cells() {
        let grid = Grid::with_layout(2, 4, Cell::new(0, 0), Cell::new(3, 0), [Cell::new(1, 1)])
            .expect("layout should be valid");
        let path = sample_path();
        let revealed = path.get(..2).unwrap_or_default();

        let output = render_to_string(&grid, PathFrame::Revealing(revealed));

        assert_eq!(output, "S o o E\n. # . .\n\n");
    }

    #[test]
    fn test_text_renderer_marks_completed_path() {
        let grid = Grid::with_layout(2, 4, Cell::new(0, 0), Cell::new(3, 0), [Cell::new(1, 1)])
            .expect("layout should be valid");
        let path = sample_path();

        let output = render_to_string(&grid, PathFrame::Complete(&path));

        assert_eq!(output, "S * * E\n. # . .\n\n");
    }

    #[test]
    fn test_animation_renders_through_capability() {
        let grid = Grid::with_layout(1, 4, Cell::new(0, 0), Cell::new(3, 0), [])
            .expect("layout should be valid");
        let animation = Reveal::new(sample_path(), DEFAULT_STEP_INTERVAL);
        let mut buffer = Vec::new();

        animation
            .render(&grid, &mut TextRenderer::new(&mut buffer))
            .expect("rendering should succeed");

        assert_eq!(
            String::from_utf8(buffer).expect("frames are valid UTF-8"),
            "S o . E\n\n"
        );
    }
}
