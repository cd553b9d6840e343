//! Core application state and logic for the maze solver.

use std::io::{self, Write};

use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{
    animation::{FrameRenderer as _, PathFrame, Reveal, TextRenderer},
    events,
    grid::Grid,
    search::{self, Outcome, Report},
    types::{MainMenuItem, Screen},
    ui, Config,
};

/// Application state container for the maze solver.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the interface and Crossterm events will help writing to. It also owns the
/// current maze, the result of searching it and the animation replaying that result.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Configuration the application was started with.
    pub(crate) config: Config,
    /// Random source for maze generation.
    ///
    /// The generator lives as long as the application so that mazes requested from the menu
    /// continue the same seeded sequence.
    pub(crate) rng: StdRng,
    /// Maze currently displayed.
    pub(crate) grid: Grid,
    /// Result of searching `grid`.
    pub(crate) report: Report,
    /// Animation of the path found in `report`.
    ///
    /// When no path exists this holds an empty, already completed animation.
    pub(crate) animation: Reveal,
}

impl App {
    /// Creates the application and solves its first maze.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configured dimensions cannot hold a maze.
    pub fn new(config: Config) -> Result<Self> {
        let mut rng = config.rng();
        let (grid, report, animation) = build_maze(&config, &mut rng)?;

        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Start),
            config,
            rng,
            grid,
            report,
            animation,
        })
    }

    /// Replaces the current maze with a freshly generated and solved one.
    ///
    /// # Errors
    ///
    /// This function returns an error if the configured dimensions cannot hold a maze.
    pub fn regenerate(&mut self) -> Result<()> {
        let (grid, report, animation) = build_maze(&self.config, &mut self.rng)?;
        self.grid = grid;
        self.report = report;
        self.animation = animation;

        Ok(())
    }

    /// Returns whether the current maze has a path from start to end.
    pub const fn has_path(&self) -> bool {
        self.report.outcome.is_found()
    }

    /// Returns whether the application was configured to run without the terminal interface.
    pub const fn is_headless(&self) -> bool {
        self.config.headless
    }

    /// Writes the grid dump followed by the exploration statistics or a "no path" message.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn write_diagnostics<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.grid)?;

        match self.report.outcome {
            Outcome::Found(_) => {
                writeln!(
                    out,
                    "Exploration time from start to end (excluding starting node): {} steps",
                    self.report.stats.elapsed_steps
                )?;
                writeln!(
                    out,
                    "Total nodes explored: {}",
                    self.report.stats.nodes_explored
                )?;
            }
            Outcome::NotFound => writeln!(out, "\nNo path found.")?,
        }

        Ok(())
    }

    /// Writes the maze with its completed path marked, if a path was found.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn write_solution<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(path) = self.report.path() {
            writeln!(out)?;
            TextRenderer::new(out).render_frame(&self.grid, PathFrame::Complete(path))?;
        }

        Ok(())
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

/// Generates a maze, searches it and prepares the animation of the result.
fn build_maze(config: &Config, rng: &mut StdRng) -> Result<(Grid, Report, Reveal)> {
    let grid = Grid::generate(config.rows, config.cols, rng)?;
    info!(
        rows = config.rows,
        cols = config.cols,
        start = %grid.start(),
        end = %grid.end(),
        "generated maze"
    );

    let report = search::solve(&grid);
    let path = report.path().map(<[_]>::to_vec).unwrap_or_default();
    let animation = Reveal::new(path, config.step_interval());

    Ok((grid, report, animation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    /// Creates a seeded configuration for deterministic tests.
    fn test_config(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::default()
        }
    }

    #[test]
    fn test_new_app_starts_in_main_menu() {
        let app = App::new(test_config(1)).expect("default dimensions should work");

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Start));
        assert_eq!(app.report, search::solve(&app.grid));
        assert_eq!(app.animation.path(), app.report.path().unwrap_or_default());
    }

    #[test]
    fn test_new_app_is_reproducible_with_seed() {
        let first = App::new(test_config(3)).expect("app should build");
        let second = App::new(test_config(3)).expect("app should build");

        assert_eq!(first.grid, second.grid);
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn test_new_app_rejects_tiny_grid() {
        let config = Config {
            rows: 1,
            cols: 3,
            ..test_config(1)
        };

        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_regenerate_keeps_state_consistent() {
        let mut app = App::new(test_config(11)).expect("app should build");

        app.regenerate().expect("regeneration should succeed");

        assert_eq!(app.report, search::solve(&app.grid));
        assert_eq!(app.has_path(), app.report.path().is_some());
    }

    #[test]
    fn test_write_diagnostics_reports_found_path() {
        let mut app = App::new(test_config(2)).expect("app should build");
        app.grid = Grid::with_layout(
            2,
            3,
            Cell::new(0, 0),
            Cell::new(2, 0),
            [],
        )
        .expect("layout should be valid");
        app.report = search::solve(&app.grid);
        let mut out = Vec::new();

        app.write_diagnostics(&mut out).expect("writing should succeed");

        assert_eq!(
            String::from_utf8(out).expect("output is valid UTF-8"),
            "S . E\n. . .\n\
             Exploration time from start to end (excluding starting node): 3 steps\n\
             Total nodes explored: 3\n"
        );
    }

    #[test]
    fn test_write_diagnostics_reports_missing_path() {
        let mut app = App::new(test_config(2)).expect("app should build");
        app.grid = Grid::with_layout(
            2,
            3,
            Cell::new(0, 0),
            Cell::new(2, 0),
            [Cell::new(1, 0), Cell::new(1, 1)],
        )
        .expect("layout should be valid");
        app.report = search::solve(&app.grid);
        let mut out = Vec::new();

        app.write_diagnostics(&mut out).expect("writing should succeed");
        app.write_solution(&mut out).expect("writing should succeed");

        assert_eq!(
            String::from_utf8(out).expect("output is valid UTF-8"),
            "S # E\n. # .\n\nNo path found.\n"
        );
    }

    #[test]
    fn test_write_solution_marks_path() {
        let mut app = App::new(test_config(2)).expect("app should build");
        app.grid = Grid::with_layout(
            1,
            4,
            Cell::new(0, 0),
            Cell::new(3, 0),
            [],
        )
        .expect("layout should be valid");
        app.report = search::solve(&app.grid);
        let mut out = Vec::new();

        app.write_solution(&mut out).expect("writing should succeed");

        assert_eq!(
            String::from_utf8(out).expect("output is valid UTF-8"),
            "\nS * * E\n\n"
        );
    }
}
