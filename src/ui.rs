//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::DOT,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    animation::{FrameRenderer, PathFrame},
    grid::{Cell, Grid, Tag},
    search::Outcome,
    types::{MainMenuItem, Screen},
    App,
};

/// Width of one maze cell in terminal columns.
const CELL_WIDTH: usize = 3;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders the bordered, centered box holding a menu and splits it into one row per item.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, items: u16) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(items + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); items.into()]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start", "New Maze", and "Quit". It
/// highlights the currently selected option.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, "Main Menu", 3);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in MainMenuItem::ALL.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(entry.label(), style).centered(), *area);
    }
}

/// Renders the maze screen.
///
/// The maze and its animated path take the upper part of the screen. A status line with the
/// search result and a tooltip with the available keys sit at the bottom.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversions.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(1), // Search status
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze area from layout")?;
    let status_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get status area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    app.animation.render(
        &app.grid,
        &mut MazeView {
            frame: &mut *frame,
            area: maze_area,
        },
    )?;

    let status = match &app.report.outcome {
        Outcome::Found(path) => format!(
            "path length: {} / nodes explored: {}",
            path.len(),
            app.report.stats.nodes_explored
        ),
        Outcome::NotFound => format!(
            "no path found / nodes explored: {}",
            app.report.stats.nodes_explored
        ),
    };
    frame.render_widget(
        Line::styled(status, Style::default().fg(Color::Green)).centered(),
        status_area,
    );

    let tooltip_block = Block::bordered()
        .title("(r) new maze / (h) return to menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Terminal renderer for maze frames.
///
/// This structure draws a grid centered within an area of the frame, one colored block per cell,
/// with path cells marked by a dot.
pub(crate) struct MazeView<'view, 'frame> {
    /// Frame being drawn.
    pub(crate) frame: &'view mut Frame<'frame>,
    /// Area the maze is centered in.
    pub(crate) area: Rect,
}

impl FrameRenderer for MazeView<'_, '_> {
    fn render_frame(&mut self, grid: &Grid, frame: PathFrame<'_>) -> Result<()> {
        let bounds = grid.bounds();
        let width = u16::try_from(bounds.cols.saturating_mul(CELL_WIDTH))?;
        let height = u16::try_from(bounds.rows)?;

        let column = *Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .split(self.area)
            .first()
            .ok_or_eyre("failed to get maze column from layout")?;
        let space = *Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .split(column)
            .first()
            .ok_or_eyre("failed to get maze space from layout")?;

        let marker_color = match frame {
            PathFrame::Revealing(_) => Color::Red,
            PathFrame::Complete(_) => Color::Blue,
        };
        let cells = frame.cells();

        let lines: Vec<Line> = grid
            .rows()
            .enumerate()
            .map(|(row_idx, row)| {
                Line::from(
                    row.iter()
                        .enumerate()
                        .map(|(col_idx, tag)| {
                            let marked = cells.contains(&Cell::new(col_idx, row_idx));
                            cell_span(*tag, marked.then_some(marker_color))
                        })
                        .collect::<Vec<Span>>(),
                )
            })
            .collect();

        self.frame.render_widget(Paragraph::new(lines), space);

        Ok(())
    }
}

/// Background color of a cell by its tag.
pub(crate) const fn tag_color(tag: Tag) -> Color {
    match tag {
        Tag::Empty => Color::White,
        Tag::Start => Color::Green,
        Tag::End => Color::Blue,
        Tag::Barrier => Color::Gray,
    }
}

/// Builds the span for a single cell, optionally carrying a path marker of the given color.
fn cell_span(tag: Tag, marker: Option<Color>) -> Span<'static> {
    let background = Style::default().bg(tag_color(tag));

    match marker {
        Some(color) => Span::styled(
            format!(" {DOT} "),
            background.fg(color).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(format!(" {} ", tag.symbol()), background.fg(Color::Black)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates a seeded test app with a fixed maze.
    fn create_test_app() -> App {
        let mut app = App::new(Config {
            seed: Some(1),
            ..Config::default()
        })
        .expect("failed to create test app");
        app.grid = Grid::with_layout(
            3,
            4,
            Cell::new(0, 1),
            Cell::new(3, 1),
            [Cell::new(2, 0), Cell::new(2, 1)],
        )
        .expect("test layout should be valid");
        app.report = crate::search::solve(&app.grid);
        app.animation = crate::animation::Reveal::new(
            app.report.path().unwrap_or_default().to_vec(),
            app.config.step_interval(),
        );

        app
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Concatenates every symbol in the terminal buffer.
    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_main_menu() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("Main Menu"), "menu title should be visible");
        assert!(text.contains("New Maze"), "menu entries should be visible");
    }

    #[test]
    fn test_main_menu_every_item_selected() {
        let mut terminal = create_test_terminal();

        for item in MainMenuItem::ALL {
            let result = terminal.draw(|frame| {
                main_menu(frame, item);
            });

            assert!(result.is_ok(), "rendering main menu with {item:?} should succeed");
        }
    }

    #[test]
    fn test_init_menu_splits_rows() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, "Main Menu", 3);
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
        });

        assert!(result.is_ok(), "initializing main menu should succeed");
    }

    #[test]
    fn test_draw_in_game_shows_maze_and_first_step() {
        let mut app = create_test_app();
        app.screen = Screen::InGame;
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains('S'), "start should be drawn");
        assert!(text.contains('E'), "end should be drawn");
        assert!(text.contains('#'), "barriers should be drawn");
        assert!(text.contains(DOT), "the first path cell should be revealed");
        assert!(text.contains("path length"), "status should be shown");
    }

    #[test]
    fn test_in_game_without_path_reports_it() {
        let mut app = create_test_app();
        app.grid = Grid::with_layout(
            3,
            4,
            Cell::new(0, 1),
            Cell::new(3, 1),
            [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)],
        )
        .expect("test layout should be valid");
        app.report = crate::search::solve(&app.grid);
        app.animation = crate::animation::Reveal::new(Vec::new(), app.config.step_interval());
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering in-game without a path should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("no path found"), "status should report the missing path");
        assert!(!text.contains(DOT), "no path cells should be marked");
    }

    #[test]
    fn test_maze_view_rejects_oversized_grid() {
        let grid = Grid::with_layout(70_000, 2, Cell::new(0, 0), Cell::new(1, 0), [])
            .expect("layout should be valid");
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let area = frame.area();
            let mut view = MazeView { frame, area };
            assert!(
                view.render_frame(&grid, PathFrame::Complete(&[])).is_err(),
                "grids taller than the terminal coordinate space should be rejected"
            );
        });

        assert!(result.is_ok(), "terminal drawing should succeed even if the view fails");
    }

    #[test]
    fn test_tag_colors() {
        assert_eq!(tag_color(Tag::Start), Color::Green);
        assert_eq!(tag_color(Tag::End), Color::Blue);
        assert_eq!(tag_color(Tag::Barrier), Color::Gray);
        assert_eq!(tag_color(Tag::Empty), Color::White);
    }

    #[test]
    fn test_cell_span_marks_path() {
        let marked = cell_span(Tag::Empty, Some(Color::Red));
        let plain = cell_span(Tag::Barrier, None);

        assert_eq!(marked.content, format!(" {DOT} "));
        assert_eq!(marked.style.fg, Some(Color::Red));
        assert_eq!(plain.content, " # ");
        assert_eq!(plain.style.bg, Some(Color::Gray));
    }
}
