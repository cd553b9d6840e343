//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::debug;

use crate::{
    types::{MainMenuItem, Screen},
    App,
};

/// Input polling timeout.
///
/// This constant bounds how long the loop waits for a key press before it advances the animation
/// and redraws, which also bounds how late a path step can appear.
pub(crate) const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI, then advances
/// the path animation when the maze is on screen.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    if app.screen == Screen::InGame {
        app.animation.update();
    }

    Ok(())
}

/// Dispatches a single key press.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app)?,
        KeyCode::Char('h') => handle_h_events(app),
        KeyCode::Char('r') => handle_r_events(app)?,
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation in the main menu.
pub(crate) fn handle_j_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.next());
    }
}

/// Handles 'k' key press events for upward navigation in the main menu.
pub(crate) fn handle_k_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.previous());
    }
}

/// Handles 'l' key press events for selection.
///
/// Starting shows the current maze with its animation restarted, "New Maze" swaps in a fresh maze
/// first, and quitting sets the exit flag.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Start) => {
            app.animation.reset();
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::NewMaze) => {
            app.regenerate()?;
            debug!(found = app.has_path(), "new maze from menu");
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function returns from the maze screen to the main menu.
pub(crate) fn handle_h_events(app: &mut App) {
    if app.screen == Screen::InGame {
        app.screen = Screen::MainMenu(MainMenuItem::Start);
    }
}

/// Handles 'r' key press events, which replace the maze on screen with a new one.
pub(crate) fn handle_r_events(app: &mut App) -> Result<()> {
    if app.screen == Screen::InGame {
        app.regenerate()?;
        debug!(found = app.has_path(), "new maze from maze screen");
    }

    Ok(())
}
