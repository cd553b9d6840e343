//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen. This is used to determine which
/// screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen.
    ///
    /// This variant represents the main menu, holding the item under the cursor.
    MainMenu(MainMenuItem),
    /// Maze screen.
    ///
    /// This variant represents the screen where the maze is displayed and its path animated.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu, listed top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// Shows the current maze.
    Start,
    /// Generates a fresh maze, then shows it.
    NewMaze,
    /// Leaves the application.
    Quit,
}

impl MainMenuItem {
    /// Every item in display order.
    pub(crate) const ALL: [Self; 3] = [Self::Start, Self::NewMaze, Self::Quit];

    /// Returns the label shown in the menu.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::NewMaze => "New Maze",
            Self::Quit => "Quit",
        }
    }

    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Start => Self::NewMaze,
            Self::NewMaze | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Start | Self::NewMaze => Self::Start,
            Self::Quit => Self::NewMaze,
        }
    }
}
