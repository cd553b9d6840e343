//! Random grid mazes solved by depth-first search.
//!
//! A maze is a rectangular [`Grid`](grid::Grid) with a start cell in the first two columns, an end
//! cell in the last two columns and four barrier cells scattered at random. The
//! [`search`](search::search) function walks it with a stack-based depth-first search over
//! 8-directional adjacency, and the [`animation`] module replays the path it finds one cell at a
//! time through any [`FrameRenderer`](animation::FrameRenderer). The [`App`] type ties these
//! together behind a terminal interface.

#![expect(
    clippy::cargo_common_metadata,
    reason = "No public repository or readme to point at yet."
)]

pub mod animation;
pub mod grid;
pub mod neighbors;
pub mod search;

mod app;
mod config;
mod events;
mod logging;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use logging::init as init_logging;
