//! This crate contains the source code for the binary of the labyrinth-dfs maze solver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "No public repository or readme to point at yet."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrinth_dfs::{init_logging, App, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    init_logging(&config)?;

    let mut app = App::new(config)?;
    app.write_diagnostics(&mut io::stdout().lock())?;

    if app.is_headless() {
        return app.write_solution(&mut io::stdout().lock());
    }
    if !app.has_path() {
        return Ok(());
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
