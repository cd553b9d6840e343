//! Logging setup.

use std::{fs::File, io, sync::Mutex};

use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use crate::Config;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Logs go to the configured log file if
/// there is one, to standard error in headless mode, and nowhere otherwise, since the terminal
/// interface owns the screen.
///
/// # Errors
///
/// This function may return errors if the log file cannot be created or a global subscriber is
/// already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if config.verbose {
            "labyrinth_dfs=debug"
        } else {
            "labyrinth_dfs=info"
        })
    });
    let registry = tracing_subscriber::registry().with(filter);

    match (&config.log_file, config.headless) {
        (Some(path), _) => {
            let file = File::create(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false)
                        .compact(),
                )
                .try_init()?;
        }
        (None, true) => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(false)
                        .compact(),
                )
                .try_init()?;
        }
        (None, false) => {}
    }

    Ok(())
}
