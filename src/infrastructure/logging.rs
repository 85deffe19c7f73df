//! Logging initialization

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Initialize a tracing subscriber writing to stderr.
///
/// Only WARN and ERROR are shown by default (INFO with `verbose`).
/// `RUST_LOG` overrides the default, e.g.
///
/// ```sh
/// RUST_LOG=print_divider=debug print-divider insert --file src/main.rs
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // stdout carries command output, so logs stay on stderr
    let subscriber = Registry::default().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .event_format(fmt::format().compact().with_target(false)),
    );

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
