//! Tracing setup.
//!
//! The form owns the terminal, so log output goes to a file instead of
//! stderr. `RUST_LOG` overrides the default level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `log_file`.
///
/// If the file cannot be opened, events are discarded.
pub fn init(log_file: &Path, verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    let file = OpenOptions::new().create(true).append(true).open(log_file);

    // A subscriber may already be installed (tests, repeated init).
    let _ = match file {
        Ok(file) => builder.with_writer(Mutex::new(file)).try_init(),
        Err(_) => builder.with_writer(std::io::sink).try_init(),
    };
}
