//! Tracing setup
//!
//! The dashboard owns the terminal, so events are only recorded when a log
//! file is given. Without one no subscriber is installed.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BecaError, BecaResult};

static TRACING_INIT: Once = Once::new();

/// Default verbosity for the crate's own events
pub const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber writing to `log_file`.
///
/// `level` applies to the library and the binary. `RUST_LOG` takes
/// precedence when set. Calling this more than once is harmless; only the
/// first call installs a subscriber.
pub fn init_tracing(log_file: Option<&Path>, level: &str) -> BecaResult<()> {
    let level: LevelFilter = level
        .trim()
        .parse()
        .map_err(|_| BecaError::Config(format!("Unknown log level '{}'", level)))?;

    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BecaError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("beca={0},beca_cli={0}", level))
            .map_err(|e| BecaError::Config(e.to_string()))?,
    };

    TRACING_INIT.call_once(|| {
        // Another subscriber may already be set by an embedding program.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });

    Ok(())
}
