// Logging setup.
// The terminal belongs to the TUI, so events go to a log file in the cache directory.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, ScoutError};

/// Install the global subscriber writing to `log_path`.
///
/// Without a log path, events are discarded.
pub fn init(filter: &str, log_path: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| ScoutError::Config(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    let result = match log_path {
        Some(path) => builder.with_writer(Mutex::new(open_log(path)?)).try_init(),
        None => builder.with_writer(std::io::sink).try_init(),
    };

    result.map_err(|e| ScoutError::Other(e.to_string()))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
