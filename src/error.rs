// ⚠️ Error types for the zoo library
//
// The factory rejects unknown species tags, the exporter reports failed
// writes, and the scheduler refuses work once shutdown has begun. Config
// loading adds its own read/parse failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZooError {
    /// Tag outside {DOG, CAT, RABBIT}
    #[error("Unknown species: {0}")]
    UnsupportedSpecies(String),

    /// Export destination could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scheduler is shutting down, no new tasks accepted")]
    SchedulerShutdown,
}

pub type Result<T> = std::result::Result<T, ZooError>;
