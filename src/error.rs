//! Application-level errors
//!
//! Bracket problems are never errors: they are reported inside the
//! [`Trace`](crate::trace::Trace). [`AppError`] only covers the binary's own
//! failures (I/O, terminal setup, serialization and bad configuration).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize trace: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("playback interval must be at least 1 ms")]
    InvalidInterval,
}
