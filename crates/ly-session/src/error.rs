//! Error types for casting sessions and history storage.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while casting or persisting readings.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A seventh line was requested.
    #[error("hexagram already has six lines")]
    AlreadyComplete,

    /// The hexagram was requested before all six lines were cast.
    #[error("hexagram incomplete: {0} of 6 lines cast")]
    Incomplete(usize),

    /// No history record matches the given id or id prefix.
    #[error("no reading matching {0}")]
    RecordNotFound(String),

    /// More than one history record matches an id prefix.
    #[error("id prefix {0} is ambiguous")]
    AmbiguousId(String),

    /// Reading or writing the history file failed.
    #[error("history file {path}: {source}")]
    Io {
        /// The history file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The history file is not valid JSON.
    #[error("history file {path}: {source}")]
    Json {
        /// The history file.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// Engine error.
    #[error("{0}")]
    Engine(#[from] ly_engine::EngineError),
}
