//! Casting sessions and reading history for the Liu-Yao engine.
//!
//! Provides a seedable casting session that tosses one line at a time,
//! session configuration, and a bounded JSON-backed history of past
//! readings.

pub mod config;
pub mod error;
pub mod history;
pub mod session;

pub use config::{DEFAULT_HISTORY_LIMIT, SessionConfig};
pub use error::{SessionError, SessionResult};
pub use history::{History, HistoryRecord};
pub use session::CastingSession;
