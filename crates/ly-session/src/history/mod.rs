//! Saved readings, newest first.

pub mod record;
pub mod store;

pub use record::HistoryRecord;
pub use store::History;
