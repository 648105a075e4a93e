//! History storage and persistence.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use super::record::HistoryRecord;
use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::error::{SessionError, SessionResult};

/// Past readings, newest first, capped at a limit.
#[derive(Debug, Clone)]
pub struct History {
    records: Vec<HistoryRecord>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history holding at most `limit` records.
    pub fn new(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Add a record at the front, dropping the oldest past the limit.
    pub fn add(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.limit);
    }

    /// All records, newest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Find the one record whose id starts with `prefix`.
    pub fn find(&self, prefix: &str) -> SessionResult<&HistoryRecord> {
        let prefix = prefix.trim().to_lowercase();
        let mut matches = self
            .records
            .iter()
            .filter(|r| !prefix.is_empty() && r.id.to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (Some(_), Some(_)) => Err(SessionError::AmbiguousId(prefix)),
            (None, _) => Err(SessionError::RecordNotFound(prefix)),
        }
    }

    /// Load a history file. A missing file is an empty history.
    pub fn load(path: &Path, limit: usize) -> SessionResult<Self> {
        let mut history = Self::new(limit);
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no history file");
                return Ok(history);
            }
            Err(source) => {
                return Err(SessionError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let mut records: Vec<HistoryRecord> =
            serde_json::from_str(&text).map_err(|source| SessionError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        records.truncate(history.limit);
        history.records = records;
        debug!(path = %path.display(), count = history.len(), "loaded history");
        Ok(history)
    }

    /// Write the history to a JSON file, replacing it atomically.
    pub fn save(&self, path: &Path) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(&self.records).map_err(|source| {
            SessionError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let io_err = |source: std::io::Error| SessionError::Io {
            path: path.to_path_buf(),
            source,
        };
        // Write beside the target, then rename over it.
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(io_err)?;
        std::fs::rename(&tmp_path, path).map_err(io_err)?;
        info!(path = %path.display(), count = self.len(), "saved history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ly_engine::{Hexagram, Language, Reading};

    fn record(question: &str) -> HistoryRecord {
        let h = Hexagram::from_sums(&[6, 7, 8, 9, 7, 8]).unwrap();
        let r = Reading::of(&h, Language::En).unwrap();
        HistoryRecord::new(h, question, &r)
    }

    #[test]
    fn newest_first() {
        let mut h = History::default();
        h.add(record("first"));
        h.add(record("second"));
        assert_eq!(h.len(), 2);
        assert_eq!(h.records()[0].question, "second");
        assert_eq!(h.records()[1].question, "first");
    }

    #[test]
    fn capped_at_fifty() {
        let mut h = History::default();
        for i in 0..60 {
            h.add(record(&i.to_string()));
        }
        assert_eq!(h.len(), 50);
        assert_eq!(h.records()[0].question, "59");
        assert_eq!(h.records()[49].question, "10");
    }

    #[test]
    fn clear_empties() {
        let mut h = History::new(5);
        h.add(record("q"));
        h.clear();
        assert!(h.is_empty());
    }

    #[test]
    fn find_by_prefix() {
        let mut h = History::default();
        let rec = record("q");
        let id = rec.id.to_string();
        h.add(rec);
        h.add(record("other"));
        assert_eq!(h.find(&id).unwrap().question, "q");
        assert_eq!(h.find(&id.to_uppercase()).unwrap().question, "q");
        assert!(matches!(
            h.find("not-an-id"),
            Err(SessionError::RecordNotFound(_))
        ));
        assert!(matches!(h.find(""), Err(SessionError::RecordNotFound(_))));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let h = History::load(&dir.path().join("none.json"), 50).unwrap();
        assert!(h.is_empty());
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut h = History::default();
        h.add(record("a"));
        h.add(record("b"));
        h.save(&path).unwrap();

        let loaded = History::load(&path, 50).unwrap();
        assert_eq!(loaded.records(), h.records());
    }

    #[test]
    fn load_respects_smaller_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut h = History::default();
        for i in 0..5 {
            h.add(record(&i.to_string()));
        }
        h.save(&path).unwrap();
        let loaded = History::load(&path, 2).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.records()[0].question, "4");
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut h = History::default();
        h.add(record("a"));
        h.save(&path).unwrap();
        h.add(record("b"));
        h.save(&path).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("history.json")]);
        assert_eq!(History::load(&path, 50).unwrap().len(), 2);
    }

    #[test]
    fn tampered_sum_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut h = History::default();
        h.add(record("q"));
        h.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"sum\": 7"));
        std::fs::write(&path, text.replacen("\"sum\": 7", "\"sum\": 42", 1)).unwrap();

        let err = History::load(&path, 50).unwrap_err();
        assert!(matches!(err, SessionError::Json { .. }));
        assert!(err.to_string().contains("impossible coin sum: 42"), "{err}");
    }

    #[test]
    fn tampered_line_type_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut h = History::default();
        h.add(record("q"));
        h.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let tampered = text.replacen("\"line\": \"YoungYang\"", "\"line\": \"OldYin\"", 1);
        assert_ne!(tampered, text);
        std::fs::write(&path, tampered).unwrap();

        assert!(matches!(
            History::load(&path, 50),
            Err(SessionError::Json { .. })
        ));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            History::load(&path, 50),
            Err(SessionError::Json { .. })
        ));
    }
}
