//! Configuration for a casting session.

use ly_engine::Language;

/// Default number of readings kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Configuration for a casting session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible casts. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Language of composed reports.
    pub language: Language,
    /// Maximum number of readings kept in history.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            language: Language::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the report language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the history limit (at least 1).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.language, Language::ZhCn);
        assert_eq!(cfg.history_limit, 50);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_language(Language::En)
            .with_history_limit(10);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.language, Language::En);
        assert_eq!(cfg.history_limit, 10);
    }

    #[test]
    fn history_limit_floor() {
        let cfg = SessionConfig::default().with_history_limit(0);
        assert_eq!(cfg.history_limit, 1);
    }
}
