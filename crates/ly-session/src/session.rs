//! Casting session management.
//!
//! A `CastingSession` owns the random generator and collects lines one toss
//! at a time, bottom first. Once six lines are in, `finish` yields the
//! hexagram and the session is ready for the next casting.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use ly_engine::{CastResult, Hexagram, LINE_COUNT, Language, Reading, cast};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// An in-progress casting.
pub struct CastingSession {
    rng: StdRng,
    lines: Vec<CastResult>,
    language: Language,
}

impl CastingSession {
    /// Create a session from a config.
    pub fn new(config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            lines: Vec::with_capacity(LINE_COUNT),
            language: config.language,
        }
    }

    /// Lines cast so far, bottom first.
    pub fn lines(&self) -> &[CastResult] {
        &self.lines
    }

    /// Whether all six lines are cast.
    pub fn is_complete(&self) -> bool {
        self.lines.len() == LINE_COUNT
    }

    /// Number of lines still to cast.
    pub fn remaining(&self) -> usize {
        LINE_COUNT - self.lines.len()
    }

    /// Language used by [`CastingSession::read`].
    pub fn language(&self) -> Language {
        self.language
    }

    /// Toss three coins for the next line.
    pub fn toss(&mut self) -> SessionResult<CastResult> {
        if self.is_complete() {
            return Err(SessionError::AlreadyComplete);
        }
        let result = cast(&mut self.rng);
        debug!(line = self.lines.len() + 1, sum = result.sum, kind = %result.line, "tossed");
        self.lines.push(result);
        Ok(result)
    }

    /// Record a line cast outside the session, e.g. with physical coins.
    pub fn push(&mut self, result: CastResult) -> SessionResult<()> {
        if self.is_complete() {
            return Err(SessionError::AlreadyComplete);
        }
        self.lines.push(result);
        Ok(())
    }

    /// Take the six cast lines as a hexagram and reset the session.
    pub fn finish(&mut self) -> SessionResult<Hexagram> {
        if !self.is_complete() {
            return Err(SessionError::Incomplete(self.lines.len()));
        }
        let hexagram = Hexagram::new(&self.lines)?;
        self.lines.clear();
        info!(
            id = hexagram.bits().value(),
            moving = hexagram.moving_lines().len(),
            "hexagram complete"
        );
        Ok(hexagram)
    }

    /// Toss every remaining line and finish.
    pub fn cast_hexagram(&mut self) -> SessionResult<Hexagram> {
        while !self.is_complete() {
            self.toss()?;
        }
        self.finish()
    }

    /// Analyze a hexagram in the session language.
    pub fn read(&self, hexagram: &Hexagram) -> SessionResult<Reading> {
        Ok(Reading::of(hexagram, self.language)?)
    }
}
