//! Hexagrams and their trigram structure.
//!
//! A [`Hexagram`] is six cast lines, bottom first. Analysis works on the
//! [`LineBits`] pattern (one bit per line, Yang = 1, line 0 in bit 0), which
//! doubles as the hexagram id: `upper << 3 | lower`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coin::{CastResult, LineType};
use crate::error::{EngineError, EngineResult};
use crate::trigram::Trigram;

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// A six-line Yin/Yang pattern, line 0 in the least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LineBits(u8);

impl LineBits {
    /// Wrap a raw 6-bit pattern.
    pub fn new(bits: u8) -> EngineResult<Self> {
        if bits < 64 {
            Ok(Self(bits))
        } else {
            Err(EngineError::PatternOutOfRange(bits))
        }
    }

    /// Build a pattern from six lines, bottom first, `true` for Yang.
    pub fn from_lines(lines: [bool; LINE_COUNT]) -> Self {
        let bits = lines
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, yang)| acc | (u8::from(*yang) << i));
        Self(bits)
    }

    /// Stack two trigrams.
    pub fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        Self((upper.index() << 3) | lower.index())
    }

    /// Every pattern, from all Yin (0) to all Yang (63).
    pub fn all() -> impl Iterator<Item = Self> {
        (0..64u8).map(Self)
    }

    /// The raw value, which is also the hexagram id.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether line `index` (0 = bottom) is Yang.
    pub fn is_yang(self, index: usize) -> bool {
        index < LINE_COUNT && (self.0 >> index) & 1 == 1
    }

    /// The pattern as an array of 0/1, bottom first.
    pub fn to_array(self) -> [u8; LINE_COUNT] {
        std::array::from_fn(|i| (self.0 >> i) & 1)
    }

    /// Invert line `index`. Indices past the top line are ignored.
    pub fn flip(self, index: usize) -> Self {
        if index < LINE_COUNT {
            Self(self.0 ^ (1 << index))
        } else {
            self
        }
    }

    /// The trigram formed by lines 0, 1, 2.
    pub fn lower(self) -> Trigram {
        Trigram::from_lines(self.is_yang(0), self.is_yang(1), self.is_yang(2))
    }

    /// The trigram formed by lines 3, 4, 5.
    pub fn upper(self) -> Trigram {
        Trigram::from_lines(self.is_yang(3), self.is_yang(4), self.is_yang(5))
    }

    /// Whether the upper and lower trigrams are identical.
    pub fn is_pure(self) -> bool {
        self.lower() == self.upper()
    }
}

impl TryFrom<u8> for LineBits {
    type Error = EngineError;

    fn try_from(bits: u8) -> EngineResult<Self> {
        Self::new(bits)
    }
}

impl From<LineBits> for u8 {
    fn from(bits: LineBits) -> Self {
        bits.0
    }
}

impl std::fmt::Display for LineBits {
    /// Bottom line first, e.g. `100000` has only the bottom line solid.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.to_array() {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// Trigram decomposition of a line pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Trigram of lines 0..=2.
    pub lower: Trigram,
    /// Trigram of lines 3..=5.
    pub upper: Trigram,
    /// The full pattern.
    pub bits: LineBits,
}

impl Structure {
    /// Decompose a line pattern.
    pub fn of(bits: LineBits) -> Self {
        Self {
            lower: bits.lower(),
            upper: bits.upper(),
            bits,
        }
    }

    /// Whether the hexagram is one of the eight pure hexagrams.
    pub fn is_pure(&self) -> bool {
        self.lower == self.upper
    }

    /// The hexagram id (0..=63).
    pub fn id(&self) -> u8 {
        self.bits.value()
    }
}

/// Six cast lines, bottom first, and the moment the casting completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [CastResult; LINE_COUNT],
    created_at: DateTime<Utc>,
}

impl Hexagram {
    /// Build a hexagram stamped with the current time.
    ///
    /// Fails unless exactly six lines are given.
    pub fn new(lines: &[CastResult]) -> EngineResult<Self> {
        Self::with_timestamp(lines, Utc::now())
    }

    /// Build a hexagram with an explicit creation time.
    pub fn with_timestamp(lines: &[CastResult], created_at: DateTime<Utc>) -> EngineResult<Self> {
        let lines: [CastResult; LINE_COUNT] = lines
            .try_into()
            .map_err(|_| EngineError::IncompleteHexagram(lines.len()))?;
        Ok(Self { lines, created_at })
    }

    /// Build a hexagram from coin sums (6..=9), bottom first.
    pub fn from_sums(sums: &[u32]) -> EngineResult<Self> {
        let lines = sums
            .iter()
            .map(|s| CastResult::from_sum(*s))
            .collect::<EngineResult<Vec<_>>>()?;
        Self::new(&lines)
    }

    /// The six lines, bottom first.
    pub fn lines(&self) -> &[CastResult; LINE_COUNT] {
        &self.lines
    }

    /// When the casting completed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Yin/Yang pattern of the hexagram as cast. Motion is dropped.
    pub fn bits(&self) -> LineBits {
        LineBits::from_lines(self.lines.map(|l| l.line.is_yang()))
    }

    /// Yin/Yang pattern after every moving line has inverted.
    pub fn changed_bits(&self) -> LineBits {
        LineBits::from_lines(self.lines.map(|l| l.line.is_yang_after_change()))
    }

    /// Trigram structure of the hexagram as cast.
    pub fn structure(&self) -> Structure {
        Structure::of(self.bits())
    }

    /// Trigram structure of the changed hexagram.
    pub fn changed_structure(&self) -> Structure {
        Structure::of(self.changed_bits())
    }

    /// Indices of the moving lines, bottom first.
    pub fn moving_lines(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.line.is_moving())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any line moves.
    pub fn has_moving_lines(&self) -> bool {
        self.lines.iter().any(|l| l.line.is_moving())
    }

    /// Text drawing, top line first. Moving lines carry `o` (Old Yang) or
    /// `x` (Old Yin).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, cast) in self.lines.iter().enumerate().rev() {
            let body = if cast.line.is_yang() {
                "━━━━━━━━━"
            } else {
                "━━━━ ━━━━"
            };
            let mark = match cast.line {
                LineType::OldYang => " o",
                LineType::OldYin => " x",
                _ => "",
            };
            out.push_str(&format!("{} {body}{mark}\n", i + 1));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(sums: [u32; 6]) -> Hexagram {
        Hexagram::from_sums(&sums).unwrap()
    }

    #[test]
    fn new_requires_six_lines() {
        let line = CastResult::from_line(LineType::YoungYang);
        assert_eq!(
            Hexagram::new(&[line; 5]),
            Err(EngineError::IncompleteHexagram(5))
        );
        assert_eq!(
            Hexagram::new(&[line; 7]),
            Err(EngineError::IncompleteHexagram(7))
        );
        assert!(Hexagram::new(&[line; 6]).is_ok());
    }

    #[test]
    fn from_sums_rejects_bad_values() {
        assert_eq!(
            Hexagram::from_sums(&[7, 7, 7, 5, 7, 7]),
            Err(EngineError::ImpossibleCoinSum(5))
        );
    }

    #[test]
    fn trigram_packing() {
        // lines bottom->top: yang, yin, yin | yin, yin, yang
        let s = hex([7, 8, 8, 8, 8, 7]).structure();
        assert_eq!(s.lower, Trigram::Zhen);
        assert_eq!(s.upper, Trigram::Gen);
        assert_eq!(s.lower.index(), 1);
        assert_eq!(s.upper.index(), 4);
        assert_eq!(s.bits.to_array(), [1, 0, 0, 0, 0, 1]);
        assert_eq!(s.id(), (4 << 3) | 1);
    }

    #[test]
    fn motion_is_dropped_in_structure() {
        assert_eq!(
            hex([9, 6, 9, 6, 9, 6]).bits(),
            hex([7, 8, 7, 8, 7, 8]).bits()
        );
    }

    #[test]
    fn purity() {
        assert!(hex([7; 6]).structure().is_pure());
        assert!(hex([8; 6]).structure().is_pure());
        assert!(hex([7, 8, 8, 7, 8, 8]).structure().is_pure());
        assert!(!hex([7, 8, 8, 8, 8, 8]).structure().is_pure());
    }

    #[test]
    fn changed_hexagram_inverts_moving_lines() {
        let h = hex([6, 9, 7, 8, 6, 9]);
        assert_eq!(h.bits().to_array(), [0, 1, 1, 0, 0, 1]);
        assert_eq!(h.changed_bits().to_array(), [1, 0, 1, 0, 1, 0]);
        assert_eq!(h.moving_lines(), vec![0, 1, 4, 5]);
    }

    #[test]
    fn no_moving_lines_means_no_change() {
        let h = hex([7, 8, 7, 7, 8, 8]);
        assert!(!h.has_moving_lines());
        assert_eq!(h.changed_structure().id(), h.structure().id());
    }

    #[test]
    fn line_bits_bounds() {
        assert!(LineBits::new(63).is_ok());
        assert_eq!(LineBits::new(64), Err(EngineError::PatternOutOfRange(64)));
        assert_eq!(LineBits::all().count(), 64);
    }

    #[test]
    fn flip_and_display() {
        let bits = LineBits::new(0).unwrap().flip(0).flip(5);
        assert_eq!(bits.to_string(), "100001");
        assert_eq!(bits.flip(6), bits);
    }

    #[test]
    fn from_trigrams_matches_structure() {
        for bits in LineBits::all() {
            let s = Structure::of(bits);
            assert_eq!(LineBits::from_trigrams(s.lower, s.upper), bits);
        }
    }

    #[test]
    fn line_bits_serde_validates() {
        let json = serde_json::to_string(&LineBits::new(9).unwrap()).unwrap();
        assert_eq!(json, "9");
        assert!(serde_json::from_str::<LineBits>("64").is_err());
    }

    #[test]
    fn render_top_line_first() {
        let drawing = hex([9, 8, 8, 8, 8, 6]).render();
        let rows: Vec<&str> = drawing.lines().collect();
        assert_eq!(rows[0], "6 ━━━━ ━━━━ x");
        assert_eq!(rows[5], "1 ━━━━━━━━━ o");
    }
}
