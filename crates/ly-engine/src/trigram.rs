//! The eight trigrams.
//!
//! A trigram index packs three lines with the bottom line in the least
//! significant bit, so Kun (three broken lines) is 0 and Qian (three solid
//! lines) is 7.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{EngineError, EngineResult};

/// One of the eight trigrams, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trigram {
    /// ☷ Earth, index 0 (000).
    Kun,
    /// ☳ Thunder, index 1 (bottom line solid).
    Zhen,
    /// ☵ Water, index 2 (middle line solid).
    Kan,
    /// ☱ Lake, index 3 (top line broken).
    Dui,
    /// ☶ Mountain, index 4 (top line solid).
    Gen,
    /// ☲ Fire, index 5 (middle line broken).
    Li,
    /// ☴ Wind, index 6 (bottom line broken).
    Xun,
    /// ☰ Heaven, index 7 (111).
    Qian,
}

const BY_INDEX: [Trigram; 8] = [
    Trigram::Kun,
    Trigram::Zhen,
    Trigram::Kan,
    Trigram::Dui,
    Trigram::Gen,
    Trigram::Li,
    Trigram::Xun,
    Trigram::Qian,
];

impl Trigram {
    /// Look up a trigram by its 3-bit index.
    pub fn from_index(index: u8) -> EngineResult<Self> {
        BY_INDEX
            .get(usize::from(index))
            .copied()
            .ok_or(EngineError::TrigramOutOfRange(index))
    }

    /// Build a trigram from three lines, bottom first.
    pub fn from_lines(bottom: bool, middle: bool, top: bool) -> Self {
        let index = u8::from(bottom) | (u8::from(middle) << 1) | (u8::from(top) << 2);
        BY_INDEX[usize::from(index)]
    }

    /// The 3-bit index of this trigram.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The three lines, bottom first, `true` for Yang.
    pub fn lines(self) -> [bool; 3] {
        let i = self.index();
        [i & 1 == 1, i & 2 == 2, i & 4 == 4]
    }

    /// The trigram's element.
    pub fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }

    /// The Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Kun => '☷',
        }
    }

    /// All trigrams in index order.
    pub fn all() -> &'static [Self] {
        &BY_INDEX
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kun => write!(f, "Kun"),
            Self::Zhen => write!(f, "Zhen"),
            Self::Kan => write!(f, "Kan"),
            Self::Dui => write!(f, "Dui"),
            Self::Gen => write!(f, "Gen"),
            Self::Li => write!(f, "Li"),
            Self::Xun => write!(f, "Xun"),
            Self::Qian => write!(f, "Qian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for i in 0..8u8 {
            let t = Trigram::from_index(i).unwrap();
            assert_eq!(t.index(), i);
        }
        assert_eq!(
            Trigram::from_index(8),
            Err(EngineError::TrigramOutOfRange(8))
        );
    }

    #[test]
    fn lines_round_trip() {
        for t in Trigram::all() {
            let [b, m, top] = t.lines();
            assert_eq!(Trigram::from_lines(b, m, top), *t);
        }
    }

    #[test]
    fn bottom_line_is_least_significant() {
        assert_eq!(Trigram::from_lines(true, false, false), Trigram::Zhen);
        assert_eq!(Trigram::from_lines(false, false, true), Trigram::Gen);
        assert_eq!(Trigram::from_lines(true, true, false), Trigram::Dui);
        assert_eq!(Trigram::from_lines(false, true, true), Trigram::Xun);
    }

    #[test]
    fn elements() {
        assert_eq!(Trigram::Qian.element(), Element::Metal);
        assert_eq!(Trigram::Kun.element(), Element::Earth);
        assert_eq!(Trigram::Li.element(), Element::Fire);
        assert_eq!(Trigram::Kan.element(), Element::Water);
        assert_eq!(Trigram::Zhen.element(), Element::Wood);
    }

    #[test]
    fn display_and_symbol() {
        assert_eq!(Trigram::Qian.to_string(), "Qian");
        assert_eq!(Trigram::Kun.symbol(), '☷');
    }
}
