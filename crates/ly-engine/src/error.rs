//! Error types for the divination engine.

use crate::coin::LineType;

/// Errors that can occur during engine operations.
///
/// `ImpossibleCoinSum` and `UnresolvedPalace` are defect signals: no
/// well-formed input reaches them, and tests assert as much over the full
/// input space. The remaining variants reject malformed input from callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A line value outside 6..=9 was supplied or produced.
    #[error("impossible coin sum: {0} (expected 6, 7, 8 or 9)")]
    ImpossibleCoinSum(u32),

    /// A stored line whose type or sum disagrees with its coins.
    #[error("line {line} with sum {sum} disagrees with its coins")]
    InconsistentLine {
        /// The stored line type.
        line: LineType,
        /// The stored sum.
        sum: u32,
    },

    /// A line pattern matched none of the eight palace lineages.
    #[error("no palace lineage matches line pattern {bits:06b}")]
    UnresolvedPalace {
        /// The offending pattern, line 0 in bit 0.
        bits: u8,
    },

    /// A hexagram was built from the wrong number of lines.
    #[error("a hexagram needs exactly 6 lines, got {0}")]
    IncompleteHexagram(usize),

    /// A line pattern had bits set above the sixth line.
    #[error("line pattern {0:#x} does not fit in six lines")]
    PatternOutOfRange(u8),

    /// A trigram index outside 0..=7.
    #[error("trigram index {0} out of range")]
    TrigramOutOfRange(u8),

    /// A language tag that no catalog exists for.
    #[error("unsupported language tag: {0}")]
    UnknownLanguage(String),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
