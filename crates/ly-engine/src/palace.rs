//! Palace resolution.
//!
//! Every hexagram belongs to one of eight palaces, each headed by a pure
//! hexagram. The lineage is found by flipping lines of the cast pattern one at
//! a time, bottom up, until the pattern turns pure. The step at which that
//! happens fixes the Shi (subject) and Ying (object) lines.
//!
//! | lineage   | flips from the cast pattern | shi | ying |
//! |-----------|-----------------------------|-----|------|
//! | Pure      | none                        | 5   | 2    |
//! | Gen1      | 0                           | 0   | 3    |
//! | Gen2      | 0 1                         | 1   | 4    |
//! | Gen3      | 0 1 2                       | 2   | 5    |
//! | Gen4      | 0 1 2 3                     | 3   | 0    |
//! | Gen5      | 0 1 2 3 4                   | 4   | 1    |
//! | Wandering | 0 1 2 3 4 3                 | 3   | 0    |
//! | Returning | none; upper trigram doubled | 2   | 5    |
//!
//! Returning hexagrams cannot be reached by flipping. Their lower trigram is
//! the upper one with the middle line inverted, and the palace is named after
//! the upper trigram.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::element::Element;
use crate::error::{EngineError, EngineResult};
use crate::hexagram::LineBits;
use crate::trigram::Trigram;

/// The eight palace lineages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lineage {
    /// The pure hexagram heading the palace.
    Pure,
    /// First generation: one flip from pure.
    Gen1,
    /// Second generation.
    Gen2,
    /// Third generation.
    Gen3,
    /// Fourth generation.
    Gen4,
    /// Fifth generation.
    Gen5,
    /// Wandering soul: the fifth generation with line 3 restored.
    Wandering,
    /// Returning soul: lower trigram is the upper with its middle line inverted.
    Returning,
}

/// How the pure hexagram of a lineage is rebuilt from the cast pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PureConstruction {
    /// Flip these lines of the cast pattern, in order.
    Flips(&'static [usize]),
    /// Copy the cast pattern's upper trigram into both halves.
    MirrorUpper,
}

impl PureConstruction {
    /// Apply the construction to a cast pattern.
    pub fn apply(self, cast: LineBits) -> LineBits {
        match self {
            Self::Flips(lines) => lines.iter().fold(cast, |bits, line| bits.flip(*line)),
            Self::MirrorUpper => LineBits::from_trigrams(cast.upper(), cast.upper()),
        }
    }
}

/// Flip order tried after the purity check fails; each step keeps the
/// previous flips.
const CASCADE: [(Lineage, usize); 6] = [
    (Lineage::Gen1, 0),
    (Lineage::Gen2, 1),
    (Lineage::Gen3, 2),
    (Lineage::Gen4, 3),
    (Lineage::Gen5, 4),
    (Lineage::Wandering, 3),
];

/// XOR of lower and upper trigram indices in a Returning hexagram.
const RETURNING_OFFSET: u8 = 0b010;

impl Lineage {
    /// All lineages in palace order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Pure,
            Self::Gen1,
            Self::Gen2,
            Self::Gen3,
            Self::Gen4,
            Self::Gen5,
            Self::Wandering,
            Self::Returning,
        ]
    }

    /// Shi and Ying line indices, bottom = 0.
    pub fn shi_ying(self) -> (usize, usize) {
        match self {
            Self::Pure => (5, 2),
            Self::Gen1 => (0, 3),
            Self::Gen2 => (1, 4),
            Self::Gen3 | Self::Returning => (2, 5),
            Self::Gen4 | Self::Wandering => (3, 0),
            Self::Gen5 => (4, 1),
        }
    }

    /// How to rebuild this lineage's pure hexagram.
    pub fn construction(self) -> PureConstruction {
        match self {
            Self::Pure => PureConstruction::Flips(&[]),
            Self::Gen1 => PureConstruction::Flips(&[0]),
            Self::Gen2 => PureConstruction::Flips(&[0, 1]),
            Self::Gen3 => PureConstruction::Flips(&[0, 1, 2]),
            Self::Gen4 => PureConstruction::Flips(&[0, 1, 2, 3]),
            Self::Gen5 => PureConstruction::Flips(&[0, 1, 2, 3, 4]),
            Self::Wandering => PureConstruction::Flips(&[0, 1, 2, 3, 4, 3]),
            Self::Returning => PureConstruction::MirrorUpper,
        }
    }

    /// The pure hexagram heading the palace of `cast`, assuming `cast`
    /// belongs to this lineage.
    pub fn pure_hexagram(self, cast: LineBits) -> LineBits {
        self.construction().apply(cast)
    }
}

impl std::fmt::Display for Lineage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pure => write!(f, "Pure"),
            Self::Gen1 => write!(f, "1st Generation"),
            Self::Gen2 => write!(f, "2nd Generation"),
            Self::Gen3 => write!(f, "3rd Generation"),
            Self::Gen4 => write!(f, "4th Generation"),
            Self::Gen5 => write!(f, "5th Generation"),
            Self::Wandering => write!(f, "Wandering Soul"),
            Self::Returning => write!(f, "Returning Soul"),
        }
    }
}

/// Where a hexagram sits among the palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceResolution {
    /// The lineage branch that matched.
    pub lineage: Lineage,
    /// Upper trigram of the pure hexagram heading the palace.
    pub palace: Trigram,
    /// Subject line index.
    pub shi: usize,
    /// Object line index.
    pub ying: usize,
}

impl PalaceResolution {
    fn new(bits: LineBits, lineage: Lineage, palace: Trigram) -> Self {
        let (shi, ying) = lineage.shi_ying();
        debug!(%bits, %lineage, %palace, shi, ying, "resolved palace");
        Self {
            lineage,
            palace,
            shi,
            ying,
        }
    }

    /// The palace's element.
    pub fn element(&self) -> Element {
        self.palace.element()
    }
}

/// Resolve the palace lineage of a line pattern.
///
/// Exactly one lineage matches each of the 64 patterns. The error is a defect
/// signal that no valid input produces.
pub fn resolve_palace(bits: LineBits) -> EngineResult<PalaceResolution> {
    if bits.is_pure() {
        return Ok(PalaceResolution::new(bits, Lineage::Pure, bits.upper()));
    }

    let mut state = bits;
    for (lineage, line) in CASCADE {
        state = state.flip(line);
        if state.is_pure() {
            return Ok(PalaceResolution::new(bits, lineage, state.upper()));
        }
    }

    if bits.lower().index() ^ bits.upper().index() == RETURNING_OFFSET {
        return Ok(PalaceResolution::new(
            bits,
            Lineage::Returning,
            bits.upper(),
        ));
    }

    Err(EngineError::UnresolvedPalace { bits: bits.value() })
}

/// The eight hexagrams of a palace, in lineage order.
pub fn palace_family(palace: Trigram) -> EngineResult<Vec<(LineBits, Lineage)>> {
    let mut family = Vec::with_capacity(8);
    for bits in LineBits::all() {
        let resolution = resolve_palace(bits)?;
        if resolution.palace == palace {
            family.push((bits, resolution.lineage));
        }
    }
    family.sort_by_key(|(_, lineage)| Lineage::all().iter().position(|l| l == lineage));
    Ok(family)
}
