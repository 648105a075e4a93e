//! Coin tossing and line classification.
//!
//! Each line of a hexagram comes from three coins. A Back face counts 2
//! points and a Front face 3, so the sum is always 6, 7, 8 or 9 and maps to
//! exactly one of the four line types.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One face of a tossed coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    /// The back (tails) face, worth 2 points.
    Back,
    /// The front (heads) face, worth 3 points.
    Front,
}

impl Coin {
    /// Points this face contributes to the line sum.
    pub fn points(self) -> u32 {
        match self {
            Self::Back => 2,
            Self::Front => 3,
        }
    }

    /// Toss a fair coin.
    pub fn toss<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Front
        } else {
            Self::Back
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Back => write!(f, "back"),
            Self::Front => write!(f, "front"),
        }
    }
}

/// The classification of a single hexagram line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    /// Stable broken line (sum 8).
    YoungYin,
    /// Stable solid line (sum 7).
    YoungYang,
    /// Moving broken line (sum 6), becomes Yang when changed.
    OldYin,
    /// Moving solid line (sum 9), becomes Yin when changed.
    OldYang,
}

impl LineType {
    /// Classify a three-coin sum.
    pub fn from_sum(sum: u32) -> EngineResult<Self> {
        match sum {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(EngineError::ImpossibleCoinSum(other)),
        }
    }

    /// The coin sum this line type stands for.
    pub fn sum(self) -> u32 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Whether the line is solid.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Whether the line inverts in the changed hexagram.
    pub fn is_moving(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// Polarity of the line in the changed hexagram.
    pub fn is_yang_after_change(self) -> bool {
        self.is_yang() != self.is_moving()
    }

    /// All line types, ordered by coin sum.
    pub fn all() -> &'static [Self] {
        &[Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang]
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YoungYin => write!(f, "Young Yin"),
            Self::YoungYang => write!(f, "Young Yang"),
            Self::OldYin => write!(f, "Old Yin"),
            Self::OldYang => write!(f, "Old Yang"),
        }
    }
}

/// The outcome of tossing three coins for one line.
///
/// Deserialization rebuilds the line from its coins and rejects records whose
/// stored `line` or `sum` disagree with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredCast")]
pub struct CastResult {
    /// The three coin faces, in toss order.
    pub coins: [Coin; 3],
    /// The classified line.
    pub line: LineType,
    /// Sum of coin points (6..=9).
    pub sum: u32,
}

impl CastResult {
    /// Classify three known coin faces.
    ///
    /// # Panics
    ///
    /// Three coins worth 2 or 3 points always sum to 6..=9. Any other sum is
    /// a broken invariant and aborts rather than being coerced.
    pub fn from_coins(coins: [Coin; 3]) -> Self {
        let sum: u32 = coins.iter().map(|c| c.points()).sum();
        let line = match LineType::from_sum(sum) {
            Ok(line) => line,
            Err(err) => unreachable!("{err}"),
        };
        Self { coins, line, sum }
    }

    /// Build a line from a known type, using the canonical coin faces for
    /// its sum (fronts last).
    pub fn from_line(line: LineType) -> Self {
        let fronts = (line.sum() - 6) as usize;
        let coins = std::array::from_fn(|i| if i >= 3 - fronts { Coin::Front } else { Coin::Back });
        Self {
            coins,
            line,
            sum: line.sum(),
        }
    }

    /// Parse a line from its coin sum.
    pub fn from_sum(sum: u32) -> EngineResult<Self> {
        LineType::from_sum(sum).map(Self::from_line)
    }
}

/// A line record as stored, before validation.
#[derive(Deserialize)]
struct StoredCast {
    coins: [Coin; 3],
    line: LineType,
    sum: u32,
}

impl TryFrom<StoredCast> for CastResult {
    type Error = EngineError;

    fn try_from(stored: StoredCast) -> EngineResult<Self> {
        LineType::from_sum(stored.sum)?;
        let rebuilt = Self::from_coins(stored.coins);
        if rebuilt.sum != stored.sum || rebuilt.line != stored.line {
            return Err(EngineError::InconsistentLine {
                line: stored.line,
                sum: stored.sum,
            });
        }
        Ok(rebuilt)
    }
}

impl std::fmt::Display for CastResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.coins.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}] = {} ({})", faces.join(", "), self.sum, self.line)
    }
}

/// Toss three coins and classify the resulting line.
pub fn cast<R: Rng + ?Sized>(rng: &mut R) -> CastResult {
    let coins = std::array::from_fn(|_| Coin::toss(rng));
    CastResult::from_coins(coins)
}
