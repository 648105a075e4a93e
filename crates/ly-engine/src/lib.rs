//! Liu-Yao six-line divination engine.
//!
//! Casts lines with three simulated coins, resolves the resulting hexagram
//! into its trigrams and palace, classifies the Shi and Ying lines by the
//! five elements, and composes a localized report.
//!
//! ```
//! use ly_engine::{Hexagram, Language, Reading};
//!
//! let hexagram = Hexagram::from_sums(&[8, 8, 8, 7, 7, 9]).unwrap();
//! let reading = Reading::of(&hexagram, Language::En).unwrap();
//! assert_eq!(reading.original_name, "Standstill");
//! ```

pub mod coin;
pub mod element;
pub mod error;
pub mod hexagram;
pub mod i18n;
pub mod palace;
pub mod reading;
pub mod trigram;

pub use coin::{CastResult, Coin, LineType, cast};
pub use element::{Element, ElementRelation, SixRelation};
pub use error::{EngineError, EngineResult};
pub use hexagram::{Hexagram, LINE_COUNT, LineBits, Structure};
pub use i18n::{Catalog, Language, king_wen_number};
pub use palace::{Lineage, PalaceResolution, palace_family, resolve_palace};
pub use reading::{Diagnosis, LineRole, Reading, Sections};
pub use trigram::Trigram;
