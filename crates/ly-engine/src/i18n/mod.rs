//! Localized names and report fragments.
//!
//! Every string the report uses comes from a per-language [`Catalog`].
//! Lookups by raw id never fail: an id outside the tables yields the
//! catalog's "unknown" label.

pub mod catalog;
pub mod names;

pub use catalog::Catalog;
pub use names::{TrigramText, king_wen_number};

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementRelation, SixRelation};
use crate::error::{EngineError, EngineResult};
use crate::palace::Lineage;
use crate::trigram::Trigram;

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Simplified Chinese (`zh-CN`).
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// Traditional Chinese (`zh-TW`).
    #[serde(rename = "zh-TW")]
    ZhTw,
    /// English (`en`).
    #[serde(rename = "en")]
    En,
    /// Japanese (`ja`).
    #[serde(rename = "ja")]
    Ja,
}

impl Language {
    /// Parse a locale tag such as `en`, `en-US`, `zh-TW` or `ja_JP`.
    pub fn parse(tag: &str) -> EngineResult<Self> {
        let normalized = tag.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "zh-cn" | "zh-hans" | "zh-sg" | "zh" => Ok(Self::ZhCn),
            "zh-tw" | "zh-hant" | "zh-hk" | "zh-mo" => Ok(Self::ZhTw),
            "ja" | "ja-jp" => Ok(Self::Ja),
            other if other == "en" || other.starts_with("en-") => Ok(Self::En),
            _ => Err(EngineError::UnknownLanguage(tag.to_string())),
        }
    }

    /// The canonical locale tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// All supported languages.
    pub fn all() -> &'static [Self] {
        &[Self::ZhCn, Self::ZhTw, Self::En, Self::Ja]
    }

    /// The string catalog for this language.
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Self::ZhCn => &catalog::ZH_CN,
            Self::ZhTw => &catalog::ZH_TW,
            Self::En => &catalog::EN,
            Self::Ja => &catalog::JA,
        }
    }

    /// Column of this language in the name tables.
    fn column(self) -> usize {
        match self {
            Self::ZhCn => 0,
            Self::ZhTw => 1,
            Self::En => 2,
            Self::Ja => 3,
        }
    }

    /// Display name of a hexagram id (`upper << 3 | lower`).
    pub fn hexagram_name(self, id: u8) -> &'static str {
        king_wen_number(id)
            .and_then(|n| names::HEXAGRAM_NAMES.get(usize::from(n) - 1))
            .map_or(self.catalog().unknown, |row| row[self.column()])
    }

    /// Display name of a trigram by raw index.
    pub fn trigram_name(self, index: u8) -> &'static str {
        Trigram::from_index(index).map_or(self.catalog().unknown, |t| self.trigram(t).name)
    }

    /// Name, image and quality of a trigram.
    pub fn trigram(self, trigram: Trigram) -> &'static TrigramText {
        &names::TRIGRAM_TEXT[usize::from(trigram.index())][self.column()]
    }

    /// Localized element name.
    pub fn element(self, element: Element) -> &'static str {
        self.catalog().element(element)
    }

    /// Localized Six-Relation label.
    pub fn relation(self, relation: SixRelation) -> &'static str {
        self.catalog().relation(relation)
    }

    /// Localized lineage label.
    pub fn lineage(self, lineage: Lineage) -> &'static str {
        self.catalog().lineage(lineage)
    }

    /// Localized Shi-versus-Ying statement.
    pub fn contradiction(self, relation: ElementRelation) -> &'static str {
        self.catalog().contradiction(relation)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::parse(lang.tag()), Ok(*lang));
            assert_eq!(lang.to_string().parse::<Language>(), Ok(*lang));
        }
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Language::parse("en-US"), Ok(Language::En));
        assert_eq!(Language::parse("ZH_tw"), Ok(Language::ZhTw));
        assert_eq!(Language::parse("ja-JP"), Ok(Language::Ja));
        assert_eq!(Language::parse("zh"), Ok(Language::ZhCn));
        assert!(Language::parse("fr").is_err());
    }

    #[test]
    fn serde_uses_tags() {
        let json = serde_json::to_string(&Language::ZhTw).unwrap();
        assert_eq!(json, "\"zh-TW\"");
        let back: Language = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(back, Language::Ja);
    }

    #[test]
    fn hexagram_names() {
        assert_eq!(Language::En.hexagram_name(63), "The Creative");
        assert_eq!(Language::ZhCn.hexagram_name(0), "坤为地");
        assert_eq!(Language::ZhTw.hexagram_name(0b101_111), "火天大有");
        assert_eq!(Language::Ja.hexagram_name(0b010_101), "水火既済");
    }

    #[test]
    fn unmapped_lookups_degrade_to_unknown() {
        assert_eq!(Language::En.hexagram_name(64), "Unknown");
        assert_eq!(Language::ZhCn.hexagram_name(200), "未知");
        assert_eq!(Language::Ja.trigram_name(8), "不明");
    }

    #[test]
    fn every_lookup_is_populated() {
        for lang in Language::all() {
            for id in 0..64 {
                assert!(!lang.hexagram_name(id).is_empty());
                assert_ne!(lang.hexagram_name(id), lang.catalog().unknown);
            }
            for t in Trigram::all() {
                let text = lang.trigram(*t);
                assert!(!text.name.is_empty() && !text.image.is_empty());
            }
        }
    }
}
