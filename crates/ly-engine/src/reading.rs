//! Diagnosis and report composition.
//!
//! [`Diagnosis`] gathers every fact the report needs: both hexagrams, the
//! palace, the Shi and Ying lines with their elements and Six-Relations, and
//! whether anything moves. [`Reading`] renders those facts in one language.
//! Composition does no analysis of its own.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::element::{Element, ElementRelation, SixRelation};
use crate::error::EngineResult;
use crate::hexagram::{Hexagram, Structure};
use crate::i18n::{Language, king_wen_number};
use crate::palace::{PalaceResolution, resolve_palace};

/// Element and role of a designated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRole {
    /// Line index, bottom = 0.
    pub index: usize,
    /// Element of the trigram holding the line.
    pub element: Element,
    /// Relation of that element to the palace element.
    pub relation: SixRelation,
}

impl LineRole {
    /// Attribute a line of the cast hexagram.
    ///
    /// Lines take the element of their own trigram in the cast hexagram:
    /// the lower trigram for lines 0..=2, the upper for 3..=5.
    fn attribute(index: usize, original: &Structure, palace: Element) -> Self {
        let trigram = if index < 3 {
            original.lower
        } else {
            original.upper
        };
        let element = trigram.element();
        Self {
            index,
            element,
            relation: SixRelation::classify(element, palace),
        }
    }
}

/// The language-independent facts of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Structure of the hexagram as cast.
    pub original: Structure,
    /// Structure after every moving line has inverted.
    pub changed: Structure,
    /// Palace lineage, palace trigram and Shi/Ying positions.
    pub palace: PalaceResolution,
    /// Element of the palace.
    pub palace_element: Element,
    /// The Shi (subject) line.
    pub shi: LineRole,
    /// The Ying (object) line.
    pub ying: LineRole,
    /// How the Shi element stands towards the Ying element.
    pub shi_ying: ElementRelation,
    /// Indices of moving lines, bottom first.
    pub moving_lines: Vec<usize>,
    /// `true` when the changed hexagram equals the original.
    pub stable: bool,
}

impl Diagnosis {
    /// Analyze a complete hexagram.
    pub fn of(hexagram: &Hexagram) -> EngineResult<Self> {
        let original = hexagram.structure();
        let changed = hexagram.changed_structure();
        let palace = resolve_palace(original.bits)?;
        let palace_element = palace.element();

        let shi = LineRole::attribute(palace.shi, &original, palace_element);
        let ying = LineRole::attribute(palace.ying, &original, palace_element);
        let shi_ying = shi.element.relation_to(ying.element);
        let stable = changed.id() == original.id();

        debug!(
            original = original.id(),
            changed = changed.id(),
            lineage = %palace.lineage,
            shi = %shi.relation,
            ying = %ying.relation,
            stable,
            "diagnosed hexagram"
        );

        Ok(Self {
            original,
            changed,
            palace,
            palace_element,
            shi,
            ying,
            shi_ying,
            moving_lines: hexagram.moving_lines(),
            stable,
        })
    }

    /// Id of the hexagram as cast (`upper << 3 | lower`).
    pub fn original_id(&self) -> u8 {
        self.original.id()
    }

    /// Id of the changed hexagram.
    pub fn changed_id(&self) -> u8 {
        self.changed.id()
    }
}

/// The five report sections, already localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    /// Name and trigram images of the cast hexagram.
    pub status: String,
    /// Palace and Shi/Ying lines.
    pub diagnosis: String,
    /// Shi-versus-Ying statement.
    pub contradiction: String,
    /// Changed hexagram or stability note.
    pub future: String,
    /// Advice keyed by the Shi line's relation.
    pub advice: String,
}

/// A diagnosis rendered in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Language of every text field.
    pub language: Language,
    /// The underlying facts.
    pub diagnosis: Diagnosis,
    /// King Wen number of the cast hexagram.
    pub original_number: Option<u8>,
    /// King Wen number of the changed hexagram.
    pub changed_number: Option<u8>,
    /// Name of the cast hexagram.
    pub original_name: String,
    /// Name of the changed hexagram.
    pub changed_name: String,
    /// Name of the palace.
    pub palace_name: String,
    /// The composed sections.
    pub sections: Sections,
}

impl Reading {
    /// Analyze a hexagram and compose its report.
    pub fn of(hexagram: &Hexagram, language: Language) -> EngineResult<Self> {
        Diagnosis::of(hexagram).map(|d| Self::compose(d, language))
    }

    /// Render an existing diagnosis.
    pub fn compose(diagnosis: Diagnosis, language: Language) -> Self {
        let text = language.catalog();
        let d = &diagnosis;

        let original_name = language.hexagram_name(d.original_id());
        let changed_name = language.hexagram_name(d.changed_id());
        let palace_name = language.trigram(d.palace.palace).name;

        let upper = language.trigram(d.original.upper);
        let lower = language.trigram(d.original.lower);
        let image = text
            .image
            .replace("{upper}", upper.image)
            .replace("{lower}", lower.image);
        let quality = text
            .quality
            .replace("{upper}", upper.quality)
            .replace("{lower}", lower.quality);
        let status = text
            .status
            .replace("{name}", original_name)
            .replace("{image}", &image)
            .replace("{quality}", &quality);

        let role_line = |label: &str, role: &LineRole| {
            format!(
                "- **{label}**: {} [{}] -> {}",
                text.line(role.index),
                language.element(role.element),
                language.relation(role.relation),
            )
        };
        let diagnosis_text = [
            format!(
                "- **{}**: {palace_name} ({}), {}",
                text.lbl_palace,
                language.element(d.palace_element),
                language.lineage(d.palace.lineage),
            ),
            role_line(text.lbl_subject, &d.shi),
            role_line(text.lbl_object, &d.ying),
        ]
        .join("\n");

        let future = if d.stable {
            text.future_stable.to_string()
        } else {
            text.future_changed.replace("{name}", changed_name)
        };

        let sections = Sections {
            status,
            diagnosis: diagnosis_text,
            contradiction: language.contradiction(d.shi_ying).to_string(),
            future,
            advice: text.advice(d.shi.relation).to_string(),
        };

        Self {
            language,
            original_number: king_wen_number(d.original_id()),
            changed_number: king_wen_number(d.changed_id()),
            original_name: original_name.to_string(),
            changed_name: changed_name.to_string(),
            palace_name: palace_name.to_string(),
            sections,
            diagnosis,
        }
    }

    fn titled_sections(&self) -> [(&'static str, &str); 5] {
        let text = self.language.catalog();
        [
            (text.sec_status, self.sections.status.as_str()),
            (text.sec_diagnosis, self.sections.diagnosis.as_str()),
            (text.sec_contradiction, self.sections.contradiction.as_str()),
            (text.sec_future, self.sections.future.as_str()),
            (text.sec_advice, self.sections.advice.as_str()),
        ]
    }

    /// The report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.language.catalog().title);
        for (heading, body) in self.titled_sections() {
            out.push_str(&format!("\n### {heading}\n{body}\n"));
        }
        out
    }

    /// The report as plain text, without markdown markup.
    pub fn to_plain_text(&self) -> String {
        let title = self.language.catalog().title;
        let mut out = format!("{title}\n{}\n", "=".repeat(title.chars().count().max(8)));
        for (heading, body) in self.titled_sections() {
            out.push_str(&format!("\n{heading}\n"));
            for line in body.lines() {
                let line = line.trim_start_matches("- ").replace("**", "");
                out.push_str(&format!("  {line}\n"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::Lineage;
    use crate::trigram::Trigram;

    fn hex(sums: [u32; 6]) -> Hexagram {
        Hexagram::from_sums(&sums).unwrap()
    }

    #[test]
    fn standstill_diagnosis() {
        // Heaven over Earth, top line moving.
        let d = Diagnosis::of(&hex([8, 8, 8, 7, 7, 9])).unwrap();
        assert_eq!(d.original.lower, Trigram::Kun);
        assert_eq!(d.original.upper, Trigram::Qian);
        assert_eq!(d.palace.lineage, Lineage::Gen3);
        assert_eq!(d.palace.palace, Trigram::Qian);
        assert_eq!(d.palace_element, Element::Metal);

        assert_eq!(d.shi.index, 2);
        assert_eq!(d.shi.element, Element::Earth);
        assert_eq!(d.shi.relation, SixRelation::Offspring);
        assert_eq!(d.ying.index, 5);
        assert_eq!(d.ying.element, Element::Metal);
        assert_eq!(d.ying.relation, SixRelation::Brother);
        assert_eq!(d.shi_ying, ElementRelation::Generate);

        assert_eq!(d.changed.upper, Trigram::Dui);
        assert_eq!(d.moving_lines, vec![5]);
        assert!(!d.stable);
    }

    #[test]
    fn no_moving_lines_is_stable() {
        let d = Diagnosis::of(&hex([7, 8, 7, 8, 7, 8])).unwrap();
        assert!(d.stable);
        assert!(d.moving_lines.is_empty());
        assert_eq!(d.changed_id(), d.original_id());

        let r = Reading::compose(d, Language::En);
        assert_eq!(r.sections.future, "No moving lines. The situation is stable.");
        assert_eq!(r.changed_name, r.original_name);
    }

    #[test]
    fn all_moving_lines_invert_everything() {
        let d = Diagnosis::of(&hex([9; 6])).unwrap();
        assert_eq!(d.original_id(), 63);
        assert_eq!(d.changed_id(), 0);
        assert_eq!(d.moving_lines.len(), 6);
    }

    #[test]
    fn every_pattern_diagnoses() {
        for id in 0..64u32 {
            let sums: Vec<u32> = (0..6).map(|i| if (id >> i) & 1 == 1 { 7 } else { 8 }).collect();
            let h = Hexagram::from_sums(&sums).unwrap();
            let d = Diagnosis::of(&h).unwrap();
            assert_eq!(u32::from(d.original_id()), id);
            assert_ne!(d.shi.index, d.ying.index);
            assert_eq!(
                d.shi.relation,
                SixRelation::classify(d.shi.element, d.palace_element)
            );
        }
    }

    #[test]
    fn returning_soul_uses_upper_trigram_palace() {
        // Fire over Heaven.
        let d = Diagnosis::of(&hex([7, 7, 7, 7, 8, 7])).unwrap();
        assert_eq!(d.palace.lineage, Lineage::Returning);
        assert_eq!(d.palace_element, Element::Fire);
        // Shi sits in the lower (Metal) trigram; Fire overcomes Metal.
        assert_eq!(d.shi.element, Element::Metal);
        assert_eq!(d.shi.relation, SixRelation::Official);
        assert_eq!(d.ying.relation, SixRelation::Brother);
    }

    #[test]
    fn english_markdown_report() {
        let r = Reading::of(&hex([8, 8, 8, 7, 7, 9]), Language::En).unwrap();
        assert_eq!(r.original_number, Some(12));
        assert_eq!(r.changed_number, Some(45));
        insta::assert_snapshot!(r.to_markdown(), @r"
        # Hexagram Reading

        ### Current Status
        Standstill. Heaven over Earth.
        Inner receptive, outer strong.

        ### Six Relations Diagnosis
        - **Palace**: Qian (Metal), 3rd Generation
        - **Subject (Shi)**: Line 3 [Earth] -> Offspring
        - **Object (Ying)**: Line 6 [Metal] -> Brother

        ### Main Contradiction
        Subject supports Object. You are investing effort.

        ### Future Trend
        Gathering Together. The situation evolves to this state.

        ### Advice
        A relaxed mood; good for rest, poor for seeking rank.
        ");
    }

    #[test]
    fn chinese_sections() {
        let r = Reading::of(&hex([8, 8, 8, 7, 7, 9]), Language::ZhCn).unwrap();
        assert_eq!(r.original_name, "天地否");
        assert_eq!(r.changed_name, "泽地萃");
        assert_eq!(r.palace_name, "乾");
        assert_eq!(r.sections.status, "天地否。上天下地。\n外健而内顺。");
        assert!(r.sections.diagnosis.contains("第3爻 [土] -> 子孙"));
        assert_eq!(r.sections.future, "泽地萃。卦象变至此。");
        assert!(r.to_markdown().contains("### 【行动建议】"));
    }

    #[test]
    fn every_language_fills_every_section() {
        let h = hex([6, 7, 9, 8, 7, 6]);
        for lang in Language::all() {
            let r = Reading::of(&h, *lang).unwrap();
            for (_, body) in r.titled_sections() {
                assert!(!body.is_empty(), "{lang}");
                assert!(!body.contains('{'), "{lang}: {body}");
            }
        }
    }

    #[test]
    fn plain_text_strips_markdown_bullets() {
        let r = Reading::of(&hex([8, 8, 8, 7, 7, 9]), Language::En).unwrap();
        let plain = r.to_plain_text();
        assert!(plain.starts_with("Hexagram Reading\n================\n"));
        assert!(plain.contains("\n  Palace: Qian (Metal), 3rd Generation\n"));
        assert!(plain.contains("\n  Subject (Shi): Line 3 [Earth] -> Offspring\n"));
        assert!(!plain.contains("**") && !plain.contains("###"));
    }

    #[test]
    fn reading_serializes() {
        let r = Reading::of(&hex([8, 8, 8, 7, 7, 9]), Language::Ja).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
