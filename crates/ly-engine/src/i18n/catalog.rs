//! Report fragments for each language.
//!
//! Templates use `{name}`, `{n}`, `{upper}`, `{lower}`, `{image}` and `{quality}`
//! placeholders.

use crate::element::{Element, ElementRelation, SixRelation};
use crate::palace::Lineage;

/// All text fragments needed to compose a report in one language.
#[derive(Debug)]
pub struct Catalog {
    /// Report title.
    pub title: &'static str,
    /// Heading of the current-status section.
    pub sec_status: &'static str,
    /// Heading of the Six-Relations diagnosis section.
    pub sec_diagnosis: &'static str,
    /// Heading of the Shi-versus-Ying section.
    pub sec_contradiction: &'static str,
    /// Heading of the future-trend section.
    pub sec_future: &'static str,
    /// Heading of the advice section.
    pub sec_advice: &'static str,
    /// Label for the palace.
    pub lbl_palace: &'static str,
    /// Label for the Shi line.
    pub lbl_subject: &'static str,
    /// Label for the Ying line.
    pub lbl_object: &'static str,
    /// Line position label; `{n}` counts from 1 at the bottom.
    pub line_label: &'static str,
    /// Status paragraph; `{name}`, `{image}` and `{quality}` are filled in.
    pub status: &'static str,
    /// Image phrase for the status paragraph.
    pub image: &'static str,
    /// Quality phrase for the status paragraph.
    pub quality: &'static str,
    /// Future-trend sentence when lines move; `{name}` is the changed hexagram.
    pub future_changed: &'static str,
    /// Future-trend sentence when no line moves.
    pub future_stable: &'static str,
    /// Fallback for unmapped lookups.
    pub unknown: &'static str,
    elements: [&'static str; 5],
    relations: [&'static str; 5],
    lineages: [&'static str; 8],
    contradictions: [&'static str; 5],
    advice: [&'static str; 5],
}

impl Catalog {
    /// Element name, ordered Metal, Wood, Water, Fire, Earth.
    pub fn element(&self, element: Element) -> &'static str {
        let i = match element {
            Element::Metal => 0,
            Element::Wood => 1,
            Element::Water => 2,
            Element::Fire => 3,
            Element::Earth => 4,
        };
        self.elements[i]
    }

    /// Six-Relation label.
    pub fn relation(&self, relation: SixRelation) -> &'static str {
        self.relations[six_index(relation)]
    }

    /// Lineage label.
    pub fn lineage(&self, lineage: Lineage) -> &'static str {
        let i = match lineage {
            Lineage::Pure => 0,
            Lineage::Gen1 => 1,
            Lineage::Gen2 => 2,
            Lineage::Gen3 => 3,
            Lineage::Gen4 => 4,
            Lineage::Gen5 => 5,
            Lineage::Wandering => 6,
            Lineage::Returning => 7,
        };
        self.lineages[i]
    }

    /// Statement on how the Shi line stands towards the Ying line.
    pub fn contradiction(&self, relation: ElementRelation) -> &'static str {
        let i = match relation {
            ElementRelation::Same => 0,
            ElementRelation::Generate => 1,
            ElementRelation::GeneratedBy => 2,
            ElementRelation::Overcome => 3,
            ElementRelation::OvercomedBy => 4,
        };
        self.contradictions[i]
    }

    /// Advice keyed by the Shi line's Six-Relation.
    pub fn advice(&self, relation: SixRelation) -> &'static str {
        self.advice[six_index(relation)]
    }

    /// Fill the line label for a 0-based line index.
    pub fn line(&self, index: usize) -> String {
        self.line_label.replace("{n}", &(index + 1).to_string())
    }
}

fn six_index(relation: SixRelation) -> usize {
    match relation {
        SixRelation::Brother => 0,
        SixRelation::Parent => 1,
        SixRelation::Offspring => 2,
        SixRelation::Wealth => 3,
        SixRelation::Official => 4,
    }
}

/// Simplified Chinese.
pub static ZH_CN: Catalog = Catalog {
    title: "卦象解读",
    sec_status: "【当前状态】",
    sec_diagnosis: "【六亲诊断】",
    sec_contradiction: "【主要矛盾】",
    sec_future: "【未来趋势】",
    sec_advice: "【行动建议】",
    lbl_palace: "卦宫",
    lbl_subject: "世爻（自己）",
    lbl_object: "应爻（对方）",
    line_label: "第{n}爻",
    status: "{name}。{image}。\n{quality}。",
    image: "上{upper}下{lower}",
    quality: "外{upper}而内{lower}",
    future_changed: "{name}。卦象变至此。",
    future_stable: "无动爻，局势稳定，当以静制动。",
    unknown: "未知",
    elements: ["金", "木", "水", "火", "土"],
    relations: ["兄弟", "父母", "子孙", "妻财", "官鬼"],
    lineages: ["本宫", "一世", "二世", "三世", "四世", "五世", "游魂", "归魂"],
    contradictions: [
        "世应比和，谋事可成，利于合作。",
        "世爻生应爻。你去生彼，虽耗费心力，但主动在你。",
        "应爻生世爻。彼来生我，即使不动也有人相助，大吉。",
        "世爻克应爻。我克彼，你能掌控局势，利于进取。",
        "应爻克世爻。彼来克我，压力较大，事多阻滞。",
    ],
    advice: [
        "同类相助，亦防竞争分财。",
        "利于文书、长辈助力。",
        "心情舒畅，利于休养，忌求官。",
        "利于求财。",
        "注意压力与官非，或利于求名。",
    ],
};

/// Traditional Chinese.
pub static ZH_TW: Catalog = Catalog {
    title: "卦象解讀",
    sec_status: "【當前狀態】",
    sec_diagnosis: "【六親診斷】",
    sec_contradiction: "【主要矛盾】",
    sec_future: "【未來趨勢】",
    sec_advice: "【行動建議】",
    lbl_palace: "卦宮",
    lbl_subject: "世爻（自己）",
    lbl_object: "應爻（對方）",
    line_label: "第{n}爻",
    status: "{name}。{image}。\n{quality}。",
    image: "上{upper}下{lower}",
    quality: "外{upper}而內{lower}",
    future_changed: "{name}。卦象變至此。",
    future_stable: "無動爻，局勢穩定，當以靜制動。",
    unknown: "未知",
    elements: ["金", "木", "水", "火", "土"],
    relations: ["兄弟", "父母", "子孫", "妻財", "官鬼"],
    lineages: ["本宮", "一世", "二世", "三世", "四世", "五世", "遊魂", "歸魂"],
    contradictions: [
        "世應比和，謀事可成，利於合作。",
        "世爻生應爻。你去生彼，雖耗費心力，但主動在你。",
        "應爻生世爻。彼來生我，即使不動也有人相助，大吉。",
        "世爻剋應爻。我剋彼，你能掌控局勢，利於進取。",
        "應爻剋世爻。彼來剋我，壓力較大，事多阻滯。",
    ],
    advice: [
        "同類相助，亦防競爭分財。",
        "利於文書、長輩助力。",
        "心情舒暢，利於休養，忌求官。",
        "利於求財。",
        "注意壓力與官非，或利於求名。",
    ],
};

/// English.
pub static EN: Catalog = Catalog {
    title: "Hexagram Reading",
    sec_status: "Current Status",
    sec_diagnosis: "Six Relations Diagnosis",
    sec_contradiction: "Main Contradiction",
    sec_future: "Future Trend",
    sec_advice: "Advice",
    lbl_palace: "Palace",
    lbl_subject: "Subject (Shi)",
    lbl_object: "Object (Ying)",
    line_label: "Line {n}",
    status: "{name}. {image}.\n{quality}.",
    image: "{upper} over {lower}",
    quality: "Inner {lower}, outer {upper}",
    future_changed: "{name}. The situation evolves to this state.",
    future_stable: "No moving lines. The situation is stable.",
    unknown: "Unknown",
    elements: ["Metal", "Wood", "Water", "Fire", "Earth"],
    relations: ["Brother", "Parent", "Offspring", "Wealth", "Official"],
    lineages: [
        "Pure",
        "1st Generation",
        "2nd Generation",
        "3rd Generation",
        "4th Generation",
        "5th Generation",
        "Wandering Soul",
        "Returning Soul",
    ],
    contradictions: [
        "Subject and Object are in harmony (Brother). Collaboration.",
        "Subject supports Object. You are investing effort.",
        "Object supports Subject. You receive help.",
        "Subject controls Object. You have the upper hand.",
        "Object controls Subject. Pressure from the environment.",
    ],
    advice: [
        "Peers can help, but watch for competition over resources.",
        "Seek guidance or study.",
        "A relaxed mood; good for rest, poor for seeking rank.",
        "Good for financial gain.",
        "Be careful of stress or authority.",
    ],
};

/// Japanese.
pub static JA: Catalog = Catalog {
    title: "卦象の解読",
    sec_status: "【現状】",
    sec_diagnosis: "【六親診断】",
    sec_contradiction: "【主な矛盾】",
    sec_future: "【今後の傾向】",
    sec_advice: "【助言】",
    lbl_palace: "卦宮",
    lbl_subject: "世爻（自分）",
    lbl_object: "応爻（相手）",
    line_label: "第{n}爻",
    status: "{name}。{image}。\n{quality}。",
    image: "上{upper}下{lower}",
    quality: "外は{upper}、内は{lower}",
    future_changed: "{name}。卦はこの形へ変わります。",
    future_stable: "動爻なし。情勢は安定しており、静をもって動を制すべし。",
    unknown: "不明",
    elements: ["金", "木", "水", "火", "土"],
    relations: ["兄弟", "父母", "子孫", "妻財", "官鬼"],
    lineages: ["本宮", "一世", "二世", "三世", "四世", "五世", "遊魂", "帰魂"],
    contradictions: [
        "世と応が比和。事は成りやすく、協力に利あり。",
        "世爻が応爻を生ず。自ら相手を支え、労力を費やす。",
        "応爻が世爻を生ず。相手から助けが来る。大吉。",
        "世爻が応爻を剋す。主導権はあなたにあり、進むに利あり。",
        "応爻が世爻を剋す。周囲からの圧力が強く、滞りが多い。",
    ],
    advice: [
        "仲間の助けあり。ただし競争と出費に注意。",
        "文書や目上の助力に利あり。",
        "心穏やかで休養に良し。昇進を求めるには不向き。",
        "財を求めるに利あり。",
        "重圧や公的な揉め事に注意。名声を求めるには利あり。",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [&'static Catalog; 4] {
        [&ZH_CN, &ZH_TW, &EN, &JA]
    }

    #[test]
    fn line_label_counts_from_one() {
        assert_eq!(EN.line(0), "Line 1");
        assert_eq!(ZH_CN.line(5), "第6爻");
    }

    #[test]
    fn templates_carry_placeholders() {
        for c in all() {
            assert!(c.line_label.contains("{n}"));
            for key in ["{name}", "{image}", "{quality}"] {
                assert!(c.status.contains(key), "{key}");
            }
            assert!(c.image.contains("{upper}") && c.image.contains("{lower}"));
            assert!(c.quality.contains("{upper}") && c.quality.contains("{lower}"));
            assert!(c.future_changed.contains("{name}"));
        }
    }

    #[test]
    fn lookups_are_distinct() {
        for c in all() {
            let relations: Vec<_> = SixRelation::all().iter().map(|r| c.relation(*r)).collect();
            let mut dedup = relations.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), relations.len());

            let lineages: Vec<_> = Lineage::all().iter().map(|l| c.lineage(*l)).collect();
            let mut dedup = lineages.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), 8);
        }
    }

    #[test]
    fn english_labels_match_display() {
        for r in SixRelation::all() {
            assert_eq!(EN.relation(*r), r.to_string());
        }
        for l in Lineage::all() {
            assert_eq!(EN.lineage(*l), l.to_string());
        }
        for e in Element::all() {
            assert_eq!(EN.element(*e), e.to_string());
        }
    }
}
