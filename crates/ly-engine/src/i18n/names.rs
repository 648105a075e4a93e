//! Trigram and hexagram name tables.
//!
//! Columns are ordered zh-CN, zh-TW, en, ja.

/// Localized description of a trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigramText {
    /// Short name.
    pub name: &'static str,
    /// The natural image (heaven, lake, ...).
    pub image: &'static str,
    /// The trigram's quality (strong, joyous, ...).
    pub quality: &'static str,
}

const fn t(name: &'static str, image: &'static str, quality: &'static str) -> TrigramText {
    TrigramText {
        name,
        image,
        quality,
    }
}

/// Indexed by trigram index, then language column.
pub(crate) const TRIGRAM_TEXT: [[TrigramText; 4]; 8] = [
    [
        t("坤", "地", "顺"),
        t("坤", "地", "順"),
        t("Kun", "Earth", "receptive"),
        t("坤", "地", "順"),
    ],
    [
        t("震", "雷", "动"),
        t("震", "雷", "動"),
        t("Zhen", "Thunder", "arousing"),
        t("震", "雷", "動"),
    ],
    [
        t("坎", "水", "险"),
        t("坎", "水", "險"),
        t("Kan", "Water", "perilous"),
        t("坎", "水", "険"),
    ],
    [
        t("兑", "泽", "悦"),
        t("兌", "澤", "悅"),
        t("Dui", "Lake", "joyous"),
        t("兌", "沢", "悦"),
    ],
    [
        t("艮", "山", "止"),
        t("艮", "山", "止"),
        t("Gen", "Mountain", "still"),
        t("艮", "山", "止"),
    ],
    [
        t("离", "火", "丽"),
        t("離", "火", "麗"),
        t("Li", "Fire", "clinging"),
        t("離", "火", "麗"),
    ],
    [
        t("巽", "风", "入"),
        t("巽", "風", "入"),
        t("Xun", "Wind", "gentle"),
        t("巽", "風", "入"),
    ],
    [
        t("乾", "天", "健"),
        t("乾", "天", "健"),
        t("Qian", "Heaven", "strong"),
        t("乾", "天", "健"),
    ],
];

/// King Wen number of each hexagram: `KING_WEN[upper][lower]`.
const KING_WEN: [[u8; 8]; 8] = [
    // lower: Kun Zhen Kan Dui Gen  Li Xun Qian
    [2, 24, 7, 19, 15, 36, 46, 11],  // Kun
    [16, 51, 40, 54, 62, 55, 32, 34], // Zhen
    [8, 3, 29, 60, 39, 63, 48, 5],   // Kan
    [45, 17, 47, 58, 31, 49, 28, 43], // Dui
    [23, 27, 4, 41, 52, 22, 18, 26], // Gen
    [35, 21, 64, 38, 56, 30, 50, 14], // Li
    [20, 42, 59, 61, 53, 37, 57, 9], // Xun
    [12, 25, 6, 10, 33, 13, 44, 1],  // Qian
];

/// King Wen sequence number (1..=64) of a hexagram id, if the id is valid.
pub fn king_wen_number(id: u8) -> Option<u8> {
    let upper = usize::from(id >> 3);
    let lower = usize::from(id & 0b111);
    KING_WEN.get(upper).map(|row| row[lower])
}

/// Hexagram names in King Wen order.
pub(crate) const HEXAGRAM_NAMES: [[&str; 4]; 64] = [
    ["乾为天", "乾為天", "The Creative", "乾為天"],
    ["坤为地", "坤為地", "The Receptive", "坤為地"],
    ["水雷屯", "水雷屯", "Difficulty at the Beginning", "水雷屯"],
    ["山水蒙", "山水蒙", "Youthful Folly", "山水蒙"],
    ["水天需", "水天需", "Waiting", "水天需"],
    ["天水讼", "天水訟", "Conflict", "天水訟"],
    ["地水师", "地水師", "The Army", "地水師"],
    ["水地比", "水地比", "Holding Together", "水地比"],
    ["风天小畜", "風天小畜", "Small Taming", "風天小畜"],
    ["天泽履", "天澤履", "Treading", "天沢履"],
    ["地天泰", "地天泰", "Peace", "地天泰"],
    ["天地否", "天地否", "Standstill", "天地否"],
    ["天火同人", "天火同人", "Fellowship", "天火同人"],
    ["火天大有", "火天大有", "Great Possession", "火天大有"],
    ["地山谦", "地山謙", "Modesty", "地山謙"],
    ["雷地豫", "雷地豫", "Enthusiasm", "雷地豫"],
    ["泽雷随", "澤雷隨", "Following", "沢雷随"],
    ["山风蛊", "山風蠱", "Work on the Decayed", "山風蠱"],
    ["地泽临", "地澤臨", "Approach", "地沢臨"],
    ["风地观", "風地觀", "Contemplation", "風地観"],
    ["火雷噬嗑", "火雷噬嗑", "Biting Through", "火雷噬嗑"],
    ["山火贲", "山火賁", "Grace", "山火賁"],
    ["山地剥", "山地剝", "Splitting Apart", "山地剥"],
    ["地雷复", "地雷復", "Return", "地雷復"],
    ["天雷无妄", "天雷無妄", "Innocence", "天雷無妄"],
    ["山天大畜", "山天大畜", "Great Taming", "山天大畜"],
    ["山雷颐", "山雷頤", "Nourishment", "山雷頤"],
    ["泽风大过", "澤風大過", "Great Exceeding", "沢風大過"],
    ["坎为水", "坎為水", "The Abysmal", "坎為水"],
    ["离为火", "離為火", "The Clinging", "離為火"],
    ["泽山咸", "澤山咸", "Influence", "沢山咸"],
    ["雷风恒", "雷風恆", "Duration", "雷風恒"],
    ["天山遁", "天山遯", "Retreat", "天山遯"],
    ["雷天大壮", "雷天大壯", "Great Power", "雷天大壮"],
    ["火地晋", "火地晉", "Progress", "火地晋"],
    ["地火明夷", "地火明夷", "Darkening of the Light", "地火明夷"],
    ["风火家人", "風火家人", "The Family", "風火家人"],
    ["火泽睽", "火澤睽", "Opposition", "火沢睽"],
    ["水山蹇", "水山蹇", "Obstruction", "水山蹇"],
    ["雷水解", "雷水解", "Deliverance", "雷水解"],
    ["山泽损", "山澤損", "Decrease", "山沢損"],
    ["风雷益", "風雷益", "Increase", "風雷益"],
    ["泽天夬", "澤天夬", "Breakthrough", "沢天夬"],
    ["天风姤", "天風姤", "Coming to Meet", "天風姤"],
    ["泽地萃", "澤地萃", "Gathering Together", "沢地萃"],
    ["地风升", "地風升", "Pushing Upward", "地風升"],
    ["泽水困", "澤水困", "Oppression", "沢水困"],
    ["水风井", "水風井", "The Well", "水風井"],
    ["泽火革", "澤火革", "Revolution", "沢火革"],
    ["火风鼎", "火風鼎", "The Cauldron", "火風鼎"],
    ["震为雷", "震為雷", "The Arousing", "震為雷"],
    ["艮为山", "艮為山", "Keeping Still", "艮為山"],
    ["风山渐", "風山漸", "Development", "風山漸"],
    ["雷泽归妹", "雷澤歸妹", "The Marrying Maiden", "雷沢帰妹"],
    ["雷火丰", "雷火豐", "Abundance", "雷火豊"],
    ["火山旅", "火山旅", "The Wanderer", "火山旅"],
    ["巽为风", "巽為風", "The Gentle", "巽為風"],
    ["兑为泽", "兌為澤", "The Joyous", "兌為沢"],
    ["风水涣", "風水渙", "Dispersion", "風水渙"],
    ["水泽节", "水澤節", "Limitation", "水沢節"],
    ["风泽中孚", "風澤中孚", "Inner Truth", "風沢中孚"],
    ["雷山小过", "雷山小過", "Small Exceeding", "雷山小過"],
    ["水火既济", "水火既濟", "After Completion", "水火既済"],
    ["火水未济", "火水未濟", "Before Completion", "火水未済"],
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn king_wen_is_a_bijection() {
        let numbers: HashSet<u8> = (0..64).filter_map(king_wen_number).collect();
        assert_eq!(numbers.len(), 64);
        assert!(numbers.iter().all(|n| (1..=64).contains(n)));
    }

    #[test]
    fn king_wen_known_values() {
        assert_eq!(king_wen_number(0b111_111), Some(1));
        assert_eq!(king_wen_number(0), Some(2));
        // Water over Thunder.
        assert_eq!(king_wen_number((2 << 3) | 1), Some(3));
        // Fire over Water.
        assert_eq!(king_wen_number((5 << 3) | 2), Some(64));
        assert_eq!(king_wen_number(64), None);
    }

    #[test]
    fn pure_hexagrams_repeat_their_trigram_image() {
        for (index, row) in TRIGRAM_TEXT.iter().enumerate() {
            let id = ((index << 3) | index) as u8;
            let number = king_wen_number(id).unwrap();
            let name = HEXAGRAM_NAMES[usize::from(number) - 1][1];
            assert!(name.starts_with(row[1].name), "{name} vs {}", row[1].name);
        }
    }
}
