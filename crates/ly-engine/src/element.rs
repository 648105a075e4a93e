//! Five Elements and the Six Relations.
//!
//! The elements are linked by two fixed cycles. In the generative cycle
//! Metal feeds Water, Water feeds Wood, Wood feeds Fire, Fire feeds Earth and
//! Earth feeds Metal. The overcoming cycle skips one step of the generative
//! order. Both are read off the distance between two elements on the
//! generative ring.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Metal (金).
    Metal,
    /// Wood (木).
    Wood,
    /// Water (水).
    Water,
    /// Fire (火).
    Fire,
    /// Earth (土).
    Earth,
}

/// Elements in generative order: each generates the next, wrapping around.
const GENERATIVE_RING: [Element; 5] = [
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// All elements in generative order.
    pub fn all() -> &'static [Self] {
        &GENERATIVE_RING
    }

    fn ring_position(self) -> usize {
        match self {
            Self::Metal => 0,
            Self::Water => 1,
            Self::Wood => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// The element this one generates.
    pub fn generates(self) -> Self {
        GENERATIVE_RING[(self.ring_position() + 1) % 5]
    }

    /// The element this one overcomes.
    pub fn overcomes(self) -> Self {
        GENERATIVE_RING[(self.ring_position() + 2) % 5]
    }

    /// How `self` stands towards `other`.
    pub fn relation_to(self, other: Self) -> ElementRelation {
        let steps = (other.ring_position() + 5 - self.ring_position()) % 5;
        match steps {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generate,
            2 => ElementRelation::Overcome,
            3 => ElementRelation::OvercomedBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metal => write!(f, "Metal"),
            Self::Wood => write!(f, "Wood"),
            Self::Water => write!(f, "Water"),
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

/// The relation of a subject element to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    /// Both are the same element.
    Same,
    /// The subject generates the reference.
    Generate,
    /// The subject is generated by the reference.
    GeneratedBy,
    /// The subject overcomes the reference.
    Overcome,
    /// The subject is overcome by the reference.
    OvercomedBy,
}

impl ElementRelation {
    /// The same relation seen from the other side.
    pub fn inverse(self) -> Self {
        match self {
            Self::Same => Self::Same,
            Self::Generate => Self::GeneratedBy,
            Self::GeneratedBy => Self::Generate,
            Self::Overcome => Self::OvercomedBy,
            Self::OvercomedBy => Self::Overcome,
        }
    }
}

impl std::fmt::Display for ElementRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Same => write!(f, "Same"),
            Self::Generate => write!(f, "Generate"),
            Self::GeneratedBy => write!(f, "Generated By"),
            Self::Overcome => write!(f, "Overcome"),
            Self::OvercomedBy => write!(f, "Overcome By"),
        }
    }
}

/// A line's symbolic role relative to its palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SixRelation {
    /// Same element as the palace.
    Brother,
    /// Generated by the palace element.
    Parent,
    /// Generates the palace element.
    Offspring,
    /// Overcomes the palace element.
    Wealth,
    /// Overcome by the palace element.
    Official,
}

impl SixRelation {
    /// Label a line of element `line` in a palace of element `palace`.
    pub fn classify(line: Element, palace: Element) -> Self {
        match line.relation_to(palace) {
            ElementRelation::Same => Self::Brother,
            ElementRelation::GeneratedBy => Self::Parent,
            ElementRelation::Generate => Self::Offspring,
            ElementRelation::Overcome => Self::Wealth,
            ElementRelation::OvercomedBy => Self::Official,
        }
    }

    /// All six relations. There are five; the name is traditional.
    pub fn all() -> &'static [Self] {
        &[
            Self::Brother,
            Self::Parent,
            Self::Offspring,
            Self::Wealth,
            Self::Official,
        ]
    }
}

impl std::fmt::Display for SixRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Brother => write!(f, "Brother"),
            Self::Parent => write!(f, "Parent"),
            Self::Offspring => write!(f, "Offspring"),
            Self::Wealth => write!(f, "Wealth"),
            Self::Official => write!(f, "Official"),
        }
    }
}
