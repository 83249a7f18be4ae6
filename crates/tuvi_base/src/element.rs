//! The five elements (Ngũ Hành) and their generating / controlling cycles.

use serde::Serialize;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Kim,
    Moc,
    Thuy,
    Hoa,
    Tho,
}

/// All 5 elements in traditional order (Kim, Mộc, Thủy, Hỏa, Thổ).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Kim,
    Element::Moc,
    Element::Thuy,
    Element::Hoa,
    Element::Tho,
];

impl Element {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kim => "Kim",
            Self::Moc => "Mộc",
            Self::Thuy => "Thủy",
            Self::Hoa => "Hỏa",
            Self::Tho => "Thổ",
        }
    }

    /// Element this one generates (Mộc → Hỏa → Thổ → Kim → Thủy → Mộc).
    pub const fn generates(self) -> Element {
        match self {
            Self::Moc => Self::Hoa,
            Self::Hoa => Self::Tho,
            Self::Tho => Self::Kim,
            Self::Kim => Self::Thuy,
            Self::Thuy => Self::Moc,
        }
    }

    /// Element this one controls (Mộc → Thổ → Thủy → Hỏa → Kim → Mộc).
    pub const fn controls(self) -> Element {
        match self {
            Self::Moc => Self::Tho,
            Self::Tho => Self::Thuy,
            Self::Thuy => Self::Hoa,
            Self::Hoa => Self::Kim,
            Self::Kim => Self::Moc,
        }
    }
}

/// How one element stands toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Both are the same element (bình hòa).
    Same,
    /// Subject generates the other (sinh xuất).
    Generates,
    /// Subject is generated by the other (sinh nhập).
    GeneratedBy,
    /// Subject controls the other (khắc xuất).
    Controls,
    /// Subject is controlled by the other (khắc nhập).
    ControlledBy,
}

impl ElementRelation {
    /// Relation of `subject` toward `other`.
    pub fn between(subject: Element, other: Element) -> Self {
        if subject == other {
            Self::Same
        } else if subject.generates() == other {
            Self::Generates
        } else if other.generates() == subject {
            Self::GeneratedBy
        } else if subject.controls() == other {
            Self::Controls
        } else {
            Self::ControlledBy
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "Bình hòa",
            Self::Generates => "Sinh xuất",
            Self::GeneratedBy => "Sinh nhập",
            Self::Controls => "Khắc xuất",
            Self::ControlledBy => "Khắc nhập",
        }
    }
}
