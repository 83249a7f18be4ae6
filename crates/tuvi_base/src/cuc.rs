//! House stems (Ngũ Hổ Độn) and the elemental frame number (Cục).

use serde::Serialize;

use crate::can_chi::{Branch, Stem};
use crate::element::{Element, ElementRelation};
use crate::nap_am::nap_am_of;

/// Stem of the house at `branch` for a year with stem `year_stem`.
///
/// The Dần house takes stem `((s mod 5) * 2 + 2) mod 10`; stems then run
/// forward with the branches.
pub fn house_stem(year_stem: Stem, branch: Branch) -> Stem {
    let first = (year_stem.index() % 5) * 2 + 2;
    Stem::from_index(first).offset(Branch::Dan.distance_to(branch) as i32)
}

/// Elemental frame (Cục) governing the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cuc {
    pub element: Element,
    /// One of 2, 3, 4, 5, 6.
    pub number: u8,
}

impl Cuc {
    pub const fn from_element(element: Element) -> Self {
        let number = match element {
            Element::Thuy => 2,
            Element::Moc => 3,
            Element::Kim => 4,
            Element::Tho => 5,
            Element::Hoa => 6,
        };
        Self { element, number }
    }

    /// "Thủy Nhị Cục" style name.
    pub const fn name(self) -> &'static str {
        match self.element {
            Element::Thuy => "Thủy Nhị Cục",
            Element::Moc => "Mộc Tam Cục",
            Element::Kim => "Kim Tứ Cục",
            Element::Tho => "Thổ Ngũ Cục",
            Element::Hoa => "Hỏa Lục Cục",
        }
    }
}

/// Cục from the Nạp Âm of the Mệnh house's stem-branch pair.
pub fn cuc_for(year_stem: Stem, menh: Branch) -> Cuc {
    let stem = house_stem(year_stem, menh);
    Cuc::from_element(nap_am_of(stem, menh).element)
}

/// Relation of the Cục element to the Mệnh element (bản mệnh).
pub fn menh_cuc_relation(menh_element: Element, cuc: Cuc) -> ElementRelation {
    ElementRelation::between(cuc.element, menh_element)
}
