//! Nạp Âm: the element of each stem-branch pair in the 60-year cycle.
//!
//! The sexagenary cycle pairs stem `n mod 10` with branch `n mod 12`; the
//! 60 pairs fall into 30 consecutive couples that share one named element.

use serde::Serialize;

use crate::can_chi::{Branch, Stem};
use crate::element::Element;

/// A named Nạp Âm element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NapAm {
    pub name: &'static str,
    pub element: Element,
}

const fn nap_am(name: &'static str, element: Element) -> NapAm {
    NapAm { name, element }
}

/// The 30 Nạp Âm couples in cycle order (Giáp Tý/Ất Sửu first).
pub const NAP_AM_TABLE: [NapAm; 30] = [
    nap_am("Hải Trung Kim", Element::Kim),
    nap_am("Lư Trung Hỏa", Element::Hoa),
    nap_am("Đại Lâm Mộc", Element::Moc),
    nap_am("Lộ Bàng Thổ", Element::Tho),
    nap_am("Kiếm Phong Kim", Element::Kim),
    nap_am("Sơn Đầu Hỏa", Element::Hoa),
    nap_am("Giản Hạ Thủy", Element::Thuy),
    nap_am("Thành Đầu Thổ", Element::Tho),
    nap_am("Bạch Lạp Kim", Element::Kim),
    nap_am("Dương Liễu Mộc", Element::Moc),
    nap_am("Tuyền Trung Thủy", Element::Thuy),
    nap_am("Ốc Thượng Thổ", Element::Tho),
    nap_am("Tích Lịch Hỏa", Element::Hoa),
    nap_am("Tùng Bách Mộc", Element::Moc),
    nap_am("Trường Lưu Thủy", Element::Thuy),
    nap_am("Sa Trung Kim", Element::Kim),
    nap_am("Sơn Hạ Hỏa", Element::Hoa),
    nap_am("Bình Địa Mộc", Element::Moc),
    nap_am("Bích Thượng Thổ", Element::Tho),
    nap_am("Kim Bạch Kim", Element::Kim),
    nap_am("Phú Đăng Hỏa", Element::Hoa),
    nap_am("Thiên Hà Thủy", Element::Thuy),
    nap_am("Đại Trạch Thổ", Element::Tho),
    nap_am("Thoa Xuyến Kim", Element::Kim),
    nap_am("Tang Đố Mộc", Element::Moc),
    nap_am("Đại Khê Thủy", Element::Thuy),
    nap_am("Sa Trung Thổ", Element::Tho),
    nap_am("Thiên Thượng Hỏa", Element::Hoa),
    nap_am("Thạch Lựu Mộc", Element::Moc),
    nap_am("Đại Hải Thủy", Element::Thuy),
];

/// Position 0..60 of a stem-branch pair in the sexagenary cycle.
///
/// Pairs of mixed polarity (e.g. Giáp Sửu) never occur in the cycle; for
/// those the stem is taken as authoritative and the branch is moved back
/// one step to the nearest valid pair.
pub fn sexagenary_index(stem: Stem, branch: Branch) -> u8 {
    let s = stem.index() as i32;
    let mut b = branch.index() as i32;
    if (s - b) % 2 != 0 {
        b -= 1;
    }
    // n ≡ s (mod 10) and n ≡ b (mod 12)  ⇒  n = 6s - 5b (mod 60)
    (6 * s - 5 * b).rem_euclid(60) as u8
}

/// Nạp Âm of a stem-branch pair.
pub fn nap_am_of(stem: Stem, branch: Branch) -> NapAm {
    NAP_AM_TABLE[(sexagenary_index(stem, branch) / 2) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::can_chi::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn cycle_positions() {
        assert_eq!(sexagenary_index(Stem::Giap, Branch::Ty), 0);
        assert_eq!(sexagenary_index(Stem::At, Branch::Suu), 1);
        assert_eq!(sexagenary_index(Stem::Giap, Branch::Tuat), 10);
        assert_eq!(sexagenary_index(Stem::Quy, Branch::Hoi), 59);
    }

    #[test]
    fn every_valid_pair_is_distinct() {
        let mut seen = [false; 60];
        for n in 0..60u8 {
            let s = ALL_STEMS[(n % 10) as usize];
            let b = ALL_BRANCHES[(n % 12) as usize];
            let idx = sexagenary_index(s, b);
            assert_eq!(idx, n);
            assert!(!seen[idx as usize]);
            seen[idx as usize] = true;
        }
    }

    #[test]
    fn known_years() {
        assert_eq!(nap_am_of(Stem::At, Branch::Suu).name, "Hải Trung Kim");
        assert_eq!(nap_am_of(Stem::Canh, Branch::Ngo).name, "Lộ Bàng Thổ");
        assert_eq!(nap_am_of(Stem::Giap, Branch::Thin).name, "Phú Đăng Hỏa");
        assert_eq!(nap_am_of(Stem::Quy, Branch::Hoi).element, Element::Thuy);
    }

    #[test]
    fn elements_balanced() {
        for e in crate::element::ALL_ELEMENTS {
            let count = NAP_AM_TABLE.iter().filter(|n| n.element == e).count();
            assert_eq!(count, 6, "{e:?}");
        }
    }
}
