//! Tuần and Triệt: the two void overlays.
//!
//! Tuần marks the two branches left without a stem in the year's
//! sexagenary decade. Triệt is a fixed pair per year stem.

use crate::can_chi::{Branch, Stem};

/// Tuần pair for a year.
pub fn tuan(stem: Stem, branch: Branch) -> [Branch; 2] {
    // Branch that starts the decade after this year's; the two before it
    // carry no stem.
    let key = (branch.index() as i32 - stem.index() as i32).rem_euclid(12);
    let next_start = Branch::from_index(key as u8);
    [next_start.offset(-2), next_start.offset(-1)]
}

/// Triệt pair for a year stem.
pub const fn triet(stem: Stem) -> [Branch; 2] {
    match stem {
        Stem::Giap | Stem::Ky => [Branch::Than, Branch::Dau],
        Stem::At | Stem::Canh => [Branch::Ngo, Branch::Mui],
        Stem::Binh | Stem::Tan => [Branch::Thin, Branch::Ti],
        Stem::Dinh | Stem::Nham => [Branch::Dan, Branch::Mao],
        Stem::Mau | Stem::Quy => [Branch::Ty, Branch::Suu],
    }
}
