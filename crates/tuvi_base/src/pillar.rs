//! Year pillar: stem, branch and Nạp Âm of a lunar year.

use serde::Serialize;

use crate::can_chi::{ALL_BRANCHES, ALL_STEMS, Branch, Stem};
use crate::nap_am::{NapAm, nap_am_of};

/// Stem, branch and Nạp Âm of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearPillar {
    pub year: i32,
    pub stem: Stem,
    pub branch: Branch,
    pub nap_am: NapAm,
}

impl YearPillar {
    /// "Canh Ngọ" style label.
    pub fn label(&self) -> String {
        format!("{} {}", self.stem.name(), self.branch.name())
    }
}

/// Year pillar of a lunar year. Repeats every 60 years; CE 4 is Giáp Tý.
pub fn year_pillar(lunar_year: i32) -> YearPillar {
    let stem = ALL_STEMS[(lunar_year - 4).rem_euclid(10) as usize];
    let branch = ALL_BRANCHES[(lunar_year - 4).rem_euclid(12) as usize];
    YearPillar {
        year: lunar_year,
        stem,
        branch,
        nap_am: nap_am_of(stem, branch),
    }
}
