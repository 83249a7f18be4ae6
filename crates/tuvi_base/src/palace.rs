//! The twelve palaces (cung) and their canonical names.

use serde::Serialize;

use crate::can_chi::{Branch, Stem};
use crate::element::Element;
use crate::star::Star;

/// The 12 palace names, in canonical order starting from Mệnh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalaceName {
    Menh,
    PhuMau,
    PhucDuc,
    DienTrach,
    QuanLoc,
    NoBoc,
    ThienDi,
    TatAch,
    TaiBach,
    TuTuc,
    PhuThe,
    HuynhDe,
}

pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Menh,
    PalaceName::PhuMau,
    PalaceName::PhucDuc,
    PalaceName::DienTrach,
    PalaceName::QuanLoc,
    PalaceName::NoBoc,
    PalaceName::ThienDi,
    PalaceName::TatAch,
    PalaceName::TaiBach,
    PalaceName::TuTuc,
    PalaceName::PhuThe,
    PalaceName::HuynhDe,
];

impl PalaceName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Menh => "Mệnh",
            Self::PhuMau => "Phụ Mẫu",
            Self::PhucDuc => "Phúc Đức",
            Self::DienTrach => "Điền Trạch",
            Self::QuanLoc => "Quan Lộc",
            Self::NoBoc => "Nô Bộc",
            Self::ThienDi => "Thiên Di",
            Self::TatAch => "Tật Ách",
            Self::TaiBach => "Tài Bạch",
            Self::TuTuc => "Tử Tức",
            Self::PhuThe => "Phu Thê",
            Self::HuynhDe => "Huynh Đệ",
        }
    }

    /// 0-based canonical index (Mệnh = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch of this palace given the Mệnh branch.
    pub fn branch(self, menh: Branch) -> Branch {
        menh.offset(self.index() as i32)
    }
}

/// One palace of a finished chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palace {
    pub name: PalaceName,
    pub branch: Branch,
    pub stem: Stem,
    pub element: Element,
    pub main_stars: Vec<Star>,
    pub secondary_stars: Vec<Star>,
    pub decade_start_age: u8,
    pub is_tuan: bool,
    pub is_triet: bool,
    pub is_body_palace: bool,
}

impl Palace {
    /// Main then secondary stars.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.main_stars.iter().chain(self.secondary_stars.iter())
    }

    /// "Mệnh (Sửu)" style label.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name.name(), self.branch.name())
    }
}
