//! Classical star-group patterns (cách cục) of the Mệnh triad.
//!
//! The triad is Mệnh and the houses four and eight steps on. Patterns are
//! tried in declaration order and the first that matches wins.

use serde::Serialize;

use crate::star::StarId;
use crate::star::StarId::*;

/// A named classical star grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarPattern {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub stars: &'static [StarId],
}

impl StarPattern {
    /// Two-star patterns need both; larger ones need at least three.
    pub fn matches(&self, present: &[StarId]) -> bool {
        let hits = self.stars.iter().filter(|s| present.contains(s)).count();
        if self.stars.len() <= 2 {
            hits == self.stars.len()
        } else {
            hits >= 3
        }
    }
}

/// Patterns in priority order.
pub const PATTERNS: [StarPattern; 10] = [
    StarPattern {
        name: "Tử Phủ Vũ Tướng",
        description: "Bộ sao quyền quý, chủ về địa vị và tài lộc vững vàng.",
        stars: &[TuVi, ThienPhu, VuKhuc, ThienTuong],
    },
    StarPattern {
        name: "Sát Phá Tham",
        description: "Bộ sao biến động, chủ về khai phá, mạo hiểm và thay đổi lớn.",
        stars: &[ThatSat, PhaQuan, ThamLang],
    },
    StarPattern {
        name: "Cơ Nguyệt Đồng Lương",
        description: "Bộ sao văn chức, chủ về ổn định, mưu trí và công việc hành chính.",
        stars: &[ThienCo, ThaiAm, ThienDong, ThienLuong],
    },
    StarPattern {
        name: "Cự Nhật",
        description: "Cự Môn gặp Thái Dương, chủ về ngôn luận và danh tiếng.",
        stars: &[CuMon, ThaiDuong],
    },
    StarPattern {
        name: "Cự Cơ",
        description: "Cự Môn gặp Thiên Cơ, chủ về mưu lược và biến hóa.",
        stars: &[CuMon, ThienCo],
    },
    StarPattern {
        name: "Nhật Nguyệt",
        description: "Thái Dương gặp Thái Âm, chủ về hòa hợp âm dương.",
        stars: &[ThaiDuong, ThaiAm],
    },
    StarPattern {
        name: "Tử Phủ",
        description: "Tử Vi gặp Thiên Phủ, chủ về phúc hậu và quyền lực.",
        stars: &[TuVi, ThienPhu],
    },
    StarPattern {
        name: "Tử Sát",
        description: "Tử Vi gặp Thất Sát, chủ về quyền uy và quyết đoán.",
        stars: &[TuVi, ThatSat],
    },
    StarPattern {
        name: "Cơ Lương",
        description: "Thiên Cơ gặp Thiên Lương, chủ về trí tuệ và thiện tâm.",
        stars: &[ThienCo, ThienLuong],
    },
    StarPattern {
        name: "Phủ Tướng",
        description: "Thiên Phủ gặp Thiên Tướng, chủ về ổn định và được trọng dụng.",
        stars: &[ThienPhu, ThienTuong],
    },
];

/// Returned when no pattern matches.
pub const FALLBACK_PATTERN: StarPattern = StarPattern {
    name: "Cách Cục Khác",
    description: "Không thuộc cách cục chính tinh tiêu biểu; luận theo từng cung.",
    stars: &[],
};

/// First pattern matched by the main stars of the triad.
pub fn classify(triad_main_stars: &[StarId]) -> StarPattern {
    PATTERNS
        .iter()
        .find(|p| p.matches(triad_main_stars))
        .copied()
        .unwrap_or(FALLBACK_PATTERN)
}
