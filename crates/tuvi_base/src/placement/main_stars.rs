//! The 14 main stars: the Tử Vi chain and the Thiên Phủ chain.

use crate::can_chi::Branch;

use super::{PlacementContext, StarPlacements};
use crate::star::StarId;

/// Tử Vi chain, offsets from the Tử Vi house.
pub const TU_VI_CHAIN: [(StarId, i32); 6] = [
    (StarId::TuVi, 0),
    (StarId::ThienCo, 11),
    (StarId::ThaiDuong, 9),
    (StarId::VuKhuc, 8),
    (StarId::ThienDong, 7),
    (StarId::LiemTrinh, 4),
];

/// Thiên Phủ chain, offsets from the Thiên Phủ house.
pub const THIEN_PHU_CHAIN: [(StarId, i32); 8] = [
    (StarId::ThienPhu, 0),
    (StarId::ThaiAm, 1),
    (StarId::ThamLang, 2),
    (StarId::CuMon, 3),
    (StarId::ThienTuong, 4),
    (StarId::ThienLuong, 5),
    (StarId::ThatSat, 6),
    (StarId::PhaQuan, 10),
];

/// House of Tử Vi from the lunar day and the Cục stride.
pub fn tu_vi_branch(day: u8, stride: u8) -> Branch {
    let q = (day / stride) as i32;
    let r = (day % stride) as i32;
    if r == 0 {
        Branch::Dan.offset(q - 1)
    } else {
        Branch::Dan.offset(q - (r - 1))
    }
}

/// Thiên Phủ mirrors Tử Vi across the Dần-Thân axis: the two indices
/// always sum to 4 mod 12.
pub fn thien_phu_branch(tu_vi: Branch) -> Branch {
    Branch::from_index(((16 - tu_vi.index() as i32).rem_euclid(12)) as u8)
}

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    let tu_vi = tu_vi_branch(ctx.day, ctx.cuc.number);
    let thien_phu = thien_phu_branch(tu_vi);
    for (star, offset) in TU_VI_CHAIN {
        placements.place(star, tu_vi.offset(offset));
    }
    for (star, offset) in THIEN_PHU_CHAIN {
        placements.place(star, thien_phu.offset(offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_zero_steps_back_one() {
        // 6 / 2 → q = 3, r = 0 → Dần + 2 = Thìn
        assert_eq!(tu_vi_branch(6, 2), Branch::Thin);
        // 2 / 2 → q = 1 → Dần
        assert_eq!(tu_vi_branch(2, 2), Branch::Dan);
    }

    #[test]
    fn remainder_nonzero() {
        // 25 / 6 → q = 4, r = 1 → Dần + 4 = Ngọ
        assert_eq!(tu_vi_branch(25, 6), Branch::Ngo);
        // 1 / 6 → q = 0, r = 1 → Dần
        assert_eq!(tu_vi_branch(1, 6), Branch::Dan);
        // 5 / 6 → q = 0, r = 5 → Dần - 4 = Tuất
        assert_eq!(tu_vi_branch(5, 6), Branch::Tuat);
    }

    #[test]
    fn mirror_sums_to_four() {
        for stride in 2..=6u8 {
            for day in 1..=30u8 {
                let tv = tu_vi_branch(day, stride);
                let tp = thien_phu_branch(tv);
                assert_eq!((tv.index() + tp.index()) % 12, 4, "day {day} stride {stride}");
            }
        }
    }

    #[test]
    fn chains_total_fourteen() {
        assert_eq!(TU_VI_CHAIN.len() + THIEN_PHU_CHAIN.len(), 14);
    }
}
