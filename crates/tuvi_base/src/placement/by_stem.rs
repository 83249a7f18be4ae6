//! Stars keyed by the year stem.

use crate::can_chi::{Branch, Stem};
use crate::star::StarId;

use super::{PlacementContext, StarPlacements};

// Branch indices, one per stem Giáp..Quý.
const LOC_TON: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];
const THIEN_KHOI: [u8; 10] = [1, 0, 11, 11, 1, 0, 1, 6, 3, 3];
const THIEN_VIET: [u8; 10] = [7, 8, 9, 9, 7, 8, 7, 2, 5, 5];
const THIEN_QUAN: [u8; 10] = [7, 4, 5, 2, 3, 9, 11, 9, 10, 6];
const THIEN_PHUC: [u8; 10] = [9, 8, 0, 11, 3, 2, 6, 5, 6, 5];
const LUU_HA: [u8; 10] = [9, 10, 7, 8, 5, 6, 4, 3, 11, 2];
const THIEN_TRU: [u8; 10] = [5, 6, 0, 5, 6, 8, 2, 6, 9, 10];
const VAN_TINH: [u8; 10] = [5, 6, 8, 9, 8, 9, 11, 0, 2, 3];

fn lookup(table: &[u8; 10], stem: Stem) -> Branch {
    Branch::from_index(table[stem.index() as usize])
}

/// House of Lộc Tồn, which also anchors the Bác Sỹ ring.
pub fn loc_ton(stem: Stem) -> Branch {
    lookup(&LOC_TON, stem)
}

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    let stem = ctx.year.stem;
    let loc_ton = loc_ton(stem);

    placements.place(StarId::LocTon, loc_ton);
    placements.place(StarId::KinhDuong, loc_ton.offset(1));
    placements.place(StarId::DaLa, loc_ton.offset(-1));
    placements.place(StarId::ThienKhoi, lookup(&THIEN_KHOI, stem));
    placements.place(StarId::ThienViet, lookup(&THIEN_VIET, stem));
    placements.place(StarId::ThienQuan, lookup(&THIEN_QUAN, stem));
    placements.place(StarId::ThienPhuc, lookup(&THIEN_PHUC, stem));
    placements.place(StarId::LuuHa, lookup(&LUU_HA, stem));
    placements.place(StarId::ThienTru, lookup(&THIEN_TRU, stem));
    placements.place(StarId::VanTinh, lookup(&VAN_TINH, stem));
    placements.place(StarId::QuocAn, loc_ton.offset(8));
    placements.place(StarId::DuongPhu, loc_ton.offset(5));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::can_chi::ALL_STEMS;
    use crate::direction::Gender;
    use crate::placement::test_support::context;

    #[test]
    fn loc_ton_by_stem() {
        assert_eq!(loc_ton(Stem::Giap), Branch::Dan);
        assert_eq!(loc_ton(Stem::At), Branch::Mao);
        assert_eq!(loc_ton(Stem::Canh), Branch::Than);
        assert_eq!(loc_ton(Stem::Quy), Branch::Ty);
    }

    #[test]
    fn loc_ton_never_in_a_tomb_branch() {
        for stem in ALL_STEMS {
            let b = loc_ton(stem);
            assert!(!matches!(b, Branch::Thin | Branch::Tuat | Branch::Suu | Branch::Mui));
        }
    }

    #[test]
    fn khoi_viet_never_share_a_house() {
        for stem in ALL_STEMS {
            assert_ne!(lookup(&THIEN_KHOI, stem), lookup(&THIEN_VIET, stem));
        }
    }

    fn placed(year: i32) -> StarPlacements {
        let ctx = context(year, 1, 1, Branch::Ty, Gender::Male);
        let mut p = StarPlacements::new();
        place(&ctx, &mut p);
        p
    }

    #[test]
    fn giap_year_tables() {
        let p = placed(1984);
        assert_eq!(p.position(StarId::ThienQuan), Some(Branch::Mui));
        assert_eq!(p.position(StarId::ThienPhuc), Some(Branch::Dau));
        assert_eq!(p.position(StarId::LuuHa), Some(Branch::Dau));
        assert_eq!(p.position(StarId::ThienTru), Some(Branch::Ti));
        assert_eq!(p.position(StarId::VanTinh), Some(Branch::Ti));
        assert_eq!(p.position(StarId::QuocAn), Some(Branch::Tuat));
        assert_eq!(p.position(StarId::DuongPhu), Some(Branch::Mui));
    }

    #[test]
    fn at_year_tables() {
        let p = placed(1985);
        assert_eq!(p.position(StarId::KinhDuong), Some(Branch::Thin));
        assert_eq!(p.position(StarId::DaLa), Some(Branch::Dan));
        assert_eq!(p.position(StarId::ThienQuan), Some(Branch::Thin));
        assert_eq!(p.position(StarId::ThienPhuc), Some(Branch::Than));
        assert_eq!(p.position(StarId::LuuHa), Some(Branch::Tuat));
        assert_eq!(p.position(StarId::ThienTru), Some(Branch::Ngo));
        assert_eq!(p.position(StarId::VanTinh), Some(Branch::Ngo));
        assert_eq!(p.position(StarId::QuocAn), Some(Branch::Hoi));
        assert_eq!(p.position(StarId::DuongPhu), Some(Branch::Than));
    }
}
