//! Stars keyed by the birth hour.

use crate::can_chi::Branch;
use crate::star::StarId;

use super::{PlacementContext, StarPlacements};

pub fn van_xuong(hour: Branch) -> Branch {
    Branch::Tuat.offset(-(hour.index() as i32))
}

pub fn van_khuc(hour: Branch) -> Branch {
    Branch::Thin.offset(hour.index() as i32)
}

/// Starting houses of Hỏa Tinh and Linh Tinh for a year branch.
pub fn hoa_linh_start(year_branch: Branch) -> (Branch, Branch) {
    match year_branch {
        Branch::Dan | Branch::Ngo | Branch::Tuat => (Branch::Suu, Branch::Mao),
        Branch::Than | Branch::Ty | Branch::Thin => (Branch::Dan, Branch::Tuat),
        Branch::Ti | Branch::Dau | Branch::Suu => (Branch::Mao, Branch::Tuat),
        Branch::Hoi | Branch::Mao | Branch::Mui => (Branch::Dau, Branch::Tuat),
    }
}

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    let h = ctx.h();
    placements.place(StarId::VanXuong, van_xuong(ctx.hour));
    placements.place(StarId::VanKhuc, van_khuc(ctx.hour));
    placements.place(StarId::DiaKhong, Branch::Hoi.offset(-h));
    placements.place(StarId::DiaKiep, Branch::Hoi.offset(h));
    placements.place(StarId::ThaiPhu, Branch::Ngo.offset(h));
    placements.place(StarId::PhongCao, Branch::Dan.offset(h));

    let (hoa, linh) = hoa_linh_start(ctx.year.branch);
    placements.place(StarId::HoaTinh, hoa.offset(ctx.direction.sign() * h));
    placements.place(StarId::LinhTinh, linh.offset(ctx.direction.reversed().sign() * h));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::can_chi::ALL_BRANCHES;
    use crate::direction::Gender;
    use crate::placement::test_support::context;

    #[test]
    fn literary_stars_mirror() {
        for hour in ALL_BRANCHES {
            let sum = van_xuong(hour).index() + van_khuc(hour).index();
            assert_eq!(sum % 12, 2);
        }
        assert_eq!(van_xuong(Branch::Ty), Branch::Tuat);
        assert_eq!(van_khuc(Branch::Ty), Branch::Thin);
    }

    #[test]
    fn khong_kiep_meet_at_hoi_for_ty_hour() {
        let ctx = context(1985, 12, 25, Branch::Ty, Gender::Female);
        let mut p = StarPlacements::new();
        place(&ctx, &mut p);
        assert_eq!(p.position(StarId::DiaKhong), Some(Branch::Hoi));
        assert_eq!(p.position(StarId::DiaKiep), Some(Branch::Hoi));
    }

    #[test]
    fn hoa_and_linh_walk_opposite_ways() {
        // Canh Ngọ male: clockwise; Ngọ year starts Hỏa at Sửu, Linh at Mão.
        let ctx = context(1990, 4, 21, Branch::Ngo, Gender::Male);
        let mut p = StarPlacements::new();
        place(&ctx, &mut p);
        assert_eq!(p.position(StarId::HoaTinh), Some(Branch::Mui));
        assert_eq!(p.position(StarId::LinhTinh), Some(Branch::Dau));
    }

    #[test]
    fn linh_walks_back_when_counter_clockwise() {
        // Ất Sửu male: counter-clockwise; Sửu year starts Hỏa at Mão, Linh at Tuất.
        let ctx = context(1985, 12, 25, Branch::Dan, Gender::Male);
        let mut p = StarPlacements::new();
        place(&ctx, &mut p);
        assert_eq!(p.position(StarId::HoaTinh), Some(Branch::Suu));
        assert_eq!(p.position(StarId::LinhTinh), Some(Branch::Ty));
    }

    #[test]
    fn hour_counted_stars() {
        let ctx = context(1985, 12, 25, Branch::Dan, Gender::Female);
        let mut p = StarPlacements::new();
        place(&ctx, &mut p);
        assert_eq!(p.position(StarId::DiaKhong), Some(Branch::Dau));
        assert_eq!(p.position(StarId::DiaKiep), Some(Branch::Suu));
        assert_eq!(p.position(StarId::ThaiPhu), Some(Branch::Than));
        assert_eq!(p.position(StarId::PhongCao), Some(Branch::Thin));
    }
}
