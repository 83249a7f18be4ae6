//! Stars keyed by the lunar month.

use crate::can_chi::Branch;
use crate::star::StarId;

use super::{PlacementContext, StarPlacements};

pub fn ta_phu(month: u8) -> Branch {
    Branch::Thin.offset(month as i32 - 1)
}

pub fn huu_bat(month: u8) -> Branch {
    Branch::Tuat.offset(-(month as i32 - 1))
}

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    let m = ctx.m();
    placements.place(StarId::TaPhu, ta_phu(ctx.month));
    placements.place(StarId::HuuBat, huu_bat(ctx.month));
    placements.place(StarId::ThienHinh, Branch::Dau.offset(m));
    placements.place(StarId::ThienRieu, Branch::Suu.offset(m));
    placements.place(StarId::ThienY, Branch::Suu.offset(m));
    placements.place(StarId::ThienGiai, Branch::Than.offset(m));
    placements.place(StarId::DiaGiai, Branch::Mui.offset(m));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Gender;
    use crate::placement::test_support::context;

    #[test]
    fn assistants() {
        assert_eq!(ta_phu(1), Branch::Thin);
        assert_eq!(huu_bat(1), Branch::Tuat);
        assert_eq!(ta_phu(12), Branch::Mao);
        assert_eq!(huu_bat(12), Branch::Hoi);
    }

    #[test]
    fn assistants_mirror_across_suu_mui() {
        for month in 1..=12u8 {
            assert_eq!((ta_phu(month).index() + huu_bat(month).index()) % 12, 2);
        }
    }

    fn placed(month: u8) -> StarPlacements {
        let ctx = context(1985, month, 10, Branch::Ty, Gender::Female);
        let mut p = StarPlacements::new();
        place(&ctx, &mut p);
        p
    }

    #[test]
    fn first_month_houses() {
        let p = placed(1);
        assert_eq!(p.position(StarId::ThienHinh), Some(Branch::Dau));
        assert_eq!(p.position(StarId::ThienRieu), Some(Branch::Suu));
        assert_eq!(p.position(StarId::ThienY), Some(Branch::Suu));
        assert_eq!(p.position(StarId::ThienGiai), Some(Branch::Than));
        assert_eq!(p.position(StarId::DiaGiai), Some(Branch::Mui));
    }

    #[test]
    fn third_month_houses() {
        let p = placed(3);
        assert_eq!(p.position(StarId::ThienHinh), Some(Branch::Hoi));
        assert_eq!(p.position(StarId::ThienRieu), Some(Branch::Mao));
        assert_eq!(p.position(StarId::ThienY), Some(Branch::Mao));
        assert_eq!(p.position(StarId::ThienGiai), Some(Branch::Tuat));
        assert_eq!(p.position(StarId::DiaGiai), Some(Branch::Dau));
    }
}
