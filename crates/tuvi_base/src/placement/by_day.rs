//! Day-keyed stars counted from hour- and month-keyed anchors.
//!
//! These must run after `by_hour` and `by_month`.

use crate::can_chi::Branch;
use crate::star::StarId;

use super::{PlacementContext, StarPlacements};
use super::{by_hour, by_month};

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    let d = ctx.day as i32;
    let anchor = |star: StarId, fallback: Branch| placements.position(star).unwrap_or(fallback);

    let ta_phu = anchor(StarId::TaPhu, by_month::ta_phu(ctx.month));
    let huu_bat = anchor(StarId::HuuBat, by_month::huu_bat(ctx.month));
    let van_xuong = anchor(StarId::VanXuong, by_hour::van_xuong(ctx.hour));
    let van_khuc = anchor(StarId::VanKhuc, by_hour::van_khuc(ctx.hour));

    placements.place(StarId::TamThai, ta_phu.offset(d - 1));
    placements.place(StarId::BatToa, huu_bat.offset(-(d - 1)));
    placements.place(StarId::AnQuang, van_xuong.offset(d - 2));
    placements.place(StarId::ThienQuy, van_khuc.offset(-(d - 2)));
}
