//! Structural stars with fixed or Mệnh-relative houses.

use crate::can_chi::Branch;
use crate::star::StarId;

use super::{PlacementContext, StarPlacements};

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    placements.place(StarId::ThienLa, Branch::Thin);
    placements.place(StarId::DiaVong, Branch::Tuat);
    // Nô Bộc and Tật Ách houses.
    placements.place(StarId::ThienThuong, ctx.menh.offset(5));
    placements.place(StarId::ThienSu, ctx.menh.offset(7));
}
