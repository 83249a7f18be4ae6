//! The three twelve-star rings: Thái Tuế, Bác Sỹ and Tràng Sinh.

use crate::can_chi::Branch;
use crate::direction::RingDirection;
use crate::element::Element;
use crate::star::StarId;

use super::by_stem::loc_ton;
use super::{PlacementContext, StarPlacements};

pub const THAI_TUE_RING: [StarId; 12] = [
    StarId::ThaiTue,
    StarId::ThieuDuong,
    StarId::TangMon,
    StarId::ThieuAm,
    StarId::QuanPhu,
    StarId::TuPhu,
    StarId::TuePha,
    StarId::LongDuc,
    StarId::BachHo,
    StarId::PhucDuc,
    StarId::DieuKhach,
    StarId::TrucPhu,
];

pub const BAC_SY_RING: [StarId; 12] = [
    StarId::BacSy,
    StarId::LucSy,
    StarId::ThanhLong,
    StarId::TieuHao,
    StarId::TuongQuan,
    StarId::TauThu,
    StarId::PhiLiem,
    StarId::HyThan,
    StarId::BenhPhu,
    StarId::DaiHao,
    StarId::PhucBinh,
    StarId::QuanPhuBacSy,
];

pub const TRANG_SINH_RING: [StarId; 12] = [
    StarId::TrangSinh,
    StarId::MocDuc,
    StarId::QuanDoi,
    StarId::LamQuan,
    StarId::DeVuong,
    StarId::Suy,
    StarId::Benh,
    StarId::Tu,
    StarId::Mo,
    StarId::Tuyet,
    StarId::Thai,
    StarId::Duong,
];

/// Branch where the Tràng Sinh stage begins for a Cục element.
pub const fn trang_sinh_start(element: Element) -> Branch {
    match element {
        Element::Thuy | Element::Tho => Branch::Than,
        Element::Moc => Branch::Hoi,
        Element::Kim => Branch::Ti,
        Element::Hoa => Branch::Dan,
    }
}

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    // Thái Tuế always runs forward from the year branch.
    placements.place_ring(&THAI_TUE_RING, ctx.year.branch, RingDirection::Clockwise);
    placements.place_ring(&BAC_SY_RING, loc_ton(ctx.year.stem), ctx.direction);
    placements.place_ring(
        &TRANG_SINH_RING,
        trang_sinh_start(ctx.cuc.element),
        ctx.direction,
    );
}
