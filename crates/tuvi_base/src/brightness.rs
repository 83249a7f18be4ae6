//! Brightness tables: how strong each star sits in each branch.
//!
//! Rows are indexed Tý..Hợi. `None` means the star carries no brightness
//! mark in that branch.

use crate::can_chi::Branch;
use crate::star::{Brightness, StarId};

type Row = [Option<Brightness>; 12];

const M: Option<Brightness> = Some(Brightness::Mieu);
const V: Option<Brightness> = Some(Brightness::Vuong);
const D: Option<Brightness> = Some(Brightness::Dac);
const H: Option<Brightness> = Some(Brightness::Ham);
const B: Option<Brightness> = None;

//                     Tý Sửu Dần Mão Thìn Tỵ Ngọ Mùi Thân Dậu Tuất Hợi
const TU_VI: Row = [B, D, M, B, V, M, M, D, M, B, V, B];
const LIEM_TRINH: Row = [V, D, V, H, M, H, V, D, V, H, M, H];
const THIEN_DONG: Row = [V, H, M, D, H, D, H, H, M, H, H, D];
const VU_KHUC: Row = [V, M, V, D, M, H, V, M, V, D, M, H];
const THAI_DUONG: Row = [H, D, V, V, V, M, M, D, H, H, H, H];
const THIEN_CO: Row = [D, D, H, M, M, V, D, D, V, M, M, H];
const THIEN_PHU: Row = [M, B, M, B, V, D, M, D, M, B, V, D];
const THAI_AM: Row = [V, D, H, H, H, H, H, D, V, M, M, M];
const THAM_LANG: Row = [H, M, D, H, V, H, H, M, D, H, V, H];
const CU_MON: Row = [V, H, V, M, H, H, V, H, D, M, H, D];
const THIEN_TUONG: Row = [V, D, M, H, V, D, V, D, M, H, V, D];
const THIEN_LUONG: Row = [V, D, V, V, M, H, M, D, V, H, M, H];
const THAT_SAT: Row = [M, D, M, H, H, V, M, D, M, H, H, V];
const PHA_QUAN: Row = [M, V, H, H, D, H, M, V, H, H, D, H];

const VAN_XUONG_KHUC: Row = [D, M, H, D, D, M, H, D, D, M, H, D];
const KINH_DUONG: Row = [H, M, B, H, M, B, H, M, B, H, M, B];
const DA_LA: Row = [B, M, H, B, M, H, B, M, H, B, M, H];
const HOA_LINH: Row = [H, D, M, M, M, M, M, D, H, H, H, H];
const KHONG_KIEP: Row = [H, H, D, H, H, D, H, H, D, H, H, D];

fn row(star: StarId) -> Option<&'static Row> {
    let row = match star {
        StarId::TuVi => &TU_VI,
        StarId::LiemTrinh => &LIEM_TRINH,
        StarId::ThienDong => &THIEN_DONG,
        StarId::VuKhuc => &VU_KHUC,
        StarId::ThaiDuong => &THAI_DUONG,
        StarId::ThienCo => &THIEN_CO,
        StarId::ThienPhu => &THIEN_PHU,
        StarId::ThaiAm => &THAI_AM,
        StarId::ThamLang => &THAM_LANG,
        StarId::CuMon => &CU_MON,
        StarId::ThienTuong => &THIEN_TUONG,
        StarId::ThienLuong => &THIEN_LUONG,
        StarId::ThatSat => &THAT_SAT,
        StarId::PhaQuan => &PHA_QUAN,
        StarId::VanXuong | StarId::VanKhuc => &VAN_XUONG_KHUC,
        StarId::KinhDuong => &KINH_DUONG,
        StarId::DaLa => &DA_LA,
        StarId::HoaTinh | StarId::LinhTinh => &HOA_LINH,
        StarId::DiaKhong | StarId::DiaKiep => &KHONG_KIEP,
        _ => return None,
    };
    Some(row)
}

/// Brightness of `star` in `branch`, if the star has a table entry there.
pub fn brightness(star: StarId, branch: Branch) -> Option<Brightness> {
    row(star).and_then(|r| r[branch.index() as usize])
}
