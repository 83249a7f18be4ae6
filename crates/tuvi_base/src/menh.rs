//! Mệnh (destiny) and Thân (body) houses, and their ruling stars.

use crate::can_chi::Branch;
use crate::star::StarId;

/// Mệnh house: start at Dần, walk forward `month - 1`, then back `hour`.
pub fn menh_branch(lunar_month: u8, hour: Branch) -> Branch {
    Branch::Dan.offset(lunar_month as i32 - 1 - hour.index() as i32)
}

/// Thân house: start at Dần, walk forward `month - 1`, then forward `hour`.
pub fn than_branch(lunar_month: u8, hour: Branch) -> Branch {
    Branch::Dan.offset(lunar_month as i32 - 1 + hour.index() as i32)
}

// Indexed by Mệnh branch, Tý..Hợi.
const CHU_MENH: [StarId; 12] = [
    StarId::ThamLang,
    StarId::CuMon,
    StarId::LocTon,
    StarId::VanKhuc,
    StarId::LiemTrinh,
    StarId::VuKhuc,
    StarId::PhaQuan,
    StarId::VuKhuc,
    StarId::LiemTrinh,
    StarId::VanKhuc,
    StarId::LocTon,
    StarId::CuMon,
];

// Indexed by year branch, Tý..Hợi.
const CHU_THAN: [StarId; 12] = [
    StarId::LinhTinh,
    StarId::ThienTuong,
    StarId::ThienLuong,
    StarId::ThienDong,
    StarId::VanXuong,
    StarId::ThienCo,
    StarId::HoaTinh,
    StarId::ThienTuong,
    StarId::ThienLuong,
    StarId::ThienDong,
    StarId::VanXuong,
    StarId::ThienCo,
];

/// Ruler of the Mệnh house (Chủ Mệnh).
pub fn chu_menh(menh: Branch) -> StarId {
    CHU_MENH[menh.index() as usize]
}

/// Ruler of the body (Chủ Thân), keyed by the year branch.
pub fn chu_than(year_branch: Branch) -> StarId {
    CHU_THAN[year_branch.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::can_chi::ALL_BRANCHES;

    #[test]
    fn first_month_ty_hour_is_dan() {
        assert_eq!(menh_branch(1, Branch::Ty), Branch::Dan);
        assert_eq!(than_branch(1, Branch::Ty), Branch::Dan);
    }

    #[test]
    fn twelfth_month() {
        assert_eq!(menh_branch(12, Branch::Ty), Branch::Suu);
        assert_eq!(menh_branch(12, Branch::Suu), Branch::Ty);
        assert_eq!(than_branch(12, Branch::Suu), Branch::Dan);
    }

    #[test]
    fn ty_and_ngo_hours_share_menh_and_than() {
        for month in 1..=12 {
            for hour in [Branch::Ty, Branch::Ngo] {
                assert_eq!(menh_branch(month, hour), than_branch(month, hour));
            }
        }
    }

    #[test]
    fn menh_and_than_mirror_around_month_house() {
        for month in 1..=12u8 {
            for hour in ALL_BRANCHES {
                let m = menh_branch(month, hour);
                let t = than_branch(month, hour);
                let month_house = Branch::Dan.offset(month as i32 - 1);
                assert_eq!(m.distance_to(month_house), month_house.distance_to(t));
            }
        }
    }

    #[test]
    fn rulers() {
        assert_eq!(chu_menh(Branch::Ty), StarId::ThamLang);
        assert_eq!(chu_menh(Branch::Ngo), StarId::PhaQuan);
        assert_eq!(chu_than(Branch::Ty), StarId::LinhTinh);
        assert_eq!(chu_than(Branch::Ngo), StarId::HoaTinh);
    }
}
