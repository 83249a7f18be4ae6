//! Stars keyed by the year branch.

use crate::can_chi::Branch;
use crate::star::StarId;

use super::{PlacementContext, StarPlacements};

// Triad tables, indexed by year branch mod 4 (Thân Tý Thìn, Tỵ Dậu Sửu,
// Dần Ngọ Tuất, Hợi Mão Mùi).
const THIEN_MA: [u8; 4] = [2, 11, 8, 5];
const HOA_CAI: [u8; 4] = [4, 1, 10, 7];
const DAO_HOA: [u8; 4] = [9, 6, 3, 0];
const KIEP_SAT: [u8; 4] = [5, 2, 11, 8];

// Indexed by year branch mod 3.
const PHA_TOAI: [u8; 3] = [5, 1, 9];

fn triad(table: &[u8; 4], year_branch: Branch) -> Branch {
    Branch::from_index(table[(year_branch.index() % 4) as usize])
}

/// Cô Thần and Quả Tú by season of the year branch.
pub fn co_qua(year_branch: Branch) -> (Branch, Branch) {
    match year_branch {
        Branch::Hoi | Branch::Ty | Branch::Suu => (Branch::Dan, Branch::Tuat),
        Branch::Dan | Branch::Mao | Branch::Thin => (Branch::Ti, Branch::Suu),
        Branch::Ti | Branch::Ngo | Branch::Mui => (Branch::Than, Branch::Thin),
        Branch::Than | Branch::Dau | Branch::Tuat => (Branch::Hoi, Branch::Mui),
    }
}

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    let y = ctx.y();
    let m = ctx.m();
    let h = ctx.h();
    let year_branch = ctx.year.branch;

    placements.place(StarId::LongTri, Branch::Thin.offset(y));
    let phuong_cac = Branch::Tuat.offset(-y);
    placements.place(StarId::PhuongCac, phuong_cac);
    placements.place(StarId::GiaiThan, phuong_cac);
    let hong_loan = Branch::Mao.offset(-y);
    placements.place(StarId::HongLoan, hong_loan);
    placements.place(StarId::ThienHy, hong_loan.offset(6));
    placements.place(StarId::ThienKhoc, Branch::Ngo.offset(-y));
    placements.place(StarId::ThienHu, Branch::Ngo.offset(y));
    placements.place(StarId::ThienDuc, Branch::Dau.offset(y));
    placements.place(StarId::NguyetDuc, Branch::Ti.offset(y));
    placements.place(StarId::ThienKhong, year_branch.offset(1));

    placements.place(StarId::ThienMa, triad(&THIEN_MA, year_branch));
    placements.place(StarId::HoaCai, triad(&HOA_CAI, year_branch));
    placements.place(StarId::DaoHoa, triad(&DAO_HOA, year_branch));
    placements.place(StarId::KiepSat, triad(&KIEP_SAT, year_branch));

    let (co_than, qua_tu) = co_qua(year_branch);
    placements.place(StarId::CoThan, co_than);
    placements.place(StarId::QuaTu, qua_tu);
    placements.place(
        StarId::PhaToai,
        Branch::from_index(PHA_TOAI[(year_branch.index() % 3) as usize]),
    );

    placements.place(StarId::DauQuan, year_branch.offset(-m + h));
    // Thiên Tài and Thiên Thọ: formulas kept as listed; some schools count
    // Thiên Tài from Mệnh and Thiên Thọ from Thân instead.
    placements.place(StarId::ThienTai, Branch::Dan.offset(m - h + y));
    placements.place(StarId::ThienTho, Branch::Dan.offset(m + h + y));
}
