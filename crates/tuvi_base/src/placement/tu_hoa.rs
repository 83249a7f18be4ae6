//! Tứ Hóa: the four transformations attached to stars by the year stem.
//!
//! Each target is resolved through the placement registry. The Hóa star
//! is placed in the target's house and the target is tagged.

use tracing::error;

use crate::can_chi::Stem;
use crate::star::{ALL_TRANSFORMATIONS, StarId};

use super::{PlacementContext, StarPlacements};

/// Targets for (Hóa Lộc, Hóa Quyền, Hóa Khoa, Hóa Kỵ), per stem.
pub const fn targets(stem: Stem) -> [StarId; 4] {
    use StarId::*;
    match stem {
        Stem::Giap => [LiemTrinh, PhaQuan, VuKhuc, ThaiDuong],
        Stem::At => [ThienCo, ThienLuong, TuVi, ThaiAm],
        Stem::Binh => [ThienDong, ThienCo, VanXuong, LiemTrinh],
        Stem::Dinh => [ThaiAm, ThienDong, ThienCo, CuMon],
        Stem::Mau => [ThamLang, ThaiAm, HuuBat, ThienCo],
        Stem::Ky => [VuKhuc, ThamLang, ThienLuong, VanKhuc],
        Stem::Canh => [ThaiDuong, VuKhuc, ThaiAm, ThienDong],
        Stem::Tan => [CuMon, ThaiDuong, VanKhuc, VanXuong],
        Stem::Nham => [ThienLuong, TuVi, TaPhu, VuKhuc],
        Stem::Quy => [PhaQuan, CuMon, ThaiAm, ThamLang],
    }
}

pub fn place(ctx: &PlacementContext, placements: &mut StarPlacements) {
    for (transformation, target) in ALL_TRANSFORMATIONS.into_iter().zip(targets(ctx.year.stem)) {
        debug_assert!(
            placements.position(target).is_some(),
            "{target:?} must be placed before tứ hóa"
        );
        let Some(branch) = placements.position(target) else {
            error!(?target, "tứ hóa target not placed");
            continue;
        };
        placements.tag(target, transformation);
        placements.place(transformation.star(), branch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::can_chi::{ALL_STEMS, Branch};
    use crate::direction::Gender;
    use crate::placement::test_support::context;
    use crate::placement::{by_hour, by_month, main_stars};
    use crate::star::Transformation;

    #[test]
    fn every_target_is_placed_before_tu_hoa() {
        // Targets are main stars or the hour/month literary and assistant stars.
        let ctx = context(2000, 1, 1, Branch::Ty, Gender::Male);
        let mut p = StarPlacements::new();
        main_stars::place(&ctx, &mut p);
        by_hour::place(&ctx, &mut p);
        by_month::place(&ctx, &mut p);
        for stem in ALL_STEMS {
            for target in targets(stem) {
                assert!(p.position(target).is_some(), "{stem:?} {target:?}");
            }
        }
    }

    #[test]
    fn targets_distinct_per_stem() {
        for stem in ALL_STEMS {
            let t = targets(stem);
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(t[i], t[j], "{stem:?}");
                }
            }
        }
    }

    #[test]
    fn at_year_tags_and_colocates() {
        let ctx = context(1985, 12, 25, Branch::Ty, Gender::Female);
        let mut p = StarPlacements::new();
        main_stars::place(&ctx, &mut p);
        by_hour::place(&ctx, &mut p);
        by_month::place(&ctx, &mut p);
        place(&ctx, &mut p);
        assert_eq!(p.transformation(StarId::ThienCo), Some(Transformation::HoaLoc));
        assert_eq!(p.transformation(StarId::ThaiAm), Some(Transformation::HoaKy));
        assert_eq!(p.position(StarId::HoaLoc), p.position(StarId::ThienCo));
        assert_eq!(p.position(StarId::HoaKhoa), Some(Branch::Ngo));
        assert_eq!(p.position(StarId::HoaKy), Some(Branch::Hoi));
    }
}
