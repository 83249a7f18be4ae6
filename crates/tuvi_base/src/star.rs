//! Star catalogue: identifiers, static attributes and the placed-star record.
//!
//! Every star the engine can place has a [`StarId`]. Attributes (name,
//! Chinese name, element, nature) come from one static table so that rules
//! and lookups refer to stars by identifier, never by display string.

use serde::Serialize;

use crate::brightness::brightness;
use crate::can_chi::Branch;
use crate::element::Element;

/// Main (chính tinh) or secondary (phụ tinh) star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarKind {
    Main,
    Secondary,
}

/// Benefic / malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nature {
    Good,
    Bad,
    Neutral,
}

/// Brightness (đắc tinh) of a star in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Brightness {
    /// Miếu
    #[serde(rename = "M")]
    Mieu,
    /// Vượng
    #[serde(rename = "V")]
    Vuong,
    /// Đắc
    #[serde(rename = "Đ")]
    Dac,
    /// Hãm
    #[serde(rename = "H")]
    Ham,
}

impl Brightness {
    /// Single-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mieu => "M",
            Self::Vuong => "V",
            Self::Dac => "Đ",
            Self::Ham => "H",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mieu => "Miếu",
            Self::Vuong => "Vượng",
            Self::Dac => "Đắc",
            Self::Ham => "Hãm",
        }
    }
}

/// The four transformations (Tứ Hóa) driven by the year stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Transformation {
    HoaLoc,
    HoaQuyen,
    HoaKhoa,
    HoaKy,
}

/// Tứ Hóa in table order (Lộc, Quyền, Khoa, Kỵ).
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::HoaLoc,
    Transformation::HoaQuyen,
    Transformation::HoaKhoa,
    Transformation::HoaKy,
];

impl Transformation {
    /// The secondary star that marks this transformation on the chart.
    pub const fn star(self) -> StarId {
        match self {
            Self::HoaLoc => StarId::HoaLoc,
            Self::HoaQuyen => StarId::HoaQuyen,
            Self::HoaKhoa => StarId::HoaKhoa,
            Self::HoaKy => StarId::HoaKy,
        }
    }

    pub const fn name(self) -> &'static str {
        self.star().info().name
    }
}

/// Every star the engine places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StarId {
    // Tử Vi chain
    TuVi,
    ThienCo,
    ThaiDuong,
    VuKhuc,
    ThienDong,
    LiemTrinh,
    // Thiên Phủ chain
    ThienPhu,
    ThaiAm,
    ThamLang,
    CuMon,
    ThienTuong,
    ThienLuong,
    ThatSat,
    PhaQuan,
    // Hour-keyed
    VanXuong,
    VanKhuc,
    DiaKhong,
    DiaKiep,
    ThaiPhu,
    PhongCao,
    HoaTinh,
    LinhTinh,
    // Month-keyed
    TaPhu,
    HuuBat,
    ThienHinh,
    ThienRieu,
    ThienY,
    ThienGiai,
    DiaGiai,
    // Day-keyed
    TamThai,
    BatToa,
    AnQuang,
    ThienQuy,
    // Year-stem-keyed
    LocTon,
    KinhDuong,
    DaLa,
    ThienKhoi,
    ThienViet,
    ThienQuan,
    ThienPhuc,
    LuuHa,
    ThienTru,
    QuocAn,
    DuongPhu,
    VanTinh,
    HoaLoc,
    HoaQuyen,
    HoaKhoa,
    HoaKy,
    // Year-branch-keyed
    LongTri,
    PhuongCac,
    GiaiThan,
    HongLoan,
    ThienHy,
    ThienKhoc,
    ThienHu,
    ThienDuc,
    NguyetDuc,
    ThienKhong,
    ThienMa,
    HoaCai,
    DaoHoa,
    KiepSat,
    CoThan,
    QuaTu,
    PhaToai,
    DauQuan,
    ThienTai,
    ThienTho,
    // Thái Tuế ring
    ThaiTue,
    ThieuDuong,
    TangMon,
    ThieuAm,
    QuanPhu,
    TuPhu,
    TuePha,
    LongDuc,
    BachHo,
    PhucDuc,
    DieuKhach,
    TrucPhu,
    // Bác Sỹ ring
    BacSy,
    LucSy,
    ThanhLong,
    TieuHao,
    TuongQuan,
    TauThu,
    PhiLiem,
    HyThan,
    BenhPhu,
    DaiHao,
    PhucBinh,
    QuanPhuBacSy,
    // Tràng Sinh ring
    TrangSinh,
    MocDuc,
    QuanDoi,
    LamQuan,
    DeVuong,
    Suy,
    Benh,
    Tu,
    Mo,
    Tuyet,
    Thai,
    Duong,
    // Fixed
    ThienLa,
    DiaVong,
    ThienThuong,
    ThienSu,
}

/// Number of distinct stars.
pub const STAR_COUNT: usize = StarId::ThienSu as usize + 1;

/// The 14 main stars: Tử Vi chain then Thiên Phủ chain.
pub const MAIN_STARS: [StarId; 14] = [
    StarId::TuVi,
    StarId::ThienCo,
    StarId::ThaiDuong,
    StarId::VuKhuc,
    StarId::ThienDong,
    StarId::LiemTrinh,
    StarId::ThienPhu,
    StarId::ThaiAm,
    StarId::ThamLang,
    StarId::CuMon,
    StarId::ThienTuong,
    StarId::ThienLuong,
    StarId::ThatSat,
    StarId::PhaQuan,
];

/// Static attributes of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarInfo {
    pub name: &'static str,
    pub chinese_name: Option<&'static str>,
    pub element: Option<Element>,
    pub nature: Nature,
}

const fn info(
    name: &'static str,
    chinese_name: Option<&'static str>,
    element: Option<Element>,
    nature: Nature,
) -> StarInfo {
    StarInfo {
        name,
        chinese_name,
        element,
        nature,
    }
}

impl StarId {
    /// Static attributes.
    pub const fn info(self) -> StarInfo {
        use Element::*;
        use Nature::*;
        match self {
            Self::TuVi => info("Tử Vi", Some("紫微"), Some(Tho), Good),
            Self::ThienCo => info("Thiên Cơ", Some("天機"), Some(Moc), Good),
            Self::ThaiDuong => info("Thái Dương", Some("太陽"), Some(Hoa), Good),
            Self::VuKhuc => info("Vũ Khúc", Some("武曲"), Some(Kim), Good),
            Self::ThienDong => info("Thiên Đồng", Some("天同"), Some(Thuy), Good),
            Self::LiemTrinh => info("Liêm Trinh", Some("廉貞"), Some(Hoa), Neutral),
            Self::ThienPhu => info("Thiên Phủ", Some("天府"), Some(Tho), Good),
            Self::ThaiAm => info("Thái Âm", Some("太陰"), Some(Thuy), Good),
            Self::ThamLang => info("Tham Lang", Some("貪狼"), Some(Thuy), Neutral),
            Self::CuMon => info("Cự Môn", Some("巨門"), Some(Thuy), Bad),
            Self::ThienTuong => info("Thiên Tướng", Some("天相"), Some(Thuy), Good),
            Self::ThienLuong => info("Thiên Lương", Some("天梁"), Some(Moc), Good),
            Self::ThatSat => info("Thất Sát", Some("七殺"), Some(Kim), Bad),
            Self::PhaQuan => info("Phá Quân", Some("破軍"), Some(Thuy), Bad),

            Self::VanXuong => info("Văn Xương", Some("文昌"), Some(Kim), Good),
            Self::VanKhuc => info("Văn Khúc", Some("文曲"), Some(Thuy), Good),
            Self::DiaKhong => info("Địa Không", Some("地空"), Some(Hoa), Bad),
            Self::DiaKiep => info("Địa Kiếp", Some("地劫"), Some(Hoa), Bad),
            Self::ThaiPhu => info("Thai Phụ", Some("台輔"), Some(Kim), Good),
            Self::PhongCao => info("Phong Cáo", Some("封誥"), Some(Tho), Good),
            Self::HoaTinh => info("Hỏa Tinh", Some("火星"), Some(Hoa), Bad),
            Self::LinhTinh => info("Linh Tinh", Some("鈴星"), Some(Hoa), Bad),

            Self::TaPhu => info("Tả Phụ", Some("左輔"), Some(Tho), Good),
            Self::HuuBat => info("Hữu Bật", Some("右弼"), Some(Thuy), Good),
            Self::ThienHinh => info("Thiên Hình", Some("天刑"), Some(Hoa), Bad),
            Self::ThienRieu => info("Thiên Riêu", Some("天姚"), Some(Thuy), Bad),
            Self::ThienY => info("Thiên Y", None, Some(Thuy), Good),
            Self::ThienGiai => info("Thiên Giải", Some("天解"), Some(Hoa), Good),
            Self::DiaGiai => info("Địa Giải", Some("地解"), Some(Tho), Good),

            Self::TamThai => info("Tam Thai", Some("三台"), Some(Thuy), Good),
            Self::BatToa => info("Bát Tọa", Some("八座"), Some(Moc), Good),
            Self::AnQuang => info("Ân Quang", Some("恩光"), Some(Moc), Good),
            Self::ThienQuy => info("Thiên Quý", Some("天貴"), Some(Tho), Good),

            Self::LocTon => info("Lộc Tồn", Some("祿存"), Some(Tho), Good),
            Self::KinhDuong => info("Kình Dương", Some("擎羊"), Some(Kim), Bad),
            Self::DaLa => info("Đà La", Some("陀羅"), Some(Kim), Bad),
            Self::ThienKhoi => info("Thiên Khôi", Some("天魁"), Some(Hoa), Good),
            Self::ThienViet => info("Thiên Việt", Some("天鉞"), Some(Hoa), Good),
            Self::ThienQuan => info("Thiên Quan", Some("天官"), Some(Hoa), Good),
            Self::ThienPhuc => info("Thiên Phúc", Some("天福"), Some(Tho), Good),
            Self::LuuHa => info("Lưu Hà", Some("流霞"), Some(Thuy), Bad),
            Self::ThienTru => info("Thiên Trù", Some("天廚"), Some(Tho), Good),
            Self::QuocAn => info("Quốc Ấn", Some("國印"), Some(Tho), Good),
            Self::DuongPhu => info("Đường Phù", Some("唐符"), Some(Moc), Good),
            Self::VanTinh => info("Văn Tinh", Some("文星"), Some(Hoa), Good),
            Self::HoaLoc => info("Hóa Lộc", Some("化祿"), Some(Moc), Good),
            Self::HoaQuyen => info("Hóa Quyền", Some("化權"), Some(Moc), Good),
            Self::HoaKhoa => info("Hóa Khoa", Some("化科"), Some(Thuy), Good),
            Self::HoaKy => info("Hóa Kỵ", Some("化忌"), Some(Thuy), Bad),

            Self::LongTri => info("Long Trì", Some("龍池"), Some(Thuy), Good),
            Self::PhuongCac => info("Phượng Các", Some("鳳閣"), Some(Tho), Good),
            Self::GiaiThan => info("Giải Thần", Some("解神"), Some(Moc), Good),
            Self::HongLoan => info("Hồng Loan", Some("紅鸞"), Some(Thuy), Good),
            Self::ThienHy => info("Thiên Hỷ", Some("天喜"), Some(Thuy), Good),
            Self::ThienKhoc => info("Thiên Khốc", Some("天哭"), Some(Kim), Bad),
            Self::ThienHu => info("Thiên Hư", Some("天虛"), Some(Thuy), Bad),
            Self::ThienDuc => info("Thiên Đức", Some("天德"), Some(Hoa), Good),
            Self::NguyetDuc => info("Nguyệt Đức", Some("月德"), Some(Hoa), Good),
            Self::ThienKhong => info("Thiên Không", Some("天空"), Some(Hoa), Bad),
            Self::ThienMa => info("Thiên Mã", Some("天馬"), Some(Hoa), Good),
            Self::HoaCai => info("Hoa Cái", Some("華蓋"), Some(Kim), Good),
            Self::DaoHoa => info("Đào Hoa", Some("咸池"), Some(Moc), Good),
            Self::KiepSat => info("Kiếp Sát", Some("劫煞"), Some(Hoa), Bad),
            Self::CoThan => info("Cô Thần", Some("孤辰"), Some(Tho), Bad),
            Self::QuaTu => info("Quả Tú", Some("寡宿"), Some(Tho), Bad),
            Self::PhaToai => info("Phá Toái", Some("破碎"), Some(Hoa), Bad),
            Self::DauQuan => info("Đẩu Quân", None, Some(Hoa), Neutral),
            Self::ThienTai => info("Thiên Tài", Some("天才"), Some(Tho), Good),
            Self::ThienTho => info("Thiên Thọ", Some("天壽"), Some(Tho), Good),

            Self::ThaiTue => info("Thái Tuế", Some("太歲"), Some(Hoa), Neutral),
            Self::ThieuDuong => info("Thiếu Dương", Some("少陽"), Some(Hoa), Good),
            Self::TangMon => info("Tang Môn", Some("喪門"), Some(Moc), Bad),
            Self::ThieuAm => info("Thiếu Âm", Some("少陰"), Some(Thuy), Good),
            Self::QuanPhu => info("Quan Phù", Some("官符"), Some(Hoa), Bad),
            Self::TuPhu => info("Tử Phù", Some("死符"), Some(Kim), Bad),
            Self::TuePha => info("Tuế Phá", Some("歲破"), Some(Hoa), Bad),
            Self::LongDuc => info("Long Đức", Some("龍德"), Some(Thuy), Good),
            Self::BachHo => info("Bạch Hổ", Some("白虎"), Some(Kim), Bad),
            Self::PhucDuc => info("Phúc Đức", Some("福德"), Some(Tho), Good),
            Self::DieuKhach => info("Điếu Khách", Some("弔客"), Some(Hoa), Bad),
            Self::TrucPhu => info("Trực Phù", None, Some(Kim), Bad),

            Self::BacSy => info("Bác Sỹ", Some("博士"), Some(Thuy), Good),
            Self::LucSy => info("Lực Sỹ", Some("力士"), Some(Hoa), Good),
            Self::ThanhLong => info("Thanh Long", Some("青龍"), Some(Thuy), Good),
            Self::TieuHao => info("Tiểu Hao", Some("小耗"), Some(Hoa), Bad),
            Self::TuongQuan => info("Tướng Quân", Some("將軍"), Some(Moc), Good),
            Self::TauThu => info("Tấu Thư", Some("奏書"), Some(Kim), Good),
            Self::PhiLiem => info("Phi Liêm", Some("飛廉"), Some(Hoa), Bad),
            Self::HyThan => info("Hỷ Thần", Some("喜神"), Some(Hoa), Good),
            Self::BenhPhu => info("Bệnh Phù", Some("病符"), Some(Tho), Bad),
            Self::DaiHao => info("Đại Hao", Some("大耗"), Some(Hoa), Bad),
            Self::PhucBinh => info("Phục Binh", Some("伏兵"), Some(Hoa), Bad),
            Self::QuanPhuBacSy => info("Quan Phủ", Some("官府"), Some(Hoa), Bad),

            Self::TrangSinh => info("Tràng Sinh", Some("長生"), Some(Thuy), Good),
            Self::MocDuc => info("Mộc Dục", Some("沐浴"), Some(Thuy), Neutral),
            Self::QuanDoi => info("Quan Đới", Some("冠帶"), Some(Kim), Good),
            Self::LamQuan => info("Lâm Quan", Some("臨官"), Some(Kim), Good),
            Self::DeVuong => info("Đế Vượng", Some("帝旺"), Some(Kim), Good),
            Self::Suy => info("Suy", Some("衰"), Some(Thuy), Neutral),
            Self::Benh => info("Bệnh", Some("病"), Some(Hoa), Bad),
            Self::Tu => info("Tử", Some("死"), Some(Hoa), Bad),
            Self::Mo => info("Mộ", Some("墓"), Some(Tho), Neutral),
            Self::Tuyet => info("Tuyệt", Some("絕"), Some(Tho), Bad),
            Self::Thai => info("Thai", Some("胎"), Some(Tho), Neutral),
            Self::Duong => info("Dưỡng", Some("養"), Some(Moc), Good),

            Self::ThienLa => info("Thiên La", Some("天羅"), None, Bad),
            Self::DiaVong => info("Địa Võng", Some("地網"), None, Bad),
            Self::ThienThuong => info("Thiên Thương", Some("天傷"), Some(Thuy), Bad),
            Self::ThienSu => info("Thiên Sứ", Some("天使"), Some(Thuy), Bad),
        }
    }

    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn nature(self) -> Nature {
        self.info().nature
    }

    pub const fn kind(self) -> StarKind {
        if (self as usize) < MAIN_STARS.len() {
            StarKind::Main
        } else {
            StarKind::Secondary
        }
    }

    pub const fn is_main(self) -> bool {
        matches!(self.kind(), StarKind::Main)
    }
}

/// A star as placed in one palace of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Star {
    pub id: StarId,
    pub name: &'static str,
    pub chinese_name: Option<&'static str>,
    pub kind: StarKind,
    pub nature: Nature,
    pub brightness: Option<Brightness>,
    pub element: Option<Element>,
    /// Tứ Hóa transformation attached to this star by the year stem.
    pub transformation: Option<Transformation>,
}

impl Star {
    /// Record for `id` sitting in `branch`, with brightness looked up.
    pub fn placed(id: StarId, branch: Branch) -> Self {
        let info = id.info();
        Self {
            id,
            name: info.name,
            chinese_name: info.chinese_name,
            kind: id.kind(),
            nature: info.nature,
            brightness: brightness(id, branch),
            element: info.element,
            transformation: None,
        }
    }

    /// "Tử Vi (M)" style label.
    pub fn label(&self) -> String {
        match self.brightness {
            Some(b) => format!("{} ({})", self.name, b.code()),
            None => self.name.to_string(),
        }
    }
}
