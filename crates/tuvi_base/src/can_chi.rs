//! Heavenly Stems (Thiên Can) and Earthly Branches (Địa Chi).
//!
//! The 10 stems and 12 branches are the two rings every placement rule
//! counts over. Index 0 is Giáp / Tý; branch 2 (Dần) is the first month.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

/// The 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All 10 stems in order (0 = Giáp, 9 = Quý).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Giap,
    Stem::At,
    Stem::Binh,
    Stem::Dinh,
    Stem::Mau,
    Stem::Ky,
    Stem::Canh,
    Stem::Tan,
    Stem::Nham,
    Stem::Quy,
];

impl Stem {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`, wrapping mod 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Step `steps` stems forward (negative steps go backward).
    pub fn offset(self, steps: i32) -> Self {
        ALL_STEMS[(self.index() as i32 + steps).rem_euclid(10) as usize]
    }

    /// Even-indexed stems are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self.polarity(), Polarity::Yang)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Giap | Self::At => Element::Moc,
            Self::Binh | Self::Dinh => Element::Hoa,
            Self::Mau | Self::Ky => Element::Tho,
            Self::Canh | Self::Tan => Element::Kim,
            Self::Nham | Self::Quy => Element::Thuy,
        }
    }
}

/// The 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All 12 branches in order (0 = Tý, 11 = Hợi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ty,
    Branch::Suu,
    Branch::Dan,
    Branch::Mao,
    Branch::Thin,
    Branch::Ti,
    Branch::Ngo,
    Branch::Mui,
    Branch::Than,
    Branch::Dau,
    Branch::Tuat,
    Branch::Hoi,
];

impl Branch {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// Canonical ASCII hour token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ty => "ty",
            Self::Suu => "suu",
            Self::Dan => "dan",
            Self::Mao => "mao",
            Self::Thin => "thin",
            Self::Ti => "ti",
            Self::Ngo => "ngo",
            Self::Mui => "mui",
            Self::Than => "than",
            Self::Dau => "dau",
            Self::Tuat => "tuat",
            Self::Hoi => "hoi",
        }
    }

    /// 0-based index (Tý=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`, wrapping mod 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Step `steps` branches forward (negative steps go backward).
    pub fn offset(self, steps: i32) -> Self {
        ALL_BRANCHES[(self.index() as i32 + steps).rem_euclid(12) as usize]
    }

    /// Forward distance from `self` to `to`, in 0..12.
    pub fn distance_to(self, to: Branch) -> u8 {
        (to.index() as i32 - self.index() as i32).rem_euclid(12) as u8
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Ty | Self::Hoi => Element::Thuy,
            Self::Dan | Self::Mao => Element::Moc,
            Self::Ti | Self::Ngo => Element::Hoa,
            Self::Than | Self::Dau => Element::Kim,
            Self::Suu | Self::Thin | Self::Mui | Self::Tuat => Element::Tho,
        }
    }

    /// Branch of the two-hour slot containing clock hour `hour` (0..=23).
    ///
    /// Tý spans 23:00-00:59, Sửu 01:00-02:59, and so on.
    pub const fn from_clock_hour(hour: u8) -> Self {
        Self::from_index(((hour % 24 + 1) / 2) % 12)
    }

    /// Parse a birth-hour token.
    ///
    /// Accepts the ASCII tokens (`ty suu dan mao thin ti ngo mui than dau
    /// tuat hoi`), the Vietnamese names with diacritics, the pinyin names
    /// and `HH:MM` clock times. Case and surrounding whitespace are ignored.
    pub fn from_hour_token(token: &str) -> Option<Self> {
        let t = token.trim().to_lowercase();
        let branch = match t.as_str() {
            "ty" | "tý" | "tí" | "zi" => Self::Ty,
            "suu" | "sửu" | "chou" => Self::Suu,
            "dan" | "dần" | "yin" => Self::Dan,
            "mao" | "mão" | "mẹo" => Self::Mao,
            "thin" | "thìn" | "chen" => Self::Thin,
            "ti" | "tỵ" | "tị" | "si" => Self::Ti,
            "ngo" | "ngọ" | "wu" => Self::Ngo,
            "mui" | "mùi" | "wei" => Self::Mui,
            "than" | "thân" | "shen" => Self::Than,
            "dau" | "dậu" | "you" => Self::Dau,
            "tuat" | "tuất" | "xu" => Self::Tuat,
            "hoi" | "hợi" | "hai" => Self::Hoi,
            _ => return parse_clock(&t).map(Self::from_clock_hour),
        };
        Some(branch)
    }
}

fn parse_clock(t: &str) -> Option<u8> {
    let (h, m) = t.split_once(':')?;
    let hour: u8 = h.parse().ok()?;
    let minute: u8 = m.parse().ok()?;
    (hour < 24 && minute < 60).then_some(hour)
}
