//! Destiny scores: a weighted tally of the stars in four palaces.
//!
//! This is a heuristic for display, not a classical rule.

use serde::Serialize;

use crate::palace::Palace;
use crate::star::{Brightness, Nature, StarId};

pub const BASE_SCORE: i32 = 60;
pub const MIN_SCORE: i32 = 20;
pub const MAX_SCORE: i32 = 98;

const LUCKY: [StarId; 10] = [
    StarId::HoaLoc,
    StarId::HoaQuyen,
    StarId::HoaKhoa,
    StarId::LocTon,
    StarId::ThienKhoi,
    StarId::ThienViet,
    StarId::TaPhu,
    StarId::HuuBat,
    StarId::VanXuong,
    StarId::VanKhuc,
];

const UNLUCKY: [StarId; 7] = [
    StarId::HoaKy,
    StarId::KinhDuong,
    StarId::DaLa,
    StarId::DiaKhong,
    StarId::DiaKiep,
    StarId::HoaTinh,
    StarId::LinhTinh,
];

/// Scores for career, finance, romance and health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinyScores {
    pub career: u8,
    pub finance: u8,
    pub romance: u8,
    pub health: u8,
}

fn nature_weight(nature: Nature, weight: i32) -> i32 {
    match nature {
        Nature::Good => weight,
        Nature::Bad => -weight,
        Nature::Neutral => 0,
    }
}

/// Score of one palace, clamped to `MIN_SCORE..=MAX_SCORE`.
pub fn palace_score(palace: &Palace) -> u8 {
    let mut score = BASE_SCORE;
    for star in &palace.main_stars {
        score += match star.brightness {
            Some(Brightness::Mieu | Brightness::Vuong) => 8,
            Some(Brightness::Dac) => 4,
            Some(Brightness::Ham) => -5,
            None => 0,
        };
        score += nature_weight(star.nature, 2);
    }
    for star in &palace.secondary_stars {
        score += nature_weight(star.nature, 3);
        if LUCKY.contains(&star.id) {
            score += 5;
        } else if UNLUCKY.contains(&star.id) {
            score -= 5;
        }
    }
    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

impl DestinyScores {
    pub fn from_palaces(career: &Palace, finance: &Palace, romance: &Palace, health: &Palace) -> Self {
        Self {
            career: palace_score(career),
            finance: palace_score(finance),
            romance: palace_score(romance),
            health: palace_score(health),
        }
    }
}
