//! Tử Vi (Purple Star Astrology) chart generation.
//!
//! This crate provides:
//! - Stems, branches, the five elements and the Nạp Âm cycle
//! - Mệnh/Thân houses, Cục and the ring direction
//! - Placement of the 14 main stars and the secondary stars
//! - Đại Vận, Tuần/Triệt, star-group patterns and destiny scores
//! - [`ChartEngine`] and [`generate_chart`] assembling a full [`Chart`]
//!
//! Chart generation is a pure function of its input. Dates are converted
//! through the [`tuvi_calendar::LunarCalendar`] trait.

pub mod brightness;
pub mod can_chi;
pub mod chart;
pub mod config;
pub mod cuc;
pub mod dai_van;
pub mod direction;
pub mod element;
pub mod error;
pub mod menh;
pub mod nap_am;
pub mod palace;
pub mod pattern;
pub mod pillar;
pub mod placement;
pub mod score;
pub mod star;
pub mod tuan_triet;

pub use can_chi::{ALL_BRANCHES, ALL_STEMS, Branch, Polarity, Stem};
pub use chart::{
    BirthInput, BirthRecord, CalendarType, Chart, ChartEngine, build_chart, build_chart_with,
    generate_chart,
};
pub use config::{ChartConfig, LeapMonthRule};
pub use cuc::{Cuc, cuc_for, house_stem};
pub use direction::{Gender, RingDirection};
pub use element::{Element, ElementRelation};
pub use error::ChartError;
pub use nap_am::{NapAm, nap_am_of};
pub use palace::{ALL_PALACE_NAMES, Palace, PalaceName};
pub use pattern::StarPattern;
pub use pillar::{YearPillar, year_pillar};
pub use score::DestinyScores;
pub use star::{Brightness, MAIN_STARS, Nature, Star, StarId, StarKind, Transformation};
