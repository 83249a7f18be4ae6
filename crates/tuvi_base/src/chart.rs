//! Chart assembly: birth input → resolved record → finished chart.
//!
//! [`ChartEngine::resolve`] validates the external input and converts the
//! date through a [`LunarCalendar`]. [`build_chart`] is total over a
//! resolved [`BirthRecord`] and runs the placement pipeline:
//! year pillar → Mệnh/Thân → Cục → stars → Đại Vận → Tuần/Triệt →
//! pattern → scores.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tuvi_calendar::{LunarCalendar, LunarDate, SolarDate, VietnameseCalendar};

use crate::can_chi::Branch;
use crate::config::ChartConfig;
use crate::cuc::{Cuc, cuc_for, house_stem, menh_cuc_relation};
use crate::dai_van::{branch_for_age, decade_start_ages};
use crate::direction::{Gender, RingDirection, yin_yang_label};
use crate::element::ElementRelation;
use crate::error::ChartError;
use crate::menh::{chu_menh, chu_than, menh_branch, than_branch};
use crate::palace::{ALL_PALACE_NAMES, Palace, PalaceName};
use crate::pattern::{StarPattern, classify};
use crate::pillar::{YearPillar, year_pillar};
use crate::placement::{PlacementContext, place_all};
use crate::score::DestinyScores;
use crate::star::{Star, StarId, StarKind};
use crate::tuan_triet::{triet, tuan};

/// Which calendar `birth_date` is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    Lunar,
    Solar,
}

impl FromStr for CalendarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lunar" | "am" | "âm" => Ok(Self::Lunar),
            "solar" | "duong" | "dương" => Ok(Self::Solar),
            other => Err(format!("unknown calendar type {other:?}")),
        }
    }
}

/// Birth data as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub full_name: String,
    /// `YYYY-MM-DD` in the calendar named by `calendar_type`.
    pub birth_date: String,
    /// Hour token (`ty`, `Tý`, `zi`, `23:30`, ...).
    pub birth_hour: String,
    /// `male` or `female`.
    pub gender: String,
    /// `lunar` or `solar`.
    pub calendar_type: String,
    /// Lunar input only: the date falls in the leap month.
    #[serde(default)]
    pub is_leap_month: bool,
}

/// Validated birth data, ready for placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthRecord {
    pub full_name: String,
    pub lunar_date: LunarDate,
    pub solar_date: Option<SolarDate>,
    pub hour: Branch,
    pub gender: Gender,
}

/// A finished Tử Vi chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub full_name: String,
    pub gender: Gender,
    pub solar_date: Option<SolarDate>,
    pub lunar_date: LunarDate,
    pub hour: Branch,
    pub year: YearPillar,
    pub direction: RingDirection,
    /// "Dương Nam", "Âm Nữ", ...
    pub yin_yang: String,
    pub menh_branch: Branch,
    pub than_branch: Branch,
    pub cuc: Cuc,
    pub menh_cuc_relation: ElementRelation,
    pub chu_menh: StarId,
    pub chu_than: StarId,
    /// In canonical order, starting with Mệnh.
    pub palaces: [Palace; 12],
    pub tuan: [Branch; 2],
    pub triet: [Branch; 2],
    pub star_group: StarPattern,
    pub scores: DestinyScores,
}

impl Chart {
    pub fn palace(&self, name: PalaceName) -> &Palace {
        &self.palaces[name.index() as usize]
    }

    /// Palace sitting in `branch`.
    pub fn palace_at(&self, branch: Branch) -> &Palace {
        let i = self.menh_branch.distance_to(branch);
        &self.palaces[i as usize]
    }

    pub fn main_star_count(&self) -> usize {
        self.palaces.iter().map(|p| p.main_stars.len()).sum()
    }

    /// The palace holding `star`, and the placed star record.
    pub fn find_star(&self, star: StarId) -> Option<(&Palace, &Star)> {
        self.palaces
            .iter()
            .find_map(|p| p.stars().find(|s| s.id == star).map(|s| (p, s)))
    }

    /// Palace whose ten-year period covers `age`. `None` before the first
    /// period starts (ages below the Cục number).
    pub fn decade_at_age(&self, age: u32) -> Option<&Palace> {
        branch_for_age(self.menh_branch, self.cuc.number, self.direction, age)
            .map(|b| self.palace_at(b))
    }

    /// Mệnh and the two palaces four and eight steps on.
    pub fn triad(&self) -> [&Palace; 3] {
        [
            self.palace_at(self.menh_branch),
            self.palace_at(self.menh_branch.offset(4)),
            self.palace_at(self.menh_branch.offset(8)),
        ]
    }
}

/// Build a chart with the default configuration.
pub fn build_chart(record: &BirthRecord) -> Chart {
    build_chart_with(record, &ChartConfig::default())
}

/// Build a chart from a resolved record.
pub fn build_chart_with(record: &BirthRecord, config: &ChartConfig) -> Chart {
    let lunar = record.lunar_date;
    let month = config
        .leap_month_rule
        .effective_month(lunar.month, lunar.day, lunar.is_leap_month);

    let year = year_pillar(lunar.year);
    let direction = RingDirection::for_birth(record.gender, year.stem);
    let menh = menh_branch(month, record.hour);
    let than = than_branch(month, record.hour);
    let cuc = cuc_for(year.stem, menh);
    debug!(
        year = %year.label(),
        menh = menh.name(),
        than = than.name(),
        cuc = cuc.name(),
        ?direction,
        "chart frame resolved"
    );

    let ctx = PlacementContext {
        hour: record.hour,
        month,
        day: lunar.day,
        year,
        menh,
        cuc,
        direction,
    };
    let placements = place_all(&ctx);
    debug!(count = placements.len(), "stars placed");

    let ages = decade_start_ages(menh, cuc.number, direction);
    let tuan = tuan(year.stem, year.branch);
    let triet = triet(year.stem);

    let palaces: [Palace; 12] = std::array::from_fn(|i| {
        let name = ALL_PALACE_NAMES[i];
        let branch = name.branch(menh);
        let (main_stars, secondary_stars): (Vec<Star>, Vec<Star>) = placements
            .in_branch(branch)
            .map(|id| Star {
                transformation: placements.transformation(id),
                ..Star::placed(id, branch)
            })
            .partition(|s| s.kind == StarKind::Main);
        Palace {
            name,
            branch,
            stem: house_stem(year.stem, branch),
            element: branch.element(),
            main_stars,
            secondary_stars,
            decade_start_age: ages[branch.index() as usize],
            is_tuan: tuan.contains(&branch),
            is_triet: triet.contains(&branch),
            is_body_palace: branch == than,
        }
    });

    let triad_main: Vec<StarId> = [menh, menh.offset(4), menh.offset(8)]
        .iter()
        .flat_map(|&b| placements.in_branch(b).filter(|s| s.is_main()))
        .collect();
    let star_group = classify(&triad_main);

    let by_name = |name: PalaceName| &palaces[name.index() as usize];
    let scores = DestinyScores::from_palaces(
        by_name(PalaceName::QuanLoc),
        by_name(PalaceName::TaiBach),
        by_name(PalaceName::PhuThe),
        by_name(PalaceName::TatAch),
    );
    debug!(pattern = star_group.name, ?scores, "chart assembled");

    Chart {
        full_name: record.full_name.clone(),
        gender: record.gender,
        solar_date: record.solar_date,
        lunar_date: lunar,
        hour: record.hour,
        year,
        direction,
        yin_yang: yin_yang_label(record.gender, year.stem),
        menh_branch: menh,
        than_branch: than,
        cuc,
        menh_cuc_relation: menh_cuc_relation(year.nap_am.element, cuc),
        chu_menh: chu_menh(menh),
        chu_than: chu_than(year.branch),
        palaces,
        tuan,
        triet,
        star_group,
        scores,
    }
}

/// Chart generator bound to a calendar and a configuration.
#[derive(Debug, Clone)]
pub struct ChartEngine<C: LunarCalendar = VietnameseCalendar> {
    calendar: C,
    config: ChartConfig,
}

impl ChartEngine<VietnameseCalendar> {
    /// Engine using the Vietnamese calendar at the configured time zone.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            calendar: VietnameseCalendar::new(config.timezone_offset_hours),
            config,
        }
    }
}

impl Default for ChartEngine<VietnameseCalendar> {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl<C: LunarCalendar> ChartEngine<C> {
    pub fn with_calendar(calendar: C, config: ChartConfig) -> Self {
        Self { calendar, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Validate `input` and convert its date. Unknown hour tokens fall back
    /// to the configured default hour.
    pub fn resolve(&self, input: &BirthInput) -> Result<BirthRecord, ChartError> {
        let gender: Gender = input.gender.parse().map_err(ChartError::InvalidInput)?;
        let calendar_type: CalendarType =
            input.calendar_type.parse().map_err(ChartError::InvalidInput)?;

        let hour = Branch::from_hour_token(&input.birth_hour).unwrap_or_else(|| {
            warn!(
                token = %input.birth_hour,
                fallback = self.config.default_hour.name(),
                "unknown birth hour, using default"
            );
            self.config.default_hour
        });

        let (lunar_date, solar_date) = match calendar_type {
            CalendarType::Solar => {
                let solar: SolarDate = input.birth_date.parse()?;
                (self.calendar.solar_to_lunar(solar)?, solar)
            }
            CalendarType::Lunar => {
                let parsed = LunarDate::parse(&input.birth_date)?;
                let lunar = LunarDate {
                    is_leap_month: input.is_leap_month,
                    ..parsed
                };
                // Also rejects day 30 of a short month and absent leap months.
                (lunar, self.calendar.lunar_to_solar(lunar)?)
            }
        };
        debug!(%lunar_date, %solar_date, hour = hour.name(), "birth input resolved");

        Ok(BirthRecord {
            full_name: input.full_name.clone(),
            lunar_date,
            solar_date: Some(solar_date),
            hour,
            gender,
        })
    }

    /// Resolve and build a chart.
    pub fn generate(&self, input: &BirthInput) -> Result<Chart, ChartError> {
        let record = self.resolve(input)?;
        Ok(build_chart_with(&record, &self.config))
    }
}

/// Generate a chart with the default calendar and configuration.
pub fn generate_chart(input: &BirthInput) -> Result<Chart, ChartError> {
    ChartEngine::default().generate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuvi_calendar::CalendarError;

    fn input(date: &str, hour: &str, gender: &str, calendar: &str) -> BirthInput {
        BirthInput {
            full_name: "Test".into(),
            birth_date: date.into(),
            birth_hour: hour.into(),
            gender: gender.into(),
            calendar_type: calendar.into(),
            is_leap_month: false,
        }
    }

    #[test]
    fn calendar_type_parsing() {
        assert_eq!("Solar".parse::<CalendarType>(), Ok(CalendarType::Solar));
        assert_eq!("lunar".parse::<CalendarType>(), Ok(CalendarType::Lunar));
        assert!("julian".parse::<CalendarType>().is_err());
    }

    #[test]
    fn resolve_solar() {
        let engine = ChartEngine::default();
        let i = input("1990-05-15", "ngo", "male", "solar");
        let r = engine.resolve(&i).unwrap();
        assert_eq!(r.lunar_date, LunarDate::new(1990, 4, 21, false).unwrap());
        assert_eq!(r.hour, Branch::Ngo);
        assert_eq!(r.gender, Gender::Male);
    }

    #[test]
    fn unknown_hour_falls_back_to_config() {
        let engine = ChartEngine::default();
        let r = engine.resolve(&input("1985-12-25", "noon", "female", "lunar")).unwrap();
        assert_eq!(r.hour, Branch::Ty);

        let cfg = ChartConfig {
            default_hour: Branch::Ngo,
            ..ChartConfig::default()
        };
        let engine = ChartEngine::new(cfg);
        let r = engine.resolve(&input("1985-12-25", "", "female", "lunar")).unwrap();
        assert_eq!(r.hour, Branch::Ngo);
    }

    #[test]
    fn invalid_inputs_rejected() {
        let engine = ChartEngine::default();
        let err = engine.resolve(&input("1985-12-25", "ty", "x", "lunar")).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
        let err = engine.resolve(&input("1985-12-25", "ty", "male", "mayan")).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
        let err = engine.resolve(&input("1985/12/25", "ty", "male", "solar")).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Calendar(CalendarError::MalformedDate(_))
        ));
        let err = engine.resolve(&input("1985-13-01", "ty", "male", "lunar")).unwrap_err();
        assert_eq!(err, ChartError::Calendar(CalendarError::MonthOutOfRange(13)));
    }

    #[test]
    fn absent_leap_month_rejected() {
        let engine = ChartEngine::default();
        let mut i = input("2024-06-10", "ty", "male", "lunar");
        i.is_leap_month = true;
        let err = engine.resolve(&i).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Calendar(CalendarError::NoSuchLeapMonth { .. })
        ));
    }

    #[test]
    fn chart_accessors() {
        let chart = generate_chart(&input("1985-12-25", "ty", "female", "lunar")).unwrap();
        assert_eq!(chart.palace(PalaceName::Menh).branch, Branch::Suu);
        assert_eq!(chart.palace_at(Branch::Suu).name, PalaceName::Menh);
        assert_eq!(chart.palace_at(Branch::Ty).name, PalaceName::HuynhDe);
        let (palace, star) = chart.find_star(StarId::TuVi).unwrap();
        assert_eq!(palace.branch, Branch::Ngo);
        assert_eq!(star.transformation, Some(crate::star::Transformation::HoaKhoa));
        assert_eq!(chart.triad()[1].branch, Branch::Ti);
        assert!(chart.palace_at(chart.than_branch).is_body_palace);
    }

    #[test]
    fn decade_lookup() {
        let chart = generate_chart(&input("1985-12-25", "ty", "female", "lunar")).unwrap();
        assert!(chart.decade_at_age(5).is_none());
        assert_eq!(chart.decade_at_age(6).unwrap().name, PalaceName::Menh);
        assert_eq!(chart.decade_at_age(20).unwrap().branch, Branch::Dan);
    }

    #[test]
    fn leap_month_rule_shifts_placement_month() {
        // 2020 has a leap fourth month.
        let mut i = input("2020-04-20", "ty", "male", "lunar");
        i.is_leap_month = true;
        let regular = ChartEngine::default().generate(&i).unwrap();
        let split = ChartEngine::new(ChartConfig {
            leap_month_rule: crate::config::LeapMonthRule::SplitAtMidMonth,
            ..ChartConfig::default()
        })
        .generate(&i)
        .unwrap();
        assert_eq!(regular.menh_branch, Branch::Ti);
        assert_eq!(split.menh_branch, Branch::Ngo);
    }
}
