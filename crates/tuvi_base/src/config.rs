//! Chart engine configuration, loaded from TOML.
//!
//! ```toml
//! timezone_offset_hours = 7.0
//! default_hour = "ty"
//! leap_month_rule = "split_at_mid_month"
//! ```

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tuvi_calendar::VIETNAM_TZ_HOURS;

use crate::can_chi::Branch;
use crate::error::ChartError;

/// How a birth in a leap (nhuận) month is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapMonthRule {
    /// The leap month counts as the month it repeats.
    #[default]
    AsRegular,
    /// Days 1-15 count as the repeated month, days 16+ as the next one.
    SplitAtMidMonth,
}

impl LeapMonthRule {
    /// Month used for placement.
    pub fn effective_month(self, month: u8, day: u8, is_leap_month: bool) -> u8 {
        match self {
            Self::SplitAtMidMonth if is_leap_month && day > 15 => month % 12 + 1,
            _ => month,
        }
    }
}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// UTC offset used by the lunar calendar.
    pub timezone_offset_hours: f64,
    /// Branch used when the birth-hour token is not recognised.
    #[serde(deserialize_with = "deserialize_hour")]
    pub default_hour: Branch,
    pub leap_month_rule: LeapMonthRule,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            timezone_offset_hours: VIETNAM_TZ_HOURS,
            default_hour: Branch::Ty,
            leap_month_rule: LeapMonthRule::AsRegular,
        }
    }
}

fn deserialize_hour<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Branch, D::Error> {
    let token = String::deserialize(deserializer)?;
    Branch::from_hour_token(&token)
        .ok_or_else(|| D::Error::custom(format!("unknown hour token {token:?}")))
}

impl ChartConfig {
    /// Parse configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ChartError> {
        toml::from_str(content)
            .map_err(|e| ChartError::Config(format!("failed to parse config: {e}")))
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ChartError::Config(format!(
                "failed to read {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn full_config() {
        let cfg = ChartConfig::from_toml_str(
            r#"
            timezone_offset_hours = 8.0
            default_hour = "ngọ"
            leap_month_rule = "split_at_mid_month"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.timezone_offset_hours, 8.0);
        assert_eq!(cfg.default_hour, Branch::Ngo);
        assert_eq!(cfg.leap_month_rule, LeapMonthRule::SplitAtMidMonth);
    }

    #[test]
    fn bad_hour_is_config_error() {
        let err = ChartConfig::from_toml_str(r#"default_hour = "noon""#).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = ChartConfig::from_file("/nonexistent/tuvi.toml").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn leap_month_rule() {
        let split = LeapMonthRule::SplitAtMidMonth;
        assert_eq!(split.effective_month(4, 15, true), 4);
        assert_eq!(split.effective_month(4, 16, true), 5);
        assert_eq!(split.effective_month(12, 20, true), 1);
        assert_eq!(split.effective_month(4, 20, false), 4);
        assert_eq!(LeapMonthRule::AsRegular.effective_month(4, 20, true), 4);
    }
}
