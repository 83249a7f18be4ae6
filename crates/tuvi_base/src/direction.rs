//! Gender and the ring direction derived from gender + year-stem polarity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::can_chi::Stem;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Nam",
            Self::Female => "Nữ",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Accepts `male`/`female` and the Vietnamese `nam`/`nữ` (`nu`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "nam" => Ok(Self::Male),
            "female" | "f" | "nữ" | "nu" => Ok(Self::Female),
            other => Err(format!("unknown gender {other:?}")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction in which decade cycles and the direction-sensitive rings walk.
///
/// Clockwise means increasing branch index (Tý → Sửu → Dần ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RingDirection {
    Clockwise,
    CounterClockwise,
}

impl RingDirection {
    /// Clockwise for yang-male (Dương Nam) and yin-female (Âm Nữ).
    pub const fn for_birth(gender: Gender, year_stem: Stem) -> Self {
        match (gender, year_stem.is_yang()) {
            (Gender::Male, true) | (Gender::Female, false) => Self::Clockwise,
            _ => Self::CounterClockwise,
        }
    }

    /// Signed unit step: +1 clockwise, -1 counter-clockwise.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// "Dương Nam", "Âm Nữ" etc.
pub fn yin_yang_label(gender: Gender, year_stem: Stem) -> String {
    let polarity = if year_stem.is_yang() { "Dương" } else { "Âm" };
    format!("{polarity} {}", gender.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_table() {
        assert_eq!(
            RingDirection::for_birth(Gender::Male, Stem::Canh),
            RingDirection::Clockwise
        );
        assert_eq!(
            RingDirection::for_birth(Gender::Male, Stem::At),
            RingDirection::CounterClockwise
        );
        assert_eq!(
            RingDirection::for_birth(Gender::Female, Stem::At),
            RingDirection::Clockwise
        );
        assert_eq!(
            RingDirection::for_birth(Gender::Female, Stem::Giap),
            RingDirection::CounterClockwise
        );
    }

    #[test]
    fn reversed_and_sign() {
        assert_eq!(RingDirection::Clockwise.reversed(), RingDirection::CounterClockwise);
        assert_eq!(RingDirection::Clockwise.sign(), 1);
        assert_eq!(RingDirection::CounterClockwise.sign(), -1);
    }

    #[test]
    fn gender_parsing() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(" Female ".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("nữ".parse::<Gender>(), Ok(Gender::Female));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(yin_yang_label(Gender::Male, Stem::Canh), "Dương Nam");
        assert_eq!(yin_yang_label(Gender::Female, Stem::At), "Âm Nữ");
    }
}
