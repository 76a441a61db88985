//! Birth input record and its label parsing.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use ziwei_calendar::{Branch, LunarDate, Stem, solar_to_lunar};

use crate::error::ChartError;

/// Binary gender used by the Da Xian direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// Yin-yang gender label for a year stem: 陽男, 陰男, 陽女, 陰女.
    pub const fn yin_yang_label(self, year_stem: Stem) -> &'static str {
        match (year_stem.is_yang(), self) {
            (true, Self::Male) => "陽男",
            (false, Self::Male) => "陰男",
            (true, Self::Female) => "陽女",
            (false, Self::Female) => "陰女",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "男" => Ok(Self::Male),
            "f" | "female" | "女" => Ok(Self::Female),
            _ => Err(ChartError::InvalidInput(format!("unknown gender {s:?}"))),
        }
    }
}

/// Birth hour, either as a branch label or a 0-23 clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum HourInput {
    Branch(Branch),
    Clock(u32),
}

impl HourInput {
    /// Branch slot of the birth hour.
    pub fn branch(self) -> Result<Branch, ChartError> {
        match self {
            Self::Branch(b) => Ok(b),
            Self::Clock(h) => Ok(Branch::from_clock_hour(h)?),
        }
    }
}

impl FromStr for HourInput {
    type Err = ChartError;

    /// Digits parse as a clock hour; anything else as a branch label (`子`, `子時`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(h) = trimmed.parse::<u32>() {
            Branch::from_clock_hour(h)?;
            return Ok(Self::Clock(h));
        }
        Ok(Self::Branch(Branch::from_label(trimmed)?))
    }
}

/// One chart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: HourInput,
    pub gender: Gender,
    pub name: String,
}

impl BirthInput {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: HourInput,
        gender: Gender,
        name: impl Into<String>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            gender,
            name: name.into(),
        }
    }

    /// Lunar date of the solar birth date.
    pub fn lunar_date(&self) -> Result<LunarDate, ChartError> {
        Ok(solar_to_lunar(self.year, self.month, self.day)?)
    }

    /// Solar date as `YYYY-MM-DD`.
    pub fn solar_label(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Resolve the lunar date and hour branch, failing on the first bad field.
    pub fn resolve(&self) -> Result<(LunarDate, Branch), ChartError> {
        let lunar = self.lunar_date()?;
        let hour = self.hour.branch()?;
        Ok((lunar, hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_calendar::CalendarError;

    #[test]
    fn gender_labels() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("女".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn yin_yang() {
        assert_eq!(Gender::Male.yin_yang_label(Stem::Jia), "陽男");
        assert_eq!(Gender::Male.yin_yang_label(Stem::Ji), "陰男");
        assert_eq!(Gender::Female.yin_yang_label(Stem::Geng), "陽女");
        assert_eq!(Gender::Female.yin_yang_label(Stem::Gui), "陰女");
    }

    #[test]
    fn hour_forms() {
        assert_eq!("子".parse::<HourInput>().unwrap().branch().unwrap(), Branch::Zi);
        assert_eq!("午時".parse::<HourInput>().unwrap().branch().unwrap(), Branch::Wu);
        assert_eq!("23".parse::<HourInput>().unwrap().branch().unwrap(), Branch::Zi);
        assert_eq!("13".parse::<HourInput>().unwrap().branch().unwrap(), Branch::Wei);
        assert!("24".parse::<HourInput>().is_err());
        assert!(matches!(
            "甲".parse::<HourInput>(),
            Err(ChartError::Calendar(CalendarError::InvalidPosition { .. }))
        ));
    }

    #[test]
    fn resolve_rejects_bad_dates() {
        let bad = BirthInput::new(2023, 2, 30, HourInput::Clock(0), Gender::Male, "x");
        assert!(matches!(
            bad.resolve(),
            Err(ChartError::Calendar(CalendarError::InvalidDate { .. }))
        ));
        let early = BirthInput::new(1899, 6, 1, HourInput::Clock(0), Gender::Male, "x");
        assert!(matches!(
            early.resolve(),
            Err(ChartError::Calendar(CalendarError::OutOfRange { .. }))
        ));
        let hour = BirthInput::new(1990, 1, 1, HourInput::Clock(30), Gender::Male, "x");
        assert!(hour.resolve().is_err());
    }

    #[test]
    fn solar_label_is_padded() {
        let b = BirthInput::new(1990, 1, 1, HourInput::Branch(Branch::Zi), Gender::Male, "");
        assert_eq!(b.solar_label(), "1990-01-01");
    }
}
