//! Solar (Gregorian) → lunar date conversion over the packed year table.
//!
//! The day offset from the table epoch (solar 1900-01-31 = lunar 1900-01-01)
//! is consumed year by year, then month by month in calendar order with the
//! leap month inserted after its base month. An offset that lands exactly on
//! a month boundary is day 1 of the next month in that sequence, so the day
//! after the last day of a leap month's base month is day 1 of the leap month.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::ganzhi::StemBranch;
use crate::lunar_data::{LunarYearData, lunar_year, lunar_years};

/// First supported solar date (lunar new year 1900).
pub const FIRST_SOLAR_DATE: (i32, u32, u32) = (1900, 1, 31);

/// Last supported solar date.
pub const LAST_SOLAR_DATE: (i32, u32, u32) = (2100, 12, 31);

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    /// Lunar year number (the Gregorian year in which it mostly falls).
    pub year: i32,
    /// Lunar month 1..=12.
    pub month: u8,
    /// Lunar day 1..=30.
    pub day: u8,
    /// True when the day lies in the intercalary month.
    pub is_leap: bool,
}

impl LunarDate {
    /// Stem-branch pair of the lunar year.
    pub const fn year_stem_branch(&self) -> StemBranch {
        StemBranch::for_year(self.year)
    }

    /// Chinese month label, e.g. `"正月"`, `"閏二月"`, `"臘月"`.
    pub fn month_label(&self) -> String {
        let name = MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize];
        if self.is_leap {
            format!("閏{name}月")
        } else {
            format!("{name}月")
        }
    }

    /// Chinese day label, e.g. `"初五"`, `"廿三"`.
    pub fn day_label(&self) -> String {
        day_label(self.day)
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}",
            self.year_stem_branch(),
            self.month_label(),
            self.day_label()
        )
    }
}

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "臘",
];

const DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

fn day_label(day: u8) -> String {
    match day {
        10 => "初十".to_string(),
        20 => "二十".to_string(),
        30 => "三十".to_string(),
        1..=9 => format!("初{}", DIGITS[day as usize]),
        11..=19 => format!("十{}", DIGITS[(day - 10) as usize]),
        21..=29 => format!("廿{}", DIGITS[(day - 20) as usize]),
        _ => day.to_string(),
    }
}

fn epoch() -> NaiveDate {
    let (y, m, d) = FIRST_SOLAR_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Validate a Gregorian date and check it against the supported range.
pub fn checked_solar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    if !(FIRST_SOLAR_DATE.0..=LAST_SOLAR_DATE.0).contains(&year) {
        return Err(CalendarError::OutOfRange { year, month, day });
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })?;
    let (ly, lm, ld) = LAST_SOLAR_DATE;
    let last = NaiveDate::from_ymd_opt(ly, lm, ld).unwrap_or(NaiveDate::MAX);
    if date < epoch() || date > last {
        return Err(CalendarError::OutOfRange { year, month, day });
    }
    Ok(date)
}

/// Convert a Gregorian date to its lunar date.
///
/// Valid for solar dates 1900-01-31 ..= 2100-12-31; anything else yields
/// [`CalendarError::OutOfRange`], including impossible dates in years outside
/// the table. Impossible dates inside it, such as 2023-02-30, yield
/// [`CalendarError::InvalidDate`].
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
    let date = checked_solar_date(year, month, day)?;
    let out_of_range = CalendarError::OutOfRange { year, month, day };

    let mut offset = u32::try_from((date - epoch()).num_days()).map_err(|_| out_of_range.clone())?;

    let mut found: Option<&LunarYearData> = None;
    for data in lunar_years() {
        let len = data.total_days();
        if offset < len {
            found = Some(data);
            break;
        }
        offset -= len;
    }
    let data = found.ok_or(out_of_range.clone())?;

    for slot in data.months() {
        let len = u32::from(slot.days);
        if offset < len {
            return Ok(LunarDate {
                year: data.year,
                month: slot.month,
                day: (offset + 1) as u8,
                is_leap: slot.is_leap,
            });
        }
        offset -= len;
    }
    Err(out_of_range)
}

/// Convert a [`NaiveDate`] to its lunar date.
pub fn naive_to_lunar(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    solar_to_lunar(date.year(), date.month(), date.day())
}

/// Total days in a lunar year, straight from the decoded table.
pub fn lunar_year_days(year: i32) -> Option<u32> {
    lunar_year(year).map(LunarYearData::total_days)
}
