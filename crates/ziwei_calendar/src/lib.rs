//! Chinese lunisolar calendar support for the Zi Wei chart engine.
//!
//! This crate provides:
//! - The packed lunar year table for 1900..=2100, decoded once into explicit month data
//! - Solar → lunar date conversion (`solar_to_lunar`)
//! - Heavenly Stem / Earthly Branch cycles, zodiac animals, and clock-hour → branch mapping
//!
//! Everything here is a pure function over static data.

pub mod error;
pub mod ganzhi;
pub mod lunar;
pub mod lunar_data;

pub use error::CalendarError;
pub use ganzhi::{
    ALL_BRANCHES, ALL_STEMS, ALL_ZODIACS, Branch, STEM_BRANCH_EPOCH_YEAR, Stem, StemBranch, Zodiac,
};
pub use lunar::{
    FIRST_SOLAR_DATE, LAST_SOLAR_DATE, LunarDate, checked_solar_date, lunar_year_days,
    naive_to_lunar, solar_to_lunar,
};
pub use lunar_data::{
    FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, LunarMonthSlot, LunarYearData, lunar_year, lunar_years,
};
