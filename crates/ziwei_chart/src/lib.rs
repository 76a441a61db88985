//! Zi Wei Dou Shu natal chart construction.
//!
//! This crate provides:
//! - Birth input parsing (`BirthInput`, `Gender`, `HourInput`)
//! - Life/Body palace anchors, the Five-Elements Bureau, and the Ziwei anchor
//! - Table-driven placement of 32 stars across 12 palaces
//! - The Four Transformations table and per-star tagging
//! - Da Xian decade windows
//!
//! All computation is pure over static tables and safe to call concurrently.

pub mod builder;
pub mod bureau;
pub mod chart;
pub mod decade;
pub mod error;
pub mod input;
pub mod palace;
pub mod placement;
pub mod star;
pub mod transformation;

pub use builder::{
    ChartMeta, body_palace_branch, build_chart, build_chart_from_birth, life_palace_branch,
    nominal_age, palace_stem,
};
pub use bureau::{ALL_BUREAUS, FiveElementsBureau};
pub use chart::{ChartData, ChartHeader, TransformedStar, lunar_header_label};
pub use decade::{DECADE_SPAN, DecadeDirection, assign_da_xian, decade_for_age, decade_ranges};
pub use error::ChartError;
pub use input::{BirthInput, Gender, HourInput};
pub use palace::{ALL_PALACE_NAMES, DaXianRange, Palace, PalaceName};
pub use star::{
    ALL_TRANSFORMATIONS, LUCKY_STARS, MAIN_STARS, MALEFIC_STARS, MINOR_STARS, PlacedStar,
    STAR_COUNT, Star, StarTier, Transformation,
};
pub use transformation::FourTransformations;
