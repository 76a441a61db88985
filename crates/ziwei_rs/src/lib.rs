//! Convenience wrapper for the Zi Wei chart engine.
//!
//! Provides a configured [`ChartEngine`], a global singleton, and free
//! functions that go straight from birth data to charts, yearly activation
//! records, and health hints.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ziwei_rs::*;
//!
//! init(EngineConfig::default()).expect("engine init");
//!
//! let input = BirthInput::new(1990, 1, 1, HourInput::Clock(0), Gender::Male, "Lin");
//! let chart = chart(&input).unwrap();
//! println!("Life palace: {}", chart.life_palace().label());
//! let record = destiny(&input, 2026).unwrap();
//! println!("2026 activates {}", record.activated_palace);
//! ```

pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;
pub mod telemetry;

pub use convenience::{chart, destiny, health, lunar_date, transformations};
pub use engine::ChartEngine;
pub use error::ZiweiError;
pub use global::{init, is_initialized};
pub use telemetry::init_default_tracing;

// Re-export the types callers need so they can depend on this crate alone.
pub use ziwei_calendar::{Branch, LunarDate, Stem, StemBranch, Zodiac};
pub use ziwei_chart::{
    BirthInput, ChartData, ChartHeader, FourTransformations, Gender, HourInput, Palace,
    PalaceName, PlacedStar, Star, Transformation,
};
pub use ziwei_config::EngineConfig;
pub use ziwei_insight::{
    ActivationAnchor, BodyPart, DescriptionTable, HealthAnalysisResult, YearDestinyRecord,
};
