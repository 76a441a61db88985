//! Interpretive projections over a built Zi Wei chart.
//!
//! - [`activation_for_year`]: the palace activated in a calendar year and where
//!   the chart's four transformed stars sit, with canned text
//! - [`DescriptionTable`]: built-in (palace, transformation) text plus TOML overrides
//! - [`analyze_health`]: body-part hints from the Health Palace, with the
//!   Parents-Palace fallback
//!
//! Every function here reads a finished [`ziwei_chart::ChartData`] and never
//! modifies it.

pub mod descriptions;
pub mod destiny;
pub mod error;
pub mod health;

pub use descriptions::{DescriptionTable, PLACEHOLDER};
pub use destiny::{
    ActivationAnchor, DEFAULT_ACTIVATION_YEAR, TransformationActivation, YearDestinyRecord,
    activated_index, activation_for_year,
};
pub use error::InsightError;
pub use health::{BodyPart, HealthAnalysisResult, analyze_health, body_parts_of};
