//! Top-level error type wrapping every layer of the engine.

use thiserror::Error;
use ziwei_calendar::CalendarError;
use ziwei_chart::ChartError;
use ziwei_config::ConfigError;
use ziwei_insight::InsightError;

/// Unified error for the convenience layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZiweiError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Insight(#[from] InsightError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Global engine used before [`init`](crate::init).
    #[error("global engine not initialized; call ziwei_rs::init() first")]
    NotInitialized,
    /// [`init`](crate::init) called twice.
    #[error("global engine already initialized")]
    AlreadyInitialized,
}
