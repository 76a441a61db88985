//! Error types for description tables and insight lookups.

use std::path::PathBuf;

use thiserror::Error;
use ziwei_chart::ChartError;

/// Errors from loading description overrides or resolving insight queries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InsightError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// Description override file could not be read.
    #[error("cannot read descriptions file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Description override is not valid TOML of the expected shape.
    #[error("invalid descriptions TOML (non-ASCII keys such as \"命宮\" must be quoted): {0}")]
    Toml(#[from] toml::de::Error),
    /// A table key is not a palace name or transformation.
    #[error("unknown description key {0:?}")]
    UnknownKey(String),
}
