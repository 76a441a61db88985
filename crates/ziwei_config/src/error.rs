//! Error types for loading and validating engine configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
