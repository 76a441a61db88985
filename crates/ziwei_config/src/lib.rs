//! Engine configuration.
//!
//! ```toml
//! log_filter = "info"
//! reference_year = 2025
//! descriptions_path = "descriptions.toml"
//!
//! [activation_anchor]
//! mode = "fixed"     # or "birth_year"
//! year = 2025
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] values.
//!
//! `descriptions_path` points at a description override file. Its Chinese
//! keys must be quoted, since TOML bare keys are ASCII only:
//!
//! ```toml
//! ["命宮"]
//! "祿" = "..."
//! ```

pub mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ziwei_calendar::{FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR};
use ziwei_insight::ActivationAnchor;

pub use error::ConfigError;

/// Environment variable naming a config file for [`EngineConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "ZIWEI_CONFIG";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Year that activates the Life Palace, or the chart's birth year.
    pub activation_anchor: ActivationAnchor,
    /// Year used for header ages. `None` means the current local year.
    pub reference_year: Option<i32>,
    /// TOML file overlaid on the built-in description table.
    pub descriptions_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activation_anchor: ActivationAnchor::default(),
            reference_year: None,
            descriptions_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// A relative `descriptions_path` is resolved against the config file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;
        if let (Some(desc), Some(dir)) = (&config.descriptions_path, path.parent()) {
            if desc.is_relative() {
                config.descriptions_path = Some(dir.join(desc));
            }
        }
        Ok(config)
    }

    /// Load from `$ZIWEI_CONFIG` when set, otherwise defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let supported = FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR;
        if let ActivationAnchor::Fixed { year } = self.activation_anchor {
            if !supported.contains(&year) {
                return Err(ConfigError::Invalid(
                    "activation_anchor.year must lie within 1900..=2100",
                ));
            }
        }
        if let Some(year) = self.reference_year {
            if year < FIRST_LUNAR_YEAR {
                return Err(ConfigError::Invalid(
                    "reference_year must not precede 1900",
                ));
            }
        }
        if self
            .descriptions_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::Invalid("descriptions_path must not be empty"));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EngineConfig::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn full_document() {
        let c = EngineConfig::parse(
            r#"
            log_filter = "debug"
            reference_year = 2030
            descriptions_path = "/etc/ziwei/desc.toml"

            [activation_anchor]
            mode = "birth_year"
            "#,
        )
        .unwrap();
        assert_eq!(c.activation_anchor, ActivationAnchor::BirthYear);
        assert_eq!(c.reference_year, Some(2030));
        assert_eq!(c.descriptions_path, Some(PathBuf::from("/etc/ziwei/desc.toml")));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn fixed_anchor() {
        let c = EngineConfig::parse("[activation_anchor]\nmode = \"fixed\"\nyear = 2000\n").unwrap();
        assert_eq!(c.activation_anchor, ActivationAnchor::Fixed { year: 2000 });
    }

    #[test]
    fn rejects_out_of_range_anchor() {
        let err = EngineConfig::parse("[activation_anchor]\nmode = \"fixed\"\nyear = 1800\n");
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            EngineConfig::parse("colour = \"red\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::parse("log_filter = \"  \"\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EngineConfig::parse("reference_year = 1850\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_resolves_relative_descriptions() {
        let dir = std::env::temp_dir().join(format!("ziwei_config_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("engine.toml");
        std::fs::write(&path, "descriptions_path = \"desc.toml\"\n").unwrap();
        let c = EngineConfig::load(&path).unwrap();
        assert_eq!(c.descriptions_path, Some(dir.join("desc.toml")));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/ziwei.toml"));
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }
}
