//! A configured engine: settings plus the resolved description table.

use chrono::{Datelike, Local};
use tracing::{debug, info};
use ziwei_calendar::{LunarDate, solar_to_lunar};
use ziwei_chart::{BirthInput, ChartData, FourTransformations, build_chart_from_birth};
use ziwei_config::EngineConfig;
use ziwei_insight::{
    DescriptionTable, HealthAnalysisResult, YearDestinyRecord, activation_for_year, analyze_health,
};

use crate::error::ZiweiError;

#[derive(Debug, Clone)]
pub struct ChartEngine {
    config: EngineConfig,
    descriptions: DescriptionTable,
}

impl ChartEngine {
    /// Validate `config` and load any description overrides onto the
    /// built-in table.
    pub fn new(config: EngineConfig) -> Result<Self, ZiweiError> {
        config.validate()?;
        let mut descriptions = DescriptionTable::builtin();
        if let Some(path) = &config.descriptions_path {
            let overrides = DescriptionTable::load(path)?;
            info!(path = %path.display(), entries = overrides.len(), "loaded description overrides");
            descriptions.merge(overrides);
        }
        Ok(Self {
            config,
            descriptions,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn descriptions(&self) -> &DescriptionTable {
        &self.descriptions
    }

    /// Configured reference year, else the current local year.
    pub fn reference_year(&self) -> i32 {
        self.config
            .reference_year
            .unwrap_or_else(|| Local::now().year())
    }

    pub fn lunar_date(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, ZiweiError> {
        Ok(solar_to_lunar(year, month, day)?)
    }

    pub fn chart(&self, input: &BirthInput) -> Result<ChartData, ZiweiError> {
        Ok(build_chart_from_birth(input, Some(self.reference_year()))?)
    }

    pub fn destiny(&self, chart: &ChartData, year: i32) -> YearDestinyRecord {
        debug!(year, anchor = ?self.config.activation_anchor, "destiny lookup");
        activation_for_year(chart, year, self.config.activation_anchor, &self.descriptions)
    }

    pub fn health(&self, chart: &ChartData) -> HealthAnalysisResult {
        analyze_health(chart)
    }

    pub fn transformations(&self, stem: &str) -> Result<FourTransformations, ZiweiError> {
        Ok(FourTransformations::for_stem_label(stem)?)
    }
}
