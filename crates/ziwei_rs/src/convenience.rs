//! Free functions that run queries on the global engine.

use ziwei_calendar::LunarDate;
use ziwei_chart::{BirthInput, ChartData, FourTransformations};
use ziwei_insight::{HealthAnalysisResult, YearDestinyRecord};

use crate::error::ZiweiError;
use crate::global::engine;

/// Solar → lunar conversion. Needs no engine.
pub fn lunar_date(year: i32, month: u32, day: u32) -> Result<LunarDate, ZiweiError> {
    Ok(ziwei_calendar::solar_to_lunar(year, month, day)?)
}

/// Four Transformations for a stem label. Needs no engine.
pub fn transformations(stem: &str) -> Result<FourTransformations, ZiweiError> {
    Ok(FourTransformations::for_stem_label(stem)?)
}

/// Build a chart with the global engine's reference year.
pub fn chart(input: &BirthInput) -> Result<ChartData, ZiweiError> {
    engine()?.chart(input)
}

/// Chart plus its activation record for `year`.
pub fn destiny(input: &BirthInput, year: i32) -> Result<YearDestinyRecord, ZiweiError> {
    let eng = engine()?;
    let chart = eng.chart(input)?;
    Ok(eng.destiny(&chart, year))
}

/// Chart plus its health analysis.
pub fn health(input: &BirthInput) -> Result<HealthAnalysisResult, ZiweiError> {
    let eng = engine()?;
    let chart = eng.chart(input)?;
    Ok(eng.health(&chart))
}
