//! Yearly activation ("Destiny Compass").
//!
//! A calendar year selects one palace by a 12-year rotation. The chart's own
//! four transformed stars (from its natal year stem, not the queried year's)
//! are then reported with the palace they sit in and the matching text.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ziwei_calendar::{Branch, StemBranch};
use ziwei_chart::{
    ALL_PALACE_NAMES, ChartData, PalaceName, Star, Transformation, decade_for_age, nominal_age,
};

use crate::descriptions::{DescriptionTable, PLACEHOLDER};

/// Anchor year of the global rotation.
pub const DEFAULT_ACTIVATION_YEAR: i32 = 2025;

/// Which year maps to the Life Palace (index 0) of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ActivationAnchor {
    /// One global cycle shared by every chart.
    Fixed { year: i32 },
    /// Cycle relative to the chart's lunar birth year.
    BirthYear,
}

impl Default for ActivationAnchor {
    fn default() -> Self {
        Self::Fixed {
            year: DEFAULT_ACTIVATION_YEAR,
        }
    }
}

impl ActivationAnchor {
    pub fn anchor_year(self, chart: &ChartData) -> i32 {
        match self {
            Self::Fixed { year } => year,
            Self::BirthYear => chart.header.lunar_date.year,
        }
    }
}

/// Rotation index 0..=11 for a year; negative differences wrap.
pub const fn activated_index(year: i32, anchor_year: i32) -> u8 {
    (year as i64 - anchor_year as i64).rem_euclid(12) as u8
}

/// One of the chart's transformed stars as seen in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformationActivation {
    pub transformation: Transformation,
    pub star: Star,
    pub palace: Option<PalaceName>,
    pub branch: Option<Branch>,
    pub description: String,
}

/// Projection of a chart onto one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearDestinyRecord {
    pub year: i32,
    /// Stem-branch pair of the queried year itself.
    pub year_pillar: StemBranch,
    pub activated_index: u8,
    pub activated_palace: PalaceName,
    pub activated_branch: Branch,
    pub transformations: Vec<TransformationActivation>,
    /// Nominal age in the queried year.
    pub age: Option<u32>,
    /// Palace whose Da Xian window holds that age.
    pub da_xian_palace: Option<PalaceName>,
}

/// Resolve the activated palace and transformed stars for `year`.
pub fn activation_for_year(
    chart: &ChartData,
    year: i32,
    anchor: ActivationAnchor,
    descriptions: &DescriptionTable,
) -> YearDestinyRecord {
    let index = activated_index(year, anchor.anchor_year(chart));
    let activated = chart.palace(ALL_PALACE_NAMES[index as usize]);
    debug!(year, index, palace = %activated.name, "activation");

    let transformations = chart
        .transformed_stars()
        .iter()
        .map(|ts| {
            let holder = ts.palace.map(|name| chart.palace(name));
            let description = match holder {
                Some(p) => descriptions.describe(p.name, ts.transformation).into_owned(),
                None => {
                    warn!(star = %ts.star, "transformed star not placed");
                    PLACEHOLDER.to_string()
                }
            };
            TransformationActivation {
                transformation: ts.transformation,
                star: ts.star,
                palace: holder.map(|p| p.name),
                branch: holder.map(|p| p.branch),
                description,
            }
        })
        .collect();

    let age = nominal_age(chart.header.lunar_date.year, year);
    let da_xian_palace = age
        .and_then(|a| decade_for_age(&chart.palaces, a))
        .map(|p| p.name);

    YearDestinyRecord {
        year,
        year_pillar: StemBranch::for_year(year),
        activated_index: index,
        activated_palace: activated.name,
        activated_branch: activated.branch,
        transformations,
        age,
        da_xian_palace,
    }
}
