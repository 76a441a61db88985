//! Chart output types: the header and the 12 palaces.

use serde::Serialize;
use ziwei_calendar::{Branch, LunarDate, StemBranch, Zodiac};

use crate::bureau::FiveElementsBureau;
use crate::decade::DecadeDirection;
use crate::input::Gender;
use crate::palace::{ALL_PALACE_NAMES, Palace, PalaceName};
use crate::star::{Star, Transformation};
use crate::transformation::FourTransformations;

/// Display and anchor metadata for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartHeader {
    pub name: String,
    /// Nominal (虛歲) age in the reference year, when one was supplied.
    pub age: Option<u32>,
    /// `YYYY-MM-DD`, passed through from the caller.
    pub solar_date: String,
    /// e.g. `己巳年十二月初五`.
    pub lunar_label: String,
    pub lunar_date: LunarDate,
    pub year: StemBranch,
    pub zodiac: Zodiac,
    pub hour: Branch,
    pub gender: Gender,
    /// 陽男 / 陰男 / 陽女 / 陰女.
    pub yin_yang: &'static str,
    pub bureau: FiveElementsBureau,
    pub life_branch: Branch,
    pub body_branch: Branch,
    pub ziwei_branch: Branch,
    pub da_xian_direction: DecadeDirection,
    pub transformations: FourTransformations,
}

/// A built natal chart. `palaces[i]` sits on branch slot `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub header: ChartHeader,
    pub palaces: [Palace; 12],
}

/// Where one of the chart's transformed stars landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformedStar {
    pub transformation: Transformation,
    pub star: Star,
    /// `None` only when the star is not placed on this chart.
    pub palace: Option<PalaceName>,
}

impl ChartData {
    pub fn palace_at(&self, branch: Branch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    pub fn palace(&self, name: PalaceName) -> &Palace {
        self.palace_at(name.branch(self.header.life_branch))
    }

    pub fn life_palace(&self) -> &Palace {
        self.palace_at(self.header.life_branch)
    }

    pub fn body_palace(&self) -> &Palace {
        self.palace_at(self.header.body_branch)
    }

    /// Palaces in Life-first role order (命宮, 兄弟, .., 父母).
    pub fn palaces_by_role(&self) -> [&Palace; 12] {
        ALL_PALACE_NAMES.map(|n| self.palace(n))
    }

    /// Palace holding `star`, if it was placed.
    pub fn find_star(&self, star: Star) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.contains(star))
    }

    /// The chart's four transformed stars and their palaces.
    pub fn transformed_stars(&self) -> [TransformedStar; 4] {
        self.header
            .transformations
            .pairs()
            .map(|(transformation, star)| TransformedStar {
                transformation,
                star,
                palace: self.find_star(star).map(|p| p.name),
            })
    }
}

const MONTH_NUMERALS: [&str; 12] = [
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二",
];

/// Header form of a lunar date with a numeric month: `己巳年十二月初五`.
pub fn lunar_header_label(date: &LunarDate) -> String {
    let month = MONTH_NUMERALS[(date.month.clamp(1, 12) - 1) as usize];
    let leap = if date.is_leap { "閏" } else { "" };
    format!(
        "{}年{leap}{month}月{}",
        date.year_stem_branch(),
        date.day_label()
    )
}
