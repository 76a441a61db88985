//! Five-Elements Bureau (五行局) selection.
//!
//! The bureau is the na-yin element of the Life Palace's stem-branch pair.
//! Because palace stems follow the Five Tigers rule, the pair depends only on
//! the year stem (mod 5) and the Life-Palace branch pair (子丑, 寅卯, …, 戌亥),
//! so the lookup is a 5 × 6 table.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use ziwei_calendar::{Branch, Stem};

/// One of the five bureaus; the discriminant is the bureau number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FiveElementsBureau {
    #[serde(rename = "水二局")]
    Water2 = 2,
    #[serde(rename = "木三局")]
    Wood3 = 3,
    #[serde(rename = "金四局")]
    Metal4 = 4,
    #[serde(rename = "土五局")]
    Earth5 = 5,
    #[serde(rename = "火六局")]
    Fire6 = 6,
}

use FiveElementsBureau::{Earth5, Fire6, Metal4, Water2, Wood3};

/// Bureaus in Ziwei-table row order.
pub const ALL_BUREAUS: [FiveElementsBureau; 5] = [Water2, Wood3, Metal4, Earth5, Fire6];

/// `BUREAU_TABLE[year_stem % 5][life_branch / 2]`.
const BUREAU_TABLE: [[FiveElementsBureau; 6]; 5] = [
    // 甲己
    [Water2, Fire6, Wood3, Earth5, Metal4, Fire6],
    // 乙庚
    [Fire6, Earth5, Metal4, Wood3, Water2, Earth5],
    // 丙辛
    [Earth5, Wood3, Water2, Metal4, Fire6, Wood3],
    // 丁壬
    [Wood3, Metal4, Fire6, Water2, Earth5, Metal4],
    // 戊癸
    [Metal4, Water2, Earth5, Fire6, Wood3, Water2],
];

impl FiveElementsBureau {
    /// Bureau number (2..=6).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Row index into the Ziwei placement table.
    pub const fn row(self) -> usize {
        match self {
            Water2 => 0,
            Wood3 => 1,
            Metal4 => 2,
            Earth5 => 3,
            Fire6 => 4,
        }
    }

    /// Chinese label, e.g. `"水二局"`.
    pub const fn label(self) -> &'static str {
        match self {
            Water2 => "水二局",
            Wood3 => "木三局",
            Metal4 => "金四局",
            Earth5 => "土五局",
            Fire6 => "火六局",
        }
    }

    /// Element name alone.
    pub const fn element(self) -> &'static str {
        match self {
            Water2 => "水",
            Wood3 => "木",
            Metal4 => "金",
            Earth5 => "土",
            Fire6 => "火",
        }
    }

    /// Bureau for a year stem and Life-Palace branch.
    pub const fn from_year_stem_and_life(year_stem: Stem, life: Branch) -> Self {
        BUREAU_TABLE[(year_stem.index() % 5) as usize][(life.index() / 2) as usize]
    }
}

impl Display for FiveElementsBureau {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
