//! Heavenly Stems (天干), Earthly Branches (地支) and the 60-pair cycle.
//!
//! Year pairs follow the fixed epoch CE 4 = 甲子:
//! stem index = (year - 4) mod 10, branch index = (year - 4) mod 12.
//! The same arithmetic applies to any year number, lunar or solar; callers
//! decide which year they pass in.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::CalendarError;

/// The 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All 10 stems in cycle order (0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// Canonical Chinese label.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at any index, wrapping modulo 10.
    pub const fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Yang stems sit at even indices.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Parse a canonical stem label such as `"甲"`.
    pub fn from_label(label: &str) -> Result<Self, CalendarError> {
        let trimmed = label.trim();
        STEM_NAMES
            .iter()
            .position(|n| *n == trimmed)
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| CalendarError::InvalidPosition {
                kind: "stem",
                label: label.to_string(),
            })
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stem {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// The 12 Earthly Branches. Index 0 = 子; palace slots use the same indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in cycle order (0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// Canonical Chinese label.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at any index, wrapping modulo 12.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Branch `steps` slots away (negative steps walk backwards).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }

    /// Zodiac animal bound to this branch.
    pub const fn zodiac(self) -> Zodiac {
        ALL_ZODIACS[self.index() as usize]
    }

    /// Parse a branch label. Accepts `"子"` and the hour form `"子時"`.
    pub fn from_label(label: &str) -> Result<Self, CalendarError> {
        let trimmed = label.trim();
        let bare = trimmed
            .strip_suffix('時')
            .or_else(|| trimmed.strip_suffix('时'))
            .unwrap_or(trimmed);
        BRANCH_NAMES
            .iter()
            .position(|n| *n == bare)
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| CalendarError::InvalidPosition {
                kind: "branch",
                label: label.to_string(),
            })
    }

    /// Two-hour slot for a 0-23 clock hour. 23:00 starts the next day's 子 hour.
    pub fn from_clock_hour(hour: u32) -> Result<Self, CalendarError> {
        if hour > 23 {
            return Err(CalendarError::InvalidPosition {
                kind: "hour",
                label: hour.to_string(),
            });
        }
        Ok(Self::from_index(((hour + 1) / 2) as i64))
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Branch {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// The 12 zodiac animals (生肖), aligned with [`Branch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Zodiac {
    #[serde(rename = "鼠")]
    Rat,
    #[serde(rename = "牛")]
    Ox,
    #[serde(rename = "虎")]
    Tiger,
    #[serde(rename = "兔")]
    Rabbit,
    #[serde(rename = "龍")]
    Dragon,
    #[serde(rename = "蛇")]
    Snake,
    #[serde(rename = "馬")]
    Horse,
    #[serde(rename = "羊")]
    Goat,
    #[serde(rename = "猴")]
    Monkey,
    #[serde(rename = "雞")]
    Rooster,
    #[serde(rename = "狗")]
    Dog,
    #[serde(rename = "豬")]
    Pig,
}

/// All 12 zodiac animals (0 = 鼠).
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    /// Chinese name of the animal.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龍",
            Self::Snake => "蛇",
            Self::Horse => "馬",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "雞",
            Self::Dog => "狗",
            Self::Pig => "豬",
        }
    }

    /// English name of the animal.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// A stem-branch pair (干支), e.g. 甲子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

/// CE year whose pair is 甲子.
pub const STEM_BRANCH_EPOCH_YEAR: i32 = 4;

impl StemBranch {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Year pair: stem = (year - 4) mod 10, branch = (year - 4) mod 12.
    pub const fn for_year(year: i32) -> Self {
        let offset = (year - STEM_BRANCH_EPOCH_YEAR) as i64;
        Self {
            stem: Stem::from_index(offset),
            branch: Branch::from_index(offset),
        }
    }

    /// Zodiac animal of the branch.
    pub const fn zodiac(self) -> Zodiac {
        self.branch.zodiac()
    }

    /// Parse a two-character label such as `"己巳"`.
    pub fn from_label(label: &str) -> Result<Self, CalendarError> {
        let mut chars = label.trim().chars();
        let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CalendarError::InvalidPosition {
                kind: "stem-branch",
                label: label.to_string(),
            });
        };
        let stem = Stem::from_label(s.encode_utf8(&mut [0; 4]))?;
        let branch = Branch::from_label(b.encode_utf8(&mut [0; 4]))?;
        Ok(Self { stem, branch })
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}
