//! The 12 palaces (十二宮): semantic names, rotation, and per-palace contents.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use ziwei_calendar::{Branch, Stem};

use crate::error::ChartError;
use crate::star::{PlacedStar, Star, StarTier};

/// Semantic palace names in rotation order starting from the Life Palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PalaceName {
    #[serde(rename = "命宮")]
    Life,
    #[serde(rename = "兄弟")]
    Siblings,
    #[serde(rename = "夫妻")]
    Spouse,
    #[serde(rename = "子女")]
    Children,
    #[serde(rename = "財帛")]
    Wealth,
    #[serde(rename = "疾厄")]
    Health,
    #[serde(rename = "遷移")]
    Travel,
    #[serde(rename = "交友")]
    Friends,
    #[serde(rename = "官祿")]
    Career,
    #[serde(rename = "田宅")]
    Property,
    #[serde(rename = "福德")]
    Wellbeing,
    #[serde(rename = "父母")]
    Parents,
}

/// Palace names in Life-first order. Each successive name sits one branch
/// slot *behind* the previous one.
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Wellbeing,
    PalaceName::Parents,
];

impl PalaceName {
    /// Canonical Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宮",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "財帛",
            Self::Health => "疾厄",
            Self::Travel => "遷移",
            Self::Friends => "交友",
            Self::Career => "官祿",
            Self::Property => "田宅",
            Self::Wellbeing => "福德",
            Self::Parents => "父母",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Wellbeing => "Wellbeing",
            Self::Parents => "Parents",
        }
    }

    /// 0-based rotation index (Life=0 .. Parents=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Name of the palace sitting on `branch` when the Life Palace is on `life`.
    pub const fn for_branch(life: Branch, branch: Branch) -> Self {
        let rot = (life.index() as i64 - branch.index() as i64).rem_euclid(12);
        ALL_PALACE_NAMES[rot as usize]
    }

    /// Branch holding this palace when the Life Palace is on `life`.
    pub const fn branch(self, life: Branch) -> Branch {
        life.offset(-(self.index() as i64))
    }
}

impl Display for PalaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PalaceName {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_PALACE_NAMES
            .into_iter()
            .find(|p| p.name() == trimmed || p.english_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ChartError::InvalidInput(format!("unknown palace {s:?}")))
    }
}

/// Inclusive Da Xian age window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DaXianRange {
    pub start_age: u32,
    pub end_age: u32,
}

impl DaXianRange {
    /// Whether a nominal age falls inside the window.
    pub const fn contains(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

impl Display for DaXianRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_age, self.end_age)
    }
}

/// One palace of a built chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palace {
    /// Branch slot (0-11) the palace sits on.
    pub branch: Branch,
    /// Heavenly stem assigned to the slot.
    pub stem: Stem,
    /// Semantic name after rotation from the Life Palace.
    pub name: PalaceName,
    /// Whether the Body Palace (身宮) shares this slot.
    pub is_body: bool,
    pub main_stars: Vec<PlacedStar>,
    pub malefic_stars: Vec<PlacedStar>,
    pub lucky_stars: Vec<PlacedStar>,
    pub minor_stars: Vec<PlacedStar>,
    /// Decade window assigned by the Da Xian calculator.
    pub da_xian: DaXianRange,
}

impl Palace {
    /// Stem-branch label, e.g. `"丁丑"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.stem, self.branch)
    }

    /// Stars of one tier.
    pub fn stars_in(&self, tier: StarTier) -> &[PlacedStar] {
        match tier {
            StarTier::Main => &self.main_stars,
            StarTier::Malefic => &self.malefic_stars,
            StarTier::Lucky => &self.lucky_stars,
            StarTier::Minor => &self.minor_stars,
        }
    }

    /// All stars across tiers (StarAll), duplicates collapsed, tier order kept.
    pub fn star_all(&self) -> Vec<PlacedStar> {
        let mut out: Vec<PlacedStar> = Vec::new();
        for placed in self
            .main_stars
            .iter()
            .chain(&self.malefic_stars)
            .chain(&self.lucky_stars)
            .chain(&self.minor_stars)
        {
            if !out.iter().any(|p| p.star == placed.star) {
                out.push(*placed);
            }
        }
        out
    }

    /// Whether `star` sits in this palace.
    pub fn contains(&self, star: Star) -> bool {
        self.stars_in(star.tier()).iter().any(|p| p.star == star)
    }

    /// A palace with no main star is "empty" (空宮).
    pub fn is_empty(&self) -> bool {
        self.main_stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_calendar::ALL_BRANCHES;

    #[test]
    fn rotation_is_a_permutation() {
        for life in ALL_BRANCHES {
            let mut seen = [false; 12];
            for b in ALL_BRANCHES {
                let name = PalaceName::for_branch(life, b);
                assert!(!seen[name.index() as usize]);
                seen[name.index() as usize] = true;
                assert_eq!(name.branch(life), b);
            }
            assert_eq!(PalaceName::for_branch(life, life), PalaceName::Life);
        }
    }

    #[test]
    fn siblings_sit_one_slot_behind_life() {
        assert_eq!(PalaceName::for_branch(Branch::Chou, Branch::Zi), PalaceName::Siblings);
        assert_eq!(PalaceName::for_branch(Branch::Chou, Branch::Yin), PalaceName::Parents);
        assert_eq!(PalaceName::Travel.branch(Branch::Chou), Branch::Wei);
    }

    #[test]
    fn da_xian_contains_is_inclusive() {
        let r = DaXianRange {
            start_age: 10,
            end_age: 19,
        };
        assert!(r.contains(10));
        assert!(r.contains(19));
        assert!(!r.contains(20));
        assert_eq!(r.to_string(), "10-19");
    }

    #[test]
    fn star_all_collapses_duplicates() {
        let p = Palace {
            branch: Branch::Zi,
            stem: Stem::Jia,
            name: PalaceName::Life,
            is_body: false,
            main_stars: vec![PlacedStar::plain(Star::Ziwei)],
            malefic_stars: vec![PlacedStar::plain(Star::Dikong)],
            lucky_stars: vec![],
            minor_stars: vec![PlacedStar::plain(Star::Ziwei), PlacedStar::plain(Star::Tianma)],
            da_xian: DaXianRange::default(),
        };
        let all: Vec<Star> = p.star_all().into_iter().map(|s| s.star).collect();
        assert_eq!(all, vec![Star::Ziwei, Star::Dikong, Star::Tianma]);
        assert_eq!(p.label(), "甲子");
        assert!(!p.is_empty());
    }

    #[test]
    fn parse_palace_names() {
        assert_eq!("疾厄".parse::<PalaceName>().unwrap(), PalaceName::Health);
        assert_eq!("career".parse::<PalaceName>().unwrap(), PalaceName::Career);
        assert!("天宮".parse::<PalaceName>().is_err());
    }
}
