//! Star catalogue: the 32 stars placed by the chart builder, their tiers,
//! and the Four Transformation tags (四化).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChartError;

/// Placement tier of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarTier {
    /// The 14 main stars (紫微 and 天府 systems).
    Main,
    /// The 6 malefic stars (六煞).
    Malefic,
    /// The 7 auxiliary "lucky" stars, including 祿存.
    Lucky,
    /// Minor stars keyed by year branch.
    Minor,
}

/// Every star the chart builder can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Star {
    // Main, 紫微 system
    #[serde(rename = "紫微")]
    Ziwei,
    #[serde(rename = "天機")]
    Tianji,
    #[serde(rename = "太陽")]
    Taiyang,
    #[serde(rename = "武曲")]
    Wuqu,
    #[serde(rename = "天同")]
    Tiantong,
    #[serde(rename = "廉貞")]
    Lianzhen,
    // Main, 天府 system
    #[serde(rename = "天府")]
    Tianfu,
    #[serde(rename = "太陰")]
    Taiyin,
    #[serde(rename = "貪狼")]
    Tanlang,
    #[serde(rename = "巨門")]
    Jumen,
    #[serde(rename = "天相")]
    Tianxiang,
    #[serde(rename = "天梁")]
    Tianliang,
    #[serde(rename = "七殺")]
    Qisha,
    #[serde(rename = "破軍")]
    Pojun,
    // Malefic
    #[serde(rename = "擎羊")]
    Qingyang,
    #[serde(rename = "陀羅")]
    Tuoluo,
    #[serde(rename = "火星")]
    Huoxing,
    #[serde(rename = "鈴星")]
    Lingxing,
    #[serde(rename = "地空")]
    Dikong,
    #[serde(rename = "地劫")]
    Dijie,
    // Lucky
    #[serde(rename = "文昌")]
    Wenchang,
    #[serde(rename = "文曲")]
    Wenqu,
    #[serde(rename = "左輔")]
    Zuofu,
    #[serde(rename = "右弼")]
    Youbi,
    #[serde(rename = "天魁")]
    Tiankui,
    #[serde(rename = "天鉞")]
    Tianyue,
    #[serde(rename = "祿存")]
    Lucun,
    // Minor
    #[serde(rename = "天馬")]
    Tianma,
    #[serde(rename = "紅鸞")]
    Hongluan,
    #[serde(rename = "天喜")]
    Tianxi,
    #[serde(rename = "天哭")]
    Tianku,
    #[serde(rename = "天虛")]
    Tianxu,
}

/// The 14 main stars in canonical order.
pub const MAIN_STARS: [Star; 14] = [
    Star::Ziwei,
    Star::Tianji,
    Star::Taiyang,
    Star::Wuqu,
    Star::Tiantong,
    Star::Lianzhen,
    Star::Tianfu,
    Star::Taiyin,
    Star::Tanlang,
    Star::Jumen,
    Star::Tianxiang,
    Star::Tianliang,
    Star::Qisha,
    Star::Pojun,
];

/// The 6 malefic stars.
pub const MALEFIC_STARS: [Star; 6] = [
    Star::Qingyang,
    Star::Tuoluo,
    Star::Huoxing,
    Star::Lingxing,
    Star::Dikong,
    Star::Dijie,
];

/// The 7 lucky stars.
pub const LUCKY_STARS: [Star; 7] = [
    Star::Wenchang,
    Star::Wenqu,
    Star::Zuofu,
    Star::Youbi,
    Star::Tiankui,
    Star::Tianyue,
    Star::Lucun,
];

/// The 5 minor stars keyed by year branch.
pub const MINOR_STARS: [Star; 5] = [
    Star::Tianma,
    Star::Hongluan,
    Star::Tianxi,
    Star::Tianku,
    Star::Tianxu,
];

/// Total number of placed stars.
pub const STAR_COUNT: usize = 32;

impl Star {
    /// Canonical Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ziwei => "紫微",
            Self::Tianji => "天機",
            Self::Taiyang => "太陽",
            Self::Wuqu => "武曲",
            Self::Tiantong => "天同",
            Self::Lianzhen => "廉貞",
            Self::Tianfu => "天府",
            Self::Taiyin => "太陰",
            Self::Tanlang => "貪狼",
            Self::Jumen => "巨門",
            Self::Tianxiang => "天相",
            Self::Tianliang => "天梁",
            Self::Qisha => "七殺",
            Self::Pojun => "破軍",
            Self::Qingyang => "擎羊",
            Self::Tuoluo => "陀羅",
            Self::Huoxing => "火星",
            Self::Lingxing => "鈴星",
            Self::Dikong => "地空",
            Self::Dijie => "地劫",
            Self::Wenchang => "文昌",
            Self::Wenqu => "文曲",
            Self::Zuofu => "左輔",
            Self::Youbi => "右弼",
            Self::Tiankui => "天魁",
            Self::Tianyue => "天鉞",
            Self::Lucun => "祿存",
            Self::Tianma => "天馬",
            Self::Hongluan => "紅鸞",
            Self::Tianxi => "天喜",
            Self::Tianku => "天哭",
            Self::Tianxu => "天虛",
        }
    }

    /// Placement tier.
    pub const fn tier(self) -> StarTier {
        match self {
            Self::Ziwei
            | Self::Tianji
            | Self::Taiyang
            | Self::Wuqu
            | Self::Tiantong
            | Self::Lianzhen
            | Self::Tianfu
            | Self::Taiyin
            | Self::Tanlang
            | Self::Jumen
            | Self::Tianxiang
            | Self::Tianliang
            | Self::Qisha
            | Self::Pojun => StarTier::Main,
            Self::Qingyang
            | Self::Tuoluo
            | Self::Huoxing
            | Self::Lingxing
            | Self::Dikong
            | Self::Dijie => StarTier::Malefic,
            Self::Wenchang
            | Self::Wenqu
            | Self::Zuofu
            | Self::Youbi
            | Self::Tiankui
            | Self::Tianyue
            | Self::Lucun => StarTier::Lucky,
            Self::Tianma | Self::Hongluan | Self::Tianxi | Self::Tianku | Self::Tianxu => {
                StarTier::Minor
            }
        }
    }

    /// Every star, tier by tier.
    pub fn all() -> impl Iterator<Item = Star> {
        MAIN_STARS
            .into_iter()
            .chain(MALEFIC_STARS)
            .chain(LUCKY_STARS)
            .chain(MINOR_STARS)
    }
}

impl Display for Star {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Star {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Star::all()
            .find(|star| star.name() == trimmed)
            .ok_or_else(|| ChartError::InvalidInput(format!("unknown star {s:?}")))
    }
}

/// The Four Transformations (四化).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Transformation {
    /// 化祿, fortune.
    #[serde(rename = "祿")]
    Lu,
    /// 化權, power.
    #[serde(rename = "權")]
    Quan,
    /// 化科, status.
    #[serde(rename = "科")]
    Ke,
    /// 化忌, obstacle.
    #[serde(rename = "忌")]
    Ji,
}

/// The four transformations in table order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// Single-character tag (祿/權/科/忌).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Lu => "祿",
            Self::Quan => "權",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }

    /// Full label (化祿 ..).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lu => "化祿",
            Self::Quan => "化權",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Lu => "Fortune",
            Self::Quan => "Power",
            Self::Ke => "Status",
            Self::Ji => "Obstacle",
        }
    }

    /// 0-based index in 祿/權/科/忌 order.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl FromStr for Transformation {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_TRANSFORMATIONS
            .into_iter()
            .find(|t| {
                t.tag() == trimmed
                    || t.label() == trimmed
                    || t.english_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ChartError::InvalidInput(format!("unknown transformation {s:?}")))
    }
}

impl Display for Transformation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A star as it sits in a palace, tagged when the chart's year stem transforms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlacedStar {
    pub star: Star,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformation: Option<Transformation>,
}

impl PlacedStar {
    pub const fn plain(star: Star) -> Self {
        Self {
            star,
            transformation: None,
        }
    }
}

impl Display for PlacedStar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.transformation {
            Some(t) => write!(f, "{}{}", self.star, t.label()),
            None => write!(f, "{}", self.star),
        }
    }
}
