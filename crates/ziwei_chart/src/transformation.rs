//! Four Transformations (四化) by Heavenly Stem.

use serde::Serialize;
use ziwei_calendar::{ALL_STEMS, Stem};

use crate::error::ChartError;
use crate::star::{ALL_TRANSFORMATIONS, Star, Transformation};

/// `TRANSFORMATION_TABLE[stem]` = stars taking 化祿, 化權, 化科, 化忌.
#[rustfmt::skip]
const TRANSFORMATION_TABLE: [[Star; 4]; 10] = [
    /* 甲 */ [Star::Lianzhen, Star::Pojun, Star::Wuqu, Star::Taiyang],
    /* 乙 */ [Star::Tianji, Star::Tianliang, Star::Ziwei, Star::Taiyin],
    /* 丙 */ [Star::Tiantong, Star::Tianji, Star::Wenchang, Star::Lianzhen],
    /* 丁 */ [Star::Taiyin, Star::Tiantong, Star::Tianji, Star::Jumen],
    /* 戊 */ [Star::Tanlang, Star::Taiyin, Star::Youbi, Star::Tianji],
    /* 己 */ [Star::Wuqu, Star::Tanlang, Star::Tianliang, Star::Wenqu],
    /* 庚 */ [Star::Taiyang, Star::Wuqu, Star::Taiyin, Star::Tiantong],
    /* 辛 */ [Star::Jumen, Star::Taiyang, Star::Wenqu, Star::Wenchang],
    /* 壬 */ [Star::Tianliang, Star::Ziwei, Star::Zuofu, Star::Wuqu],
    /* 癸 */ [Star::Pojun, Star::Jumen, Star::Taiyin, Star::Tanlang],
];

/// The four transformed stars for one stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourTransformations {
    pub stem: Stem,
    #[serde(rename = "祿")]
    pub lu: Star,
    #[serde(rename = "權")]
    pub quan: Star,
    #[serde(rename = "科")]
    pub ke: Star,
    #[serde(rename = "忌")]
    pub ji: Star,
}

impl FourTransformations {
    pub const fn for_stem(stem: Stem) -> Self {
        let [lu, quan, ke, ji] = TRANSFORMATION_TABLE[stem.index() as usize];
        Self {
            stem,
            lu,
            quan,
            ke,
            ji,
        }
    }

    /// Look up by stem label (`"甲"` ..).
    pub fn for_stem_label(label: &str) -> Result<Self, ChartError> {
        let trimmed = label.trim();
        ALL_STEMS
            .into_iter()
            .find(|s| s.name() == trimmed)
            .map(Self::for_stem)
            .ok_or_else(|| ChartError::UnknownStem(label.to_string()))
    }

    /// Star receiving the given transformation.
    pub const fn star_for(&self, t: Transformation) -> Star {
        match t {
            Transformation::Lu => self.lu,
            Transformation::Quan => self.quan,
            Transformation::Ke => self.ke,
            Transformation::Ji => self.ji,
        }
    }

    /// Transformation carried by `star`, if any.
    pub fn transformation_of(&self, star: Star) -> Option<Transformation> {
        ALL_TRANSFORMATIONS
            .into_iter()
            .find(|&t| self.star_for(t) == star)
    }

    /// `(transformation, star)` pairs in 祿權科忌 order.
    pub fn pairs(&self) -> [(Transformation, Star); 4] {
        ALL_TRANSFORMATIONS.map(|t| (t, self.star_for(t)))
    }
}
