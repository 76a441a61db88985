//! Health hints from the Health Palace (疾厄宮).
//!
//! The stars of the Health Palace, or of the Parents Palace when the Health
//! Palace holds no main star, are mapped to body parts through a fixed
//! table. Each body part contributes one tip.

use serde::Serialize;
use tracing::warn;
use ziwei_calendar::Branch;
use ziwei_chart::{ChartData, PalaceName, PlacedStar, Star};

/// Body systems the star table refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyPart {
    #[serde(rename = "頭部")]
    Head,
    #[serde(rename = "眼睛")]
    Eyes,
    #[serde(rename = "喉嚨口腔")]
    Throat,
    #[serde(rename = "心臟")]
    Heart,
    #[serde(rename = "血液循環")]
    Blood,
    #[serde(rename = "肺與呼吸道")]
    Lungs,
    #[serde(rename = "肝膽")]
    Liver,
    #[serde(rename = "脾胃")]
    Stomach,
    #[serde(rename = "腸道")]
    Intestines,
    #[serde(rename = "腎與泌尿")]
    Kidneys,
    #[serde(rename = "生殖系統")]
    Reproductive,
    #[serde(rename = "筋骨")]
    Bones,
    #[serde(rename = "四肢")]
    Limbs,
    #[serde(rename = "皮膚")]
    Skin,
    #[serde(rename = "神經系統")]
    Nerves,
}

impl BodyPart {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "頭部",
            Self::Eyes => "眼睛",
            Self::Throat => "喉嚨口腔",
            Self::Heart => "心臟",
            Self::Blood => "血液循環",
            Self::Lungs => "肺與呼吸道",
            Self::Liver => "肝膽",
            Self::Stomach => "脾胃",
            Self::Intestines => "腸道",
            Self::Kidneys => "腎與泌尿",
            Self::Reproductive => "生殖系統",
            Self::Bones => "筋骨",
            Self::Limbs => "四肢",
            Self::Skin => "皮膚",
            Self::Nerves => "神經系統",
        }
    }

    /// Canned care tip.
    pub const fn tip(self) -> &'static str {
        match self {
            Self::Head => "避免長時間用腦過度，留意頭痛與血壓。",
            Self::Eyes => "減少螢幕時間，定期檢查視力。",
            Self::Throat => "少食辛辣，注意口腔與喉嚨保養。",
            Self::Heart => "保持規律運動，避免情緒大起大落。",
            Self::Blood => "多活動促進循環，注意血壓與血脂。",
            Self::Lungs => "遠離菸塵，季節交替時注意呼吸道保暖。",
            Self::Liver => "作息規律、少熬夜飲酒，讓肝膽得到休息。",
            Self::Stomach => "三餐定時定量，少吃生冷油膩。",
            Self::Intestines => "多攝取纖維與水分，維持腸道通暢。",
            Self::Kidneys => "多喝水、不憋尿，避免過度勞累。",
            Self::Reproductive => "注意私密處衛生，定期婦科或泌尿科檢查。",
            Self::Bones => "維持正確姿勢，適度補充鈣質。",
            Self::Limbs => "運動前充分暖身，留意跌撞與外傷。",
            Self::Skin => "注意防曬保濕，避免過敏原。",
            Self::Nerves => "適度放鬆減壓，確保睡眠充足。",
        }
    }
}

/// `STAR_BODY_PARTS` lists every placeable star once.
static STAR_BODY_PARTS: [(Star, &[BodyPart]); 32] = [
    (Star::Ziwei, &[BodyPart::Head, BodyPart::Stomach]),
    (Star::Tianji, &[BodyPart::Liver, BodyPart::Nerves]),
    (Star::Taiyang, &[BodyPart::Head, BodyPart::Eyes]),
    (Star::Wuqu, &[BodyPart::Lungs, BodyPart::Bones]),
    (Star::Tiantong, &[BodyPart::Kidneys]),
    (Star::Lianzhen, &[BodyPart::Blood, BodyPart::Heart]),
    (Star::Tianfu, &[BodyPart::Stomach]),
    (Star::Taiyin, &[BodyPart::Kidneys, BodyPart::Eyes]),
    (Star::Tanlang, &[BodyPart::Liver, BodyPart::Reproductive]),
    (Star::Jumen, &[BodyPart::Throat, BodyPart::Stomach]),
    (Star::Tianxiang, &[BodyPart::Skin, BodyPart::Kidneys]),
    (Star::Tianliang, &[BodyPart::Stomach, BodyPart::Heart]),
    (Star::Qisha, &[BodyPart::Lungs, BodyPart::Intestines]),
    (Star::Pojun, &[BodyPart::Reproductive, BodyPart::Kidneys]),
    (Star::Qingyang, &[BodyPart::Limbs, BodyPart::Head]),
    (Star::Tuoluo, &[BodyPart::Bones, BodyPart::Throat]),
    (Star::Huoxing, &[BodyPart::Skin, BodyPart::Blood]),
    (Star::Lingxing, &[BodyPart::Nerves]),
    (Star::Dikong, &[BodyPart::Nerves]),
    (Star::Dijie, &[BodyPart::Intestines]),
    (Star::Wenchang, &[BodyPart::Nerves]),
    (Star::Wenqu, &[BodyPart::Kidneys]),
    (Star::Zuofu, &[]),
    (Star::Youbi, &[]),
    (Star::Tiankui, &[]),
    (Star::Tianyue, &[]),
    (Star::Lucun, &[BodyPart::Stomach]),
    (Star::Tianma, &[BodyPart::Limbs]),
    (Star::Hongluan, &[BodyPart::Blood]),
    (Star::Tianxi, &[BodyPart::Reproductive]),
    (Star::Tianku, &[BodyPart::Lungs]),
    (Star::Tianxu, &[BodyPart::Lungs]),
];

/// Body parts associated with one star.
pub fn body_parts_of(star: Star) -> &'static [BodyPart] {
    STAR_BODY_PARTS
        .iter()
        .find(|(s, _)| *s == star)
        .map_or(&[], |(_, parts)| *parts)
}

/// Outcome of [`analyze_health`].
///
/// A Health Palace counts as empty when it holds no main star. Its auxiliary
/// stars (for example 天鉞) are then ignored and only the Parents Palace is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthAnalysisResult {
    /// Palace the stars were read from.
    pub source_palace: PalaceName,
    pub source_branch: Branch,
    /// True when the Health Palace was empty and Parents was read instead.
    pub used_fallback: bool,
    pub stars: Vec<PlacedStar>,
    /// Deduplicated, first-seen order.
    pub body_parts: Vec<BodyPart>,
    /// One tip per body part, same order.
    pub tips: Vec<&'static str>,
}

pub fn analyze_health(chart: &ChartData) -> HealthAnalysisResult {
    let health = chart.palace(PalaceName::Health);
    let (source, used_fallback) = if health.is_empty() {
        warn!(branch = %health.branch, "health palace empty, reading parents palace");
        (chart.palace(PalaceName::Parents), true)
    } else {
        (health, false)
    };

    let stars = source.star_all();
    let mut body_parts: Vec<BodyPart> = Vec::new();
    for part in stars.iter().flat_map(|p| body_parts_of(p.star)) {
        if !body_parts.contains(part) {
            body_parts.push(*part);
        }
    }
    let tips = body_parts.iter().map(|p| p.tip()).collect();

    HealthAnalysisResult {
        source_palace: source.name,
        source_branch: source.branch,
        used_fallback,
        stars,
        body_parts,
        tips,
    }
}
