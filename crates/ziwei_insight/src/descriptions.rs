//! Canned text for each (palace, transformation) pair.
//!
//! The built-in table covers all 48 pairs. A TOML override keyed by palace
//! name, then transformation tag, may add or replace entries. TOML bare keys
//! are ASCII only, so Chinese keys must be quoted:
//!
//! ```toml
//! ["命宮"]
//! "祿" = "..."
//! "忌" = "..."
//!
//! [Career]
//! Obstacle = "..."
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::warn;
use ziwei_chart::{PalaceName, Transformation};

use crate::error::InsightError;

/// Substituted when no text exists for a pair.
pub const PLACEHOLDER: &str = "暫無說明";

#[rustfmt::skip]
const BUILTIN: [(PalaceName, [&str; 4]); 12] = [
    (PalaceName::Life, [
        "自身福氣厚，處事圓融，人緣與機遇自然而來。",
        "個性主導力強，敢於承擔，宜把握主動權。",
        "重名譽形象，貴人提攜，學習與考試有利。",
        "自我要求高易生執念，宜放下比較、調整心態。",
    ]),
    (PalaceName::Siblings, [
        "手足朋輩互助，合夥往來和諧有得。",
        "兄弟中有強勢者，分工明確則相安。",
        "同輩間互相欣賞，名聲上彼此加分。",
        "與手足易有金錢或意見糾葛，宜界線分明。",
    ]),
    (PalaceName::Spouse, [
        "感情甜蜜，伴侶能帶來助益與財源。",
        "伴侶能力強、主見多，相處宜互相尊重。",
        "姻緣體面，伴侶重品味與名聲。",
        "感情易有誤會或牽絆，溝通需多些耐心。",
    ]),
    (PalaceName::Children, [
        "子女緣佳，晚輩帶來喜悅與福分。",
        "子女個性獨立，管教宜引導不宜強壓。",
        "子女聰穎好學，可期學業表現。",
        "為子女操心較多，宜適度放手。",
    ]),
    (PalaceName::Wealth, [
        "財源順遂，正財偏財皆有機會。",
        "理財有魄力，掌握資源能力強。",
        "財務規劃有條理，信用良好。",
        "錢財進出較大，宜保守理財、避免借貸擔保。",
    ]),
    (PalaceName::Health, [
        "體質底子不錯，病痛易得良醫。",
        "精力旺盛但易過勞，注意作息節制。",
        "重視保養，小恙容易調理。",
        "需留意慢性耗損，定期檢查為宜。",
    ]),
    (PalaceName::Travel, [
        "出外得利，遠行與遷動多有機遇。",
        "在外能掌握局面，適合開拓事業版圖。",
        "外出有貴人，社交場合受人賞識。",
        "外出奔波勞碌，行車旅途宜謹慎。",
    ]),
    (PalaceName::Friends, [
        "朋友緣廣，人脈能帶來實質幫助。",
        "交友圈中具影響力，易成為領頭人物。",
        "結交有識之士，互相切磋成長。",
        "交友需防小人或因人情受累。",
    ]),
    (PalaceName::Career, [
        "事業順利，工作上容易得到報酬與肯定。",
        "職場掌權，適合管理與決策角色。",
        "專業受肯定，升遷與名聲俱佳。",
        "工作壓力與變動較多，宜穩紮穩打。",
    ]),
    (PalaceName::Property, [
        "家宅安穩，置產有利。",
        "能掌管家業，不動產決策有主見。",
        "居家環境雅緻，家風良好。",
        "家宅事務繁雜，置產宜多方評估。",
    ]),
    (PalaceName::Wellbeing, [
        "心境安適，懂得享受生活。",
        "精神意志堅定，追求目標不輕言放棄。",
        "品味高雅，內在修養受人欣賞。",
        "思慮較多易失眠，宜培養紓壓習慣。",
    ]),
    (PalaceName::Parents, [
        "長輩緣佳，得父母或上司照顧。",
        "父母或上司管教嚴格，卻能給予支持。",
        "家學淵源，長輩重視教育與聲譽。",
        "與長輩觀念易有落差，宜多體諒溝通。",
    ]),
];

/// Description lookup table keyed by (palace, transformation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionTable {
    entries: HashMap<(PalaceName, Transformation), String>,
}

impl DescriptionTable {
    /// Table with no entries; every lookup yields [`PLACEHOLDER`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in text for all 48 pairs.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .flat_map(|(palace, texts)| {
                ziwei_chart::ALL_TRANSFORMATIONS
                    .into_iter()
                    .zip(texts)
                    .map(move |(t, text)| ((*palace, t), (*text).to_string()))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, palace: PalaceName, t: Transformation, text: impl Into<String>) {
        self.entries.insert((palace, t), text.into());
    }

    pub fn get(&self, palace: PalaceName, t: Transformation) -> Option<&str> {
        self.entries.get(&(palace, t)).map(String::as_str)
    }

    /// Text for a pair, or [`PLACEHOLDER`] with a warning when missing.
    pub fn describe(&self, palace: PalaceName, t: Transformation) -> Cow<'_, str> {
        match self.get(palace, t) {
            Some(text) => Cow::Borrowed(text),
            None => {
                warn!(palace = %palace, transformation = %t, "missing description");
                Cow::Borrowed(PLACEHOLDER)
            }
        }
    }

    /// Parse an override table. Keys are palace names (`"命宮"` or `Life`) and
    /// transformation tags (`"祿"`, `"化祿"` or `Fortune`).
    pub fn from_toml_str(s: &str) -> Result<Self, InsightError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = toml::from_str(s)?;
        let mut table = Self::empty();
        for (palace_key, row) in raw {
            let palace: PalaceName = palace_key
                .parse()
                .map_err(|_| InsightError::UnknownKey(palace_key.clone()))?;
            for (t_key, text) in row {
                let t: Transformation = t_key
                    .parse()
                    .map_err(|_| InsightError::UnknownKey(format!("{palace_key}.{t_key}")))?;
                table.insert(palace, t, text);
            }
        }
        Ok(table)
    }

    /// Read and parse an override file.
    pub fn load(path: &Path) -> Result<Self, InsightError> {
        let content = std::fs::read_to_string(path).map_err(|source| InsightError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Overlay `other` onto this table; its entries win.
    pub fn merge(&mut self, other: DescriptionTable) {
        self.entries.extend(other.entries);
    }
}
