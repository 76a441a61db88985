//! Star placement tables and lookups.
//!
//! Every table has named dimensions (`[bureau][day]`, `[year_stem]`,
//! `[branch triad]`). Table shapes are fixed by their array types and every
//! stored branch slot is checked to be < 12 at compile time.
//!
//! Branch slots use 子 = 0 .. 亥 = 11 throughout.

use ziwei_calendar::{Branch, Stem};

use crate::bureau::FiveElementsBureau;
use crate::error::ChartError;
use crate::star::Star;

/// Lunar days per Ziwei table row.
pub const ZIWEI_TABLE_DAYS: usize = 30;

/// `ZIWEI_TABLE[bureau.row()][lunar_day - 1]` = branch slot of 紫微.
#[rustfmt::skip]
pub const ZIWEI_TABLE: [[u8; ZIWEI_TABLE_DAYS]; 5] = [
    // 水二局
    [1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8,
     9, 9, 10, 10, 11, 11, 0, 0, 1, 1, 2, 2, 3, 3, 4],
    // 木三局
    [4, 1, 2, 5, 2, 3, 6, 3, 4, 7, 4, 5, 8, 5, 6,
     9, 6, 7, 10, 7, 8, 11, 8, 9, 0, 9, 10, 1, 10, 11],
    // 金四局
    [11, 4, 1, 2, 0, 5, 2, 3, 1, 6, 3, 4, 2, 7, 4,
     5, 3, 8, 5, 6, 4, 9, 6, 7, 5, 10, 7, 8, 6, 11],
    // 土五局
    [6, 11, 4, 1, 2, 7, 0, 5, 2, 3, 8, 1, 6, 3, 4,
     9, 2, 7, 4, 5, 10, 3, 8, 5, 6, 11, 4, 9, 6, 7],
    // 火六局
    [9, 6, 11, 4, 1, 2, 10, 7, 0, 5, 2, 3, 11, 8, 1,
     6, 3, 4, 0, 9, 2, 7, 4, 5, 1, 10, 3, 8, 5, 6],
];

/// 紫微-system stars: offset from the 紫微 slot.
pub const ZIWEI_SYSTEM: [(Star, i8); 6] = [
    (Star::Ziwei, 0),
    (Star::Tianji, -1),
    (Star::Taiyang, -3),
    (Star::Wuqu, -4),
    (Star::Tiantong, -5),
    (Star::Lianzhen, -8),
];

/// 天府-system stars: offset from the 天府 slot.
pub const TIANFU_SYSTEM: [(Star, i8); 8] = [
    (Star::Tianfu, 0),
    (Star::Taiyin, 1),
    (Star::Tanlang, 2),
    (Star::Jumen, 3),
    (Star::Tianxiang, 4),
    (Star::Tianliang, 5),
    (Star::Qisha, 6),
    (Star::Pojun, 10),
];

/// `LUCUN_BY_STEM[year_stem]` = slot of 祿存.
pub const LUCUN_BY_STEM: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

/// `TIANKUI_BY_STEM[year_stem]` = slot of 天魁.
pub const TIANKUI_BY_STEM: [u8; 10] = [1, 0, 11, 11, 1, 0, 1, 6, 3, 3];

/// `TIANYUE_BY_STEM[year_stem]` = slot of 天鉞.
pub const TIANYUE_BY_STEM: [u8; 10] = [7, 8, 9, 9, 7, 8, 7, 2, 5, 5];

// Year-branch triads, indexed by `year_branch % 4`:
// 0 = 申子辰, 1 = 巳酉丑, 2 = 寅午戌, 3 = 亥卯未.

/// `HUOXING_START_BY_TRIAD[triad]` = 火星 slot at the 子 hour.
pub const HUOXING_START_BY_TRIAD: [u8; 4] = [2, 3, 1, 9];

/// `LINGXING_START_BY_TRIAD[triad]` = 鈴星 slot at the 子 hour.
pub const LINGXING_START_BY_TRIAD: [u8; 4] = [10, 10, 3, 10];

/// `TIANMA_BY_TRIAD[triad]` = slot of 天馬.
pub const TIANMA_BY_TRIAD: [u8; 4] = [2, 11, 8, 5];

const fn all_slots_valid(values: &[u8]) -> bool {
    let mut i = 0;
    while i < values.len() {
        if values[i] >= 12 {
            return false;
        }
        i += 1;
    }
    true
}

const fn ziwei_table_valid() -> bool {
    let mut row = 0;
    while row < ZIWEI_TABLE.len() {
        if !all_slots_valid(&ZIWEI_TABLE[row]) {
            return false;
        }
        row += 1;
    }
    true
}

const _: () = assert!(ziwei_table_valid());
const _: () = assert!(all_slots_valid(&LUCUN_BY_STEM));
const _: () = assert!(all_slots_valid(&TIANKUI_BY_STEM));
const _: () = assert!(all_slots_valid(&TIANYUE_BY_STEM));
const _: () = assert!(all_slots_valid(&HUOXING_START_BY_TRIAD));
const _: () = assert!(all_slots_valid(&LINGXING_START_BY_TRIAD));
const _: () = assert!(all_slots_valid(&TIANMA_BY_TRIAD));

/// Checked conversion of a derived index into a branch slot.
pub fn slot(what: &'static str, index: i64) -> Result<Branch, ChartError> {
    if (0..12).contains(&index) {
        Ok(Branch::from_index(index))
    } else {
        Err(ChartError::InvalidPosition { what, index })
    }
}

/// Branch slot of 紫微 for a bureau and lunar day (1..=30).
pub fn ziwei_position(bureau: FiveElementsBureau, lunar_day: u8) -> Result<Branch, ChartError> {
    let day_idx = usize::from(lunar_day)
        .checked_sub(1)
        .filter(|&d| d < ZIWEI_TABLE_DAYS)
        .ok_or_else(|| ChartError::InvalidInput(format!("lunar day {lunar_day} not in 1..=30")))?;
    slot("ziwei", i64::from(ZIWEI_TABLE[bureau.row()][day_idx]))
}

/// 天府 mirrors 紫微 across the 寅-申 axis.
pub const fn tianfu_position(ziwei: Branch) -> Branch {
    Branch::from_index(4 - ziwei.index() as i64)
}

/// Inputs shared by every placement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementContext {
    pub ziwei: Branch,
    pub year_stem: Stem,
    pub year_branch: Branch,
    /// Lunar month 1..=12 (a leap month uses its base month).
    pub month: u8,
    pub hour: Branch,
}

impl PlacementContext {
    fn triad(&self) -> usize {
        (self.year_branch.index() % 4) as usize
    }

    fn stem_slot(&self, table: &[u8; 10], what: &'static str) -> Result<Branch, ChartError> {
        slot(what, i64::from(table[self.year_stem.index() as usize]))
    }

    fn triad_slot(&self, table: &[u8; 4], what: &'static str) -> Result<Branch, ChartError> {
        slot(what, i64::from(table[self.triad()]))
    }

    /// 14 main stars, read from the 紫微 anchor.
    pub fn main_stars(&self) -> Vec<(Star, Branch)> {
        let tianfu = tianfu_position(self.ziwei);
        ZIWEI_SYSTEM
            .iter()
            .map(|&(star, off)| (star, self.ziwei.offset(i64::from(off))))
            .chain(
                TIANFU_SYSTEM
                    .iter()
                    .map(|&(star, off)| (star, tianfu.offset(i64::from(off)))),
            )
            .collect()
    }

    /// 6 malefic stars: 羊陀 from 祿存 (year stem), 火鈴 from triad + hour,
    /// 空劫 from the hour.
    pub fn malefic_stars(&self) -> Result<Vec<(Star, Branch)>, ChartError> {
        let lucun = self.stem_slot(&LUCUN_BY_STEM, "lucun")?;
        let h = i64::from(self.hour.index());
        let huo = self.triad_slot(&HUOXING_START_BY_TRIAD, "huoxing")?;
        let ling = self.triad_slot(&LINGXING_START_BY_TRIAD, "lingxing")?;
        Ok(vec![
            (Star::Qingyang, lucun.offset(1)),
            (Star::Tuoluo, lucun.offset(-1)),
            (Star::Huoxing, huo.offset(h)),
            (Star::Lingxing, ling.offset(h)),
            (Star::Dikong, Branch::Hai.offset(-h)),
            (Star::Dijie, Branch::Hai.offset(h)),
        ])
    }

    /// 7 lucky stars: 昌曲 by hour, 輔弼 by month, 魁鉞祿 by year stem.
    pub fn lucky_stars(&self) -> Result<Vec<(Star, Branch)>, ChartError> {
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidPosition {
                what: "month",
                index: i64::from(self.month),
            });
        }
        let h = i64::from(self.hour.index());
        let m = i64::from(self.month) - 1;
        Ok(vec![
            (Star::Wenchang, Branch::Xu.offset(-h)),
            (Star::Wenqu, Branch::Chen.offset(h)),
            (Star::Zuofu, Branch::Chen.offset(m)),
            (Star::Youbi, Branch::Xu.offset(-m)),
            (Star::Tiankui, self.stem_slot(&TIANKUI_BY_STEM, "tiankui")?),
            (Star::Tianyue, self.stem_slot(&TIANYUE_BY_STEM, "tianyue")?),
            (Star::Lucun, self.stem_slot(&LUCUN_BY_STEM, "lucun")?),
        ])
    }

    /// 5 minor stars keyed by year branch.
    pub fn minor_stars(&self) -> Result<Vec<(Star, Branch)>, ChartError> {
        let yb = i64::from(self.year_branch.index());
        let hongluan = Branch::Mao.offset(-yb);
        Ok(vec![
            (Star::Tianma, self.triad_slot(&TIANMA_BY_TRIAD, "tianma")?),
            (Star::Hongluan, hongluan),
            (Star::Tianxi, hongluan.offset(6)),
            (Star::Tianku, Branch::Wu.offset(-yb)),
            (Star::Tianxu, Branch::Wu.offset(yb)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bureau::ALL_BUREAUS;

    #[test]
    fn ziwei_first_day_per_bureau() {
        let expected = [
            Branch::Chou,
            Branch::Chen,
            Branch::Hai,
            Branch::Wu,
            Branch::You,
        ];
        for (b, e) in ALL_BUREAUS.iter().zip(expected) {
            assert_eq!(ziwei_position(*b, 1).unwrap(), e, "{b}");
        }
    }

    #[test]
    fn ziwei_rule_matches_table() {
        // Round the day up to a multiple of the bureau, step from 寅, then
        // move back (odd padding) or forward (even padding) by the padding.
        for b in ALL_BUREAUS {
            let n = b.number() as i64;
            for day in 1..=30i64 {
                let pad = (n - day % n) % n;
                let q = (day + pad) / n;
                let base = 2 + q - 1;
                let pos = if pad % 2 == 1 { base - pad } else { base + pad };
                assert_eq!(
                    ziwei_position(b, day as u8).unwrap(),
                    Branch::from_index(pos),
                    "{b} day {day}"
                );
            }
        }
    }

    #[test]
    fn ziwei_day_out_of_range() {
        assert!(ziwei_position(FiveElementsBureau::Water2, 0).is_err());
        assert!(ziwei_position(FiveElementsBureau::Water2, 31).is_err());
    }

    #[test]
    fn tianfu_mirror() {
        assert_eq!(tianfu_position(Branch::Yin), Branch::Yin);
        assert_eq!(tianfu_position(Branch::Shen), Branch::Shen);
        assert_eq!(tianfu_position(Branch::Zi), Branch::Chen);
        assert_eq!(tianfu_position(Branch::Wu), Branch::Xu);
        assert_eq!(tianfu_position(Branch::Mao), Branch::Chou);
    }

    #[test]
    fn slot_rejects_out_of_range() {
        assert!(slot("test", 12).is_err());
        assert!(slot("test", -1).is_err());
        assert_eq!(slot("test", 11).unwrap(), Branch::Hai);
    }

    fn ctx() -> PlacementContext {
        // 己巳 year, 12th month, 子 hour, 紫微 at 卯.
        PlacementContext {
            ziwei: Branch::Mao,
            year_stem: Stem::Ji,
            year_branch: Branch::Si,
            month: 12,
            hour: Branch::Zi,
        }
    }

    #[test]
    fn main_stars_from_anchor() {
        let stars = ctx().main_stars();
        assert_eq!(stars.len(), 14);
        let at = |s: Star| stars.iter().find(|(x, _)| *x == s).map(|(_, b)| *b).unwrap();
        assert_eq!(at(Star::Ziwei), Branch::Mao);
        assert_eq!(at(Star::Tianji), Branch::Yin);
        assert_eq!(at(Star::Lianzhen), Branch::Wei);
        assert_eq!(at(Star::Tianfu), Branch::Chou);
        assert_eq!(at(Star::Pojun), Branch::Hai);
    }

    #[test]
    fn malefics_for_ji_si_zi_hour() {
        let m = ctx().malefic_stars().unwrap();
        assert_eq!(
            m,
            vec![
                (Star::Qingyang, Branch::Wei),
                (Star::Tuoluo, Branch::Si),
                (Star::Huoxing, Branch::Mao),
                (Star::Lingxing, Branch::Xu),
                (Star::Dikong, Branch::Hai),
                (Star::Dijie, Branch::Hai),
            ]
        );
    }

    #[test]
    fn lucky_month_guard() {
        let mut c = ctx();
        c.month = 13;
        assert!(matches!(
            c.lucky_stars(),
            Err(ChartError::InvalidPosition { what: "month", .. })
        ));
    }

    #[test]
    fn zuofu_youbi_first_month() {
        let mut c = ctx();
        c.month = 1;
        let l = c.lucky_stars().unwrap();
        assert!(l.contains(&(Star::Zuofu, Branch::Chen)));
        assert!(l.contains(&(Star::Youbi, Branch::Xu)));
    }

    #[test]
    fn minor_stars_for_si_year() {
        let m = ctx().minor_stars().unwrap();
        assert!(m.contains(&(Star::Tianma, Branch::Hai)));
        assert!(m.contains(&(Star::Hongluan, Branch::Xu)));
        assert!(m.contains(&(Star::Tianxi, Branch::Chen)));
        assert!(m.contains(&(Star::Tianku, Branch::Chou)));
        assert!(m.contains(&(Star::Tianxu, Branch::Hai)));
    }
}
