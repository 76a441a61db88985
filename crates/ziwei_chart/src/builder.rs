//! Chart construction: anchors, bureau, star placement, Da Xian.
//!
//! [`build_chart`] is a pure function. Every call builds a fresh
//! [`ChartData`]; nothing is cached between calls.

use tracing::debug;
use ziwei_calendar::{Branch, LunarDate, Stem};

use crate::bureau::FiveElementsBureau;
use crate::chart::{ChartData, ChartHeader, lunar_header_label};
use crate::decade::assign_da_xian;
use crate::error::ChartError;
use crate::input::{BirthInput, Gender};
use crate::palace::{DaXianRange, Palace, PalaceName};
use crate::placement::{PlacementContext, ziwei_position};
use crate::star::{PlacedStar, Star, StarTier};
use crate::transformation::FourTransformations;

/// Pass-through fields that do not affect placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartMeta {
    pub name: String,
    pub solar_date: String,
    /// Year used for the header's nominal age.
    pub reference_year: Option<i32>,
}

/// Life Palace branch: 寅 + (month - 1) - hour.
pub const fn life_palace_branch(month: u8, hour: Branch) -> Branch {
    Branch::from_index(12 - hour.index() as i64 + 1 + month as i64)
}

/// Body Palace branch: 寅 + (month - 1) + hour.
pub const fn body_palace_branch(month: u8, hour: Branch) -> Branch {
    Branch::from_index(month as i64 + 1 + hour.index() as i64)
}

/// Palace stem by the Five Tigers rule: the 寅 stem follows the year stem,
/// then stems advance one per branch through 丑.
pub const fn palace_stem(year_stem: Stem, branch: Branch) -> Stem {
    let yin_stem = (year_stem.index() as i64 % 5) * 2 + 2;
    let steps_from_yin = (branch.index() as i64 - 2).rem_euclid(12);
    Stem::from_index(yin_stem + steps_from_yin)
}

/// Nominal age: lunar birth year counts as 1.
pub fn nominal_age(lunar_year: i32, reference_year: i32) -> Option<u32> {
    u32::try_from(reference_year - lunar_year + 1)
        .ok()
        .filter(|&a| a > 0)
}

fn empty_palace(branch: Branch, year_stem: Stem, life: Branch, body: Branch) -> Palace {
    Palace {
        branch,
        stem: palace_stem(year_stem, branch),
        name: PalaceName::for_branch(life, branch),
        is_body: branch == body,
        main_stars: Vec::new(),
        malefic_stars: Vec::new(),
        lucky_stars: Vec::new(),
        minor_stars: Vec::new(),
        da_xian: DaXianRange::default(),
    }
}

fn place(
    palaces: &mut [Palace; 12],
    placements: impl IntoIterator<Item = (Star, Branch)>,
    transformations: &FourTransformations,
) {
    for (star, branch) in placements {
        let palace = &mut palaces[branch.index() as usize];
        let slot = match star.tier() {
            StarTier::Main => &mut palace.main_stars,
            StarTier::Malefic => &mut palace.malefic_stars,
            StarTier::Lucky => &mut palace.lucky_stars,
            StarTier::Minor => &mut palace.minor_stars,
        };
        if slot.iter().any(|p| p.star == star) {
            continue;
        }
        slot.push(PlacedStar {
            star,
            transformation: transformations.transformation_of(star),
        });
    }
}

/// Build a natal chart from a lunar date, birth-hour branch, and gender.
///
/// A leap month places stars as its base month. Fails with
/// [`ChartError::InvalidPosition`] for a month outside 1..=12 and
/// [`ChartError::InvalidInput`] for a day outside 1..=30, before any palace
/// is populated.
pub fn build_chart(
    lunar: &LunarDate,
    hour: Branch,
    gender: Gender,
    meta: ChartMeta,
) -> Result<ChartData, ChartError> {
    if !(1..=12).contains(&lunar.month) {
        return Err(ChartError::InvalidPosition {
            what: "lunar month",
            index: i64::from(lunar.month),
        });
    }

    let year = lunar.year_stem_branch();
    let life = life_palace_branch(lunar.month, hour);
    let body = body_palace_branch(lunar.month, hour);
    let bureau = FiveElementsBureau::from_year_stem_and_life(year.stem, life);
    let ziwei = ziwei_position(bureau, lunar.day)?;
    debug!(%year, %life, %body, %bureau, %ziwei, "chart anchors");

    let ctx = PlacementContext {
        ziwei,
        year_stem: year.stem,
        year_branch: year.branch,
        month: lunar.month,
        hour,
    };
    let malefic = ctx.malefic_stars()?;
    let lucky = ctx.lucky_stars()?;
    let minor = ctx.minor_stars()?;

    let transformations = FourTransformations::for_stem(year.stem);
    let mut palaces: [Palace; 12] =
        std::array::from_fn(|i| empty_palace(Branch::from_index(i as i64), year.stem, life, body));
    place(&mut palaces, ctx.main_stars(), &transformations);
    place(&mut palaces, malefic, &transformations);
    place(&mut palaces, lucky, &transformations);
    place(&mut palaces, minor, &transformations);

    let direction = assign_da_xian(&mut palaces, life, gender, year.stem);
    debug!(?direction, "da xian assigned");

    let header = ChartHeader {
        name: meta.name,
        age: meta
            .reference_year
            .and_then(|ry| nominal_age(lunar.year, ry)),
        solar_date: meta.solar_date,
        lunar_label: lunar_header_label(lunar),
        lunar_date: *lunar,
        year,
        zodiac: year.zodiac(),
        hour,
        gender,
        yin_yang: gender.yin_yang_label(year.stem),
        bureau,
        life_branch: life,
        body_branch: body,
        ziwei_branch: ziwei,
        da_xian_direction: direction,
        transformations,
    };
    Ok(ChartData { header, palaces })
}

/// Resolve a [`BirthInput`] and build its chart.
pub fn build_chart_from_birth(
    input: &BirthInput,
    reference_year: Option<i32>,
) -> Result<ChartData, ChartError> {
    let (lunar, hour) = input.resolve()?;
    debug!(name = %input.name, solar = %input.solar_label(), lunar = %lunar, "building chart");
    build_chart(
        &lunar,
        hour,
        input.gender,
        ChartMeta {
            name: input.name.clone(),
            solar_date: input.solar_label(),
            reference_year,
        },
    )
}
