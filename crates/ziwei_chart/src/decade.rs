//! Da Xian (大限) decade cycle.

use serde::Serialize;
use ziwei_calendar::{Branch, Stem};

use crate::input::Gender;
use crate::palace::{DaXianRange, Palace};

/// Years per Da Xian window.
pub const DECADE_SPAN: u32 = 10;

/// Walking direction of the decade sequence around the branch ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecadeDirection {
    Forward,
    Reverse,
}

impl DecadeDirection {
    /// Forward for yang-stem males and yin-stem females.
    pub const fn for_native(gender: Gender, year_stem: Stem) -> Self {
        let even = year_stem.index() % 2 == 0;
        if gender.is_male() == even {
            Self::Forward
        } else {
            Self::Reverse
        }
    }

    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    /// First age of the first window.
    pub const fn start_age(self) -> u32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => 10,
        }
    }
}

/// The 12 `(branch, window)` pairs, beginning at the Life Palace.
pub fn decade_ranges(life: Branch, direction: DecadeDirection) -> [(Branch, DaXianRange); 12] {
    let start = direction.start_age();
    std::array::from_fn(|k| {
        let branch = life.offset(direction.step() * k as i64);
        let start_age = start + DECADE_SPAN * k as u32;
        (
            branch,
            DaXianRange {
                start_age,
                end_age: start_age + DECADE_SPAN - 1,
            },
        )
    })
}

/// Attach decade windows to palaces in place. Stars are untouched.
pub fn assign_da_xian(
    palaces: &mut [Palace],
    life: Branch,
    gender: Gender,
    year_stem: Stem,
) -> DecadeDirection {
    let direction = DecadeDirection::for_native(gender, year_stem);
    for (branch, range) in decade_ranges(life, direction) {
        if let Some(p) = palaces.iter_mut().find(|p| p.branch == branch) {
            p.da_xian = range;
        }
    }
    direction
}

/// Palace whose window contains a nominal age.
pub fn decade_for_age(palaces: &[Palace], age: u32) -> Option<&Palace> {
    palaces.iter().find(|p| p.da_xian.contains(age))
}
