//! Packed lunisolar year table for lunar years 1900..=2100, and its decoded form.
//!
//! Each packed entry is a 17-bit field:
//! - bits 0-3: leap month number (0 = no leap month)
//! - bits 4-15: months 12..1 (bit 15 = month 1); set bit = 30 days, clear = 29
//! - bit 16: leap month length (set = 30 days, clear = 29)
//!
//! The table is decoded at compile time into [`LunarYearData`] records so
//! lookups never touch the bit layout again.

/// First lunar year in the table.
pub const FIRST_LUNAR_YEAR: i32 = 1900;

/// Last lunar year in the table.
pub const LAST_LUNAR_YEAR: i32 = 2100;

/// Number of years in the table.
pub const LUNAR_YEAR_COUNT: usize = (LAST_LUNAR_YEAR - FIRST_LUNAR_YEAR + 1) as usize;

/// Days in a lunar year before long months and the leap month are added.
pub const BASE_YEAR_DAYS: u32 = 348;

#[rustfmt::skip]
const PACKED_LUNAR_YEARS: [u32; LUNAR_YEAR_COUNT] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050-2059
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060-2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080-2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090-2099
    0x0d520, // 2100-2100
];

/// Decoded month structure of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYearData {
    /// Lunar year number.
    pub year: i32,
    /// Lengths of regular months 1..=12 (index 0 = month 1), each 29 or 30.
    pub month_lengths: [u8; 12],
    /// Month after which the intercalary month is inserted.
    pub leap_month: Option<u8>,
    /// Length of the intercalary month, present iff `leap_month` is.
    pub leap_length: Option<u8>,
}

/// One month slot in a year's ordered month sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthSlot {
    /// Month number 1..=12 (a leap month repeats its base month's number).
    pub month: u8,
    /// Whether this slot is the intercalary month.
    pub is_leap: bool,
    /// Days in the month (29 or 30).
    pub days: u8,
}

impl LunarYearData {
    /// Decode a packed entry. Returns `None` for a leap nibble above 12.
    pub const fn decode(year: i32, packed: u32) -> Option<Self> {
        let leap_nibble = (packed & 0xf) as u8;
        if leap_nibble > 12 {
            return None;
        }
        let mut month_lengths = [29u8; 12];
        let mut m = 0;
        while m < 12 {
            if packed & (0x8000 >> m) != 0 {
                month_lengths[m] = 30;
            }
            m += 1;
        }
        let (leap_month, leap_length) = if leap_nibble == 0 {
            (None, None)
        } else if packed & 0x10000 != 0 {
            (Some(leap_nibble), Some(30))
        } else {
            (Some(leap_nibble), Some(29))
        };
        Some(Self {
            year,
            month_lengths,
            leap_month,
            leap_length,
        })
    }

    /// Length of regular month `month` (1..=12).
    pub fn month_days(&self, month: u8) -> Option<u8> {
        match month {
            1..=12 => Some(self.month_lengths[month as usize - 1]),
            _ => None,
        }
    }

    /// Total days: 348 + one per long month + leap month length.
    pub fn total_days(&self) -> u32 {
        let long_months = self.month_lengths.iter().filter(|&&d| d == 30).count() as u32;
        BASE_YEAR_DAYS + long_months + self.leap_length.map_or(0, u32::from)
    }

    /// Months in calendar order, with the leap month right after its base month.
    pub fn months(&self) -> impl Iterator<Item = LunarMonthSlot> + '_ {
        (1..=12u8).flat_map(move |month| {
            let regular = LunarMonthSlot {
                month,
                is_leap: false,
                days: self.month_lengths[month as usize - 1],
            };
            let leap = match (self.leap_month, self.leap_length) {
                (Some(lm), Some(days)) if lm == month => Some(LunarMonthSlot {
                    month,
                    is_leap: true,
                    days,
                }),
                _ => None,
            };
            std::iter::once(regular).chain(leap)
        })
    }
}

const fn decode_table() -> [LunarYearData; LUNAR_YEAR_COUNT] {
    let mut out = [LunarYearData {
        year: FIRST_LUNAR_YEAR,
        month_lengths: [29; 12],
        leap_month: None,
        leap_length: None,
    }; LUNAR_YEAR_COUNT];
    let mut i = 0;
    while i < LUNAR_YEAR_COUNT {
        out[i] = match LunarYearData::decode(FIRST_LUNAR_YEAR + i as i32, PACKED_LUNAR_YEARS[i]) {
            Some(data) => data,
            None => panic!("packed lunar year has a leap nibble above 12"),
        };
        i += 1;
    }
    out
}

// Decoded at compile time: a bad row fails the build instead of shifting later years.
static LUNAR_YEARS: [LunarYearData; LUNAR_YEAR_COUNT] = decode_table();

/// The decoded table, one record per year from 1900.
pub fn lunar_years() -> &'static [LunarYearData] {
    &LUNAR_YEARS
}

/// Decoded record for one lunar year, if inside the table.
pub fn lunar_year(year: i32) -> Option<&'static LunarYearData> {
    if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year) {
        return None;
    }
    LUNAR_YEARS.get((year - FIRST_LUNAR_YEAR) as usize)
}
