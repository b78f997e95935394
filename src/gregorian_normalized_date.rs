// Day numbers are converted to and from Gregorian dates through a representation that
// is "normalized" around the 400-year Gregorian cycle. A cycle has 97 leap years and 303
// common years, 146097 days in total, and ends with a leap century. Within a cycle each
// century ends with a quadrennium and each quadrennium ends with a leap year.
//
// Picking 2000-03-01 as the zero point puts the leap day at the very end of every year,
// quadrennium, century and cycle. The extra day then falls out as an overflow of a
// clamped division instead of needing special cases:
// - 2000-03-01 to 2001-02-28
// - 2001-03-01 to 2002-02-28
// - 2002-03-01 to 2003-02-28
// - 2003-03-01 to 2004-02-29

use num_integer::Integer;

use crate::div_rem::ClampedDivRem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GregorianNormalizedDate {
    // Number of 400-year cycles since 2000-03-01.
    cycle: i64,
    // Century within the cycle (0-3).
    century: u8,
    // Quadrennium within the century (0-24).
    quadrennium: u8,
    // Year within the quadrennium (0-3).
    year: u8,
    // Day within the March-based year (0-365).
    day: u16,
}

const CYCLE_DAYS: u32 = 97 * 366 + 303 * 365;
const CENTURY_DAYS: u16 = 24 * 366 + 76 * 365;
const QUADRENNIUM_DAYS: u16 = 3 * 365 + 366;
const YEAR_DAYS: u16 = 365;
const CYCLE_YEARS: u16 = 400;
const CENTURY_YEARS: u16 = 100;
const QUADRENNIUM_YEARS: u16 = 4;

// Days from 1970-01-01 to 2000-03-01.
const EPOCH_OFFSET_DAYS: i64 = 11_017;
// Index 0 is March. The sentinel keeps month_from_day_offset in bounds for day 365.
const MONTH_STARTS: [u16; 13] = [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337, u16::MAX];
// Day of the March-based year that is January 1.
const JANUARY_FIRST: u16 = 306;

fn month_from_day_offset(day: u16) -> u8 {
    // No month is shorter than 30 days, so day / 30 overshoots by at most one.
    let month = (day / 30) as u8;
    if day < MONTH_STARTS[month as usize] {
        month - 1
    } else {
        month
    }
}

impl GregorianNormalizedDate {
    pub(crate) fn from_day(day: i64) -> Self {
        // Widened so that every i64 day number can be shifted to the 2000-03-01 epoch.
        let day = day as i128 - EPOCH_OFFSET_DAYS as i128;
        let (cycle, days_into_cycle) = day.div_mod_floor(&(CYCLE_DAYS as i128));
        let days_into_cycle = days_into_cycle as u32;

        // Only the last century of a cycle has the extra leap day, so the clamp leaves it
        // in the remainder of century 3.
        let (century, days_into_century) =
            days_into_cycle.clamped_div_rem(CENTURY_DAYS as u32, 3_u8);
        let days_into_century = days_into_century as u16;

        // The last quadrennium of a regular century is one day short, which a plain
        // division handles fine.
        let (quadrennium, days_into_quadrennium) = days_into_century.div_rem(&QUADRENNIUM_DAYS);

        let (year, day) = days_into_quadrennium.clamped_div_rem(YEAR_DAYS, 3_u8);

        GregorianNormalizedDate {
            cycle: cycle as i64,
            century,
            quadrennium: quadrennium as u8,
            year,
            day,
        }
    }

    /// `None` if the day number does not fit in an `i64`.
    pub(crate) fn to_day(self) -> Option<i64> {
        let day = self.cycle as i128 * CYCLE_DAYS as i128
            + self.century as i128 * CENTURY_DAYS as i128
            + self.quadrennium as i128 * QUADRENNIUM_DAYS as i128
            + self.year as i128 * YEAR_DAYS as i128
            + self.day as i128
            + EPOCH_OFFSET_DAYS as i128;
        i64::try_from(day).ok()
    }

    /// `month` must be 1-12 and `day` 1-31. Days past the end of the month roll over into
    /// the following month.
    pub(crate) fn from_date(year: i64, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        debug_assert!((1..=31).contains(&day));

        // Shift so that March is month 0 and January/February belong to the previous year.
        // Widened so that no i64 year overflows.
        let (year, month) = if month < 3 {
            (year as i128 - 1, month + 9)
        } else {
            (year as i128, month - 3)
        };
        let (cycle, years_into_cycle) = (year - 2000).div_mod_floor(&(CYCLE_YEARS as i128));
        let years_into_cycle = years_into_cycle as u16;
        let (century, years_into_century) =
            years_into_cycle.clamped_div_rem(CENTURY_YEARS, 3_u8);
        let (quadrennium, years_into_quadrennium) =
            years_into_century.clamped_div_rem(QUADRENNIUM_YEARS, 24_u8);

        GregorianNormalizedDate {
            cycle: cycle as i64,
            century,
            quadrennium,
            year: years_into_quadrennium as u8,
            day: MONTH_STARTS[month as usize] + (day - 1) as u16,
        }
    }

    pub(crate) fn to_date(self) -> (i64, u8, u8) {
        let mut year = 2000
            + 400 * self.cycle
            + 100 * self.century as i64
            + 4 * self.quadrennium as i64
            + self.year as i64;

        let month = month_from_day_offset(self.day);
        let day = (self.day - MONTH_STARTS[month as usize]) as u8;

        // Back from March-based to January-based months.
        let month = if month >= 10 {
            year += 1;
            month - 10
        } else {
            month + 2
        };
        (year, month + 1, day + 1)
    }

    pub(crate) fn days_in_month(self) -> u8 {
        let month = month_from_day_offset(self.day);
        if month < 11 {
            (MONTH_STARTS[month as usize + 1] - MONTH_STARTS[month as usize]) as u8
        } else if self.is_leap_year() {
            29
        } else {
            28
        }
    }

    pub(crate) fn is_leap_year(self) -> bool {
        // Year within the cycle, in January-based years. The cycle itself doesn't matter.
        let mut year = 100 * self.century as u16 + 4 * self.quadrennium as u16 + self.year as u16;
        if self.day >= JANUARY_FIRST {
            year = (year + 1) % CYCLE_YEARS;
        }
        year % 4 == 0 && (year % 100 != 0 || year == 0)
    }
}
