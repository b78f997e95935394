use std::fmt;

use num_integer::Integer;

use crate::gregorian_normalized_date::GregorianNormalizedDate;
use crate::instant::Instant;
use crate::weekday::Weekday;

const SECONDS_PER_DAY: i64 = 86_400;

/// A date in the proleptic Gregorian calendar, without time of day or time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    // Days since 1970-01-01.
    day: i64,
}

impl CivilDate {
    /// Returns `None` if `month` is not 1-12, `day` is not a day of that month, or the
    /// date is too far from 1970 to count its days in an `i64`.
    pub fn from_ymd(year: i64, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 {
            return None;
        }
        let gnd = GregorianNormalizedDate::from_date(year, month, 1);
        if day > gnd.days_in_month() {
            return None;
        }
        let day = gnd.to_day()?.checked_add((day - 1) as i64)?;
        Some(CivilDate { day })
    }

    pub fn from_days_since_epoch(day: i64) -> Self {
        CivilDate { day }
    }

    /// The date at `instant` for a clock that is `offset_seconds` ahead of UTC.
    pub fn from_instant(instant: Instant, offset_seconds: i64) -> Self {
        let local = instant.ticks_since_epoch() as i128 + offset_seconds as i128;
        CivilDate {
            // Any i128 sum of two i64 values divided by a day fits back in an i64.
            day: Integer::div_floor(&local, &(SECONDS_PER_DAY as i128)) as i64,
        }
    }

    pub fn days_since_epoch(&self) -> i64 {
        self.day
    }

    pub fn year(&self) -> i64 {
        self.to_ymd().0
    }

    pub fn month(&self) -> u8 {
        self.to_ymd().1
    }

    pub fn day(&self) -> u8 {
        self.to_ymd().2
    }

    pub fn to_ymd(&self) -> (i64, u8, u8) {
        GregorianNormalizedDate::from_day(self.day).to_date()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_days_since_epoch(self.day)
    }

    /// Saturates at the first and last representable day.
    pub fn add_days(&self, days: i64) -> Self {
        CivilDate {
            day: self.day.saturating_add(days),
        }
    }

    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        self.day.checked_add(days).map(|day| CivilDate { day })
    }

    pub fn is_leap_year(&self) -> bool {
        GregorianNormalizedDate::from_day(self.day).is_leap_year()
    }

    pub fn days_in_month(&self) -> u8 {
        GregorianNormalizedDate::from_day(self.day).days_in_month()
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_ymd();
        write!(f, "{:04}-{:02}-{:02}", year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_validates() {
        assert!(CivilDate::from_ymd(2023, 2, 29).is_none());
        assert!(CivilDate::from_ymd(2024, 2, 29).is_some());
        assert!(CivilDate::from_ymd(2024, 4, 31).is_none());
        assert!(CivilDate::from_ymd(2024, 13, 1).is_none());
        assert!(CivilDate::from_ymd(2024, 0, 1).is_none());
        assert!(CivilDate::from_ymd(2024, 1, 0).is_none());
    }

    #[test]
    fn test_accessors() {
        let date = CivilDate::from_ymd(2024, 2, 10).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 10));
        assert!(date.is_leap_year());
        assert_eq!(date.days_in_month(), 29);
        assert_eq!(CivilDate::from_days_since_epoch(date.days_since_epoch()), date);
    }

    #[test]
    fn test_weekday() {
        let date = CivilDate::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(date.days_since_epoch(), 0);
        assert_eq!(date.weekday(), Weekday::Thursday);

        let date = CivilDate::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(date.weekday(), Weekday::Monday);

        let date = CivilDate::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(date.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        let date = CivilDate::from_ymd(2023, 12, 29).unwrap().add_days(6);
        assert_eq!(date.to_ymd(), (2024, 1, 4));
        assert_eq!(date.add_days(-4).to_string(), "2023-12-31");
    }

    #[test]
    fn test_extreme_dates_do_not_overflow() {
        assert!(CivilDate::from_ymd(i64::MAX, 12, 31).is_none());
        assert!(CivilDate::from_ymd(i64::MIN, 1, 1).is_none());

        let last = CivilDate::from_days_since_epoch(i64::MAX);
        assert_eq!(last.add_days(1), last);
        assert_eq!(last.checked_add_days(1), None);
        assert_eq!(last.checked_add_days(-1).map(|d| d.days_since_epoch()), Some(i64::MAX - 1));
        let first = CivilDate::from_days_since_epoch(i64::MIN);
        assert_eq!(first.add_days(-1), first);
        assert_eq!(first.checked_add_days(-1), None);

        // Dates far out still read back.
        let (year, month, day) = last.to_ymd();
        assert!(year > 0 && (1..=12).contains(&month) && (1..=31).contains(&day));
        let _ = first.weekday();

        let instant = Instant::from_ticks_since_epoch(i64::MAX);
        let date = CivilDate::from_instant(instant, 86_400);
        assert_eq!(date.days_since_epoch(), i64::MAX / 86_400 + 1);
    }

    #[test]
    fn test_from_instant_with_offset() {
        // 2024-01-01T23:30:00Z
        let instant = Instant::from_ticks_since_epoch(1_704_151_800);
        assert_eq!(CivilDate::from_instant(instant, 0).to_ymd(), (2024, 1, 1));
        assert_eq!(CivilDate::from_instant(instant, 3_600).to_ymd(), (2024, 1, 2));
        // Before the epoch the day is floored, not truncated.
        let instant = Instant::from_ticks_since_epoch(-1);
        assert_eq!(CivilDate::from_instant(instant, 0).to_ymd(), (1969, 12, 31));
    }
}
