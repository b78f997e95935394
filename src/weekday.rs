use std::fmt;

use crate::div_rem::RemFloor;

/// Days of the week in the canonical, locale-independent numbering where Sunday is 0
/// and Saturday is 6.
///
/// Which day starts the week depends on the locale, so this type does not implement
/// `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

/// Number of days in a week. Every calendar handled by this crate has seven-day weeks.
pub const DAYS_PER_WEEK: u8 = 7;

const WEEKDAYS: [Weekday; DAYS_PER_WEEK as usize] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK as usize] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Weekday; DAYS_PER_WEEK as usize] = WEEKDAYS;

    /// Get the weekday for a canonical index. Indices outside 0-6 saturate: anything
    /// below zero is Sunday and anything above six is Saturday.
    ///
    /// ```rust
    /// # use weekday_intl::Weekday;
    /// assert_eq!(Weekday::from_index(2), Weekday::Tuesday);
    /// assert_eq!(Weekday::from_index(-1), Weekday::Sunday);
    /// assert_eq!(Weekday::from_index(7), Weekday::Saturday);
    /// ```
    pub fn from_index(index: i64) -> Self {
        WEEKDAYS[index.clamp(0, DAYS_PER_WEEK as i64 - 1) as usize]
    }

    /// The canonical index, 0 for Sunday through 6 for Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The English name, independent of any locale.
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// The weekday `days` days later (or earlier, if negative), wrapping around the week.
    pub fn add_days(self, days: i64) -> Self {
        let week = DAYS_PER_WEEK as i64;
        let index = (self.index() as i64 + days.rem_floor(week)).rem_floor(week);
        WEEKDAYS[index as usize]
    }

    /// Number of days from `self` forward to the next `other`, in 0-6.
    pub fn days_until(self, other: Weekday) -> u8 {
        (other.index() as i64 - self.index() as i64).rem_floor(DAYS_PER_WEEK as i64) as u8
    }

    /// The weekday of a day counted from 1970-01-01, which was a Thursday.
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        Weekday::Thursday.add_days(days)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_index_order() {
        let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        );
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index() as usize, i);
        }
    }

    #[test]
    fn test_from_index_saturates() {
        assert_eq!(Weekday::from_index(-1), Weekday::Sunday);
        assert_eq!(Weekday::from_index(i64::MIN), Weekday::Sunday);
        assert_eq!(Weekday::from_index(7), Weekday::Saturday);
        assert_eq!(Weekday::from_index(i64::MAX), Weekday::Saturday);
        for i in -20..20 {
            assert_eq!(Weekday::from_index(i), Weekday::from_index(i.clamp(0, 6)));
        }
    }

    #[test]
    fn test_add_days_wraps() {
        assert_eq!(Weekday::Saturday.add_days(1), Weekday::Sunday);
        assert_eq!(Weekday::Monday.add_days(6), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.add_days(-1), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.add_days(14), Weekday::Wednesday);
        assert_eq!(Weekday::Wednesday.add_days(-15), Weekday::Tuesday);
        // i64::MAX is a multiple of 7.
        assert_eq!(Weekday::Saturday.add_days(i64::MAX), Weekday::Saturday);
        assert_eq!(Weekday::Sunday.add_days(i64::MIN), Weekday::Saturday);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(Weekday::Monday.days_until(Weekday::Monday), 0);
        assert_eq!(Weekday::Monday.days_until(Weekday::Sunday), 6);
        assert_eq!(Weekday::Saturday.days_until(Weekday::Sunday), 1);
    }

    #[test]
    fn test_from_days_since_epoch() {
        assert_eq!(Weekday::from_days_since_epoch(0), Weekday::Thursday);
        assert_eq!(Weekday::from_days_since_epoch(-1), Weekday::Wednesday);
        // 2024-02-29
        assert_eq!(Weekday::from_days_since_epoch(19_782), Weekday::Thursday);
    }

    #[test]
    fn test_display() {
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }
}
