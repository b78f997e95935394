use tracing::trace;

use crate::calendar::{IntlCalendar, LocaleCalendar};
use crate::civil_date::CivilDate;
use crate::clock::{Clock, SystemClock};
use crate::error::LocaleResolutionError;
use crate::locale::LocaleRef;
use crate::weekday::{Weekday, DAYS_PER_WEEK};

/// Localized weekday names keyed by weekday, in the order they were added.
///
/// A set produced by [`WeekdayCalculator::localized_weekday_set`] holds all seven
/// weekdays exactly once, starting with the locale's first day of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedWeekSet {
    entries: Vec<(Weekday, String)>,
}

impl LocalizedWeekSet {
    /// Set the name of `day`. A day that is already present keeps its position.
    fn insert(&mut self, day: Weekday, name: String) {
        match self.entries.iter_mut().find(|(d, _)| *d == day) {
            Some(entry) => entry.1 = name,
            None => self.entries.push((day, name)),
        }
    }

    pub fn get(&self, day: Weekday) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, name)| name.as_str())
    }

    /// Look up by canonical index, saturating out-of-range indices like
    /// [`Weekday::from_index`].
    pub fn get_index(&self, index: i64) -> Option<&str> {
        self.get(Weekday::from_index(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &str)> + '_ {
        self.entries.iter().map(|(day, name)| (*day, name.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.entries.iter().map(|(day, _)| *day)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<(Weekday, &str)> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<(Weekday, &str)> {
        self.iter().last()
    }
}

impl IntoIterator for LocalizedWeekSet {
    type Item = (Weekday, String);
    type IntoIter = std::vec::IntoIter<(Weekday, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Locale-aware facts about the week: canonical and localized weekday names, and the
/// first and last day of the week.
///
/// Localized names come from a date formatter, which needs a concrete date. Each lookup
/// therefore anchors on the next future date with the wanted weekday, counted from the
/// clock's current moment in the locale's time zone. The anchor date changes as time
/// passes; the localized names computed from it do not.
///
/// Weeks are assumed to be seven days long: the last day of the week is always six days
/// after the first.
#[derive(Debug, Clone, Default)]
pub struct WeekdayCalculator<C = IntlCalendar, K = SystemClock> {
    calendar: C,
    clock: K,
}

impl WeekdayCalculator {
    pub fn new() -> Self {
        WeekdayCalculator::default()
    }

    /// The English name of a canonical weekday index (Sunday is 0). Out-of-range indices
    /// saturate to Sunday or Saturday.
    pub fn weekday_name(index: i64) -> &'static str {
        Weekday::from_index(index).name()
    }

    /// English weekday names in canonical index order, Sunday first.
    pub fn weekday_names() -> [&'static str; DAYS_PER_WEEK as usize] {
        Weekday::ALL.map(Weekday::name)
    }
}

impl<C: LocaleCalendar, K: Clock> WeekdayCalculator<C, K> {
    pub fn with_collaborators(calendar: C, clock: K) -> Self {
        WeekdayCalculator { calendar, clock }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// The locale's name for the weekday at `index`, with its first letter in upper case.
    ///
    /// The name is looked up through the next date after today that falls on that
    /// weekday. That date moves with the clock; only the returned name is stable.
    pub fn localized_weekday_name(
        &self,
        index: i64,
        locale: &LocaleRef,
    ) -> Result<String, LocaleResolutionError> {
        let day = Weekday::from_index(index);
        let date = self.next_occurrence(day, locale)?;
        let name = self.calendar.format_weekday(locale, date)?;
        Ok(capitalize_first(&name))
    }

    /// All seven localized weekday names, keyed by canonical weekday and ordered from the
    /// locale's first day of the week.
    pub fn localized_weekday_set(
        &self,
        locale: &LocaleRef,
    ) -> Result<LocalizedWeekSet, LocaleResolutionError> {
        let first_day = self.calendar.first_day_of_week(locale)?;
        let mut date = self.next_occurrence(first_day, locale)?;
        let mut days = LocalizedWeekSet::default();
        for i in 0..DAYS_PER_WEEK {
            if i > 0 {
                date = date.add_days(1);
            }
            let name = self.calendar.format_weekday(locale, date)?;
            days.insert(date.weekday(), capitalize_first(&name));
        }
        debug_assert_eq!(days.len(), DAYS_PER_WEEK as usize);
        Ok(days)
    }

    pub fn first_day_of_week(&self, locale: &LocaleRef) -> Result<Weekday, LocaleResolutionError> {
        self.calendar.first_day_of_week(locale)
    }

    pub fn first_day_of_week_name(
        &self,
        locale: &LocaleRef,
    ) -> Result<&'static str, LocaleResolutionError> {
        Ok(self.first_day_of_week(locale)?.name())
    }

    /// The day six days after the first day of the week.
    pub fn last_day_of_week(&self, locale: &LocaleRef) -> Result<Weekday, LocaleResolutionError> {
        let first_day = self.first_day_of_week(locale)?;
        let date = self.next_occurrence(first_day, locale)?;
        Ok(date.add_days(DAYS_PER_WEEK as i64 - 1).weekday())
    }

    pub fn last_day_of_week_name(
        &self,
        locale: &LocaleRef,
    ) -> Result<&'static str, LocaleResolutionError> {
        Ok(self.last_day_of_week(locale)?.name())
    }

    /// The first date strictly after today, in the locale's time zone, that falls on `day`.
    /// On a Monday the next Monday is a week away.
    fn next_occurrence(
        &self,
        day: Weekday,
        locale: &LocaleRef,
    ) -> Result<CivilDate, LocaleResolutionError> {
        let today = self.calendar.local_date(locale, self.clock.now())?;
        let days_ahead = match today.weekday().days_until(day) {
            0 => DAYS_PER_WEEK,
            n => n,
        };
        let date = today.add_days(days_ahead as i64);
        trace!(%today, %date, weekday = %day, "anchored weekday");
        Ok(date)
    }
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
