use std::path::PathBuf;

use pure_rust_locales::locale_match;
use tracing::debug;

use crate::civil_date::CivilDate;
use crate::error::LocaleResolutionError;
use crate::instant::Instant;
use crate::locale::{LocaleRef, ResolvedLocale};
use crate::week_data;
use crate::weekday::Weekday;
use crate::zoneinfo::{tzdir, TimeZone};

/// The locale services weekday calculations are built on.
///
/// Every method resolves the locale and time zone of `locale` itself; unset identifiers
/// resolve to the process defaults. Implementations must be free of side effects so
/// that identical inputs give identical results.
pub trait LocaleCalendar {
    /// The day the locale's week starts on.
    fn first_day_of_week(&self, locale: &LocaleRef) -> Result<Weekday, LocaleResolutionError>;

    /// The full, unabbreviated name of the weekday of `date`, as the locale writes it.
    fn format_weekday(
        &self,
        locale: &LocaleRef,
        date: CivilDate,
    ) -> Result<String, LocaleResolutionError>;

    /// The date a wall clock in the locale's time zone shows at `instant`.
    fn local_date(
        &self,
        locale: &LocaleRef,
        instant: Instant,
    ) -> Result<CivilDate, LocaleResolutionError>;
}

/// Locale services backed by the glibc locale data compiled into `pure-rust-locales`, the
/// CLDR territory week data and the system zoneinfo database.
///
/// Nothing is cached; each call resolves its identifiers again.
#[derive(Debug, Clone)]
pub struct IntlCalendar {
    tz_dir: PathBuf,
}

impl IntlCalendar {
    /// Read time zones from `$TZDIR`, or `/usr/share/zoneinfo` if it is not set.
    pub fn new() -> Self {
        IntlCalendar::with_tz_dir(tzdir())
    }

    pub fn with_tz_dir(tz_dir: impl Into<PathBuf>) -> Self {
        IntlCalendar {
            tz_dir: tz_dir.into(),
        }
    }

    fn time_zone(&self, locale: &LocaleRef) -> Result<TimeZone, LocaleResolutionError> {
        match locale.time_zone_id() {
            Some(name) => TimeZone::load(&self.tz_dir, name),
            None => Ok(TimeZone::system_default(&self.tz_dir)),
        }
    }
}

impl Default for IntlCalendar {
    fn default() -> Self {
        IntlCalendar::new()
    }
}

impl LocaleCalendar for IntlCalendar {
    fn first_day_of_week(&self, locale: &LocaleRef) -> Result<Weekday, LocaleResolutionError> {
        let resolved = ResolvedLocale::resolve(locale.locale_id())?;
        // The time zone plays no part in the answer but must still be resolvable.
        self.time_zone(locale)?;
        let day = week_data::first_day_of_week(resolved.region());
        debug!(locale = %resolved.tag, first_day = %day, "first day of week");
        Ok(day)
    }

    fn format_weekday(
        &self,
        locale: &LocaleRef,
        date: CivilDate,
    ) -> Result<String, LocaleResolutionError> {
        let resolved = ResolvedLocale::resolve(locale.locale_id())?;
        self.time_zone(locale)?;
        let names: &[&str] = locale_match!(resolved.locale => LC_TIME::DAY);
        Ok(names[date.weekday().index() as usize].to_string())
    }

    fn local_date(
        &self,
        locale: &LocaleRef,
        instant: Instant,
    ) -> Result<CivilDate, LocaleResolutionError> {
        ResolvedLocale::resolve(locale.locale_id())?;
        let zone = self.time_zone(locale)?;
        Ok(zone.date_at(instant))
    }
}
