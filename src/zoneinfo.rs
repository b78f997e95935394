use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};
use zoneinfo_compiled::{parse, TZData};

use crate::civil_date::CivilDate;
use crate::error::LocaleResolutionError;
use crate::instant::Instant;

// Names that resolve to UTC without a zoneinfo file, so UTC works on systems that
// have no tz database installed.
const BUILTIN_UTC_NAMES: [&str; 5] = ["UTC", "Etc/UTC", "GMT", "Etc/GMT", "Z"];

const LOCALTIME_PATH: &str = "/etc/localtime";

/// Root directory of the compiled zoneinfo database.
///
/// Follows the C library: `TZDIR` if set, otherwise `/usr/share/zoneinfo`.
pub(crate) fn tzdir() -> PathBuf {
    std::env::var("TZDIR")
        .unwrap_or_else(|_| "/usr/share/zoneinfo".to_string())
        .into()
}

/// An IANA time zone, reduced to what is needed to find the local date of an instant.
#[derive(Debug, Clone)]
pub struct TimeZone {
    pimpl: Arc<SharedTimeZone>,
}

#[derive(Debug)]
struct SharedTimeZone {
    name: String,
    // Seconds ahead of UTC before the first transition.
    base_offset: i64,
    // Sorted by `at`.
    transitions: Vec<OffsetTransition>,
}

#[derive(Debug, Clone, Copy)]
struct OffsetTransition {
    // Unix time at which `offset` takes effect.
    at: i64,
    // Seconds ahead of UTC.
    offset: i64,
}

impl TimeZone {
    pub fn utc() -> Self {
        TimeZone::fixed("UTC".to_string())
    }

    fn fixed(name: String) -> Self {
        TimeZone::new(name, 0, Vec::new())
    }

    fn new(name: String, base_offset: i64, transitions: Vec<OffsetTransition>) -> Self {
        TimeZone {
            pimpl: Arc::new(SharedTimeZone {
                name,
                base_offset,
                transitions,
            }),
        }
    }

    // The parser folds the first transition into `first`, which is taken to have been in
    // effect forever. Files without transitions carry their only local time type there.
    fn from_tz_data(name: &str, tz: TZData) -> Self {
        let timespans = tz.time_zone.fixed_timespans;
        let mut transitions: Vec<OffsetTransition> = timespans
            .rest
            .iter()
            .map(|(at, timespan)| OffsetTransition {
                at: *at,
                offset: timespan.offset,
            })
            .collect();
        transitions.sort_by_key(|t| t.at);
        TimeZone::new(name.to_string(), timespans.first.offset, transitions)
    }

    /// Load a zone by IANA name, such as `Europe/Paris`, from the zoneinfo database at
    /// `tz_dir`. `UTC`, `Etc/UTC`, `GMT`, `Etc/GMT` and `Z` need no database.
    ///
    /// ```rust
    /// # use weekday_intl::TimeZone;
    /// let zone = TimeZone::load("/nonexistent".as_ref(), "Etc/UTC")?;
    /// assert_eq!(zone.name(), "Etc/UTC");
    /// # Ok::<(), weekday_intl::LocaleResolutionError>(())
    /// ```
    pub fn load(tz_dir: &Path, name: &str) -> Result<Self, LocaleResolutionError> {
        if BUILTIN_UTC_NAMES.contains(&name) {
            return Ok(TimeZone::fixed(name.to_string()));
        }
        // Names are relative paths inside the database and must not escape it.
        let relative = Path::new(name);
        let is_plain_name = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !is_plain_name {
            return Err(LocaleResolutionError::UnknownTimeZone(name.to_string()));
        }
        TimeZone::load_file(name, &tz_dir.join(relative))
    }

    fn load_file(name: &str, path: &Path) -> Result<Self, LocaleResolutionError> {
        let data = std::fs::read(path).map_err(|err| {
            debug!(time_zone = name, path = %path.display(), %err, "failed to read zoneinfo file");
            LocaleResolutionError::UnknownTimeZone(name.to_string())
        })?;
        let tz = parse(data)
            .map_err(|_| LocaleResolutionError::InvalidTimeZoneData(name.to_string()))?;
        debug!(
            time_zone = name,
            transitions = tz.time_zone.fixed_timespans.rest.len(),
            "loaded zoneinfo"
        );
        Ok(TimeZone::from_tz_data(name, tz))
    }

    /// The process-wide default zone: `TZ`, then `/etc/localtime`, then UTC. Never fails.
    pub fn system_default(tz_dir: &Path) -> Self {
        if let Ok(tz) = std::env::var("TZ") {
            let name = tz.strip_prefix(':').unwrap_or(&tz);
            if !name.is_empty() {
                let loaded = if Path::new(name).is_absolute() {
                    TimeZone::load_file(name, Path::new(name))
                } else {
                    TimeZone::load(tz_dir, name)
                };
                match loaded {
                    Ok(zone) => return zone,
                    Err(err) => warn!(%err, "ignoring TZ environment variable"),
                }
            }
        }
        match TimeZone::load_file("localtime", Path::new(LOCALTIME_PATH)) {
            Ok(zone) => zone,
            Err(err) => {
                debug!(%err, "no usable system time zone, using UTC");
                TimeZone::utc()
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.pimpl.name
    }

    /// Seconds ahead of UTC at `instant`.
    pub fn offset_at(&self, instant: Instant) -> i64 {
        let transitions = &self.pimpl.transitions;
        let ticks = instant.ticks_since_epoch();
        match transitions.partition_point(|t| t.at <= ticks) {
            0 => self.pimpl.base_offset,
            index => transitions[index - 1].offset,
        }
    }

    /// The calendar date on a wall clock in this zone at `instant`.
    pub fn date_at(&self, instant: Instant) -> CivilDate {
        CivilDate::from_instant(instant, self.offset_at(instant))
    }
}
