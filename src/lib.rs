//! Locale-aware facts about the seven-day week.
//!
//! ```rust,no_run
//! use weekday_intl::{LocaleRef, WeekdayCalculator};
//!
//! let calculator = WeekdayCalculator::new();
//! let days = calculator.localized_weekday_set(&LocaleRef::locale("fr_FR"))?;
//! // Lundi, Mardi, ..., Dimanche
//! for (day, name) in days.iter() {
//!     println!("{} {}", day.index(), name);
//! }
//! # Ok::<(), weekday_intl::LocaleResolutionError>(())
//! ```

pub use calculator::{LocalizedWeekSet, WeekdayCalculator};
pub use calendar::{IntlCalendar, LocaleCalendar};
pub use civil_date::CivilDate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::LocaleResolutionError;
pub use instant::Instant;
pub use locale::{LocaleRef, FALLBACK_LOCALE};
pub use weekday::{Weekday, DAYS_PER_WEEK};
pub use zoneinfo::TimeZone;

mod calculator;
mod calendar;
mod civil_date;
mod clock;
mod div_rem;
mod error;
mod gregorian_normalized_date;
mod instant;
mod locale;
mod week_data;
mod weekday;
mod zoneinfo;
