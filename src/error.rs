use thiserror::Error;

/// A locale or time zone identifier could not be resolved.
///
/// Unset identifiers never produce this error; they fall back to process-wide defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleResolutionError {
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
    #[error("unknown time zone `{0}`")]
    UnknownTimeZone(String),
    #[error("time zone `{0}` has invalid zoneinfo data")]
    InvalidTimeZoneData(String),
}
