use std::time::SystemTime;

/// A point in time, in whole seconds since the Unix epoch.
///
/// This is Unix time: every day is exactly 86,400 seconds and leap seconds are not
/// counted. Weekday arithmetic only ever needs the calendar day an instant falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    ticks: i64,
}

impl Instant {
    pub fn from_ticks_since_epoch(ticks: i64) -> Self {
        Instant { ticks }
    }

    pub fn epoch() -> Self {
        Instant::from_ticks_since_epoch(0)
    }

    pub fn ticks_since_epoch(&self) -> i64 {
        self.ticks
    }

    /// Sub-second precision is floored away, also for times before the epoch.
    pub fn from_system_time(value: SystemTime) -> Self {
        let (seconds, subsecond_ns) = system_time_to_time_t(value);
        Instant::from_ticks_since_epoch(seconds as i64 - (subsecond_ns < 0) as i64)
    }
}

impl From<SystemTime> for Instant {
    fn from(value: SystemTime) -> Self {
        Instant::from_system_time(value)
    }
}

/// Return the number of whole seconds since the Unix epoch, as defined by time_t, and the
/// nanoseconds left over. Both parts are negative for times before the epoch.
fn system_time_to_time_t(value: SystemTime) -> (libc::time_t, i32) {
    match value.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => (
            duration.as_secs() as libc::time_t,
            duration.subsec_nanos() as i32,
        ),
        Err(err) => {
            let duration = err.duration();
            (
                -(duration.as_secs() as libc::time_t),
                -(duration.subsec_nanos() as i32),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_from_system_time() {
        let instant = Instant::from(SystemTime::UNIX_EPOCH + Duration::from_millis(90_500));
        assert_eq!(instant.ticks_since_epoch(), 90);

        let instant = Instant::from(SystemTime::UNIX_EPOCH - Duration::from_millis(500));
        assert_eq!(instant.ticks_since_epoch(), -1);

        let instant = Instant::from(SystemTime::UNIX_EPOCH - Duration::from_secs(86_400));
        assert_eq!(instant.ticks_since_epoch(), -86_400);

        assert_eq!(Instant::from(SystemTime::UNIX_EPOCH), Instant::epoch());
    }

    #[test]
    fn test_now_is_monotonic_enough() {
        let t1 = Instant::from(SystemTime::now());
        let t2 = Instant::from(SystemTime::now());
        assert!(t1 <= t2);
    }
}
