use std::time::SystemTime;

use crate::instant::Instant;

/// Source of the current moment.
///
/// Anything that anchors "the next Monday" and similar relative dates asks a clock
/// instead of reading the system time directly, so results can be pinned in tests.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from(SystemTime::now())
    }
}

/// A clock that is stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> Instant,
{
    fn now(&self) -> Instant {
        self()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(Instant::from_ticks_since_epoch(1_000));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().ticks_since_epoch(), 1_000);
    }

    #[test]
    fn test_closure_clock() {
        let ticks = Cell::new(0);
        let clock = || {
            ticks.set(ticks.get() + 60);
            Instant::from_ticks_since_epoch(ticks.get())
        };
        assert_eq!(clock.now().ticks_since_epoch(), 60);
        assert_eq!(clock.now().ticks_since_epoch(), 120);
    }
}
