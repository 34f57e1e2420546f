//! Time source for handlers that stamp their responses.

use chrono::{DateTime, Local, SecondsFormat};

/// Source of the current local instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Current instant as RFC 3339 with microsecond precision,
    /// e.g. `2024-05-01T09:30:00.123456+02:00`.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

/// Reads the host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_is_stable() {
        let instant = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.timestamp(), clock.timestamp());
    }

    #[test]
    fn timestamp_round_trips_through_rfc3339() {
        let clock = SystemClock;
        let stamp = clock.timestamp();

        let parsed = DateTime::parse_from_rfc3339(&stamp).unwrap();
        assert!(stamp.starts_with(&parsed.format("%Y-%m-%dT%H:%M:%S").to_string()));
    }

    #[test]
    fn system_clock_does_not_go_backwards_between_reads() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
