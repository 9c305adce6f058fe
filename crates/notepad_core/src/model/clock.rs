//! Time source for note ids and timestamps.
//!
//! The store reads time only through [`Clock`], so tests can pin ids and
//! timestamps without sleeping.

use chrono::{DateTime, SecondsFormat, Utc};

/// Injectable wall clock.
pub trait Clock {
    /// Current UTC instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current time formatted as an ISO-8601 timestamp string.
    fn now_timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, Clock, SystemClock};
    use chrono::DateTime;

    #[test]
    fn format_timestamp_uses_millis_and_zulu_suffix() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).expect("valid instant");
        assert_eq!(format_timestamp(at), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn system_clock_produces_zulu_timestamps() {
        let clock = SystemClock;
        assert!(clock.now().timestamp_millis() > 0);
        assert!(clock.now_timestamp().ends_with('Z'));
    }
}
