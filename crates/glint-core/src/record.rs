//! The log record consumed by the console sink

use chrono::{DateTime, Local};
use log::Level;

/// One discrete log event handed to the renderer.
///
/// Records arrive fully built: the engine has already applied level
/// filtering and message interpolation. The message may contain embedded
/// newlines; splitting is the renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    /// Name of the logical component that emitted the record.
    pub source: String,
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl Record {
    /// Create a record with an explicit timestamp.
    pub fn new(
        level: Level,
        source: impl Into<String>,
        timestamp: DateTime<Local>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            source: source.into(),
            timestamp,
            message: message.into(),
        }
    }

    /// Create a record stamped with the current local time.
    pub fn now(level: Level, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(level, source, Local::now(), message)
    }

    /// The timestamp truncated to whole seconds.
    ///
    /// Two records within the same wall-clock second compare equal here
    /// even when their sub-second parts differ.
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_epoch_seconds_truncates_subseconds() {
        let t = Local.with_ymd_and_hms(2024, 5, 14, 9, 41, 7).unwrap();
        let a = Record::new(Level::Info, "MyApp", t, "x");
        let b = Record::new(Level::Info, "MyApp", t + Duration::milliseconds(700), "y");
        assert_eq!(a.epoch_seconds(), b.epoch_seconds());
    }

    #[test]
    fn test_epoch_seconds_differs_across_seconds() {
        let t = Local.with_ymd_and_hms(2024, 5, 14, 9, 41, 7).unwrap();
        let a = Record::new(Level::Info, "MyApp", t, "x");
        let b = Record::new(Level::Info, "MyApp", t + Duration::seconds(1), "y");
        assert_ne!(a.epoch_seconds(), b.epoch_seconds());
    }

    #[test]
    fn test_now_uses_current_time() {
        let before = Local::now().timestamp();
        let record = Record::now(Level::Debug, "Worker", "queue drained");
        let after = Local::now().timestamp();
        assert!(record.epoch_seconds() >= before);
        assert!(record.epoch_seconds() <= after);
    }
}
