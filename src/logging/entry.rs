//! Immutable log entries

use std::fmt;

use chrono::{DateTime, Local};

pub const INFO: &str = "INFO";
pub const WARNING: &str = "WARNING";
pub const ERROR: &str = "ERROR";

/// Sortable, locale-independent timestamp layout used in rendered lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A single logged event
///
/// Fields are private so an entry cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    level: String,
    message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn new(level: &str, message: impl Into<String>) -> Self {
        Self::at(Local::now(), level, message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, level: &str, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level: level.to_uppercase(),
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Uppercased level label
    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check whether this entry has the given level, ignoring case
    pub fn matches_level(&self, level: &str) -> bool {
        self.level == level.to_uppercase()
    }

    /// Render as `[<timestamp>] LEVEL: message`, without a trailing newline
    pub fn render_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 21, 14, 30, 45).unwrap()
    }

    #[test]
    fn test_level_is_uppercased() {
        let entry = LogEntry::new("debug", "probe");
        assert_eq!(entry.level(), "DEBUG");
        assert_eq!(entry.message(), "probe");
    }

    #[test]
    fn test_level_case_variants_are_equal() {
        let lower = LogEntry::at(fixed_time(), "debug", "m");
        let upper = LogEntry::at(fixed_time(), "DEBUG", "m");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_custom_level_kept() {
        let entry = LogEntry::new("Audit", "");
        assert_eq!(entry.level(), "AUDIT");
        assert_eq!(entry.message(), "");
    }

    #[test]
    fn test_matches_level() {
        let entry = LogEntry::new(WARNING, "low disk");
        assert!(entry.matches_level("warning"));
        assert!(entry.matches_level("WARNING"));
        assert!(!entry.matches_level("WARN"));
    }

    #[test]
    fn test_render_line() {
        let entry = LogEntry::at(fixed_time(), "info", "start");
        assert_eq!(
            entry.render_line(),
            "[2026-01-21 14:30:45.000000] INFO: start"
        );
    }

    #[test]
    fn test_timestamp_captured_at_creation() {
        let before = Local::now();
        let entry = LogEntry::new(INFO, "now");
        let after = Local::now();
        assert!(entry.timestamp() >= before && entry.timestamp() <= after);
    }
}
