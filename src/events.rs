//! Event System
//!
//! Activity events recorded as the dashboard handles user actions

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Part of the application that produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// View transitions and refreshes.
    Controller,
    /// Filter bar changes.
    Filters,
    /// Terminal host and command line.
    Host,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Navigation,
    Refresh,
    FilterChange,
    Notification,
    Notice,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn controller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Controller, msg, event_type, log_level)
    }

    pub fn filters_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Filters, msg, event_type, log_level)
    }

    pub fn host_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Host, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_events_always_display() {
        let event = Event::controller_with_level(
            "Opened insights".to_string(),
            EventType::Navigation,
            LogLevel::Info,
        );
        assert!(event.should_display());
        assert_eq!(event.source, Source::Controller);
    }

    #[test]
    fn test_display_format() {
        let event = Event::host_with_level(
            "Export is not available".to_string(),
            EventType::Notice,
            LogLevel::Warn,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Notice ["));
        assert!(rendered.ends_with("] Export is not available"));
    }
}
