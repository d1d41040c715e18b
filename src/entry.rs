//! A single matched log line.
//!
//! [`LogEntry`] is what the [parser](crate::parser) produces for each line
//! that matches the configured pattern. Only the date and the sender matter
//! for counting; the time is kept for filtering and debugging.
//!
//! # Examples
//!
//! ```
//! use chatrace::LogEntry;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
//! let entry = LogEntry::new(date, "Alice");
//! assert_eq!(entry.sender(), "Alice");
//! assert!(entry.time.is_none());
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One message attributed to a sender on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Calendar day the message was sent.
    pub date: NaiveDate,

    /// Time of day, if the pattern captured one that parses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,

    /// Sender name exactly as it appears in the log.
    pub sender: String,
}

impl LogEntry {
    /// Creates an entry without a time of day.
    pub fn new(date: NaiveDate, sender: impl Into<String>) -> Self {
        Self {
            date,
            time: None,
            sender: sender.into(),
        }
    }

    /// Builder-style method to set the time of day.
    #[must_use]
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the calendar day.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
