//! Filter log entries by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering entries before they are counted.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Entries on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Entries on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Entries from listed senders |
//!
//! # Example
//!
//! ```
//! use chatrace::core::filter::{FilterConfig, apply_filters};
//! use chatrace::LogEntry;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatrace::Result<()> {
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//! let entries = vec![
//!     LogEntry::new(day(1), "Alice"),
//!     LogEntry::new(day(15), "Bob"),
//!     LogEntry::new(day(20), "alice"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-10")?
//!     .with_sender("Alice");
//!
//! let filtered = apply_filters(entries, &config);
//! assert_eq!(filtered.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive
//! - Sender matching is case-insensitive for ASCII characters
//! - Several senders may be listed; an entry passes if it matches any
//! - Date and sender filters are combined with AND logic

use chrono::NaiveDate;

use crate::entry::LogEntry;
use crate::error::ChatraceError;

/// Configuration for filtering entries by date and sender.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only entries on or after this day.
    pub after: Option<NaiveDate>,

    /// Include only entries on or before this day.
    pub before: Option<NaiveDate>,

    /// Include only entries from these senders (case-insensitive).
    pub senders: Vec<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all entries pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatraceError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatraceError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatraceError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatraceError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Adds a sender to the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.senders.push(sender.into());
        self
    }

    /// Sets the start day directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end day directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_sender_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the sender filter is active.
    pub fn has_sender_filter(&self) -> bool {
        !self.senders.is_empty()
    }

    /// Returns `true` if `entry` passes every active filter.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if self.after.is_some_and(|after| entry.date < after) {
            return false;
        }
        if self.before.is_some_and(|before| entry.date > before) {
            return false;
        }
        if self.has_sender_filter()
            && !self
                .senders
                .iter()
                .any(|s| s.eq_ignore_ascii_case(&entry.sender))
        {
            return false;
        }
        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatraceError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatraceError::invalid_date(date_str))
}

/// Filters entries by the provided configuration.
///
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(entries: Vec<LogEntry>, config: &FilterConfig) -> Vec<LogEntry> {
    if !config.is_active() {
        return entries;
    }

    entries.into_iter().filter(|e| config.matches(e)).collect()
}
