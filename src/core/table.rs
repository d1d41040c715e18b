//! Daily message counts per sender.
//!
//! [`CountTable`] is a dense table: one row per calendar day from the first
//! to the last message, one column per sender. Days without messages are
//! present with zero counts so every day becomes one animation frame.
//!
//! # Example
//!
//! ```
//! use chatrace::core::table::CountTable;
//! use chatrace::LogEntry;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatrace::Result<()> {
//! let d1 = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
//! let d3 = NaiveDate::from_ymd_opt(2021, 3, 3).unwrap();
//! let entries = vec![
//!     LogEntry::new(d1, "Alice"),
//!     LogEntry::new(d1, "Bob"),
//!     LogEntry::new(d3, "Alice"),
//! ];
//!
//! let daily = CountTable::from_entries(&entries)?;
//! assert_eq!(daily.len(), 3); // Mar 2 is filled in
//!
//! let running = daily.cumulative();
//! assert_eq!(running.value(d3, "Alice"), Some(2));
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::config::NameMap;
use crate::entry::LogEntry;
use crate::error::ChatraceError;

/// Tables spanning more days than this log a warning.
pub const LONG_SPAN_DAYS: usize = 3_660;

/// Dates × senders table of message counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable {
    dates: Vec<NaiveDate>,
    senders: Vec<String>,
    /// Row-major: `counts[row][column]`.
    counts: Vec<Vec<u64>>,
}

impl CountTable {
    /// Counts entries per sender per day.
    ///
    /// Senders appear in the order they first speak. Rows cover every day
    /// between the earliest and latest entry, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ChatraceError::EmptyLog`] if `entries` is empty.
    pub fn from_entries(entries: &[LogEntry]) -> Result<Self, ChatraceError> {
        let (Some(first), Some(last)) = (
            entries.iter().map(|e| e.date).min(),
            entries.iter().map(|e| e.date).max(),
        ) else {
            return Err(ChatraceError::empty_log(None));
        };

        let days = (last - first).num_days() as usize + 1;
        if days > LONG_SPAN_DAYS {
            warn!(
                days,
                %first,
                %last,
                "messages span more than {} days; check the log for mis-dated lines",
                LONG_SPAN_DAYS
            );
        }
        let dates: Vec<NaiveDate> = (0..days)
            .map(|offset| first + Duration::days(offset as i64))
            .collect();

        let mut senders: Vec<String> = Vec::new();
        let mut column_of: HashMap<&str, usize> = HashMap::new();
        for entry in entries {
            if !column_of.contains_key(entry.sender.as_str()) {
                column_of.insert(&entry.sender, senders.len());
                senders.push(entry.sender.clone());
            }
        }

        let mut counts = vec![vec![0u64; senders.len()]; days];
        for entry in entries {
            let row = (entry.date - first).num_days() as usize;
            let col = column_of[entry.sender.as_str()];
            counts[row][col] += 1;
        }

        debug!(
            days,
            senders = senders.len(),
            messages = entries.len(),
            "built count table"
        );

        Ok(Self {
            dates,
            senders,
            counts,
        })
    }

    /// Returns the table with columns renamed through `names`.
    ///
    /// Senders missing from the map keep their name. Columns that end up
    /// with the same name are summed into the position of the first one,
    /// so column names stay unique.
    #[must_use]
    pub fn rename(&self, names: &NameMap) -> Self {
        if names.is_empty() {
            return self.clone();
        }

        let mut senders: Vec<String> = Vec::new();
        let mut target: Vec<usize> = Vec::with_capacity(self.senders.len());
        for sender in &self.senders {
            let display = names.get(sender).unwrap_or(sender);
            let idx = match senders.iter().position(|s| s == display) {
                Some(idx) => idx,
                None => {
                    senders.push(display.clone());
                    senders.len() - 1
                }
            };
            target.push(idx);
        }

        let counts = self
            .counts
            .iter()
            .map(|row| {
                let mut merged = vec![0u64; senders.len()];
                for (col, value) in row.iter().enumerate() {
                    merged[target[col]] += value;
                }
                merged
            })
            .collect();

        Self {
            dates: self.dates.clone(),
            senders,
            counts,
        }
    }

    /// Returns the running total of each column down the rows.
    ///
    /// Every column of the result is non-decreasing and its last value is
    /// the sender's overall total.
    #[must_use]
    pub fn cumulative(&self) -> Self {
        let mut running = vec![0u64; self.senders.len()];
        let counts = self
            .counts
            .iter()
            .map(|row| {
                for (acc, value) in running.iter_mut().zip(row) {
                    *acc += value;
                }
                running.clone()
            })
            .collect();

        Self {
            dates: self.dates.clone(),
            senders: self.senders.clone(),
            counts,
        }
    }

    /// Row dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Column names, in column order.
    pub fn senders(&self) -> &[String] {
        &self.senders
    }

    /// Number of rows (days).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First day in the table.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Last day in the table.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Iterates rows as `(date, counts)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDate, &[u64])> {
        self.dates
            .iter()
            .copied()
            .zip(self.counts.iter().map(Vec::as_slice))
    }

    /// Counts for one day, in column order.
    pub fn row(&self, date: NaiveDate) -> Option<&[u64]> {
        let idx = self.row_index(date)?;
        self.counts.get(idx).map(Vec::as_slice)
    }

    /// Counts for one sender, in row order.
    pub fn column(&self, sender: &str) -> Option<Vec<u64>> {
        let col = self.senders.iter().position(|s| s == sender)?;
        Some(self.counts.iter().map(|row| row[col]).collect())
    }

    /// Single cell lookup.
    pub fn value(&self, date: NaiveDate, sender: &str) -> Option<u64> {
        let col = self.senders.iter().position(|s| s == sender)?;
        self.row(date).map(|row| row[col])
    }

    /// Column sums as `(sender, total)`, in column order.
    pub fn totals(&self) -> Vec<(String, u64)> {
        self.senders
            .iter()
            .enumerate()
            .map(|(col, sender)| {
                let total = self.counts.iter().map(|row| row[col]).sum();
                (sender.clone(), total)
            })
            .collect()
    }

    /// Sum of every cell.
    pub fn grand_total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    fn row_index(&self, date: NaiveDate) -> Option<usize> {
        let first = self.first_date()?;
        let offset = (date - first).num_days();
        if offset < 0 {
            return None;
        }
        let idx = offset as usize;
        (idx < self.dates.len()).then_some(idx)
    }
}
