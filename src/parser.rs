//! Line parser for exported chat logs.
//!
//! Each line is matched against one regex anchored at the start of the line.
//! Capture group 1 is the date, group 2 the time and group 3 the sender.
//! Lines that do not match (continuation lines of multi-line messages,
//! headers, notices) are skipped and counted in [`ParseStats`].
//!
//! The default pattern fits Android-style exports:
//!
//! ```text
//! 3/14/21, 9:26 - Alice: see you at 10
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatrace::parser::LogParser;
//!
//! let parser = LogParser::new();
//! let log = "3/14/21, 9:26 - Alice: hi\ncontinued line\n3/15/21, 10:00 - Bob: hey";
//!
//! let (entries, stats) = parser.parse_str(log);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(stats.skipped, 1);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::entry::LogEntry;
use crate::error::ChatraceError;

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

/// Line counters from one parse run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines read, including blank ones.
    pub total_lines: usize,

    /// Lines that produced a [`LogEntry`].
    pub matched: usize,

    /// Lines that were dropped.
    pub skipped: usize,
}

impl ParseStats {
    /// Share of lines that matched, in percent.
    pub fn match_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        self.matched as f64 / self.total_lines as f64 * 100.0
    }

    fn record(&mut self, matched: bool) {
        self.total_lines += 1;
        if matched {
            self.matched += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Regex-driven parser for chat log lines.
#[derive(Debug, Clone)]
pub struct LogParser {
    config: ParseConfig,
    regex: Regex,
}

impl LogParser {
    /// Creates a parser with the default pattern and date format.
    pub fn new() -> Self {
        // The default pattern is a compile-time constant with three groups.
        Self::with_config(ParseConfig::default()).expect("default pattern is valid")
    }

    /// Creates a parser with a custom configuration.
    ///
    /// The pattern is anchored at the start of the line and must have at
    /// least three capture groups.
    pub fn with_config(config: ParseConfig) -> Result<Self, ChatraceError> {
        let anchored = format!("^(?:{})", config.pattern);
        let regex = Regex::new(&anchored)
            .map_err(|e| ChatraceError::invalid_pattern(&config.pattern, e.to_string()))?;

        // captures_len counts the implicit whole-match group
        if regex.captures_len() < 4 {
            return Err(ChatraceError::invalid_pattern(
                &config.pattern,
                format!(
                    "expected 3 capture groups (date, time, sender), found {}",
                    regex.captures_len() - 1
                ),
            ));
        }

        Ok(Self { config, regex })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses one line.
    ///
    /// Returns `None` when the line does not match, the date does not parse
    /// or the line is a skipped system line.
    pub fn parse_line(&self, line: &str) -> Option<LogEntry> {
        let caps = self.regex.captures(line)?;

        let date_str = caps.get(1).map_or("", |m| m.as_str());
        let time_str = caps.get(2).map_or("", |m| m.as_str());
        let sender = caps.get(3).map_or("", |m| m.as_str());

        let date = NaiveDate::parse_from_str(date_str, &self.config.date_format).ok()?;

        if self.config.skip_system_messages && sender.trim().is_empty() {
            return None;
        }

        let mut entry = LogEntry::new(date, sender);
        entry.time = parse_time(time_str);
        Some(entry)
    }

    /// Parses a whole log held in memory.
    pub fn parse_str(&self, content: &str) -> (Vec<LogEntry>, ParseStats) {
        let mut entries = Vec::new();
        let mut stats = ParseStats::default();

        for (idx, line) in content.lines().enumerate() {
            self.push_line(line, idx + 1, &mut entries, &mut stats);
        }

        debug!(
            matched = stats.matched,
            skipped = stats.skipped,
            "parsed log"
        );
        (entries, stats)
    }

    /// Parses a log line by line from a reader.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a stray byte only
    /// costs the line it is on.
    pub fn parse_reader<R: BufRead>(
        &self,
        mut reader: R,
    ) -> Result<(Vec<LogEntry>, ParseStats), ChatraceError> {
        let mut entries = Vec::new();
        let mut stats = ParseStats::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf)?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            self.push_line(line, line_no, &mut entries, &mut stats);
        }

        debug!(
            lines = stats.total_lines,
            matched = stats.matched,
            skipped = stats.skipped,
            "parsed log"
        );
        Ok((entries, stats))
    }

    /// Parses a log file.
    pub fn parse_file(&self, path: &Path) -> Result<(Vec<LogEntry>, ParseStats), ChatraceError> {
        let file = File::open(path)?;
        self.parse_reader(BufReader::with_capacity(64 * 1024, file))
    }

    fn push_line(
        &self,
        line: &str,
        line_no: usize,
        entries: &mut Vec<LogEntry>,
        stats: &mut ParseStats,
    ) {
        match self.parse_line(line) {
            Some(entry) => {
                entries.push(entry);
                stats.record(true);
            }
            None => {
                trace!(line = line_no, "skipped unmatched line");
                stats.record(false);
            }
        }
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_time(time_str: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time_str, fmt).ok())
}
