//! # Chatrace
//!
//! A Rust library for turning exported chat logs into "barchart race"
//! animations of who has sent the most messages.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//!
//! 1. **Parse**: a regex pulls the date and the sender out of each log line
//!    ([`parser::LogParser`]). Lines that do not match, such as the
//!    continuation lines of multi-line messages, are skipped.
//! 2. **Aggregate**: matched lines are counted per sender and day, then
//!    accumulated into running totals ([`core::CountTable`]).
//! 3. **Render**: each day becomes one frame of ranked horizontal bars,
//!    written as an animated GIF or a PNG sequence (`render` feature).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatrace::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let log = "\
//! 1/5/21, 09:14 - Alice: morning!
//! 1/5/21, 09:15 - Bob: hey
//! 1/6/21, 18:02 - Alice: anyone up for dinner?
//! and a second line";
//!
//!     let (entries, stats) = LogParser::new().parse_str(log);
//!     assert_eq!(stats.matched, 3);
//!
//!     let daily = CountTable::from_entries(&entries)?;
//!     assert_eq!(daily.totals(), vec![("Alice".into(), 2), ("Bob".into(), 1)]);
//!
//!     let cumulative = daily.cumulative();
//!     let frames = build_frames(&cumulative, 10);
//!     assert_eq!(frames.len(), 2);
//!     assert_eq!(frames[1].leader().map(|b| b.sender.as_str()), Some("Alice"));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LogParser`](parser::LogParser), [`ParseStats`](parser::ParseStats)
//! - [`entry`] - [`LogEntry`], one matched line
//! - [`core`] - filtering, the [`CountTable`](core::CountTable), colours and frames
//! - [`format`] - [`ExportFormat`](format::ExportFormat) for CSV / JSON export
//! - `render` - GIF / PNG output with plotters (`render` feature)
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`RaceConfig`](config::RaceConfig), TOML config files
//! - [`progress`] - per-frame progress callbacks
//! - [`error`] - [`ChatraceError`], [`Result`]
//! - [`prelude`] - convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `render` | GIF / PNG frame output | `plotters` |
//! | `csv-output` | CSV export of count tables | `csv` |
//! | `json-output` | JSON export of count tables | - |
//! | `cli` | The `chatrace` binary | `clap`, `tracing-subscriber`, `indicatif` |
//! | `gen-test` | The `gen_log` synthetic log generator | `rand` |
//! | `full` | Everything except `gen-test` (default) | |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod entry;
pub mod error;
pub mod format;
pub mod parser;
pub mod progress;
#[cfg(feature = "render")]
pub mod render;

pub use entry::LogEntry;
pub use error::{ChatraceError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatrace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::LogEntry;
    pub use crate::error::{ChatraceError, Result};

    pub use crate::parser::{LogParser, ParseStats};

    pub use crate::config::{NameMap, ParseConfig, RaceConfig, RaceFile};

    pub use crate::core::{Bar, CountTable, Frame, FilterConfig, Rgb, apply_filters, build_frames};

    pub use crate::format::{ExportFormat, write_to_format};

    pub use crate::progress::{Progress, ProgressCallback, no_progress};

    #[cfg(feature = "render")]
    pub use crate::render::{RenderStats, RenderTarget, render};
}
