//! Count table writers.
//!
//! - [`write_csv`] / [`to_csv`] - one row per day, one column per sender - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - sender list plus per-day count objects - requires `json-output` feature
//!
//! Both accept either the daily or the cumulative table.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatrace::Result<()> {
//! use chatrace::core::output::{write_csv, write_json};
//! use chatrace::core::CountTable;
//! use chatrace::parser::LogParser;
//!
//! let (entries, _) = LogParser::new().parse_file("chat/data.txt".as_ref())?;
//! let daily = CountTable::from_entries(&entries)?;
//!
//! write_csv(&daily, "daily.csv")?;
//! write_json(&daily.cumulative(), "cumulative.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
