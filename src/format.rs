//! Export format selection for count tables.
//!
//! # Example
//!
//! ```rust
//! use chatrace::format::ExportFormat;
//! use std::path::Path;
//!
//! let format = ExportFormat::from_path(Path::new("counts.json")).unwrap();
//! assert_eq!(format, ExportFormat::Json);
//! assert_eq!(format.extension(), "json");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::table::CountTable;
use crate::error::ChatraceError;

/// Export format for a [`CountTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// Comma-separated, one row per day (default)
    #[default]
    Csv,

    /// JSON document with a sender list and per-day rows
    Json,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &Path) -> Result<Self, ChatraceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            ChatraceError::unsupported_output(
                path,
                format!(
                    "Unknown file extension: '.{}'. Expected one of: {}",
                    ext,
                    Self::all_names().join(", ")
                ),
            )
        })
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a table to `path` in the given format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    table: &CountTable,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ChatraceError> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(table, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::write_json(table, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatraceError::unsupported_output(
            path,
            format!(
                "Export format {} requires the '{}' feature to be enabled",
                format,
                match format {
                    ExportFormat::Csv => "csv-output",
                    ExportFormat::Json => "json-output",
                }
            ),
        )),
    }
}
