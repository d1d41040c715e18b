//! JSON output writer.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::table::CountTable;
use crate::error::ChatraceError;

/// Table shape written to JSON.
#[derive(Serialize)]
struct JsonTable<'a> {
    senders: &'a [String],
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    date: String,
    counts: BTreeMap<&'a str, u64>,
}

impl<'a> JsonTable<'a> {
    fn from_table(table: &'a CountTable) -> Self {
        let rows = table
            .rows()
            .map(|(date, row)| JsonRow {
                date: date.format("%Y-%m-%d").to_string(),
                counts: table
                    .senders()
                    .iter()
                    .map(String::as_str)
                    .zip(row.iter().copied())
                    .collect(),
            })
            .collect();

        Self {
            senders: table.senders(),
            rows,
        }
    }
}

/// Writes a count table to a JSON file.
///
/// # Format
/// ```json
/// {
///   "senders": ["Alice", "Bob"],
///   "rows": [
///     {"date": "2021-02-01", "counts": {"Alice": 1, "Bob": 0}}
///   ]
/// }
/// ```
pub fn write_json(table: &CountTable, output_path: impl AsRef<Path>) -> Result<(), ChatraceError> {
    let json = to_json(table)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a count table to a pretty-printed JSON string.
///
/// Same format as [`write_json`]. `senders` keeps table order; the
/// per-row `counts` objects are keyed alphabetically.
pub fn to_json(table: &CountTable) -> Result<String, ChatraceError> {
    Ok(serde_json::to_string_pretty(&JsonTable::from_table(table))?)
}
