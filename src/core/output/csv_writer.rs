//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::table::CountTable;
use crate::error::ChatraceError;

/// Writes a count table to CSV.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `date`, then one column per sender in table order
/// - One row per day, dates as `YYYY-MM-DD`
/// - Encoding: UTF-8
pub fn write_csv(table: &CountTable, output_path: impl AsRef<Path>) -> Result<(), ChatraceError> {
    let file = File::create(output_path)?;
    write_records(table, file)
}

/// Converts a count table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(table: &CountTable) -> Result<String, ChatraceError> {
    let mut buffer = Vec::new();
    write_records(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(table: &CountTable, sink: W) -> Result<(), ChatraceError> {
    let mut writer = csv::WriterBuilder::new().from_writer(sink);

    let mut header = Vec::with_capacity(table.senders().len() + 1);
    header.push("date");
    header.extend(table.senders().iter().map(String::as_str));
    writer.write_record(&header)?;

    for (date, row) in table.rows() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(date.format("%Y-%m-%d").to_string());
        record.extend(row.iter().map(u64::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
