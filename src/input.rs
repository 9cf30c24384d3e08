//! CSV input handling.

use csv::{Reader, ReaderBuilder, StringRecord};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Build a strict CSV reader over `input`.
///
/// The first row is treated as a header and skipped by `records()`. Rows whose
/// field count differs from the header are reported as errors.
pub fn csv_reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input)
}

/// Open an input file.
///
/// # Returns
/// * `Ok(File)` - the opened file
/// * `Err` - if the file does not exist or cannot be opened
pub fn open_input(path: &Path) -> Result<File, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("Error opening input file {}: {e}", path.display()))?;
    log::info!("Reading from input file: {}", path.display());
    Ok(file)
}

/// Get field `idx` of a record, failing if the row is too short.
pub fn field(record: &StringRecord, idx: usize, line: u64) -> Result<&str, Box<dyn Error>> {
    record.get(idx).ok_or_else(|| {
        format!(
            "line {line}: missing column {idx}, row has only {} fields",
            record.len()
        )
        .into()
    })
}

/// Line number of a record for error messages, 0 if unknown.
pub fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
