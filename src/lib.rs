//! Converters that prepare MaxMind GeoIP CSV exports for database bulk import.
//!
//! - [`create_blocks`] turns `a.b.c.d/n` networks into integer start/end ranges
//! - [`create_locations`] replaces timezone names with ids and appends the
//!   id lookup table
//!
//! Both read from any [`std::io::Read`] and write to any [`std::io::Write`];
//! the binaries wire them to a file and stdout.

pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

pub use processing::{create_blocks, create_locations, ConvertSummary};

/// Run the blocks conversion on the file at `path`.
pub fn blocks_file<W: Write>(path: &Path, output: W) -> Result<ConvertSummary, Box<dyn Error>> {
    let file = input::open_input(path)?;
    create_blocks(file, output)
}

/// Run the locations conversion on the file at `path`.
pub fn locations_file<W: Write>(
    path: &Path,
    output: W,
) -> Result<ConvertSummary, Box<dyn Error>> {
    let file = input::open_input(path)?;
    create_locations(file, output)
}

/// Run the blocks conversion on `path`, writing to stdout.
pub fn run_blocks(path: &Path) -> Result<ConvertSummary, Box<dyn Error>> {
    blocks_file(path, io::stdout().lock())
}

/// Run the locations conversion on `path`, writing to stdout.
pub fn run_locations(path: &Path) -> Result<ConvertSummary, Box<dyn Error>> {
    locations_file(path, io::stdout().lock())
}

/// Process exit status for a finished run.
///
/// A CSV read error ends the run early but still exits 0. Only failures that
/// stop the run outright (unopenable input, short row, write error) give 1.
pub fn exit_code(result: &Result<ConvertSummary, Box<dyn Error>>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
