//! CSV conversion logic.
//!
//! - [`blocks`] - CIDR network column to integer start/end range
//! - [`locations`] - timezone names to ids plus the lookup table

mod blocks;
mod locations;

// Re-export public functions
pub use blocks::{blocks_row, create_blocks};
pub use locations::{create_locations, locations_row, write_timezone_table};

/// Counters reported at the end of a conversion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Data rows written, header excluded.
    pub rows: usize,
    /// Distinct timezones interned (locations only).
    pub timezones: usize,
    /// CSV read error that stopped the run early, already logged.
    pub read_error: Option<String>,
}
