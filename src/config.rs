//! Compile-time settings shared by both converters.

/// log4rs config read from the working directory, if present.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Columns a blocks row must have: network plus 8 pass-through fields.
pub const BLOCKS_MIN_COLUMNS: usize = 9;

/// Columns a locations row must have.
pub const LOCATIONS_MIN_COLUMNS: usize = 13;

/// Index of the metro code column, written unquoted.
pub const METRO_CODE_COLUMN: usize = 11;

/// Index of the `time_zone` column in the locations file.
pub const TIMEZONE_COLUMN: usize = 12;
