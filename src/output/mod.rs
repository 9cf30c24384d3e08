//! Output formatting.
//!
//! - [`csv`] - headers and quoting for the generated CSV

mod csv;

pub use csv::{quote_field, BLOCKS_HEADER, LOCATIONS_HEADER, TIMEZONE_HEADER};
