//! Domain models for the GeoIP CSV converters.
//!
//! - [`IpRange`] - integer bounds of an IPv4 CIDR block
//! - [`TimezoneRegistry`] - timezone name to id interning

mod ip_range;
mod timezone;

// Re-export public types
pub use ip_range::{get_cidr_mask, ip_range, ip_to_u32, IpRange, MAX_LENGTH};
pub use timezone::{is_known_zone, TimezoneRegistry, FIRST_TIMEZONE_ID};
