//! CSV headers and field formatting for the converter output.

/// Header written by `create-blocks`.
pub const BLOCKS_HEADER: [&str; 10] = [
    "start_ip",
    "end_ip",
    "geoname_id",
    "registered_country_geoname_id",
    "represented_country_geoname_id",
    "is_anonymous_proxy",
    "is_satellite_provider",
    "postal_code",
    "latitude",
    "longitude",
];

/// Header written by `create-locations` for the locations table.
pub const LOCATIONS_HEADER: &str = "geoname_id,locale_code,continent_code,continent_name,country_iso_code,country_name,subdivision_1_iso_code,subdivision_1_name,subdivision_2_iso_code,subdivision_2_name,city_name,metro_code,time_zone";

/// Header of the trailing timezone lookup table.
pub const TIMEZONE_HEADER: &str = "timezoneid,timezone";

/// Wrap a field in double quotes, doubling any quotes inside it.
pub fn quote_field(input: &str) -> String {
    let escaped = input.replace('"', "\"\"");
    format!("\"{escaped}\"")
}
