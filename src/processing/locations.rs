//! Locations CSV with timezone names replaced by ids.
//!
//! Reads a MaxMind `GeoLite2-City-Locations-*.csv`, swaps the `time_zone`
//! column for an integer id and appends the id lookup table after a blank
//! line. The two sections are meant for these tables:
//!
//! ```sql
//! CREATE TABLE `locations` (
//!   `geoname_id`              INT(10)       UNSIGNED NOT NULL DEFAULT '0',
//!   `locale_code`             VARCHAR(2)             NOT NULL DEFAULT '',
//!   `continent_code`          VARCHAR(2)             NOT NULL DEFAULT '',
//!   `continent_name`          VARCHAR(40)            NOT NULL DEFAULT '',
//!   `country_iso_code`        VARCHAR(2)             NOT NULL DEFAULT '',
//!   `country_name`            VARCHAR(64)            NOT NULL DEFAULT '',
//!   `subdivision_1_iso_code`  VARCHAR(3)             NOT NULL DEFAULT '',
//!   `subdivision_1_name`      VARCHAR(100)           NOT NULL DEFAULT '',
//!   `subdivision_2_iso_code`  VARCHAR(3)             NOT NULL DEFAULT '',
//!   `subdivision_2_name`      VARCHAR(100)           NOT NULL DEFAULT '',
//!   `city_name`               VARCHAR(100)           NOT NULL DEFAULT '',
//!   `metro_code`              SMALLINT(5)   UNSIGNED DEFAULT NULL,
//!   `timezoneid`              SMALLINT(3)   UNSIGNED NOT NULL DEFAULT '0',
//!   PRIMARY KEY (`geoname_id`)
//! ) ENGINE=InnoDB DEFAULT CHARSET=utf8;
//!
//! CREATE TABLE `timezone` (
//!   `timezoneid`  SMALLINT(3)  UNSIGNED NOT NULL AUTO_INCREMENT,
//!   `timezone`    VARCHAR(40)           NOT NULL DEFAULT '',
//!   PRIMARY KEY (`timezoneid`)
//! ) ENGINE=InnoDB DEFAULT CHARSET=utf8;
//! ```
//!
//! Timezone id 0 is left for UTC and never written to the table.

use super::ConvertSummary;
use crate::config::{LOCATIONS_MIN_COLUMNS, METRO_CODE_COLUMN, TIMEZONE_COLUMN};
use crate::input::{csv_reader, field, line_of};
use crate::models::TimezoneRegistry;
use crate::output::{quote_field, LOCATIONS_HEADER, TIMEZONE_HEADER};
use csv::StringRecord;
use std::error::Error;
use std::io::{BufWriter, Read, Write};

/// Format one locations row, interning its timezone in `registry`.
pub fn locations_row(
    record: &StringRecord,
    registry: &mut TimezoneRegistry,
) -> Result<String, Box<dyn Error>> {
    let line = line_of(record);
    let tz_id = registry.intern(field(record, TIMEZONE_COLUMN, line)?);

    let mut cols: Vec<String> = Vec::with_capacity(LOCATIONS_MIN_COLUMNS);
    cols.push(field(record, 0, line)?.to_string());
    for idx in 1..METRO_CODE_COLUMN {
        cols.push(quote_field(field(record, idx, line)?));
    }
    cols.push(field(record, METRO_CODE_COLUMN, line)?.to_string());
    cols.push(tz_id.to_string());
    Ok(cols.join(","))
}

/// Write the `timezoneid,timezone` table, preceded by a blank line.
pub fn write_timezone_table<W: Write>(
    out: &mut W,
    registry: &TimezoneRegistry,
) -> Result<(), Box<dyn Error>> {
    writeln!(out)?;
    writeln!(out, "{TIMEZONE_HEADER}")?;
    for (id, name) in registry.entries() {
        writeln!(out, "{id},{}", quote_field(name))?;
    }
    Ok(())
}

/// Convert a locations CSV from `input` into `output`.
///
/// # Returns
/// * `Ok(ConvertSummary)` - rows written and distinct timezones. A CSV syntax
///   error is logged and stops the run early, recorded in `read_error`; the
///   timezone table is not written then.
/// * `Err` - on a short row or a write failure
pub fn create_locations<R: Read, W: Write>(
    input: R,
    output: W,
) -> Result<ConvertSummary, Box<dyn Error>> {
    log::info!("#Start create_locations()");
    let mut reader = csv_reader(input);
    let mut out = BufWriter::new(output);
    writeln!(out, "{LOCATIONS_HEADER}")?;

    let mut registry = TimezoneRegistry::new();
    let mut summary = ConvertSummary::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::error!("Error reading locations CSV: {e}");
                summary.read_error = Some(e.to_string());
                break;
            }
        };
        let row = locations_row(&record, &mut registry)?;
        writeln!(out, "{row}")?;
        summary.rows += 1;
    }

    if summary.read_error.is_none() {
        write_timezone_table(&mut out, &registry)?;
    }
    out.flush()?;

    summary.timezones = registry.len();
    log::info!(
        "# Wrote {} location rows, {} timezones",
        summary.rows,
        summary.timezones
    );
    Ok(summary)
}
