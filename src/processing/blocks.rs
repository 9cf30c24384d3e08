//! CIDR blocks to integer start/end ranges.
//!
//! Reads a MaxMind `GeoLite2-City-Blocks-IPv4.csv` and writes the same rows
//! with the `network` column replaced by `start_ip,end_ip`. The output loads
//! straight into:
//!
//! ```sql
//! CREATE TABLE `blocks` (
//!   `start_ip`                       INT(10)       UNSIGNED NOT NULL,
//!   `end_ip`                         INT(10)       UNSIGNED NOT NULL,
//!   `geoname_id`                     INT(10)       UNSIGNED          DEFAULT NULL,
//!   `registered_country_geoname_id`  INT(10)       UNSIGNED          DEFAULT NULL,
//!   `represented_country_geoname_id` INT(10)       UNSIGNED          DEFAULT NULL,
//!   `is_anonymous_proxy`             TINYINT(1)    UNSIGNED NOT NULL DEFAULT '0',
//!   `is_satellite_provider`          TINYINT(1)    UNSIGNED NOT NULL DEFAULT '0',
//!   `postal_code`                    VARCHAR(20)            NOT NULL DEFAULT '',
//!   `latitude`                       DECIMAL(18,9)                   DEFAULT NULL,
//!   `longitude`                      DECIMAL(18,9)                   DEFAULT NULL,
//!   PRIMARY KEY (`start_ip`,`end_ip`)
//! ) ENGINE=InnoDB DEFAULT CHARSET=utf8;
//! ```

use super::ConvertSummary;
use crate::config::BLOCKS_MIN_COLUMNS;
use crate::input::{csv_reader, field, line_of};
use crate::models::{ip_range, IpRange};
use crate::output::BLOCKS_HEADER;
use csv::{StringRecord, Writer};
use std::error::Error;
use std::io::{Read, Write};

/// Build the output row for one input record.
pub fn blocks_row(record: &StringRecord) -> Result<Vec<String>, Box<dyn Error>> {
    let line = line_of(record);
    let network = field(record, 0, line)?;
    let range = ip_range(network);
    if range == IpRange::default() {
        log::debug!("line {line}: network '{network}' gave an empty range");
    } else {
        log::trace!("line {line}: {network} => {range}");
    }

    let mut row = Vec::with_capacity(BLOCKS_MIN_COLUMNS + 1);
    row.push(range.first.to_string());
    row.push(range.last.to_string());
    for idx in 1..BLOCKS_MIN_COLUMNS {
        row.push(field(record, idx, line)?.to_string());
    }
    Ok(row)
}

/// Convert a blocks CSV from `input` into `output`.
///
/// # Returns
/// * `Ok(ConvertSummary)` - rows written. A CSV syntax error is logged and
///   stops the run early, recorded in `read_error`.
/// * `Err` - on a short row or a write failure
pub fn create_blocks<R: Read, W: Write>(
    input: R,
    output: W,
) -> Result<ConvertSummary, Box<dyn Error>> {
    log::info!("#Start create_blocks()");
    let mut reader = csv_reader(input);
    let mut writer = Writer::from_writer(output);
    writer.write_record(BLOCKS_HEADER)?;

    let mut summary = ConvertSummary::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::error!("Error reading blocks CSV: {e}");
                summary.read_error = Some(e.to_string());
                break;
            }
        };
        let row = blocks_row(&record)?;
        writer.write_record(&row)?;
        summary.rows += 1;
    }

    writer.flush()?;
    log::info!("# Wrote {} block rows", summary.rows);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "network,geoname_id,registered_country_geoname_id,represented_country_geoname_id,is_anonymous_proxy,is_satellite_provider,postal_code,latitude,longitude\n";

    fn run(body: &str) -> Result<String, Box<dyn Error>> {
        let input = format!("{HEADER}{body}");
        let mut out = Vec::new();
        create_blocks(input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_create_blocks_single_row() {
        let out = run("1.2.3.0/24,100,200,,0,0,,1.0,2.0\n").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], BLOCKS_HEADER.join(","));
        assert_eq!(lines[1], "16909056,16909311,100,200,,0,0,,1.0,2.0");
    }

    #[test]
    fn test_create_blocks_header_only() {
        let out = run("").unwrap();
        assert_eq!(out, format!("{}\n", BLOCKS_HEADER.join(",")));
    }

    #[test]
    fn test_create_blocks_malformed_network_kept() {
        let out = run("1.2.3.0,5,5,,0,0,,,\n").unwrap();
        assert_eq!(out.lines().nth(1), Some("0,0,5,5,,0,0,,,"));
    }

    #[test]
    fn test_create_blocks_quoted_postal_code() {
        let out = run("10.0.0.0/8,1,2,,0,0,\"AB,1\",1.5,2.5\n").unwrap();
        assert_eq!(
            out.lines().nth(1),
            Some("167772160,184549375,1,2,,0,0,\"AB,1\",1.5,2.5")
        );
    }

    #[test]
    fn test_create_blocks_summary_count() {
        let input = format!("{HEADER}1.0.0.0/24,1,1,,0,0,,,\n1.0.1.0/24,1,1,,0,0,,,\n");
        let summary = create_blocks(input.as_bytes(), Vec::new()).unwrap();
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.timezones, 0);
    }

    #[test]
    fn test_create_blocks_unequal_row_stops_run() {
        let input = format!(
            "{HEADER}1.0.0.0/24,1,1,,0,0,,,\n1.2.3.0/24,100\n1.0.1.0/24,1,1,,0,0,,,\n"
        );
        let mut out = Vec::new();
        let summary = create_blocks(input.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.rows, 1);
        assert!(summary.read_error.is_some());

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 2, "header and the row before the error");
        assert!(out.ends_with("16777216,16777471,1,1,,0,0,,,\n"));
    }

    #[test]
    fn test_create_blocks_short_row_is_error() {
        let input = "network,a,b\n1.2.3.0/24,1,2\n";
        let err = create_blocks(input.as_bytes(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("missing column 3"));
    }

    #[test]
    fn test_blocks_row_short_record() {
        let record = StringRecord::from(vec!["1.2.3.0/24", "100", "200"]);
        let err = blocks_row(&record).unwrap_err();
        assert!(err.to_string().contains("missing column 3"));
    }
}
