//! MaxMind GeoIP locations -> locations with timezone ids plus a timezone table.
//!
//! Both tables are written to stdout, separated by a blank line.

use clap::Parser;
use geoip_csv_prep::logging::init_logging;
use geoip_csv_prep::{exit_code, run_locations};
use std::path::PathBuf;
use std::process::ExitCode;

/// Replace timezone names in a GeoIP locations CSV with ids.
#[derive(Parser, Debug)]
#[command(name = "create-locations")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GeoLite2 locations CSV
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    init_logging().expect("Error initializing log4rs");
    log::info!("#Start main() file={}", args.file.display());

    let result = run_locations(&args.file);
    match &result {
        Ok(summary) => log::info!(
            "#End main() rows={} timezones={}",
            summary.rows,
            summary.timezones
        ),
        Err(e) => log::error!("{e}"),
    }
    ExitCode::from(exit_code(&result))
}
