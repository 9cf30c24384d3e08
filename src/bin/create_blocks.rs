//! MaxMind GeoIP CIDR blocks -> start and end IP.
//!
//! ```text
//! create-blocks GeoLite2-City-CSV_20151103/GeoLite2-City-Blocks-IPv4.csv > blocks.csv
//! ```

use clap::Parser;
use geoip_csv_prep::logging::init_logging;
use geoip_csv_prep::{exit_code, run_blocks};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert CIDR networks in a GeoIP blocks CSV to integer start/end ranges.
#[derive(Parser, Debug)]
#[command(name = "create-blocks")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GeoLite2 blocks CSV (IPv4)
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    init_logging().expect("Error initializing log4rs");
    log::info!("#Start main() file={}", args.file.display());

    let result = run_blocks(&args.file);
    match &result {
        Ok(summary) => log::info!("#End main() rows={}", summary.rows),
        Err(e) => log::error!("{e}"),
    }
    ExitCode::from(exit_code(&result))
}
