//! banco-report: one-shot analytics run against the hosted record store.
//!
//! Usage:
//!   BANK_STORE_URL=https://... BANK_STORE_KEY=... banco-report
//!
//! Prints the report to stdout and writes the export CSVs under ./exports.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use banco_core::{config::StoreConfig, pipeline, store::RestStore};

/// Export files land here, relative to the working directory.
const EXPORT_DIR: &str = "exports";

fn main() -> Result<()> {
    env_logger::init();

    let config = StoreConfig::from_env()?;
    let store = RestStore::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Run started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;

    pipeline::run(&store, Path::new(EXPORT_DIR), &mut out)?;

    log::info!("Run finished");
    Ok(())
}
