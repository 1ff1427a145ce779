use crate::config::Config;
use crate::error::Result;
use crate::extract::extract;
use crate::load::{load_to_csv, load_to_db};
use crate::progress::{self, ProgressLog};
use crate::report::run_reports;
use crate::transform::transform;
use crate::types::ExchangeRates;
use rusqlite::Connection;
use std::path::PathBuf;
use tracing::info;

/// Counts and artifact paths from a completed run, for the CLI summary.
#[derive(Debug)]
pub struct PipelineResult {
    pub banks_extracted: usize,
    pub rows_loaded: usize,
    pub output_csv: PathBuf,
    pub db_path: PathBuf,
}

/// Runs the full pipeline: extract, transform, load to CSV and SQLite,
/// report. One milestone line is appended to the progress log after each
/// stage; any stage error aborts the run immediately, so the log shows how
/// far a failed run got.
pub fn run(config: &Config) -> Result<PipelineResult> {
    let log = ProgressLog::new(&config.log_path);
    let mut conn = Connection::open(&config.db_path)?;
    log.record(progress::MSG_PRELIMINARIES)?;

    let banks = extract(config)?;
    log.record(progress::MSG_EXTRACTED)?;

    let rates = ExchangeRates::from_csv(&config.rate_csv_path)?;
    let enriched = transform(&banks, &rates)?;
    log.record(progress::MSG_TRANSFORMED)?;

    load_to_csv(&enriched, &config.output_csv_path)?;
    log.record(progress::MSG_CSV_SAVED)?;

    let rows_loaded = load_to_db(&mut conn, &config.table_name, &enriched)?;
    log.record(progress::MSG_DB_SAVED)?;

    run_reports(&conn, &config.table_name)?;

    drop(conn);
    log.record(progress::MSG_CONNECTION_CLOSED)?;
    info!("Pipeline run complete");

    Ok(PipelineResult {
        banks_extracted: banks.len(),
        rows_loaded,
        output_csv: config.output_csv_path.clone(),
        db_path: config.db_path.clone(),
    })
}
