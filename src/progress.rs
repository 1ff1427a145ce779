use crate::error::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Milestone messages written after each pipeline stage. The log is the
/// coarse post-mortem trail for a failed run: entries stop at the last
/// completed stage.
pub const MSG_PRELIMINARIES: &str = "Preliminaries complete. Initiating ETL process";
pub const MSG_EXTRACTED: &str = "Data extraction complete. Initiating Transformation process";
pub const MSG_TRANSFORMED: &str = "Data transformation complete. Initiating Loading process";
pub const MSG_CSV_SAVED: &str = "Data saved to CSV file.";
pub const MSG_DB_SAVED: &str = "Data saved to SQL database.";
pub const MSG_CONNECTION_CLOSED: &str = "SQL connection closed.";

/// Append-only run log, one `YYYY-MM-DD-HH:MM:SS : <message>` line per
/// milestone. Failure to write is fatal to the run; there is no fallback.
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn record(&self, message: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d-%H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} : {}", timestamp, message)?;
        Ok(())
    }
}
