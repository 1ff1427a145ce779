use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Run configuration for the pipeline. Every stage takes this explicitly;
/// there is no module-level state. Defaults reproduce the canonical run
/// against the archived Wikipedia page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page to scrape for the ranked bank table.
    pub page_url: String,
    /// Local CSV with columns (Currency, Rate), rates quoted against USD.
    pub rate_csv_path: PathBuf,
    /// Destination for the enriched CSV. Overwritten each run.
    pub output_csv_path: PathBuf,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Table written by the loader and read by the reporter.
    pub table_name: String,
    /// Append-only milestone log.
    pub log_path: PathBuf,
    /// Bound on the page fetch.
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_url: "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks".to_string(),
            rate_csv_path: PathBuf::from("exchange_rate.csv"),
            output_csv_path: PathBuf::from("Largest_banks_data.csv"),
            db_path: PathBuf::from("Banks.db"),
            table_name: "Largest_banks".to_string(),
            log_path: PathBuf::from("code_log.txt"),
            http_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file. Missing keys fall back to the
    /// defaults above.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EtlError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config file when a path is given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_canonical_run() {
        let config = Config::default();
        assert_eq!(config.table_name, "Largest_banks");
        assert_eq!(config.output_csv_path, PathBuf::from("Largest_banks_data.csv"));
        assert_eq!(config.log_path, PathBuf::from("code_log.txt"));
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path)?;
        writeln!(f, "db_path = \"/tmp/test_banks.db\"")?;
        writeln!(f, "http_timeout_secs = 5")?;

        let config = Config::load(&path)?;
        assert_eq!(config.db_path, PathBuf::from("/tmp/test_banks.db"));
        assert_eq!(config.http_timeout_secs, 5);
        // untouched keys keep their defaults
        assert_eq!(config.table_name, "Largest_banks");
        Ok(())
    }
}
