use anyhow::Result;
use banks_etl::{config::Config, logging, pipeline, report};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "banks_etl")]
#[command(about = "Largest-banks market cap ETL pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: extract, transform, load, report
    Run {
        /// Optional TOML config overriding the default paths/URL
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Re-run the report queries against an existing database
    Report {
        /// Optional TOML config overriding the default paths/URL
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = Config::load_or_default(config.as_deref())?;
            match pipeline::run(&config) {
                Ok(result) => {
                    println!("\n📊 Pipeline results:");
                    println!("   Banks extracted: {}", result.banks_extracted);
                    println!("   Rows loaded: {}", result.rows_loaded);
                    println!("   Output file: {}", result.output_csv.display());
                    println!("   Database: {}", result.db_path.display());
                }
                Err(e) => {
                    error!("Pipeline failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Report { config } => {
            let config = Config::load_or_default(config.as_deref())?;
            let conn = rusqlite::Connection::open(&config.db_path)?;
            report::run_reports(&conn, &config.table_name)?;
        }
    }
    Ok(())
}
