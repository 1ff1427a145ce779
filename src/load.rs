use crate::error::Result;
use crate::types::EnrichedBankRecord;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::info;

/// Writes the enriched table to a CSV file, header included, overwriting
/// any existing file.
pub fn load_to_csv<P: AsRef<Path>>(records: &[EnrichedBankRecord], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", records.len(), path.as_ref().display());
    Ok(())
}

/// Writes the enriched table into the named SQLite table, replacing any
/// prior contents. Schema and inserts run in a single transaction so a
/// failed load never leaves a half-replaced table. Returns the row count.
pub fn load_to_db(
    conn: &mut Connection,
    table_name: &str,
    records: &[EnrichedBankRecord],
) -> Result<usize> {
    let tx = conn.transaction()?;

    tx.execute_batch(&format!(
        r#"
        DROP TABLE IF EXISTS {table};
        CREATE TABLE {table} (
            Name            TEXT NOT NULL,
            MC_USD_Billion  REAL NOT NULL,
            MC_GBP_Billion  REAL NOT NULL,
            MC_EUR_Billion  REAL NOT NULL,
            MC_INR_Billion  REAL NOT NULL
        );
        "#,
        table = table_name
    ))?;

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {} (Name, MC_USD_Billion, MC_GBP_Billion, MC_EUR_Billion, MC_INR_Billion)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            table_name
        ))?;
        for record in records {
            stmt.execute(params![
                record.name,
                record.mc_usd_billion,
                record.mc_gbp_billion,
                record.mc_eur_billion,
                record.mc_inr_billion,
            ])?;
        }
    }

    tx.commit()?;
    info!("Loaded {} rows into table '{}'", records.len(), table_name);
    Ok(records.len())
}
