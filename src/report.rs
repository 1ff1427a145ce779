use crate::error::Result;
use crate::types::EnrichedBankRecord;
use rusqlite::Connection;
use tracing::info;

/// `SELECT * FROM <table>` in the store's natural row order.
pub fn full_table(conn: &Connection, table_name: &str) -> Result<Vec<EnrichedBankRecord>> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM {}", table_name))?;
    let rows = stmt.query_map([], |row| {
        Ok(EnrichedBankRecord {
            name: row.get(0)?,
            mc_usd_billion: row.get(1)?,
            mc_gbp_billion: row.get(2)?,
            mc_eur_billion: row.get(3)?,
            mc_inr_billion: row.get(4)?,
        })
    })?;
    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}

/// `SELECT AVG(MC_GBP_Billion) FROM <table>`.
pub fn average_gbp(conn: &Connection, table_name: &str) -> Result<f64> {
    let avg = conn.query_row(
        &format!("SELECT AVG(MC_GBP_Billion) FROM {}", table_name),
        [],
        |row| row.get(0),
    )?;
    Ok(avg)
}

/// `SELECT Name FROM <table> LIMIT <limit>`, natural insertion order.
pub fn top_names(conn: &Connection, table_name: &str, limit: usize) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("SELECT Name FROM {} LIMIT {}", table_name, limit))?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    let mut names = Vec::new();
    for row in rows {
        names.push(row?);
    }
    Ok(names)
}

/// Reporter stage: run the three fixed queries and print each result set.
pub fn run_reports(conn: &Connection, table_name: &str) -> Result<()> {
    info!("Running report queries against '{}'", table_name);

    println!("\nSELECT * FROM {}", table_name);
    println!("{:<40} {:>14} {:>14} {:>14} {:>14}",
        "Name", "MC_USD_Billion", "MC_GBP_Billion", "MC_EUR_Billion", "MC_INR_Billion");
    for record in full_table(conn, table_name)? {
        println!("{:<40} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            record.name,
            record.mc_usd_billion,
            record.mc_gbp_billion,
            record.mc_eur_billion,
            record.mc_inr_billion);
    }

    println!("\nSELECT AVG(MC_GBP_Billion) FROM {}", table_name);
    println!("{:.2}", average_gbp(conn, table_name)?);

    println!("\nSELECT Name FROM {} LIMIT 5", table_name);
    for name in top_names(conn, table_name, 5)? {
        println!("{}", name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_to_db;

    fn loaded_connection() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        let records: Vec<EnrichedBankRecord> = [10.0, 20.0, 30.0, 40.0, 50.0]
            .iter()
            .enumerate()
            .map(|(i, gbp)| EnrichedBankRecord {
                name: format!("Bank {}", i + 1),
                mc_usd_billion: gbp / 0.8,
                mc_gbp_billion: *gbp,
                mc_eur_billion: gbp * 1.1,
                mc_inr_billion: gbp * 100.0,
            })
            .collect();
        load_to_db(&mut conn, "Largest_banks", &records).unwrap();
        conn
    }

    #[test]
    fn average_gbp_over_loaded_rows() {
        let conn = loaded_connection();
        let avg = average_gbp(&conn, "Largest_banks").unwrap();
        assert_eq!(avg, 30.0);
    }

    #[test]
    fn top_names_in_insertion_order() {
        let conn = loaded_connection();
        let names = top_names(&conn, "Largest_banks", 5).unwrap();
        assert_eq!(names, vec!["Bank 1", "Bank 2", "Bank 3", "Bank 4", "Bank 5"]);
    }

    #[test]
    fn full_table_preserves_columns_and_order() {
        let conn = loaded_connection();
        let records = full_table(&conn, "Largest_banks").unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].name, "Bank 1");
        assert_eq!(records[0].mc_gbp_billion, 10.0);
        assert_eq!(records[4].mc_gbp_billion, 50.0);
    }
}
