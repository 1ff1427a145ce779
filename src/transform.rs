use crate::error::Result;
use crate::types::{BankRecord, EnrichedBankRecord, ExchangeRates};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

impl ExchangeRates {
    /// Loads the rate table wholesale from a CSV with columns (Currency, Rate).
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut pairs = Vec::new();
        for row in reader.deserialize() {
            let row: RateRow = row?;
            pairs.push((row.currency, row.rate));
        }
        info!("Loaded {} exchange rates from {}", pairs.len(), path.as_ref().display());
        Ok(Self::from_pairs(pairs))
    }
}

/// Rounds to 2 decimal places, ties away from zero (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Transformer stage: derive the GBP/EUR/INR columns for every record.
/// Row count and order are preserved exactly. All three required rates are
/// resolved up front so a missing currency fails before any row is built.
pub fn transform(banks: &[BankRecord], rates: &ExchangeRates) -> Result<Vec<EnrichedBankRecord>> {
    let gbp = rates.get("GBP")?;
    let eur = rates.get("EUR")?;
    let inr = rates.get("INR")?;

    let enriched = banks
        .iter()
        .map(|bank| EnrichedBankRecord {
            name: bank.name.clone(),
            mc_usd_billion: bank.mc_usd_billion,
            mc_gbp_billion: round2(bank.mc_usd_billion * gbp),
            mc_eur_billion: round2(bank.mc_usd_billion * eur),
            mc_inr_billion: round2(bank.mc_usd_billion * inr),
        })
        .collect();

    Ok(enriched)
}
