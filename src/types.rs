use crate::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row extracted from the source table: bank name and market
/// capitalization in billions of USD. No identity beyond row position;
/// duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct BankRecord {
    pub name: String,
    pub mc_usd_billion: f64,
}

/// A bank record with the three derived currency columns. Field order is
/// the output column order; serde renames give the exact CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBankRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,
    #[serde(rename = "MC_GBP_Billion")]
    pub mc_gbp_billion: f64,
    #[serde(rename = "MC_EUR_Billion")]
    pub mc_eur_billion: f64,
    #[serde(rename = "MC_INR_Billion")]
    pub mc_inr_billion: f64,
}

/// Currency code -> multiplier against USD, loaded wholesale from the rate
/// CSV. Read-only reference data for the duration of one run.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRates {
    rates: HashMap<String, f64>,
}

impl ExchangeRates {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self { rates: pairs.into_iter().collect() }
    }

    /// Rate for a currency code, or a missing-rate error. A required code
    /// absent from the source must fail the run rather than yield NaN.
    pub fn get(&self, currency: &str) -> Result<f64> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| EtlError::MissingRate(currency.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
