use crate::config::Config;
use crate::error::{EtlError, Result};
use crate::types::BankRecord;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, warn};

/// Fetches the source page over blocking HTTP with a bounded timeout.
pub fn fetch_page(config: &Config) -> Result<String> {
    info!(url = %config.page_url, "Fetching bank table page");
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;
    let body = client
        .get(&config.page_url)
        .send()?
        .error_for_status()?
        .text()?;
    Ok(body)
}

/// Parses the first HTML table in the document into bank records, in
/// document order. Rows with fewer than three cells are skipped; a
/// malformed market-cap cell or a page with no table fails the run.
pub fn parse_banks(html: &str) -> Result<Vec<BankRecord>> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| EtlError::Parse("no table found in page".to_string()))?;

    let mut banks = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 3 {
            continue;
        }

        let name = cells[1].text().collect::<String>().trim().to_string();
        let cap_text = cells[2].text().collect::<String>();
        let cap_text = cap_text.trim().replace(',', "");
        let mc_usd_billion: f64 = cap_text.parse().map_err(|_| {
            EtlError::Parse(format!("non-numeric market cap cell '{}' for '{}'", cap_text, name))
        })?;

        banks.push(BankRecord { name, mc_usd_billion });
    }

    info!("Parsed {} bank rows from page", banks.len());
    if banks.is_empty() {
        warn!("No qualifying rows found - the page structure may have changed");
    }

    Ok(banks)
}

/// Extractor stage: fetch then parse.
pub fn extract(config: &Config) -> Result<Vec<BankRecord>> {
    let html = fetch_page(config)?;
    parse_banks(&html)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"
        <html><body>
        <table>
          <thead><tr><th>Rank</th><th>Bank name</th><th>Market cap</th></tr></thead>
          <tbody>
            <tr><td>1</td><td> JPMorgan Chase </td><td>432,922.00</td></tr>
            <tr><td colspan="3">spacer row</td></tr>
            <tr><td>2</td><td>Bank of America</td><td>231.52</td></tr>
            <tr><td>3</td><td>ICBC</td><td>194.56</td></tr>
          </tbody>
        </table>
        <table><tbody><tr><td>x</td><td>second table</td><td>999</td></tr></tbody></table>
        </body></html>"#;

    #[test]
    fn parses_first_table_in_document_order() {
        let banks = parse_banks(SAMPLE_PAGE).unwrap();
        assert_eq!(banks.len(), 3);
        assert_eq!(banks[0].name, "JPMorgan Chase");
        assert_eq!(banks[0].mc_usd_billion, 432922.0);
        assert_eq!(banks[1].name, "Bank of America");
        assert_eq!(banks[2].name, "ICBC");
    }

    #[test]
    fn skips_rows_with_fewer_than_three_cells() {
        let html = r#"<table><tbody>
            <tr><td>1</td><td>Short Row</td></tr>
            <tr><td>2</td><td>Full Row</td><td>100.5</td></tr>
        </tbody></table>"#;
        let banks = parse_banks(html).unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].name, "Full Row");
    }

    #[test]
    fn strips_thousands_separators() {
        let html = r#"<table><tbody>
            <tr><td>1</td><td>Big Bank</td><td>1,234,567.89</td></tr>
        </tbody></table>"#;
        let banks = parse_banks(html).unwrap();
        assert_eq!(banks[0].mc_usd_billion, 1234567.89);
    }

    #[test]
    fn fails_on_missing_table() {
        let err = parse_banks("<html><body><p>no tables here</p></body></html>").unwrap_err();
        assert!(matches!(err, EtlError::Parse(_)));
    }

    #[test]
    fn fails_on_non_numeric_market_cap() {
        let html = r#"<table><tbody>
            <tr><td>1</td><td>Odd Bank</td><td>n/a</td></tr>
        </tbody></table>"#;
        let err = parse_banks(html).unwrap_err();
        assert!(matches!(err, EtlError::Parse(_)));
    }
}
