//! Client for the exchangerate.host `latest` endpoint.
//!
//! The response is an object whose `rates` field maps currency codes to the
//! price of one unit of the base currency. A payload without `rates` is an error.

use crate::error::FetchError;
use crate::http::{HttpSource, JsonSource};
use crate::models::{ExchangeRateRow, coerce_number};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host";
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

#[derive(Debug, Clone)]
pub struct RatesClient<S = HttpSource> {
    pub base_url: String,
    source: S,
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::with_source(DEFAULT_BASE_URL, HttpSource::default())
    }
}

impl<S: JsonSource> RatesClient<S> {
    pub fn with_source(base_url: impl Into<String>, source: S) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source,
        }
    }

    /// Latest rates against `base`, ordered by currency code.
    pub fn latest(&self, base: &str) -> Result<Vec<ExchangeRateRow>, FetchError> {
        let url = format!("{}/latest", self.base_url);
        let v = self
            .source
            .get_json(&url, &[("base", base.trim().to_ascii_uppercase())])?;
        parse_rates(&v)
    }
}

/// Reshape a `latest` payload into rows; non-numeric rates are dropped.
pub fn parse_rates(v: &Value) -> Result<Vec<ExchangeRateRow>, FetchError> {
    let rates = v
        .get("rates")
        .and_then(Value::as_object)
        .ok_or(FetchError::MissingRates)?;
    let mut rows: Vec<ExchangeRateRow> = rates
        .iter()
        .filter_map(|(currency, rate)| {
            Some(ExchangeRateRow {
                currency: currency.clone(),
                rate: coerce_number(rate)?,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.currency.cmp(&b.currency));
    Ok(rows)
}
