//! Synchronous client for the **World Bank Indicators API (v2)**.
//!
//! Three endpoints are used, each with a single request (no pagination; the
//! page size is capped instead):
//! - `country/{iso3}/indicator/{id}` for one country's time series,
//! - `country/all/indicator/{id}` for every economy in one year,
//! - `country` for the list of economy names.
//!
//! ### Notes
//! - Successful responses are a two-element array `[meta, [Entry, ...]]`;
//!   only the shape is checked, the paging metadata is not interpreted.
//!   The API reports errors as a one-element array holding a `message` object;
//!   that and every other shape is surfaced as a [`FetchError`].
//! - Records that do not decode, or whose value/date is unusable, are dropped.
//!
//! Typical usage:
//! ```no_run
//! # use macro_copilot::api::Client;
//! # use macro_copilot::DateSpec;
//! let client = Client::default();
//! let rows = client.time_series("DEU", "SP.POP.TOTL", DateSpec::Range { start: 2010, end: 2020 })?;
//! # Ok::<(), macro_copilot::FetchError>(())
//! ```
use crate::error::FetchError;
use crate::http::{HttpSource, JsonSource};
use crate::models::{CountryRecord, DateSpec, Entry, GeoRow, ObservationRow};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Page-size cap for single-country time series.
pub const TIME_SERIES_PER_PAGE: u32 = 1000;
/// Page-size cap for the all-countries query.
pub const CROSS_COUNTRY_PER_PAGE: u32 = 300;
/// Page-size cap for the economy list.
pub const COUNTRY_LIST_PER_PAGE: u32 = 300;

#[derive(Debug, Clone)]
pub struct Client<S = HttpSource> {
    pub base_url: String,
    source: S,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_source(DEFAULT_BASE_URL, HttpSource::default())
    }
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

impl<S: JsonSource> Client<S> {
    pub fn with_source(base_url: impl Into<String>, source: S) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source,
        }
    }

    /// Observations of one indicator for one country, sorted ascending by date.
    pub fn time_series(
        &self,
        country_iso3: &str,
        indicator_code: &str,
        date: DateSpec,
    ) -> Result<Vec<ObservationRow>, FetchError> {
        let url = format!(
            "{}/country/{}/indicator/{}",
            self.base_url,
            enc(country_iso3),
            enc(indicator_code)
        );
        let v = self.source.get_json(
            &url,
            &[
                ("date", date.to_query_param()),
                ("format", "json".into()),
                ("per_page", TIME_SERIES_PER_PAGE.to_string()),
            ],
        )?;
        parse_time_series(&v)
    }

    /// One indicator for every economy in `year`.
    pub fn cross_country(&self, indicator_code: &str, year: i32) -> Result<Vec<GeoRow>, FetchError> {
        let url = format!(
            "{}/country/all/indicator/{}",
            self.base_url,
            enc(indicator_code)
        );
        let v = self.source.get_json(
            &url,
            &[
                ("date", DateSpec::Year(year).to_query_param()),
                ("format", "json".into()),
                ("per_page", CROSS_COUNTRY_PER_PAGE.to_string()),
            ],
        )?;
        parse_cross_country(&v)
    }

    /// The economies known to the API (countries and aggregates).
    pub fn countries(&self) -> Result<Vec<CountryRecord>, FetchError> {
        let url = format!("{}/country", self.base_url);
        let v = self.source.get_json(
            &url,
            &[
                ("format", "json".into()),
                ("per_page", COUNTRY_LIST_PER_PAGE.to_string()),
            ],
        )?;
        parse_countries(&v)
    }
}

/// Validate the `[meta, records]` envelope and return the records.
pub fn records(v: &Value) -> Result<&[Value], FetchError> {
    // The API returns an array: [meta, [Entry, ...]] or a "message" object in position 0 on error.
    let arr = v
        .as_array()
        .ok_or_else(|| FetchError::UnexpectedShape("not a top-level array".into()))?;
    if let Some(msg) = arr.first().and_then(|m| m.get("message")) {
        return Err(FetchError::Api(msg.to_string()));
    }
    if arr.len() != 2 {
        return Err(FetchError::UnexpectedShape(format!(
            "expected 2 elements, got {}",
            arr.len()
        )));
    }
    match &arr[1] {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Null => Err(FetchError::NoRecords),
        other => Err(FetchError::UnexpectedShape(format!(
            "records are not an array: {}",
            other
        ))),
    }
}

fn decode_each<T: DeserializeOwned>(items: &[Value]) -> impl Iterator<Item = T> {
    items
        .iter()
        .filter_map(|item| serde_json::from_value::<T>(item.clone()).ok())
}

/// Reshape a time-series payload into dated rows, sorted ascending.
pub fn parse_time_series(v: &Value) -> Result<Vec<ObservationRow>, FetchError> {
    let mut rows: Vec<ObservationRow> = decode_each::<Entry>(records(v)?)
        .filter_map(|e| e.to_observation())
        .collect();
    rows.sort_by_key(|r| r.date);
    Ok(rows)
}

/// Reshape an all-countries payload into per-country rows (API order).
pub fn parse_cross_country(v: &Value) -> Result<Vec<GeoRow>, FetchError> {
    Ok(decode_each::<Entry>(records(v)?)
        .filter_map(|e| e.to_geo())
        .collect())
}

/// Decode the economy list, skipping unnamed records.
pub fn parse_countries(v: &Value) -> Result<Vec<CountryRecord>, FetchError> {
    Ok(decode_each::<CountryRecord>(records(v)?)
        .filter(|c| !c.name.trim().is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta() -> Value {
        json!({"page": 1, "pages": 1, "per_page": "1000", "total": 4})
    }

    #[test]
    fn keeps_valid_rows_sorted_by_date() {
        let v = json!([
            meta(),
            [
                {"date": "2021", "value": 3.0},
                {"date": "2019", "value": 1.0},
                {"date": "2022", "value": "n/a"},
                {"date": "2020", "value": 2.0}
            ]
        ]);
        let rows = parse_time_series(&v).unwrap();
        let years: Vec<String> = rows.iter().map(|r| r.date.format("%Y").to_string()).collect();
        assert_eq!(years, ["2019", "2020", "2021"]);
        assert_eq!(rows.iter().map(|r| r.value).collect::<Vec<_>>(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn api_message_is_an_error() {
        let v = json!([{"message": [{"id": "120", "key": "Invalid value", "value": "The provided parameter value is not valid"}]}]);
        assert!(matches!(records(&v), Err(FetchError::Api(_))));
    }

    #[test]
    fn wrong_shapes_are_errors() {
        assert!(matches!(records(&json!({"a": 1})), Err(FetchError::UnexpectedShape(_))));
        assert!(matches!(records(&json!([meta()])), Err(FetchError::UnexpectedShape(_))));
        assert!(matches!(records(&json!([meta(), [], []])), Err(FetchError::UnexpectedShape(_))));
        assert!(matches!(records(&json!([meta(), null])), Err(FetchError::NoRecords)));
    }

    #[test]
    fn sparse_metadata_is_accepted() {
        let v = json!([
            {"page": 1},
            [
                {"date": "2021", "value": 3.0},
                {"date": "2019", "value": 1.0},
                {"date": "2022", "value": "x"},
                {"date": "2020", "value": 2.0}
            ]
        ]);
        let rows = parse_time_series(&v).unwrap();
        assert_eq!(rows.iter().map(|r| r.value).collect::<Vec<_>>(), [1.0, 2.0, 3.0]);
        assert_eq!(records(&json!([{}, []])).unwrap().len(), 0);
    }

    #[test]
    fn cross_country_projects_code_name_value() {
        let v = json!([
            meta(),
            [
                {"countryiso3code": "DEU", "country": {"id": "DE", "value": "Germany"}, "date": "2020", "value": 1.5},
                {"countryiso3code": "FRA", "country": {"id": "FR", "value": "France"}, "date": "2020", "value": null},
                {"countryiso3code": "USA", "country": {"id": "US", "value": "United States"}, "date": "2020", "value": 2}
            ]
        ]);
        let rows = parse_cross_country(&v).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country_code, "DEU");
        assert_eq!(rows[0].country_name, "Germany");
        assert_eq!(rows[1].value, 2.0);
    }

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(enc("NY.GDP.MKTP.CD"), "NY.GDP.MKTP.CD");
        assert_eq!(enc(" DEU "), "DEU");
        assert_eq!(enc("a/b"), "a%2Fb");
    }
}
