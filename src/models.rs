use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How to specify dates in API queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateSpec {
    /// Single year like 2020
    Year(i32),
    /// Inclusive range like 2000..=2020
    Range { start: i32, end: i32 },
}

impl DateSpec {
    pub fn to_query_param(&self) -> String {
        match *self {
            DateSpec::Year(y) => y.to_string(),
            DateSpec::Range { start, end } => format!("{}:{}", start, end),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeName {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
}

/// Raw observation from `country/{code}/indicator/{id}` (position 1 array).
///
/// `value` stays untyped: the API mostly sends numbers or `null`, but numeric
/// strings occur too and are coerced later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub indicator: CodeName,
    #[serde(default)]
    pub country: CodeName,
    #[serde(default)]
    pub countryiso3code: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub value: Value,
}

/// Raw economy record from the `country` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "iso2Code")]
    pub iso2_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: CodeName,
    #[serde(default, rename = "capitalCity")]
    pub capital_city: String,
}

/// One point of a time series for a single country.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ObservationRow {
    pub date: NaiveDate,
    pub value: f64,
}

/// One country's value for a single year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoRow {
    pub country_code: String,
    pub country_name: String,
    pub value: f64,
}

/// Rate of one currency against the base currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRateRow {
    pub currency: String,
    pub rate: f64,
}

/// Coerce a JSON value to a finite number. Numeric strings are accepted;
/// anything else (null, text, booleans, NaN/inf) yields `None`.
pub fn coerce_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Parse a World Bank period label into the first day of that period.
///
/// Accepts `YYYY`, `YYYYMmm` (monthly) and `YYYYQn` (quarterly).
pub fn parse_period(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let year_part = s.get(..4)?;
    let year: i32 = year_part.parse().ok()?;
    let rest = &s[4..];
    let month = match rest.chars().next() {
        None => 1,
        Some('M') | Some('m') => rest[1..].parse::<u32>().ok()?,
        Some('Q') | Some('q') => match rest[1..].parse::<u32>().ok()? {
            q @ 1..=4 => (q - 1) * 3 + 1,
            _ => return None,
        },
        Some(_) => return None,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

impl Entry {
    /// Project to a dated observation; `None` when the date or value is unusable.
    pub fn to_observation(&self) -> Option<ObservationRow> {
        Some(ObservationRow {
            date: parse_period(&self.date)?,
            value: coerce_number(&self.value)?,
        })
    }

    /// Project to a per-country row; `None` when the value is unusable.
    pub fn to_geo(&self) -> Option<GeoRow> {
        Some(GeoRow {
            country_code: self.countryiso3code.clone(),
            country_name: self.country.value.clone(),
            value: coerce_number(&self.value)?,
        })
    }
}
