//! Data fetchers used by the dashboard.
//!
//! [`DataService`] resolves user-facing names (variable, country) to API codes,
//! calls the World Bank / exchange-rate clients and memoizes successful results
//! per argument tuple. It never fails: a resolution problem or a bad upstream
//! response comes back as an empty [`Fetched`] carrying a [`Notice`].

use crate::api;
use crate::cache::Memo;
use crate::config::Settings;
use crate::countries;
use crate::error::FetchError;
use crate::http::{HttpSource, JsonSource};
use crate::indicators;
use crate::models::{DateSpec, ExchangeRateRow, GeoRow, ObservationRow};
use crate::rates::RatesClient;
use serde::Serialize;
use std::fmt;

/// Severity of a user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Error,
    Warning,
}

/// A message shown next to (or instead of) a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            Level::Error => "error",
            Level::Warning => "warning",
        };
        write!(f, "{tag}: {}", self.message)
    }
}

/// Rows of a fetch, plus the message to surface when it degraded.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub rows: Vec<T>,
    pub notice: Option<Notice>,
}

impl<T> Fetched<T> {
    pub fn ok(rows: Vec<T>) -> Self {
        Self { rows, notice: None }
    }

    pub fn failed(notice: Notice) -> Self {
        Self {
            rows: Vec::new(),
            notice: Some(notice),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

type SeriesKey = (String, String, i32, i32);

/// Memoizing fetch layer over the World Bank and exchange-rate clients.
#[derive(Debug)]
pub struct DataService<W = HttpSource, R = HttpSource> {
    world_bank: api::Client<W>,
    rates: RatesClient<R>,
    series_cache: Memo<SeriesKey, Vec<ObservationRow>>,
    geo_cache: Memo<(String, i32), Vec<GeoRow>>,
    countries_cache: Memo<(), Vec<String>>,
    rates_cache: Memo<String, Vec<ExchangeRateRow>>,
}

impl DataService {
    /// Real HTTP clients pointed at the configured endpoints.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let source = HttpSource::new(settings.http_timeout)?;
        Ok(Self::new(
            api::Client::with_source(&settings.world_bank_url, source.clone()),
            RatesClient::with_source(&settings.rates_url, source),
        ))
    }
}

impl<W: JsonSource, R: JsonSource> DataService<W, R> {
    pub fn new(world_bank: api::Client<W>, rates: RatesClient<R>) -> Self {
        Self {
            world_bank,
            rates,
            series_cache: Memo::new(),
            geo_cache: Memo::new(),
            countries_cache: Memo::new(),
            rates_cache: Memo::new(),
        }
    }

    /// Time series of `variable` for `country` between two years (inclusive).
    pub fn time_series(
        &mut self,
        variable: &str,
        country: &str,
        start_year: i32,
        end_year: i32,
    ) -> Fetched<ObservationRow> {
        let code = indicators::resolve(variable);
        if code.is_empty() {
            return unresolved(FetchError::UnknownIndicator(variable.into()), variable);
        }
        let Some(iso3) = countries::resolve(country) else {
            return unresolved(FetchError::UnknownCountry(country.into()), country);
        };

        let key = (variable.to_string(), country.to_string(), start_year, end_year);
        let date = DateSpec::Range {
            start: start_year.min(end_year),
            end: start_year.max(end_year),
        };
        let world_bank = &self.world_bank;
        match self
            .series_cache
            .get_or_try_insert_with(key, || world_bank.time_series(iso3, code, date))
        {
            Ok(rows) => Fetched::ok(rows),
            Err(e) => {
                log::warn!("time series {variable}/{country}: {e}");
                Fetched::failed(Notice::warning(format!(
                    "No data found for {variable} in {country}."
                )))
            }
        }
    }

    /// Values of `variable` for every economy in `year`.
    pub fn cross_country(&mut self, variable: &str, year: i32) -> Fetched<GeoRow> {
        let code = indicators::resolve(variable);
        if code.is_empty() {
            return unresolved(FetchError::UnknownIndicator(variable.into()), variable);
        }

        let world_bank = &self.world_bank;
        match self
            .geo_cache
            .get_or_try_insert_with((variable.to_string(), year), || {
                world_bank.cross_country(code, year)
            }) {
            Ok(rows) => Fetched::ok(rows),
            Err(e) => {
                log::warn!("cross-country {variable}/{year}: {e}");
                Fetched::failed(Notice::warning(format!(
                    "No data found for {variable} in {year}."
                )))
            }
        }
    }

    /// Names of every economy the World Bank knows. Fetched once per session.
    pub fn country_list(&mut self) -> Fetched<String> {
        let world_bank = &self.world_bank;
        match self.countries_cache.get_or_try_insert_with((), || {
            world_bank
                .countries()
                .map(|list| list.into_iter().map(|c| c.name).collect())
        }) {
            Ok(names) => Fetched::ok(names),
            Err(e) => {
                log::warn!("country list: {e}");
                Fetched::failed(Notice::error("Failed to fetch country list."))
            }
        }
    }

    /// Latest exchange rates against `base`.
    pub fn exchange_rates(&mut self, base: &str) -> Fetched<ExchangeRateRow> {
        let base = base.trim().to_ascii_uppercase();
        let rates = &self.rates;
        match self
            .rates_cache
            .get_or_try_insert_with(base.clone(), || rates.latest(&base))
        {
            Ok(rows) => Fetched::ok(rows),
            Err(e) => {
                log::warn!("exchange rates ({base}): {e}");
                Fetched::failed(Notice::error("Failed to fetch exchange rates."))
            }
        }
    }

    /// Drop every memoized result.
    pub fn clear_caches(&mut self) {
        log::debug!(
            "clearing caches: {} series, {} cross-country, {} rate tables",
            self.series_cache.len(),
            self.geo_cache.len(),
            self.rates_cache.len()
        );
        self.series_cache.clear();
        self.geo_cache.clear();
        self.countries_cache.clear();
        self.rates_cache.clear();
    }
}

fn unresolved<T>(e: FetchError, input: &str) -> Fetched<T> {
    log::warn!("{e}");
    let message = match e {
        FetchError::UnknownCountry(_) => format!("Country code for {input} not found."),
        _ => format!("No indicator code for {input}."),
    };
    Fetched::failed(Notice::error(message))
}
