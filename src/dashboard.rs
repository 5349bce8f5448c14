//! View model of the "Economic Data Visualization" tab.
//!
//! The GUI and the CLI both turn the user's selections into a [`ViewRequest`],
//! hand it to [`build_view`] together with the session's [`DataService`], and
//! draw whatever [`View`] comes back. No drawing happens here.

use crate::countries;
use crate::fetch::{DataService, Notice};
use crate::http::JsonSource;
use crate::indicators::Indicator;
use crate::rates::DEFAULT_BASE_CURRENCY;
use crate::viz::types::{BarChart, Chart, ChoroplethMap, LineChart, MapRegion};
use serde::Serialize;

pub const YEAR_MIN: i32 = 1960;
pub const YEAR_MAX: i32 = 2023;
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2010, 2023);
pub const DEFAULT_GEO_YEAR: i32 = 2023;

/// Selector entry for the currency view.
pub const EXCHANGE_RATES: &str = "Exchange Rates";
pub const DEFAULT_CURRENCIES: [&str; 7] = ["EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY"];

pub const NO_DATA: &str = "No data available for the selected options.";
pub const RATES_FAILED: &str = "Failed to fetch exchange rates.";

/// Entries of the variable selector, in display order.
pub fn variables() -> Vec<&'static str> {
    Indicator::ALL
        .iter()
        .map(|i| i.name())
        .chain(std::iter::once(EXCHANGE_RATES))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum VizKind {
    #[default]
    TimeSeries,
    Geographic,
}

impl VizKind {
    pub const ALL: [VizKind; 2] = [VizKind::TimeSeries, VizKind::Geographic];

    pub fn label(self) -> &'static str {
        match self {
            VizKind::TimeSeries => "Time Series Plot",
            VizKind::Geographic => "Geographical Visualization",
        }
    }
}

/// What the user asked to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    TimeSeries {
        variable: String,
        country: String,
        start_year: i32,
        end_year: i32,
    },
    Geographic {
        variable: String,
        year: i32,
    },
    /// `None` selects [`DEFAULT_CURRENCIES`].
    ExchangeRates { currencies: Option<Vec<String>> },
}

/// Widget state of the visualization tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub variable: String,
    pub kind: VizKind,
    pub country: String,
    pub years: (i32, i32),
    pub geo_year: i32,
    pub currencies: Option<Vec<String>>,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            variable: Indicator::Gdp.name().to_string(),
            kind: VizKind::TimeSeries,
            country: String::new(),
            years: DEFAULT_YEAR_RANGE,
            geo_year: DEFAULT_GEO_YEAR,
            currencies: None,
        }
    }
}

impl Selections {
    pub fn request(&self) -> ViewRequest {
        if self.variable == EXCHANGE_RATES {
            return ViewRequest::ExchangeRates {
                currencies: self.currencies.clone(),
            };
        }
        match self.kind {
            VizKind::TimeSeries => ViewRequest::TimeSeries {
                variable: self.variable.clone(),
                country: self.country.clone(),
                start_year: clamp_year(self.years.0.min(self.years.1)),
                end_year: clamp_year(self.years.0.max(self.years.1)),
            },
            VizKind::Geographic => ViewRequest::Geographic {
                variable: self.variable.clone(),
                year: clamp_year(self.geo_year),
            },
        }
    }
}

pub fn clamp_year(year: i32) -> i32 {
    year.clamp(YEAR_MIN, YEAR_MAX)
}

/// Either a chart or the warning shown in its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewContent {
    Chart(Chart),
    Warning(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    /// Fixed heading above the view, if it has one.
    pub heading: Option<String>,
    /// Sentence describing the chart; absent when there is nothing to show.
    pub caption: Option<String>,
    /// Messages raised by the fetchers.
    pub notices: Vec<Notice>,
    pub content: ViewContent,
    /// Currencies the user may pick from (exchange-rate view only).
    pub currency_options: Vec<String>,
}

impl View {
    fn warning(message: &str, notices: Vec<Notice>) -> Self {
        Self {
            heading: None,
            caption: None,
            notices,
            content: ViewContent::Warning(message.to_string()),
            currency_options: Vec::new(),
        }
    }

    pub fn chart(&self) -> Option<&Chart> {
        match &self.content {
            ViewContent::Chart(chart) => Some(chart),
            ViewContent::Warning(_) => None,
        }
    }
}

pub fn build_view<W: JsonSource, R: JsonSource>(
    data: &mut DataService<W, R>,
    request: &ViewRequest,
) -> View {
    match request {
        ViewRequest::TimeSeries {
            variable,
            country,
            start_year,
            end_year,
        } => time_series_view(data, variable, country, *start_year, *end_year),
        ViewRequest::Geographic { variable, year } => geographic_view(data, variable, *year),
        ViewRequest::ExchangeRates { currencies } => exchange_rate_view(data, currencies.as_deref()),
    }
}

fn time_series_view<W: JsonSource, R: JsonSource>(
    data: &mut DataService<W, R>,
    variable: &str,
    country: &str,
    start_year: i32,
    end_year: i32,
) -> View {
    let fetched = data.time_series(variable, country, start_year, end_year);
    let notices: Vec<Notice> = fetched.notice.into_iter().collect();
    if fetched.rows.is_empty() {
        return View::warning(NO_DATA, notices);
    }
    let chart = LineChart {
        title: format!("{variable} in {country}"),
        x_label: "Date".into(),
        y_label: "Value".into(),
        points: fetched.rows.iter().map(|r| (r.date, r.value)).collect(),
    };
    View {
        heading: None,
        caption: Some(format!(
            "Displaying {variable} data for {country} from {start_year} to {end_year}"
        )),
        notices,
        content: ViewContent::Chart(Chart::Line(chart)),
        currency_options: Vec::new(),
    }
}

fn geographic_view<W: JsonSource, R: JsonSource>(
    data: &mut DataService<W, R>,
    variable: &str,
    year: i32,
) -> View {
    let fetched = data.cross_country(variable, year);
    let notices: Vec<Notice> = fetched.notice.into_iter().collect();
    if fetched.rows.is_empty() {
        return View::warning(NO_DATA, notices);
    }
    // aggregates ("WLD", "EUU", ...) have no place on the map
    let regions: Vec<MapRegion> = fetched
        .rows
        .iter()
        .filter_map(|row| {
            let country = countries::by_alpha3(&row.country_code)?;
            Some(MapRegion {
                code: row.country_code.clone(),
                name: row.country_name.clone(),
                value: row.value,
                lat: country.lat,
                lon: country.lon,
            })
        })
        .collect();
    log::debug!(
        "choropleth {variable}/{year}: {} of {} rows placed",
        regions.len(),
        fetched.rows.len()
    );
    if regions.is_empty() {
        return View::warning(NO_DATA, notices);
    }
    View {
        heading: None,
        caption: Some(format!(
            "Displaying {variable} data for all countries in {year}"
        )),
        notices,
        content: ViewContent::Chart(Chart::Choropleth(ChoroplethMap {
            title: format!("{variable} in {year}"),
            regions,
        })),
        currency_options: Vec::new(),
    }
}

fn exchange_rate_view<W: JsonSource, R: JsonSource>(
    data: &mut DataService<W, R>,
    currencies: Option<&[String]>,
) -> View {
    let heading = Some(format!("Exchange Rates Against {DEFAULT_BASE_CURRENCY}"));
    let fetched = data.exchange_rates(DEFAULT_BASE_CURRENCY);
    let notices: Vec<Notice> = fetched.notice.into_iter().collect();
    if fetched.rows.is_empty() {
        return View {
            heading,
            ..View::warning(RATES_FAILED, notices)
        };
    }

    let options: Vec<String> = fetched.rows.iter().map(|r| r.currency.clone()).collect();
    let selected: Vec<String> = match currencies {
        Some(list) => list.iter().map(|c| c.trim().to_ascii_uppercase()).collect(),
        None => default_currencies(&options),
    };
    let bars = fetched
        .rows
        .iter()
        .filter(|r| selected.contains(&r.currency))
        .map(|r| (r.currency.clone(), r.rate))
        .collect::<Vec<_>>();
    if bars.is_empty() {
        // keep the options so another selection can be made
        return View {
            heading,
            currency_options: options,
            ..View::warning(NO_DATA, notices)
        };
    }

    View {
        heading: heading.clone(),
        caption: Some(format!(
            "Displaying current exchange rates against {DEFAULT_BASE_CURRENCY}"
        )),
        notices,
        content: ViewContent::Chart(Chart::Bar(BarChart {
            title: heading.unwrap_or_default(),
            x_label: "Currency".into(),
            y_label: "Exchange Rate".into(),
            bars,
        })),
        currency_options: options,
    }
}

/// The default selection, restricted to what the API actually returned.
pub fn default_currencies(available: &[String]) -> Vec<String> {
    DEFAULT_CURRENCIES
        .iter()
        .filter(|c| available.iter().any(|a| a == *c))
        .map(|c| c.to_string())
        .collect()
}
