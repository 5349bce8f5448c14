//! Canned JSON responses standing in for the World Bank and exchange-rate APIs.
#![allow(dead_code)]

use macro_copilot::api::Client;
use macro_copilot::http::JsonSource;
use macro_copilot::{DataService, FetchError, RatesClient};
use serde_json::{Value, json};
use std::cell::RefCell;

/// Answers every request whose URL contains a registered fragment; counts calls.
#[derive(Default)]
pub struct Canned {
    routes: Vec<(String, Result<Value, u16>)>,
    pub calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl Canned {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url_fragment: &str, body: Value) -> Self {
        self.routes.push((url_fragment.to_string(), Ok(body)));
        self
    }

    pub fn fail(mut self, url_fragment: &str, status: u16) -> Self {
        self.routes.push((url_fragment.to_string(), Err(status)));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls_to(&self, url_fragment: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(url, _)| url.contains(url_fragment))
            .count()
    }
}

impl JsonSource for Canned {
    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        self.calls.borrow_mut().push((
            url.to_string(),
            query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        ));
        match self.routes.iter().find(|(frag, _)| url.contains(frag.as_str())) {
            Some((_, Ok(body))) => Ok(body.clone()),
            Some((_, Err(status))) => Err(FetchError::Status(*status)),
            None => Err(FetchError::Transport(format!("no route for {url}"))),
        }
    }
}

pub fn service(source: &Canned) -> DataService<&Canned, &Canned> {
    DataService::new(
        Client::with_source("http://wb.test/v2", source),
        RatesClient::with_source("http://fx.test", source),
    )
}

pub fn meta() -> Value {
    json!({"page": 1, "pages": 1, "per_page": 1000, "total": 4})
}

/// Germany's GDP for 2019-2022: three usable observations and one that is not.
pub fn gdp_germany() -> Value {
    let row = |date: &str, value: Value| {
        json!({
            "indicator": {"id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)"},
            "country": {"id": "DE", "value": "Germany"},
            "countryiso3code": "DEU",
            "date": date,
            "value": value,
        })
    };
    json!([
        meta(),
        [
            row("2022", json!("not a number")),
            row("2021", json!(4.26e12)),
            row("2020", json!(3.94e12)),
            row("2019", json!(3.89e12)),
        ]
    ])
}

pub fn gdp_all_2020() -> Value {
    let row = |iso3: &str, name: &str, value: Value| {
        json!({
            "indicator": {"id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)"},
            "country": {"id": "", "value": name},
            "countryiso3code": iso3,
            "date": "2020",
            "value": value,
        })
    };
    json!([
        meta(),
        [
            row("WLD", "World", json!(8.5e13)),
            row("DEU", "Germany", json!(3.94e12)),
            row("FRA", "France", json!(2.64e12)),
            row("TUV", "Tuvalu", json!(null)),
        ]
    ])
}

pub fn country_list() -> Value {
    json!([
        meta(),
        [
            {"id": "ABW", "iso2Code": "AW", "name": "Aruba", "region": {"id": "LCN", "value": "Latin America & Caribbean "}, "capitalCity": "Oranjestad"},
            {"id": "DEU", "iso2Code": "DE", "name": "Germany", "region": {"id": "ECS", "value": "Europe & Central Asia"}, "capitalCity": "Berlin"},
            {"id": "KOR", "iso2Code": "KR", "name": "Korea, Rep.", "region": {"id": "EAS", "value": "East Asia & Pacific"}, "capitalCity": "Seoul"},
        ]
    ])
}

pub fn latest_rates() -> Value {
    json!({
        "success": true,
        "base": "USD",
        "rates": {"AUD": 1.52, "CAD": 1.36, "CHF": 0.88, "CNY": 7.24, "EUR": 0.92, "GBP": 0.79, "JPY": 151.3, "MXN": 16.9}
    })
}
