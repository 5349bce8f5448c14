mod common;

use common::{Canned, country_list, gdp_all_2020, gdp_germany, latest_rates, meta, service};
use macro_copilot::Level;
use serde_json::json;

#[test]
fn time_series_keeps_numeric_rows_in_date_order() {
    let source = Canned::new().route("country/DEU/indicator/NY.GDP.MKTP.CD", gdp_germany());
    let mut data = service(&source);

    let fetched = data.time_series("GDP", "Germany", 2019, 2022);
    assert!(fetched.notice.is_none());
    let years: Vec<String> = fetched
        .rows
        .iter()
        .map(|r| r.date.format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(years, ["2019-01-01", "2020-01-01", "2021-01-01"]);
    assert_eq!(fetched.rows[2].value, 4.26e12);

    let calls = source.calls.borrow();
    let (_, query) = &calls[0];
    assert!(query.contains(&("date".to_string(), "2019:2022".to_string())));
    assert!(query.contains(&("format".to_string(), "json".to_string())));
    assert!(query.contains(&("per_page".to_string(), "1000".to_string())));
}

#[test]
fn time_series_accepts_sparse_metadata() {
    let payload = json!([
        {"page": 1},
        [
            {"date": "2021", "value": 3.0},
            {"date": "2019", "value": 1.0},
            {"date": "2022", "value": "x"},
            {"date": "2020", "value": 2.0}
        ]
    ]);
    let source = Canned::new().route("country/DEU/indicator", payload);
    let mut data = service(&source);

    let fetched = data.time_series("GDP", "Germany", 2019, 2022);
    assert!(fetched.notice.is_none());
    let values: Vec<f64> = fetched.rows.iter().map(|r| r.value).collect();
    assert_eq!(values, [1.0, 2.0, 3.0]);
}

#[test]
fn identical_requests_hit_the_network_once() {
    let source = Canned::new().route("country/DEU/indicator", gdp_germany());
    let mut data = service(&source);

    let first = data.time_series("GDP", "Germany", 2019, 2022);
    let second = data.time_series("GDP", "Germany", 2019, 2022);
    assert_eq!(first, second);
    assert_eq!(source.call_count(), 1);

    // a different argument tuple is a different entry
    data.time_series("GDP", "Germany", 2020, 2022);
    assert_eq!(source.call_count(), 2);

    data.clear_caches();
    data.time_series("GDP", "Germany", 2019, 2022);
    assert_eq!(source.call_count(), 3);
}

#[test]
fn unknown_country_is_an_error_notice_without_a_request() {
    let source = Canned::new();
    let mut data = service(&source);

    let fetched = data.time_series("GDP", "Qwxyzland", 2010, 2020);
    assert!(fetched.is_empty());
    let notice = fetched.notice.unwrap();
    assert_eq!(notice.level, Level::Error);
    assert_eq!(notice.message, "Country code for Qwxyzland not found.");
    assert_eq!(source.call_count(), 0);
}

#[test]
fn unknown_variable_is_an_error_notice_without_a_request() {
    let source = Canned::new();
    let mut data = service(&source);

    let fetched = data.cross_country("Happiness", 2020);
    assert!(fetched.is_empty());
    assert_eq!(
        fetched.notice.unwrap().message,
        "No indicator code for Happiness."
    );
    assert_eq!(source.call_count(), 0);
}

#[test]
fn world_bank_abbreviations_resolve_for_time_series() {
    let source = Canned::new().route("country/KOR/indicator", json!([meta(), []]));
    let mut data = service(&source);

    let fetched = data.time_series("Population", "Korea, Rep.", 2010, 2020);
    assert!(fetched.is_empty());
    assert!(fetched.notice.is_none());
    assert_eq!(source.calls_to("country/KOR/indicator/SP.POP.TOTL"), 1);
}

#[test]
fn every_fetcher_degrades_on_a_bad_envelope() {
    let bad = json!([{"page": 1}]);
    let source = Canned::new()
        .route("country/DEU/indicator", bad.clone())
        .route("country/all/indicator", json!({"unexpected": true}))
        .route("/v2/country", bad)
        .route("/latest", json!({"success": false}));
    let mut data = service(&source);

    let series = data.time_series("Inflation", "Germany", 2010, 2020);
    assert!(series.is_empty());
    let notice = series.notice.unwrap();
    assert_eq!(notice.level, Level::Warning);
    assert_eq!(notice.message, "No data found for Inflation in Germany.");

    let geo = data.cross_country("Inflation", 2020);
    assert!(geo.is_empty());
    assert_eq!(
        geo.notice.unwrap().message,
        "No data found for Inflation in 2020."
    );

    let countries = data.country_list();
    assert!(countries.is_empty());
    let notice = countries.notice.unwrap();
    assert_eq!(notice.level, Level::Error);
    assert_eq!(notice.message, "Failed to fetch country list.");

    let rates = data.exchange_rates("USD");
    assert!(rates.is_empty());
    let notice = rates.notice.unwrap();
    assert_eq!(notice.level, Level::Error);
    assert_eq!(notice.message, "Failed to fetch exchange rates.");
}

#[test]
fn failures_are_not_memoized() {
    let source = Canned::new().fail("country/DEU/indicator", 503);
    let mut data = service(&source);

    data.time_series("GDP", "Germany", 2019, 2022);
    data.time_series("GDP", "Germany", 2019, 2022);
    assert_eq!(source.call_count(), 2);
}

#[test]
fn cross_country_keeps_aggregates_and_drops_missing_values() {
    let source = Canned::new().route("country/all/indicator/NY.GDP.MKTP.CD", gdp_all_2020());
    let mut data = service(&source);

    let fetched = data.cross_country("GDP", 2020);
    let codes: Vec<&str> = fetched.rows.iter().map(|r| r.country_code.as_str()).collect();
    assert_eq!(codes, ["WLD", "DEU", "FRA"]);
    assert_eq!(fetched.rows[1].country_name, "Germany");

    let calls = source.calls.borrow();
    assert!(calls[0].1.contains(&("date".to_string(), "2020".to_string())));
    assert!(calls[0].1.contains(&("per_page".to_string(), "300".to_string())));
}

#[test]
fn country_list_is_fetched_once_per_session() {
    let source = Canned::new().route("/v2/country", country_list());
    let mut data = service(&source);

    let names = data.country_list();
    assert_eq!(names.rows, ["Aruba", "Germany", "Korea, Rep."]);
    data.country_list();
    assert_eq!(source.call_count(), 1);

    let calls = source.calls.borrow();
    assert!(calls[0].1.contains(&("per_page".to_string(), "300".to_string())));
    assert!(calls[0].1.contains(&("format".to_string(), "json".to_string())));
}

#[test]
fn exchange_rates_are_memoized_per_base() {
    let source = Canned::new().route("/latest", latest_rates());
    let mut data = service(&source);

    let usd = data.exchange_rates("usd");
    assert_eq!(usd.rows.len(), 8);
    assert_eq!(usd.rows[0].currency, "AUD");
    data.exchange_rates("USD");
    assert_eq!(source.call_count(), 1);
    data.exchange_rates("EUR");
    assert_eq!(source.call_count(), 2);

    let calls = source.calls.borrow();
    assert_eq!(calls[0].1, [("base".to_string(), "USD".to_string())]);
}
