mod common;

use common::{Canned, gdp_all_2020, gdp_germany, latest_rates, service};
use macro_copilot::Level;
use macro_copilot::dashboard::{NO_DATA, RATES_FAILED, ViewContent, ViewRequest, build_view};
use macro_copilot::viz::Chart;
use serde_json::json;

fn series_request(country: &str) -> ViewRequest {
    ViewRequest::TimeSeries {
        variable: "GDP".into(),
        country: country.into(),
        start_year: 2019,
        end_year: 2022,
    }
}

#[test]
fn time_series_view_has_caption_title_and_points() {
    let source = Canned::new().route("country/DEU/indicator", gdp_germany());
    let mut data = service(&source);

    let view = build_view(&mut data, &series_request("Germany"));
    assert_eq!(
        view.caption.as_deref(),
        Some("Displaying GDP data for Germany from 2019 to 2022")
    );
    assert!(view.notices.is_empty());
    let Some(Chart::Line(chart)) = view.chart() else {
        panic!("expected a line chart, got {:?}", view.content);
    };
    assert_eq!(chart.title, "GDP in Germany");
    assert_eq!(chart.points.len(), 3);
    assert!(chart.points.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn unresolvable_country_shows_warning_and_error_notice() {
    let source = Canned::new();
    let mut data = service(&source);

    let view = build_view(&mut data, &series_request("Qwxyzland"));
    assert_eq!(view.content, ViewContent::Warning(NO_DATA.to_string()));
    assert!(view.caption.is_none());
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].level, Level::Error);
}

#[test]
fn geographic_view_places_only_countries_on_the_map() {
    let source = Canned::new().route("country/all/indicator", gdp_all_2020());
    let mut data = service(&source);

    let view = build_view(
        &mut data,
        &ViewRequest::Geographic {
            variable: "GDP".into(),
            year: 2020,
        },
    );
    assert_eq!(
        view.caption.as_deref(),
        Some("Displaying GDP data for all countries in 2020")
    );
    let Some(Chart::Choropleth(map)) = view.chart() else {
        panic!("expected a choropleth, got {:?}", view.content);
    };
    assert_eq!(map.title, "GDP in 2020");
    let codes: Vec<&str> = map.regions.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["DEU", "FRA"]);
    assert_eq!(map.value_range(), Some((2.64e12, 3.94e12)));
}

#[test]
fn geographic_view_warns_when_upstream_is_empty() {
    let source = Canned::new().route("country/all/indicator", json!([common::meta(), null]));
    let mut data = service(&source);

    let view = build_view(
        &mut data,
        &ViewRequest::Geographic {
            variable: "Population".into(),
            year: 1961,
        },
    );
    assert_eq!(view.content, ViewContent::Warning(NO_DATA.to_string()));
    assert_eq!(view.notices[0].level, Level::Warning);
    assert_eq!(view.notices[0].message, "No data found for Population in 1961.");
}

#[test]
fn exchange_rates_default_to_the_major_currencies() {
    let source = Canned::new().route("/latest", latest_rates());
    let mut data = service(&source);

    let view = build_view(&mut data, &ViewRequest::ExchangeRates { currencies: None });
    assert_eq!(view.heading.as_deref(), Some("Exchange Rates Against USD"));
    assert_eq!(
        view.caption.as_deref(),
        Some("Displaying current exchange rates against USD")
    );
    assert_eq!(view.currency_options.len(), 8);
    let Some(Chart::Bar(chart)) = view.chart() else {
        panic!("expected a bar chart, got {:?}", view.content);
    };
    assert_eq!(chart.title, "Exchange Rates Against USD");
    let shown: Vec<&str> = chart.bars.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(shown, ["AUD", "CAD", "CHF", "CNY", "EUR", "GBP", "JPY"]);
}

#[test]
fn exchange_rates_honour_an_explicit_selection() {
    let source = Canned::new().route("/latest", latest_rates());
    let mut data = service(&source);

    let request = ViewRequest::ExchangeRates {
        currencies: Some(vec!["mxn".into(), "EUR".into(), "XXX".into()]),
    };
    let view = build_view(&mut data, &request);
    let Some(Chart::Bar(chart)) = view.chart() else {
        panic!("expected a bar chart");
    };
    assert_eq!(chart.bars, [("EUR".to_string(), 0.92), ("MXN".to_string(), 16.9)]);
}

#[test]
fn exchange_rate_failure_replaces_the_chart() {
    let source = Canned::new().route("/latest", json!({"error": "quota"}));
    let mut data = service(&source);

    let view = build_view(&mut data, &ViewRequest::ExchangeRates { currencies: None });
    assert_eq!(view.content, ViewContent::Warning(RATES_FAILED.to_string()));
    assert_eq!(view.heading.as_deref(), Some("Exchange Rates Against USD"));
    assert!(view.currency_options.is_empty());
}

#[test]
fn geographic_view_with_only_aggregates_is_a_warning() {
    let payload = json!([
        common::meta(),
        [
            {"countryiso3code": "WLD", "country": {"id": "1W", "value": "World"}, "date": "2020", "value": 8.5e13},
            {"countryiso3code": "EUU", "country": {"id": "EU", "value": "European Union"}, "date": "2020", "value": 1.5e13}
        ]
    ]);
    let source = Canned::new().route("country/all/indicator", payload);
    let mut data = service(&source);

    let view = build_view(
        &mut data,
        &ViewRequest::Geographic {
            variable: "GDP".into(),
            year: 2020,
        },
    );
    assert_eq!(view.content, ViewContent::Warning(NO_DATA.to_string()));
    assert!(view.chart().is_none());
}

#[test]
fn empty_currency_selection_is_a_warning_that_keeps_the_options() {
    let source = Canned::new().route("/latest", latest_rates());
    let mut data = service(&source);

    let view = build_view(
        &mut data,
        &ViewRequest::ExchangeRates {
            currencies: Some(Vec::new()),
        },
    );
    assert_eq!(view.content, ViewContent::Warning(NO_DATA.to_string()));
    assert_eq!(view.heading.as_deref(), Some("Exchange Rates Against USD"));
    assert_eq!(view.currency_options.len(), 8);
}
