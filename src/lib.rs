//! macro_copilot
//!
//! A macroeconomics dashboard as a Rust library: a chat session that proxies
//! questions to a "Copilot" engine, and views of World Bank indicators and
//! exchange rates. Pairs with the `macro-copilot` CLI and the
//! `macro-copilot-gui` desktop app.
//!
//! ### Features
//! - Resolve variable names to World Bank indicator ids and free-text country
//!   names to ISO alpha-3 codes (fuzzy, World Bank abbreviations understood)
//! - Fetch a country's time series, one year across all economies, the
//!   economy list and the latest exchange rates, memoized per session
//! - Turn selections into a view (caption, notices, chart) and render it as a
//!   line chart, choropleth or bar chart to SVG/PNG or an RGB buffer
//! - Chat transcript with a two-state turn machine; answers arrive complete or
//!   as a stream of fragments
//!
//! ### Example
//! ```no_run
//! use macro_copilot::dashboard::{build_view, ViewRequest};
//! use macro_copilot::{Session, Settings};
//!
//! let mut session = Session::new(Settings::from_env())?;
//! let view = build_view(
//!     &mut session.data,
//!     &ViewRequest::TimeSeries {
//!         variable: "GDP".into(),
//!         country: "Germany".into(),
//!         start_year: 2010,
//!         end_year: 2023,
//!     },
//! );
//! if let Some(chart) = view.chart() {
//!     macro_copilot::viz::render_to_file(chart, "gdp.svg", 1000, 600)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cache;
pub mod chat;
pub mod config;
pub mod copilot;
pub mod countries;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod http;
pub mod indicators;
pub mod models;
pub mod rates;
pub mod session;
pub mod viz;

pub use api::Client;
pub use chat::{Answer, ChatMessage, ChatSession, Copilot, Phase, Reply, Role};
pub use config::Settings;
pub use error::{ChatError, CopilotError, FetchError};
pub use fetch::{DataService, Fetched, Level, Notice};
pub use indicators::Indicator;
pub use models::{DateSpec, ExchangeRateRow, GeoRow, ObservationRow};
pub use rates::RatesClient;
pub use session::Session;
