//! Blocking JSON transport.
//!
//! Every fetcher talks to the network through [`JsonSource`], so tests can swap
//! the real HTTP client for canned payloads.

use crate::error::FetchError;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Issues one GET and returns the decoded JSON body.
pub trait JsonSource {
    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError>;
}

impl<S: JsonSource + ?Sized> JsonSource for &S {
    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        (**self).get_json(url, query)
    }
}

/// Build the shared reqwest client used for data and chat requests.
pub fn build_client(timeout: Duration) -> reqwest::Result<HttpClient> {
    HttpClient::builder()
        .timeout(timeout) // total request timeout
        .connect_timeout(Duration::from_secs(10)) // connect timeout
        .redirect(Policy::limited(5)) // cap redirects
        .user_agent(concat!("macro_copilot/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// [`JsonSource`] backed by a reqwest blocking client. No retries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: HttpClient,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http: build_client(timeout)?,
        })
    }

    pub fn from_client(http: HttpClient) -> Self {
        Self { http }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(Duration::from_secs(30)).expect("reqwest client build")
    }
}

impl JsonSource for HttpSource {
    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        log::debug!("GET {} {:?}", url, query);
        let resp = self.http.get(url).query(query).send()?;
        let status = resp.status();
        if !status.is_success() {
            log::warn!("GET {} failed with HTTP {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
