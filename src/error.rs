//! Error types shared across the library.

use thiserror::Error;

/// Why a data fetch produced no rows.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no indicator code for {0:?}")]
    UnknownIndicator(String),
    #[error("country code for {0:?} not found")]
    UnknownCountry(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with HTTP {0}")]
    Status(u16),
    #[error("decode json: {0}")]
    Decode(String),
    #[error("world bank api error: {0}")]
    Api(String),
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
    #[error("response carries no records")]
    NoRecords,
    #[error("response has no `rates` field")]
    MissingRates,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Failure of the chat engine.
#[derive(Debug, Error)]
pub enum CopilotError {
    #[error("missing API key")]
    MissingApiKey,
    #[error("chat request failed: {0}")]
    Transport(String),
    #[error("chat request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed chat response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for CopilotError {
    fn from(e: reqwest::Error) -> Self {
        CopilotError::Transport(e.to_string())
    }
}

/// Misuse of the chat session or a failed reply.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a reply is already pending")]
    ReplyPending,
    #[error("no user message awaiting a reply")]
    NothingToAnswer,
    #[error(transparent)]
    Copilot(#[from] CopilotError),
}
