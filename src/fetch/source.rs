use std::fmt;

use async_trait::async_trait;

use crate::core::country::RawCountry;

/// Errors that can occur while fetching the country list.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection-level failure (DNS, refused, reset).
    Network(String),
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The provider answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the JSON array we expect.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce the full list of countries.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logs and the title bar.
    fn name(&self) -> &str;

    /// Fetches every country in provider order.
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError>;
}
