//! REST Countries source (`https://restcountries.com`).
//!
//! The `/all` endpoint refuses requests without an explicit field list, and
//! accepts at most ten fields, so we always send `FIELDS`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::country::RawCountry;
use crate::fetch::{CountrySource, FetchError};

pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Fields requested from the provider.
pub const FIELDS: &str =
    "name,capital,flags,flag,continents,currencies,latlng,languages,area,population";

pub struct RestCountriesSource {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl RestCountriesSource {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError> {
        info!(
            "Fetching countries from {} (timeout={:?})",
            self.endpoint, self.timeout
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("fields", FIELDS)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        debug!("REST Countries response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("REST Countries API error: {} - {}", status.as_u16(), message);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!("REST Countries body: {} bytes", body.len());

        let countries: Vec<RawCountry> =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_fit_provider_limit() {
        assert!(FIELDS.split(',').count() <= 10);
        assert!(FIELDS.contains("continents"));
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let source = RestCountriesSource::new(DEFAULT_ENDPOINT.to_string(), Duration::from_secs(5));
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(source.name(), "restcountries");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed on any sane test box.
        let source = RestCountriesSource::new(
            "http://127.0.0.1:9/all".to_string(),
            Duration::from_secs(5),
        );
        let result = tokio_test::block_on(source.fetch_all());
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
