//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::country::{CountryRecord, RawCountry, RawFlags, RawName};
use crate::core::state::App;
use crate::fetch::{CountrySource, FetchError};

/// A source that hands back a fixed list without touching the network.
pub struct StaticSource(pub Vec<RawCountry>);

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError> {
        Ok(self.0.clone())
    }
}

/// A source whose fetch never settles.
pub struct PendingSource;

#[async_trait]
impl CountrySource for PendingSource {
    fn name(&self) -> &str {
        "pending"
    }

    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError> {
        std::future::pending().await
    }
}

/// Minimal raw record with a name and a single continent.
pub fn raw_country(name: &str, continent: &str) -> RawCountry {
    RawCountry {
        name: RawName {
            common: name.to_string(),
            official: format!("Republic of {name}"),
        },
        capital: Some(vec![format!("{name} City")]),
        flags: RawFlags {
            png: format!("https://flagcdn.com/w320/{}.png", name.to_lowercase()),
        },
        continents: vec![continent.to_string()],
        area: 1000.0,
        population: 1_000_000,
        ..Default::default()
    }
}

pub fn record(name: &str, continent: &str) -> CountryRecord {
    CountryRecord::from(raw_country(name, continent))
}

/// Chad (Africa), China (Asia), Chile (Americas).
pub fn sample_countries() -> Vec<RawCountry> {
    vec![
        raw_country("Chad", "Africa"),
        raw_country("China", "Asia"),
        raw_country("Chile", "Americas"),
    ]
}

/// Creates a test App that is still waiting for its first fetch.
pub fn test_app() -> App {
    App::new(Arc::new(StaticSource(sample_countries())))
}

/// Creates a test App with `sample_countries()` already loaded.
pub fn loaded_app() -> App {
    let mut app = test_app();
    update(
        &mut app,
        Action::FetchCompleted {
            generation: 0,
            result: Ok(sample_countries()),
        },
    );
    app
}
