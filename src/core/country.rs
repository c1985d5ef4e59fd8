//! # Country Records
//!
//! Two shapes of the same data:
//!
//! - [`RawCountry`]: what the REST Countries provider sends, field for field.
//!   Everything that can be missing is defaulted so one sparse record never
//!   fails the whole response.
//! - [`CountryRecord`]: the normalized display record the rest of the app uses.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Capital shown when the provider lists none.
pub const UNKNOWN_CAPITAL: &str = "Desconhecida";

/// Section title for records that list no continent at all.
pub const UNKNOWN_CONTINENT: &str = "Unknown";

// ============================================================================
// Provider wire types
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawCountry {
    pub name: RawName,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: RawFlags,
    /// Emoji flag, e.g. "🇨🇱".
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continents: Vec<String>,
    #[serde(default)]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(default)]
    pub latlng: Option<Vec<f64>>,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawName {
    pub common: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub official: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawFlags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub png: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Currency {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Normalized record
// ============================================================================

/// One country's display data.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    pub official_name: String,
    pub capital: String,
    /// PNG flag URI.
    pub flag: String,
    pub flag_emoji: String,
    pub continent: String,
    pub currencies: BTreeMap<String, Currency>,
    pub latlng: Vec<f64>,
    pub languages: BTreeMap<String, String>,
    pub area: f64,
    pub population: u64,
}

impl From<RawCountry> for CountryRecord {
    fn from(raw: RawCountry) -> Self {
        let capital = raw
            .capital
            .and_then(|caps| caps.into_iter().next())
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_CAPITAL.to_string());
        let continent = raw
            .continents
            .into_iter()
            .next()
            .unwrap_or_else(|| UNKNOWN_CONTINENT.to_string());

        Self {
            name: raw.name.common,
            official_name: raw.name.official,
            capital,
            flag: raw.flags.png,
            flag_emoji: raw.flag.unwrap_or_default(),
            continent,
            currencies: raw.currencies.unwrap_or_default(),
            latlng: raw.latlng.unwrap_or_default(),
            languages: raw.languages.unwrap_or_default(),
            area: raw.area,
            population: raw.population,
        }
    }
}

impl CountryRecord {
    /// Currency codes, e.g. "CLP" or "EUR, USD".
    pub fn currency_codes(&self) -> String {
        self.currencies
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn language_names(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn coordinates(&self) -> String {
        self.latlng
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
