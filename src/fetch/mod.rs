pub mod rest_countries;
pub mod source;

pub use rest_countries::{DEFAULT_ENDPOINT, FIELDS, RestCountriesSource};
pub use source::{CountrySource, FetchError};
