//! Weather API access
//!
//! `WeatherApi` is the seam between the lookup component and the network.
//! `OpenWeatherClient` is the production implementation; tests substitute
//! their own.

use crate::Result;
use crate::models::{CitySuggestion, WeatherSnapshot};

pub mod openweather;

pub use openweather::OpenWeatherClient;

pub trait WeatherApi {
    /// Current conditions for the exact city string.
    ///
    /// Non-success statuses map to `LookupError::NotFound`.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot>;

    /// Up to the configured number of cities whose name is like `query`.
    async fn find_cities(&self, query: &str) -> Result<Vec<CitySuggestion>>;
}
