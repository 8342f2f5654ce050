//! OpenWeatherMap client
//!
//! Talks to the `weather` and `find` endpoints of the 2.5 API and maps the
//! JSON responses onto the domain models.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::WeatherApi;
use crate::config::WeatherApiConfig;
use crate::models::{CitySuggestion, WeatherSnapshot};
use crate::{LookupError, Result};

const UNITS: &str = "metric";

/// HTTP client for the OpenWeatherMap API
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    suggestion_limit: u8,
}

impl OpenWeatherClient {
    /// Create a new client. No timeout is set; requests rely on transport defaults.
    pub fn new(config: &WeatherApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("WeatherLookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            suggestion_limit: config.suggestion_limit,
        })
    }

    fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/weather?q={}&appid={}&units={UNITS}",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        )
    }

    fn find_url(&self, query: &str) -> String {
        format!(
            "{}/find?q={}&appid={}&type=like&cnt={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key),
            self.suggestion_limit
        )
    }
}

impl WeatherApi for OpenWeatherClient {
    #[instrument(name = "current_weather", level = "debug", skip(self))]
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot> {
        debug!("Requesting {}/weather for {:?}", self.base_url, city);

        let response = self.client.get(self.weather_url(city)).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "Weather endpoint rejected the city");
            return Err(LookupError::NotFound);
        }

        let body = response.bytes().await?;
        let parsed: CurrentWeatherResponse = serde_json::from_slice(&body)?;
        let snapshot = parsed.into_snapshot()?;

        info!(
            "Current weather for {}: {}",
            snapshot.format_location(),
            snapshot.format_temperature()
        );
        Ok(snapshot)
    }

    #[instrument(name = "find_cities", level = "debug", skip(self))]
    async fn find_cities(&self, query: &str) -> Result<Vec<CitySuggestion>> {
        debug!("Requesting {}/find for {:?}", self.base_url, query);

        // The status is deliberately not checked: whatever parses is accepted.
        let response = self.client.get(self.find_url(query)).send().await?;
        let body = response.bytes().await?;
        let parsed: FindResponse = serde_json::from_slice(&body)?;

        let suggestions: Vec<CitySuggestion> = parsed
            .list
            .unwrap_or_default()
            .into_iter()
            .map(CitySuggestion::from)
            .collect();

        debug!("Found {} city suggestions", suggestions.len());
        Ok(suggestions)
    }
}

/// Response of the `weather` endpoint (only consumed fields)
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    #[serde(default)]
    pub sys: SysInfo,
    pub weather: Vec<ConditionInfo>,
    pub main: MainInfo,
    pub wind: WindInfo,
}

#[derive(Debug, Default, Deserialize)]
pub struct SysInfo {
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConditionInfo {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct MainInfo {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Debug, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
}

/// Response of the `find` endpoint
#[derive(Debug, Deserialize)]
pub struct FindResponse {
    pub list: Option<Vec<FoundCity>>,
}

#[derive(Debug, Deserialize)]
pub struct FoundCity {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub sys: SysInfo,
}

impl CurrentWeatherResponse {
    /// Map onto a snapshot, rounding both temperatures.
    pub fn into_snapshot(self) -> Result<WeatherSnapshot> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            LookupError::parse("Malformed weather response: no weather conditions")
        })?;

        Ok(WeatherSnapshot {
            name: self.name,
            country: self.sys.country.unwrap_or_default(),
            temperature: WeatherSnapshot::round_reading(self.main.temp),
            feels_like: WeatherSnapshot::round_reading(self.main.feels_like),
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            description: condition.description,
            icon: condition.icon,
        })
    }
}

impl From<FoundCity> for CitySuggestion {
    fn from(city: FoundCity) -> Self {
        CitySuggestion {
            id: city.id,
            name: city.name,
            country: city.sys.country.unwrap_or_default(),
        }
    }
}
