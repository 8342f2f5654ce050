//! Configuration management for the `WeatherLookup` application
//!
//! Configuration is read once from environment variables by the binary and
//! handed to the component explicitly. Loading goes through an injectable
//! variable lookup so the rules can be tested without touching the process
//! environment.

use crate::LookupError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
/// Optional override of the API base URL
pub const BASE_URL_VAR: &str = "WEATHERLOOKUP_BASE_URL";
/// Optional log level
pub const LOG_LEVEL_VAR: &str = "WEATHERLOOKUP_LOG_LEVEL";
/// Optional log format
pub const LOG_FORMAT_VAR: &str = "WEATHERLOOKUP_LOG_FORMAT";

/// Root configuration structure for the `WeatherLookup` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherLookupConfig {
    /// Weather API configuration
    pub weather: WeatherApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// OpenWeatherMap API key
    pub api_key: String,
    /// Base URL for weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Maximum number of city suggestions requested per keystroke
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u8,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_suggestion_limit() -> u8 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherLookupConfig {
    fn default() -> Self {
        Self {
            weather: WeatherApiConfig {
                api_key: String::new(),
                base_url: default_weather_base_url(),
                suggestion_limit: default_suggestion_limit(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl WeatherLookupConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.weather.api_key = lookup(API_KEY_VAR)
            .with_context(|| format!("Missing {API_KEY_VAR} env var"))?;

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.weather.base_url = base_url;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.logging.level = level.to_lowercase();
        }
        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.logging.format = format.to_lowercase();
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.suggestion_limit == 0 {
            self.weather.suggestion_limit = default_suggestion_limit();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the API credential
    pub fn validate_api_key(&self) -> Result<()> {
        if self.weather.api_key.trim().is_empty() {
            return Err(LookupError::config(format!(
                "{API_KEY_VAR} cannot be empty. Please provide a valid OpenWeatherMap key."
            ))
            .into());
        }

        if self.weather.api_key.chars().any(char::is_whitespace) {
            return Err(LookupError::config(
                "Weather API key appears to be invalid (contains whitespace). Please check your API key.",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(LookupError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(LookupError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(LookupError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = WeatherLookupConfig::default();
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.weather.suggestion_limit, 5);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.weather.api_key.is_empty());
    }

    #[test]
    fn test_missing_api_key() {
        let result = WeatherLookupConfig::from_lookup(lookup_from(&[]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = WeatherLookupConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_with_overrides() {
        let config = WeatherLookupConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "http://localhost:8080"),
            (LOG_LEVEL_VAR, "DEBUG"),
            (LOG_FORMAT_VAR, "json"),
        ]))
        .unwrap();

        assert_eq!(config.weather.api_key, "abc123");
        assert_eq!(config.weather.base_url, "http://localhost:8080");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_log_level() {
        let result = WeatherLookupConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (LOG_LEVEL_VAR, "loud"),
        ]));
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = WeatherLookupConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "ftp://example.com"),
        ]));
        assert!(result.unwrap_err().to_string().contains("HTTP or HTTPS"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = WeatherLookupConfig::default();
        config.weather.base_url.clear();
        config.weather.suggestion_limit = 0;
        config.logging.level.clear();
        config.apply_defaults();
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.weather.suggestion_limit, 5);
        assert_eq!(config.logging.level, "info");
    }
}
