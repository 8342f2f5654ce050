//! Weather snapshot model and display methods

use serde::{Deserialize, Serialize};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Current conditions for one successful lookup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Location name as reported by the API
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
    /// Temperature in Celsius, rounded
    pub temperature: i32,
    /// Feels-like temperature in Celsius, rounded
    pub feels_like: i32,
    /// Relative humidity percentage
    pub humidity: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Weather condition icon code from API
    pub icon: String,
}

impl WeatherSnapshot {
    /// Round a reading to the nearest integer, halves rounding up
    #[must_use]
    pub fn round_reading(value: f64) -> i32 {
        (value + 0.5).floor() as i32
    }

    /// Format "Name, CC" heading
    #[must_use]
    pub fn format_location(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }

    /// Format feels-like temperature with unit
    #[must_use]
    pub fn format_feels_like(&self) -> String {
        format!("{}°C", self.feels_like)
    }

    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{}%", self.humidity)
    }

    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{} m/s", self.wind_speed)
    }

    /// URL of the large condition icon
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@4x.png", self.icon)
    }
}
