//! Error types and handling for the `WeatherLookup` component

use thiserror::Error;

/// Message shown when a lookup is submitted without a city
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name.";

/// Message shown for any non-success weather response
pub const NOT_FOUND_MESSAGE: &str = "City not found.";

/// Main error type for the `WeatherLookup` component
///
/// The `Display` text of every variant is exactly what the view shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Submitted query was empty or whitespace only
    #[error("Please enter a city name.")]
    Validation,

    /// Weather endpoint answered with a non-success status
    #[error("City not found.")]
    NotFound,

    /// Network failure while talking to the API
    #[error("{message}")]
    Transport { message: String },

    /// Response body could not be decoded
    #[error("{message}")]
    Parse { message: String },

    /// Invalid startup configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl LookupError {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the message shown to the user for this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Config { .. } => {
                "Configuration error. Please check your API key and settings.".to_string()
            }
            other => other.to_string(),
        }
    }
}

// The request URL carries the API key, so it is stripped before display.
impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::transport(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::parse(err.to_string())
    }
}
