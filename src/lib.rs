//! `WeatherLookup` - current weather for a city, with search-as-you-type
//! city suggestions
//!
//! The library holds the lookup component, its state transitions and the
//! OpenWeatherMap client. The binary is a small interactive host around it.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod render;
pub mod state;

// Re-export core types for public API
pub use api::{OpenWeatherClient, WeatherApi};
pub use config::WeatherLookupConfig;
pub use error::LookupError;
pub use lookup::{Completion, PendingFetch, WeatherLookup};
pub use models::{CitySuggestion, WeatherSnapshot};
pub use state::LookupState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
