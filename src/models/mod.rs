//! Data models for the WeatherLookup component
//!
//! - Suggestion: candidate cities from the search-as-you-type endpoint
//! - Weather: current conditions for one successful lookup

pub mod suggestion;
pub mod weather;

pub use suggestion::CitySuggestion;
pub use weather::WeatherSnapshot;
