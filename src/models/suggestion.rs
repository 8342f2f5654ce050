//! City suggestion model for search-as-you-type results

use serde::{Deserialize, Serialize};

/// A candidate city returned by the city search endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CitySuggestion {
    /// API-provided identifier, used as the stable rendering key
    pub id: u64,
    /// City display name
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
}

impl CitySuggestion {
    /// Create a new suggestion
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
        }
    }

    /// Format as "Name, CC", or just the name when the country is unknown
    #[must_use]
    pub fn label(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}
