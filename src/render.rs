//! Plain-text view of the lookup state

use std::fmt::{self, Display};

use crate::models::WeatherSnapshot;
use crate::state::LookupState;

impl Display for LookupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔎 Search for a city or airport: {}", self.query)?;

        for (index, suggestion) in self.suggestions.iter().enumerate() {
            writeln!(f, "   {}. {}", index + 1, suggestion.label())?;
        }

        if let Some(error) = &self.error {
            writeln!(f, "⚠️  {error}")?;
        }

        if let Some(weather) = &self.weather {
            write!(f, "{weather}")?;
        }
        Ok(())
    }
}

impl Display for WeatherSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🌍 {}", self.format_location())?;
        writeln!(f, "   🖼️  {}", self.icon_url())?;
        writeln!(f, "   {} {}", self.format_temperature(), self.description)?;
        writeln!(f, "   🌡️  Feels Like: {}", self.format_feels_like())?;
        writeln!(f, "   💧 Humidity: {}", self.format_humidity())?;
        writeln!(f, "   💨 Wind Speed: {}", self.format_wind())
    }
}
