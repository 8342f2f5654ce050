//! Lookup state and its pure transitions
//!
//! Every transition takes the prior state by value and returns the next one,
//! so the whole interaction can be exercised without a network or a view.
//! Snapshot and error are never both present after any transition.

use tracing::{debug, warn};

use crate::LookupError;
use crate::models::{CitySuggestion, WeatherSnapshot};

/// Everything the view renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupState {
    /// Raw user input, stored verbatim
    pub query: String,
    /// Suggestions for the latest accepted search
    pub suggestions: Vec<CitySuggestion>,
    /// Result of the last successful lookup
    pub weather: Option<WeatherSnapshot>,
    /// Message of the last failed lookup
    pub error: Option<String>,
    /// Tag of the latest issued suggestion request
    suggestion_seq: u64,
}

impl LookupState {
    #[must_use]
    pub fn latest_suggestion_seq(&self) -> u64 {
        self.suggestion_seq
    }
}

/// Store the typed text verbatim.
#[must_use]
pub fn set_query(mut state: LookupState, text: String) -> LookupState {
    state.query = text;
    state
}

/// Tag a new suggestion request; anything issued earlier becomes stale.
#[must_use]
pub fn issue_suggestion_request(mut state: LookupState) -> (LookupState, u64) {
    state.suggestion_seq += 1;
    let seq = state.suggestion_seq;
    (state, seq)
}

/// Empty the suggestion list and supersede in-flight searches.
#[must_use]
pub fn clear_suggestions(state: LookupState) -> LookupState {
    let (mut state, _) = issue_suggestion_request(state);
    state.suggestions.clear();
    state
}

/// Take the suggestion's name as the query and close the list.
#[must_use]
pub fn select_suggestion(state: LookupState, suggestion: &CitySuggestion) -> LookupState {
    let mut state = clear_suggestions(state);
    state.query = suggestion.name.clone();
    state
}

/// Apply a finished suggestion search tagged `seq`.
///
/// Stale completions and failures leave the state untouched; failures are
/// only logged.
#[must_use]
pub fn apply_suggestions_result(
    mut state: LookupState,
    seq: u64,
    result: Result<Vec<CitySuggestion>, LookupError>,
) -> LookupState {
    if seq != state.suggestion_seq {
        debug!(
            seq,
            latest = state.suggestion_seq,
            "Dropping superseded suggestion result"
        );
        return state;
    }

    match result {
        Ok(suggestions) => state.suggestions = suggestions,
        Err(e) => warn!("Error fetching city suggestions: {e}"),
    }
    state
}

/// Apply a finished weather lookup.
#[must_use]
pub fn apply_weather_result(
    mut state: LookupState,
    result: Result<WeatherSnapshot, LookupError>,
) -> LookupState {
    match result {
        Ok(snapshot) => {
            state.weather = Some(snapshot);
            state.error = None;
        }
        Err(e) => {
            state.weather = None;
            state.error = Some(e.user_message());
        }
    }
    state
}

/// Record an empty-query submission.
#[must_use]
pub fn apply_validation_error(state: LookupState) -> LookupState {
    apply_weather_result(state, Err(LookupError::Validation))
}
