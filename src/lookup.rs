//! The `WeatherLookup` component
//!
//! Owns the lookup state and turns user actions into request futures. The
//! futures are `'static` and not `Send`: the host polls them on its own
//! thread and feeds each `Completion` back through [`WeatherLookup::complete`].

use std::mem;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use tracing::debug;

use crate::LookupError;
use crate::api::WeatherApi;
use crate::models::{CitySuggestion, WeatherSnapshot};
use crate::state::{self, LookupState};

/// An in-flight request
pub type PendingFetch = LocalBoxFuture<'static, Completion>;

/// Outcome of a request, ready to be applied to the state
#[derive(Debug)]
pub enum Completion {
    Suggestions {
        seq: u64,
        result: Result<Vec<CitySuggestion>, LookupError>,
    },
    Weather(Result<WeatherSnapshot, LookupError>),
}

pub struct WeatherLookup<A> {
    api: Rc<A>,
    state: LookupState,
}

impl<A: WeatherApi + 'static> WeatherLookup<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            state: LookupState::default(),
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    fn update(&mut self, transition: impl FnOnce(LookupState) -> LookupState) {
        self.state = transition(mem::take(&mut self.state));
    }

    /// Keystroke: store the text and start a suggestion search for it.
    pub fn set_query(&mut self, text: impl Into<String>) -> Option<PendingFetch> {
        let text = text.into();
        self.update(|s| state::set_query(s, text.clone()));
        self.request_suggestions(&text)
    }

    /// Pick a suggestion. Issues no request.
    pub fn select_suggestion(&mut self, suggestion: &CitySuggestion) {
        self.update(|s| state::select_suggestion(s, suggestion));
    }

    /// Start a suggestion search, or clear the list right away for blank input.
    pub fn request_suggestions(&mut self, query: &str) -> Option<PendingFetch> {
        if query.trim().is_empty() {
            self.update(state::clear_suggestions);
            return None;
        }

        let (next, seq) = state::issue_suggestion_request(mem::take(&mut self.state));
        self.state = next;
        debug!(seq, "Searching cities like {:?}", query);

        let api = Rc::clone(&self.api);
        let query = query.to_owned();
        Some(
            async move {
                let result = api.find_cities(&query).await;
                Completion::Suggestions { seq, result }
            }
            .boxed_local(),
        )
    }

    /// Submit: look up the weather for the current query.
    pub fn submit(&mut self) -> Option<PendingFetch> {
        let query = self.state.query.clone();
        self.request_weather(&query)
    }

    /// Start a weather lookup for the exact `query`, or record a validation
    /// error for blank input.
    pub fn request_weather(&mut self, query: &str) -> Option<PendingFetch> {
        if query.trim().is_empty() {
            self.update(state::apply_validation_error);
            return None;
        }

        debug!("Looking up weather for {:?}", query);
        let api = Rc::clone(&self.api);
        let query = query.to_owned();
        Some(
            async move { Completion::Weather(api.current_weather(&query).await) }.boxed_local(),
        )
    }

    /// Apply a finished request.
    pub fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::Suggestions { seq, result } => {
                self.update(|s| state::apply_suggestions_result(s, seq, result));
            }
            Completion::Weather(result) => {
                self.update(|s| state::apply_weather_result(s, result));
            }
        }
    }

    /// Search suggestions for `query` and apply the result before returning.
    pub async fn fetch_suggestions(&mut self, query: &str) {
        if let Some(pending) = self.request_suggestions(query) {
            let completion = pending.await;
            self.complete(completion);
        }
    }

    /// Look up the weather for `query` and apply the result before returning.
    pub async fn fetch_weather(&mut self, query: &str) {
        if let Some(pending) = self.request_weather(query) {
            let completion = pending.await;
            self.complete(completion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EMPTY_QUERY_MESSAGE, NOT_FOUND_MESSAGE};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Canned responses plus a log of every call made.
    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<String>>,
        weather: Option<Result<WeatherSnapshot, LookupError>>,
        cities: Option<Result<Vec<CitySuggestion>, LookupError>>,
    }

    impl WeatherApi for RecordingApi {
        async fn current_weather(&self, city: &str) -> crate::Result<WeatherSnapshot> {
            self.calls.borrow_mut().push(format!("weather:{city}"));
            self.weather.clone().unwrap_or(Err(LookupError::NotFound))
        }

        async fn find_cities(&self, query: &str) -> crate::Result<Vec<CitySuggestion>> {
            self.calls.borrow_mut().push(format!("find:{query}"));
            self.cities.clone().unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn paris() -> WeatherSnapshot {
        WeatherSnapshot {
            name: "Paris".to_string(),
            country: "FR".to_string(),
            temperature: 19,
            feels_like: 18,
            humidity: 40,
            wind_speed: 3.1,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        }
    }

    fn london() -> CitySuggestion {
        CitySuggestion::new(1, "London", "GB")
    }

    #[test]
    fn test_blank_submit_issues_no_request() {
        for query in ["", " ", "\t\n"] {
            let mut lookup = WeatherLookup::new(RecordingApi::default());
            lookup.set_query(query);
            assert!(lookup.submit().is_none());

            assert!(lookup.state().weather.is_none());
            assert_eq!(lookup.state().error.as_deref(), Some(EMPTY_QUERY_MESSAGE));
            assert!(lookup.api.calls.borrow().is_empty());
        }
    }

    #[test]
    fn test_submit_uses_untrimmed_query() {
        let api = RecordingApi {
            weather: Some(Ok(paris())),
            ..Default::default()
        };
        let mut lookup = WeatherLookup::new(api);
        let _ = lookup.set_query(" Paris ");
        let pending = lookup.submit().unwrap();
        lookup.complete(block_on(pending));

        assert_eq!(*lookup.api.calls.borrow(), vec!["weather: Paris ".to_string()]);
        assert_eq!(lookup.state().weather, Some(paris()));
        assert!(lookup.state().error.is_none());
    }

    #[test]
    fn test_not_found() {
        let mut lookup = WeatherLookup::new(RecordingApi::default());
        block_on(lookup.fetch_weather("Zzzxxqq"));
        assert!(lookup.state().weather.is_none());
        assert_eq!(lookup.state().error.as_deref(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_blank_input_clears_suggestions_without_request() {
        let api = RecordingApi {
            cities: Some(Ok(vec![london()])),
            ..Default::default()
        };
        let mut lookup = WeatherLookup::new(api);
        block_on(lookup.fetch_suggestions("Lon"));
        assert_eq!(lookup.state().suggestions, vec![london()]);

        assert!(lookup.set_query("   ").is_none());
        assert!(lookup.state().suggestions.is_empty());
        assert_eq!(lookup.state().query, "   ");
        assert_eq!(*lookup.api.calls.borrow(), vec!["find:Lon".to_string()]);
    }

    #[test]
    fn test_failed_suggestions_are_swallowed() {
        let api = RecordingApi {
            cities: Some(Err(LookupError::transport("connection reset"))),
            ..Default::default()
        };
        let mut lookup = WeatherLookup::new(api);
        block_on(lookup.fetch_suggestions("Lon"));

        assert!(lookup.state().suggestions.is_empty());
        assert!(lookup.state().error.is_none());
    }

    #[test]
    fn test_out_of_order_completion_keeps_latest() {
        let api = RecordingApi {
            cities: Some(Ok(vec![london()])),
            ..Default::default()
        };
        let mut lookup = WeatherLookup::new(api);

        let _early = lookup.set_query("Lo").unwrap();
        let late = lookup.set_query("Lon").unwrap();

        lookup.complete(block_on(late));
        // The "Lo" search resolves last.
        lookup.complete(Completion::Suggestions {
            seq: 1,
            result: Ok(vec![CitySuggestion::new(9, "Lod", "IL")]),
        });

        assert_eq!(lookup.state().suggestions, vec![london()]);
    }

    #[test]
    fn test_select_suggestion_issues_no_request() {
        let api = RecordingApi {
            cities: Some(Ok(vec![london()])),
            ..Default::default()
        };
        let mut lookup = WeatherLookup::new(api);
        block_on(lookup.fetch_suggestions("Lon"));

        lookup.select_suggestion(&london());

        assert_eq!(lookup.state().query, "London");
        assert!(lookup.state().suggestions.is_empty());
        assert_eq!(lookup.api.calls.borrow().len(), 1);
    }
}
