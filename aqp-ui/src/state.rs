//! Application state managed via Dioxus context.
//!
//! `UiState` wraps the whole `AppState` in one signal and is provided via
//! `use_context_provider`. Components never edit fields directly: every
//! change goes through an `AppState::apply_*` transition, and the signal
//! notifies whatever read it.

use aqp_core::client::HttpPredictionClient;
use aqp_core::config::ApiConfig;
use aqp_core::error::PredictionError;
use aqp_core::form::FormField;
use aqp_core::prediction::PredictionResult;
use aqp_core::state::AppState;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct UiState {
    /// Form, result, error and loading flag
    pub app: Signal<AppState>,
    /// Client bound to the endpoint resolved at startup
    pub client: Signal<HttpPredictionClient>,
}

impl UiState {
    pub fn new(config: ApiConfig) -> Self {
        log::info!("Prediction endpoint: {}", config.prediction_url());
        Self {
            app: Signal::new(AppState::new()),
            client: Signal::new(HttpPredictionClient::new(&config)),
        }
    }

    /// Replace the current state with the result of a transition.
    pub fn apply<R>(&mut self, transition: impl FnOnce(AppState) -> (AppState, R)) -> R {
        self.app.with_mut(|state| {
            let (next, output) = transition(std::mem::take(state));
            *state = next;
            output
        })
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.apply(|state| (state.apply_field_change(field, value), ()));
    }

    pub fn finish(&mut self, generation: u64, outcome: Result<PredictionResult, PredictionError>) {
        self.apply(|state| {
            let next = match outcome {
                Ok(result) => state.apply_submit_success(generation, result),
                Err(err) => state.apply_submit_failure(generation, &err),
            };
            (next, ())
        });
    }

    pub fn reset(&mut self) {
        self.apply(|state| (state.apply_reset(), ()));
    }
}
