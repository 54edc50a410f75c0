//! Client-visible state and its transitions.
//!
//! Each `apply_*` method takes the current state by value and returns the
//! next one. The UI holds a single `AppState` and replaces it on every event.
//!
//! Every submit attempt gets a generation number. Completions carrying an
//! older generation than the latest attempt (or than the latest reset) are
//! dropped, so an overlapping or abandoned request can never overwrite newer
//! state.

use crate::error::PredictionError;
use crate::form::{FormField, FormState};
use crate::prediction::PredictionResult;
use crate::request::PredictionRequest;
use log::{info, warn};

pub const SUBMIT_LABEL: &str = "Predict";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, PartialEq, Clone, Default)]
pub struct AppState {
    pub form: FormState,
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
    pub loading: bool,
    /// Generation of the most recent submit attempt or reset.
    pub generation: u64,
}

/// What a submit attempt should do next.
#[derive(Debug, PartialEq, Clone)]
pub struct Submission {
    pub generation: u64,
    /// The request to send, or the validation error that stops it.
    pub request: Result<PredictionRequest, PredictionError>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_field_change(mut self, field: FormField, value: String) -> Self {
        self.form.set(field, value);
        self
    }

    /// Clear the previous error, enter loading and issue a new generation.
    pub fn apply_submit_start(mut self) -> (Self, Submission) {
        self.error = None;
        self.loading = true;
        self.generation += 1;
        let submission = Submission {
            generation: self.generation,
            request: PredictionRequest::from_form(&self.form),
        };
        (self, submission)
    }

    pub fn apply_submit_success(mut self, generation: u64, result: PredictionResult) -> Self {
        if self.is_stale(generation) {
            return self;
        }
        self.result = Some(result);
        self.error = None;
        self.loading = false;
        self
    }

    /// Record a failed attempt. The last successful result is left in place.
    pub fn apply_submit_failure(mut self, generation: u64, error: &PredictionError) -> Self {
        if self.is_stale(generation) {
            return self;
        }
        self.error = Some(error.user_message().to_string());
        self.loading = false;
        self
    }

    /// Empty the form, drop result and error, and orphan any request in flight.
    pub fn apply_reset(self) -> Self {
        if self.loading {
            info!("Reset while generation {} is in flight", self.generation);
        }
        AppState {
            generation: self.generation + 1,
            ..AppState::default()
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale {
            warn!(
                "Discarding response for generation {} (latest is {})",
                generation, self.generation
            );
        }
        stale
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// The result to render: hidden while a request is loading.
    pub fn visible_result(&self) -> Option<&PredictionResult> {
        if self.loading {
            None
        } else {
            self.result.as_ref()
        }
    }
}
