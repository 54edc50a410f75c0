//! Submit/reset orchestration without a UI.
//!
//! `PredictionFormController` drives an `AppState` through one attempt at a
//! time against any `PredictionService`. The Dioxus front end performs the
//! same transitions itself so that overlapping requests can be in flight.

use crate::form::FormField;
use crate::service::{execute, PredictionService};
use crate::state::AppState;

pub struct PredictionFormController<S> {
    state: AppState,
    service: S,
}

impl<S: PredictionService> PredictionFormController<S> {
    pub fn new(service: S) -> Self {
        PredictionFormController {
            state: AppState::new(),
            service,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state = std::mem::take(&mut self.state).apply_field_change(field, value.into());
    }

    /// Run one submit attempt to completion. Loading is cleared on every path.
    pub async fn submit(&mut self) {
        let (state, submission) = std::mem::take(&mut self.state).apply_submit_start();
        self.state = state;

        let outcome = match submission.request {
            Ok(request) => execute(&self.service, &request).await,
            Err(err) => Err(err),
        };

        let state = std::mem::take(&mut self.state);
        self.state = match outcome {
            Ok(result) => state.apply_submit_success(submission.generation, result),
            Err(err) => state.apply_submit_failure(submission.generation, &err),
        };
    }

    pub fn reset(&mut self) {
        self.state = std::mem::take(&mut self.state).apply_reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{result_blocks, ModelBlock};
    use crate::error::{RequestFailure, REQUEST_FAILED_MESSAGE, VALIDATION_MESSAGE};
    use crate::form::FormState;
    use crate::prediction::PredictionResult;
    use crate::request::PredictionRequest;
    use std::cell::RefCell;

    /// Answers every request with the same canned response and records what it saw.
    struct ScriptedService {
        response: Result<String, RequestFailure>,
        seen: RefCell<Vec<PredictionRequest>>,
    }

    impl ScriptedService {
        fn answering(body: &str) -> Self {
            ScriptedService {
                response: Ok(body.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(failure: RequestFailure) -> Self {
            ScriptedService {
                response: Err(failure),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl PredictionService for ScriptedService {
        async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, RequestFailure> {
            self.seen.borrow_mut().push(request.clone());
            match &self.response {
                Ok(body) => PredictionResult::from_json(body),
                Err(failure) => Err(failure.clone()),
            }
        }
    }

    const CNN_BODY: &str = r#"{"CNN": {"date": "2024-03-07", "prediction": {"PM2.5": 12.34567, "PM10": 20, "SO2": 0.001, "CO": 0.5, "O3": 30, "NO2": 0.02}}}"#;

    fn fill<S: PredictionService>(controller: &mut PredictionFormController<S>, model: &str) {
        controller.update_field(FormField::Year, "2024");
        controller.update_field(FormField::Month, "3");
        controller.update_field(FormField::Day, "7");
        controller.update_field(FormField::Model, model);
    }

    #[tokio::test]
    async fn sends_one_request_with_padded_date() {
        let mut controller = PredictionFormController::new(ScriptedService::answering(CNN_BODY));
        fill(&mut controller, "CNN");
        controller.submit().await;

        let seen = controller.service().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            PredictionRequest {
                model: "CNN".to_string(),
                date: "2024-03-07".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn empty_model_never_calls_the_service() {
        let mut controller = PredictionFormController::new(ScriptedService::answering(CNN_BODY));
        fill(&mut controller, "");
        controller.submit().await;

        assert!(controller.service().seen.borrow().is_empty());
        assert_eq!(controller.state().error.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(!controller.state().loading);
        assert_eq!(controller.state().result, None);
    }

    #[tokio::test]
    async fn success_renders_rounded_readings() {
        let mut controller = PredictionFormController::new(ScriptedService::answering(CNN_BODY));
        fill(&mut controller, "CNN");
        controller.submit().await;

        assert!(!controller.state().loading);
        assert_eq!(controller.state().error, None);
        let result = controller.state().visible_result().unwrap();
        let blocks = result_blocks(result);
        let ModelBlock::Table(rows) = &blocks[0].1 else {
            panic!("expected a table");
        };
        assert_eq!(rows[1].value, "12.3457");
    }

    #[tokio::test]
    async fn error_entry_renders_message() {
        let mut controller = PredictionFormController::new(ScriptedService::answering(
            r#"{"CNN": {"error": "model not found"}}"#,
        ));
        fill(&mut controller, "CNN");
        controller.submit().await;

        let blocks = result_blocks(controller.state().visible_result().unwrap());
        assert_eq!(blocks[0].1, ModelBlock::Error("model not found".to_string()));
    }

    #[tokio::test]
    async fn network_rejection_sets_generic_error() {
        let mut controller = PredictionFormController::new(ScriptedService::failing(
            RequestFailure::Transport("connection refused".to_string()),
        ));
        fill(&mut controller, "CNN");
        controller.submit().await;

        assert_eq!(controller.state().error.as_deref(), Some(REQUEST_FAILED_MESSAGE));
        assert_eq!(controller.state().result, None);
        assert!(!controller.state().loading);
        assert_eq!(controller.state().form.model, "CNN");
    }

    #[tokio::test]
    async fn malformed_body_sets_generic_error() {
        let mut controller = PredictionFormController::new(ScriptedService::answering(
            r#"{"CNN": {"date": "2024-03-07"}}"#,
        ));
        fill(&mut controller, "CNN");
        controller.submit().await;

        assert_eq!(controller.state().error.as_deref(), Some(REQUEST_FAILED_MESSAGE));
        assert_eq!(controller.state().result, None);
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn reset_after_success_clears_state() {
        let mut controller = PredictionFormController::new(ScriptedService::answering(CNN_BODY));
        fill(&mut controller, "CNN");
        controller.submit().await;
        assert!(controller.state().result.is_some());

        controller.reset();
        assert_eq!(controller.state().form, FormState::default());
        assert_eq!(controller.state().result, None);
        assert_eq!(controller.state().error, None);
        assert!(controller.state().visible_result().is_none());
        assert_eq!(controller.service().seen.borrow().len(), 1);
    }
}
