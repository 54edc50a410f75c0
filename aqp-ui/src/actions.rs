//! Event handlers that talk to the prediction service.

use crate::state::UiState;
use aqp_core::service::execute;
use dioxus::prelude::*;

/// Start a submit attempt.
///
/// A validation failure resolves immediately. Otherwise the request runs in
/// a spawned task and its completion is applied under the generation issued
/// here, so a later submit or a reset makes it a no-op.
pub fn submit(mut ui: UiState) {
    let submission = ui.apply(|state| state.apply_submit_start());
    let generation = submission.generation;

    match submission.request {
        Err(err) => ui.finish(generation, Err(err)),
        Ok(request) => {
            let client = (ui.client)();
            spawn(async move {
                let outcome = execute(&client, &request).await;
                ui.finish(generation, outcome);
            });
        }
    }
}

pub fn reset(mut ui: UiState) {
    ui.reset();
}
