//! Air Quality Predictor
//!
//! Single page: a date and model form on the right, a project description on
//! the left. Submitting posts `{model, date}` to the prediction service and
//! renders one table of pollutant readings per model in the response.
//!
//! The service endpoint is resolved once here and shared through `UiState`.
//! Set `AQP_API_BASE_URL` when building to point at another backend.

use aqp_core::config::ApiConfig;
use aqp_ui::components::{AboutPanel, ErrorDisplay, PredictionForm, ResultPanel};
use aqp_ui::state::UiState;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting Air Quality Predictor");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("air-quality-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| UiState::new(ApiConfig::resolve()));

    rsx! {
        div {
            class: "App",
            style: "font-family: system-ui, -apple-system, sans-serif; padding: 16px;",
            div {
                class: "layout",
                style: "max-width: 1100px; margin: 0 auto; display: flex; gap: 24px; flex-wrap: wrap;",

                AboutPanel {}

                div {
                    class: "container",
                    style: "flex: 1; min-width: 320px;",
                    h1 { "Air Quality Predictor 🌏" }

                    PredictionForm {}

                    if let Some(err) = state.app.read().error.as_ref() {
                        ErrorDisplay { message: err.clone() }
                    }

                    ResultPanel {}
                }
            }
        }
    }
}
