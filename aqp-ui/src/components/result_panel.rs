//! Prediction results and the reset button.

use crate::actions;
use crate::components::ReadingTable;
use crate::state::UiState;
use aqp_core::display::{result_blocks, ModelBlock};
use dioxus::prelude::*;

/// One block per model in the response, in the order the service sent them.
/// Hidden while a request is loading or when there is no result.
#[component]
pub fn ResultPanel() -> Element {
    let state = use_context::<UiState>();
    let Some(blocks) = state.app.read().visible_result().map(result_blocks) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "result-container",
            h2 {
                class: "result-title",
                style: "margin-top: 20px;",
                "Prediction Result"
            }
            for (model, block) in blocks {
                div {
                    key: "{model}",
                    h3 { "Model: {model}" }
                    {render_block(block)}
                }
            }
        }
        button {
            class: "reset-button",
            style: "margin-top: 12px; padding: 10px; cursor: pointer;",
            onclick: move |_| actions::reset(state),
            "Reset"
        }
    }
}

fn render_block(block: ModelBlock) -> Element {
    match block {
        ModelBlock::Error(message) => rsx! {
            p { "{message}" }
        },
        ModelBlock::Table(rows) => rsx! {
            ReadingTable { rows }
        },
    }
}
