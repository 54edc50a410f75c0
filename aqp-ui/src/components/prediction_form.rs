//! The date/model form and its submit control.

use crate::actions;
use crate::components::{ModelSelector, NumberInput};
use crate::state::UiState;
use aqp_core::form::FormField;
use dioxus::prelude::*;

/// Year, month, day and model inputs with the submit button.
///
/// While loading the button only changes its label and stays clickable. A
/// second submit supersedes the first through the generation counter.
#[component]
pub fn PredictionForm() -> Element {
    let state = use_context::<UiState>();
    let label = state.app.read().submit_label();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        actions::submit(state);
    };

    rsx! {
        form {
            class: "form",
            style: "display: flex; flex-direction: column; gap: 8px;",
            onsubmit: on_submit,
            NumberInput { field: FormField::Year }
            NumberInput { field: FormField::Month }
            NumberInput { field: FormField::Day }
            ModelSelector {}
            button {
                r#type: "submit",
                class: "submit-button",
                style: "padding: 10px; font-size: 15px; cursor: pointer;",
                "{label}"
            }
        }
    }
}
