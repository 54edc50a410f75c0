//! Dropdown selector for choosing a prediction model.

use crate::state::UiState;
use aqp_core::form::{FormField, MODEL_CHOICES};
use dioxus::prelude::*;

/// Model dropdown. The empty placeholder option is what triggers the
/// "Please select a model." validation error on submit.
#[component]
pub fn ModelSelector() -> Element {
    let mut state = use_context::<UiState>();
    let selected = state.app.read().form.model.clone();

    let on_change = move |evt: Event<FormData>| {
        state.set_field(FormField::Model, evt.value());
    };

    rsx! {
        select {
            class: "input",
            name: FormField::Model.name(),
            required: true,
            style: "padding: 8px; font-size: 14px;",
            onchange: on_change,
            option {
                value: "",
                selected: selected.is_empty(),
                {FormField::Model.placeholder()}
            }
            for choice in MODEL_CHOICES.iter() {
                option {
                    value: "{choice.value}",
                    selected: choice.value == selected,
                    "{choice.label}"
                }
            }
        }
    }
}
