//! Numeric input bound to one date field.

use crate::state::UiState;
use aqp_core::form::FormField;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    /// Year, month or day
    pub field: FormField,
}

/// A `type=number` input mirroring `field`. The min/max attributes are
/// browser hints only.
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let mut state = use_context::<UiState>();
    let field = props.field;
    let value = state.app.read().form.get(field).to_string();
    let (min, max) = field.bounds().unwrap_or((0, u32::MAX));

    let on_input = move |evt: Event<FormData>| {
        state.set_field(field, evt.value());
    };

    rsx! {
        input {
            class: "input",
            name: field.name(),
            r#type: "number",
            placeholder: field.placeholder(),
            value: "{value}",
            min: "{min}",
            max: "{max}",
            required: true,
            style: "padding: 8px; font-size: 14px;",
            oninput: on_input,
        }
    }
}
