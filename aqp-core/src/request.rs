use crate::error::PredictionError;
use crate::form::FormState;
use serde::Serialize;

/// Body of `POST /get_prediction`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PredictionRequest {
    pub model: String,
    /// `YYYY-MM-DD`, month and day left-padded with `0` to two characters.
    pub date: String,
}

/// Build the request date from the raw form inputs.
///
/// Padding is textual: `"3"` becomes `"03"`, `""` becomes `"00"`, and
/// anything already two or more characters long is left alone. There is no
/// calendar check, so `2024-02-31` goes out as typed.
pub fn format_date(year: &str, month: &str, day: &str) -> String {
    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

impl PredictionRequest {
    /// Build a request from the form. Fails only when no model is selected.
    pub fn from_form(form: &FormState) -> Result<Self, PredictionError> {
        let date = format_date(&form.year, &form.month, &form.day);
        if form.model.is_empty() {
            return Err(PredictionError::Validation);
        }
        Ok(PredictionRequest {
            model: form.model.clone(),
            date,
        })
    }
}
