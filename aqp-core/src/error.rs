/// Error types for the prediction client
use thiserror::Error;

/// Shown when submit is attempted without a model selected.
pub const VALIDATION_MESSAGE: &str = "Please select a model.";

/// Shown for every request failure, whatever the cause.
pub const REQUEST_FAILED_MESSAGE: &str = "Error predicting air quality. Please try again later.";

/// Why a request to the prediction service failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestFailure {
    /// Could not reach the service or read its body
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body did not match the prediction schema
    #[error("malformed response: {0}")]
    Schema(String),
}

/// Main error type for a prediction attempt
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// No model selected; nothing was sent
    #[error("no model selected")]
    Validation,

    /// The outbound request failed
    #[error("prediction request failed: {0}")]
    Request(#[from] RequestFailure),
}

impl PredictionError {
    /// The fixed message shown in the UI. Request failures are not told apart.
    pub fn user_message(&self) -> &'static str {
        match self {
            PredictionError::Validation => VALIDATION_MESSAGE,
            PredictionError::Request(_) => REQUEST_FAILED_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for RequestFailure {
    fn from(err: serde_json::Error) -> Self {
        RequestFailure::Schema(err.to_string())
    }
}

/// Type alias for Results using PredictionError
pub type Result<T> = std::result::Result<T, PredictionError>;
