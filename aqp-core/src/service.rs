use crate::error::{PredictionError, RequestFailure};
use crate::prediction::PredictionResult;
use crate::request::PredictionRequest;
use log::{info, warn};

/// Something that can answer a prediction request.
///
/// The HTTP client in `client` is the real implementation; tests script
/// their own.
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, RequestFailure>;
}

/// Send one request, logging the attempt and any failure. No retry.
pub async fn execute<S: PredictionService>(
    service: &S,
    request: &PredictionRequest,
) -> Result<PredictionResult, PredictionError> {
    info!(
        "Requesting prediction for model {} on {}",
        request.model, request.date
    );
    match service.predict(request).await {
        Ok(result) => {
            info!("Received prediction for {} model(s)", result.len());
            Ok(result)
        }
        Err(failure) => {
            warn!("Prediction request for {} failed: {}", request.model, failure);
            Err(failure.into())
        }
    }
}
