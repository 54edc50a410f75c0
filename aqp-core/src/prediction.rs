//! Response schema of the prediction service.
//!
//! The service answers with a JSON object keyed by model name. Each entry is
//! either `{"error": ".."}` or `{"date": "..", "prediction": {..six readings..}}`.
//! The body is parsed into these types as soon as it arrives, so a missing
//! reading shows up as a request failure rather than a render fault.

use crate::error::RequestFailure;
use serde::Deserialize;
use serde_json::Value;

/// Predicted pollutant concentrations for one day.
#[derive(Debug, PartialEq, Clone, Copy, Deserialize)]
pub struct PollutantReadings {
    /// μg/m3
    #[serde(rename = "PM2.5")]
    pub pm25: f64,
    /// μg/m3
    #[serde(rename = "PM10")]
    pub pm10: f64,
    /// ppm
    #[serde(rename = "SO2")]
    pub so2: f64,
    /// ppm
    #[serde(rename = "CO")]
    pub co: f64,
    /// ppb
    #[serde(rename = "O3")]
    pub o3: f64,
    /// ppm
    #[serde(rename = "NO2")]
    pub no2: f64,
}

/// What the service returned for a single model.
#[derive(Debug, PartialEq, Clone)]
pub enum ModelOutcome {
    Failed {
        error: String,
    },
    Predicted {
        date: String,
        prediction: PollutantReadings,
    },
}

/// An entry as it appears on the wire, before deciding which outcome it is.
#[derive(Deserialize)]
struct RawOutcome {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    prediction: Option<PollutantReadings>,
}

impl TryFrom<RawOutcome> for ModelOutcome {
    type Error = String;

    /// A non-empty `error` wins. An empty one counts as absent, so the entry
    /// must then carry a full prediction.
    fn try_from(raw: RawOutcome) -> Result<Self, Self::Error> {
        match raw {
            RawOutcome {
                error: Some(error), ..
            } if !error.is_empty() => Ok(ModelOutcome::Failed { error }),
            RawOutcome {
                date: Some(date),
                prediction: Some(prediction),
                ..
            } => Ok(ModelOutcome::Predicted { date, prediction }),
            RawOutcome { date: None, .. } => Err("missing `date`".to_string()),
            RawOutcome { .. } => Err("missing `prediction`".to_string()),
        }
    }
}

/// Parsed response body, in the order the service listed the models.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PredictionResult {
    entries: Vec<(String, ModelOutcome)>,
}

impl PredictionResult {
    /// Parse a raw response body.
    pub fn from_json(body: &str) -> Result<Self, RequestFailure> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Convert an already-decoded JSON value. Any entry that is neither an
    /// error nor a complete prediction rejects the whole response.
    pub fn from_value(value: Value) -> Result<Self, RequestFailure> {
        let Value::Object(map) = value else {
            return Err(RequestFailure::Schema(
                "expected an object keyed by model name".to_string(),
            ));
        };
        let mut entries = Vec::with_capacity(map.len());
        for (model, entry) in map {
            let outcome = RawOutcome::deserialize(entry)
                .map_err(|e| e.to_string())
                .and_then(ModelOutcome::try_from)
                .map_err(|e| RequestFailure::Schema(format!("entry for model {}: {}", model, e)))?;
            entries.push((model, outcome));
        }
        Ok(PredictionResult { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelOutcome)> {
        self.entries
            .iter()
            .map(|(model, outcome)| (model.as_str(), outcome))
    }

    pub fn get(&self, model: &str) -> Option<&ModelOutcome> {
        self.iter()
            .find(|(name, _)| *name == model)
            .map(|(_, outcome)| outcome)
    }

    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(model, _)| model.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
