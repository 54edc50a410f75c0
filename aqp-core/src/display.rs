//! Table rows shown for each model in a prediction result.

use crate::prediction::{ModelOutcome, PollutantReadings, PredictionResult};

/// Label of the echoed date row.
pub const DATE_LABEL: &str = "Prediction Date:";

/// Format a reading with exactly four decimals, rounding halves away from zero.
///
/// `{:.4}` rounds on the exact binary value, which only differs from
/// half-away-from-zero on exact ties. A tie at the fifth decimal is dyadic
/// only when `32 * |value|` is an odd integer, so those are handled by hand.
pub fn format_reading(value: f64) -> String {
    if is_exact_tie(value) {
        round_tie_away_from_zero(value)
    } else {
        format!("{:.4}", value)
    }
}

fn is_exact_tie(value: f64) -> bool {
    let scaled = value.abs() * 32.0;
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// `{:.5}` is exact for a tie and ends in `5`; drop it and carry one upward.
fn round_tie_away_from_zero(value: f64) -> String {
    let exact = format!("{:.5}", value.abs());
    let mut digits: Vec<u8> = exact.as_bytes()[..exact.len() - 1].to_vec();

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        match *digit {
            b'.' => continue,
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, String::from_utf8_lossy(&digits))
}

/// A label/value pair in a prediction table.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ReadingRow {
    pub label: &'static str,
    pub value: String,
}

/// Rendered form of one model's outcome.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ModelBlock {
    Error(String),
    Table(Vec<ReadingRow>),
}

/// The date row followed by the six pollutant rows, in display order.
pub fn reading_rows(date: &str, readings: &PollutantReadings) -> Vec<ReadingRow> {
    let pollutants = [
        ("PM2.5 (μg/m3):", readings.pm25),
        ("PM10 (μg/m3):", readings.pm10),
        ("SO2 (ppm):", readings.so2),
        ("CO (ppm):", readings.co),
        ("O3 (ppb):", readings.o3),
        ("NO2 (ppm):", readings.no2),
    ];
    let mut rows = Vec::with_capacity(pollutants.len() + 1);
    rows.push(ReadingRow {
        label: DATE_LABEL,
        value: date.to_string(),
    });
    rows.extend(pollutants.into_iter().map(|(label, value)| ReadingRow {
        label,
        value: format_reading(value),
    }));
    rows
}

impl ModelBlock {
    pub fn from_outcome(outcome: &ModelOutcome) -> Self {
        match outcome {
            ModelOutcome::Failed { error } => ModelBlock::Error(error.clone()),
            ModelOutcome::Predicted { date, prediction } => {
                ModelBlock::Table(reading_rows(date, prediction))
            }
        }
    }
}

/// One `(model, block)` pair per entry, in response order.
pub fn result_blocks(result: &PredictionResult) -> Vec<(String, ModelBlock)> {
    result
        .iter()
        .map(|(model, outcome)| (model.to_string(), ModelBlock::from_outcome(outcome)))
        .collect()
}
