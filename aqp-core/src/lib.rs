//! Core types and client plumbing for the air quality predictor.
//!
//! This crate provides:
//! - `form`: the four form fields and the model catalogue
//! - `request`: the outbound payload and its date formatting
//! - `prediction`: the response schema, parsed at the network boundary
//! - `state`: `AppState` and its pure transitions
//! - `display`: table rows for a prediction, four-decimal formatting
//! - `config`: the prediction endpoint, resolved once at startup
//! - `service` / `client`: the `PredictionService` seam and its HTTP implementation
//! - `controller`: sequential submit/reset orchestration over a service

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod form;
pub mod prediction;
pub mod request;
pub mod service;
pub mod state;

#[cfg(feature = "api")]
pub mod client;

pub use error::{PredictionError, Result};
