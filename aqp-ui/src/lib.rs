//! Dioxus front end for the air quality predictor.
//!
//! This crate provides:
//! - `state`: `UiState`, the context that holds the current `AppState`
//! - `actions`: submit and reset, applied as `AppState` transitions
//! - `components`: the form, result tables and page chrome

pub mod actions;
pub mod components;
pub mod state;
