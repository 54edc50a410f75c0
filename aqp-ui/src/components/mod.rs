//! Reusable Dioxus RSX components for the predictor page.

mod about_panel;
mod error_display;
mod model_selector;
mod number_input;
mod prediction_form;
mod reading_table;
mod result_panel;

pub use about_panel::AboutPanel;
pub use error_display::ErrorDisplay;
pub use model_selector::ModelSelector;
pub use number_input::NumberInput;
pub use prediction_form::PredictionForm;
pub use reading_table::ReadingTable;
pub use result_panel::ResultPanel;
