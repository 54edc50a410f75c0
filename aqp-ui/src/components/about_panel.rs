use dioxus::prelude::*;

#[component]
pub fn AboutPanel() -> Element {
    rsx! {
        div {
            class: "description",
            style: "flex: 1; padding: 16px; color: #333; line-height: 1.5;",
            h2 { "About This Project" }
            p {
                "The Urban Air Quality Predictor estimates pollutant levels for a given day "
                "using deep learning models: CNN, RNN, GRU, LSTM, ResNet and ReXNet, each "
                "also available with an attention mechanism. Enter a year, month and day, "
                "pick a model, and the service returns predicted PM2.5, PM10, SO2, CO, O3 "
                "and NO2 concentrations. The models were trained on pollutant and weather "
                "data from South Tangerang, with an average training accuracy of 97.745%."
            }
        }
    }
}
