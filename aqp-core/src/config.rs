//! Location of the prediction service.
//!
//! Resolved once when the app starts and shared from there. The browser has
//! no process environment, so the override is read at build time.

/// Backend the app talks to unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://air-quality-pred-backend.vercel.app";

/// Path of the prediction endpoint under the base URL.
pub const PREDICTION_PATH: &str = "/get_prediction";

/// Build-time variable that replaces [`DEFAULT_BASE_URL`].
pub const BASE_URL_VAR: &str = "AQP_API_BASE_URL";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        ApiConfig {
            base_url: base_url.to_string(),
            path: PREDICTION_PATH.to_string(),
        }
    }

    /// Resolve the endpoint from `AQP_API_BASE_URL` as seen by the compiler,
    /// falling back to the hosted backend.
    pub fn resolve() -> Self {
        Self::from_override(option_env!("AQP_API_BASE_URL"))
    }

    fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => {
                log::info!("Using prediction service from {}: {}", BASE_URL_VAR, url);
                ApiConfig::new(url)
            }
            None => ApiConfig::default(),
        }
    }

    /// Full URL of the prediction endpoint, joined with a single `/`.
    pub fn prediction_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}
