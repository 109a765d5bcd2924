//! Static configuration: API key and endpoint

use std::fmt;

use reqwest::Url;

use crate::error::ConfigError;

/// Default WeatherAPI.com base URL
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1/";

/// Path of the only endpoint we call, relative to the base URL
pub const CURRENT_WEATHER_PATH: &str = "current.json";

/// Fixed configuration supplied at startup
#[derive(Clone)]
pub struct WeatherConfig {
    api_key: String,
    endpoint: Url,
}

impl WeatherConfig {
    /// Validate `base_url` and resolve the `current.json` endpoint against it.
    ///
    /// A missing trailing slash is added so that `https://host/v1` and
    /// `https://host/v1/` both resolve to `https://host/v1/current.json`.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", base.scheme())));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(CURRENT_WEATHER_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            endpoint,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Fully resolved `current.json` URL, without query
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}
