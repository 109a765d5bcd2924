//! WeatherAPI.com client
//!
//! One endpoint, one request shape: `GET current.json?key=..&q=..`.
//! The HTTP transport sits behind [`WeatherApi`] so the store can be driven
//! by a fake in tests.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::config::WeatherConfig;
use crate::error::TransportError;
use crate::model::WeatherSnapshot;

/// Source of current weather snapshots
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Fetch current conditions for `city`.
    ///
    /// `city` is forwarded untouched, an empty string included; whatever the
    /// remote end makes of it is passed back as-is.
    async fn fetch_current_weather(
        &self,
        api_key: &str,
        city: &str,
    ) -> Result<WeatherSnapshot, TransportError>;
}

/// reqwest-backed [`WeatherApi`]
#[derive(Debug, Clone)]
pub struct HttpWeatherClient {
    http: Client,
    endpoint: Url,
}

impl HttpWeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint().clone(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherApi for HttpWeatherClient {
    async fn fetch_current_weather(
        &self,
        api_key: &str,
        city: &str,
    ) -> Result<WeatherSnapshot, TransportError> {
        debug!(endpoint = %self.endpoint, city, "Requesting current weather");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("key", api_key), ("q", city)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        decode_response(status, &body)
    }
}

/// Turn a raw HTTP outcome into a snapshot.
///
/// Success requires both a 2xx status and a non-empty body that decodes.
pub fn decode_response(status: StatusCode, body: &[u8]) -> Result<WeatherSnapshot, TransportError> {
    if !status.is_success() {
        return Err(TransportError::Status {
            status: status.as_u16(),
        });
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(TransportError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}
