//! HTTP client for the National Weather Service API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{AppConfig, USER_AGENT, WEATHER_TIMEOUT};
use crate::error::FetchError;

/// Client for the weather data service.
///
/// Wraps a single `reqwest::Client` carrying the fixed identifying header;
/// every call also asks for geo-JSON, which is what the NWS endpoints speak.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client against the configured base URL.
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(WEATHER_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.weather_base_url.clone(),
        })
    }

    /// Base URL of the weather service.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single GET against `url` and decode the JSON body.
    ///
    /// One attempt only, no retries. A non-2xx status and an undecodable
    /// body are distinct errors from transport failures.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/geo+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{url} answered {status}");
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }
}
