//! Process-wide configuration, fixed at startup and never mutated.

use std::env;
use std::time::Duration;

/// Identifying header sent on every upstream request.
pub const USER_AGENT: &str = concat!("weathergate/", env!("CARGO_PKG_VERSION"));

/// Timeout for National Weather Service calls.
pub const WEATHER_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for Nominatim geocoding calls.
pub const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.weather.gov";
const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Immutable server configuration, constructed once at process start.
///
/// The base URLs are not part of the public configuration surface; they
/// exist so tests can point the clients at a stub upstream.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Base URL of the weather data service.
    pub weather_base_url: String,
    /// Base URL of the geocoding service.
    pub geocoder_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            geocoder_base_url: DEFAULT_GEOCODER_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// `PORT` is the only surface; a missing or unparsable value falls back
    /// to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            ..Self::default()
        }
    }
}
