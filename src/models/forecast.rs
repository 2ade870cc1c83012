//! Forecast payloads: point metadata and the forecast resource it links to.

use serde::Deserialize;

use super::lenient;

/// Point metadata from `/points/{lat},{lon}`.
///
/// Describes the forecast grid cell for a coordinate and links to the
/// actual forecast resource.
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// URL of the forecast resource for this grid cell.
    #[serde(default, deserialize_with = "lenient")]
    pub forecast: Option<String>,
}

/// Forecast resource fetched from the URL in the point metadata.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    #[serde(default, deserialize_with = "lenient")]
    pub periods: Option<Vec<ForecastPeriod>>,
}

/// One forecast time window ("Tonight", "Monday", ...).
#[derive(Debug, Default, Deserialize)]
pub struct ForecastPeriod {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature: Option<f64>,
    #[serde(default, rename = "temperatureUnit", deserialize_with = "lenient")]
    pub temperature_unit: Option<String>,
    #[serde(default, rename = "windSpeed", deserialize_with = "lenient")]
    pub wind_speed: Option<String>,
    #[serde(default, rename = "windDirection", deserialize_with = "lenient")]
    pub wind_direction: Option<String>,
    #[serde(default, rename = "detailedForecast", deserialize_with = "lenient")]
    pub detailed_forecast: Option<String>,
}
