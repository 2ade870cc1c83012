//! Forecast pipelines: coordinates (or a city name) in, period blocks out.
//!
//! The weather API separates "metadata for a point" from the forecast
//! itself, so a coordinate pair resolves in two upstream hops.

use anyhow::{Context, Result};
use tracing::info;

use crate::alerts::BLOCK_SEPARATOR;
use crate::client::UpstreamClient;
use crate::geocode::Geocoder;
use crate::models::{ForecastPeriod, ForecastResponse, PointsResponse};

/// Fetch and render the forecast for a coordinate pair.
///
/// A nesting level missing from either upstream payload yields a fixed
/// text response rather than an error; the success-path formats depend on
/// that soft-fail behavior.
pub async fn get_forecast(client: &UpstreamClient, lat: f64, lon: f64) -> Result<String> {
    info!("Getting forecast for coordinates: {lat}, {lon}");

    let points_url = format!("{}/points/{lat},{lon}", client.base_url());
    let points: PointsResponse = client
        .fetch(&points_url)
        .await
        .context("Unable to fetch forecast data for this location")?;

    let Some(properties) = points.properties else {
        return Ok("Invalid response format from weather API.".to_string());
    };
    let Some(forecast_url) = properties.forecast else {
        return Ok("Unable to retrieve forecast URL.".to_string());
    };

    let forecast: ForecastResponse = client
        .fetch(&forecast_url)
        .await
        .context("Unable to fetch detailed forecast")?;

    Ok(render_forecast(&forecast))
}

/// Geocode a city (optionally scoped to a state), then forecast there.
pub async fn get_forecast_by_city(
    client: &UpstreamClient,
    geocoder: &Geocoder,
    city: &str,
    state: Option<&str>,
) -> Result<String> {
    let (lat, lon) = geocoder
        .resolve(city, state)
        .await
        .with_context(|| match state {
            Some(state) => format!("Unable to find coordinates for {city}, {state}"),
            None => format!("Unable to find coordinates for {city}"),
        })?;

    get_forecast(client, lat, lon).await
}

fn render_forecast(forecast: &ForecastResponse) -> String {
    let Some(properties) = &forecast.properties else {
        return "Invalid forecast data format.".to_string();
    };
    let Some(periods) = &properties.periods else {
        return "Invalid forecast periods data.".to_string();
    };

    let blocks: Vec<String> = periods.iter().map(format_period).collect();
    blocks.join(BLOCK_SEPARATOR)
}

/// Render one forecast period.
///
/// Missing fields display as their zero values rather than failing the
/// whole render; the temperature rounds to a whole degree.
fn format_period(period: &ForecastPeriod) -> String {
    let name = period.name.as_deref().unwrap_or_default();
    let temperature = period.temperature.unwrap_or_default();
    let unit = period.temperature_unit.as_deref().unwrap_or_default();
    let wind_speed = period.wind_speed.as_deref().unwrap_or_default();
    let wind_direction = period.wind_direction.as_deref().unwrap_or_default();
    let detail = period.detailed_forecast.as_deref().unwrap_or_default();

    format!(
        "\n{name}:\nTemperature: {temperature:.0}\u{00b0}{unit}\nWind: {wind_speed} {wind_direction}\nForecast: {detail}\n"
    )
}
