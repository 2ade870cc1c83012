//! HTTP boundary: route table and request handlers.
//!
//! Handlers validate query parameters, invoke one pipeline, and flatten any
//! error into plain text. This is the only place an error becomes a status
//! code.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde::Deserialize;

use crate::client::UpstreamClient;
use crate::config::AppConfig;
use crate::geocode::Geocoder;
use crate::{alerts, forecast};

/// Shared handler state: the upstream clients, built once at startup.
#[derive(Clone)]
pub struct AppState {
    client: UpstreamClient,
    geocoder: Geocoder,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: UpstreamClient::new(config)?,
            geocoder: Geocoder::new(config)?,
        })
    }
}

/// Route table, fixed at startup. Routes are GET-only; axum answers 405 to
/// any other method on a matched path.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/alerts", get(handle_alerts))
        .route("/forecast", get(handle_forecast))
        .route("/forecast/city", get(handle_forecast_by_city))
        .with_state(state)
}

type PlainResponse = (StatusCode, String);

async fn health() -> &'static str {
    "weathergate is running\n"
}

#[derive(Debug, Deserialize)]
struct AlertsParams {
    state: Option<String>,
}

async fn handle_alerts(
    State(app): State<AppState>,
    Query(params): Query<AlertsParams>,
) -> PlainResponse {
    let Some(area) = params.state.filter(|s| !s.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            "State parameter is required".to_string(),
        );
    };

    match alerts::get_alerts(&app.client, &area).await {
        Ok(text) => (StatusCode::OK, text),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching alerts: {err:#}"),
        ),
    }
}

#[derive(Debug, Deserialize)]
struct ForecastParams {
    lat: Option<String>,
    lon: Option<String>,
}

async fn handle_forecast(
    State(app): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> PlainResponse {
    let (lat_raw, lon_raw) = match (
        params.lat.filter(|s| !s.is_empty()),
        params.lon.filter(|s| !s.is_empty()),
    ) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                "Latitude and longitude parameters are required".to_string(),
            );
        }
    };

    let Ok(lat) = lat_raw.parse::<f64>() else {
        return (
            StatusCode::BAD_REQUEST,
            "Invalid latitude value".to_string(),
        );
    };
    let Ok(lon) = lon_raw.parse::<f64>() else {
        return (
            StatusCode::BAD_REQUEST,
            "Invalid longitude value".to_string(),
        );
    };

    match forecast::get_forecast(&app.client, lat, lon).await {
        Ok(text) => (StatusCode::OK, text),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching forecast: {err:#}"),
        ),
    }
}

#[derive(Debug, Deserialize)]
struct CityParams {
    city: Option<String>,
    state: Option<String>,
}

async fn handle_forecast_by_city(
    State(app): State<AppState>,
    Query(params): Query<CityParams>,
) -> PlainResponse {
    let Some(city) = params.city.filter(|c| !c.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            "City parameter is required".to_string(),
        );
    };
    let state = params.state.filter(|s| !s.is_empty());

    match forecast::get_forecast_by_city(&app.client, &app.geocoder, &city, state.as_deref()).await
    {
        Ok(text) => (StatusCode::OK, text),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching forecast: {err:#}"),
        ),
    }
}
