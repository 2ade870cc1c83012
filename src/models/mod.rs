//! Typed views of the upstream JSON payloads.
//!
//! Every field an upstream may omit or mangle is optional here; consumers
//! supply a fallback at the point of use instead of failing the request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod alerts;
pub mod forecast;
pub mod geocoding;

pub use alerts::{AlertFeature, AlertProperties, AlertsResponse};
pub use forecast::{
    ForecastPeriod, ForecastProperties, ForecastResponse, PointsProperties, PointsResponse,
};
pub use geocoding::GeocodingResult;

/// Decode a field as `Some(T)` when it has the expected shape and `None`
/// otherwise, instead of failing the whole payload.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
