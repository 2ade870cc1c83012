//! Active-alerts payloads from `/alerts/active/area/{state}`.

use serde::Deserialize;

use super::lenient;

/// Top-level alerts response: a GeoJSON feature collection.
#[derive(Debug, Deserialize)]
pub struct AlertsResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub features: Option<Vec<AlertFeature>>,
}

/// One GeoJSON-style record in an alerts response.
#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<AlertProperties>,
}

/// Alert metadata carried in a feature's `properties` map.
#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default, deserialize_with = "lenient")]
    pub event: Option<String>,
    #[serde(default, rename = "areaDesc", deserialize_with = "lenient")]
    pub area_desc: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub instruction: Option<String>,
}
