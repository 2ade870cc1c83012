//! Nominatim search payloads.

use serde::Deserialize;

/// One candidate from the Nominatim search endpoint.
///
/// Coordinates arrive as numeric strings and are parsed downstream; a
/// missing field parses as the empty string and fails there.
#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
}
