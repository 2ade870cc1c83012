//! Forward geocoding via the OSM Nominatim service.

use reqwest::Client;
use tracing::debug;

use crate::config::{AppConfig, GEOCODE_TIMEOUT, USER_AGENT};
use crate::error::{FetchError, GeocodeError};
use crate::models::GeocodingResult;

/// Client for the Nominatim search endpoint.
///
/// Separate from [`crate::UpstreamClient`] because geocoding runs on a
/// tighter timeout and speaks plain JSON rather than geo-JSON.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(GEOCODE_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.geocoder_base_url.clone(),
        })
    }

    /// Resolve a free-text place query to coordinates.
    ///
    /// Only the first candidate is used; Nominatim's own ranking decides
    /// which one that is. No disambiguation.
    pub async fn resolve(
        &self,
        city: &str,
        state: Option<&str>,
    ) -> Result<(f64, f64), GeocodeError> {
        let query = match state {
            Some(state) => format!("{city}, {state}"),
            None => city.to_string(),
        };

        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(&query)
        );
        debug!("Geocoding {query:?}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()).into());
        }

        let results: Vec<GeocodingResult> =
            response.json().await.map_err(FetchError::Decode)?;

        let Some(first) = results.into_iter().next() else {
            return Err(GeocodeError::NoResults(query));
        };

        let lat = parse_coordinate(&first.lat)?;
        let lon = parse_coordinate(&first.lon)?;
        Ok((lat, lon))
    }
}

fn parse_coordinate(value: &str) -> Result<f64, GeocodeError> {
    value.parse().map_err(|source| GeocodeError::Coordinate {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("39.7456").unwrap(), 39.7456);
        assert_eq!(parse_coordinate("-97.0892").unwrap(), -97.0892);
    }

    #[test]
    fn test_parse_coordinate_rejects_garbage() {
        let err = parse_coordinate("north-ish").unwrap_err();
        assert!(matches!(err, GeocodeError::Coordinate { .. }));
        assert!(err.to_string().contains("north-ish"));
    }

    #[test]
    fn test_parse_coordinate_rejects_empty() {
        // A candidate with a missing lat deserializes to "" and must not
        // silently become a coordinate.
        assert!(parse_coordinate("").is_err());
    }
}
