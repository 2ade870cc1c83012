//! Error types for upstream fetches and geocoding.

use thiserror::Error;

/// Failures talking to an upstream service.
///
/// Transport, status, and decode failures stay distinct here; pipelines
/// collapse all three into an "Unable to fetch ..." context before they
/// reach the HTTP boundary.
#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS, connect, or timeout failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("API request failed with status: {0}")]
    Status(u16),

    /// Body arrived but was not the JSON shape we asked for.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Failures resolving a place query to coordinates.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The service answered, but with an empty candidate list.
    #[error("no results found for location: {0}")]
    NoResults(String),

    /// A candidate arrived whose lat/lon string is not a number.
    #[error("invalid coordinate `{value}` in geocoding result")]
    Coordinate {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
