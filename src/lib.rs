//! `weathergate` - plain-text HTTP gateway for National Weather Service data.
//!
//! Proxies the NWS alerts and forecast endpoints (plus Nominatim geocoding
//! for city lookups) and reformats the JSON responses as human-readable
//! text blocks.

pub mod alerts;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use client::UpstreamClient;
pub use config::AppConfig;
pub use error::{FetchError, GeocodeError};
pub use geocode::Geocoder;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
