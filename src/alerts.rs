//! Active-alerts pipeline: state code in, rendered text blocks out.

use anyhow::{Context, Result};
use tracing::info;

use crate::client::UpstreamClient;
use crate::models::{AlertFeature, AlertsResponse};

/// Separator between rendered blocks, on its own line.
pub const BLOCK_SEPARATOR: &str = "\n---\n";

/// Fetch active alerts for a US state and render them as text.
///
/// Only the upstream fetch itself can fail; missing or malformed response
/// pieces degrade to fixed texts instead.
pub async fn get_alerts(client: &UpstreamClient, state: &str) -> Result<String> {
    info!("Getting alerts for state: {state}");

    let url = format!("{}/alerts/active/area/{}", client.base_url(), state);
    let data: AlertsResponse = client.fetch(&url).await.context("Unable to fetch alerts")?;

    Ok(render_alerts(&data))
}

fn render_alerts(data: &AlertsResponse) -> String {
    let Some(features) = &data.features else {
        return "No alerts found or invalid response format.".to_string();
    };

    if features.is_empty() {
        return "No active alerts for this state.".to_string();
    }

    let alerts: Vec<String> = features.iter().map(format_alert).collect();
    alerts.join(BLOCK_SEPARATOR)
}

/// Render one alert feature into a fixed-field block.
///
/// Every property is optional upstream; each gets its own placeholder.
fn format_alert(feature: &AlertFeature) -> String {
    let Some(props) = &feature.properties else {
        return "Error: Invalid alert format".to_string();
    };

    let event = text_or(&props.event, "Unknown");
    let area = text_or(&props.area_desc, "Unknown");
    let severity = text_or(&props.severity, "Unknown");
    let description = text_or(&props.description, "No description available");
    let instruction = text_or(&props.instruction, "No specific instructions provided");

    format!(
        "\nEvent: {event}\nArea: {area}\nSeverity: {severity}\nDescription: {description}\nInstructions: {instruction}\n"
    )
}

/// Treat absent and empty strings alike; the upstream sends both.
fn text_or<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
    match field.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    }
}
