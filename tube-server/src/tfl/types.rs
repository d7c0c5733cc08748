//! TfL unified API response DTOs.
//!
//! Only the fields the gateway reads are modelled. Everything is optional
//! because the API omits fields rather than sending nulls.

use serde::Deserialize;

/// A predicted arrival from `/StopPoint/{id}/arrivals`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    /// Display name of the line, e.g. "Hammersmith & City".
    pub line_name: Option<String>,

    /// Identifier of the line, e.g. "hammersmith-city".
    pub line_id: Option<String>,

    /// Where the train terminates.
    pub destination_name: Option<String>,

    /// Seconds until the train reaches the stop.
    pub time_to_station: Option<f64>,
}

/// One line's entry from `/line/mode/tube/status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatusEntry {
    /// Line identifier, e.g. "waterloo-city".
    pub id: Option<String>,

    /// Display name, e.g. "Waterloo & City".
    pub name: Option<String>,

    /// Current statuses, most significant first.
    #[serde(default)]
    pub line_statuses: Vec<LineStatus>,
}

/// A single status record for a line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    /// Human-readable severity, e.g. "Good Service", "Minor Delays".
    pub status_severity_description: Option<String>,
}

/// Response from `/line/{id}/route/sequence/{direction}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSequence {
    /// Stations served in this direction, in route order.
    #[serde(default)]
    pub stations: Vec<MatchedStop>,
}

/// A station within a route sequence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedStop {
    /// Display name, e.g. "Baker Street Underground Station".
    pub name: Option<String>,
}
