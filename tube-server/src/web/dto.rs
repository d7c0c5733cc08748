//! Response bodies that aren't shaped upstream payloads.

use serde::Serialize;

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Body of the landing page: what the gateway offers and where.
#[derive(Debug, Serialize)]
pub struct LandingPage {
    #[serde(rename = "Options")]
    pub options: &'static str,
    #[serde(rename = "Endpoints")]
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    #[serde(rename = "/status/")]
    pub status: &'static str,
    #[serde(rename = "/arrivals/INSERT_STATION_NAME")]
    pub arrivals: &'static str,
    #[serde(rename = "/lines/INSERT_STATION_NAME")]
    pub lines: &'static str,
    #[serde(rename = "/stations/INSERT_LINE_NAME")]
    pub stations: &'static str,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self {
            options: "To access TFL data, please use the following URL endpoints",
            endpoints: Endpoints {
                status: "To get the status of all lines",
                arrivals: "to get arrival information for a given station",
                lines: "to get associated lines with a given station",
                stations: "to get associated stations with a given line",
            },
        }
    }
}
