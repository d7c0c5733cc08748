//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::gateway::GatewayError;
use crate::shape::{ArrivalsByLine, LineStatusReport, StationHints};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health))
        .route("/arrivals/:station", get(arrivals).post(arrivals))
        .route("/lines/:station", get(lines).post(lines))
        .route("/status", get(status))
        .route("/status/", get(status))
        .route("/stations/:line", get(stations).post(stations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Directory of the other endpoints.
async fn landing_page() -> Json<LandingPage> {
    Json(LandingPage::default())
}

/// Upcoming arrivals at a station, grouped by line.
async fn arrivals(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Result<Json<ArrivalsByLine>, AppError> {
    Ok(Json(state.gateway.arrivals(&station).await?))
}

/// Lines serving a station.
async fn lines(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.gateway.lines(&station).await?))
}

/// Status of every tube line.
async fn status(State(state): State<AppState>) -> Result<Json<LineStatusReport>, AppError> {
    Ok(Json(state.gateway.status().await?))
}

/// Stations along a line.
async fn stations(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> Result<Json<StationHints>, AppError> {
    Ok(Json(state.gateway.stations(&line).await?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Upstream refused the request; `message` is its reason phrase
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::StationNotFound | GatewayError::LineNotFound => AppError::NotFound {
                message: e.to_string(),
            },
            GatewayError::Upstream { reason, .. } => AppError::BadRequest { message: reason },
            GatewayError::UpstreamUnavailable(_) => AppError::BadGateway {
                message: e.to_string(),
            },
            GatewayError::MissingStationCode { .. } | GatewayError::Store(_) => {
                AppError::Internal {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                tracing::warn!(%message, "upstream rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => {
                tracing::warn!(%message, "upstream unavailable");
                (StatusCode::BAD_GATEWAY, message)
            }
            AppError::Internal { message } => {
                tracing::error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
