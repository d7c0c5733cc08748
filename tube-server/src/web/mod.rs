//! HTTP surface of the gateway.
//!
//! Every response body is JSON, including errors.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
