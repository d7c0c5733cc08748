//! TfL unified API client.
//!
//! The gateway makes three upstream queries: predicted arrivals at a stop,
//! the status of every tube line, and the outbound station sequence of a
//! line. Any status other than 200 surfaces as [`TflError::Status`] carrying
//! the reason phrase the upstream sent.

mod api;
mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use api::TransitApi;
pub use client::{TflClient, TflConfig};
pub use error::TflError;
pub use types::{Arrival, LineStatus, LineStatusEntry, MatchedStop, RouteSequence};
