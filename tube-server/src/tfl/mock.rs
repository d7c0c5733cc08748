//! Canned transit data for tests.
//!
//! Serves fixed JSON bodies or error statuses keyed by upstream path, and
//! counts how many queries were made.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use serde::de::DeserializeOwned;

use crate::domain::{StationCode, TubeLine};

use super::api::TransitApi;
use super::client::{LINE_STATUS_PATH, arrivals_path, parse_body, route_sequence_path};
use super::error::TflError;
use super::types::{Arrival, LineStatusEntry, RouteSequence};

/// Transit API double that answers from memory.
#[derive(Default)]
pub struct MockTransitApi {
    bodies: HashMap<String, String>,
    /// Status returned for paths with no reply; 404 when unset.
    fallback: Option<(u16, String)>,
    calls: AtomicUsize,
}

impl MockTransitApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for arrivals at `code`.
    pub fn with_arrivals(self, code: &str, body: serde_json::Value) -> Self {
        let code = StationCode::parse(code).unwrap();
        self.with_body(arrivals_path(&code), body)
    }

    /// Serve `body` for the line status query.
    pub fn with_line_statuses(self, body: serde_json::Value) -> Self {
        self.with_body(LINE_STATUS_PATH.to_string(), body)
    }

    /// Serve `body` for the route sequence of `line`.
    pub fn with_route_sequence(self, line: TubeLine, body: serde_json::Value) -> Self {
        self.with_body(route_sequence_path(line), body)
    }

    /// Fail every query with `status` and `reason`.
    pub fn failing(status: u16, reason: &str) -> Self {
        Self {
            fallback: Some((status, reason.to_string())),
            ..Self::default()
        }
    }

    /// Number of queries made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn with_body(mut self, path: String, body: serde_json::Value) -> Self {
        self.bodies.insert(path, body.to_string());
        self
    }

    fn reply<T: DeserializeOwned>(&self, path: &str) -> Result<T, TflError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.bodies.get(path) {
            Some(body) => parse_body(body),
            None => {
                let (status, reason) = self
                    .fallback
                    .clone()
                    .unwrap_or((404, "Not Found".to_string()));
                Err(TflError::Status { status, reason })
            }
        }
    }
}

impl TransitApi for MockTransitApi {
    fn arrivals<'a>(
        &'a self,
        code: &'a StationCode,
    ) -> BoxFuture<'a, Result<Vec<Arrival>, TflError>> {
        future::ready(self.reply(&arrivals_path(code))).boxed()
    }

    fn line_statuses(&self) -> BoxFuture<'_, Result<Vec<LineStatusEntry>, TflError>> {
        future::ready(self.reply(LINE_STATUS_PATH)).boxed()
    }

    fn route_sequence(&self, line: TubeLine) -> BoxFuture<'_, Result<RouteSequence, TflError>> {
        future::ready(self.reply(&route_sequence_path(line))).boxed()
    }
}
