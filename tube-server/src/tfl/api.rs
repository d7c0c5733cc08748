//! The upstream queries the gateway depends on.

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::domain::{StationCode, TubeLine};

use super::client::TflClient;
use super::error::TflError;
use super::types::{Arrival, LineStatusEntry, RouteSequence};

/// Source of live transit data.
///
/// Implemented by [`TflClient`] for production; tests substitute canned
/// responses. Object safe, so request handlers can share an
/// `Arc<dyn TransitApi>`.
pub trait TransitApi: Send + Sync {
    /// Predicted arrivals at a stop, in upstream order.
    fn arrivals<'a>(
        &'a self,
        code: &'a StationCode,
    ) -> BoxFuture<'a, Result<Vec<Arrival>, TflError>>;

    /// Current status of every tube line.
    fn line_statuses(&self) -> BoxFuture<'_, Result<Vec<LineStatusEntry>, TflError>>;

    /// Outbound station sequence of a line.
    fn route_sequence(&self, line: TubeLine) -> BoxFuture<'_, Result<RouteSequence, TflError>>;
}

impl TransitApi for TflClient {
    fn arrivals<'a>(
        &'a self,
        code: &'a StationCode,
    ) -> BoxFuture<'a, Result<Vec<Arrival>, TflError>> {
        self.get_arrivals(code).boxed()
    }

    fn line_statuses(&self) -> BoxFuture<'_, Result<Vec<LineStatusEntry>, TflError>> {
        self.get_line_statuses().boxed()
    }

    fn route_sequence(&self, line: TubeLine) -> BoxFuture<'_, Result<RouteSequence, TflError>> {
        self.get_route_sequence(line).boxed()
    }
}
