//! The four lookups the HTTP surface exposes.
//!
//! Each lookup resolves the caller's free text, queries upstream, and shapes
//! the payload. Nothing is sent upstream for a name that fails to resolve.

use std::sync::Arc;

use crate::domain::StationCode;
use crate::matching::NameResolver;
use crate::shape::{
    ArrivalsByLine, LineStatusReport, StationHints, shape_arrivals, shape_lines, shape_status,
    shape_stations,
};
use crate::stations::{StationError, StationStore};
use crate::tfl::{Arrival, TflError, TransitApi};

/// Errors from a gateway lookup.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The station name matched nothing closely enough
    #[error("Station not found, please try again.")]
    StationNotFound,

    /// The line name matched nothing closely enough
    #[error("Line not found, please try again.")]
    LineNotFound,

    /// Upstream answered with a status other than 200
    #[error("upstream returned {status}: {reason}")]
    Upstream { status: u16, reason: String },

    /// Upstream could not be reached or sent an unreadable payload
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] TflError),

    /// A resolved station has no row in the store
    #[error("no station code stored for {station}")]
    MissingStationCode { station: String },

    /// The station store failed
    #[error(transparent)]
    Store(#[from] StationError),
}

impl From<TflError> for GatewayError {
    fn from(err: TflError) -> Self {
        match err {
            TflError::Status { status, reason } => Self::Upstream { status, reason },
            other => Self::UpstreamUnavailable(other),
        }
    }
}

/// Resolves names, queries upstream, and shapes responses.
pub struct Gateway {
    resolver: NameResolver,
    store: StationStore,
    api: Arc<dyn TransitApi>,
}

impl Gateway {
    pub fn new(resolver: NameResolver, store: StationStore, api: Arc<dyn TransitApi>) -> Self {
        Self {
            resolver,
            store,
            api,
        }
    }

    /// Upcoming arrivals at a station, grouped by line.
    pub async fn arrivals(&self, station: &str) -> Result<ArrivalsByLine, GatewayError> {
        let arrivals = self.station_arrivals(station).await?;
        Ok(shape_arrivals(&arrivals))
    }

    /// Lines serving a station.
    pub async fn lines(&self, station: &str) -> Result<Vec<String>, GatewayError> {
        let arrivals = self.station_arrivals(station).await?;
        Ok(shape_lines(&arrivals))
    }

    /// Status of every tube line.
    pub async fn status(&self) -> Result<LineStatusReport, GatewayError> {
        let entries = self.api.line_statuses().await?;
        tracing::info!(lines = entries.len(), "fetched line status");
        Ok(shape_status(&entries))
    }

    /// Stations along a line, in outbound order.
    pub async fn stations(&self, line: &str) -> Result<StationHints, GatewayError> {
        let Some(resolved) = self.resolver.resolve_line(line) else {
            tracing::info!(input = line, "line not found");
            return Err(GatewayError::LineNotFound);
        };

        let sequence = self.api.route_sequence(resolved).await?;
        tracing::info!(
            line = resolved.id(),
            stations = sequence.stations.len(),
            "fetched route sequence"
        );
        Ok(shape_stations(&sequence))
    }

    /// Reload the station vocabulary from the store.
    pub async fn reload_stations(&self) -> Result<usize, GatewayError> {
        Ok(self.resolver.stations().reload(&self.store).await?)
    }

    async fn station_arrivals(&self, station: &str) -> Result<Vec<Arrival>, GatewayError> {
        let code = self.station_code(station).await?;
        let arrivals = self.api.arrivals(&code).await?;
        tracing::info!(code = %code, arrivals = arrivals.len(), "fetched arrivals");
        Ok(arrivals)
    }

    async fn station_code(&self, station: &str) -> Result<StationCode, GatewayError> {
        let Some(resolved) = self.resolver.resolve_station(station).await else {
            tracing::info!(input = station, "station not found");
            return Err(GatewayError::StationNotFound);
        };

        self.store
            .code_for(&resolved)
            .await?
            .ok_or(GatewayError::MissingStationCode { station: resolved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TubeLine;
    use crate::stations::{DEFAULT_SEED, StationNames};
    use crate::tfl::mock::MockTransitApi;
    use serde_json::json;

    async fn seeded_store() -> StationStore {
        let store = StationStore::connect("sqlite::memory:").await.unwrap();
        store.bootstrap(DEFAULT_SEED).await.unwrap();
        store
    }

    async fn gateway(api: Arc<MockTransitApi>) -> Gateway {
        let store = seeded_store().await;
        let names = StationNames::load(&store).await.unwrap();
        Gateway::new(NameResolver::new(names), store, api)
    }

    fn baker_street_arrivals() -> serde_json::Value {
        json!([
            {"lineName": "Jubilee", "lineId": "jubilee", "destinationName": "Stratford Underground Station", "timeToStation": 90},
            {"lineName": "Bakerloo", "lineId": "bakerloo", "destinationName": "Elephant & Castle Underground Station", "timeToStation": 240},
            {"lineName": "Jubilee", "lineId": "jubilee", "destinationName": "Stanmore Underground Station", "timeToStation": 400}
        ])
    }

    #[tokio::test]
    async fn arrivals_for_abbreviated_station() {
        let api = Arc::new(
            MockTransitApi::new().with_arrivals("940GZZLUBST", baker_street_arrivals()),
        );
        let gateway = gateway(api.clone()).await;

        let shaped = gateway.arrivals("Baker St").await.unwrap();

        assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["Jubilee", "Bakerloo"]);
        assert_eq!(
            shaped.get("Jubilee").unwrap(),
            &vec![
                "Stratford Underground Station in 2 minutes",
                "Stanmore Underground Station in 7 minutes",
            ]
        );
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn lines_for_station() {
        let api = Arc::new(
            MockTransitApi::new().with_arrivals("940GZZLUBST", baker_street_arrivals()),
        );
        let gateway = gateway(api).await;

        let lines = gateway.lines("baker street").await.unwrap();
        assert_eq!(
            lines,
            vec![
                "Jubilee",
                "Bakerloo",
                "For the status of all lines, please use url pathway /status",
            ]
        );
    }

    #[tokio::test]
    async fn unresolved_station_makes_no_upstream_call() {
        let api = Arc::new(MockTransitApi::new());
        let gateway = gateway(api.clone()).await;

        let err = gateway.arrivals("zzzzqqqq").await.unwrap_err();
        assert!(matches!(err, GatewayError::StationNotFound));

        let err = gateway.lines("zzzzqqqq").await.unwrap_err();
        assert!(matches!(err, GatewayError::StationNotFound));

        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn unresolved_line_makes_no_upstream_call() {
        let api = Arc::new(MockTransitApi::new());
        let gateway = gateway(api.clone()).await;

        let err = gateway.stations("elizabeth").await.unwrap_err();
        assert!(matches!(err, GatewayError::LineNotFound));
        assert_eq!(err.to_string(), "Line not found, please try again.");
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn stations_for_fuzzy_line() {
        let api = Arc::new(MockTransitApi::new().with_route_sequence(
            TubeLine::Piccadilly,
            json!({
                "lineId": "piccadilly",
                "stations": [
                    {"name": "Cockfosters Underground Station"},
                    {"name": "Heathrow Terminal 4 Underground Station"}
                ]
            }),
        ));
        let gateway = gateway(api).await;

        let hints = gateway.stations("picadilly").await.unwrap();
        assert_eq!(
            hints.keys().collect::<Vec<_>>(),
            vec![
                "Cockfosters Underground Station",
                "Heathrow Terminal 4 Underground Station"
            ]
        );
        assert_eq!(
            hints.get("Heathrow Terminal 4 Underground Station").unwrap(),
            "For arrivals please use url pathway /arrivals/HeathrowTerminal4"
        );
    }

    #[tokio::test]
    async fn status_report() {
        let api = Arc::new(MockTransitApi::new().with_line_statuses(json!([
            {"id": "hammersmith-city", "name": "Hammersmith & City", "lineStatuses": [{"statusSeverity": 10, "statusSeverityDescription": "Good Service"}]},
            {"id": "central", "name": "Central", "lineStatuses": [{"statusSeverity": 6, "statusSeverityDescription": "Severe Delays"}]}
        ])));
        let gateway = gateway(api).await;

        let report = gateway.status().await.unwrap();
        assert_eq!(
            report.get("Hammersmith & City").unwrap()[1],
            "For a list of all stations in this line, please use url pathway /stations/hammersmith-city"
        );
        assert_eq!(report.get("Central").unwrap()[0], "Severe Delays");
    }

    #[tokio::test]
    async fn upstream_status_carries_reason() {
        let api = Arc::new(MockTransitApi::failing(500, "ServerError"));
        let gateway = gateway(api).await;

        match gateway.status().await.unwrap_err() {
            GatewayError::Upstream { status, reason } => {
                assert_eq!(status, 500);
                assert_eq!(reason, "ServerError");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreadable_upstream_payload() {
        let api = Arc::new(MockTransitApi::new().with_line_statuses(json!({"not": "a list"})));
        let gateway = gateway(api).await;

        let err = gateway.status().await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::UpstreamUnavailable(TflError::Json { .. })
        ));
    }

    #[tokio::test]
    async fn resolved_station_without_code() {
        let store = seeded_store().await;
        let names = StationNames::from_names(vec!["Crystal Palace".to_string()]);
        let gateway = Gateway::new(
            NameResolver::new(names),
            store,
            Arc::new(MockTransitApi::new()),
        );

        let err = gateway.arrivals("Crystal Palace").await.unwrap_err();
        match err {
            GatewayError::MissingStationCode { station } => assert_eq!(station, "Crystal Palace"),
            other => panic!("expected missing code, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reload_picks_up_new_stations() {
        let api = Arc::new(MockTransitApi::new().with_arrivals(
            "940GZZLUCPK",
            json!([{"lineName": "Jubilee", "destinationName": "Stratford", "timeToStation": 60}]),
        ));
        let gateway = gateway(api).await;

        assert!(matches!(
            gateway.arrivals("Canons Park").await,
            Err(GatewayError::StationNotFound)
        ));

        gateway
            .store
            .bootstrap("INSERT INTO tfl_lookups (station, code) VALUES ('Canons Park', '940GZZLUCPK');")
            .await
            .unwrap();
        gateway.reload_stations().await.unwrap();

        let shaped = gateway.arrivals("Canons Park").await.unwrap();
        assert_eq!(shaped.get("Jubilee").unwrap(), &vec!["Stratford in 1 minutes"]);
    }
}
