//! Resolution of user-typed station and line names.
//!
//! Station names share many substrings ("Warren Street", "Baker Street"),
//! so their threshold has to keep unrelated stations from cross-matching.
//! Line identifiers are short and mutually distinct. Both vocabularies use
//! the same numeric threshold today but are tuned independently.

use crate::domain::TubeLine;
use crate::stations::StationNames;

use super::vocabulary::find_best;

/// Minimum similarity for a station name to resolve.
pub const STATION_THRESHOLD: u8 = 70;

/// Minimum similarity for a line name to resolve.
pub const LINE_THRESHOLD: u8 = 70;

/// Resolves free-text names against the station and line vocabularies.
#[derive(Clone)]
pub struct NameResolver {
    stations: StationNames,
}

impl NameResolver {
    /// Create a resolver over the given station vocabulary.
    pub fn new(stations: StationNames) -> Self {
        Self { stations }
    }

    /// The station vocabulary this resolver reads.
    pub fn stations(&self) -> &StationNames {
        &self.stations
    }

    /// Resolve a station name to its canonical form.
    pub async fn resolve_station(&self, input: &str) -> Option<String> {
        let vocabulary = self.stations.snapshot().await;

        match find_best(input, &vocabulary, STATION_THRESHOLD) {
            Some(m) => {
                tracing::debug!(input, station = m.name, score = m.score, "resolved station");
                Some(m.name.to_string())
            }
            None => {
                tracing::debug!(input, "station did not resolve");
                None
            }
        }
    }

    /// Resolve a line name to one of the eleven tube lines.
    pub fn resolve_line(&self, input: &str) -> Option<TubeLine> {
        resolve_line(input)
    }
}

/// Resolve a line name against the fixed line vocabulary.
///
/// The line vocabulary never changes, so this needs no resolver state.
pub fn resolve_line(input: &str) -> Option<TubeLine> {
    let vocabulary = TubeLine::ALL.map(TubeLine::id);

    let m = find_best(input, &vocabulary, LINE_THRESHOLD)?;
    tracing::debug!(input, line = m.name, score = m.score, "resolved line");
    TubeLine::from_id(m.name)
}
