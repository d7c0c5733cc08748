//! Reshaping of upstream payloads into gateway responses.
//!
//! Every response points onward: arrivals link to the line's station list,
//! line lists link to the status page, status entries link to station lists,
//! and station lists link to arrivals. These discovery hints are plain
//! strings embedded alongside the data.

use serde::{Serialize, Serializer};

use crate::domain::TubeLine;
use crate::matching::resolve_line;
use crate::tfl::{Arrival, LineStatusEntry, RouteSequence};

/// Maximum timed arrivals listed per line.
pub const MAX_ARRIVALS_PER_LINE: usize = 5;

/// Appended to every list of lines.
pub const STATUS_HINT: &str = "For the status of all lines, please use url pathway /status";

/// Placeholder for a field the upstream payload omitted.
const UNKNOWN: &str = "Unknown";

/// Token stripped from compacted station names in arrival links.
const UNDERGROUND_SUFFIX: &str = "UndergroundStation";

/// A string-keyed map that serializes as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_or_insert_default(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let idx = match self.entries.iter().position(|(k, _)| k == key) {
            Some(idx) => idx,
            None => {
                self.entries.push((key.to_string(), V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// Line name → formatted arrivals, with an optional trailing hint.
pub type ArrivalsByLine = OrderedMap<Vec<String>>;

/// Line name → `[severity, stations hint]`.
pub type LineStatusReport = OrderedMap<Vec<String>>;

/// Station name → arrivals hint.
pub type StationHints = OrderedMap<String>;

/// Render seconds-to-arrival as whole minutes.
///
/// Rounds half to even, so 90 s is "2" and 150 s is also "2". A missing
/// value renders as "no", giving "... in no minutes".
pub fn minutes_label(seconds: Option<f64>) -> String {
    match seconds {
        Some(secs) => {
            let minutes = (secs.trunc() / 60.0).round_ties_even() as i64;
            minutes.to_string()
        }
        None => "no".to_string(),
    }
}

/// Hint pointing at the station list of a line.
pub fn stations_hint(line: TubeLine) -> String {
    format!(
        "For a list of all stations in this line, please use url pathway /stations/{}",
        line.id()
    )
}

/// Hint pointing at the arrivals of a station, given its display name.
///
/// Whitespace is removed and a trailing "Underground Station" dropped, so
/// "Baker Street Underground Station" links to `/arrivals/BakerStreet`.
pub fn arrivals_hint(station: &str) -> String {
    let compact: String = station.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.strip_suffix(UNDERGROUND_SUFFIX).unwrap_or(&compact);
    format!("For arrivals please use url pathway /arrivals/{compact}")
}

/// Identify a line from upstream data.
///
/// Trusts the upstream identifier or exact display name first and only
/// falls back to fuzzy resolution of the display name.
fn line_from_upstream(id: Option<&str>, name: &str) -> Option<TubeLine> {
    id.and_then(TubeLine::from_id)
        .or_else(|| TubeLine::from_display_name(name))
        .or_else(|| resolve_line(name))
}

/// Group arrivals by line, keeping at most five per line.
///
/// Lines appear in the order first seen and arrivals keep upstream order.
/// When a line has more than five arrivals, the list is cut at five and a
/// single hint to the line's station list is appended.
pub fn shape_arrivals(arrivals: &[Arrival]) -> ArrivalsByLine {
    let mut shaped = ArrivalsByLine::new();

    for arrival in arrivals {
        let line_name = arrival.line_name.as_deref().unwrap_or(UNKNOWN);
        let entries = shaped.get_or_insert_default(line_name);

        if entries.len() < MAX_ARRIVALS_PER_LINE {
            let destination = arrival.destination_name.as_deref().unwrap_or(UNKNOWN);
            entries.push(format!(
                "{destination} in {} minutes",
                minutes_label(arrival.time_to_station)
            ));
        } else if entries.len() == MAX_ARRIVALS_PER_LINE {
            let hint = match line_from_upstream(arrival.line_id.as_deref(), line_name) {
                Some(line) => stations_hint(line),
                None => format!(
                    "For a list of all stations in this line, please use url pathway /stations/{}",
                    line_name.to_lowercase()
                ),
            };
            entries.push(hint);
        }
    }

    shaped
}

/// Distinct lines serving a station, in order first seen, then the status hint.
pub fn shape_lines(arrivals: &[Arrival]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for arrival in arrivals {
        let name = arrival.line_name.as_deref().unwrap_or(UNKNOWN);
        if !lines.iter().any(|l| l == name) {
            lines.push(name.to_string());
        }
    }

    lines.push(STATUS_HINT.to_string());
    lines
}

/// Severity of each line with a hint to its station list.
///
/// A line that can't be identified gets its severity alone.
pub fn shape_status(entries: &[LineStatusEntry]) -> LineStatusReport {
    let mut report = LineStatusReport::new();

    for entry in entries {
        let name = entry
            .name
            .as_deref()
            .or(entry.id.as_deref())
            .unwrap_or(UNKNOWN);

        let severity = entry
            .line_statuses
            .first()
            .and_then(|s| s.status_severity_description.as_deref())
            .unwrap_or(UNKNOWN)
            .to_string();

        let shaped = match line_from_upstream(entry.id.as_deref(), name) {
            Some(line) => vec![severity, stations_hint(line)],
            None => {
                tracing::debug!(line = name, "status entry for unrecognised line");
                vec![severity]
            }
        };

        report.insert(name, shaped);
    }

    report
}

/// Each station on a route with a hint to its arrivals.
pub fn shape_stations(sequence: &RouteSequence) -> StationHints {
    let mut hints = StationHints::new();

    for name in sequence.stations.iter().filter_map(|s| s.name.as_deref()) {
        hints.insert(name, arrivals_hint(name));
    }

    hints
}
