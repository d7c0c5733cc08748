//! SQLite-backed station → code store.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::domain::StationCode;

use super::error::StationError;

/// Seed script shipped with the crate.
pub const DEFAULT_SEED: &str = include_str!("../../data/stations.sql");

/// Maximum pooled connections for an on-disk database.
const MAX_CONNECTIONS: u32 = 5;

/// Persistent mapping from canonical station name to upstream station code.
///
/// All lookups bind their arguments; names are never spliced into SQL.
#[derive(Debug, Clone)]
pub struct StationStore {
    pool: SqlitePool,
}

impl StationStore {
    /// Connect to the database at `url`, creating it if it doesn't exist.
    ///
    /// `sqlite::memory:` is supported; the pool then holds a single
    /// connection that is never recycled, so the data lives as long as the
    /// store does.
    pub async fn connect(url: &str) -> Result<Self, StationError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    /// Run a seed script against the store.
    ///
    /// The script may contain several statements. It should be idempotent,
    /// since it is run on every startup.
    pub async fn bootstrap(&self, script: &str) -> Result<(), StationError> {
        sqlx::raw_sql(script).execute(&self.pool).await?;
        Ok(())
    }

    /// All station names, in insertion order.
    pub async fn load_station_names(&self) -> Result<Vec<String>, StationError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT station FROM tfl_lookups ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Look up the upstream code for a canonical station name.
    ///
    /// Matching is exact. Returns `Ok(None)` if no row has that name.
    pub async fn code_for(&self, station: &str) -> Result<Option<StationCode>, StationError> {
        let code = sqlx::query_scalar::<_, String>("SELECT code FROM tfl_lookups WHERE station = ?")
            .bind(station)
            .fetch_optional(&self.pool)
            .await?;

        code.map(|c| {
            StationCode::parse(&c).map_err(|source| StationError::InvalidCode {
                station: station.to_string(),
                source,
            })
        })
        .transpose()
    }
}

/// Read the seed script at `path`, or fall back to the built-in one.
pub fn load_seed_script(path: Option<&Path>) -> Result<String, StationError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| StationError::SeedScript {
            path: path.display().to_string(),
            source,
        }),
        None => Ok(DEFAULT_SEED.to_string()),
    }
}
