//! Station store error types.

/// Errors that can occur when reading or seeding the station store.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Database query or connection failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Seed script could not be read
    #[error("failed to read seed script {path}: {source}")]
    SeedScript {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored code is not a usable station code
    #[error("station {station} has an invalid code: {source}")]
    InvalidCode {
        station: String,
        #[source]
        source: crate::domain::InvalidStationCode,
    },
}
