//! Process configuration from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::tfl::TflConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://tfl_lookups.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// A configuration value that couldn't be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub tfl: TflConfig,
    pub database_url: String,
    /// Seed script to run at startup; the built-in one when unset
    pub stations_sql: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    /// How often to reload the station vocabulary; never when unset
    pub station_reload: Option<Duration>,
}

impl GatewayConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let app_id = var("TFL_APP_ID").unwrap_or_default();
        let app_key = var("TFL_APP_KEY").unwrap_or_default();
        if app_id.is_empty() || app_key.is_empty() {
            tracing::warn!("TFL_APP_ID or TFL_APP_KEY not set; upstream requests may be throttled");
        }

        let mut tfl = TflConfig::new(app_id, app_key);
        if let Some(url) = var("TFL_BASE_URL") {
            tfl = tfl.with_base_url(url);
        }
        if let Some(secs) = parse_var::<u64>(&var, "TFL_TIMEOUT_SECS")? {
            tfl = tfl.with_timeout(secs);
        }
        if let Some(n) = parse_var::<usize>(&var, "TFL_MAX_CONCURRENT")? {
            if n == 0 {
                return Err(ConfigError::Invalid {
                    key: "TFL_MAX_CONCURRENT",
                    value: n.to_string(),
                });
            }
            tfl = tfl.with_max_concurrent(n);
        }

        let bind_addr = match parse_var::<SocketAddr>(&var, "BIND_ADDR")? {
            Some(addr) => addr,
            None => DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: DEFAULT_BIND_ADDR.to_string(),
            })?,
        };

        let station_reload = match parse_var::<u64>(&var, "STATION_RELOAD_SECS")? {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            tfl,
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            stations_sql: var("STATIONS_SQL").map(PathBuf::from),
            bind_addr,
            station_reload,
        })
    }
}

fn parse_var<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    var(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}
