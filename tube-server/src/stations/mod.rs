//! Station name vocabulary and code lookup.
//!
//! Station names and their upstream StopPoint codes live in a small SQLite
//! table, seeded at startup. The names are loaded once into an in-memory
//! vocabulary for fuzzy resolution; codes are looked up per request.

mod error;
mod names;
mod store;

pub use error::StationError;
pub use names::StationNames;
pub use store::{DEFAULT_SEED, StationStore, load_seed_script};
