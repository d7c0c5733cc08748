//! Domain types for the tube gateway.
//!
//! Types here enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod line;
mod station;

pub use line::TubeLine;
pub use station::{InvalidStationCode, StationCode};
