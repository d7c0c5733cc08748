//! Approximate name matching.
//!
//! Users type station and line names freehand. This module scores their
//! input against the known vocabularies and picks the single best entry,
//! or nothing when no entry is similar enough.

mod resolver;
mod score;
mod vocabulary;

pub use resolver::{LINE_THRESHOLD, NameResolver, STATION_THRESHOLD, resolve_line};
pub use score::similarity;
pub use vocabulary::{Match, find_best};
