//! London Underground lookup gateway.
//!
//! An HTTP service that answers "when is the next train at this station?",
//! "which lines stop here?", "how are the lines running?" and "which
//! stations does this line serve?". Callers may type names loosely; they are
//! resolved by fuzzy matching before any upstream query is made.

pub mod config;
pub mod domain;
pub mod gateway;
pub mod matching;
pub mod shape;
pub mod stations;
pub mod tfl;
pub mod web;
