//! Station name vocabulary.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::StationError;
use super::store::StationStore;

/// Thread-safe station name vocabulary.
///
/// Readers take a cheap snapshot of the current list. A reload builds a new
/// list and swaps it in whole, so a resolution in progress always sees one
/// consistent vocabulary.
#[derive(Clone)]
pub struct StationNames {
    inner: Arc<RwLock<Arc<[String]>>>,
}

impl StationNames {
    /// Load the vocabulary from the store.
    pub async fn load(store: &StationStore) -> Result<Self, StationError> {
        let names = store.load_station_names().await?;
        Ok(Self::from_names(names))
    }

    /// Create a vocabulary from an explicit list of names.
    pub fn from_names(names: Vec<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(names.into())),
        }
    }

    /// The current vocabulary, in insertion order.
    pub async fn snapshot(&self) -> Arc<[String]> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Get the number of station names.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the vocabulary is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Reload the vocabulary from the store.
    ///
    /// On success, replaces the current list. On failure, the existing list
    /// is preserved and the error is returned.
    pub async fn reload(&self, store: &StationStore) -> Result<usize, StationError> {
        let names: Arc<[String]> = store.load_station_names().await?.into();
        let count = names.len();

        let mut guard = self.inner.write().await;
        *guard = names;

        Ok(count)
    }
}
