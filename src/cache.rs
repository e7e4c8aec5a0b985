//! Typed in-process cache for the catalog and its derived facets.
//!
//! Each cached value lives in its own [`Slot`] with a concrete type, so a
//! lookup can never come back as the wrong shape. Slots populate once and
//! never expire; the cache resets only when the process restarts.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{PriceRange, Product};
use crate::source::{CatalogSource, SourceError};

/// A single populate-once cache slot.
pub struct Slot<T> {
    value: RwLock<Option<Arc<T>>>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Returns the cached value, if any.
    pub async fn get(&self) -> Option<Arc<T>> {
        self.value.read().await.clone()
    }

    /// Stores `value`, replacing any previous occupant, and returns it.
    pub async fn store(&self, value: Arc<T>) -> Arc<T> {
        let mut guard = self.value.write().await;
        *guard = Some(value.clone());
        value
    }

    /// Returns the cached value, computing and storing it on first use.
    ///
    /// Concurrent cold callers may race to compute; the first writer wins and
    /// everyone observes the same value afterwards.
    pub async fn get_or_insert_with(&self, f: impl FnOnce() -> T) -> Arc<T> {
        if let Some(existing) = self.get().await {
            return existing;
        }
        let mut guard = self.value.write().await;
        guard.get_or_insert_with(|| Arc::new(f())).clone()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The gateway's process-memory cache: the raw catalog plus one slot per
/// derived facet. Facets are computed independently — reading one never
/// forces recomputation of another.
#[derive(Default)]
pub struct CatalogCache {
    catalog: Slot<Vec<Product>>,
    pub price_range: Slot<PriceRange>,
    pub sizes: Slot<Vec<String>>,
    pub keywords: Slot<Vec<String>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached catalog, fetching from `source` on first use.
    ///
    /// The fetched list is stored even when empty. A failed fetch stores
    /// nothing, so the next call retries. No lock is held across the fetch:
    /// concurrent cold callers may each fetch, and the last write wins.
    pub async fn catalog(
        &self,
        source: &dyn CatalogSource,
    ) -> Result<Arc<Vec<Product>>, SourceError> {
        if let Some(list) = self.catalog.get().await {
            return Ok(list);
        }
        let fetched = source.fetch().await?;
        Ok(self.catalog.store(Arc::new(fetched)).await)
    }
}
