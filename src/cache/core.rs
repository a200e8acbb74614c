use crate::cache::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::document::Document;
use crate::types::DocumentId;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering;

/// Capacity used when none is configured. Search results routinely reference
/// the same document from several hit rows, so even a small cache absorbs
/// most refetches over an interactive session.
pub const DEFAULT_CAPACITY: usize = 35;

/// Bounded in-memory cache mapping document ids to fetched documents, with
/// least-recently-used eviction.
///
/// Recency is refreshed by `get` and `set`; `has` and `peek` leave it alone.
/// Inserting a new key at capacity evicts exactly the least recently touched
/// entry. All mutation happens through `&mut self`; the session wraps the
/// cache in a `Mutex` so its methods can take `&self`.
pub struct DocumentCache {
    store: LruCache<DocumentId, Document>,
    metrics: CacheMetrics,
}

impl DocumentCache {
    /// Creates a cache holding at most `capacity` documents (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self { store: LruCache::new(cap), metrics: CacheMetrics::default() }
    }

    /// True iff the id is currently resident. Does not affect recency.
    #[must_use]
    pub fn has(&self, id: &DocumentId) -> bool {
        self.store.contains(id)
    }

    /// Returns the resident document and marks it most recently used.
    /// Absence is not an error; it signals that the caller should fetch.
    pub fn get(&mut self, id: &DocumentId) -> Option<&Document> {
        match self.store.get(id) {
            Some(doc) => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                Some(doc)
            }
            None => {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Returns the resident document without touching recency.
    #[must_use]
    pub fn peek(&self, id: &DocumentId) -> Option<&Document> {
        self.store.peek(id)
    }

    /// Inserts or updates the document under its own id and marks it most
    /// recently used. Growing past capacity evicts the single least recently
    /// used entry (by combined get/set recency, not insertion order).
    pub fn set(&mut self, document: Document) {
        let id = document.id.clone();
        match self.store.push(id.clone(), document) {
            Some((old_id, _)) if old_id == id => {
                self.metrics.updates.fetch_add(1, Ordering::Relaxed);
            }
            Some(_) => {
                self.metrics.inserts.fetch_add(1, Ordering::Relaxed);
                self.metrics.evictions.fetch_add(1, Ordering::Relaxed);
            }
            None => {
                self.metrics.inserts.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Removes a document from the cache.
    pub fn remove(&mut self, id: &DocumentId) -> Option<Document> {
        self.store.pop(id)
    }

    /// Drops all resident documents. Metrics are preserved.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.cap().get()
    }

    /// Resident ids in recency order, most recent first.
    #[must_use]
    pub fn resident_ids(&self) -> Vec<DocumentId> {
        self.store.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
