//! Cache invalidation seam
//!
//! After a successful mutation the action marks the cached rendering of the
//! affected listing view stale, keyed by path. The trait keeps the hosting
//! framework's cache behind a seam so actions stay independently testable.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Marks cached rendered views stale by path tag.
pub trait CacheInvalidator: Send + Sync {
    /// Mark the view cached under `path` stale so it is recomputed on next
    /// access. Invalidation is a signal, not an await point.
    fn invalidate(&self, path: &str);
}

/// In-memory invalidator for testing and development.
///
/// Records invalidated tags so tests can assert on post-mutation effects.
#[derive(Clone, Default)]
pub struct InMemoryCache {
    invalidated: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` has been invalidated since construction.
    pub fn was_invalidated(&self, path: &str) -> bool {
        self.invalidated
            .read()
            .map(|tags| tags.contains(path))
            .unwrap_or(false)
    }

    /// Number of distinct invalidated tags.
    pub fn invalidated_count(&self) -> usize {
        self.invalidated.read().map(|tags| tags.len()).unwrap_or(0)
    }
}

impl CacheInvalidator for InMemoryCache {
    fn invalidate(&self, path: &str) {
        tracing::debug!(path, "invalidating cached view");
        if let Ok(mut tags) = self.invalidated.write() {
            tags.insert(path.to_string());
        }
    }
}
