//! Abbreviation cache shared by every call made through one aligner.
//!
//! Entries are never evicted: the backing `LruCache` is unbounded and only
//! shrinks through [`AbbreviationCache::clear`].

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Which inputs identify a cached abbreviation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKeyMode {
    /// Key on the sorted text only. A sorted text paired with a different
    /// unsorted credit later returns the first abbreviation computed for it.
    #[default]
    Sorted,
    /// Key on the (sorted, unsorted) pair.
    Pair,
}

impl CacheKeyMode {
    /// Builds the cache key for an input pair under this mode
    pub fn key_for(self, sorted_text: &str, unsorted_text: &str) -> CacheKey {
        match self {
            CacheKeyMode::Sorted => CacheKey::Sorted(sorted_text.to_string()),
            CacheKeyMode::Pair => {
                CacheKey::Pair(sorted_text.to_string(), unsorted_text.to_string())
            }
        }
    }
}

impl std::str::FromStr for CacheKeyMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sorted" => Ok(CacheKeyMode::Sorted),
            "pair" => Ok(CacheKeyMode::Pair),
            other => Err(format!(
                "unknown cache key mode '{other}' (expected 'sorted' or 'pair')"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Sorted(String),
    Pair(String, String),
}

impl CacheKey {
    /// The sorted text this key was built from
    pub fn sorted_text(&self) -> &str {
        match self {
            CacheKey::Sorted(sorted) | CacheKey::Pair(sorted, _) => sorted,
        }
    }
}

/// Size and hit counters for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
}

struct CacheState {
    entries: LruCache<CacheKey, String>,
    hits: u64,
    misses: u64,
}

/// Thread-safe map from sort name to its abbreviation.
pub struct AbbreviationCache {
    state: Mutex<CacheState>,
}

impl Default for AbbreviationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AbbreviationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbbreviationCache")
            .field("stats", &self.stats())
            .finish()
    }
}

impl AbbreviationCache {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::unbounded(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Locks the cache for a read-check-compute-write sequence.
    ///
    /// Holding the guard across the computation keeps two threads from
    /// computing the same key at once.
    pub(crate) fn lock(&self) -> CacheGuard<'_> {
        CacheGuard {
            state: self.state.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Looks up a cached abbreviation, counting the hit or miss
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.lock().get(key)
    }

    /// Stores an abbreviation, replacing any previous value for the key
    #[cfg(test)]
    fn insert(&self, key: CacheKey, abbreviated: String) {
        self.lock().put(key, abbreviated);
    }

    /// Checks for a key without touching counters or recency
    #[cfg(test)]
    fn contains(&self, key: &CacheKey) -> bool {
        self.lock().state.entries.contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns current size and hit/miss counters
    pub fn stats(&self) -> CacheStats {
        let guard = self.lock();
        CacheStats {
            size: guard.state.entries.len(),
            hits: guard.state.hits,
            misses: guard.state.misses,
        }
    }

    /// Drops every entry and resets the counters
    pub fn clear(&self) {
        let mut guard = self.lock();
        let removed = guard.state.entries.len();
        guard.state.entries.clear();
        guard.state.hits = 0;
        guard.state.misses = 0;
        debug!("Cleared abbreviation cache: removed_entries={removed}");
    }
}

/// Exclusive access to the cache contents.
pub(crate) struct CacheGuard<'a> {
    state: MutexGuard<'a, CacheState>,
}

impl CacheGuard<'_> {
    pub(crate) fn get(&mut self, key: &CacheKey) -> Option<String> {
        match self.state.entries.get(key).cloned() {
            Some(abbreviated) => {
                self.state.hits += 1;
                trace!("Cache hit: sorted='{}'", key.sorted_text());
                Some(abbreviated)
            }
            None => {
                self.state.misses += 1;
                trace!("Cache miss: sorted='{}'", key.sorted_text());
                None
            }
        }
    }

    pub(crate) fn put(&mut self, key: CacheKey, abbreviated: String) {
        self.state.entries.put(key, abbreviated);
    }
}
