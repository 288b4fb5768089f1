//! Explicit cache for enriched datasets.
//!
//! The cache is owned by its caller and passed where needed. Entries are
//! keyed by a hash of the data source identity and the filter applied, so
//! a changed file or a different selection never returns stale rows.

use crate::filter::RecordFilter;
use crate::parser::schema::EnrichedRecord;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::UNIX_EPOCH;

/// Invalidation key for a cached dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Key from an arbitrary source label and a filter
    pub fn new(source: &str, filter: &RecordFilter) -> Self {
        let mut hasher = DefaultHasher::new();
        source.hash(&mut hasher);
        filter.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Key for a file, including its size and modification time
    pub fn for_file(path: &Path, filter: &RecordFilter) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        let source = format!("{}|{}|{}", path.display(), metadata.len(), modified);
        Ok(Self::new(&source, filter))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// In-memory store of enriched datasets
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<CacheKey, Arc<[EnrichedRecord]>>,
    hits: u64,
    misses: u64,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `key`, computing it on a miss
    ///
    /// A failed computation leaves the cache unchanged.
    pub fn get_or_try_insert_with<E, F>(&mut self, key: CacheKey, compute: F) -> Result<Arc<[EnrichedRecord]>, E>
    where
        F: FnOnce() -> Result<Vec<EnrichedRecord>, E>,
    {
        if let Some(records) = self.entries.get(&key) {
            self.hits += 1;
            debug!("Dataset cache hit ({:016x})", key.value());
            return Ok(Arc::clone(records));
        }

        self.misses += 1;
        debug!("Dataset cache miss ({:016x})", key.value());

        let records: Arc<[EnrichedRecord]> = compute()?.into();
        self.entries.insert(key, Arc::clone(&records));
        Ok(records)
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<[EnrichedRecord]>> {
        self.entries.get(key).cloned()
    }

    /// Drop one entry, returning whether it existed
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
