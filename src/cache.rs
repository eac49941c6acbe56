// src/cache.rs
//
// Season results cache, owned by whoever drives the UI.
// Keyed on (season id, source version); entries expire after a TTL.
// Only complete, successful loads are ever inserted (see loader.rs).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{ Duration, Instant };

use crate::config::consts::CACHE_TTL_SECS;
use crate::loader::SeasonTable;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub season_id: String,
    pub version: u64,
}

impl CacheKey {
    pub fn new(season_id: &str, version: u64) -> Self {
        Self { season_id: s!(season_id), version }
    }
}

struct Entry {
    table: Arc<SeasonTable>,
    stored_at: Instant,
}

pub struct SeasonCache {
    ttl: Duration,
    entries: HashMap<CacheKey, Entry>,
}

impl Default for SeasonCache {
    fn default() -> Self { Self::new(Duration::from_secs(CACHE_TTL_SECS)) }
}

impl SeasonCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new() }
    }

    /// Fresh entry for `key`, if any. Expired entries are dropped on the way.
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<SeasonTable>> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(e) => e.stored_at.elapsed() >= self.ttl,
        };
        if expired {
            logd!("Cache: expired season {} (v{:x})", key.season_id, key.version);
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|e| Arc::clone(&e.table))
    }

    /// Store a table. Older versions of the same season are replaced.
    pub fn insert(&mut self, key: CacheKey, table: Arc<SeasonTable>) {
        self.entries.retain(|k, _| k.season_id != key.season_id);
        self.entries.insert(key, Entry { table, stored_at: Instant::now() });
    }

    /// Forget every version of one season.
    pub fn invalidate(&mut self, season_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|k, _| k.season_id != season_id);
        before != self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
