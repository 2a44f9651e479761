//! Cache Store Module
//!
//! Main cache engine: a HashMap of individually-locked entries behind a
//! reader-writer lock, with lazy entry creation on first write.
//!
//! The map's lock guards only the key set. Entries are held through `Arc`
//! handles, so reading or updating an entry's contents needs that entry's own
//! lock but never the map's exclusive lock. Operations on different keys run
//! fully in parallel; operations on the same key serialize only at the entry.

use std::collections::hash_map::Entry as MapSlot;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Ttl Cache ==
/// Thread-safe string cache with per-entry TTL expiration.
///
/// Entries are created at construction (pre-declared keys) or lazily on the
/// first `set` of an unseen key, and are never removed: an expired entry is
/// detected on read but stays in the map until overwritten.
#[derive(Debug)]
pub struct TtlCache {
    /// Key set guarded by the map lock; entry contents by each entry's lock
    storage: RwLock<HashMap<String, Arc<CacheEntry>>>,
    /// Default TTL in seconds, substituted when `set` is called with ttl 0
    default_ttl: u64,
    /// Lookup counters
    stats: CacheStats,
}

impl TtlCache {
    // == Constructor ==
    /// Creates a new cache with the given default TTL and initial key set.
    ///
    /// Each initial key is pre-populated with an empty, already-expired entry:
    /// an immediate `get` on it fails with `ValueExpired` rather than
    /// `NoSuchKey`, distinguishing "known key, stale" from "unknown key".
    ///
    /// # Arguments
    /// * `default_ttl` - TTL in seconds applied when a `set` passes ttl 0
    /// * `initial_keys` - Keys to pre-declare with expired placeholder entries
    pub fn new(default_ttl: u64, initial_keys: &[&str]) -> Self {
        let storage = initial_keys
            .iter()
            .map(|key| (key.to_string(), Arc::new(CacheEntry::new())))
            .collect();

        Self {
            storage: RwLock::new(storage),
            default_ttl,
            stats: CacheStats::new(),
        }
    }

    /// Creates a cache from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        let keys: Vec<&str> = config.initial_keys.iter().map(String::as_str).collect();
        Self::new(config.default_ttl, &keys)
    }

    // == Get ==
    /// Retrieves the value for `key` if present and not expired.
    ///
    /// Runs entirely under the map's shared lock; the expiration check and the
    /// value read happen under the target entry's shared lock, so a `get`
    /// racing an update on the same key observes either the value before or
    /// the value after, never a mix. A stale value is never returned even
    /// though it is still physically present.
    pub fn get(&self, key: &str) -> Result<String> {
        let storage = self.storage.read();

        let entry = match storage.get(key) {
            Some(entry) => entry,
            None => {
                self.stats.record_miss();
                trace!(key, "miss: no such key");
                return Err(CacheError::NoSuchKey(key.to_string()));
            }
        };

        match entry.read() {
            Some(value) => {
                self.stats.record_hit();
                Ok(value)
            }
            None => {
                self.stats.record_expired();
                trace!(key, "miss: value expired");
                Err(CacheError::ValueExpired(key.to_string()))
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` with the given TTL in seconds.
    ///
    /// A ttl of 0 means "use the cache's default TTL". Overwriting an existing
    /// key resets its deadline. The common case (key already present) takes
    /// only the map's shared lock plus the entry's exclusive lock; the first
    /// write to an unseen key upgrades to the map's exclusive lock to insert
    /// the entry, re-checking for it after the upgrade since two writers can
    /// discover the same missing key at once.
    pub fn set(&self, key: &str, value: String, ttl: u64) -> Result<()> {
        let ttl = if ttl == 0 { self.default_ttl } else { ttl };

        {
            let storage = self.storage.read();
            if let Some(entry) = storage.get(key) {
                entry.update(value, ttl);
                return Ok(());
            }
        }

        let entry = {
            let mut storage = self.storage.write();
            match storage.entry(key.to_string()) {
                MapSlot::Occupied(slot) => Arc::clone(slot.get()),
                MapSlot::Vacant(slot) => {
                    debug!(key, "created entry on first write");
                    Arc::clone(slot.insert(Arc::new(CacheEntry::new())))
                }
            }
        };

        // Entries are never removed, so the handle stays valid after the map
        // lock is released.
        entry.update(value, ttl);
        Ok(())
    }

    // == Time To Live ==
    /// Returns the remaining TTL in seconds for `key`, 0 if expired.
    ///
    /// Inspection only; does not count toward hit/miss statistics.
    pub fn ttl_remaining(&self, key: &str) -> Result<u64> {
        let storage = self.storage.read();
        match storage.get(key) {
            Some(entry) => Ok(entry.ttl_remaining()),
            None => Err(CacheError::NoSuchKey(key.to_string())),
        }
    }

    // == Contains Key ==
    /// Returns true if `key` is in the key set, expired or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.storage.read().contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries, including expired ones.
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.storage.read().is_empty()
    }

    // == Default TTL ==
    /// Returns the configured default TTL in seconds.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of the lookup counters.
    pub fn stats(&self) -> StatsSnapshot {
        let total_entries = self.storage.read().len();
        self.stats.snapshot(total_entries)
    }
}
