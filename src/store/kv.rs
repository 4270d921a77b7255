//! Key-Value Store Module
//!
//! Concurrent string-to-string map shared by every request handler.

use dashmap::DashMap;

// == KV Store ==
/// In-memory key-value storage backed by a sharded concurrent map.
///
/// Every operation takes `&self`; coordination happens inside the map's
/// per-shard locks, so callers share the store through an `Arc` without any
/// outer lock.
#[derive(Debug, Default)]
pub struct KvStore {
    /// Key-value storage
    entries: DashMap<String, String>,
}

impl KvStore {
    // == Constructor ==
    /// Creates a new, empty KvStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores `value` under `key` only if the key is not already present.
    ///
    /// An existing value is never overwritten and no error is raised in that
    /// case. Returns `true` if the pair was inserted, `false` if the existing
    /// value was kept.
    pub fn set(&self, key: String, value: String) -> bool {
        let mut inserted = false;
        self.entries.entry(key).or_insert_with(|| {
            inserted = true;
            value
        });
        inserted
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    // == Delete ==
    /// Removes `key` from the store.
    ///
    /// Deleting an absent key is a no-op. Returns `true` if an entry was removed.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
