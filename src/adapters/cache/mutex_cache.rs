use crate::ports::{CacheConfig, CacheError, CacheResult, KeyedCache};
use std::collections::hash_map::{Entry, RandomState};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe memo cache: one `HashMap` behind one `Mutex`.
///
/// Every operation, `clear` included, runs inside the same critical section,
/// so no caller ever sees the map half-updated. Share it through an `Arc`.
pub struct Cache<K, V, S = RandomState> {
    label: String,
    entries: Mutex<HashMap<K, V, S>>,
}

impl<K, V> Cache<K, V, RandomState>
where
    K: Hash + Eq,
    V: Clone,
{
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K, V, S> Cache<K, V, S>
where
    K: Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    /// Uses `hasher` instead of the default SipHash strategy for keys.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_config_and_hasher(CacheConfig::default(), hasher)
    }

    pub fn with_config_and_hasher(config: CacheConfig, hasher: S) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity_and_hasher(
                config.initial_capacity,
                hasher,
            )),
            label: config.label,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn save(&self, key: K, value: V) -> CacheResult<()> {
        let mut entries = self.lock();
        match entries.entry(key) {
            Entry::Occupied(_) => {
                tracing::warn!(cache = %self.label, "Cache smashing detected, refusing to overwrite entry");
                Err(CacheError::DuplicateKey {
                    cache: self.label.clone(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
                tracing::trace!(cache = %self.label, "Saved entry");
                Ok(())
            }
        }
    }

    pub fn restore(&self, key: &K) -> Option<V> {
        let entries = self.lock();
        let value = entries.get(key).cloned();
        tracing::trace!(cache = %self.label, hit = value.is_some(), "Restore");
        value
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(cache = %self.label, dropped, "Cleared cache");
    }

    // A panic can only happen inside a caller's Hash/Eq/Clone impl, before
    // the map is touched, so the guarded map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<K, V, S>> {
        self.entries.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!(cache = %self.label, "Recovering cache lock poisoned by a panicking thread");
            poisoned.into_inner()
        })
    }
}

impl<K, V> Default for Cache<K, V, RandomState>
where
    K: Hash + Eq,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> KeyedCache<K, V> for Cache<K, V, S>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    S: BuildHasher + Send + Sync,
{
    fn save(&self, key: K, value: V) -> CacheResult<()> {
        Cache::save(self, key, value)
    }

    fn restore(&self, key: &K) -> Option<V> {
        Cache::restore(self, key)
    }

    fn clear(&self) {
        Cache::clear(self)
    }
}
