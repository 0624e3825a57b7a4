use crate::ports::{CacheError, KeyedCache};
use std::hash::Hash;
use std::sync::Arc;

/// Memoizes an expensive computation on top of a [`KeyedCache`].
///
/// Several threads may miss on the same key and compute it at the same time.
/// Only the first `save` lands; the losers restore the winner's value so
/// every caller ends up with the one value held by the cache.
pub struct MemoService<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    cache: Arc<dyn KeyedCache<K, V>>,
}

impl<K, V> MemoService<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(cache: Arc<dyn KeyedCache<K, V>>) -> Self {
        Self { cache }
    }

    pub fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some(value) = self.cache.restore(&key) {
            return value;
        }

        let value = compute(&key);
        self.store(key, value)
    }

    /// Like [`get_or_compute`](Self::get_or_compute), but a failed
    /// computation is handed back and nothing is cached.
    pub fn try_get_or_compute<F, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(value) = self.cache.restore(&key) {
            return Ok(value);
        }

        let value = compute(&key)?;
        Ok(self.store(key, value))
    }

    pub fn invalidate_all(&self) {
        self.cache.clear();
    }

    fn store(&self, key: K, value: V) -> V {
        match self.cache.save(key.clone(), value.clone()) {
            Ok(()) => value,
            Err(CacheError::DuplicateKey { cache }) => {
                tracing::debug!(cache = %cache, "Lost save race, restoring stored value");
                // The winner may already have been cleared again.
                self.cache.restore(&key).unwrap_or(value)
            }
        }
    }
}
