use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A second `save` for a key that is already present.
    #[error("Cache smashing detected in '{cache}': key is already present")]
    DuplicateKey { cache: String },
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Keyed memo store seen by the computation layer.
///
/// Only three operations exist. There is deliberately no way to iterate,
/// remove a single entry or overwrite one: a key goes from absent to present
/// through `save` and back to absent only when everything is cleared.
pub trait KeyedCache<K, V>: Send + Sync
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Stores `value` under `key`, failing with [`CacheError::DuplicateKey`]
    /// if the key is already present. State is untouched on failure.
    fn save(&self, key: K, value: V) -> CacheResult<()>;

    /// Returns a clone of the value stored under `key`, or `None` on a miss.
    fn restore(&self, key: &K) -> Option<V>;

    /// Drops every entry at once.
    fn clear(&self);
}
