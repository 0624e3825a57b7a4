//! Thread-safe memo cache.
//!
//! A [`Cache`] maps keys to values behind a single lock and offers exactly
//! three operations: `save`, `restore` and `clear`. Saving a key twice is
//! reported as [`CacheError::DuplicateKey`] ("cache smashing"); a miss on
//! `restore` is just `None`. [`MemoService`] wraps the usual
//! restore-compute-save dance for callers memoizing expensive work.

pub mod adapters;
pub mod application;
pub mod ports;

pub use adapters::cache::Cache;
pub use application::MemoService;
pub use ports::{CacheConfig, CacheError, CacheResult, ConfigError, ConfigResult, KeyedCache};
