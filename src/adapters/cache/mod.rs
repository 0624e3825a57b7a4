pub mod mutex_cache;

pub use mutex_cache::*;
