pub mod cache;
pub mod config;

pub use cache::*;
pub use config::*;
