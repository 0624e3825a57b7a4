pub mod memo_service;

pub use memo_service::*;
