//! Bytecache - A lightweight in-memory key/value cache
//!
//! Bounds total memory by bytes rather than entry count and evicts
//! least-recently-used bindings under pressure. Keys and values are
//! opaque byte sequences.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, CacheStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
