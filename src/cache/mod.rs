//! Cache Module
//!
//! Provides in-memory key/value caching bounded by total bytes, with
//! LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{NodeId, RecencyList};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default byte capacity when none is configured
pub const DEFAULT_CAPACITY: usize = 1024 * 1024; // 1 MiB
