//! Error types for the cache crate
//!
//! Provides unified error handling using thiserror.
//!
//! The cache engine itself never signals through this type: a rejected
//! `set` is reported with a `bool` and a miss with `Option::None`,
//! because both are normal outcomes a caller is expected to check.
//! `CacheError` covers the configuration boundary, where bad input is
//! a genuine fault.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity setting could not be parsed as a non-negative byte count
    #[error("Invalid cache capacity: {0}")]
    InvalidCapacity(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
