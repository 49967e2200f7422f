//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// Values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum total bytes the cache may hold (sum of key and value
    /// lengths over all live bindings)
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig with the given byte capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Creates a new CacheConfig by loading values from environment
    /// variables.
    ///
    /// An unset variable falls back to its default. A variable that is
    /// set but does not parse as a non-negative integer is rejected
    /// with [`CacheError::InvalidCapacity`] rather than silently
    /// replaced — a negative or malformed capacity is a configuration
    /// fault the operator should see.
    ///
    /// # Environment Variables
    /// - `BYTECACHE_CAPACITY` - Maximum total bytes (default: 1 MiB)
    pub fn from_env() -> Result<Self> {
        let capacity = match env::var("BYTECACHE_CAPACITY") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| CacheError::InvalidCapacity(raw))?,
            Err(_) => DEFAULT_CAPACITY,
        };

        Ok(Self { capacity })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_config_new() {
        let config = CacheConfig::new(4096);
        assert_eq!(config.capacity, 4096);
    }

    // Single test so the process-global env var is not raced by
    // parallel test threads.
    #[test]
    fn test_config_from_env() {
        env::remove_var("BYTECACHE_CAPACITY");
        let config = CacheConfig::from_env().unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);

        env::set_var("BYTECACHE_CAPACITY", "2048");
        let config = CacheConfig::from_env().unwrap();
        assert_eq!(config.capacity, 2048);

        env::set_var("BYTECACHE_CAPACITY", "-1");
        let result = CacheConfig::from_env();
        assert!(matches!(result, Err(CacheError::InvalidCapacity(_))));

        env::set_var("BYTECACHE_CAPACITY", "lots");
        let result = CacheConfig::from_env();
        assert!(matches!(result, Err(CacheError::InvalidCapacity(_))));

        env::remove_var("BYTECACHE_CAPACITY");
    }
}
