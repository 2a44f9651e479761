//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Caller-visible error type for cache lookups.
///
/// Both variants are informational cache-miss conditions, not failures of the
/// cache itself: a failed `get` never leaves the cache in a broken state.
/// Writes have no defined failure mode in the current design.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The key was never declared at construction and never written
    #[error("No such key: {0}")]
    NoSuchKey(String),

    /// The key exists but its TTL has elapsed
    #[error("Value for key: '{0}' is expired")]
    ValueExpired(String),
}

impl CacheError {
    /// Returns the key the lookup failed on.
    pub fn key(&self) -> &str {
        match self {
            CacheError::NoSuchKey(key) | CacheError::ValueExpired(key) => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
