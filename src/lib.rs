//! tscache - a thread-safe in-memory string cache
//!
//! Maps string keys to string values where each entry carries an independent
//! expiration deadline. Any number of readers and writers may operate on one
//! cache concurrently with no external synchronization: the map's key set sits
//! behind a shared reader-writer lock, and every entry carries its own lock,
//! so traffic on different keys never contends.
//!
//! Expired entries are detected on read and never returned, but they are not
//! proactively removed; there is no background eviction.
//!
//! # Example
//!
//! ```
//! use tscache::{CacheError, TtlCache};
//!
//! let cache = TtlCache::new(300, &[]);
//! cache.set("session", "abc123".to_string(), 0).unwrap(); // 0 = default TTL
//! assert_eq!(cache.get("session").unwrap(), "abc123");
//! assert!(matches!(cache.get("other"), Err(CacheError::NoSuchKey(_))));
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheEntry, StatsSnapshot, TtlCache};
pub use config::Config;
pub use error::{CacheError, Result};
