//! Cache Module
//!
//! Provides a concurrent in-memory string cache with per-entry TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp, CacheEntry};
pub use stats::{CacheStats, StatsSnapshot};
pub use store::TtlCache;
