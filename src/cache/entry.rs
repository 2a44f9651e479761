//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.
//! Each entry carries its own reader-writer lock, so updating one key never
//! contends with readers or writers of any other key.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::RwLock;

// == Entry State ==
/// Value and deadline for one key, always read and written as a pair.
#[derive(Debug, Default)]
struct EntryState {
    /// The stored value
    value: String,
    /// Expiration timestamp (Unix seconds); 0 = never written
    expires_at: u64,
}

impl EntryState {
    /// Checks whether the deadline has passed.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// strictly greater than `expires_at` — at `now == expires_at` the entry
    /// is still fresh. A never-written entry has `expires_at == 0`, which the
    /// same comparison reports as already expired with no special casing.
    fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Seconds until the deadline, saturating at zero once passed.
    fn ttl_remaining(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp())
    }
}

// == Cache Entry ==
/// A single cache slot: one value, its expiration deadline, and its own lock.
///
/// The lock is scoped to this entry only and is never held across operations
/// on other entries. Value and deadline are updated together under the
/// exclusive lock, so a reader never observes a value paired with a mismatched
/// deadline.
#[derive(Debug, Default)]
pub struct CacheEntry {
    state: RwLock<EntryState>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an empty, already-expired entry (zero deadline).
    pub fn new() -> Self {
        Self::default()
    }

    // == Is Expired ==
    /// Checks if the entry has expired, taking the entry's shared lock.
    pub fn is_expired(&self) -> bool {
        self.state.read().is_expired()
    }

    // == Update ==
    /// Replaces the value and resets the deadline to `now + ttl` seconds.
    ///
    /// Takes the entry's exclusive lock; the previous value/deadline pair is
    /// discarded atomically with no intermediate state observable. This
    /// operation has no failure mode.
    pub fn update(&self, value: String, ttl: u64) {
        let mut state = self.state.write();
        state.value = value;
        state.expires_at = current_timestamp() + ttl;
    }

    // == Read ==
    /// Returns the current value, or `None` if the entry has expired.
    ///
    /// The staleness check and the value read happen under a single shared
    /// lock acquisition, so the returned value always belonged to a deadline
    /// that was live at the moment of the check.
    pub fn read(&self) -> Option<String> {
        let state = self.state.read();
        if state.is_expired() {
            None
        } else {
            Some(state.value.clone())
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in seconds, 0 if expired or never written.
    pub fn ttl_remaining(&self) -> u64 {
        self.state.read().ttl_remaining()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_starts_expired() {
        let entry = CacheEntry::new();

        assert!(entry.is_expired());
        assert!(entry.read().is_none());
        assert_eq!(entry.ttl_remaining(), 0);
    }

    #[test]
    fn test_update_then_read() {
        let entry = CacheEntry::new();
        entry.update("some val".to_string(), 31);

        assert!(!entry.is_expired());
        assert_eq!(entry.read().as_deref(), Some("some val"));
    }

    #[test]
    fn test_update_zero_ttl_still_fresh_at_boundary() {
        // With ttl = 0 the deadline lands on the current second; strict
        // greater-than semantics mean the entry is not yet expired.
        let before = current_timestamp();
        let entry = CacheEntry::new();
        entry.update("some val".to_string(), 0);

        let state = entry.state.read();
        assert_eq!(state.value, "some val");
        assert!(state.expires_at >= before);
        assert!(state.expires_at <= before + 1);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let fresh = EntryState {
            value: "test".to_string(),
            expires_at: current_timestamp(),
        };
        assert!(!fresh.is_expired(), "entry must be fresh at now == expires_at");

        let stale = EntryState {
            value: "test".to_string(),
            expires_at: current_timestamp() - 1,
        };
        assert!(stale.is_expired(), "entry must be expired one second past the deadline");
    }

    #[test]
    fn test_update_replaces_pair() {
        let entry = CacheEntry::new();
        entry.update("v1".to_string(), 10);
        entry.update("v2".to_string(), 60);

        assert_eq!(entry.read().as_deref(), Some("v2"));
        let remaining = entry.ttl_remaining();
        assert!(remaining > 10 && remaining <= 60);
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new();
        entry.update("test_value".to_string(), 10);

        let remaining = entry.ttl_remaining();
        assert!(remaining <= 10);
        assert!(remaining >= 9);
    }
}
