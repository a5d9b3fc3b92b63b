//! Store Entry Module
//!
//! Defines the structure for individual backing store entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Value ==
/// Value held under a key: either a plain byte string or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    /// Plain value written by `set`, `set_ex` or `incr`
    Bytes(Vec<u8>),
    /// Ordered list written by `rpush`
    List(Vec<Vec<u8>>),
}

// == Store Entry ==
/// Represents a single entry with value and expiration metadata.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored value
    pub value: StoredValue,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates a new entry with an optional TTL in seconds.
    ///
    /// TTLs too large to represent saturate to the far future.
    pub fn new(value: StoredValue, ttl_seconds: Option<u64>) -> Self {
        let expires_at = ttl_seconds
            .map(|ttl| current_timestamp_ms().saturating_add(ttl.saturating_mul(1000)));
        Self { value, expires_at }
    }

    /// Creates a plain byte entry that never expires.
    pub fn persistent(bytes: Vec<u8>) -> Self {
        Self::new(StoredValue::Bytes(bytes), None)
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time. Entries without a TTL never expire.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
