//! Backend Module
//!
//! The key-value backing store contract consumed by the caches, plus an
//! in-process implementation with TTL expiration.

mod entry;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

pub use entry::{StoreEntry, StoredValue};
pub use memory::MemoryBackend;

// == Backing Store Contract ==
/// Operations the caches need from a key-value store.
///
/// Every method is a single round trip and is atomic on its own. Sequences
/// of calls are not. Expired keys behave exactly like absent keys.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Increments the integer under `key` and returns the new value.
    /// An absent key counts as 0.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Appends `value` to the list under `key`, returning the new length.
    async fn rpush(&self, key: &str, value: Vec<u8>) -> Result<usize>;

    /// Reads list elements `start..=stop`. Negative indices count from the end.
    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>>;

    /// Writes `value` with no expiration, dropping any previous TTL.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Writes `value` that expires after `ttl_secs` seconds.
    async fn set_ex(&self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<()>;

    /// Reads the value under `key`. `None` means absent, which is distinct
    /// from a stored empty value.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Removes every key.
    async fn flush_all(&self) -> Result<()>;
}

/// Owned handle to a backing store, injected into each component.
pub type SharedBackend = Arc<dyn KvBackend>;
