//! Memory Backend Module
//!
//! In-process backing store: a HashMap of entries behind a tokio RwLock.
//! Each trait method takes the lock once, which makes single operations atomic.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::backend::{KvBackend, StoreEntry, StoredValue};
use crate::error::{CacheError, Result};

// == Memory Backend ==
/// Cloneable handle to a shared in-memory key-value map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, StoreEntry>>>,
}

impl MemoryBackend {
    // == Constructor ==
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the backend holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Drops `key` if its entry has expired, so writers start from a clean slate.
fn purge_if_expired(entries: &mut HashMap<String, StoreEntry>, key: &str) {
    if entries.get(key).is_some_and(StoreEntry::is_expired) {
        entries.remove(key);
    }
}

/// Resolves Redis-style inclusive bounds against a list of `len` elements.
fn list_bounds(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || start >= len || start > stop {
        return None;
    }
    Some((start as usize, stop as usize))
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn incr(&self, key: &str) -> Result<i64> {
        let mut entries = self.entries.write().await;
        purge_if_expired(&mut entries, key);

        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| StoreEntry::persistent(b"0".to_vec()));

        let current = match &entry.value {
            StoredValue::Bytes(bytes) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| CacheError::WrongType(key.to_string()))?,
            StoredValue::List(_) => return Err(CacheError::WrongType(key.to_string())),
        };

        let next = current
            .checked_add(1)
            .ok_or_else(|| CacheError::WrongType(key.to_string()))?;
        entry.value = StoredValue::Bytes(next.to_string().into_bytes());
        Ok(next)
    }

    async fn rpush(&self, key: &str, value: Vec<u8>) -> Result<usize> {
        let mut entries = self.entries.write().await;
        purge_if_expired(&mut entries, key);

        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| StoreEntry::new(StoredValue::List(Vec::new()), None));

        match &mut entry.value {
            StoredValue::List(items) => {
                items.push(value);
                Ok(items.len())
            }
            StoredValue::Bytes(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>> {
        let entries = self.entries.read().await;

        match entries.get(key).filter(|entry| !entry.is_expired()) {
            None => Ok(Vec::new()),
            Some(StoreEntry {
                value: StoredValue::List(items),
                ..
            }) => Ok(list_bounds(items.len(), start, stop)
                .map(|(from, to)| items[from..=to].to_vec())
                .unwrap_or_default()),
            Some(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoreEntry::persistent(value));
        Ok(())
    }

    async fn set_ex(&self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<()> {
        if ttl_secs == 0 {
            return Err(CacheError::InvalidRequest(
                "TTL must be greater than zero".to_string(),
            ));
        }

        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            StoreEntry::new(StoredValue::Bytes(value), Some(ttl_secs)),
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().await;

        match entries.get(key).filter(|entry| !entry.is_expired()) {
            None => Ok(None),
            Some(StoreEntry {
                value: StoredValue::Bytes(bytes),
                ..
            }) => Ok(Some(bytes.clone())),
            Some(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    async fn flush_all(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        debug!("Flushed {} keys from memory backend", dropped);
        Ok(())
    }
}
