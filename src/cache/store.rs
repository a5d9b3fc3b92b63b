//! Cache Store Module
//!
//! Stores payloads under random keys and reads them back with optional decoding.
//! Every `store` call is counted and recorded under [`STORE_OPERATION`].

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::SharedBackend;
use crate::cache::{decode, replay, Payload, Replay};
use crate::error::Result;
use crate::instrument::{instrument, Instrumented, Operation};

/// Identifier the `store` operation is counted and recorded under.
pub const STORE_OPERATION: &str = "Cache.store";

// == Store Operation ==
/// Writes a payload under a fresh UUID v4 key with no expiration.
struct StoreData {
    backend: SharedBackend,
}

#[async_trait]
impl Operation for StoreData {
    type Args = (Payload,);
    type Output = String;

    async fn call(&self, args: Self::Args) -> Result<String> {
        let (data,) = args;
        let key = Uuid::new_v4().to_string();
        self.backend.set(&key, data.to_bytes()).await?;
        Ok(key)
    }
}

// == Cache ==
/// Payload cache over an injected backing store.
pub struct Cache {
    backend: SharedBackend,
    store_op: Instrumented<StoreData>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache over `backend`. Existing data is left untouched.
    pub fn new(backend: SharedBackend) -> Self {
        let store_op = instrument(
            StoreData {
                backend: backend.clone(),
            },
            STORE_OPERATION,
            backend.clone(),
        );

        Self { backend, store_op }
    }

    /// Returns the backing store handle.
    pub fn backend(&self) -> &SharedBackend {
        &self.backend
    }

    // == Reset ==
    /// Flushes every key in the backing store, including call history.
    pub async fn reset(&self) -> Result<()> {
        self.backend.flush_all().await?;
        info!("Backing store flushed");
        Ok(())
    }

    // == Store ==
    /// Stores `data` under a newly generated key and returns the key.
    pub async fn store(&self, data: impl Into<Payload>) -> Result<String> {
        let key = self.store_op.call((data.into(),)).await?;
        debug!("Stored payload under {}", key);
        Ok(key)
    }

    // == Get ==
    /// Looks up `key` and applies `decode` to the stored bytes.
    ///
    /// Returns `Ok(None)` when the key is absent. A present empty value is
    /// passed to `decode` like any other value.
    pub async fn get<T, D>(&self, key: &str, decode: D) -> Result<Option<T>>
    where
        D: FnOnce(&[u8]) -> Result<T>,
    {
        match self.backend.get(key).await? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Returns the raw stored bytes.
    pub async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.get(key, decode::raw).await
    }

    /// Returns the stored value decoded as UTF-8.
    pub async fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get(key, decode::utf8).await
    }

    /// Returns the stored value decoded as an integer.
    pub async fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get(key, decode::integer).await
    }

    // == History ==
    /// Loads the call history of `store`.
    pub async fn replay(&self) -> Result<Replay> {
        replay(self.backend.as_ref(), STORE_OPERATION).await
    }
}
