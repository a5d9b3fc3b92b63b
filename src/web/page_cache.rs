//! Page Cache Module
//!
//! Memoizes page fetches in the backing store for a fixed TTL and counts
//! every access per URL.

use std::sync::Arc;

use tracing::debug;

use crate::backend::SharedBackend;
use crate::cache::decode;
use crate::error::Result;
use crate::web::{PageFetcher, PageStats, StatsRecorder};

/// TTL in seconds applied to cached pages unless configured otherwise.
pub const DEFAULT_PAGE_TTL: u64 = 10;

/// Key holding the access counter for `url`.
pub fn count_key(url: &str) -> String {
    format!("count:{}", url)
}

/// Key holding the cached body for `url`.
pub fn cached_key(url: &str) -> String {
    format!("cached:{}", url)
}

// == Page Cache ==
/// Fetch-through cache for page bodies.
pub struct PageCache {
    backend: SharedBackend,
    fetcher: Arc<dyn PageFetcher>,
    ttl: u64,
    stats: StatsRecorder,
}

impl PageCache {
    // == Constructor ==
    /// Creates a page cache that keeps bodies for `ttl` seconds.
    pub fn new(backend: SharedBackend, fetcher: Arc<dyn PageFetcher>, ttl: u64) -> Self {
        Self {
            backend,
            fetcher,
            ttl,
            stats: StatsRecorder::new(),
        }
    }

    /// Returns the TTL in seconds applied to fetched pages.
    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    // == Get Page ==
    /// Returns the body of `url`, from the cache when a live copy exists.
    ///
    /// The access counter is bumped on every call, hit or miss. A cached
    /// empty body counts as a hit.
    pub async fn get_page(&self, url: &str) -> Result<String> {
        self.backend.incr(&count_key(url)).await?;

        let key = cached_key(url);
        if let Some(bytes) = self.backend.get(&key).await? {
            self.stats.record_hit();
            debug!("Page cache hit for {}", url);
            return decode::utf8(&bytes);
        }

        self.stats.record_miss();
        debug!("Page cache miss for {}", url);

        let body = self.fetcher.fetch(url).await?;
        self.backend
            .set_ex(&key, body.as_bytes().to_vec(), self.ttl)
            .await?;
        Ok(body)
    }

    // == Access Count ==
    /// Returns how many times `url` has been requested (0 if never).
    pub async fn access_count(&self, url: &str) -> Result<i64> {
        match self.backend.get(&count_key(url)).await? {
            Some(bytes) => decode::integer(&bytes),
            None => Ok(0),
        }
    }

    // == Stats ==
    /// Returns hit/miss counters since construction.
    pub fn stats(&self) -> PageStats {
        self.stats.snapshot()
    }
}
