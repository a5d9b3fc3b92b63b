//! Web Module
//!
//! Page fetching and the TTL-bounded page cache in front of it.

mod fetcher;
mod page_cache;
mod stats;

pub use fetcher::{HttpFetcher, PageFetcher};
pub use page_cache::{cached_key, count_key, PageCache, DEFAULT_PAGE_TTL};
pub use stats::{PageStats, StatsRecorder};
