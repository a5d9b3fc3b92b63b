//! Call Cache - instrumented calls and memoized page fetches over a key-value store
//!
//! Counts and records calls to named operations, stores payloads under random
//! keys, and caches fetched pages with a fixed TTL.

pub mod api;
pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod instrument;
pub mod models;
pub mod tasks;
pub mod web;

pub use api::AppState;
pub use backend::{KvBackend, MemoryBackend, SharedBackend};
pub use cache::{Cache, Payload, Replay};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
pub use web::{HttpFetcher, PageCache, PageFetcher};
