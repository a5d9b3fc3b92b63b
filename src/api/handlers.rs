//! API Handlers
//!
//! HTTP request handlers for each call cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::backend::SharedBackend;
use crate::cache::{replay, Cache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    CountResponse, Decoding, GetQuery, GetResponse, HealthResponse, PageQuery, StatsResponse,
    StoreRequest, StoreResponse,
};
use crate::web::{PageCache, PageFetcher};

/// Application state shared across all handlers.
///
/// Both caches share one backing store handle.
#[derive(Clone)]
pub struct AppState {
    /// Payload cache with instrumented `store`
    pub cache: Arc<Cache>,
    /// Fetch-through page cache
    pub pages: Arc<PageCache>,
}

impl AppState {
    /// Creates a new AppState from already built caches.
    pub fn new(cache: Cache, pages: PageCache) -> Self {
        Self {
            cache: Arc::new(cache),
            pages: Arc::new(pages),
        }
    }

    /// Builds both caches over `backend` using the configured page TTL.
    pub fn from_config(
        config: &Config,
        backend: SharedBackend,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        let cache = Cache::new(backend.clone());
        let pages = PageCache::new(backend, fetcher, config.page_ttl);
        Self::new(cache, pages)
    }
}

/// Handler for PUT /store
///
/// Stores the payload under a fresh key and returns the key.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    let key = state.cache.store(req.data).await?;
    Ok(Json(StoreResponse::new(key)))
}

/// Handler for GET /get/:key
///
/// Reads a stored value, decoded according to `?as=str|int|raw`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<GetQuery>,
) -> Result<Json<GetResponse>> {
    let value: Option<Value> = match query.decoding {
        Decoding::Str => state.cache.get_str(&key).await?.map(Value::from),
        Decoding::Int => state.cache.get_int(&key).await?.map(Value::from),
        Decoding::Raw => state.cache.get_raw(&key).await?.map(Value::from),
    };

    let value = value.ok_or_else(|| CacheError::NotFound(key.clone()))?;
    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /replay/:operation
///
/// Returns the plain-text call history report of an instrumented operation.
pub async fn replay_handler(
    State(state): State<AppState>,
    Path(operation): Path<String>,
) -> Result<String> {
    let report = replay(state.cache.backend().as_ref(), &operation).await?;
    Ok(report.to_string())
}

/// Handler for GET /page?url=...
///
/// Returns the page body, served from the page cache when fresh.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<String> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.pages.get_page(&query.url).await
}

/// Handler for GET /count?url=...
///
/// Returns how many times a page was requested.
pub async fn count_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CountResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let count = state.pages.access_count(&query.url).await?;
    Ok(Json(CountResponse::new(query.url, count)))
}

/// Handler for GET /stats
///
/// Returns page cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(&state.pages.stats(), state.pages.ttl()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
