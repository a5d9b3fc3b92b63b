//! API Module
//!
//! HTTP handlers and routing for the call cache REST API.
//!
//! # Endpoints
//! - `PUT /store` - Store a payload under a generated key
//! - `GET /get/:key` - Retrieve a stored value
//! - `GET /replay/:operation` - Call history of an instrumented operation
//! - `GET /page?url=` - Fetch a page through the page cache
//! - `GET /count?url=` - Page access counter
//! - `GET /stats` - Page cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
