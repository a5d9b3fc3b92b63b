//! Request and Response models for the call cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{Decoding, GetQuery, PageQuery, StoreRequest};
pub use responses::{CountResponse, GetResponse, HealthResponse, StatsResponse, StoreResponse};
